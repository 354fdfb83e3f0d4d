// SPDX-License-Identifier: AGPL-3.0-only

//! Library error type.

/// Errors produced by the seasonal-marker computation.
///
/// The season argument cannot fail: [`Season`](crate::Season) is a closed
/// enum, so an out-of-enum tag is unrepresentable rather than a runtime
/// error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested year is outside the range the polynomial fits are
    /// validated for.
    #[error("year {0} is outside the supported range 1000..=3000")]
    YearOutOfRange(i32),

    /// The corrected instant fell outside chrono's representable range.
    ///
    /// Unreachable for any year in the supported range; kept so the
    /// conversion boundary needs no panic path.
    #[error("UTC conversion failed: instant not representable")]
    UtcConversionFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_year() {
        let msg = Error::YearOutOfRange(999).to_string();
        assert!(msg.contains("999"));
        assert!(msg.contains("1000..=3000"));
    }
}
