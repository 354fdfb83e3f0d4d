// SPDX-License-Identifier: AGPL-3.0-only

//! The four seasonal markers.
//!
//! [`Season`] is a pure tag: it carries no data and exists only to select
//! the per-season polynomial coefficients of the mean-event estimate.
//! Variants are ordered by calendar occurrence within a (northern) year,
//! so deriving `Ord` gives Spring < Summer < Autumn < Winter.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A seasonal marker: the equinox or solstice that begins the season.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Season {
    /// March equinox.
    Spring,
    /// June solstice.
    Summer,
    /// September equinox.
    Autumn,
    /// December solstice.
    Winter,
}

impl Season {
    /// All four markers in calendar order.
    pub const ALL: [Season; 4] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    /// The marker that follows this one, wrapping Winter back to Spring
    /// (of the *next* year — the year bump is the caller's concern).
    #[inline]
    pub const fn next(self) -> Season {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Autumn,
            Season::Autumn => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }

    /// Human-readable name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
