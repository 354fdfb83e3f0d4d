// SPDX-License-Identifier: AGPL-3.0-only

//! # ΔT (Delta T) — TDT↔UTC Correction Layer
//!
//! This module implements the piecewise ΔT model of Meeus ch. 10:
//!
//! * **1620–2002**: biennial empirical table (seconds); odd years take the
//!   arithmetic mean of the two adjacent even-year entries.
//! * **Years < 948**: quadratic `2177 + 497 t + 44.1 t²`.
//! * **Everything else** (948–1619 and 2003+): quadratic
//!   `102 + 102 t + 25.3 t²`, with a linear `0.37 (year − 2100)` term for
//!   years in [2000, 2100] that keeps the extrapolation continuous with the
//!   table's last entries.
//!
//! `t` is centuries since 2000.0.  The table-range check runs *first*, so
//! for 2000–2002 the tabulated NASA values win over the polynomial.  Keep
//! that precedence: the reference outputs depend on it.
//!
//! [`dynamical_to_utc`] applies the correction at millisecond granularity:
//! the dynamical-time calendar tuple is projected onto the Unix millisecond
//! axis, `ΔT·1000` ms are subtracted, and the offset converted back.  This
//! is where sub-second precision re-enters the pipeline after the calendar
//! stage truncated it.

use crate::calendar::CalendarDateTime;
use chrono::{DateTime, Utc};
use qtty::Seconds;

/// First year covered by the biennial table.
const TABLE_FIRST_YEAR: i32 = 1620;

/// Last year covered by the biennial table.
const TABLE_LAST_YEAR: i32 = 2002;

/// Number of tabulated biennial entries.
const TERMS: usize = 192;

/// Biennial ΔT table, 1620–2002 (seconds), Meeus ch. 10; the 2000–2002
/// entries are the NASA-published values.
#[rustfmt::skip]
const DELTA_T: [Seconds; TERMS] = qtty::qtty_vec!(
    Seconds;
    /*1620*/ 121.0, 112.0, 103.0,  95.0,  88.0,   82.0,  77.0,  72.0,  68.0,  63.0,
    /*1640*/  60.0,  56.0,  53.0,  51.0,  48.0,   46.0,  44.0,  42.0,  40.0,  38.0,
    /*1660*/  35.0,  33.0,  31.0,  29.0,  26.0,   24.0,  22.0,  20.0,  18.0,  16.0,
    /*1680*/  14.0,  12.0,  11.0,  10.0,   9.0,    8.0,   7.0,   7.0,   7.0,   7.0,
    /*1700*/   7.0,   7.0,   8.0,   8.0,   9.0,    9.0,   9.0,   9.0,   9.0,  10.0,
    /*1720*/  10.0,  10.0,  10.0,  10.0,  10.0,   10.0,  10.0,  11.0,  11.0,  11.0,
    /*1740*/  11.0,  11.0,  12.0,  12.0,  12.0,   12.0,  13.0,  13.0,  13.0,  14.0,
    /*1760*/  14.0,  14.0,  14.0,  15.0,  15.0,   15.0,  15.0,  15.0,  16.0,  16.0,
    /*1780*/  16.0,  16.0,  16.0,  16.0,  16.0,   16.0,  15.0,  15.0,  14.0,  13.0,
    /*1800*/  13.1,  12.5,  12.2,  12.0,  12.0,   12.0,  12.0,  12.0,  12.0,  11.9,
    /*1820*/  11.6,  11.0,  10.2,   9.2,   8.2,    7.1,   6.2,   5.6,   5.4,   5.3,
    /*1840*/   5.4,   5.6,   5.9,   6.2,   6.5,    6.8,   7.1,   7.3,   7.5,   7.6,
    /*1860*/   7.7,   7.3,   6.2,   5.2,   2.7,    1.4,  -1.2,  -2.8,  -3.8,  -4.8,
    /*1880*/  -5.5,  -5.3,  -5.6,  -5.7,  -5.9,   -6.0,  -6.3,  -6.5,  -6.2,  -4.7,
    /*1900*/  -2.8,  -0.1,   2.6,   5.3,   7.7,   10.4,  13.3,  16.0,  18.2,  20.2,
    /*1920*/  21.1,  22.4,  23.5,  23.8,  24.3,   24.0,  23.9,  23.9,  23.7,  24.0,
    /*1940*/  24.3,  25.3,  26.2,  27.3,  28.2,   29.1,  30.0,  30.7,  31.4,  32.2,
    /*1960*/  33.1,  34.0,  35.0,  36.5,  38.3,   40.2,  42.2,  44.5,  46.5,  48.5,
    /*1980*/  50.5,  52.5,  53.8,  54.9,  55.8,   56.9,  58.3,  60.0,  61.6,  63.0,
    /*2000*/  63.8,  64.3,
);

/// Returns **ΔT = TDT − UTC** in seconds for a calendar year.
pub fn delta_t_seconds(year: i32) -> Seconds {
    // Centuries from the epoch 2000.0.
    let t = (year as f64 - 2000.0) / 100.0;

    if (TABLE_FIRST_YEAR..=TABLE_LAST_YEAR).contains(&year) {
        let i = (year - TABLE_FIRST_YEAR) as usize;
        if year % 2 != 0 {
            // Odd year: mean of the two neighbouring biennial entries.
            (DELTA_T[(i - 1) / 2] + DELTA_T[(i + 1) / 2]) * 0.5
        } else {
            DELTA_T[i / 2]
        }
    } else if year < 948 {
        Seconds::new(2_177.0 + 497.0 * t + 44.1 * t * t)
    } else {
        // 948–1619 and 2003 onwards.  The chain is exhaustive by
        // construction, so no fallthrough case exists.
        let mut dt = 102.0 + 102.0 * t + 25.3 * t * t;
        if (2000..=2100).contains(&year) {
            // Avoids a discontinuity against the 2002 table entry.
            dt += 0.37 * (year as f64 - 2100.0);
        }
        Seconds::new(dt)
    }
}

/// Correct a dynamical-time (TDT) calendar tuple to a UTC instant.
///
/// Returns `None` if the adjusted instant is outside chrono's representable
/// range, which no supported year can produce.
pub fn dynamical_to_utc(tdt: &CalendarDateTime) -> Option<DateTime<Utc>> {
    let delta_t = delta_t_seconds(tdt.year);
    let tdt_millis = tdt.timestamp_millis()? as f64;
    let utc_millis = tdt_millis - delta_t.value() * 1_000.0;
    DateTime::from_timestamp_millis(utc_millis.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_years_read_the_table_directly() {
        assert_eq!(delta_t_seconds(1620), Seconds::new(121.0));
        assert_eq!(delta_t_seconds(1950), Seconds::new(29.1));
        assert_eq!(delta_t_seconds(2002), Seconds::new(64.3));
    }

    #[test]
    fn odd_years_interpolate_between_neighbours() {
        // 1621 sits between 121 and 112.
        assert!((delta_t_seconds(1621) - Seconds::new(116.5)).abs() < Seconds::new(1e-9));
        // Exhaustive over the whole table interior.
        for year in (1621..=2001).step_by(2) {
            let mean = (delta_t_seconds(year - 1) + delta_t_seconds(year + 1)) * 0.5;
            assert!(
                (delta_t_seconds(year) - mean).abs() < Seconds::new(1e-9),
                "interpolation off at {year}"
            );
        }
    }

    #[test]
    fn table_takes_precedence_over_polynomial() {
        // The 2000 polynomial (with the discontinuity term) would give
        // ~65 s; the tabulated NASA value is 63.8 s.
        assert_eq!(delta_t_seconds(2000), Seconds::new(63.8));
    }

    #[test]
    fn ancient_quadratic() {
        // Year 900: t = -11, ΔT = 2177 - 5467 + 5336.1 = 2046.1 s.
        assert!((delta_t_seconds(900) - Seconds::new(2_046.1)).abs() < Seconds::new(1e-9));
    }

    #[test]
    fn pre_table_medieval_years_use_modern_polynomial() {
        // 1600 < table start, >= 948: t = -4, ΔT = 102 - 408 + 404.8.
        assert!((delta_t_seconds(1600) - Seconds::new(98.8)).abs() < Seconds::new(1e-9));
    }

    #[test]
    fn post_table_extrapolation_2013() {
        // t = 0.13: 102 + 13.26 + 0.42757 - 32.19 = 83.49757 s.
        assert!((delta_t_seconds(2013) - Seconds::new(83.49757)).abs() < Seconds::new(1e-6));
    }

    #[test]
    fn step_across_table_edge_is_bounded() {
        // Without the 0.37 (year - 2100) term the 2002→2003 step would be
        // ~41 s; with it the step stays under 5 s.
        let step = (delta_t_seconds(2003) - delta_t_seconds(2002)).abs();
        assert!(step < Seconds::new(5.0), "ΔT step 2002→2003 = {step}");
    }

    #[test]
    fn correction_subtracts_whole_and_fractional_seconds() {
        let tdt = CalendarDateTime {
            year: 2000,
            month: 1,
            day: 1,
            hour: 12,
            minute: 0,
            second: 0,
        };
        // ΔT(2000) = 63.8 s from the table.
        let utc = dynamical_to_utc(&tdt).expect("representable");
        assert_eq!(utc.timestamp_millis(), 946_728_000_000 - 63_800);
    }
}
