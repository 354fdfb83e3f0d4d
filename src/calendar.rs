// SPDX-License-Identifier: AGPL-3.0-only

//! Julian Day → calendar conversion (Meeus ch. 7).
//!
//! [`CalendarDateTime`] is a plain value tuple of civil date-time fields.
//! [`CalendarDateTime::from_julian_day`] implements the classical conversion
//! with the Gregorian-cutover branch at `z = 2 299 161`: earlier day numbers
//! resolve against the Julian calendar, later ones against the Gregorian.
//! The fractional day is expanded to hour/minute/second by successive
//! flooring, so anything below one second is truncated here — sub-second
//! precision is reintroduced later by the millisecond-level ΔT correction.

use chrono::{DateTime, NaiveDate, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// First Julian Day number of the Gregorian calendar (1582-10-15).
const GREGORIAN_START_JD: f64 = 2_299_161.0;

/// A civil calendar date-time, truncated to whole seconds.
///
/// This is an inert value type: nothing validates the fields against a
/// calendar because [`from_julian_day`](Self::from_julian_day) can only
/// produce consistent tuples.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CalendarDateTime {
    /// Convert a Julian Day number (fractional days allowed) to calendar
    /// fields.
    ///
    /// Total over all finite `jd`; the mapping is closed-form and never
    /// fails.  Dates before the Gregorian reform come out in the Julian
    /// calendar, per the cutover branch.
    pub fn from_julian_day(jd: f64) -> Self {
        let z = (jd + 0.5).floor();
        let f = jd + 0.5 - z;

        let a = if z < GREGORIAN_START_JD {
            z
        } else {
            let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        };

        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        // Day of month, still carrying the time of day as a fraction.
        let dt = b - d - (30.6001 * e).floor() + f;
        let month = e - if e < 13.5 { 1.0 } else { 13.0 };
        let year = c - if month > 2.5 { 4716.0 } else { 4715.0 };

        let day = dt.floor();
        let h = 24.0 * (dt - day);
        let hour = h.floor();
        let m = 60.0 * (h - hour);
        let minute = m.floor();
        let second = (60.0 * (m - minute)).floor();

        Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
            hour: hour as u32,
            minute: minute as u32,
            second: second as u32,
        }
    }

    /// Milliseconds since the Unix epoch on the proleptic Gregorian axis.
    ///
    /// Returns `None` only when the fields fall outside chrono's
    /// representable range, which cannot happen for the year span this
    /// crate computes over.
    pub fn timestamp_millis(&self) -> Option<i64> {
        Some(self.to_datetime()?.timestamp_millis())
    }

    fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day)?;
        let dt = date.and_hms_opt(self.hour, self.minute, self.second)?;
        Some(dt.and_utc())
    }
}

impl std::fmt::Display for CalendarDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        let cal = CalendarDateTime::from_julian_day(2_451_545.0);
        assert_eq!(
            cal,
            CalendarDateTime {
                year: 2000,
                month: 1,
                day: 1,
                hour: 12,
                minute: 0,
                second: 0,
            }
        );
    }

    #[test]
    fn quarter_day_fraction() {
        // JD 2451544.75 = 2000-01-01 06:00:00 (exact binary fraction).
        let cal = CalendarDateTime::from_julian_day(2_451_544.75);
        assert_eq!((cal.year, cal.month, cal.day), (2000, 1, 1));
        assert_eq!((cal.hour, cal.minute, cal.second), (6, 0, 0));
    }

    #[test]
    fn sputnik_launch_date() {
        // Meeus ch. 7: JD 2436116.5 begins 1957 October 5 (Gregorian branch).
        let cal = CalendarDateTime::from_julian_day(2_436_116.5);
        assert_eq!((cal.year, cal.month, cal.day), (1957, 10, 5));
        assert_eq!((cal.hour, cal.minute, cal.second), (0, 0, 0));
    }

    #[test]
    fn julian_branch_year_333() {
        // Meeus ch. 7: JD 1842713.0 = 333 January 27 at 12h (Julian calendar).
        let cal = CalendarDateTime::from_julian_day(1_842_713.0);
        assert_eq!((cal.year, cal.month, cal.day), (333, 1, 27));
        assert_eq!((cal.hour, cal.minute, cal.second), (12, 0, 0));
    }

    #[test]
    fn january_year_decrement_branch() {
        // A January date exercises the `month <= 2` year convention.
        let cal = CalendarDateTime::from_julian_day(2_451_549.5);
        assert_eq!((cal.year, cal.month, cal.day), (2000, 1, 6));
    }

    #[test]
    fn epoch_millis_at_j2000() {
        let cal = CalendarDateTime::from_julian_day(2_451_545.0);
        assert_eq!(cal.timestamp_millis(), Some(946_728_000_000));
    }

    #[test]
    fn display_is_iso_like() {
        let cal = CalendarDateTime::from_julian_day(2_451_545.0);
        assert_eq!(cal.to_string(), "2000-01-01 12:00:00");
    }
}
