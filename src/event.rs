// SPDX-License-Identifier: AGPL-3.0-only

//! Seasonal event instants (Meeus ch. 27).
//!
//! The computation is a short, strictly linear pipeline:
//!
//! 1. [`mean_jde`] — degree-4 polynomial fit of the mean event time, one
//!    coefficient set per season, valid for years 1000–3000.
//! 2. [`periodic_correction`] — 24 cosine perturbation terms, scaled by a
//!    solar-anomaly damping divisor, refining the mean JDE.
//! 3. Calendar conversion and ΔT correction (see [`crate::calendar`] and
//!    [`crate::delta_t`]).
//!
//! [`calculate`] runs the whole pipeline; [`seasonal_jde`] stops after the
//! refinement and returns the instant on the dynamical-time axis.

use crate::calendar::CalendarDateTime;
use crate::delta_t;
use crate::error::Error;
use crate::jde::JulianEphemerisDay;
use crate::season::Season;
use chrono::{DateTime, TimeDelta, Utc};
use qtty::Days;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Years the mean-event polynomials are validated for.
const MIN_YEAR: i32 = 1000;
const MAX_YEAR: i32 = 3000;

// Mean-event polynomial coefficients (Meeus table 27.B), one row per
// season, evaluated in y = (year - 2000) / 1000.
const SPRING_COEFFS: [f64; 5] = [2_451_623.809_84, 365_242.374_04, 0.05169, -0.00411, -0.00057];
const SUMMER_COEFFS: [f64; 5] = [2_451_716.567_67, 365_241.626_03, 0.00325, 0.00888, -0.00030];
const AUTUMN_COEFFS: [f64; 5] = [2_451_810.217_15, 365_242.017_67, -0.11575, 0.00337, 0.00078];
const WINTER_COEFFS: [f64; 5] = [2_451_900.059_52, 365_242.740_49, -0.06223, -0.00823, 0.00032];

// The 24 periodic terms (Meeus table 27.C): amplitude, phase (degrees),
// rate (degrees per Julian century), indexed in lockstep.
#[rustfmt::skip]
const AMPLITUDE: [f64; 24] = [
    485.0, 203.0, 199.0, 182.0, 156.0, 136.0,  77.0,  74.0,
     70.0,  58.0,  52.0,  50.0,  45.0,  44.0,  29.0,  18.0,
     17.0,  16.0,  14.0,  12.0,  12.0,  12.0,   9.0,   8.0,
];
#[rustfmt::skip]
const PHASE: [f64; 24] = [
    324.96, 337.23, 342.08,  27.85,  73.14, 171.52, 222.54, 296.72,
    243.58, 119.81, 297.17,  21.02, 247.54, 325.15,  60.93, 155.12,
    288.79, 198.04, 199.76,  95.39, 287.11, 320.81, 227.73,  15.45,
];
#[rustfmt::skip]
const RATE: [f64; 24] = [
      1_934.136,  32_964.467,      20.186, 445_267.112,  45_036.886,
     22_518.443,  65_928.934,   3_034.906,   9_037.513,  33_718.147,
        150.678,   2_281.226,  29_929.562,  31_555.956,   4_443.417,
     67_555.328,   4_562.452,  62_894.029,  31_436.921,  14_577.848,
     31_931.756,  34_777.259,   1_222.114,  16_859.074,
];

/// Mean (unperturbed) JDE of a seasonal event.
///
/// Accurate to within minutes across the supported range; the periodic
/// correction closes the gap.
fn mean_jde(year: i32, season: Season) -> JulianEphemerisDay {
    let y = (year as f64 - 2000.0) / 1000.0;
    let [a0, a1, a2, a3, a4] = match season {
        Season::Spring => SPRING_COEFFS,
        Season::Summer => SUMMER_COEFFS,
        Season::Autumn => AUTUMN_COEFFS,
        Season::Winter => WINTER_COEFFS,
    };
    JulianEphemerisDay::new(a0 + a1 * y + a2 * y.powi(2) + a3 * y.powi(3) + a4 * y.powi(4))
}

/// Sum of the 24 periodic perturbation terms at `t` Julian centuries
/// since J2000.0.
fn periodic_correction(t: f64) -> f64 {
    AMPLITUDE
        .iter()
        .zip(&PHASE)
        .zip(&RATE)
        .map(|((a, b), c)| a * (b + c * t).to_radians().cos())
        .sum()
}

/// The instant of a seasonal marker on the dynamical-time (TDT) axis.
///
/// Stages 1–2 of the pipeline: mean polynomial estimate plus the damped
/// periodic correction.  Fails only for years outside `1000..=3000`.
pub fn seasonal_jde(year: i32, season: Season) -> Result<JulianEphemerisDay, Error> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::YearOutOfRange(year));
    }

    let jde0 = mean_jde(year, season);
    let t = jde0.julian_centuries().value();
    let w = 35_999.373 * t - 2.47;
    let dl = 1.0 + 0.0334 * w.to_radians().cos() + 0.0007 * (2.0 * w).to_radians().cos();
    let s = periodic_correction(t);

    Ok(jde0 + Days::new(0.00001 * s / dl))
}

/// The UTC instant of a seasonal marker.
///
/// Runs the full pipeline: mean estimate, periodic correction, calendar
/// conversion, ΔT correction.  The result is millisecond-granular because
/// the ΔT subtraction operates on the millisecond axis; the sub-second part
/// of the raw event time was already truncated by the calendar stage.
///
/// # Errors
///
/// [`Error::YearOutOfRange`] for years outside `1000..=3000`, checked
/// before any computation.
pub fn calculate(year: i32, season: Season) -> Result<DateTime<Utc>, Error> {
    let jde = seasonal_jde(year, season)?;
    let tdt = CalendarDateTime::from_julian_day(jde.value());
    delta_t::dynamical_to_utc(&tdt).ok_or(Error::UtcConversionFailed)
}

/// A season as a half-open-in-spirit UTC interval: `start` is the marker
/// itself, `end` is one millisecond before the next marker.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeasonSpan {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SeasonSpan {
    /// Length of the span.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// The UTC interval covered by a season of a given year.
///
/// The end is derived from the *next* marker — Winter of year `Y` wraps to
/// Spring of `Y + 1` — minus one millisecond.  Consequently
/// `season_span(3000, Winter)` fails: its end would need year 3001.
pub fn season_span(year: i32, season: Season) -> Result<SeasonSpan, Error> {
    let start = calculate(year, season)?;
    let next_year = match season {
        Season::Winter => year + 1,
        _ => year,
    };
    let end = calculate(next_year, season.next())? - TimeDelta::milliseconds(1);
    Ok(SeasonSpan { start, end })
}
