// SPDX-License-Identifier: AGPL-3.0-only

//! Equinox and solstice instants.
//!
//! This crate computes the exact UTC moment of the four seasonal markers
//! (the two equinoxes and two solstices) for any year between 1000 and
//! 3000, following the algorithms of Meeus, *Astronomical Algorithms*:
//!
//! | Stage | What it does | Where |
//! |-------|--------------|-------|
//! | Mean estimate | degree-4 polynomial per season (ch. 27) | [`seasonal_jde`] |
//! | Periodic correction | 24 damped cosine perturbation terms (ch. 27) | [`seasonal_jde`] |
//! | Calendar conversion | Julian Day → civil date-time (ch. 7) | [`CalendarDateTime`] |
//! | ΔT correction | dynamical time → UTC (ch. 10) | [`delta_t_seconds`] |
//!
//! Everything is a pure function over `const` coefficient tables: no state,
//! no I/O, safe to call from any number of threads concurrently.
//!
//! # Quick example
//! ```rust
//! use equisol::{calculate, Season};
//!
//! let spring = calculate(2013, Season::Spring)?;
//! println!("March equinox 2013: {spring}");
//! # Ok::<(), equisol::Error>(())
//! ```
//!
//! # Accuracy
//!
//! The mean polynomial is accurate to within minutes over the supported
//! range; the periodic correction brings the event time to well under a
//! minute, and the result carries the millisecond-granular ΔT correction.
//! Dates before the Gregorian reform come out on the Julian calendar, per
//! the classical conversion.

mod calendar;
mod delta_t;
mod error;
mod event;
mod jde;
mod season;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::CalendarDateTime;
pub use delta_t::{delta_t_seconds, dynamical_to_utc};
pub use error::Error;
pub use event::{calculate, season_span, seasonal_jde, SeasonSpan};
pub use jde::JulianEphemerisDay;
pub use season::Season;
