// SPDX-License-Identifier: AGPL-3.0-only

//! Julian Ephemeris Day — the pipeline's intermediate currency.
//!
//! A [`JulianEphemerisDay`] is a continuous day count (with fractional part)
//! on the uniform dynamical-time (TDT) axis.  It wraps a single
//! [`Days`] quantity, so the type is `Copy` and layout-identical to an `f64`.
//!
//! Unlike a full multi-scale time library, this crate only ever moves in one
//! direction (JDE → calendar → UTC), so a single concrete type is enough —
//! no scale-marker machinery.

use qtty::*;
use std::ops::{Add, Sub};

/// An instant on the dynamical-time Julian day axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianEphemerisDay {
    quantity: Days,
}

impl JulianEphemerisDay {
    /// J2000.0 epoch: 2000-01-01T12:00:00 TT (JDE 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Create from a raw scalar (days since the Julian epoch).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Julian centuries since J2000.0 (the `T` of the Meeus formulas).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }
}

impl std::fmt::Display for JulianEphemerisDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JDE {}", self.quantity)
    }
}

impl Add<Days> for JulianEphemerisDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl Sub<Days> for JulianEphemerisDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl Sub for JulianEphemerisDay {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

impl From<Days> for JulianEphemerisDay {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianEphemerisDay> for Days {
    #[inline]
    fn from(jde: JulianEphemerisDay) -> Self {
        jde.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_centuries_are_zero() {
        let t = JulianEphemerisDay::J2000.julian_centuries();
        assert_eq!(t, Centuries::new(0.0));
    }

    #[test]
    fn one_century_after_j2000() {
        let jde = JulianEphemerisDay::J2000 + Days::new(36_525.0);
        assert!((jde.julian_centuries() - Centuries::new(1.0)).abs() < Centuries::new(1e-12));
    }

    #[test]
    fn difference_is_days() {
        let a = JulianEphemerisDay::new(2_451_545.0);
        let b = a + Days::new(1.5);
        assert_eq!(b - a, Days::new(1.5));
    }

    #[test]
    fn days_roundtrip() {
        let jde = JulianEphemerisDay::new(2_451_547.5);
        let days: Days = jde.into();
        assert_eq!(days, Days::new(2_451_547.5));
        assert_eq!(JulianEphemerisDay::from(days), jde);
    }

    #[test]
    fn display_labels_the_axis() {
        let jde = JulianEphemerisDay::new(2_451_545.0);
        assert!(format!("{jde}").starts_with("JDE"));
    }
}
