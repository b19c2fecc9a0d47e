// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Low-precision solar position
//!
//! The chain of closed-form approximations used to find the moment of solar
//! transit and the Sun's declination for a given meridian and date:
//!
//! ```text
//! cycle n ─► mean solar noon J* ─► mean anomaly M ─► equation of center C
//!                                        │                    │
//!                                        ▼                    ▼
//!                 solar transit ◄── ecliptic longitude λ ─► declination δ
//! ```
//!
//! Every stage is exposed as a free function so it can be checked on its
//! own; [`SolarPosition::compute`] runs the whole chain once and keeps the
//! intermediate values.
//!
//! Longitudes in this module are **west-positive** (`lw`), which is the
//! convention the transit formulas are written in. Use
//! [`GeoCoordinate::west_longitude`](crate::GeoCoordinate::west_longitude)
//! to convert from the usual east-positive convention.
//!
//! ## Accuracy
//! Transit times are good to about a minute for dates within a few
//! centuries of J2000.0; the mean elements ignore perturbations and the
//! obliquity is held at 23.44°.
//!
//! ## References
//! * Wikipedia, "Sunrise equation" (complete calculation on Earth)
//! * NOAA Global Monitoring Laboratory, solar calculation details

use log::trace;
use qtty::*;

use crate::calendar::JulianDayNumber;
use crate::JulianDate;

/// Fractional day separating J2000.0 from the first mean transit of the
/// Greenwich meridian used by the cycle count.
const TRANSIT_OFFSET: f64 = 0.0009;

/// Mean anomaly of the Sun at J2000.0.
const MEAN_ANOMALY_AT_EPOCH: Degrees = Degrees::new(357.5291);

/// Mean daily motion of the Sun in anomaly (degrees per day).
const MEAN_DAILY_MOTION: f64 = 0.985_600_28;

/// Argument of perihelion of the Earth's orbit.
const PERIHELION: Degrees = Degrees::new(102.9372);

/// Obliquity of the ecliptic, held constant.
const OBLIQUITY: Degrees = Degrees::new(23.44);

/// Estimated number of solar transits of the meridian `west_longitude`
/// since J2000.0 that lies nearest to the noon of `jdn`.
///
/// `n = round(jdn − 2451545 − 0.0009 − lw/360)`, rounding half away from
/// zero. A NaN longitude saturates to cycle 0; the NaN re-enters at
/// [`solar_noon`], so downstream values stay NaN.
#[inline]
pub fn julian_cycle(jdn: JulianDayNumber, west_longitude: Degrees) -> i64 {
    let days = jdn.value() as f64
        - JulianDate::J2000.value()
        - TRANSIT_OFFSET
        - west_longitude.value() / 360.0;
    days.round() as i64
}

/// Mean solar noon `J*` at `west_longitude` for transit `cycle`.
#[inline]
pub fn solar_noon(west_longitude: Degrees, cycle: i64) -> JulianDate {
    JulianDate::J2000 + Days::new(TRANSIT_OFFSET + west_longitude.value() / 360.0 + cycle as f64)
}

/// Solar mean anomaly at `mean_solar_noon`, wrapped into `[0°, 360°)`.
///
/// The wrap is a floored modulo, so instants before J2000.0 (negative
/// intermediate angles) land in the same range.
#[inline]
pub fn solar_mean_anomaly(mean_solar_noon: JulianDate) -> Degrees {
    let elapsed = mean_solar_noon.days_since_j2000().value();
    (MEAN_ANOMALY_AT_EPOCH + Degrees::new(MEAN_DAILY_MOTION * elapsed)).wrap_pos()
}

/// Equation of center: true anomaly minus mean anomaly, to third order in
/// the eccentricity.
#[inline]
pub fn equation_of_center(mean_anomaly: Degrees) -> Degrees {
    let m = mean_anomaly;
    Degrees::new(1.9148 * m.sin() + 0.0200 * (m * 2.0).sin() + 0.0003 * (m * 3.0).sin())
}

/// Apparent ecliptic longitude of the Sun, wrapped into `[0°, 360°)`.
#[inline]
pub fn ecliptic_longitude(mean_anomaly: Degrees, center: Degrees) -> Degrees {
    (mean_anomaly + PERIHELION + center + Degrees::new(180.0)).wrap_pos()
}

/// Julian Date of true solar noon: the mean noon corrected by the
/// equation of time.
#[inline]
pub fn solar_transit(
    mean_solar_noon: JulianDate,
    mean_anomaly: Degrees,
    ecliptic_longitude: Degrees,
) -> JulianDate {
    let equation_of_time = 0.0053 * mean_anomaly.sin() - 0.0069 * (ecliptic_longitude * 2.0).sin();
    mean_solar_noon + Days::new(equation_of_time)
}

/// Declination of the Sun, `asin(sin λ · sin ε)`, in `[−ε, ε]`.
#[inline]
pub fn solar_declination(ecliptic_longitude: Degrees) -> Degrees {
    let sin_delta = ecliptic_longitude.sin() * OBLIQUITY.sin();
    Radians::new(sin_delta.asin()).to::<Degree>()
}

/// Every intermediate value of one run of the solar-position chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Transit cycle number since J2000.0.
    pub cycle: i64,
    /// Mean solar noon `J*`.
    pub mean_solar_noon: JulianDate,
    /// Solar mean anomaly `M`.
    pub mean_anomaly: Degrees,
    /// Equation of center `C`.
    pub equation_of_center: Degrees,
    /// Ecliptic longitude `λ`.
    pub ecliptic_longitude: Degrees,
    /// True solar noon.
    pub transit: JulianDate,
    /// Solar declination `δ`.
    pub declination: Degrees,
}

impl SolarPosition {
    /// Runs the chain for the transit of `west_longitude` nearest to the
    /// noon of `jdn`.
    pub fn compute(jdn: JulianDayNumber, west_longitude: Degrees) -> Self {
        let cycle = julian_cycle(jdn, west_longitude);
        let mean_solar_noon = solar_noon(west_longitude, cycle);
        let mean_anomaly = solar_mean_anomaly(mean_solar_noon);
        let center = equation_of_center(mean_anomaly);
        let lambda = ecliptic_longitude(mean_anomaly, center);
        let transit = solar_transit(mean_solar_noon, mean_anomaly, lambda);
        let declination = solar_declination(lambda);

        trace!(
            "{jdn} lw={} n={cycle} M={} C={} λ={} transit={transit} δ={}",
            west_longitude.value(),
            mean_anomaly.value(),
            center.value(),
            lambda.value(),
            declination.value(),
        );

        Self {
            cycle,
            mean_solar_noon,
            mean_anomaly,
            equation_of_center: center,
            ecliptic_longitude: lambda,
            transit,
            declination,
        }
    }
}
