// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian dates and sunrise / sunset.
//!
//! This crate converts a UTC calendar date into a Julian Day Number and a
//! fractional Julian Date, and estimates sunrise and sunset for a date and
//! location with the low-precision solar-position approximation
//! (mean anomaly → equation of center → ecliptic longitude → transit →
//! declination → hour angle).
//!
//! # Core types
//!
//! - [`CalendarDate`] — Gregorian date and time of day, implicitly UTC.
//! - [`JulianDayNumber`] — integer day count since the Julian epoch.
//! - [`Time<S>`] — generic instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDate`] — type alias for `Time<JD>`.
//! - [`ModifiedJulianDate`] — type alias for `Time<MJD>`.
//! - [`GeoCoordinate`] — observer latitude / longitude.
//! - [`SolarPosition`] — every intermediate value of the solar-position chain.
//! - [`Daylight`] — a sunrise/sunset [`DaylightInfo`] or a polar case.
//! - [`Period<S>`] / [`Interval<T>`] — spans between two instants.
//!
//! # Time scales
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Date |
//! | [`MJD`] | Modified Julian Date |
//! | [`UnixTime`] | Unix / POSIX time (days) |
//!
//! All scales share the UTC clock; no ΔT or leap-second correction is
//! applied anywhere.
//!
//! # Quick start
//!
//! ```rust
//! use julian_daylight::{daylight_info, julian_date, CalendarDate, Daylight, GeoCoordinate};
//!
//! let date = CalendarDate::from_ymd_hms(2000, 1, 1, 12, 0, 0.0);
//! assert_eq!(julian_date(&date).value(), 2_451_545.0);
//!
//! let equator = GeoCoordinate::new(0.0, 0.0);
//! if let Daylight::Window(info) = daylight_info(&CalendarDate::new(2023, 3, 20), &equator) {
//!     assert!(info.sunrise() < info.transit() && info.transit() < info.sunset());
//! }
//! ```
//!
//! # Non-finite input
//!
//! Nothing is validated. NaN or infinite coordinates and seconds propagate
//! into NaN Julian Dates and NaN sunrise/sunset values; only conversions to
//! `chrono` types report them, by returning `None`.

mod calendar;
mod coordinate;
mod daylight;
pub(crate) mod instant;
mod julian_date_ext;
mod period;
pub(crate) mod scales;
mod solar;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{julian_date, julian_day_number, CalendarDate, JulianDayNumber};
pub use coordinate::GeoCoordinate;
pub use daylight::{daylight, daylight_info, hour_angle, Daylight, DaylightInfo, HourAngle};
pub use instant::{Time, TimeInstant, TimeScale};
pub use period::{Interval, Period, UtcPeriod};
pub use scales::{UnixTime, JD, MJD};
pub use solar::{
    ecliptic_longitude, equation_of_center, julian_cycle, solar_declination,
    solar_mean_anomaly, solar_noon, solar_transit, SolarPosition,
};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Date — continuous count of days since the Julian Period, UTC.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Modified Julian Date — `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;
