// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time period / interval implementation.
//!
//! This module provides:
//! - [`Interval<T>`]: generic interval over any [`TimeInstant`]
//! - [`Period<S>`]: scale-based alias for `Interval<Time<S>>`
//!
//! A daylight window (sunrise → sunset) is a [`Period<JD>`](Period).

use super::{Time, TimeInstant, TimeScale};
use chrono::{DateTime, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Represents an interval between two instants.
///
/// An `Interval` is defined by a start and end time instant of type `T`,
/// where `T` implements the `TimeInstant` trait, so the same type covers
/// Julian Dates, Modified Julian Dates and UTC timestamps.
///
/// # Examples
///
/// ```
/// use julian_daylight::{Interval, JulianDate};
/// use qtty::Days;
///
/// let sunrise = JulianDate::new(2_460_116.655);
/// let sunset = JulianDate::new(2_460_117.349);
/// let daylight = Interval::new(sunrise, sunset);
///
/// assert!((daylight.duration() - Days::new(0.694)).abs() < Days::new(1e-9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

/// Time-scale period alias.
///
/// This follows the same marker pattern as [`Time<S>`], so callers can write
/// `Period<MJD>`, `Period<JD>`, etc.
pub type Period<S> = Interval<Time<S>>;

/// UTC interval alias.
pub type UtcPeriod = Interval<DateTime<Utc>>;

impl<T: TimeInstant> Interval<T> {
    /// Creates a new period between two time instants.
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// Returns the duration of the period as the difference between end and start.
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// Whether `instant` lies in the half-open range `[start, end)`.
    pub fn contains(&self, instant: T) -> bool {
        self.start <= instant && instant < self.end
    }
}

impl<T: TimeInstant + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl<S: TimeScale> Interval<Time<S>> {
    /// Convert this period to another time scale.
    ///
    /// ```
    /// use julian_daylight::{Period, Time, JD, MJD};
    ///
    /// let period_jd = Period::new(Time::<JD>::new(2451545.0), Time::<JD>::new(2451546.0));
    /// let period_mjd = period_jd.to::<MJD>();
    ///
    /// assert!((period_mjd.start.value() - 51544.5).abs() < 1e-12);
    /// assert!((period_mjd.end.value() - 51545.5).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Period<T> {
        Interval::new(self.start.to::<T>(), self.end.to::<T>())
    }

    /// Convert both endpoints to `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if either endpoint is not representable by chrono.
    pub fn to_utc(&self) -> Option<UtcPeriod> {
        Some(Interval::new(self.start.to_utc()?, self.end.to_utc()?))
    }
}

// Serde support for Period<JD> (= Interval<Time<JD>>)
#[cfg(feature = "serde")]
impl Serialize for Interval<crate::JulianDate> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Period", 2)?;
        s.serialize_field("start_jd", &self.start.value())?;
        s.serialize_field("end_jd", &self.end.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Interval<crate::JulianDate> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start_jd: f64,
            end_jd: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Interval::new(
            crate::JulianDate::new(raw.start_jd),
            crate::JulianDate::new(raw.end_jd),
        ))
    }
}
