// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-count instants tagged with their epoch.
//!
//! A [`Time<S>`] is a number of days since the epoch of the marker `S`.
//! Every marker maps onto the Julian Date axis, so moving between scales,
//! or out to `chrono`, is one offset away.
//!
//! Julian-Date-only helpers such as
//! [`Time::<JD>::day_number()`](Time::day_number) live in `julian_date_ext`.

use chrono::{DateTime, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::scales::UnixTime;

/// A day counter anchored at a fixed Julian Date.
///
/// All scales tick on the UTC clock; `to_jd`/`from_jd` only shift the epoch.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Prefix printed by `Display`.
    const LABEL: &'static str;

    /// Days on this scale → Julian Date.
    fn to_jd(value: Days) -> Days;

    /// Julian Date → days on this scale.
    fn from_jd(jd: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>
// ═══════════════════════════════════════════════════════════════════════════

/// An instant, as days since the epoch of `S`.
///
/// The marker is zero-sized: `Time<S>` is a single `f64` at runtime.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    days: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self::from_days(Days::new(value))
    }

    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            days,
            _scale: PhantomData,
        }
    }

    /// Days since the scale's epoch.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.days
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.days.value()
    }

    /// Re-express the same instant on scale `T`.
    ///
    /// ```
    /// use julian_daylight::{JulianDate, MJD};
    ///
    /// let mjd = JulianDate::new(2_460_117.0).to::<MJD>();
    /// assert_eq!(mjd.value(), 60_116.5);
    /// ```
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::from_days(T::from_jd(S::to_jd(self.days)))
    }

    /// The instant as a UTC timestamp.
    ///
    /// `None` for NaN or infinite values and for instants chrono cannot
    /// represent.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let unix = self.to::<UnixTime>().quantity().to::<Second>().value();
        if !unix.is_finite() {
            return None;
        }
        let secs = unix.floor();
        let nanos = (((unix - secs) * 1e9) as u32).min(999_999_999);
        DateTime::<Utc>::from_timestamp(secs as i64, nanos)
    }

    /// The instant of a UTC timestamp. Leap seconds are not modelled.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let whole = Seconds::new(datetime.timestamp() as f64);
        let sub = Seconds::new(f64::from(datetime.timestamp_subsec_nanos()) / 1e9);
        Time::<UnixTime>::from_days((whole + sub).to::<Day>()).to::<S>()
    }
}

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.days)
    }
}

// Serialised as the bare day count; the scale is carried by the type.
#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Self::new)
    }
}

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self {
        Self::from_days(self.days + rhs)
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self {
        Self::from_days(self.days - rhs)
    }
}

/// Elapsed days between two instants on the same scale.
impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Days {
        self.days - rhs.days
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeInstant
// ═══════════════════════════════════════════════════════════════════════════

/// An ordered point in time that can bound an [`Interval`](crate::Interval).
pub trait TimeInstant: Copy + Clone + PartialEq + PartialOrd + Sized {
    /// What `later - earlier` yields.
    type Duration;

    /// `self - other`.
    fn difference(&self, other: &Self) -> Self::Duration;
}

impl<S: TimeScale> TimeInstant for Time<S> {
    type Duration = Days;

    #[inline]
    fn difference(&self, other: &Self) -> Days {
        *self - *other
    }
}

impl TimeInstant for DateTime<Utc> {
    type Duration = chrono::Duration;

    #[inline]
    fn difference(&self, other: &Self) -> chrono::Duration {
        *self - *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::{JD, MJD};
    use chrono::TimeZone;

    #[test]
    fn from_utc_lands_on_j2000() {
        let noon = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let jd = Time::<JD>::from_utc(noon);
        assert!((jd.value() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn utc_roundtrip_within_f64_resolution() {
        // JD values near 2.4e6 resolve to roughly 40 µs.
        for scale_offset in [0.0, 0.25, 0.655_44] {
            let jd = Time::<JD>::new(2_460_116.0 + scale_offset);
            let utc = jd.to_utc().expect("in chrono range");
            let back = Time::<JD>::from_utc(utc);
            assert!((back - jd).abs() < Days::new(1e-9));
        }
    }

    #[test]
    fn to_utc_reads_a_sunrise() {
        // 2023-06-21T03:43:50Z
        let utc = Time::<JD>::new(2_460_116.655_439_8).to_utc().unwrap();
        let expected = Utc.with_ymd_and_hms(2023, 6, 21, 3, 43, 50).unwrap();
        assert!((utc - expected).num_milliseconds().abs() < 1_000);
    }

    #[test]
    fn to_utc_rejects_non_finite() {
        assert!(Time::<JD>::new(f64::NAN).to_utc().is_none());
        assert!(Time::<JD>::new(f64::INFINITY).to_utc().is_none());
        assert!(Time::<MJD>::new(f64::NEG_INFINITY).to_utc().is_none());
    }

    #[test]
    fn mjd_and_jd_share_the_instant() {
        let mjd = Time::<MJD>::new(51_544.5);
        assert_eq!(mjd.to::<JD>().quantity(), Days::new(2_451_545.0));

        let noon = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((Time::<MJD>::from_utc(noon).value() - 51_544.5).abs() < 1e-9);
    }

    #[test]
    fn day_arithmetic() {
        let mjd = Time::<MJD>::new(59_000.0);
        assert_eq!((mjd + Days::new(1.5)).value(), 59_001.5);
        assert_eq!((mjd - Days::new(1.5)).value(), 58_998.5);
        assert_eq!(Time::<MJD>::new(59_001.0) - mjd, Days::new(1.0));
    }

    #[test]
    fn display_carries_the_scale_label() {
        assert!(Time::<JD>::new(2_451_545.0).to_string().starts_with("Julian Day:"));
        assert!(Time::<MJD>::new(51_544.5).to_string().contains("MJD"));
    }

    #[test]
    fn difference_matches_subtraction() {
        let rise = Time::<JD>::new(2_460_116.655);
        let set = Time::<JD>::new(2_460_117.349);
        assert_eq!(set.difference(&rise), set - rise);

        let a = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 1, 2, 6, 0, 0).unwrap();
        assert_eq!(b.difference(&a).num_hours(), 30);
    }
}
