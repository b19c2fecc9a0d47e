// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Gregorian calendar dates and their Julian Day Number / Julian Date.
//!
//! [`CalendarDate`] is a plain UTC civil timestamp. It is deliberately not
//! validated: an out-of-range month or day simply produces the number the
//! integer algorithm yields for it, and non-finite seconds propagate as NaN
//! into [`CalendarDate::julian_date`].
//!
//! ```rust
//! use julian_daylight::{julian_date, julian_day_number, CalendarDate};
//!
//! let date = CalendarDate::from_ymd_hms(2000, 1, 1, 12, 0, 0.0);
//! assert_eq!(julian_day_number(&date).value(), 2_451_545);
//! assert_eq!(julian_date(&date).value(), 2_451_545.0);
//! ```

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use std::fmt;
use std::ops::{Add, Sub};

use crate::JulianDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seconds in one civil day.
const SECONDS_PER_DAY: f64 = 86_400.0;

// ═══════════════════════════════════════════════════════════════════════════
// JulianDayNumber
// ═══════════════════════════════════════════════════════════════════════════

/// Integer count of days since the Julian epoch (noon UTC, −4713-11-24 in
/// the proleptic Gregorian calendar).
///
/// A number identifies the Julian day that *begins at noon* of the civil date
/// it was derived from, so the civil UTC date spans
/// `[midnight(), midnight() + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JulianDayNumber(i64);

impl JulianDayNumber {
    /// Day number of 2000-01-01.
    pub const J2000: Self = Self(2_451_545);

    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Julian Date of the noon that starts this Julian day.
    #[inline]
    pub fn noon(self) -> JulianDate {
        JulianDate::new(self.0 as f64)
    }

    /// Julian Date of the UTC midnight that opens the civil date.
    #[inline]
    pub fn midnight(self) -> JulianDate {
        JulianDate::new(self.0 as f64 - 0.5)
    }

    /// Days elapsed between the civil date's midnight and `instant`.
    ///
    /// Lies in `[0, 1)` when `instant` falls on this UTC date; events on the
    /// previous or next date come out negative or `>= 1`.
    #[inline]
    pub fn day_fraction_of(self, instant: JulianDate) -> f64 {
        (instant - self.midnight()).value()
    }
}

impl Add<i64> for JulianDayNumber {
    type Output = Self;
    #[inline]
    fn add(self, days: i64) -> Self {
        Self(self.0 + days)
    }
}

impl Sub<i64> for JulianDayNumber {
    type Output = Self;
    #[inline]
    fn sub(self, days: i64) -> Self {
        Self(self.0 - days)
    }
}

impl Sub for JulianDayNumber {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Self) -> i64 {
        self.0 - rhs.0
    }
}

impl From<JulianDayNumber> for i64 {
    #[inline]
    fn from(jdn: JulianDayNumber) -> Self {
        jdn.0
    }
}

impl fmt::Display for JulianDayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JDN {}", self.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CalendarDate
// ═══════════════════════════════════════════════════════════════════════════

/// A Gregorian date and time of day, implicitly UTC.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

impl CalendarDate {
    /// Midnight UTC of the given date.
    #[inline]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self::from_ymd_hms(year, month, day, 0, 0, 0.0)
    }

    #[inline]
    pub const fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight UTC of the civil date numbered `jdn`.
    ///
    /// Inverse of [`julian_day_number`](Self::julian_day_number), valid for
    /// the whole proleptic Gregorian range.
    pub fn from_julian_day_number(jdn: JulianDayNumber) -> Self {
        let a = jdn.value() + 32_044;
        let b = (4 * a + 3).div_euclid(146_097);
        let c = a - (146_097 * b).div_euclid(4);
        let d = (4 * c + 3).div_euclid(1_461);
        let e = c - (1_461 * d).div_euclid(4);
        let m = (5 * e + 2).div_euclid(153);

        let day = e - (153 * m + 2).div_euclid(5) + 1;
        let month = m + 3 - 12 * m.div_euclid(10);
        let year = 100 * b + d - 4_800 + m.div_euclid(10);
        Self::new(year as i32, month as u32, day as u32)
    }

    /// Builds the instant `fraction` of a day after midnight of the date.
    ///
    /// Whole days carry into the date, so `-0.25` is 18:00 on the previous
    /// day and `1.5` is noon on the next. A non-finite `fraction` keeps the
    /// date and leaves NaN in `second`. The carried date must stay within
    /// the `i32` year range.
    pub fn from_day_fraction(year: i32, month: u32, day: u32, fraction: f64) -> Self {
        let whole = if fraction.is_finite() { fraction.floor() } else { 0.0 };
        let date = Self::new(year, month, day);
        let date = if whole == 0.0 {
            date
        } else {
            Self::from_julian_day_number(date.julian_day_number() + whole as i64)
        };

        let total = (fraction - whole) * SECONDS_PER_DAY;
        let hour = (total / 3_600.0).floor();
        let minute = ((total - hour * 3_600.0) / 60.0).floor();
        let second = total - hour * 3_600.0 - minute * 60.0;
        date.with_time(hour as u32, minute as u32, second)
    }

    /// Same date at a different time of day.
    #[inline]
    pub const fn with_time(self, hour: u32, minute: u32, second: f64) -> Self {
        Self::from_ymd_hms(self.year, self.month, self.day, hour, minute, second)
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u32 {
        self.day
    }

    #[inline]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> f64 {
        self.second
    }

    /// Time of day as a fraction of a day measured from noon.
    ///
    /// Negative before noon: `(hour − 12)/24 + minute/1440 + second/86400`.
    #[inline]
    pub fn noon_fraction(&self) -> f64 {
        (f64::from(self.hour) - 12.0) / 24.0
            + f64::from(self.minute) / 1_440.0
            + self.second / SECONDS_PER_DAY
    }

    /// Julian Day Number of the civil date (time of day is ignored).
    ///
    /// January and February count as months 13 and 14 of the previous year;
    /// all divisions are floored so proleptic dates stay exact.
    pub fn julian_day_number(&self) -> JulianDayNumber {
        let year = i64::from(self.year);
        let month = i64::from(self.month);
        let day = i64::from(self.day);

        let a = (14 - month).div_euclid(12);
        let y = year + 4_800 - a;
        let m = month + 12 * a - 3;

        JulianDayNumber(
            day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
                + y.div_euclid(400)
                - 32_045,
        )
    }

    /// Julian Date: the day number plus the noon-referenced time fraction.
    #[inline]
    pub fn julian_date(&self) -> JulianDate {
        JulianDate::new(self.julian_day_number().value() as f64 + self.noon_fraction())
    }
}

/// Julian Day Number of `date`.
#[inline]
pub fn julian_day_number(date: &CalendarDate) -> JulianDayNumber {
    date.julian_day_number()
}

/// Fractional Julian Date of `date`.
#[inline]
pub fn julian_date(date: &CalendarDate) -> JulianDate {
    date.julian_date()
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

// ── chrono boundary ───────────────────────────────────────────────────────

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(datetime: NaiveDateTime) -> Self {
        let second = f64::from(datetime.second()) + f64::from(datetime.nanosecond()) / 1e9;
        Self::from_ymd_hms(
            datetime.year(),
            datetime.month(),
            datetime.day(),
            datetime.hour(),
            datetime.minute(),
            second,
        )
    }
}

impl From<DateTime<Utc>> for CalendarDate {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from(datetime.naive_utc())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    /// `NaiveDate::num_days_from_ce()` of 2000-01-01 is 730 120.
    const CE_TO_JDN: i64 = 1_721_425;

    #[test]
    fn j2000_noon_is_exact() {
        let date = CalendarDate::from_ymd_hms(2000, 1, 1, 12, 0, 0.0);
        assert_eq!(date.julian_day_number(), JulianDayNumber::J2000);
        assert_eq!(date.julian_date().value(), 2_451_545.0);
    }

    #[test]
    fn known_day_numbers() {
        assert_eq!(CalendarDate::new(1970, 1, 1).julian_day_number().value(), 2_440_588);
        assert_eq!(CalendarDate::new(1858, 11, 17).julian_day_number().value(), 2_400_001);
        assert_eq!(CalendarDate::new(2023, 6, 21).julian_day_number().value(), 2_460_117);
        assert_eq!(CalendarDate::new(-4713, 11, 24).julian_day_number().value(), 0);
    }

    #[test]
    fn leap_day_is_counted() {
        let feb29 = CalendarDate::new(2024, 2, 29).julian_day_number();
        let mar01 = CalendarDate::new(2024, 3, 1).julian_day_number();
        assert_eq!(feb29.value(), 2_460_370);
        assert_eq!(mar01 - feb29, 1);

        // 1900 is not a leap year in the Gregorian calendar.
        let feb28 = CalendarDate::new(1900, 2, 28).julian_day_number();
        let mar01 = CalendarDate::new(1900, 3, 1).julian_day_number();
        assert_eq!(mar01 - feb28, 1);
    }

    #[test]
    fn midnight_is_half_a_day_before_noon() {
        let date = CalendarDate::new(2000, 1, 1);
        assert_eq!(date.julian_date().value(), 2_451_544.5);
        assert_eq!(date.julian_day_number().midnight(), date.julian_date());
    }

    #[test]
    fn evening_fraction_is_recovered() {
        let date = CalendarDate::from_ymd_hms(2023, 6, 21, 18, 0, 0.0);
        let jd = date.julian_date().value();
        assert!((jd - jd.floor() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn from_day_fraction_decomposes_time() {
        let date = CalendarDate::from_day_fraction(2023, 6, 21, 0.75 + 30.5 / 86_400.0);
        assert_eq!(date.hour(), 18);
        assert_eq!(date.minute(), 0);
        assert!((date.second() - 30.5).abs() < 1e-6);

        let direct = CalendarDate::from_ymd_hms(2023, 6, 21, 18, 0, 30.5);
        assert!((date.julian_date() - direct.julian_date()).value().abs() < 1e-9);
    }

    #[test]
    fn from_day_fraction_carries_whole_days() {
        let evening_before = CalendarDate::from_day_fraction(2023, 6, 21, -0.25);
        assert_eq!(evening_before, CalendarDate::from_ymd_hms(2023, 6, 20, 18, 0, 0.0));

        let next_noon = CalendarDate::from_day_fraction(2023, 12, 31, 1.5);
        assert_eq!(next_noon, CalendarDate::from_ymd_hms(2024, 1, 1, 12, 0, 0.0));

        // Tokyo's sunrise, read against the requested date's midnight.
        let sunrise = CalendarDate::from_day_fraction(2023, 6, 21, -4.5523 / 24.0);
        assert_eq!((sunrise.month(), sunrise.day(), sunrise.hour()), (6, 20, 19));
    }

    #[test]
    fn from_day_fraction_non_finite_keeps_the_date() {
        let date = CalendarDate::from_day_fraction(2023, 6, 21, f64::NAN);
        assert_eq!(date.julian_day_number().value(), 2_460_117);
        assert!(date.julian_date().value().is_nan());
    }

    #[test]
    fn day_number_inverse_on_known_dates() {
        for (jdn, ymd) in [
            (0, (-4713, 11, 24)),
            (2_400_001, (1858, 11, 17)),
            (2_451_545, (2000, 1, 1)),
            (2_460_370, (2024, 2, 29)),
        ] {
            let date = CalendarDate::from_julian_day_number(JulianDayNumber::new(jdn));
            assert_eq!((date.year(), date.month(), date.day()), ymd);
        }
    }

    #[test]
    fn nan_seconds_propagate() {
        let date = CalendarDate::from_ymd_hms(2023, 6, 21, 12, 0, f64::NAN);
        assert_eq!(date.julian_day_number().value(), 2_460_117);
        assert!(date.julian_date().value().is_nan());
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let date = CalendarDate::from_ymd_hms(1987, 4, 10, 19, 21, 0.0);
        let first = julian_date(&date).value().to_bits();
        for _ in 0..8 {
            assert_eq!(julian_date(&date).value().to_bits(), first);
        }
    }

    #[test]
    fn chrono_conversions() {
        let dt = Utc.with_ymd_and_hms(2023, 6, 21, 3, 43, 50).unwrap();
        let date = CalendarDate::from(dt);
        assert_eq!(
            (date.year(), date.month(), date.day(), date.hour(), date.minute()),
            (2023, 6, 21, 3, 43)
        );
        assert_eq!(date.second(), 50.0);

        let from_utc = crate::JulianDate::from_utc(dt);
        assert!((from_utc - date.julian_date()).value().abs() < 1e-8);

        let naive = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(CalendarDate::from(naive), CalendarDate::new(2024, 2, 29));
    }

    #[test]
    fn display_is_iso_like() {
        let date = CalendarDate::from_ymd_hms(2023, 6, 21, 3, 4, 5.25);
        assert_eq!(date.to_string(), "2023-06-21T03:04:05.250Z");
        assert_eq!(date.julian_day_number().to_string(), "JDN 2460117");
    }

    proptest! {
        #[test]
        fn day_number_inverse_roundtrips(jdn in -2_000_000i64..6_000_000) {
            let jdn = JulianDayNumber::new(jdn);
            let date = CalendarDate::from_julian_day_number(jdn);
            prop_assert_eq!(date.julian_day_number(), jdn);
            prop_assert_eq!(date.hour(), 0);
        }

        #[test]
        fn day_number_advances_by_one_per_day(offset in 0i64..400_000) {
            let start = NaiveDate::from_ymd_opt(1600, 1, 1).unwrap();
            let today = start + chrono::Duration::days(offset);
            let tomorrow = today.succ_opt().unwrap();
            let jdn_today = CalendarDate::from(today).julian_day_number();
            let jdn_tomorrow = CalendarDate::from(tomorrow).julian_day_number();
            prop_assert_eq!(jdn_tomorrow - jdn_today, 1);
        }

        #[test]
        fn day_number_matches_chrono_day_count(offset in -500_000i64..500_000) {
            let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + chrono::Duration::days(offset);
            let jdn = CalendarDate::from(date).julian_day_number();
            prop_assert_eq!(jdn.value(), i64::from(date.num_days_from_ce()) + CE_TO_JDN);
        }

        #[test]
        fn fractional_part_matches_time_of_day(
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
        ) {
            let date = CalendarDate::from_ymd_hms(2023, 6, 21, hour, minute, f64::from(second));
            let jd = date.julian_date().value();
            let expected = date.noon_fraction().rem_euclid(1.0);
            prop_assert!((jd - jd.floor() - expected).abs() < 1e-9);
        }
    }
}
