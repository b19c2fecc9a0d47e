// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sunrise, sunset and the polar cases.
//!
//! The hour angle of the Sun when its upper limb touches the refracted
//! horizon (apparent elevation −0.83°) is
//!
//! ```text
//! cos H = (sin(−0.83°) − sin φ · sin δ) / (cos φ · cos δ)
//! ```
//!
//! and sunrise / sunset lie `H/360` days either side of the solar transit.
//! When `|cos H| > 1` the Sun never crosses that horizon on the date: the
//! result is [`Daylight::PolarDay`] or [`Daylight::PolarNight`], never a
//! clamped or NaN time.
//!
//! ```rust
//! use julian_daylight::{daylight_info, CalendarDate, Daylight, GeoCoordinate};
//!
//! let london = GeoCoordinate::new(51.5, 0.0);
//! let date = CalendarDate::new(2023, 6, 21);
//!
//! match daylight_info(&date, &london) {
//!     Daylight::Window(info) => {
//!         let sunrise_h = info.sunrise_time_of_day().value();
//!         assert!((sunrise_h - 3.73).abs() < 0.05);
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

use log::debug;
use qtty::*;

use crate::calendar::{CalendarDate, JulianDayNumber};
use crate::coordinate::GeoCoordinate;
use crate::solar::SolarPosition;
use crate::{JulianDate, Period, UtcPeriod, JD};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Apparent solar elevation at sunrise and sunset: solar semi-diameter plus
/// standard horizontal refraction.
const HORIZON_ELEVATION: Degrees = Degrees::new(-0.83);

// ═══════════════════════════════════════════════════════════════════════════
// Hour angle
// ═══════════════════════════════════════════════════════════════════════════

/// Outcome of the sunrise hour-angle equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HourAngle {
    /// The Sun crosses the horizon; the angle lies in `[0°, 180°]`.
    ///
    /// NaN inputs land here as `Defined(NaN)`.
    Defined(Degrees),
    /// The Sun stays above the horizon all day (`cos H < −1`).
    PolarDay,
    /// The Sun stays below the horizon all day (`cos H > 1`).
    PolarNight,
}

impl HourAngle {
    /// The angle, if the Sun rises and sets.
    #[inline]
    pub fn degrees(&self) -> Option<Degrees> {
        match self {
            HourAngle::Defined(h) => Some(*h),
            HourAngle::PolarDay | HourAngle::PolarNight => None,
        }
    }
}

/// Sunrise/sunset hour angle for a Sun at `declination` seen from `latitude`.
pub fn hour_angle(declination: Degrees, latitude: Degrees) -> HourAngle {
    let cos_h = (HORIZON_ELEVATION.sin() - latitude.sin() * declination.sin())
        / (latitude.cos() * declination.cos());

    if cos_h < -1.0 {
        HourAngle::PolarDay
    } else if cos_h > 1.0 {
        HourAngle::PolarNight
    } else {
        HourAngle::Defined(Radians::new(cos_h.acos()).to::<Degree>())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// DaylightInfo
// ═══════════════════════════════════════════════════════════════════════════

/// Sunrise → sunset window for one requested date.
///
/// All instants are Julian Dates in UTC. Time-of-day accessors are measured
/// from the UTC midnight that opens the requested date, so an event falling
/// on the previous or next UTC date reads as negative or past 24 h.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DaylightInfo {
    day: JulianDayNumber,
    window: Period<JD>,
    transit: JulianDate,
}

impl DaylightInfo {
    /// Window of `hour_angle` either side of `transit`.
    ///
    /// `hour_angle` must come from [`HourAngle::Defined`], so it lies in
    /// `[0°, 180°]` and sunrise never follows sunset.
    pub(crate) fn new(day: JulianDayNumber, transit: JulianDate, hour_angle: Degrees) -> Self {
        let half = Days::new(hour_angle.value() / 360.0);
        Self {
            day,
            window: Period::new(transit - half, transit + half),
            transit,
        }
    }

    /// The requested date.
    #[inline]
    pub fn day(&self) -> JulianDayNumber {
        self.day
    }

    #[inline]
    pub fn sunrise(&self) -> JulianDate {
        self.window.start
    }

    #[inline]
    pub fn sunset(&self) -> JulianDate {
        self.window.end
    }

    /// True solar noon.
    #[inline]
    pub fn transit(&self) -> JulianDate {
        self.transit
    }

    /// Sunrise → sunset as a period.
    #[inline]
    pub fn window(&self) -> Period<JD> {
        self.window
    }

    #[inline]
    pub fn day_length(&self) -> Days {
        self.window.duration()
    }

    /// Whether the Sun is up at `instant`.
    #[inline]
    pub fn is_daylight(&self, instant: JulianDate) -> bool {
        self.window.contains(instant)
    }

    #[inline]
    pub fn sunrise_day_fraction(&self) -> f64 {
        self.day.day_fraction_of(self.sunrise())
    }

    #[inline]
    pub fn sunset_day_fraction(&self) -> f64 {
        self.day.day_fraction_of(self.sunset())
    }

    #[inline]
    pub fn transit_day_fraction(&self) -> f64 {
        self.day.day_fraction_of(self.transit)
    }

    /// Sunrise as UTC time of day.
    #[inline]
    pub fn sunrise_time_of_day(&self) -> Hours {
        Days::new(self.sunrise_day_fraction()).to::<Hour>()
    }

    /// Sunset as UTC time of day.
    #[inline]
    pub fn sunset_time_of_day(&self) -> Hours {
        Days::new(self.sunset_day_fraction()).to::<Hour>()
    }

    /// Sunrise → sunset as UTC timestamps.
    ///
    /// `None` when either end is not representable by chrono (including NaN
    /// results from non-finite inputs).
    #[inline]
    pub fn to_utc(&self) -> Option<UtcPeriod> {
        self.window.to_utc()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Daylight
// ═══════════════════════════════════════════════════════════════════════════

/// Daylight for a date and place: a sunrise/sunset window or a polar case.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Daylight {
    /// The Sun rises and sets.
    Window(DaylightInfo),
    /// The Sun stays up through the transit day.
    PolarDay { transit: JulianDate },
    /// The Sun stays down through the transit day.
    PolarNight { transit: JulianDate },
}

impl Daylight {
    /// The sunrise/sunset window, if there is one.
    #[inline]
    pub fn window(&self) -> Option<&DaylightInfo> {
        match self {
            Daylight::Window(info) => Some(info),
            Daylight::PolarDay { .. } | Daylight::PolarNight { .. } => None,
        }
    }

    /// True solar noon of the date's transit cycle.
    #[inline]
    pub fn transit(&self) -> JulianDate {
        match self {
            Daylight::Window(info) => info.transit(),
            Daylight::PolarDay { transit } | Daylight::PolarNight { transit } => *transit,
        }
    }

    #[inline]
    pub fn is_polar_day(&self) -> bool {
        matches!(self, Daylight::PolarDay { .. })
    }

    #[inline]
    pub fn is_polar_night(&self) -> bool {
        matches!(self, Daylight::PolarNight { .. })
    }
}

/// Daylight at `location` on the date identified by `jdn`.
pub fn daylight(jdn: JulianDayNumber, location: &GeoCoordinate) -> Daylight {
    let position = SolarPosition::compute(jdn, location.west_longitude());
    let transit = position.transit;

    match hour_angle(position.declination, location.latitude()) {
        HourAngle::Defined(h) => Daylight::Window(DaylightInfo::new(jdn, transit, h)),
        HourAngle::PolarDay => {
            debug!("{jdn} at {location}: polar day");
            Daylight::PolarDay { transit }
        }
        HourAngle::PolarNight => {
            debug!("{jdn} at {location}: polar night");
            Daylight::PolarNight { transit }
        }
    }
}

/// Daylight at `location` on the civil date of `date` (time of day is ignored).
#[inline]
pub fn daylight_info(date: &CalendarDate, location: &GeoCoordinate) -> Daylight {
    daylight(date.julian_day_number(), location)
}
