// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions.

use qtty::*;

use super::calendar::JulianDayNumber;
use super::instant::Time;
use super::scales::{JD, MJD};

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Days elapsed since J2000.0 (negative before the epoch).
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }

    /// Number of the Julian day containing this instant.
    ///
    /// Julian days start at noon, so this is `floor(jd)`: an instant at
    /// 06:00 UTC belongs to the Julian day that began at the previous noon.
    #[inline]
    pub fn day_number(&self) -> JulianDayNumber {
        JulianDayNumber::new(self.value().floor() as i64)
    }

    /// Day number of the civil UTC date containing this instant.
    #[inline]
    pub fn civil_day_number(&self) -> JulianDayNumber {
        JulianDayNumber::new((self.value() + 0.5).floor() as i64)
    }

    /// Fraction of the Julian day elapsed since the preceding noon, in `[0, 1)`.
    #[inline]
    pub fn fraction_of_day(&self) -> f64 {
        self.value() - self.value().floor()
    }

    /// Convenience: MJD value corresponding to this JD.
    #[inline]
    pub fn to_mjd(&self) -> Time<MJD> {
        self.to::<MJD>()
    }
}
