// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer location on the Earth's surface.

use qtty::Degrees;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Geodetic latitude and longitude, north and east positive.
///
/// Values are not validated: anything outside ±90° / ±180° is evaluated
/// as-is, and NaN components yield NaN daylight times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: Degrees,
    longitude: Degrees,
}

impl GeoCoordinate {
    /// Create from latitude and longitude in degrees.
    #[inline]
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude: Degrees::new(latitude_deg),
            longitude: Degrees::new(longitude_deg),
        }
    }

    #[inline]
    pub const fn from_degrees(latitude: Degrees, longitude: Degrees) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    #[inline]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// East-positive longitude.
    #[inline]
    pub const fn longitude(&self) -> Degrees {
        self.longitude
    }

    /// West-positive longitude, the convention of the solar transit formulas.
    #[inline]
    pub fn west_longitude(&self) -> Degrees {
        -self.longitude
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat = self.latitude.value();
        let lon = self.longitude.value();
        let ns = if lat < 0.0 { 'S' } else { 'N' };
        let ew = if lon < 0.0 { 'W' } else { 'E' };
        write!(f, "{:.4}°{} {:.4}°{}", lat.abs(), ns, lon.abs(), ew)
    }
}

// Serialised with explicit unit suffixes so raw JSON stays unambiguous.
#[cfg(feature = "serde")]
impl Serialize for GeoCoordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("GeoCoordinate", 2)?;
        s.serialize_field("latitude_deg", &self.latitude.value())?;
        s.serialize_field("longitude_deg", &self.longitude.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for GeoCoordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            latitude_deg: f64,
            longitude_deg: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(GeoCoordinate::new(raw.latitude_deg, raw.longitude_deg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn west_longitude_flips_sign() {
        let tokyo = GeoCoordinate::new(35.68, 139.69);
        assert_eq!(tokyo.west_longitude(), Degrees::new(-139.69));
        let new_york = GeoCoordinate::new(40.71, -74.0);
        assert_eq!(new_york.west_longitude(), Degrees::new(74.0));
    }

    #[test]
    fn display_uses_hemispheres() {
        let sydney = GeoCoordinate::new(-33.87, 151.21);
        assert_eq!(sydney.to_string(), "33.8700°S 151.2100°E");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_degree_suffixed_fields() {
        let london = GeoCoordinate::new(51.5, -0.12);
        let json = serde_json::to_string(&london).unwrap();
        assert!(json.contains("latitude_deg"));
        assert!(json.contains("longitude_deg"));
        let back: GeoCoordinate = serde_json::from_str(&json).unwrap();
        assert!((back.latitude() - london.latitude()).abs() < Degrees::new(1e-12));
        assert!((back.longitude() - london.longitude()).abs() < Degrees::new(1e-12));
    }
}
