use itertools::Itertools;
use std::{fmt, str::FromStr};
use thiserror::Error;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

/// A geographical location in decimal degrees.
///
/// Once constructed through one of the checked constructors
/// both components are finite and within their valid range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub fn is_valid(self) -> bool {
        is_valid_lat_deg(self.lat) && is_valid_lng_deg(self.lng)
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }

    /// Panics in debug builds if the coordinates are out of range.
    ///
    /// Only intended for literal values that are known to be valid.
    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        let res = Self {
            lat: lat.into(),
            lng: lng.into(),
        };
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        let (lat, lng) = (lat.into(), lng.into());
        if is_valid_lat_deg(lat) && is_valid_lng_deg(lng) {
            Some(Self { lat, lng })
        } else {
            None
        }
    }

    fn parse_lat_lng_deg(lat_str: &str, lng_str: &str) -> Result<Self, MapPointParseError> {
        let lat = lat_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::Latitude(lat_str.to_string()))?;
        let lng = lng_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::Longitude(lng_str.to_string()))?;
        if !is_valid_lat_deg(lat) {
            return Err(MapPointParseError::Latitude(lat_str.to_string()));
        }
        if !is_valid_lng_deg(lng) {
            return Err(MapPointParseError::Longitude(lng_str.to_string()));
        }
        Ok(Self { lat, lng })
    }
}

fn is_valid_lat_deg(deg: f64) -> bool {
    deg.is_finite() && (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&deg)
}

fn is_valid_lng_deg(deg: f64) -> bool {
    deg.is_finite() && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&deg)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapPointParseError {
    #[error("Expected '<lat>,<lng>' but got '{0}'")]
    Format(String),
    #[error("Invalid latitude degrees: '{0}'")]
    Latitude(String),
    #[error("Invalid longitude degrees: '{0}'")]
    Longitude(String),
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((lat_str, lng_str)) = s.split(',').collect_tuple() {
            MapPoint::parse_lat_lng_deg(lat_str, lng_str)
        } else {
            Err(MapPointParseError::Format(s.to_string()))
        }
    }
}

/// A distance on the surface of the earth in statute miles.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

const MILES_PER_KILOMETER: f64 = 0.621_371;

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_miles(miles: f64) -> Self {
        Self(miles)
    }

    pub const fn to_miles(self) -> f64 {
        self.0
    }

    pub fn from_kilometers(km: f64) -> Self {
        Self(km * MILES_PER_KILOMETER)
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{:.1} mi", self.0)
    }
}

const MEAN_EARTH_RADIUS_KM: f64 = 6_371.0;

impl MapPoint {
    /// Calculate the great-circle distance on the surface of
    /// a spherical earth with the haversine formula.
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_half_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_half_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = (dlat_half_sin * dlat_half_sin
            + lat1_rad.cos() * lat2_rad.cos() * dlng_half_sin * dlng_half_sin)
            // Rounding errors may push antipodal points slightly above 1
            .clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_kilometers(MEAN_EARTH_RADIUS_KM * c)
    }
}
