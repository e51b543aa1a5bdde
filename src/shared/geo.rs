use std::{cmp, iter::Sum};

use serde::{Deserialize, Serialize};

pub const METERS_PER_MILE: f64 = 1609.34;

/// A distance that remembers the unit it was created in, so a value read in
/// miles comes back out in miles without a round trip through meters.
#[derive(Debug, Clone, Copy)]
pub enum Distance {
    Meters(f64),
    Miles(f64),
}

impl Default for Distance {
    fn default() -> Self {
        Self::Meters(0.0)
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Miles(a), Self::Miles(b)) => a == b,
            _ => self.as_meters() == other.as_meters(),
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.as_meters().partial_cmp(&other.as_meters())
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::meters(iter.map(|distance| distance.as_meters()).sum())
    }
}

impl Distance {
    pub const fn meters(distance: f64) -> Self {
        Self::Meters(distance)
    }

    pub const fn miles(distance: f64) -> Self {
        Self::Miles(distance)
    }

    pub fn as_meters(&self) -> f64 {
        match self {
            Self::Meters(value) => *value,
            Self::Miles(value) => value * METERS_PER_MILE,
        }
    }

    pub fn as_miles(&self) -> f64 {
        match self {
            Self::Meters(value) => value / METERS_PER_MILE,
            Self::Miles(value) => *value,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng")]
    pub longitude: f64,
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::meters(1609.34);
    let dist_b = Distance::miles(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn distance_miles_are_kept_verbatim() {
    assert_eq!(Distance::miles(450.0).as_miles(), 450.0);
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::meters(1000.0);
    let dist_b = Distance::miles(0.5);
    assert!(dist_a > dist_b)
}

#[test]
fn coordinate_accepts_short_keys() {
    let coordinate: Coordinate = serde_json::from_str(r#"{"lat": 41.88, "lng": -87.63}"#).unwrap();
    assert_eq!(coordinate, Coordinate::from((41.88, -87.63)));
}
