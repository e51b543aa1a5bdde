use serde::{Deserialize, Serialize};

use crate::shared::{Coordinate, Distance, Duration};

pub const STATUS_OK: &str = "OK";

/// Raw directions service payload.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DirectionsLeg {
    pub start_location: Coordinate,
    pub end_location: Coordinate,
    #[serde(default)]
    pub distance: Option<TextValue>,
    #[serde(default)]
    pub duration: Option<TextValue>,
    #[serde(default)]
    pub start_address: String,
    #[serde(default)]
    pub end_address: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TextValue {
    #[serde(default)]
    pub text: String,
    pub value: f64,
}

impl From<DirectionsLeg> for Leg {
    fn from(value: DirectionsLeg) -> Self {
        Self {
            start_point: value.start_location,
            end_point: value.end_location,
            distance_meters: value.distance.map(|d| d.value).unwrap_or_default(),
            duration_seconds: value.duration.map(|d| d.value).unwrap_or_default(),
            start_address: value.start_address,
            end_address: value.end_address,
        }
    }
}

/// One segment between two consecutive stops.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Leg {
    pub start_point: Coordinate,
    pub end_point: Coordinate,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub start_address: String,
    pub end_address: String,
}

impl Leg {
    pub fn distance(&self) -> Distance {
        Distance::meters(self.distance_meters)
    }

    pub fn duration(&self) -> Duration {
        Duration::seconds(self.duration_seconds)
    }
}

/// Legs ordered origin, pickup (when distinct), dropoff.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RouteGeometry {
    pub legs: Vec<Leg>,
}

impl RouteGeometry {
    pub fn new(legs: Vec<Leg>) -> Self {
        Self { legs }
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn first(&self) -> Option<&Leg> {
        self.legs.first()
    }

    pub fn last(&self) -> Option<&Leg> {
        self.legs.last()
    }

    /// Summed leg distance, `None` when there is nothing to sum.
    pub fn total_distance(&self) -> Option<Distance> {
        if self.legs.is_empty() {
            return None;
        }
        Some(self.legs.iter().map(Leg::distance).sum())
    }

    pub fn total_duration(&self) -> Option<Duration> {
        if self.legs.is_empty() {
            return None;
        }
        Some(self.legs.iter().map(Leg::duration).sum())
    }
}
