use serde::Serialize;

use crate::trip::Trip;

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub location: String,
    pub stopover: bool,
}

/// What gets asked of the directions service for one trip.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DirectionsRequest {
    pub origin: String,
    pub destination: String,
    pub waypoints: Vec<Waypoint>,
    pub mode: TravelMode,
    pub optimize_waypoints: bool,
}

impl DirectionsRequest {
    /// Origin, then the pickup as a stopover when it is its own stop, then
    /// the dropoff. Waypoints are never reordered since the duty logs
    /// assume stops happen in this order.
    pub fn for_trip(trip: &Trip) -> Self {
        let waypoints = if trip.has_distinct_pickup() {
            vec![Waypoint {
                location: trip.pickup_location.clone(),
                stopover: true,
            }]
        } else {
            vec![]
        };
        Self {
            origin: trip.current_location.clone(),
            destination: trip.dropoff_location.clone(),
            waypoints,
            mode: TravelMode::Driving,
            optimize_waypoints: false,
        }
    }

    /// Query pairs in the directions web-service format. The credential is
    /// left to the transport.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("origin", self.origin.clone()),
            ("destination", self.destination.clone()),
            ("mode", self.mode.as_str().to_string()),
        ];
        if !self.waypoints.is_empty() {
            let mut parts: Vec<String> = Vec::with_capacity(self.waypoints.len() + 1);
            if self.optimize_waypoints {
                parts.push("optimize:true".to_string());
            }
            parts.extend(self.waypoints.iter().map(|waypoint| {
                if waypoint.stopover {
                    waypoint.location.clone()
                } else {
                    format!("via:{}", waypoint.location)
                }
            }));
            query.push(("waypoints", parts.join("|")));
        }
        query
    }
}
