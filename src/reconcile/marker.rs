use serde::Serialize;

use crate::{directions::RouteGeometry, shared::Coordinate, trip::Trip};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MarkerRole {
    Origin,
    Pickup,
    Dropoff,
}

impl MarkerRole {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Origin => "O",
            Self::Pickup => "P",
            Self::Dropoff => "D",
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub role: MarkerRole,
    pub label: &'static str,
    pub position: Coordinate,
}

impl Marker {
    fn new(role: MarkerRole, position: Coordinate) -> Self {
        Self {
            role,
            label: role.label(),
            position,
        }
    }
}

/// Derives the stop markers from leg boundaries.
///
/// Origin sits at the start of the first leg and dropoff at the end of the
/// last one. The pickup is the end of the first leg, but only when the trip
/// has a pickup distinct from the origin and the route actually split there;
/// otherwise the first leg's end is the dropoff and labelling it as a pickup
/// would be wrong.
pub fn markers(trip: &Trip, geometry: &RouteGeometry) -> Vec<Marker> {
    let (Some(first), Some(last)) = (geometry.first(), geometry.last()) else {
        return vec![];
    };

    let mut markers = Vec::with_capacity(3);
    markers.push(Marker::new(MarkerRole::Origin, first.start_point));
    if trip.has_distinct_pickup() && geometry.len() > 1 {
        markers.push(Marker::new(MarkerRole::Pickup, first.end_point));
    }
    markers.push(Marker::new(MarkerRole::Dropoff, last.end_point));
    markers
}
