pub mod fallback;
pub mod marker;

pub use fallback::TotalSource;
pub use marker::*;

use serde::Serialize;
use tracing::debug;

use crate::{
    directions::{Leg, Resolution, RouteGeometry},
    shared::format_number,
    trip::{Break, LegSummary, TripRecord},
};
use fallback::{DISTANCE_SOURCES, DURATION_SOURCES, Inputs, first_available};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RouteStatus {
    /// No answer from the directions service yet.
    Pending,
    Ready,
    Unavailable { status: String },
}

/// Figures computed from the directions legs alone.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RouteStatistics {
    pub start_address: String,
    pub end_address: String,
    pub distance_miles: f64,
    pub duration_seconds: f64,
    pub duration_text: String,
}

impl RouteStatistics {
    fn from_geometry(geometry: &RouteGeometry) -> Option<Self> {
        let first = geometry.first()?;
        let last = geometry.last()?;
        let distance = geometry.total_distance()?;
        let duration = geometry.total_duration()?;
        Some(Self {
            start_address: first.start_address.clone(),
            end_address: last.end_address.clone(),
            distance_miles: distance.as_miles(),
            duration_seconds: duration.as_seconds(),
            duration_text: duration.to_human_string(),
        })
    }
}

/// The merged picture of one trip: authoritative totals from the record,
/// geometry and markers from the directions service.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RouteView {
    pub status: RouteStatus,
    pub distance_miles: Option<f64>,
    pub distance_source: Option<TotalSource>,
    pub duration_hours: Option<f64>,
    pub duration_source: Option<TotalSource>,
    pub total_trip_time_hours: Option<f64>,
    pub markers: Vec<Marker>,
    pub legs: Vec<Leg>,
    pub statistics: Option<RouteStatistics>,
    pub breaks: Vec<Break>,
    pub fuel_stops: u32,
    pub overnight_rests: u32,
    pub feasible: Option<bool>,
    pub provider_legs: Vec<LegSummary>,
}

/// Merges a trip record with whatever the directions service said about it.
///
/// `resolution` is `None` while the directions request is outstanding. The
/// totals always prefer the record's own numbers and only fall back to the
/// geometry when the record has none, so a failed directions lookup never
/// takes the textual summary down with it.
pub fn reconcile(record: &TripRecord, resolution: Option<&Resolution>) -> RouteView {
    let geometry = resolution.and_then(Resolution::geometry);
    let inputs = Inputs {
        route_info: &record.route_info,
        geometry,
    };

    let distance = first_available(DISTANCE_SOURCES, &inputs);
    let duration = first_available(DURATION_SOURCES, &inputs);
    debug!(
        "Reconciled distance from {:?}, duration from {:?}",
        distance.map(|(_, source)| source),
        duration.map(|(_, source)| source)
    );

    let status = match resolution {
        None => RouteStatus::Pending,
        Some(Resolution::Resolved(_)) => RouteStatus::Ready,
        Some(Resolution::Unavailable { status }) => RouteStatus::Unavailable {
            status: status.clone(),
        },
    };

    let (markers, legs, statistics) = match geometry {
        Some(geometry) if !geometry.is_empty() => (
            marker::markers(&record.trip, geometry),
            geometry.legs.clone(),
            RouteStatistics::from_geometry(geometry),
        ),
        _ => (vec![], vec![], None),
    };

    let route_info = &record.route_info;
    RouteView {
        status,
        distance_miles: distance.map(|(distance, _)| distance.as_miles()),
        distance_source: distance.map(|(_, source)| source),
        duration_hours: duration.map(|(duration, _)| duration.as_hours()),
        duration_source: duration.map(|(_, source)| source),
        total_trip_time_hours: record.trip.total_trip_time,
        markers,
        legs,
        statistics,
        breaks: route_info.breaks.clone(),
        fuel_stops: route_info.fuel_stops,
        overnight_rests: route_info.overnight_rests,
        feasible: route_info.feasible,
        provider_legs: route_info.legs.clone(),
    }
}

impl RouteView {
    pub fn marker(&self, role: MarkerRole) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.role == role)
    }

    /// Plain-text trip summary. Usable whether or not a map could be drawn.
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Distance: {} miles", format_number(self.distance_miles, 2)),
            format!(
                "Estimated Drive Time: {} hours",
                format_number(self.duration_hours, 2)
            ),
            format!(
                "Total Trip Time: {} hours (including breaks)",
                format_number(self.total_trip_time_hours, 2)
            ),
        ];
        lines.extend(self.breaks.iter().map(|item| {
            format!(
                "{} after {} hours of driving",
                item.label(),
                item.after_hours
            )
        }));
        lines.push(format!("Fuel Stops: {}", self.fuel_stops));
        if self.overnight_rests > 0 {
            lines.push(format!(
                "Overnight Rests Required: {}",
                self.overnight_rests
            ));
        }
        if let RouteStatus::Unavailable { status } = &self.status {
            lines.push(format!("Map unavailable: directions returned {status}"));
        }
        lines
    }
}
