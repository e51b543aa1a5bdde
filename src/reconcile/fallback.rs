use serde::Serialize;

use crate::{
    directions::RouteGeometry,
    shared::{Distance, Duration},
    trip::RouteInfo,
};

/// Where a reconciled total came from.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TotalSource {
    /// `route_info.total_*` from the trip record.
    RecordTotal,
    /// `route_info.total_distance_miles`/`total_duration_hours`, the unit
    /// suffixed spelling of the same totals.
    RecordUnitTotal,
    /// The older `route_info.distance`/`duration` keys.
    RecordLegacy,
    /// Summed from the directions legs.
    Geometry,
}

pub struct Inputs<'a> {
    pub route_info: &'a RouteInfo,
    pub geometry: Option<&'a RouteGeometry>,
}

/// One step of a precedence chain. The first step whose predicate holds
/// supplies the value.
pub struct Source<T> {
    pub kind: TotalSource,
    pub applies: fn(&Inputs<'_>) -> bool,
    pub extract: fn(&Inputs<'_>) -> T,
}

pub const DISTANCE_SOURCES: &[Source<Distance>] = &[
    Source {
        kind: TotalSource::RecordTotal,
        applies: has_total_distance,
        extract: total_distance,
    },
    Source {
        kind: TotalSource::RecordUnitTotal,
        applies: has_total_distance_miles,
        extract: total_distance_miles,
    },
    Source {
        kind: TotalSource::RecordLegacy,
        applies: has_legacy_distance,
        extract: legacy_distance,
    },
    Source {
        kind: TotalSource::Geometry,
        applies: has_geometry,
        extract: geometry_distance,
    },
];

pub const DURATION_SOURCES: &[Source<Duration>] = &[
    Source {
        kind: TotalSource::RecordTotal,
        applies: has_total_duration,
        extract: total_duration,
    },
    Source {
        kind: TotalSource::RecordUnitTotal,
        applies: has_total_duration_hours,
        extract: total_duration_hours,
    },
    Source {
        kind: TotalSource::RecordLegacy,
        applies: has_legacy_duration,
        extract: legacy_duration,
    },
    Source {
        kind: TotalSource::Geometry,
        applies: has_geometry,
        extract: geometry_duration,
    },
];

/// Walks `chain` in order and returns the first applicable value together
/// with the source that produced it.
pub fn first_available<T>(chain: &[Source<T>], inputs: &Inputs<'_>) -> Option<(T, TotalSource)> {
    chain
        .iter()
        .find(|source| (source.applies)(inputs))
        .map(|source| ((source.extract)(inputs), source.kind))
}

fn has_total_distance(inputs: &Inputs<'_>) -> bool {
    inputs.route_info.total_distance.is_some()
}

fn total_distance(inputs: &Inputs<'_>) -> Distance {
    Distance::miles(inputs.route_info.total_distance.unwrap_or_default())
}

fn has_total_distance_miles(inputs: &Inputs<'_>) -> bool {
    inputs.route_info.total_distance_miles.is_some()
}

fn total_distance_miles(inputs: &Inputs<'_>) -> Distance {
    Distance::miles(inputs.route_info.total_distance_miles.unwrap_or_default())
}

fn has_legacy_distance(inputs: &Inputs<'_>) -> bool {
    inputs.route_info.distance.is_some()
}

fn legacy_distance(inputs: &Inputs<'_>) -> Distance {
    Distance::miles(inputs.route_info.distance.unwrap_or_default())
}

fn has_total_duration(inputs: &Inputs<'_>) -> bool {
    inputs.route_info.total_duration.is_some()
}

fn total_duration(inputs: &Inputs<'_>) -> Duration {
    Duration::hours(inputs.route_info.total_duration.unwrap_or_default())
}

fn has_total_duration_hours(inputs: &Inputs<'_>) -> bool {
    inputs.route_info.total_duration_hours.is_some()
}

fn total_duration_hours(inputs: &Inputs<'_>) -> Duration {
    Duration::hours(inputs.route_info.total_duration_hours.unwrap_or_default())
}

fn has_legacy_duration(inputs: &Inputs<'_>) -> bool {
    inputs.route_info.duration.is_some()
}

fn legacy_duration(inputs: &Inputs<'_>) -> Duration {
    Duration::hours(inputs.route_info.duration.unwrap_or_default())
}

fn has_geometry(inputs: &Inputs<'_>) -> bool {
    inputs.geometry.is_some_and(|geometry| !geometry.is_empty())
}

fn geometry_distance(inputs: &Inputs<'_>) -> Distance {
    inputs
        .geometry
        .and_then(RouteGeometry::total_distance)
        .unwrap_or_default()
}

fn geometry_duration(inputs: &Inputs<'_>) -> Duration {
    inputs
        .geometry
        .and_then(RouteGeometry::total_duration)
        .unwrap_or_default()
}
