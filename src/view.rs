use serde::Serialize;

use crate::{
    directions::Resolution,
    eld::{self, DailyLog},
    reconcile::{self, RouteView},
    trip::TripRecord,
};

/// Everything the presentation layer needs for one trip.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TripView {
    pub route: RouteView,
    pub summary: Vec<String>,
    pub logs: Vec<DailyLog>,
}

impl TripView {
    pub fn build(record: &TripRecord, resolution: Option<&Resolution>) -> Self {
        let route = reconcile::reconcile(record, resolution);
        let summary = route.summary();
        Self {
            route,
            summary,
            logs: eld::build_logs(&record.eld_logs),
        }
    }

    /// True when at least one day failed its minute totals.
    pub fn has_inconsistent_logs(&self) -> bool {
        self.logs.iter().any(|log| !log.consistency.is_consistent())
    }
}
