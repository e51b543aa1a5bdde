pub mod consistency;
pub mod grid;

pub use consistency::{Consistency, InvalidEntry};
pub use grid::*;

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;
use tracing::warn;

use crate::trip::DutyLog;

/// A rendered day: the grid, the header fields exactly as recorded, and the
/// consistency verdict.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DailyLog {
    pub log_date: NaiveDate,
    pub driver_name: String,
    pub carrier_name: String,
    pub vehicle_number: String,
    pub total_miles: u32,
    pub remarks: String,
    pub grid: Grid,
    pub totals: PerStatus<f64>,
    pub consistency: Consistency,
}

impl DailyLog {
    pub fn build(log: &DutyLog) -> Self {
        let consistency = consistency::check(log);
        if let Consistency::Inconsistent {
            hours,
            malformed_rows,
            invalid_entries,
        } = &consistency
        {
            warn!(
                "Log for {} is inconsistent: hours {:?}, malformed rows {:?}, invalid entries {:?}",
                log.log_date, hours, malformed_rows, invalid_entries
            );
        }
        Self {
            log_date: log.log_date,
            driver_name: log.driver_name.clone(),
            carrier_name: log.carrier_name.clone(),
            vehicle_number: log.vehicle_number.clone(),
            total_miles: log.total_miles,
            remarks: log.remarks.clone(),
            grid: build_grid(log),
            totals: status_totals(log),
            consistency,
        }
    }
}

/// Builds every day independently. Output order matches input order.
pub fn build_logs(logs: &[DutyLog]) -> Vec<DailyLog> {
    logs.par_iter().map(DailyLog::build).collect()
}
