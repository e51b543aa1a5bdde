use serde::Serialize;

use crate::{
    eld::grid::{DutyStatus, HOURS_PER_DAY, MINUTES_PER_HOUR, is_valid_minutes},
    trip::DutyLog,
};

/// Slack for fractional minutes when checking an hour adds up.
const MINUTE_TOLERANCE: f64 = 1e-6;

/// Whether a day's minutes add up. An inconsistent day is still rendered;
/// the verdict only travels alongside it.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Consistency {
    #[default]
    Consistent,
    Inconsistent {
        /// Hours whose four statuses do not sum to a full hour.
        hours: Vec<usize>,
        /// Statuses whose row is not exactly one entry per hour.
        malformed_rows: Vec<DutyStatus>,
        /// Entries that are negative or not a number. They read as zero.
        invalid_entries: Vec<InvalidEntry>,
    },
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidEntry {
    pub status: DutyStatus,
    pub hour: usize,
}

impl Consistency {
    pub fn is_consistent(&self) -> bool {
        matches!(self, Self::Consistent)
    }
}

pub fn check(log: &DutyLog) -> Consistency {
    let malformed_rows: Vec<DutyStatus> = DutyStatus::ALL
        .into_iter()
        .filter(|status| status.minutes(log).len() != HOURS_PER_DAY)
        .collect();

    let invalid_entries: Vec<InvalidEntry> = DutyStatus::ALL
        .into_iter()
        .flat_map(|status| {
            status
                .minutes(log)
                .iter()
                .enumerate()
                .filter(|(_, minutes)| !is_valid_minutes(**minutes))
                .map(move |(hour, _)| InvalidEntry { status, hour })
        })
        .collect();

    let hours: Vec<usize> = (0..HOURS_PER_DAY)
        .filter(|&hour| {
            let total: f64 = DutyStatus::ALL
                .iter()
                .map(|status| status.minutes_at(log, hour))
                .sum();
            (total - MINUTES_PER_HOUR).abs() > MINUTE_TOLERANCE
        })
        .collect();

    if hours.is_empty() && malformed_rows.is_empty() && invalid_entries.is_empty() {
        Consistency::Consistent
    } else {
        Consistency::Inconsistent {
            hours,
            malformed_rows,
            invalid_entries,
        }
    }
}
