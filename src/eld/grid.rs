use serde::{Deserialize, Serialize};

use crate::trip::DutyLog;

pub const HOURS_PER_DAY: usize = 24;
pub const MINUTES_PER_HOUR: f64 = 60.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDuty,
}

impl DutyStatus {
    /// Row order of a paper log sheet.
    pub const ALL: [DutyStatus; 4] = [
        Self::OffDuty,
        Self::SleeperBerth,
        Self::Driving,
        Self::OnDuty,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::OffDuty => "Off Duty",
            Self::SleeperBerth => "Sleeper Berth",
            Self::Driving => "Driving",
            Self::OnDuty => "On Duty",
        }
    }

    /// The source row of minutes for this status, unreadable entries included.
    pub fn minutes<'a>(&self, log: &'a DutyLog) -> &'a [f64] {
        match self {
            Self::OffDuty => &log.off_duty,
            Self::SleeperBerth => &log.sleeper_berth,
            Self::Driving => &log.driving,
            Self::OnDuty => &log.on_duty,
        }
    }

    /// Minutes at `hour`. Hours past the end of a short row, and entries
    /// that are not a valid amount of minutes, read as zero.
    pub fn minutes_at(&self, log: &DutyLog, hour: usize) -> f64 {
        self.minutes(log)
            .get(hour)
            .copied()
            .filter(|minutes| is_valid_minutes(*minutes))
            .unwrap_or(0.0)
    }
}

pub fn is_valid_minutes(minutes: f64) -> bool {
    minutes.is_finite() && minutes >= 0.0
}

/// One value per duty status.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerStatus<T> {
    pub off_duty: T,
    pub sleeper_berth: T,
    pub driving: T,
    pub on_duty: T,
}

impl<T> PerStatus<T> {
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(DutyStatus) -> T,
    {
        Self {
            off_duty: f(DutyStatus::OffDuty),
            sleeper_berth: f(DutyStatus::SleeperBerth),
            driving: f(DutyStatus::Driving),
            on_duty: f(DutyStatus::OnDuty),
        }
    }

    pub fn get(&self, status: DutyStatus) -> &T {
        match status {
            DutyStatus::OffDuty => &self.off_duty,
            DutyStatus::SleeperBerth => &self.sleeper_berth,
            DutyStatus::Driving => &self.driving,
            DutyStatus::OnDuty => &self.on_duty,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (DutyStatus, &T)> {
        DutyStatus::ALL
            .into_iter()
            .map(move |status| (status, self.get(status)))
    }
}

/// A day's log sheet: for every status, whether any time was spent in it
/// during each hour.
pub type Grid = PerStatus<[bool; HOURS_PER_DAY]>;

impl Grid {
    pub fn is_marked(&self, status: DutyStatus, hour: usize) -> bool {
        self.get(status).get(hour).copied().unwrap_or(false)
    }
}

/// Marks hour `i` of a status iff the log has non-zero minutes there. The
/// grid is always 24 wide regardless of the source row length.
pub fn build_grid(log: &DutyLog) -> Grid {
    PerStatus::from_fn(|status| {
        std::array::from_fn(|hour| status.minutes_at(log, hour) > 0.0)
    })
}

/// Total minutes spent in each status over the day, as recorded.
pub fn status_totals(log: &DutyLog) -> PerStatus<f64> {
    PerStatus::from_fn(|status| {
        (0..HOURS_PER_DAY)
            .map(|hour| status.minutes_at(log, hour))
            .sum()
    })
}
