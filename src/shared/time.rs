use std::iter::Sum;

const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_MINUTE: f64 = 60.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Like [`Distance`](super::Distance), a duration keeps its original unit so
/// hours reported by the trip provider survive untouched.
#[derive(Debug, Clone, Copy)]
pub enum Duration {
    Seconds(f64),
    Hours(f64),
}

impl Default for Duration {
    fn default() -> Self {
        Self::Seconds(0.0)
    }
}

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Hours(a), Self::Hours(b)) => a == b,
            _ => self.as_seconds() == other.as_seconds(),
        }
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::seconds(iter.map(|duration| duration.as_seconds()).sum())
    }
}

impl Duration {
    pub const fn seconds(secs: f64) -> Self {
        Self::Seconds(secs)
    }

    pub const fn hours(hours: f64) -> Self {
        Self::Hours(hours)
    }

    pub fn as_seconds(&self) -> f64 {
        match self {
            Self::Seconds(value) => *value,
            Self::Hours(value) => value * SECONDS_PER_HOUR,
        }
    }

    pub fn as_hours(&self) -> f64 {
        match self {
            Self::Seconds(value) => value / SECONDS_PER_HOUR,
            Self::Hours(value) => *value,
        }
    }

    /// Formats as `"X h Y m"`, or `"Y m"` under an hour. A zero or
    /// non-finite duration has nothing meaningful to show and yields `N/A`.
    pub fn to_human_string(&self) -> String {
        let total = self.as_seconds();
        if !total.is_finite() || total == 0.0 {
            return super::NOT_AVAILABLE.to_string();
        }
        let total_minutes = (total / SECONDS_PER_MINUTE).round();
        let hours = (total_minutes / MINUTES_PER_HOUR).floor();
        let minutes = total_minutes % MINUTES_PER_HOUR;
        if hours > 0.0 {
            format!("{hours} h {minutes} m")
        } else {
            format!("{minutes} m")
        }
    }
}

#[test]
fn human_string_with_hours() {
    let duration = Duration::seconds(26_100.0);
    assert_eq!(duration.to_human_string(), "7 h 15 m");
}

#[test]
fn human_string_minutes_only() {
    let duration = Duration::seconds(1_530.0);
    assert_eq!(duration.to_human_string(), "26 m");
}

#[test]
fn human_string_rounds_into_the_next_hour() {
    assert_eq!(Duration::seconds(7_170.0).to_human_string(), "2 h 0 m");
    assert_eq!(Duration::seconds(3_570.0).to_human_string(), "1 h 0 m");
}

#[test]
fn human_string_zero_is_not_available() {
    assert_eq!(Duration::seconds(0.0).to_human_string(), "N/A");
}

#[test]
fn hours_are_kept_verbatim() {
    assert_eq!(Duration::hours(8.05).as_hours(), 8.05);
    assert_eq!(Duration::hours(1.0), Duration::seconds(3600.0));
}
