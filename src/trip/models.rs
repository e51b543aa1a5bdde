use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TripRequest {
    #[serde(default)]
    pub current_location: String,
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub dropoff_location: String,
    /// `None` when absent. A value that is present but not a number is kept
    /// as NaN so validation can report it as such.
    #[serde(
        rename = "current_cycle_used",
        default,
        deserialize_with = "number_or_nan"
    )]
    pub current_cycle_used_hours: Option<f64>,
}

/// The provider's answer for one submission.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub trip: Trip,
    #[serde(default)]
    pub route_info: RouteInfo,
    #[serde(default)]
    pub eld_logs: Vec<DutyLog>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Trip {
    #[serde(default)]
    pub id: Option<u64>,
    pub current_location: String,
    #[serde(default)]
    pub pickup_location: String,
    pub dropoff_location: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub current_cycle_used: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_distance: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub estimated_drive_time: Option<f64>,
    #[serde(
        default,
        alias = "total_trip_time_hours",
        deserialize_with = "lenient_number"
    )]
    pub total_trip_time: Option<f64>,
}

impl Trip {
    /// A pickup only counts as its own stop when it is set and differs from
    /// where the driver currently is.
    pub fn has_distinct_pickup(&self) -> bool {
        !self.pickup_location.is_empty() && self.pickup_location != self.current_location
    }
}

/// Route totals are only taken when the provider sent an actual JSON number,
/// anything else reads as absent so the geometry fallback can take over.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RouteInfo {
    #[serde(default, deserialize_with = "strict_number")]
    pub total_distance: Option<f64>,
    #[serde(default, deserialize_with = "strict_number")]
    pub total_distance_miles: Option<f64>,
    #[serde(default, deserialize_with = "strict_number")]
    pub distance: Option<f64>,
    #[serde(default, deserialize_with = "strict_number")]
    pub total_duration: Option<f64>,
    #[serde(default, deserialize_with = "strict_number")]
    pub total_duration_hours: Option<f64>,
    #[serde(default, deserialize_with = "strict_number")]
    pub duration: Option<f64>,
    #[serde(default)]
    pub legs: Vec<LegSummary>,
    #[serde(default)]
    pub breaks: Vec<Break>,
    #[serde(default)]
    pub fuel_stops: u32,
    #[serde(default)]
    pub overnight_rests: u32,
    #[serde(default)]
    pub feasible: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LegSummary {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub distance_miles: f64,
    #[serde(default)]
    pub duration_hours: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakKind {
    #[serde(rename = "30_min_break")]
    ThirtyMinute,
    #[serde(rename = "daily_rest")]
    DailyRest,
    #[serde(rename = "other", other)]
    Other,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Break {
    #[serde(rename = "type", default)]
    pub kind: Option<BreakKind>,
    #[serde(default)]
    pub after_hours: f64,
    #[serde(default)]
    pub duration: Option<f64>,
}

impl Break {
    pub fn label(&self) -> &'static str {
        match self.kind {
            Some(BreakKind::ThirtyMinute) => "30 min break",
            Some(BreakKind::DailyRest) => "daily rest",
            Some(BreakKind::Other) => "other",
            None => "break",
        }
    }
}

/// One calendar day of duty-status record. Each status row holds the
/// minutes spent in that status for every hour of the day. Entries that are
/// not numbers are read as NaN rather than rejecting the whole record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DutyLog {
    pub log_date: NaiveDate,
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub carrier_name: String,
    #[serde(default)]
    pub vehicle_number: String,
    #[serde(default)]
    pub total_miles: u32,
    #[serde(default)]
    pub remarks: String,
    #[serde(default, deserialize_with = "minute_row")]
    pub off_duty: Vec<f64>,
    #[serde(default, deserialize_with = "minute_row")]
    pub sleeper_berth: Vec<f64>,
    #[serde(default, deserialize_with = "minute_row")]
    pub driving: Vec<f64>,
    #[serde(default, deserialize_with = "minute_row")]
    pub on_duty: Vec<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

fn strict_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Number(value) if value.is_finite() => Some(value),
        _ => None,
    })
}

impl Loose {
    fn into_number(self) -> f64 {
        match self {
            Self::Number(value) => value,
            Self::Text(text) => text.trim().parse().unwrap_or(f64::NAN),
            Self::Other(_) => f64::NAN,
        }
    }
}

fn number_or_nan<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?.map(Loose::into_number))
}

fn minute_row<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Loose>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(Loose::into_number)
        .collect())
}

/// Decimal columns arrive either as numbers or as numeric strings.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Number(value) => Some(value),
        Loose::Text(text) => text.trim().parse().ok(),
        Loose::Other(_) => None,
    }
    .filter(|value: &f64| value.is_finite()))
}
