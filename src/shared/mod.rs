pub mod geo;
pub mod time;

pub use geo::*;
pub use time::*;

pub const NOT_AVAILABLE: &str = "N/A";

/// Renders an optional quantity with fixed decimals. Missing or non-finite
/// values render as `N/A`, never as zero.
pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(value) if value.is_finite() => format!("{value:.decimals$}"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[test]
fn format_number_two_decimals() {
    assert_eq!(format_number(Some(450.0), 2), "450.00");
    assert_eq!(format_number(Some(8.999), 2), "9.00");
}

#[test]
fn format_number_missing_is_not_zero() {
    assert_eq!(format_number(None, 2), "N/A");
    assert_eq!(format_number(Some(f64::NAN), 2), "N/A");
}
