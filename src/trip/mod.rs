use thiserror::Error;

pub mod models;
pub use models::*;

pub const MAX_CYCLE_HOURS: f64 = 70.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("current_cycle_used must be a number")]
    CycleNotANumber,
    #[error("current_cycle_used must be between 0 and 70 hours, got {0}")]
    CycleOutOfRange(f64),
}

impl TripRequest {
    /// Checks the request before anything is sent to the provider.
    pub fn validate(&self) -> Result<(), self::Error> {
        let locations = [
            ("current_location", &self.current_location),
            ("pickup_location", &self.pickup_location),
            ("dropoff_location", &self.dropoff_location),
        ];
        for (name, value) in locations {
            if value.trim().is_empty() {
                return Err(Error::MissingField(name));
            }
        }

        let cycle = self
            .current_cycle_used_hours
            .ok_or(Error::MissingField("current_cycle_used"))?;
        if !cycle.is_finite() {
            return Err(Error::CycleNotANumber);
        }
        if !(0.0..=MAX_CYCLE_HOURS).contains(&cycle) {
            return Err(Error::CycleOutOfRange(cycle));
        }
        Ok(())
    }
}
