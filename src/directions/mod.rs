use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub mod models;
pub mod request;
pub use models::*;
pub use request::*;

/// Status reported when the directions service could not be reached at all.
pub const STATUS_REQUEST_FAILED: &str = "REQUEST_FAILED";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Directions service returned status {status}")]
    Status {
        status: String,
        message: Option<String>,
    },
    #[error("Directions request failed: {0}")]
    Request(String),
}

impl Error {
    /// The raw status to hand to the view.
    pub fn status(&self) -> &str {
        match self {
            Self::Status { status, .. } => status,
            Self::Request(_) => STATUS_REQUEST_FAILED,
        }
    }
}

impl DirectionsResponse {
    /// Takes the first route's legs on success, the raw status otherwise.
    pub fn into_geometry(self) -> Result<RouteGeometry, self::Error> {
        if self.status != STATUS_OK {
            return Err(Error::Status {
                status: self.status,
                message: self.error_message,
            });
        }
        let legs: Vec<Leg> = self
            .routes
            .into_iter()
            .next()
            .map(|route| route.legs.into_iter().map(Leg::from).collect())
            .unwrap_or_default();
        debug!("Directions resolved into {} legs", legs.len());
        Ok(RouteGeometry::new(legs))
    }
}

/// Outcome of asking the directions service about a trip.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Resolution {
    Resolved(RouteGeometry),
    Unavailable { status: String },
}

impl From<Result<RouteGeometry, self::Error>> for Resolution {
    fn from(value: Result<RouteGeometry, self::Error>) -> Self {
        match value {
            Ok(geometry) => Self::Resolved(geometry),
            Err(err) => Self::Unavailable {
                status: err.status().to_string(),
            },
        }
    }
}

impl Resolution {
    pub fn geometry(&self) -> Option<&RouteGeometry> {
        match self {
            Self::Resolved(geometry) => Some(geometry),
            Self::Unavailable { .. } => None,
        }
    }
}
