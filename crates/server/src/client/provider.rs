use eldview::trip::{TripRecord, TripRequest};
use serde::Deserialize;
use tracing::{error, info};

use crate::error::{AppError, GENERIC_PROVIDER_ERROR};

pub const CALCULATE_ROUTE_PATH: &str = "/api/trips/calculate_route/";

#[derive(Deserialize, Debug)]
struct ProviderFailure {
    #[serde(default)]
    error: Option<String>,
}

/// Talks to the service that plans the trip and produces the duty logs.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProviderClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            CALCULATE_ROUTE_PATH
        )
    }

    /// One round trip, no retries. A refusal carries the provider's own
    /// message when it sent one.
    pub async fn calculate_route(&self, request: &TripRequest) -> Result<TripRecord, AppError> {
        let url = self.url();
        info!("Requesting trip record from {url}");
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|err| {
                error!("Failed to reach trip provider: {err}");
                AppError::Provider {
                    status: None,
                    message: GENERIC_PROVIDER_ERROR.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ProviderFailure>(&body)
                .ok()
                .and_then(|failure| failure.error)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| GENERIC_PROVIDER_ERROR.to_string());
            error!("Trip provider responded {status}: {message}");
            return Err(AppError::Provider {
                status: Some(status.as_u16()),
                message,
            });
        }

        response.json::<TripRecord>().await.map_err(|err| {
            error!("Trip provider sent a malformed record: {err}");
            AppError::Provider {
                status: None,
                message: GENERIC_PROVIDER_ERROR.to_string(),
            }
        })
    }
}
