use eldview::directions::{
    self, DirectionsRequest, DirectionsResponse, Resolution, RouteGeometry,
};
use reqwest::Url;
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    url: String,
    key: String,
}

impl DirectionsClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            key: key.into(),
        }
    }

    /// Never fails outright: anything short of a usable route comes back as
    /// [`Resolution::Unavailable`] with the status that explains it.
    pub async fn resolve(&self, request: &DirectionsRequest) -> Resolution {
        let result = self.fetch(request).await;
        if let Err(err) = &result {
            warn!("Directions unavailable: {err}");
        }
        Resolution::from(result)
    }

    async fn fetch(
        &self,
        request: &DirectionsRequest,
    ) -> Result<RouteGeometry, directions::Error> {
        let mut query = request.query();
        info!(
            "Requesting directions {} -> {} via {} waypoint(s)",
            request.origin,
            request.destination,
            request.waypoints.len()
        );
        query.push(("key", self.key.clone()));
        let url = Url::parse_with_params(&self.url, &query).map_err(|err| {
            error!("Invalid directions url {}: {err}", self.url);
            directions::Error::Request(err.to_string())
        })?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| directions::Error::Request(err.without_url().to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(directions::Error::Status {
                status: format!("HTTP_{}", status.as_u16()),
                message: None,
            });
        }

        let body: DirectionsResponse = response
            .json()
            .await
            .map_err(|err| directions::Error::Request(err.without_url().to_string()))?;
        body.into_geometry()
    }
}
