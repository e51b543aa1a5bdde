use crate::{dto::SessionDto, error::AppError, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
};
use eldview::{session::Ticket, trip::TripRequest};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub async fn session(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionDto>, AppError> {
    let mut sessions = state.sessions.write().await;
    sessions
        .get_mut(&id)
        .and_then(|session| SessionDto::from(session))
        .map(Json)
        .ok_or_else(|| AppError::NotFound(id))
}

/// Releases a submission's ticket unless it was redeemed. Covers the
/// handler future being dropped while the provider call is pending.
struct InFlight {
    state: Arc<AppState>,
    id: String,
    ticket: Option<Ticket>,
}

impl InFlight {
    fn redeem(&mut self) {
        self.ticket = None;
    }

    async fn release(mut self) {
        if let Some(ticket) = self.ticket.take() {
            release(&self.state, &self.id, ticket).await;
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let Some(ticket) = self.ticket.take() else {
            return;
        };
        warn!("Submission for session {} abandoned", self.id);
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let state = self.state.clone();
            let id = std::mem::take(&mut self.id);
            handle.spawn(async move { release(&state, &id, ticket).await });
        }
    }
}

async fn release(state: &AppState, id: &str, ticket: Ticket) {
    if let Some(session) = state.sessions.write().await.get_mut(id) {
        session.fail(ticket);
    }
}

/// Submits a trip into a session.
///
/// Answers as soon as the provider does, with the route still pending. The
/// directions lookup runs in the background and only lands if no newer trip
/// has been accepted for the session in the meantime.
pub async fn submit_trip(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<TripRequest>,
) -> Result<Json<SessionDto>, AppError> {
    request.validate()?;
    let ticket = state.sessions.write().await.entry(&id).begin()?;
    let mut in_flight = InFlight {
        state: state.clone(),
        id: id.clone(),
        ticket: Some(ticket),
    };

    let record = match state.provider.calculate_route(&request).await {
        Ok(record) => record,
        Err(err) => {
            in_flight.release().await;
            return Err(err);
        }
    };

    let (generation, directions_request, dto) = {
        let mut sessions = state.sessions.write().await;
        let session = sessions.entry(&id);
        in_flight.redeem();
        let (generation, directions_request) = session.accept(ticket, record)?;
        (generation, directions_request, SessionDto::from(session))
    };
    info!(
        "Session {id} moved to generation {}",
        generation.as_u64()
    );

    let task_state = state.clone();
    let task_id = id.clone();
    tokio::spawn(async move {
        let resolution = task_state.directions.resolve(&directions_request).await;
        if let Some(session) = task_state.sessions.write().await.get_mut(&task_id) {
            let applied = session.resolve(generation, resolution);
            debug!("Directions for session {task_id} applied: {applied}");
        }
    });

    dto.map(Json).ok_or_else(|| AppError::NotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{client::CALCULATE_ROUTE_PATH, config::Config};
    use eldview::reconcile::{MarkerRole, RouteStatus};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn minutes(value: u32) -> Vec<u32> {
        vec![value; 24]
    }

    async fn mock_backends() -> (MockServer, Arc<AppState>) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CALCULATE_ROUTE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "trip": {
                    "current_location": "Chicago, IL",
                    "pickup_location": "Indianapolis, IN",
                    "dropoff_location": "Nashville, TN",
                    "total_trip_time": 10.5
                },
                "route_info": {"breaks": [], "fuel_stops": 0, "overnight_rests": 0},
                "eld_logs": [{
                    "log_date": "2026-10-16",
                    "driver_name": "Driver",
                    "carrier_name": "Carrier",
                    "vehicle_number": "TRK-1",
                    "total_miles": 470,
                    "remarks": "Day 1",
                    "off_duty": minutes(60),
                    "sleeper_berth": minutes(0),
                    "driving": minutes(0),
                    "on_duty": minutes(0)
                }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/directions/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "routes": [{"legs": [
                    {
                        "start_location": {"lat": 41.88, "lng": -87.63},
                        "end_location": {"lat": 39.77, "lng": -86.16},
                        "distance": {"text": "", "value": 296000.0},
                        "duration": {"text": "", "value": 10500.0}
                    },
                    {
                        "start_location": {"lat": 39.77, "lng": -86.16},
                        "end_location": {"lat": 36.16, "lng": -86.78},
                        "distance": {"text": "", "value": 463000.0},
                        "duration": {"text": "", "value": 16000.0}
                    }
                ]}]
            })))
            .mount(&server)
            .await;

        let config = Config {
            provider_url: server.uri(),
            directions_key: "secret".into(),
            directions_url: format!("{}/directions/json", server.uri()),
            port: 0,
            request_timeout: Duration::from_secs(5),
            max_sessions: 16,
            session_idle: Duration::from_secs(60),
        };
        let state = Arc::new(AppState::new(&config).unwrap());
        (server, state)
    }

    fn request() -> TripRequest {
        TripRequest {
            current_location: "Chicago, IL".into(),
            pickup_location: "Indianapolis, IN".into(),
            dropoff_location: "Nashville, TN".into(),
            current_cycle_used_hours: Some(20.0),
        }
    }

    #[tokio::test]
    async fn submission_resolves_in_the_background() {
        let (_server, state) = mock_backends().await;
        let Json(submitted) = submit_trip(
            Path("driver-1".to_string()),
            State(state.clone()),
            Json(request()),
        )
        .await
        .unwrap();
        assert_eq!(submitted.generation, 1);
        assert_eq!(submitted.view.logs.len(), 1);

        let mut resolved = None;
        for _ in 0..50 {
            let Json(current) = session(Path("driver-1".to_string()), State(state.clone()))
                .await
                .unwrap();
            if current.view.route.status == RouteStatus::Ready {
                resolved = Some(current);
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        let resolved = resolved.expect("directions never landed");
        assert!(resolved.view.route.marker(MarkerRole::Pickup).is_some());
        let distance = resolved.view.route.distance_miles.unwrap();
        assert!((distance - 759_000.0 / 1609.34).abs() < 1e-9);
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_the_provider() {
        let (server, state) = mock_backends().await;
        let mut bad = request();
        bad.current_cycle_used_hours = Some(71.0);
        let err = submit_trip(Path("driver-2".to_string()), State(state), Json(bad))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "validation");
        let received = server.received_requests().await.unwrap_or_default();
        assert!(received.is_empty());
    }

    #[tokio::test]
    async fn second_submission_while_in_flight_is_busy() {
        let (_server, state) = mock_backends().await;
        state
            .sessions
            .write()
            .await
            .entry("driver-3")
            .begin()
            .unwrap();
        let err = submit_trip(Path("driver-3".to_string()), State(state), Json(request()))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "busy");
    }

    #[tokio::test]
    async fn abandoned_submission_frees_the_session() {
        let (server, state) = mock_backends().await;
        Mock::given(method("POST"))
            .and(path(CALCULATE_ROUTE_PATH))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&server)
            .await;

        let abandoned = tokio::time::timeout(
            Duration::from_millis(200),
            submit_trip(
                Path("driver-4".to_string()),
                State(state.clone()),
                Json(request()),
            ),
        )
        .await;
        assert!(abandoned.is_err());

        let mut released = false;
        for _ in 0..50 {
            let busy = state
                .sessions
                .write()
                .await
                .get_mut("driver-4")
                .map(|session| session.is_busy());
            if busy == Some(false) {
                released = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(released);

        let Json(retried) = submit_trip(Path("driver-4".to_string()), State(state), Json(request()))
            .await
            .unwrap();
        assert_eq!(retried.generation, 1);
        assert!(!retried.busy);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let (_server, state) = mock_backends().await;
        let err = session(Path("nobody".to_string()), State(state))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "not_found");
    }
}
