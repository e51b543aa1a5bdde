use crate::{error::AppError, state::AppState};
use axum::{Json, extract::State};
use eldview::{directions::DirectionsRequest, trip::TripRequest, view::TripView};
use std::sync::Arc;
use tracing::warn;

/// Stateless variant: provider, then directions, then the merged view in a
/// single response.
pub async fn plan(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TripRequest>,
) -> Result<Json<TripView>, AppError> {
    request.validate()?;
    let record = state.provider.calculate_route(&request).await?;
    let resolution = state
        .directions
        .resolve(&DirectionsRequest::for_trip(&record.trip))
        .await;
    let view = TripView::build(&record, Some(&resolution));
    if view.has_inconsistent_logs() {
        warn!(
            "Trip {:?} has duty logs whose minutes do not add up",
            record.trip.id
        );
    }
    Ok(Json(view))
}
