use eldview::{
    directions::{
        DirectionsRequest, DirectionsResponse, Error, Resolution, RouteGeometry,
        STATUS_REQUEST_FAILED,
    },
    trip::Trip,
};
use serde_json::json;

fn trip(pickup: &str) -> Trip {
    Trip {
        current_location: "Chicago, IL".into(),
        pickup_location: pickup.into(),
        dropoff_location: "Nashville, TN".into(),
        ..Default::default()
    }
}

#[test]
fn pickup_becomes_the_only_waypoint() {
    let request = DirectionsRequest::for_trip(&trip("Indianapolis, IN"));
    assert_eq!(request.origin, "Chicago, IL");
    assert_eq!(request.destination, "Nashville, TN");
    assert_eq!(request.waypoints.len(), 1);
    assert!(request.waypoints[0].stopover);
    assert!(!request.optimize_waypoints);

    let query = request.query();
    assert!(query.contains(&("waypoints", "Indianapolis, IN".to_string())));
    assert!(query.contains(&("mode", "driving".to_string())));
    assert!(!query.iter().any(|(_, value)| value.contains("optimize")));
}

#[test]
fn pickup_at_origin_adds_no_waypoint() {
    let request = DirectionsRequest::for_trip(&trip("Chicago, IL"));
    assert!(request.waypoints.is_empty());
    assert!(!request.query().iter().any(|(key, _)| *key == "waypoints"));
}

#[test]
fn ok_response_keeps_leg_order() {
    let response: DirectionsResponse = serde_json::from_value(json!({
        "status": "OK",
        "routes": [{"legs": [
            {
                "start_location": {"lat": 41.88, "lng": -87.63},
                "end_location": {"lat": 39.77, "lng": -86.16},
                "distance": {"text": "184 mi", "value": 296_000},
                "duration": {"text": "2 hours 55 mins", "value": 10_500},
                "start_address": "Chicago, IL, USA",
                "end_address": "Indianapolis, IN, USA"
            },
            {
                "start_location": {"lat": 39.77, "lng": -86.16},
                "end_location": {"lat": 36.16, "lng": -86.78},
                "start_address": "Indianapolis, IN, USA",
                "end_address": "Nashville, TN, USA"
            }
        ]}]
    }))
    .unwrap();

    let geometry = response.into_geometry().unwrap();
    assert_eq!(geometry.len(), 2);
    assert_eq!(geometry.legs[0].end_address, "Indianapolis, IN, USA");
    assert_eq!(geometry.legs[0].distance_meters, 296_000.0);
    assert_eq!(geometry.legs[1].distance_meters, 0.0);
    assert_eq!(
        geometry.total_distance().map(|distance| distance.as_meters()),
        Some(296_000.0)
    );
}

#[test]
fn failed_status_carries_the_raw_status() {
    let response: DirectionsResponse = serde_json::from_value(json!({
        "status": "REQUEST_DENIED",
        "error_message": "The provided API key is invalid.",
        "routes": []
    }))
    .unwrap();

    let err = response.into_geometry().unwrap_err();
    assert_eq!(err.status(), "REQUEST_DENIED");
    assert_eq!(
        Resolution::from(Err::<RouteGeometry, _>(err)),
        Resolution::Unavailable {
            status: "REQUEST_DENIED".into()
        }
    );
}

#[test]
fn transport_failure_is_unavailable() {
    let resolution = Resolution::from(Err::<RouteGeometry, _>(Error::Request(
        "connection refused".into(),
    )));
    assert_eq!(
        resolution,
        Resolution::Unavailable {
            status: STATUS_REQUEST_FAILED.into()
        }
    );
    assert!(resolution.geometry().is_none());
}
