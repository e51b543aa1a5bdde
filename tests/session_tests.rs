use eldview::{
    directions::{Leg, Resolution, RouteGeometry},
    reconcile::{MarkerRole, RouteStatus},
    session::{Error as SessionError, Session},
    shared::Coordinate,
    trip::TripRecord,
};
use serde_json::json;

fn record(dropoff: &str, total_distance: f64) -> TripRecord {
    serde_json::from_value(json!({
        "trip": {
            "current_location": "Chicago, IL",
            "pickup_location": "Indianapolis, IN",
            "dropoff_location": dropoff
        },
        "route_info": {"total_distance": total_distance}
    }))
    .unwrap()
}

fn geometry(end: (f64, f64)) -> Resolution {
    let leg = |start: (f64, f64), end: (f64, f64)| Leg {
        start_point: Coordinate::from(start),
        end_point: Coordinate::from(end),
        distance_meters: 100_000.0,
        duration_seconds: 3_600.0,
        start_address: String::new(),
        end_address: String::new(),
    };
    Resolution::Resolved(RouteGeometry::new(vec![
        leg((41.88, -87.63), (39.77, -86.16)),
        leg((39.77, -86.16), end),
    ]))
}

#[test]
fn only_one_submission_in_flight() {
    let mut session = Session::new();
    let _ticket = session.begin().unwrap();
    assert!(session.is_busy());
    assert_eq!(session.begin(), Err(SessionError::Busy));
}

#[test]
fn failed_submission_frees_the_session_and_keeps_the_old_trip() {
    let mut session = Session::new();
    let ticket = session.begin().unwrap();
    session.accept(ticket, record("Nashville, TN", 470.0)).unwrap();

    let ticket = session.begin().unwrap();
    session.fail(ticket);
    assert!(!session.is_busy());
    let view = session.view().unwrap();
    assert_eq!(view.route.distance_miles, Some(470.0));
}

#[test]
fn accepted_record_starts_pending_then_resolves() {
    let mut session = Session::new();
    let ticket = session.begin().unwrap();
    let (generation, request) = session
        .accept(ticket, record("Nashville, TN", 470.0))
        .unwrap();
    assert_eq!(request.waypoints.len(), 1);
    assert!(!request.optimize_waypoints);
    assert_eq!(
        session.view().unwrap().route.status,
        RouteStatus::Pending
    );

    assert!(session.resolve(generation, geometry((36.16, -86.78))));
    let view = session.view().unwrap();
    assert_eq!(view.route.status, RouteStatus::Ready);
    assert_eq!(view.route.markers.len(), 3);
}

#[test]
fn stale_directions_are_discarded() {
    let mut session = Session::new();
    let ticket = session.begin().unwrap();
    let (first, _) = session
        .accept(ticket, record("Nashville, TN", 470.0))
        .unwrap();

    let ticket = session.begin().unwrap();
    let (second, _) = session
        .accept(ticket, record("Atlanta, GA", 720.0))
        .unwrap();
    assert!(second > first);

    // Directions for the first trip arrive late.
    assert!(!session.resolve(first, geometry((36.16, -86.78))));
    let view = session.view().unwrap();
    assert_eq!(view.route.status, RouteStatus::Pending);
    assert!(view.route.markers.is_empty());
    assert_eq!(view.route.distance_miles, Some(720.0));

    assert!(session.resolve(second, geometry((33.75, -84.39))));
    let view = session.view().unwrap();
    assert_eq!(
        view.route.marker(MarkerRole::Dropoff).unwrap().position,
        Coordinate::from((33.75, -84.39))
    );
}

#[test]
fn new_record_drops_previous_geometry() {
    let mut session = Session::new();
    let ticket = session.begin().unwrap();
    let (first, _) = session
        .accept(ticket, record("Nashville, TN", 470.0))
        .unwrap();
    session.resolve(first, geometry((36.16, -86.78)));

    let ticket = session.begin().unwrap();
    session.accept(ticket, record("Atlanta, GA", 720.0)).unwrap();
    let plan = session.current().unwrap();
    assert!(plan.resolution.is_none());
    assert_eq!(plan.record.trip.dropoff_location, "Atlanta, GA");
}

#[test]
fn accept_requires_the_ticket_in_flight() {
    let mut session = Session::new();
    let ticket = session.begin().unwrap();
    session.fail(ticket);
    let err = session
        .accept(ticket, record("Nashville, TN", 470.0))
        .unwrap_err();
    assert!(matches!(err, SessionError::UnknownTicket(_)));
}
