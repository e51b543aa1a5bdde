pub mod directions;
pub mod eld;
pub mod reconcile;
pub mod session;
pub mod shared;
pub mod trip;
pub mod view;

pub mod prelude {
    pub use crate::directions::{DirectionsRequest, DirectionsResponse, Resolution, RouteGeometry};
    pub use crate::eld::{DailyLog, DutyStatus, Grid, build_grid, build_logs};
    pub use crate::reconcile::{MarkerRole, RouteStatus, RouteView, reconcile};
    pub use crate::session::{Generation, Session};
    pub use crate::trip::{DutyLog, TripRecord, TripRequest};
    pub use crate::view::TripView;
}
