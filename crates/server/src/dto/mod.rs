use eldview::{session::Session, view::TripView};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SessionDto {
    pub generation: u64,
    pub busy: bool,
    pub view: TripView,
}

impl SessionDto {
    pub fn from(session: &Session) -> Option<Self> {
        Some(Self {
            generation: session.generation().as_u64(),
            busy: session.is_busy(),
            view: session.view()?,
        })
    }
}
