use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    directions::{DirectionsRequest, Resolution},
    trip::TripRecord,
    view::TripView,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("A trip submission is already in flight")]
    Busy,
    #[error("Submission {0} is not the one in flight")]
    UnknownTicket(u64),
}

/// Identifies an accepted trip record. Strictly increasing within a session.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Handed out when a submission starts, redeemed when the provider answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct Plan {
    pub generation: Generation,
    pub record: Arc<TripRecord>,
    pub resolution: Option<Resolution>,
}

impl Plan {
    pub fn view(&self) -> TripView {
        TripView::build(&self.record, self.resolution.as_ref())
    }
}

/// Tracks the trip a single caller is looking at.
///
/// Only one provider call may be in flight at a time. Each accepted record
/// starts a new generation and drops the previous record together with its
/// geometry; directions answers are applied only if they were issued for the
/// current generation.
#[derive(Debug, Clone, Default)]
pub struct Session {
    submissions: u64,
    in_flight: Option<u64>,
    generation: Generation,
    current: Option<Plan>,
}

impl Session {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn current(&self) -> Option<&Plan> {
        self.current.as_ref()
    }

    pub fn view(&self) -> Option<TripView> {
        self.current.as_ref().map(Plan::view)
    }

    pub fn begin(&mut self) -> Result<Ticket, self::Error> {
        if self.in_flight.is_some() {
            return Err(Error::Busy);
        }
        self.submissions += 1;
        self.in_flight = Some(self.submissions);
        Ok(Ticket(self.submissions))
    }

    /// Ends a submission that produced no record. The previous plan stays.
    pub fn fail(&mut self, ticket: Ticket) {
        if self.in_flight == Some(ticket.0) {
            self.in_flight = None;
        }
    }

    /// Installs a fresh record, discarding the old one and any geometry
    /// attached to it. Returns the generation to tag the directions request
    /// with.
    pub fn accept(
        &mut self,
        ticket: Ticket,
        record: TripRecord,
    ) -> Result<(Generation, DirectionsRequest), self::Error> {
        if self.in_flight != Some(ticket.0) {
            return Err(Error::UnknownTicket(ticket.0));
        }
        self.in_flight = None;
        self.generation = Generation(self.generation.0 + 1);
        let request = DirectionsRequest::for_trip(&record.trip);
        self.current = Some(Plan {
            generation: self.generation,
            record: Arc::new(record),
            resolution: None,
        });
        info!("Accepted trip record as generation {}", self.generation.0);
        Ok((self.generation, request))
    }

    /// Applies a directions answer if it belongs to the current record.
    /// Returns whether it was applied.
    pub fn resolve(&mut self, generation: Generation, resolution: Resolution) -> bool {
        match self.current.as_mut() {
            Some(plan) if plan.generation == generation => {
                plan.resolution = Some(resolution);
                true
            }
            _ => {
                debug!(
                    "Discarding directions for generation {}, current is {}",
                    generation.0, self.generation.0
                );
                false
            }
        }
    }
}
