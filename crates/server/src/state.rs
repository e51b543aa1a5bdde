use crate::{
    client::{DirectionsClient, ProviderClient},
    config::Config,
    error::AppError,
};
use eldview::session::Session;
use std::{
    collections::HashMap,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;
use tracing::debug;

pub struct AppState {
    pub provider: ProviderClient,
    pub directions: DirectionsClient,
    pub sessions: RwLock<Sessions>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            provider: ProviderClient::new(http.clone(), config.provider_url.clone()),
            directions: DirectionsClient::new(
                http,
                config.directions_url.clone(),
                config.directions_key.clone(),
            ),
            sessions: RwLock::new(Sessions::new(config.max_sessions, config.session_idle)),
        })
    }
}

struct Entry {
    session: Session,
    touched: Instant,
}

/// Sessions keyed by caller-chosen id.
///
/// Idle sessions expire, and once `capacity` is reached the least recently
/// touched one makes room for a new id. A session with a submission in
/// flight is never evicted.
pub struct Sessions {
    entries: HashMap<String, Entry>,
    capacity: usize,
    idle: Duration,
}

impl Sessions {
    pub fn new(capacity: usize, idle: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            idle,
        }
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Session> {
        self.get_mut_at(id, Instant::now())
    }

    pub fn get_mut_at(&mut self, id: &str, now: Instant) -> Option<&mut Session> {
        if is_expired(self.entries.get(id)?, now, self.idle) {
            debug!("Session {id} expired");
            self.entries.remove(id);
            return None;
        }
        let entry = self.entries.get_mut(id)?;
        entry.touched = now;
        Some(&mut entry.session)
    }

    /// The session for `id`, created if needed.
    pub fn entry(&mut self, id: &str) -> &mut Session {
        self.entry_at(id, Instant::now())
    }

    pub fn entry_at(&mut self, id: &str, now: Instant) -> &mut Session {
        self.evict(now);
        if !self.entries.contains_key(id) && self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        let entry = self.entries.entry(id.to_string()).or_insert_with(|| Entry {
            session: Session::new(),
            touched: now,
        });
        entry.touched = now;
        &mut entry.session
    }

    fn evict(&mut self, now: Instant) {
        let idle = self.idle;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !is_expired(entry, now, idle));
        let evicted = before - self.entries.len();
        if evicted > 0 {
            debug!("Expired {evicted} idle sessions");
        }
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .filter(|(_, entry)| !entry.session.is_busy())
            .min_by_key(|(_, entry)| entry.touched)
            .map(|(id, _)| id.clone());
        if let Some(id) = oldest {
            debug!("Evicting session {id} to stay within capacity");
            self.entries.remove(&id);
        }
    }
}

fn is_expired(entry: &Entry, now: Instant, idle: Duration) -> bool {
    !entry.session.is_busy() && now.saturating_duration_since(entry.touched) >= idle
}
