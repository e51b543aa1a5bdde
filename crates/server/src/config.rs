use std::{env, str::FromStr, time::Duration};
use thiserror::Error;

pub const PROVIDER_URL_VAR: &str = "ELDVIEW_PROVIDER_URL";
pub const DIRECTIONS_KEY_VAR: &str = "ELDVIEW_DIRECTIONS_KEY";
pub const DIRECTIONS_URL_VAR: &str = "ELDVIEW_DIRECTIONS_URL";
pub const PORT_VAR: &str = "ELDVIEW_PORT";
pub const REQUEST_TIMEOUT_VAR: &str = "ELDVIEW_REQUEST_TIMEOUT_SECS";
pub const MAX_SESSIONS_VAR: &str = "ELDVIEW_MAX_SESSIONS";
pub const SESSION_IDLE_VAR: &str = "ELDVIEW_SESSION_IDLE_SECS";

pub const DEFAULT_DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_SESSIONS: usize = 1024;
pub const DEFAULT_SESSION_IDLE: Duration = Duration::from_secs(60 * 60);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Missing configuration: {0} is not set")]
    Missing(&'static str),
    #[error("Invalid configuration: {name}={value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub provider_url: String,
    pub directions_key: String,
    pub directions_url: String,
    pub port: u16,
    /// Applies to every outbound call, provider and directions alike.
    pub request_timeout: Duration,
    pub max_sessions: usize,
    pub session_idle: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, self::Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. Blank values count as
    /// unset so an empty export does not slip through as a real credential.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, self::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let provider_url = get(PROVIDER_URL_VAR).ok_or(Error::Missing(PROVIDER_URL_VAR))?;
        let directions_key = get(DIRECTIONS_KEY_VAR).ok_or(Error::Missing(DIRECTIONS_KEY_VAR))?;
        let directions_url =
            get(DIRECTIONS_URL_VAR).unwrap_or_else(|| DEFAULT_DIRECTIONS_URL.to_string());
        let parsed = |name: &'static str| -> Result<Option<u64>, self::Error> {
            get(name).map(|value| parse(name, value)).transpose()
        };

        let port = match get(PORT_VAR) {
            Some(value) => parse(PORT_VAR, value)?,
            None => DEFAULT_PORT,
        };
        let request_timeout = parsed(REQUEST_TIMEOUT_VAR)?
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        let max_sessions = match get(MAX_SESSIONS_VAR) {
            Some(value) => parse(MAX_SESSIONS_VAR, value)?,
            None => DEFAULT_MAX_SESSIONS,
        };
        let session_idle = parsed(SESSION_IDLE_VAR)?
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_SESSION_IDLE);

        Ok(Self {
            provider_url,
            directions_key,
            directions_url,
            port,
            request_timeout,
            max_sessions,
            session_idle,
        })
    }
}

fn parse<T: FromStr>(name: &'static str, value: String) -> Result<T, self::Error> {
    value.parse().map_err(|_| Error::Invalid { name, value })
}
