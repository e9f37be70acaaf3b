use std::time::Duration;

use crate::constants::{
    BANNER_TIMEOUT_MS, DEFAULT_BASE_URL, ENTRANCE_STAGGER_MS, FULL_STATUS_PATH, PARK_PATH,
    POLL_INTERVAL_MS, UPDATE_STATUS_PATH,
};

/// Runtime knobs shared by both clients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Origin of the board server. Empty means same-origin relative paths.
    pub base_url: String,
    pub poll_interval: Duration,
    pub banner_timeout: Duration,
    pub entrance_stagger: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
            banner_timeout: Duration::from_millis(BANNER_TIMEOUT_MS),
            entrance_stagger: Duration::from_millis(ENTRANCE_STAGGER_MS),
        }
    }
}

impl BoardConfig {
    /// Configuration for a client served from the same origin as the API.
    pub fn same_origin() -> Self {
        Self {
            base_url: String::new(),
            ..Self::default()
        }
    }

    pub fn full_status_url(&self) -> String {
        self.endpoint(FULL_STATUS_PATH)
    }

    pub fn update_status_url(&self) -> String {
        self.endpoint(UPDATE_STATUS_PATH)
    }

    pub fn park_url(&self) -> String {
        self.endpoint(PARK_PATH)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}
