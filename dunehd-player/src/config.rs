//! Adapter configuration

use std::time::Duration;

use serde::Deserialize;

/// Display name used when none is configured
pub const DEFAULT_NAME: &str = "dunehd";

/// Per-request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Poll spacing the adapter is designed around
///
/// Polls must never overlap. With the default 20 second timeout, a 30
/// second interval leaves headroom for the slowest possible round trip.
pub const RECOMMENDED_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Configuration for one Dune HD device
///
/// Only the host is required; everything else has a protocol default.
/// Derives `Deserialize` so hosts can lift it straight out of their own
/// configuration files.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerConfig {
    /// Host address of the device, with optional port
    pub host: String,
    /// Display name for the host UI
    #[serde(default = "default_name")]
    pub name: String,
    /// Per-request timeout in seconds, advertised to the device as well
    #[serde(default = "default_timeout_secs")]
    pub timeout: u64,
}

impl PlayerConfig {
    /// Configuration with defaults for everything but the host
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            name: default_name(),
            timeout: default_timeout_secs(),
        }
    }

    /// Override the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Override the per-request timeout, in seconds
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// The configured timeout as a [`Duration`]
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}
