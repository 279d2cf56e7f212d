//! Configuration Module
//!
//! Construction-time settings for an [`ExpiringCache`](crate::ExpiringCache).
//! The sweep cadence is fixed and intentionally absent from here.

use std::env;

/// Default name given to the sweeper thread.
pub const DEFAULT_SWEEPER_NAME: &str = "expiring-cache-sweeper";

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of entries the map is pre-sized for
    pub initial_capacity: usize,
    /// Name of the background sweeper thread
    pub sweeper_name: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `EXPIRING_CACHE_INITIAL_CAPACITY` - Pre-sized map capacity (default: 0)
    /// - `EXPIRING_CACHE_SWEEPER_NAME` - Sweeper thread name (default: `expiring-cache-sweeper`)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            initial_capacity: env::var("EXPIRING_CACHE_INITIAL_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.initial_capacity),
            sweeper_name: env::var("EXPIRING_CACHE_SWEEPER_NAME")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.sweeper_name),
        }
    }

    /// Sets the pre-sized map capacity.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the sweeper thread name.
    pub fn with_sweeper_name(mut self, name: impl Into<String>) -> Self {
        self.sweeper_name = name.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            sweeper_name: DEFAULT_SWEEPER_NAME.to_string(),
        }
    }
}
