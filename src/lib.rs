//! Expiring Cache - A generic in-process key-value cache with per-entry TTL
//!
//! Expired entries are evicted lazily on read and eagerly by a background
//! sweeper that runs every second for as long as the cache is alive.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheStats, ExpiringCache, Lookup};
pub use config::Config;
pub use error::CacheError;
pub use tasks::SWEEP_INTERVAL;
