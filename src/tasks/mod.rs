//! Background Tasks Module
//!
//! Contains the background work that runs for the lifetime of a cache.
//!
//! # Tasks
//! - Expiry Sweeper: Removes expired cache entries every second

mod sweeper;

pub use sweeper::{spawn_sweeper, SweeperHandle, SWEEP_INTERVAL};
