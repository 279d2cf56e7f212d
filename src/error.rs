//! Error types for the expiring cache
//!
//! Cache operations themselves never fail; the only fallible step is
//! starting the background sweeper.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the expiring cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The OS refused to spawn the background sweeper thread
    #[error("Failed to spawn sweeper thread: {0}")]
    SweeperSpawn(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the expiring cache.
pub type Result<T> = std::result::Result<T, CacheError>;
