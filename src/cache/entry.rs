//! Cache Entry Module
//!
//! Defines a single cached value paired with its absolute expiry instant.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with value and expiry.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiry instant, None = lifetime overflowed the clock, never expires
    expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry that expires `lifetime` from now.
    ///
    /// A zero lifetime produces an entry that is already expired.
    pub fn new(value: V, lifetime: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now().checked_add(lifetime),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once the current instant has
    /// reached its expiry instant, so a zero lifetime is expired on the very
    /// next check even on a coarse clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Checks expiry against a caller-supplied instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }

    // == Expires At ==
    /// Returns the expiry instant, or None if the entry never expires.
    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }
}
