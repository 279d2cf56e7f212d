//! Cache Module
//!
//! Provides the expiring-entry data model, the store engine and the
//! thread-safe cache front.

mod entry;
mod expiring;
mod lookup;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::ExpiringCache;
pub use lookup::Lookup;
pub use stats::CacheStats;
pub use store::CacheStore;
