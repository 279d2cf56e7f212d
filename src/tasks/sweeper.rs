//! Expiry Sweeper Task
//!
//! Background task that periodically removes expired cache entries, so
//! keys that are written and never read again cannot accumulate.
//!
//! The task runs on a single-threaded tokio runtime owned by a dedicated
//! thread. Caches can therefore be built outside any runtime, and dropping
//! one can join its sweeper synchronously.

use std::hash::Hash;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::{Builder, Runtime};
use tokio::sync::oneshot;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::cache::CacheStore;
use crate::error::Result;

/// Fixed cadence of the sweeper.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(1);

// == Sweeper Handle ==
/// Owns a running sweeper thread.
///
/// Dropping the handle signals the sweeper to stop and joins it, so the
/// thread never outlives the cache that owns the handle.
#[derive(Debug)]
pub struct SweeperHandle {
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl SweeperHandle {
    /// Returns true once the sweeper thread has exited.
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Stops the sweeper and waits for it to exit.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            // The receiver is gone if the sweeper already exited.
            let _ = shutdown.send(());
        }

        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("Sweeper thread panicked before shutdown");
            }
        }
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawns a thread that purges expired entries every [`SWEEP_INTERVAL`].
///
/// Ticks missed because a sweep overran are skipped rather than bunched.
/// A panic raised while purging (for example from a value's `Drop`) is
/// logged and the sweeper carries on with the next tick.
///
/// # Errors
/// Returns [`CacheError::SweeperSpawn`](crate::CacheError::SweeperSpawn) if
/// `name` contains a NUL byte, or if the runtime or thread cannot be created.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::<String, String>::new()));
/// let sweeper = spawn_sweeper(store.clone(), "sessions-sweeper")?;
/// // Later:
/// sweeper.shutdown();
/// ```
pub fn spawn_sweeper<K, V>(
    store: Arc<Mutex<CacheStore<K, V>>>,
    name: &str,
) -> Result<SweeperHandle>
where
    K: Eq + Hash + Send + 'static,
    V: Send + 'static,
{
    // `thread::Builder::name` panics on interior NUL bytes at spawn time.
    if name.contains('\0') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "sweeper thread name contains a NUL byte",
        )
        .into());
    }

    let runtime = Builder::new_current_thread().enable_time().build()?;
    let (shutdown, signal) = oneshot::channel::<()>();

    let thread = thread::Builder::new()
        .name(name.to_string())
        .spawn(move || run_sweeper(runtime, store, signal))?;

    Ok(SweeperHandle {
        shutdown: Some(shutdown),
        thread: Some(thread),
    })
}

fn run_sweeper<K, V>(
    runtime: Runtime,
    store: Arc<Mutex<CacheStore<K, V>>>,
    mut signal: oneshot::Receiver<()>,
) where
    K: Eq + Hash,
{
    runtime.block_on(async move {
        info!(
            "Starting expiry sweeper with interval of {:?}",
            SWEEP_INTERVAL
        );

        let mut ticker = interval_at(Instant::now() + SWEEP_INTERVAL, SWEEP_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                // Fires on an explicit shutdown and when the handle is dropped
                _ = &mut signal => break,
                _ = ticker.tick() => sweep_once(&store),
            }
        }

        info!("Expiry sweeper stopped");
    });
}

fn sweep_once<K, V>(store: &Mutex<CacheStore<K, V>>)
where
    K: Eq + Hash,
{
    let result = panic::catch_unwind(AssertUnwindSafe(|| store.lock().purge_expired()));

    match result {
        Ok(removed) if removed > 0 => {
            info!("Expiry sweep: removed {} expired entries", removed);
        }
        Ok(_) => debug!("Expiry sweep: no expired entries found"),
        Err(_) => error!("Expiry sweep panicked; retrying on the next tick"),
    }
}
