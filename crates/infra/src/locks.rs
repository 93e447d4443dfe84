//! Bounded-wait locks guarding the read-modify-write hot spots.
//!
//! Stock levels and the order-number sequence are shared counters; writers
//! serialize on these locks instead of racing read-then-write. Waits are
//! bounded; expiry surfaces as `Busy`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use stockpile_core::{DomainError, DomainResult, ItemId};

/// Default bound on how long a writer waits for a contended lock.
pub const LOCK_WAIT: Duration = Duration::from_secs(5);

/// Acquire an async mutex with a bounded wait; expiry maps to `Busy`.
pub async fn acquire(
    lock: Arc<AsyncMutex<()>>,
    wait: Duration,
    what: &str,
) -> DomainResult<OwnedMutexGuard<()>> {
    tokio::time::timeout(wait, lock.lock_owned())
        .await
        .map_err(|_| DomainError::busy(format!("timed out waiting for {what} lock")))
}

/// One mutex per item, created lazily.
///
/// Serializes stock mutations for a single item; transactions on different
/// items proceed fully in parallel.
#[derive(Debug)]
pub struct ItemLocks {
    inner: Mutex<HashMap<ItemId, Arc<AsyncMutex<()>>>>,
    wait: Duration,
}

impl ItemLocks {
    pub fn new() -> Self {
        Self::with_wait(LOCK_WAIT)
    }

    pub fn with_wait(wait: Duration) -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            wait,
        }
    }

    pub async fn acquire(&self, item_id: ItemId) -> DomainResult<OwnedMutexGuard<()>> {
        let lock = {
            let mut map = self
                .inner
                .lock()
                .map_err(|_| DomainError::busy("item lock registry poisoned"))?;
            map.entry(item_id)
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        acquire(lock, self.wait, "item").await
    }
}

impl Default for ItemLocks {
    fn default() -> Self {
        Self::new()
    }
}
