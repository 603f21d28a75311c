use crate::core::record::absolute_name;
use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Per-zone mutual exclusion owned by the caller.
///
/// Hold the guard returned by [`ZoneLocks::lock`] for the whole of one
/// synchronizer call to keep concurrent callers from interleaving their
/// changes to the same zone. Entries of zones nobody holds or waits on are
/// pruned on the next call to [`ZoneLocks::lock`].
#[derive(Clone, Default)]
pub struct ZoneLocks {
    zones: Arc<StdMutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl ZoneLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, zone: &str) -> OwnedMutexGuard<()> {
        let zone_lock = {
            let mut zones = self
                .zones
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            zones.retain(|_, lock| Arc::strong_count(lock) > 1);
            zones
                .entry(absolute_name("@", zone))
                .or_default()
                .clone()
        };
        zone_lock.lock_owned().await
    }
}
