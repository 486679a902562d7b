use std::{
    collections::HashMap,
    fmt::Debug,
    future::Future,
    hash::Hash,
    str::FromStr,
    sync::{Arc, Mutex},
};
use tokio::sync::OnceCell;
use tracing::debug;

/// How long a loaded document is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Load once, keep for the lifetime of the process. Restart to pick up
    /// regenerated files.
    #[default]
    Snapshot,
    /// Read the backing file on every request.
    Uncached,
}

impl FromStr for CachePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snapshot" => Ok(Self::Snapshot),
            "none" | "uncached" => Ok(Self::Uncached),
            other => Err(format!(
                "unknown cache policy '{}', expected 'snapshot' or 'none'",
                other
            )),
        }
    }
}

/// Read-through cache of immutable values.
///
/// Each key owns a [`OnceCell`], so concurrent misses on the same key wait
/// for a single load instead of all hitting the filesystem. A failed load
/// leaves the cell empty and the next caller tries again.
pub struct SnapshotCache<K, V> {
    policy: CachePolicy,
    slots: Mutex<HashMap<K, Arc<OnceCell<Arc<V>>>>>,
}

impl<K, V> SnapshotCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Number of keys with a loaded value.
    pub fn len(&self) -> usize {
        self.lock_slots()
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub async fn get_or_load<F, Fut, E>(&self, key: K, load: F) -> Result<Arc<V>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if self.policy == CachePolicy::Uncached {
            return load().await.map(Arc::new);
        }

        let slot = {
            let mut slots = self.lock_slots();
            slots.entry(key.clone()).or_default().clone()
        };

        if let Some(value) = slot.get() {
            debug!("Snapshot HIT for key={:?}", key);
            return Ok(value.clone());
        }

        debug!("Snapshot MISS for key={:?}", key);
        let value = slot
            .get_or_try_init(|| async { load().await.map(Arc::new) })
            .await?;
        Ok(value.clone())
    }

    fn lock_slots(&self) -> std::sync::MutexGuard<'_, HashMap<K, Arc<OnceCell<Arc<V>>>>> {
        // Slots are only ever inserted, so a poisoned map is still consistent.
        self.slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
