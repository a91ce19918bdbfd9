//! Cached shelter directory, refreshed on a fixed interval.
//!
//! The wizard reads the directory synchronously (select options on step 1,
//! the shelter name on the summary step); a background task keeps the
//! snapshot fresh. A failed refresh keeps the stale snapshot and tries again
//! on the next tick.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use tracing::{info, warn};

use crate::api::{ApiClient, Shelter};

/// Shared, cheaply clonable snapshot of the shelter directory.
#[derive(Clone, Default)]
pub struct SheltersCache {
    inner: Arc<RwLock<Vec<Shelter>>>,
}

impl SheltersCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current directory contents.
    pub fn snapshot(&self) -> Vec<Shelter> {
        self.inner.read().expect("shelter cache lock poisoned").clone()
    }

    /// `true` until the first successful refresh.
    pub fn is_empty(&self) -> bool {
        self.inner.read().expect("shelter cache lock poisoned").is_empty()
    }

    /// Display name for a shelter id, if the directory knows it.
    pub fn name_of(&self, id: &str) -> Option<String> {
        self.inner
            .read()
            .expect("shelter cache lock poisoned")
            .iter()
            .find(|shelter| shelter.id == id)
            .map(|shelter| shelter.name.clone())
    }

    fn replace(&self, shelters: Vec<Shelter>) {
        *self.inner.write().expect("shelter cache lock poisoned") = shelters;
    }
}

pub struct RefreshState {
    pub api: ApiClient,
    pub cache: SheltersCache,
    pub interval_secs: u64,
}

/// Refresh loop; spawn with `tokio::spawn(shelters::run(state))`.
pub async fn run(state: Arc<RefreshState>) {
    info!(
        "Shelter directory refresh starting (every {}s)",
        state.interval_secs
    );

    loop {
        poll_once(&state).await;
        tokio::time::sleep(Duration::from_secs(state.interval_secs)).await;
    }
}

/// Perform a single refresh.
async fn poll_once(state: &RefreshState) {
    match state.api.get_shelters().await {
        Ok(shelters) => {
            info!("Refreshed shelter directory ({} entries)", shelters.len());
            state.cache.replace(shelters);
        }
        Err(e) => {
            // Keep serving the stale snapshot until the next tick.
            warn!("Shelter refresh failed: {e}");
        }
    }
}
