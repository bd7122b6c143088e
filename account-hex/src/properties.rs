//! Refreshable `custom.*` properties.
//!
//! Requests read an `Arc` snapshot; a refresh holds the write lock while it
//! re-reads the source and swaps the snapshot, so concurrent refreshes apply
//! in order. A request that already holds a snapshot keeps it until it
//! finishes.

use std::sync::Arc;

use tokio::sync::RwLock;

use demo_types::{CustomProperties, PropertiesError, PropertiesSource, StaticProperties};

pub struct RefreshableProperties {
    current: RwLock<Arc<CustomProperties>>,
    source: Arc<dyn PropertiesSource>,
}

impl RefreshableProperties {
    /// Loads the initial snapshot from `source`.
    pub fn new(source: impl PropertiesSource) -> Result<Self, PropertiesError> {
        let initial = source.load()?;
        Ok(Self {
            current: RwLock::new(Arc::new(initial)),
            source: Arc::new(source),
        })
    }

    /// Properties that never change on refresh.
    pub fn fixed(properties: CustomProperties) -> Self {
        Self {
            current: RwLock::new(Arc::new(properties.clone())),
            source: Arc::new(StaticProperties(properties)),
        }
    }

    /// Snapshot to use for one request.
    pub async fn current(&self) -> Arc<CustomProperties> {
        self.current.read().await.clone()
    }

    /// Re-reads the source and returns the keys whose values changed.
    ///
    /// Sources may block on IO, so the load runs on the blocking pool.
    /// On error the previous snapshot stays in place.
    pub async fn refresh(&self) -> Result<Vec<String>, PropertiesError> {
        let mut current = self.current.write().await;

        let source = Arc::clone(&self.source);
        let fresh = tokio::task::spawn_blocking(move || source.load())
            .await
            .map_err(|e| PropertiesError::Unreadable(format!("reload task failed: {e}")))??;

        let changed = current.changed_keys(&fresh);
        *current = Arc::new(fresh);

        Ok(changed)
    }
}

impl std::fmt::Debug for RefreshableProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshableProperties").finish_non_exhaustive()
    }
}
