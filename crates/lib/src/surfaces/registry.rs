//! Surface registry: register and look up display surfaces by id.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A UI element that can render an image from a source attribute.
#[async_trait]
pub trait Surface: Send + Sync {
    /// Surface id (e.g. "robot-camera").
    fn id(&self) -> &str;
    /// Assign the image source (e.g. a data URI). Replaces the previous value.
    async fn set_source(&self, value: &str);
    /// Current source, if one has been assigned.
    async fn source(&self) -> Option<String>;
}

/// Registry of surface ids to surfaces. Shared across the window.
pub struct SurfaceRegistry {
    inner: Arc<RwLock<HashMap<String, Arc<dyn Surface>>>>,
}

impl Default for SurfaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a surface under an id. Re-registering an id replaces the surface.
    pub async fn register(&self, id: String, surface: Arc<dyn Surface>) {
        let mut g = self.inner.write().await;
        if g.insert(id.clone(), surface).is_some() {
            log::debug!("surfaces: replaced surface '{}'", id);
        }
    }

    pub async fn find(&self, id: &str) -> Option<Arc<dyn Surface>> {
        let g = self.inner.read().await;
        g.get(id).cloned()
    }

    pub async fn ids(&self) -> Vec<String> {
        let g = self.inner.read().await;
        g.keys().cloned().collect()
    }
}
