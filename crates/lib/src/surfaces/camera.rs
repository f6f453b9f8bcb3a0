//! Camera surface: in-memory surface holding the latest camera frame.

use crate::frames::DataUri;
use crate::surfaces::Surface;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
struct CameraState {
    source: Option<String>,
    frames: u64,
}

/// Surface that keeps the most recent source attribute (last write wins) and
/// counts received frames. The source string is stored exactly as delivered.
pub struct CameraSurface {
    id: String,
    state: RwLock<CameraState>,
}

impl CameraSurface {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: RwLock::new(CameraState::default()),
        }
    }

    /// Number of frames assigned so far.
    pub async fn frame_count(&self) -> u64 {
        self.state.read().await.frames
    }
}

#[async_trait]
impl Surface for CameraSurface {
    fn id(&self) -> &str {
        &self.id
    }

    async fn set_source(&self, value: &str) {
        let mut g = self.state.write().await;
        g.frames += 1;
        g.source = Some(value.to_string());
        match DataUri::parse(value) {
            Ok(uri) => log::debug!(
                "camera '{}': frame {} ({}, {} bytes)",
                self.id,
                g.frames,
                uri.media_type,
                uri.payload.len()
            ),
            Err(e) => log::debug!(
                "camera '{}': frame {} with unparseable source: {}",
                self.id,
                g.frames,
                e
            ),
        }
    }

    async fn source(&self) -> Option<String> {
        self.state.read().await.source.clone()
    }
}
