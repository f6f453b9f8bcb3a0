//! Message dispatcher: routes each host message to the camera surface or
//! the diagnostic log.
//!
//! Image payloads (data URIs) are assigned untouched to the "robot-camera"
//! surface; anything else is logged as an unknown message, cut to 200
//! characters. There is no return channel: a missing surface is a no-op.

use crate::frames;
use crate::sink::LogSink;
use crate::surfaces::SurfaceRegistry;
use crate::window::ReceiveHandler;
use async_trait::async_trait;
use std::sync::Arc;

/// Well-known id of the surface that renders the camera feed.
pub const CAMERA_SURFACE_ID: &str = "robot-camera";

/// Unknown messages are cut to this many characters before logging.
const MAX_DIAGNOSTIC_CHARS: usize = 200;

/// Routes each inbound message to exactly one action: render or log.
/// Stateless across invocations.
pub struct MessageDispatcher {
    surfaces: Arc<SurfaceRegistry>,
    sink: Arc<dyn LogSink>,
}

impl MessageDispatcher {
    pub fn new(surfaces: Arc<SurfaceRegistry>, sink: Arc<dyn LogSink>) -> Self {
        Self { surfaces, sink }
    }

    /// Handle one message. Image messages update the camera surface (skipped
    /// when no such surface is registered); everything else goes to the sink.
    pub async fn dispatch(&self, message: &str, robot: &str) {
        if frames::is_image_message(message) {
            match self.surfaces.find(CAMERA_SURFACE_ID).await {
                Some(surface) => surface.set_source(message).await,
                None => log::debug!(
                    "dispatch: no '{}' surface registered, dropping image frame from '{}'",
                    CAMERA_SURFACE_ID,
                    robot
                ),
            }
        } else {
            let text = truncate_chars(message, MAX_DIAGNOSTIC_CHARS);
            self.sink.log(&format!(
                "Received unknown message for robot '{}': '{}'",
                robot, text
            ));
        }
    }
}

#[async_trait]
impl ReceiveHandler for MessageDispatcher {
    async fn receive(&self, message: &str, robot: &str) {
        self.dispatch(message, robot).await;
    }
}

/// First `max` characters of `s`. No marker is appended and a multibyte
/// character is never split.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
