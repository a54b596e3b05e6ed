use crate::inspection::ClassificationRecord;
use serde::Deserialize;

/// Camera health as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CameraHealth {
    pub initialized: bool,
    pub running: bool,
}

impl CameraHealth {
    pub fn is_healthy(&self) -> bool {
        self.initialized && self.running
    }
}

/// Read-only client for the detection backend. There is no write path.
pub trait Backend: Send + Sync {
    /// Latest classification record, or `None` while no bottle has been
    /// inspected yet.
    fn fetch_current(
        &self,
    ) -> Result<Option<ClassificationRecord>, Box<dyn std::error::Error + Send + Sync>>;

    fn fetch_camera_health(
        &self,
    ) -> Result<CameraHealth, Box<dyn std::error::Error + Send + Sync>>;

    /// Subscribe to the live camera feed. Each message is one complete JPEG
    /// frame. The channel closes only when the backend implementation shuts
    /// down; stream errors are handled by reconnecting internally.
    fn video_frames(&self) -> std::sync::mpsc::Receiver<Vec<u8>>;
}
