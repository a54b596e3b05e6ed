use crate::dashboard::render::ViewModel;
use std::error::Error;

/// Output surface for the dashboard. Gets the derived view after every
/// transition and camera frames as they arrive.
pub trait DeviceDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Replace the displayed state with a freshly derived view.
    fn render(&mut self, view: &ViewModel) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Push the newest camera frame (one complete JPEG).
    fn show_frame(&mut self, frame: &[u8]) -> Result<(), Box<dyn Error + Send + Sync>>;
}
