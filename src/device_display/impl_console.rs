use crate::dashboard::render::{FeedView, ViewModel};
use crate::device_display::interface::DeviceDisplay;
use std::error::Error;

/// Text rendering of the dashboard, mostly useful while developing without
/// a window system.
pub struct DeviceDisplayConsole {
    last_line: Option<String>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self { last_line: None }
    }
}

impl Default for DeviceDisplayConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn render(&mut self, view: &ViewModel) -> Result<(), Box<dyn Error + Send + Sync>> {
        let line = match view {
            ViewModel::Waiting => "Waiting for bottle detection...".to_string(),
            ViewModel::Live {
                feed,
                banner_text,
                checks,
                bottle_number,
                timestamp,
                ..
            } => {
                let feed_label = match feed {
                    FeedView::Stream => "live",
                    FeedView::Connecting => "loading",
                    FeedView::Offline => "offline",
                };
                let checks_line = checks
                    .iter()
                    .map(|c| format!("{}: {}", c.name, c.value))
                    .collect::<Vec<_>>()
                    .join(" | ");
                format!(
                    "Bottle #{} [{}] {} | {} (feed: {})",
                    bottle_number, timestamp, banner_text, checks_line, feed_label
                )
            }
        };

        // Only print on change; the status poll repaints every second.
        if self.last_line.as_deref() != Some(&line) {
            println!("{}", line);
            self.last_line = Some(line);
        }
        Ok(())
    }

    // Frames are not rendered on the console.
    fn show_frame(&mut self, _frame: &[u8]) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
