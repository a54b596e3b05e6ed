use crate::backend::interface::{Backend, CameraHealth};
use crate::config::Config;
use crate::inspection::ClassificationRecord;
use crate::library::logger::interface::Logger;
use std::io::Read;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::Duration;

const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];
const JPEG_EOI: [u8; 2] = [0xFF, 0xD9];

/// Upper bound on bytes buffered while waiting for a frame to complete,
/// well above any single frame the backend produces.
const MAX_FRAME_BUFFER_BYTES: usize = 4 * 1024 * 1024;

/// Blocking HTTP client against the detection backend. Each poll is an
/// independent request; a hanging request only delays its own cycle.
pub struct BackendHttp {
    base_url: String,
    client: reqwest::blocking::Client,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl BackendHttp {
    pub fn new(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            base_url: config.backend_base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
            logger: logger.with_namespace("backend").with_namespace("http"),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Backend for BackendHttp {
    fn fetch_current(
        &self,
    ) -> Result<Option<ClassificationRecord>, Box<dyn std::error::Error + Send + Sync>> {
        let response = self.client.get(self.url("/api/current")).send()?;
        let record: Option<ClassificationRecord> = response.error_for_status()?.json()?;
        Ok(record)
    }

    fn fetch_camera_health(
        &self,
    ) -> Result<CameraHealth, Box<dyn std::error::Error + Send + Sync>> {
        let response = self.client.get(self.url("/api/camera-status")).send()?;
        let health: CameraHealth = response.error_for_status()?.json()?;
        Ok(health)
    }

    fn video_frames(&self) -> Receiver<Vec<u8>> {
        let (tx, rx) = channel();
        let url = self.url("/api/video-feed");
        let client = self.client.clone();
        let logger = self.logger.with_namespace("video");

        std::thread::spawn(move || loop {
            let mut response = match client.get(&url).send() {
                Ok(response) => response,
                Err(e) => {
                    logger.info(&format!("Video feed unavailable: {}", e));
                    std::thread::sleep(Duration::from_secs(1));
                    continue;
                }
            };

            let mut buffer: Vec<u8> = Vec::new();
            let mut chunk = [0u8; 8192];

            loop {
                match response.read(&mut chunk) {
                    Ok(0) => break,
                    Ok(n) => {
                        buffer.extend_from_slice(&chunk[..n]);
                        while let Some(frame) = extract_jpeg_frame(&mut buffer) {
                            if tx.send(frame).is_err() {
                                return;
                            }
                        }
                        if resync_oversized(&mut buffer) {
                            logger.info("Dropped oversized frame buffer, resyncing");
                        }
                    }
                    Err(e) => {
                        logger.info(&format!("Video feed read failed: {}", e));
                        break;
                    }
                }
            }

            std::thread::sleep(Duration::from_secs(1));
        });

        rx
    }
}

/// Pull one complete JPEG frame out of a multipart/x-mixed-replace byte
/// stream. Everything before the frame start marker (part boundaries,
/// headers) is discarded.
fn extract_jpeg_frame(buffer: &mut Vec<u8>) -> Option<Vec<u8>> {
    let start = find(buffer, &JPEG_SOI)?;
    buffer.drain(..start);

    let end = find(&buffer[JPEG_SOI.len()..], &JPEG_EOI)? + JPEG_SOI.len() + JPEG_EOI.len();
    let frame = buffer[..end].to_vec();
    buffer.drain(..end);
    Some(frame)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// A stream that buffers this much without ever completing a frame is not
/// speaking MJPEG; drop the buffer and pick up again at the next frame start.
fn resync_oversized(buffer: &mut Vec<u8>) -> bool {
    if buffer.len() > MAX_FRAME_BUFFER_BYTES {
        buffer.clear();
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg(payload: &[u8]) -> Vec<u8> {
        let mut frame = JPEG_SOI.to_vec();
        frame.extend_from_slice(payload);
        frame.extend_from_slice(&JPEG_EOI);
        frame
    }

    #[test]
    fn extracts_frame_and_discards_boundary_noise() {
        let mut buffer = b"--frame\r\nContent-Type: image/jpeg\r\n\r\n".to_vec();
        buffer.extend_from_slice(&jpeg(b"pixels"));
        buffer.extend_from_slice(b"\r\n--frame\r\n");

        let frame = extract_jpeg_frame(&mut buffer).unwrap();
        assert_eq!(frame, jpeg(b"pixels"));
        // Trailing boundary stays behind for the next frame.
        assert_eq!(buffer, b"\r\n--frame\r\n".to_vec());
    }

    #[test]
    fn waits_for_complete_frame() {
        let full = jpeg(b"pixels");
        let mut buffer = full[..full.len() - 1].to_vec();

        assert_eq!(extract_jpeg_frame(&mut buffer), None);

        buffer.push(full[full.len() - 1]);
        assert_eq!(extract_jpeg_frame(&mut buffer), Some(full));
        assert!(buffer.is_empty());
    }

    #[test]
    fn oversized_buffer_without_a_frame_is_dropped() {
        // Frameless bytes (no start marker) accumulate past the cap.
        let mut buffer = vec![0u8; MAX_FRAME_BUFFER_BYTES + 1];
        assert_eq!(extract_jpeg_frame(&mut buffer), None);

        assert!(resync_oversized(&mut buffer));
        assert!(buffer.is_empty());
    }

    #[test]
    fn incomplete_frame_under_the_cap_is_kept() {
        let full = jpeg(b"pixels");
        let mut buffer = full[..full.len() - 1].to_vec();

        assert!(!resync_oversized(&mut buffer));
        assert_eq!(buffer.len(), full.len() - 1);
    }

    #[test]
    fn extracts_consecutive_frames() {
        let mut buffer = Vec::new();
        buffer.extend_from_slice(&jpeg(b"one"));
        buffer.extend_from_slice(&jpeg(b"two"));

        assert_eq!(extract_jpeg_frame(&mut buffer), Some(jpeg(b"one")));
        assert_eq!(extract_jpeg_frame(&mut buffer), Some(jpeg(b"two")));
        assert_eq!(extract_jpeg_frame(&mut buffer), None);
    }
}
