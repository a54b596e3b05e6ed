use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_base_url: String,
    pub current_poll_rate: Duration,
    pub camera_poll_rate: Duration,
    pub alert_repeat_rate: Duration,
    pub alert_volume: f32,
    pub alert_sound_path: PathBuf,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_base_url: "http://127.0.0.1:8000".to_string(),
            current_poll_rate: Duration::from_secs(1),
            camera_poll_rate: Duration::from_secs(5),
            alert_repeat_rate: Duration::from_secs(5),
            alert_volume: 0.8,
            alert_sound_path: PathBuf::from("alert.wav"),
            logger_timezone: utc(),
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(0).unwrap()
}
