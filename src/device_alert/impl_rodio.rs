use crate::config::Config;
use crate::device_alert::interface::DeviceAlert;
use crate::library::logger::interface::Logger;
use rodio::{Decoder, OutputStream, Sink};
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

/// Plays the alert clip through the default audio device. The sound file is
/// read per playback so a missing or broken asset degrades to a logged
/// failure instead of taking the dashboard down.
pub struct DeviceAlertRodio {
    sound_path: PathBuf,
    volume: f32,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceAlertRodio {
    pub fn new(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            sound_path: config.alert_sound_path.clone(),
            volume: config.alert_volume,
            logger: logger.with_namespace("alert").with_namespace("rodio"),
        }
    }

    fn read_clip(&self) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read(&self.sound_path)?)
    }
}

impl DeviceAlert for DeviceAlertRodio {
    fn play(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let clip = self.read_clip()?;

        // The stream must outlive the sink, so both live on this call's
        // stack until the clip finishes.
        let (_stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;
        sink.set_volume(self.volume);
        sink.append(Decoder::new(Cursor::new(clip))?);
        sink.sleep_until_end();

        self.logger.info("Alert played");
        Ok(())
    }

    fn play_fallback(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let clip = self.read_clip()?;

        let (_stream, handle) = OutputStream::try_default()?;
        let sink = handle.play_once(Cursor::new(clip))?;
        sink.set_volume(self.volume);
        sink.sleep_until_end();

        self.logger.info("Alert played (fallback)");
        Ok(())
    }
}
