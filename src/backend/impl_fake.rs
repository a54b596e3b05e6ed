use crate::backend::interface::{Backend, CameraHealth};
use crate::config::Config;
use crate::inspection::{ClassificationRecord, ComponentCheck, OverallStatus, PlasticCheck};
use crate::library::logger::interface::Logger;
use rand::Rng;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Simulated inspection line. Produces a fresh record per poll with an
/// occasional defect, mirroring what the real backend publishes.
pub struct BackendFake {
    bottle_counter: AtomicU32,
    defect_chance: f32,
    camera_flake_chance: f32,
    frame_senders: Mutex<Vec<Sender<Vec<u8>>>>,
    #[allow(dead_code)]
    logger: Arc<dyn Logger + Send + Sync>,
}

impl BackendFake {
    pub fn new(_config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            bottle_counter: AtomicU32::new(0),
            defect_chance: 0.1,
            camera_flake_chance: 0.01,
            frame_senders: Mutex::new(Vec::new()),
            logger: logger.with_namespace("backend").with_namespace("fake"),
        }
    }

    /// Hand a simulated camera frame to every feed subscriber.
    #[allow(dead_code)]
    pub fn push_frame(&self, frame: Vec<u8>) {
        let senders = self.frame_senders.lock().unwrap();
        for sender in senders.iter() {
            let _ = sender.send(frame.clone());
        }
    }

    fn next_record(&self) -> ClassificationRecord {
        let bottle_number = self.bottle_counter.fetch_add(1, Ordering::SeqCst) + 1;
        let mut rng = rand::rng();

        let (cap, label, plastic) = if rng.random::<f32>() < self.defect_chance {
            match rng.random_range(0..3) {
                0 => (
                    ComponentCheck::Missing,
                    ComponentCheck::Detected,
                    PlasticCheck::Good,
                ),
                1 => (
                    ComponentCheck::Detected,
                    ComponentCheck::Missing,
                    PlasticCheck::Good,
                ),
                _ => (
                    ComponentCheck::Detected,
                    ComponentCheck::Detected,
                    PlasticCheck::Damaged,
                ),
            }
        } else {
            (
                ComponentCheck::Detected,
                ComponentCheck::Detected,
                PlasticCheck::Good,
            )
        };

        let status = if cap != ComponentCheck::Detected
            || label != ComponentCheck::Detected
            || plastic != PlasticCheck::Good
        {
            OverallStatus::Defective
        } else {
            OverallStatus::NonDefective
        };

        let now = chrono::Local::now();
        ClassificationRecord {
            bottle_number,
            cap,
            label,
            plastic,
            status,
            day: now.format("%A").to_string(),
            date: now.format("%d/%m/%y").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            play_alert: None,
        }
    }
}

impl Backend for BackendFake {
    fn fetch_current(
        &self,
    ) -> Result<Option<ClassificationRecord>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Some(self.next_record()))
    }

    fn fetch_camera_health(
        &self,
    ) -> Result<CameraHealth, Box<dyn std::error::Error + Send + Sync>> {
        let running = rand::random::<f32>() >= self.camera_flake_chance;
        Ok(CameraHealth {
            initialized: true,
            running,
        })
    }

    fn video_frames(&self) -> Receiver<Vec<u8>> {
        let (tx, rx) = channel();
        self.frame_senders.lock().unwrap().push(tx);
        rx
    }
}
