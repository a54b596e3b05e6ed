use crate::device_alert::interface::DeviceAlert;
use crate::library::logger::interface::Logger;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

pub struct DeviceAlertFake {
    plays: AtomicUsize,
    fallback_plays: AtomicUsize,
    fail_primary: AtomicBool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceAlertFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            plays: AtomicUsize::new(0),
            fallback_plays: AtomicUsize::new(0),
            fail_primary: AtomicBool::new(false),
            logger: logger.with_namespace("alert").with_namespace("fake"),
        }
    }

    pub fn set_fail_primary(&self, fail: bool) {
        self.fail_primary.store(fail, Ordering::SeqCst);
    }

    pub fn plays(&self) -> usize {
        self.plays.load(Ordering::SeqCst)
    }

    pub fn fallback_plays(&self) -> usize {
        self.fallback_plays.load(Ordering::SeqCst)
    }
}

impl DeviceAlert for DeviceAlertFake {
    fn play(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.fail_primary.load(Ordering::SeqCst) {
            return Err("primary output unavailable".into());
        }
        self.plays.fetch_add(1, Ordering::SeqCst);
        self.logger.info("Alert played");
        Ok(())
    }

    fn play_fallback(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.fallback_plays.fetch_add(1, Ordering::SeqCst);
        self.logger.info("Alert played (fallback)");
        Ok(())
    }
}
