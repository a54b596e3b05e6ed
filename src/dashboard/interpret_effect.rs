use crate::dashboard::core::{Effect, Event};
use crate::dashboard::main::Dashboard;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Bookkeeping for the repeating alert timer. Epochs only move forward: a
/// start or stop arriving out of thread-scheduling order for an older epoch
/// is ignored, so at most one uncancelled timer exists at any time.
#[derive(Default)]
pub(crate) struct AlertTimers {
    floor: u64,
    active: Option<AlertTimer>,
}

struct AlertTimer {
    epoch: u64,
    cancelled: Arc<AtomicBool>,
}

impl AlertTimers {
    /// Register a new timer, cancelling the previous one. Returns `None`
    /// when the epoch has already been superseded or stopped.
    fn start(&mut self, epoch: u64) -> Option<Arc<AtomicBool>> {
        if epoch <= self.floor {
            return None;
        }
        self.floor = epoch;

        if let Some(previous) = self.active.take() {
            previous.cancelled.store(true, Ordering::SeqCst);
        }

        let cancelled = Arc::new(AtomicBool::new(false));
        self.active = Some(AlertTimer {
            epoch,
            cancelled: cancelled.clone(),
        });
        Some(cancelled)
    }

    fn stop(&mut self, epoch: u64) {
        if epoch > self.floor {
            self.floor = epoch;
        }
        if let Some(timer) = &self.active {
            if timer.epoch <= epoch {
                timer.cancelled.store(true, Ordering::SeqCst);
                self.active = None;
            }
        }
    }
}

impl Dashboard {
    /// Each effect runs on its own thread. Subscription effects loop until
    /// the event channel closes; everything else is one-shot.
    pub fn interpret_effect(&self, effect: Effect) {
        self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeCurrentPoll => loop {
                let fetched = self.backend.fetch_current();
                if let Err(e) = &fetched {
                    self.logger.info(&format!("Current poll failed: {}", e));
                }
                if self
                    .event_sender
                    .send(Event::CurrentFetchDone(fetched))
                    .is_err()
                {
                    break;
                }
                std::thread::sleep(self.config.current_poll_rate);
            },

            Effect::SubscribeCameraHealthPoll => loop {
                let fetched = self.backend.fetch_camera_health();
                if let Err(e) = &fetched {
                    self.logger.info(&format!("Camera poll failed: {}", e));
                }
                if self
                    .event_sender
                    .send(Event::CameraHealthFetchDone(fetched))
                    .is_err()
                {
                    break;
                }
                std::thread::sleep(self.config.camera_poll_rate);
            },

            Effect::SubscribeVideoFeed => {
                let frames = self.backend.video_frames();
                while let Ok(frame) = frames.recv() {
                    let result = self.device_display.lock().unwrap().show_frame(&frame);
                    if let Err(e) = result {
                        self.logger.info(&format!("Frame display failed: {}", e));
                    }
                }
            }

            Effect::PlayAlert => self.play_alert(),

            Effect::StartAlertRepeat { epoch } => self.run_alert_repeat(epoch),

            Effect::StopAlertRepeat { epoch } => {
                self.alert_timers.lock().unwrap().stop(epoch);
            }
        }
    }

    fn play_alert(&self) {
        if let Err(primary) = self.device_alert.play() {
            self.logger
                .info(&format!("Alert playback failed: {}", primary));

            if let Err(fallback) = self.device_alert.play_fallback() {
                self.logger
                    .info(&format!("Fallback playback failed: {}", fallback));
            }
        }
    }

    fn run_alert_repeat(&self, epoch: u64) {
        let cancelled = match self.alert_timers.lock().unwrap().start(epoch) {
            Some(cancelled) => cancelled,
            None => return,
        };

        loop {
            std::thread::sleep(self.config.alert_repeat_rate);
            if cancelled.load(Ordering::SeqCst) {
                break;
            }
            if self.event_sender.send(Event::AlertTick { epoch }).is_err() {
                break;
            }
        }
    }
}
