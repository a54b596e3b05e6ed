use crate::backend::interface::Backend;
use crate::config::Config;
use crate::dashboard::core::{init, transition, Effect, Event, Model};
use crate::dashboard::interpret_effect::AlertTimers;
use crate::dashboard::render::view;
use crate::device_alert::interface::DeviceAlert;
use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Dashboard {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub backend: Arc<dyn Backend + Send + Sync>,
    pub device_alert: Arc<dyn DeviceAlert + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub event_sender: Sender<Event>,
    pub event_receiver: Arc<Mutex<Receiver<Event>>>,
    pub(crate) alert_timers: Arc<Mutex<AlertTimers>>,
}

impl Dashboard {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        backend: Arc<dyn Backend + Send + Sync>,
        device_alert: Arc<dyn DeviceAlert + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        Self {
            config,
            logger,
            backend,
            device_alert,
            device_display,
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
            alert_timers: Arc::new(Mutex::new(AlertTimers::default())),
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.interpret_effect(effect));
        }
    }

    fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let view_model = view(model);
        self.device_display.lock().unwrap().render(&view_model)
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (mut current_model, effects) = init();

        self.render(&current_model)?;
        self.spawn_effects(effects);

        loop {
            let event = {
                let receiver = self.event_receiver.lock().unwrap();
                receiver.recv()?
            };

            self.logger.info(&format!("Processing event: {:?}", event));

            let (new_model, new_effects) = transition(current_model, event);

            if !new_effects.is_empty() {
                self.logger.info(&format!("Effects: {:?}", new_effects));
            }

            current_model = new_model;
            self.render(&current_model)?;
            self.spawn_effects(new_effects);
        }
    }
}
