use backend::impl_http::BackendHttp;
use config::Config;
use dashboard::main::Dashboard;
use device_alert::impl_rodio::DeviceAlertRodio;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

mod backend;
mod config;
mod dashboard;
mod device_alert;
mod device_display;
mod inspection;
mod library;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let backend = Arc::new(BackendHttp::new(&config, logger.clone()));

    let device_alert = Arc::new(DeviceAlertRodio::new(&config, logger.clone()));

    let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> =
        Arc::new(Mutex::new(DeviceDisplayGui::new()));
    device_display.lock().unwrap().init()?;

    let dashboard = Dashboard::new(config, logger, backend, device_alert, device_display);

    dashboard.run()?;

    Ok(())
}
