use crate::library::logger::interface::Logger;
use chrono::Utc;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LoggerConsole {
    namespace: Option<String>,
    timezone: chrono::FixedOffset,
}

impl LoggerConsole {
    pub fn new(timezone: chrono::FixedOffset) -> Self {
        Self {
            namespace: None,
            timezone,
        }
    }

    fn child(&self, namespace: &str) -> LoggerConsole {
        let namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };
        LoggerConsole {
            namespace: Some(namespace),
            timezone: self.timezone,
        }
    }

    fn line(&self, message: &str) -> String {
        let timestamp = Utc::now()
            .with_timezone(&self.timezone)
            .format("%Y-%m-%d %I:%M:%S%.3f %p");
        match &self.namespace {
            Some(namespace) => format!("[{}] {}: {}", timestamp, namespace, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }
}

impl Logger for LoggerConsole {
    fn info(&self, message: &str) {
        println!("{}", self.line(message));
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(self.child(namespace))
    }
}
