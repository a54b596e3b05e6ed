use std::sync::Arc;

/// Logging is fire-and-forget: nothing in the dashboard can react to a
/// failed log line, so `info` is infallible by construction.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync>;
}
