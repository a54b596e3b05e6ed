/// Audio output for the defect alert cue.
pub trait DeviceAlert: Send + Sync {
    /// Play the alert once on the primary output.
    fn play(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Second attempt on an independently constructed output, used when
    /// `play` fails.
    fn play_fallback(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
