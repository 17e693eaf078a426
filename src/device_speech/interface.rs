/// Speech synthesis. Announcements are a non-essential side effect of the
/// result screen; failures are logged and never surface to the user.
pub trait SpeechSynth: Send + Sync {
    fn speak(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Stop an in-progress announcement. A no-op when nothing is speaking.
    fn cancel(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
