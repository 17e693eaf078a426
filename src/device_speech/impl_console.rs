use crate::device_speech::interface::SpeechSynth;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// Prints announcements instead of speaking them. A platform TTS backend
/// slots in behind the same trait.
pub struct SpeechSynthConsole {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl SpeechSynthConsole {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("speech").with_namespace("console"),
        }
    }
}

impl SpeechSynth for SpeechSynthConsole {
    fn speak(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("Announcing: {}", text))?;
        Ok(())
    }

    fn cancel(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Announcement cancelled")?;
        Ok(())
    }
}
