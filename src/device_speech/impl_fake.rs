use crate::device_speech::interface::SpeechSynth;
use std::sync::Mutex;

/// Test double recording every announcement and cancellation.
pub struct SpeechSynthFake {
    pub spoken: Mutex<Vec<String>>,
    pub cancelled: Mutex<usize>,
}

impl SpeechSynthFake {
    pub fn new() -> Self {
        Self {
            spoken: Mutex::new(vec![]),
            cancelled: Mutex::new(0),
        }
    }
}

impl SpeechSynth for SpeechSynthFake {
    fn speak(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn cancel(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        *self.cancelled.lock().unwrap() += 1;
        Ok(())
    }
}
