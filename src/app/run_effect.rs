use crate::app::core::{Effect, Msg, SelectedImage};
use crate::app::run::App;
use crate::capture::{CandidateImage, CAMERA_FILE_NAME};

impl App {
    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::OpenFilePicker => {
                let picked = self.file_picker.pick_image();
                self.send(Msg::FilePicked(picked));
            }
            Effect::StartCamera => {
                if let Err(e) = self.camera.start() {
                    let _ = self.logger.warn(&format!("Failed to start camera: {}", e));
                    self.send(Msg::FrameCaptured(Err(e)));
                }
            }
            Effect::StopCamera => {
                if let Err(e) = self.camera.stop() {
                    let _ = self.logger.warn(&format!("Failed to stop camera: {}", e));
                }
            }
            Effect::CaptureFrame => {
                let captured = self
                    .camera
                    .capture_frame()
                    .map(|bytes| CandidateImage::new(CAMERA_FILE_NAME, bytes));
                self.send(Msg::FrameCaptured(captured));
            }
            Effect::CreatePreview { candidate, kind } => {
                let ready = match self.previews.create(&candidate.bytes) {
                    Ok(preview) => Ok(SelectedImage {
                        file_name: candidate.file_name,
                        kind,
                        bytes: candidate.bytes,
                        preview,
                    }),
                    Err(e) => Err(e),
                };
                self.send(Msg::PreviewReady(ready));
            }
            Effect::ReleasePreview { handle } => {
                if let Err(e) = self.previews.release(handle) {
                    let _ = self
                        .logger
                        .warn(&format!("Failed to release preview: {}", e));
                }
            }
            Effect::Classify { image } => {
                let result = self.classifier.classify(&image);
                self.send(Msg::ClassifyDone(result));
            }
            // Speech is best-effort; a missing or broken synthesizer never
            // affects the analysis flow.
            Effect::Announce { text } => {
                if let Err(e) = self.speech.speak(&text) {
                    let _ = self.logger.warn(&format!("Failed to announce: {}", e));
                }
            }
            Effect::CancelAnnouncement => {
                if let Err(e) = self.speech.cancel() {
                    let _ = self
                        .logger
                        .warn(&format!("Failed to cancel announcement: {}", e));
                }
            }
        }
    }
}
