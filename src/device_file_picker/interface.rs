use crate::capture::CandidateImage;

/// Native "browse files" dialog. Returns `None` when the user cancels.
pub trait FilePicker: Send + Sync {
    fn pick_image(
        &self,
    ) -> Result<Option<CandidateImage>, Box<dyn std::error::Error + Send + Sync>>;
}
