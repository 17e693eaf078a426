use crate::capture::CandidateImage;
use crate::device_file_picker::interface::FilePicker;
use std::sync::Mutex;

/// Test double: hands out whatever the test queued, once per pick.
pub struct FilePickerFake {
    queued: Mutex<Vec<Option<CandidateImage>>>,
}

impl FilePickerFake {
    pub fn new() -> Self {
        Self {
            queued: Mutex::new(vec![]),
        }
    }

    pub fn queue(&self, pick: Option<CandidateImage>) {
        self.queued.lock().unwrap().push(pick);
    }
}

impl FilePicker for FilePickerFake {
    fn pick_image(
        &self,
    ) -> Result<Option<CandidateImage>, Box<dyn std::error::Error + Send + Sync>> {
        let mut queued = self.queued.lock().unwrap();
        if queued.is_empty() {
            return Ok(None);
        }
        Ok(queued.remove(0))
    }
}
