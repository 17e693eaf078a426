use crate::capture::CandidateImage;
use crate::device_file_picker::interface::FilePicker;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

pub struct FilePickerRfd {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FilePickerRfd {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("file_picker").with_namespace("rfd"),
        }
    }
}

impl FilePicker for FilePickerRfd {
    fn pick_image(
        &self,
    ) -> Result<Option<CandidateImage>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Opening file dialog...")?;

        let picked = rfd::FileDialog::new()
            .set_title("Select a cattle photo")
            .add_filter("Images", &["jpg", "jpeg", "png"])
            .pick_file();

        let path = match picked {
            Some(path) => path,
            None => {
                self.logger.info("File dialog cancelled")?;
                return Ok(None);
            }
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let bytes = std::fs::read(&path)?;

        self.logger
            .info(&format!("Picked {} ({} bytes)", file_name, bytes.len()))?;
        Ok(Some(CandidateImage::new(file_name, bytes)))
    }
}
