use image::ImageFormat;
use thiserror::Error;

/// File name given to frames coming from the camera, mirroring what a photo
/// input would produce.
pub const CAMERA_FILE_NAME: &str = "camera-photo.jpg";

/// Image types accepted from any capture source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
}

/// A file or camera frame before it has been validated and previewed.
/// Both capture sources normalize to this shape, so everything downstream
/// is source-agnostic.
#[derive(Clone, PartialEq)]
pub struct CandidateImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl CandidateImage {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

impl std::fmt::Debug for CandidateImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateImage")
            .field("file_name", &self.file_name)
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .finish()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaptureError {
    #[error("only JPEG and PNG images are accepted")]
    UnsupportedType,
    #[error("image data is empty")]
    Empty,
}

/// Sniffs the image type from magic bytes. The declared file name or MIME
/// type is never trusted.
pub fn sniff_kind(bytes: &[u8]) -> Option<ImageKind> {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Jpeg) => Some(ImageKind::Jpeg),
        Ok(ImageFormat::Png) => Some(ImageKind::Png),
        _ => None,
    }
}

pub fn validate(
    candidate: &CandidateImage,
    accepted: &[ImageKind],
) -> Result<ImageKind, CaptureError> {
    if candidate.bytes.is_empty() {
        return Err(CaptureError::Empty);
    }
    match sniff_kind(&candidate.bytes) {
        Some(kind) if accepted.contains(&kind) => Ok(kind),
        _ => Err(CaptureError::UnsupportedType),
    }
}
