/// A still-photo camera. Started when the user enters camera mode, stopped
/// when leaving it; `capture_frame` returns one encoded JPEG so a captured
/// photo flows through the same path as an uploaded file.
pub trait DeviceCamera: Send + Sync {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn capture_frame(&self) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>;
}
