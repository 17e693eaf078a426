/// Opaque reference to a decoded preview held by a [`PreviewStore`].
/// The analog of a browser object URL: created when an image is selected,
/// dereferenced by the GUI for painting, and released exactly once when the
/// image is replaced or the cycle resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewHandle(pub u64);

#[derive(Debug, Clone)]
pub struct PreviewPixels {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub trait PreviewStore: Send + Sync {
    /// Decode the image and register it, returning a handle for later lookup.
    fn create(
        &self,
        bytes: &[u8],
    ) -> Result<PreviewHandle, Box<dyn std::error::Error + Send + Sync>>;

    /// Drop the decoded image. Releasing a handle that is not live is an
    /// error so double-release bugs surface instead of passing silently.
    fn release(
        &self,
        handle: PreviewHandle,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Pixels for a live handle, for rendering. `None` once released.
    fn pixels(&self, handle: PreviewHandle) -> Option<PreviewPixels>;
}
