use crate::device_preview::interface::{PreviewHandle, PreviewPixels, PreviewStore};
use crate::library::logger::interface::Logger;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Largest edge kept for a preview. Uploads can be full-resolution photos;
/// the preview only ever paints inside a card.
const MAX_PREVIEW_EDGE: u32 = 640;

pub struct PreviewStoreMemory {
    next_id: AtomicU64,
    previews: Mutex<HashMap<u64, PreviewPixels>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PreviewStoreMemory {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            next_id: AtomicU64::new(1),
            previews: Mutex::new(HashMap::new()),
            logger: logger.with_namespace("preview").with_namespace("memory"),
        }
    }

    pub fn live_count(&self) -> usize {
        self.previews.lock().unwrap().len()
    }
}

impl PreviewStore for PreviewStoreMemory {
    fn create(
        &self,
        bytes: &[u8],
    ) -> Result<PreviewHandle, Box<dyn std::error::Error + Send + Sync>> {
        let decoded = image::load_from_memory(bytes)?;
        let scaled = decoded.thumbnail(MAX_PREVIEW_EDGE, MAX_PREVIEW_EDGE);
        let rgba = scaled.to_rgba8();

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let pixels = PreviewPixels {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        };
        self.previews.lock().unwrap().insert(id, pixels);

        self.logger.info(&format!("Created preview {}", id))?;
        Ok(PreviewHandle(id))
    }

    fn release(
        &self,
        handle: PreviewHandle,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match self.previews.lock().unwrap().remove(&handle.0) {
            Some(_) => {
                self.logger.info(&format!("Released preview {}", handle.0))?;
                Ok(())
            }
            None => Err(format!("preview {} is not live", handle.0).into()),
        }
    }

    fn pixels(&self, handle: PreviewHandle) -> Option<PreviewPixels> {
        self.previews.lock().unwrap().get(&handle.0).cloned()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;
    use image::{DynamicImage, ImageFormat, RgbImage};
    use std::io::Cursor;

    fn store() -> PreviewStoreMemory {
        let logger = Arc::new(LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap()));
        PreviewStoreMemory::new(logger)
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 64])
        });
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn create_decodes_and_pixels_round_trip() {
        let store = store();
        let handle = store.create(&png_bytes(8, 6)).unwrap();

        let pixels = store.pixels(handle).unwrap();
        assert_eq!((pixels.width, pixels.height), (8, 6));
        assert_eq!(pixels.rgba.len(), 8 * 6 * 4);
        assert_eq!(store.live_count(), 1);
    }

    #[test]
    fn large_images_are_scaled_down() {
        let store = store();
        let handle = store.create(&png_bytes(MAX_PREVIEW_EDGE * 2, 100)).unwrap();

        let pixels = store.pixels(handle).unwrap();
        assert!(pixels.width <= MAX_PREVIEW_EDGE);
    }

    #[test]
    fn release_drops_the_preview() {
        let store = store();
        let handle = store.create(&png_bytes(4, 4)).unwrap();

        store.release(handle).unwrap();
        assert!(store.pixels(handle).is_none());
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn double_release_is_an_error() {
        let store = store();
        let handle = store.create(&png_bytes(4, 4)).unwrap();

        store.release(handle).unwrap();
        assert!(store.release(handle).is_err());
    }

    #[test]
    fn create_rejects_undecodable_bytes() {
        let store = store();
        assert!(store.create(b"not an image").is_err());
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn handles_are_never_reused() {
        let store = store();
        let first = store.create(&png_bytes(4, 4)).unwrap();
        store.release(first).unwrap();

        let second = store.create(&png_bytes(4, 4)).unwrap();
        assert_ne!(first, second);
    }
}
