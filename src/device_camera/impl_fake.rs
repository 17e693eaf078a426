use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageFormat, RgbImage};
use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Stands in for camera hardware: produces a synthetic JPEG frame with a
/// random tint per capture. A real webcam backend slots in behind the same
/// trait.
pub struct DeviceCameraFake {
    started: AtomicBool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            started: AtomicBool::new(false),
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Starting camera...")?;
        self.started.store(true, Ordering::SeqCst);
        self.logger.info("Camera started")?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Stopping camera...")?;
        self.started.store(false, Ordering::SeqCst);
        self.logger.info("Camera stopped")?;
        Ok(())
    }

    fn capture_frame(&self) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        if !self.started.load(Ordering::SeqCst) {
            return Err("camera is not started".into());
        }

        self.logger.info("Capturing frame...")?;

        let tint = rand::random::<u8>();
        let frame = RgbImage::from_fn(640, 480, |x, y| {
            let r = ((x * 255) / 640) as u8;
            let g = ((y * 255) / 480) as u8;
            image::Rgb([r, g, tint])
        });

        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(frame).write_to(&mut buf, ImageFormat::Jpeg)?;

        self.logger.info("Frame captured")?;
        Ok(buf.into_inner())
    }
}
