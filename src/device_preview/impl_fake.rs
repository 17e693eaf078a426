use crate::device_preview::interface::{PreviewHandle, PreviewPixels, PreviewStore};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Test double that skips decoding and records every create/release so tests
/// can assert the exactly-once release discipline.
pub struct PreviewStoreFake {
    next_id: AtomicU64,
    pub created: Mutex<Vec<PreviewHandle>>,
    pub released: Mutex<Vec<PreviewHandle>>,
}

impl PreviewStoreFake {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            created: Mutex::new(vec![]),
            released: Mutex::new(vec![]),
        }
    }
}

impl PreviewStore for PreviewStoreFake {
    fn create(
        &self,
        _bytes: &[u8],
    ) -> Result<PreviewHandle, Box<dyn std::error::Error + Send + Sync>> {
        let handle = PreviewHandle(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.created.lock().unwrap().push(handle);
        Ok(handle)
    }

    fn release(
        &self,
        handle: PreviewHandle,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut released = self.released.lock().unwrap();
        if released.contains(&handle) {
            return Err(format!("preview {} released twice", handle.0).into());
        }
        released.push(handle);
        Ok(())
    }

    fn pixels(&self, _handle: PreviewHandle) -> Option<PreviewPixels> {
        None
    }
}
