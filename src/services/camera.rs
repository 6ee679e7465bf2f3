//! Camera - Simulated Capture Pipeline
//!
//! There is no real camera in the fixture build. Capture takes a short
//! moment and yields a plausible document scan.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use chrono::Local;

use crate::domain::scan::{CapturedPhoto, FlashMode};
use crate::error::Result;

/// A4 at 300 dpi, what a document scanner would produce
const SCAN_WIDTH: u32 = 2480;
const SCAN_HEIGHT: u32 = 3508;

static CAPTURE_COUNTER: AtomicU32 = AtomicU32::new(1);

/// Take a photo. The flash mode only affects the simulated file size.
pub async fn capture(flash: FlashMode) -> Result<CapturedPhoto> {
    tokio::time::sleep(Duration::from_millis(350)).await;

    let seq = CAPTURE_COUNTER.fetch_add(1, Ordering::Relaxed);
    let size_bytes = match flash {
        FlashMode::Off => 1_250_000,
        FlashMode::On => 1_480_000,
        FlashMode::Auto => 1_360_000,
    };

    Ok(CapturedPhoto {
        file_name: format!("scan-{seq:03}.jpg"),
        width: SCAN_WIDTH,
        height: SCAN_HEIGHT,
        size_bytes,
        taken_at: Local::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_are_numbered_sequentially() {
        let first = capture(FlashMode::Off).await.unwrap();
        let second = capture(FlashMode::On).await.unwrap();

        assert!(first.file_name.starts_with("scan-"));
        assert!(first.file_name.ends_with(".jpg"));
        assert_ne!(first.file_name, second.file_name);
        assert_eq!(first.width, 2480);
        assert_eq!(first.height, 3508);
        assert!(second.size_bytes > first.size_bytes);
    }
}
