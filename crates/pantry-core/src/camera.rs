//! Camera Session
//!
//! Scoped ownership of a live capture stream. The stream is released when
//! the session is captured, closed, or dropped, whichever comes first.

/// Barcode used in place of real decoding
pub const SIMULATED_BARCODE: &str = "1234567890123";

/// A device stream whose tracks can be stopped (a `MediaStream` in the browser)
pub trait MediaSource {
    fn stop_tracks(&mut self);
}

pub struct CameraSession<S: MediaSource> {
    stream: Option<S>,
}

/// Result of a capture: the scanned code and the name to prefill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub barcode: String,
    pub suggested_name: String,
}

impl ScanResult {
    pub fn from_barcode(barcode: &str) -> Self {
        Self {
            barcode: barcode.to_string(),
            suggested_name: format!("Product ({})", barcode),
        }
    }
}

impl<S: MediaSource> CameraSession<S> {
    pub fn open(stream: S) -> Self {
        log::debug!("[Camera] Stream acquired");
        Self { stream: Some(stream) }
    }

    pub fn stream(&self) -> Option<&S> {
        self.stream.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.stream.is_some()
    }

    /// Release the device and hand back the scan
    pub fn capture(mut self) -> ScanResult {
        self.release();
        ScanResult::from_barcode(SIMULATED_BARCODE)
    }

    /// Modal dismissed or errored
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop_tracks();
            log::debug!("[Camera] Stream released");
        }
    }
}

impl<S: MediaSource> Drop for CameraSession<S> {
    fn drop(&mut self) {
        self.release();
    }
}
