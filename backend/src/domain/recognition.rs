//! Results reported by the face-analysis service.

use std::time::Duration;

/// Face detection and anti-spoofing verdict for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    /// Status string reported by the service (`"success"` when a face was found).
    pub status: String,
    /// Whether the service judged the face to be a live capture.
    pub is_real: bool,
    /// Anti-spoofing confidence, higher is more likely real.
    pub antispoof_score: f64,
}

/// Similarity verdict comparing a reference image with a probe image.
///
/// Values are relayed exactly as the service reported them; the gateway
/// applies no thresholding of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub is_match: bool,
    pub distance: f64,
    pub threshold: f64,
    /// Time the service spent on the comparison, in seconds.
    pub elapsed: f64,
}

impl ComparisonResult {
    /// Service-side comparison time as a [`Duration`], when representable.
    #[must_use]
    pub fn elapsed_duration(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.elapsed).ok()
    }
}
