//! Liveness gate applied to detection results during registration.
//!
//! The gate is off unless configured. When off, any detection the
//! face-analysis service answers with a success status is accepted.

use super::DetectionResult;

/// Reason a detection result failed the gate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LivenessRejection {
    /// The service flagged the face as not live.
    #[error("face was not judged to be a live capture")]
    NotReal,
    /// The anti-spoofing score fell below the configured floor.
    #[error("anti-spoofing score {score} is below the required {minimum}")]
    ScoreTooLow { score: f64, minimum: f64 },
}

/// Policy deciding whether a detection result is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LivenessPolicy {
    enforce: bool,
    min_score: Option<f64>,
}

impl LivenessPolicy {
    /// Policy that accepts every detection result.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Policy that rejects non-live faces and, when given, scores below
    /// `min_score`.
    #[must_use]
    pub fn enforcing(min_score: Option<f64>) -> Self {
        Self {
            enforce: true,
            min_score,
        }
    }

    /// Whether the gate rejects anything at all.
    #[must_use]
    pub fn is_enforcing(&self) -> bool {
        self.enforce
    }

    /// Check a detection result against the policy.
    ///
    /// # Errors
    /// Returns the first [`LivenessRejection`] that applies.
    pub fn evaluate(&self, detection: &DetectionResult) -> Result<(), LivenessRejection> {
        if !self.enforce {
            return Ok(());
        }
        if !detection.is_real {
            return Err(LivenessRejection::NotReal);
        }
        match self.min_score {
            Some(minimum) if detection.antispoof_score < minimum => {
                Err(LivenessRejection::ScoreTooLow {
                    score: detection.antispoof_score,
                    minimum,
                })
            }
            _ => Ok(()),
        }
    }
}
