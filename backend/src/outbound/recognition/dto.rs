//! Wire DTOs for the face-analysis service.

use serde::{Deserialize, Serialize};

use crate::domain::{ComparisonResult, DetectionResult};

#[derive(Serialize)]
pub(super) struct DetectRequestDto<'a> {
    pub(super) img: &'a str,
}

#[derive(Serialize)]
pub(super) struct CompareRequestDto<'a> {
    pub(super) regimg: &'a str,
    pub(super) verimg: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct DetectResponseDto {
    #[serde(default)]
    status: Option<String>,
    is_real: bool,
    antispoof_score: f64,
}

impl From<DetectResponseDto> for DetectionResult {
    fn from(value: DetectResponseDto) -> Self {
        Self {
            status: value.status.unwrap_or_else(|| "success".to_owned()),
            is_real: value.is_real,
            antispoof_score: value.antispoof_score,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct CompareResponseDto {
    is_match: bool,
    distance: f64,
    threshold: f64,
    time: f64,
}

impl From<CompareResponseDto> for ComparisonResult {
    fn from(value: CompareResponseDto) -> Self {
        Self {
            is_match: value.is_match,
            distance: value.distance,
            threshold: value.threshold,
            elapsed: value.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn detect_request_uses_img_key() {
        let value = serde_json::to_value(DetectRequestDto { img: "aGk=" }).expect("encode");
        assert_eq!(value, json!({ "img": "aGk=" }));
    }

    #[rstest]
    fn compare_request_uses_service_keys() {
        let value = serde_json::to_value(CompareRequestDto {
            regimg: "https://x/y.jpg",
            verimg: "aGk=",
        })
        .expect("encode");
        assert_eq!(value, json!({ "regimg": "https://x/y.jpg", "verimg": "aGk=" }));
    }

    #[rstest]
    fn compare_time_becomes_elapsed() {
        let dto: CompareResponseDto = serde_json::from_value(
            json!({ "is_match": true, "distance": 0.12, "threshold": 0.4, "time": 0.8 }),
        )
        .expect("decode");
        let result = ComparisonResult::from(dto);
        assert!(result.is_match);
        assert_eq!(result.elapsed, 0.8);
    }
}
