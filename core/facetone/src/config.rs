//! Tunable sampling parameters.

use serde::{Deserialize, Serialize};

use crate::error::FaceToneError;
use crate::face_detector::{DEFAULT_FACE_STRIDE, DEFAULT_MIN_SKIN_SAMPLES};

/// Default grid spacing, in pixels, when averaging a feature region.
pub const DEFAULT_SAMPLE_STRIDE: u32 = 5;

/// Sampling parameters for one analysis.
///
/// The defaults reproduce the reference output; smaller strides trade speed
/// for density and are mostly useful in tests on tiny images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzerConfig {
    /// Grid spacing for the skin scan that locates the face.
    pub face_stride: u32,
    /// Grid spacing for averaging feature regions.
    pub sample_stride: u32,
    /// Minimum skin-like grid samples before a face is accepted.
    pub min_skin_samples: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            face_stride: DEFAULT_FACE_STRIDE,
            sample_stride: DEFAULT_SAMPLE_STRIDE,
            min_skin_samples: DEFAULT_MIN_SKIN_SAMPLES,
        }
    }
}

impl AnalyzerConfig {
    /// Parse a JSON object. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, FaceToneError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| FaceToneError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject strides that would never advance.
    pub fn validate(&self) -> Result<(), FaceToneError> {
        if self.face_stride == 0 {
            return Err(FaceToneError::InvalidConfig(
                "faceStride must be > 0".to_string(),
            ));
        }
        if self.sample_stride == 0 {
            return Err(FaceToneError::InvalidConfig(
                "sampleStride must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_strides() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.face_stride, 10);
        assert_eq!(config.sample_stride, 5);
        assert_eq!(config.min_skin_samples, 50);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AnalyzerConfig::from_json_str(r#"{"sampleStride": 2}"#).unwrap();
        assert_eq!(config.sample_stride, 2);
        assert_eq!(config.face_stride, 10);
    }

    #[test]
    fn zero_stride_is_rejected() {
        assert!(AnalyzerConfig::from_json_str(r#"{"faceStride": 0}"#).is_err());
        assert!(AnalyzerConfig::from_json_str(r#"{"sampleStride": 0}"#).is_err());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = AnalyzerConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, FaceToneError::InvalidConfig(_)));
    }
}
