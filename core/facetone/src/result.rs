use serde::{Deserialize, Serialize};

use crate::color::ColorProfile;
use crate::geometry::{FaceDimensions, FacialFeatures};
use crate::region::FaceRegion;

/// Warning recorded when the locator finds no face.
pub const NO_FACE_WARNING: &str = "No face detected in image";

/// Pixel size of the analyzed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// Facts about the uploaded file, computed by the decoder or supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    /// Name the file was uploaded under, when known.
    pub original_file_name: Option<String>,
    /// Size of the encoded input in bytes.
    pub file_size: u64,
    /// Container format, e.g. `"jpeg"` or `"png"`.
    pub format: String,
    pub dimensions: ImageDimensions,
}

/// Diagnostics for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    pub processing_time_ms: u64,
    /// Heuristic score in `[0, 1]` counting how many signals were computed.
    pub confidence: f64,
    pub algorithm_id: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Everything the pipeline learned about one portrait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub file_metadata: Option<FileMetadata>,
    pub face_detected: bool,
    /// 0 or 1; the locator reports at most one face.
    pub face_count: u32,
    pub face_region: Option<FaceRegion>,
    pub colors: ColorProfile,
    pub face_dimensions: Option<FaceDimensions>,
    pub facial_features: FacialFeatures,
    pub analysis_metadata: AnalysisMetadata,
}

impl AnalysisResult {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to an indented JSON string.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
