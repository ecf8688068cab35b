//! Face proportions derived from the located face rectangle.
//!
//! Only `lengthToWidthRatio` (and the face shape derived from it) is measured.
//! Jaw, forehead and cheekbone widths are fixed fractions of the face width,
//! and the remaining [`FacialFeatures`] fields are constant placeholders until
//! a landmark-based locator can supply them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::UNKNOWN_LABEL;
use crate::region::FaceRegion;

const JAW_WIDTH_FRACTION: f64 = 0.8;
const FOREHEAD_WIDTH_FRACTION: f64 = 0.9;
const CHEEKBONE_WIDTH_FRACTION: f64 = 0.95;
const JAW_TO_FOREHEAD_RATIO: f64 = 0.89;
const CHEEKBONE_TO_JAW_RATIO: f64 = 1.19;

/// Coarse face outline label, from the length-to-width ratio alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceShape {
    Oval,
    Round,
    Square,
    Oblong,
    #[default]
    Unknown,
}

impl FaceShape {
    /// Classify a length/width ratio. Rules apply in order:
    /// `> 1.5` oblong, `< 1.1` round, `1.1..=1.3` oval, `(1.3, 1.5]` square.
    /// Anything left (NaN) is unknown.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 1.5 {
            FaceShape::Oblong
        } else if ratio < 1.1 {
            FaceShape::Round
        } else if (1.1..=1.3).contains(&ratio) {
            FaceShape::Oval
        } else if ratio > 1.3 && ratio <= 1.5 {
            FaceShape::Square
        } else {
            FaceShape::Unknown
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FaceShape::Oval => "oval",
            FaceShape::Round => "round",
            FaceShape::Square => "square",
            FaceShape::Oblong => "oblong",
            FaceShape::Unknown => UNKNOWN_LABEL,
        }
    }

    pub fn is_known(self) -> bool {
        self != FaceShape::Unknown
    }
}

impl fmt::Display for FaceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pixel measurements of the face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceDimensions {
    pub face_length: f64,
    pub face_width: f64,
    pub jaw_width: f64,
    pub forehead_width: f64,
    pub cheekbone_width: f64,
    pub length_to_width_ratio: f64,
    pub jaw_to_forehead_ratio: f64,
    pub cheekbone_to_jaw_ratio: f64,
}

/// Descriptive feature labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacialFeatures {
    pub face_shape: FaceShape,
    pub eye_shape: String,
    pub eye_distance: String,
    pub eyebrow_shape: String,
    pub nose_shape: String,
    pub lip_shape: String,
}

impl Default for FacialFeatures {
    fn default() -> Self {
        Self {
            face_shape: FaceShape::Unknown,
            eye_shape: UNKNOWN_LABEL.to_string(),
            eye_distance: UNKNOWN_LABEL.to_string(),
            eyebrow_shape: UNKNOWN_LABEL.to_string(),
            nose_shape: UNKNOWN_LABEL.to_string(),
            lip_shape: UNKNOWN_LABEL.to_string(),
        }
    }
}

/// Measure a located face.
pub fn estimate_dimensions(face: &FaceRegion) -> FaceDimensions {
    let face_length = face.height as f64;
    let face_width = face.width as f64;

    FaceDimensions {
        face_length,
        face_width,
        jaw_width: face_width * JAW_WIDTH_FRACTION,
        forehead_width: face_width * FOREHEAD_WIDTH_FRACTION,
        cheekbone_width: face_width * CHEEKBONE_WIDTH_FRACTION,
        length_to_width_ratio: face_length / face_width,
        jaw_to_forehead_ratio: JAW_TO_FOREHEAD_RATIO,
        cheekbone_to_jaw_ratio: CHEEKBONE_TO_JAW_RATIO,
    }
}

/// Label features from measured dimensions.
pub fn estimate_features(dimensions: &FaceDimensions) -> FacialFeatures {
    // Only the face shape is measured; the rest have no signal behind them yet.
    FacialFeatures {
        face_shape: FaceShape::from_ratio(dimensions.length_to_width_ratio),
        eye_shape: "almond".to_string(),
        eye_distance: "normal".to_string(),
        eyebrow_shape: "arched".to_string(),
        nose_shape: "straight".to_string(),
        lip_shape: "full".to_string(),
    }
}
