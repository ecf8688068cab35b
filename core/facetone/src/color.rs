//! Color primitives shared by the sampler, classifier and result types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FaceToneError;

/// Label used whenever a color falls outside every range of its domain.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Confidence given to a measured sample whose label resolved to a known category.
const MATCHED_SAMPLE_CONFIDENCE: f64 = 0.8;

/// Confidence given to a measured sample that matched no category.
const UNMATCHED_SAMPLE_CONFIDENCE: f64 = 0.3;

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` encoding.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` (either case). Shorthand and alpha forms are rejected.
    pub fn from_hex(hex: &str) -> Result<Self, FaceToneError> {
        let invalid = || FaceToneError::InvalidHex(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Averaged color of one tracked feature, with its category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSample {
    pub primary_label: String,
    pub hex: String,
    pub rgb: Rgb,
    pub confidence: f64,
}

impl ColorSample {
    /// A sample measured from pixels and labelled by the classifier.
    pub fn measured(rgb: Rgb, label: &str) -> Self {
        let confidence = if label == UNKNOWN_LABEL {
            UNMATCHED_SAMPLE_CONFIDENCE
        } else {
            MATCHED_SAMPLE_CONFIDENCE
        };
        Self {
            primary_label: label.to_string(),
            hex: rgb.to_hex(),
            rgb,
            confidence,
        }
    }

    /// Whether this sample came from pixel data rather than the default.
    pub fn is_present(&self) -> bool {
        self.confidence > 0.0
    }
}

impl Default for ColorSample {
    fn default() -> Self {
        let rgb = Rgb::default();
        Self {
            primary_label: UNKNOWN_LABEL.to_string(),
            hex: rgb.to_hex(),
            rgb,
            confidence: 0.0,
        }
    }
}

/// The four tracked features, keyed `hair`, `skin`, `eyes`, `lips` when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorProfile {
    pub hair: ColorSample,
    pub skin: ColorSample,
    pub eyes: ColorSample,
    pub lips: ColorSample,
}
