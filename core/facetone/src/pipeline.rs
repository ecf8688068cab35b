use log::{debug, warn};

use crate::color::{ColorProfile, ColorSample};
use crate::config::AnalyzerConfig;
use crate::error::FaceToneError;
use crate::face_detector::FaceLocator;
use crate::geometry::{estimate_dimensions, estimate_features, FaceDimensions, FacialFeatures};
use crate::image_access::PixelSource;
use crate::palette::{classify, ColorDomain};
use crate::region::{average_color, FaceRegion, FeatureRegions, Region};
use crate::result::{AnalysisMetadata, AnalysisResult, FileMetadata, NO_FACE_WARNING};

const FACE_DETECTED_WEIGHT: f64 = 0.3;
const SKIN_SAMPLE_WEIGHT: f64 = 0.2;
const HAIR_SAMPLE_WEIGHT: f64 = 0.2;
const FACE_LENGTH_WEIGHT: f64 = 0.2;
const FACE_SHAPE_WEIGHT: f64 = 0.1;

/// Which optional signals an analysis managed to compute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfidenceSignals {
    pub face_detected: bool,
    pub skin_sample: bool,
    pub hair_sample: bool,
    pub face_length: bool,
    pub face_shape: bool,
}

impl ConfidenceSignals {
    fn from_parts(
        face_detected: bool,
        colors: &ColorProfile,
        dimensions: Option<&FaceDimensions>,
        features: &FacialFeatures,
    ) -> Self {
        Self {
            face_detected,
            skin_sample: colors.skin.is_present(),
            hair_sample: colors.hair.is_present(),
            face_length: dimensions.is_some_and(|d| d.face_length > 0.0),
            face_shape: features.face_shape.is_known(),
        }
    }
}

/// Wall-clock timer for `processing_time_ms`. `std::time::Instant` panics on
/// `wasm32-unknown-unknown`, so there the host fills the value in instead.
#[cfg(not(target_arch = "wasm32"))]
struct Stopwatch(std::time::Instant);

#[cfg(not(target_arch = "wasm32"))]
impl Stopwatch {
    fn start() -> Self {
        Self(std::time::Instant::now())
    }

    fn elapsed_ms(&self) -> u64 {
        self.0.elapsed().as_millis() as u64
    }
}

#[cfg(target_arch = "wasm32")]
struct Stopwatch;

#[cfg(target_arch = "wasm32")]
impl Stopwatch {
    fn start() -> Self {
        Self
    }

    fn elapsed_ms(&self) -> u64 {
        0
    }
}

/// Additive confidence, capped at 1.0.
pub fn confidence_score(signals: ConfidenceSignals) -> f64 {
    let weighted = [
        (signals.face_detected, FACE_DETECTED_WEIGHT),
        (signals.skin_sample, SKIN_SAMPLE_WEIGHT),
        (signals.hair_sample, HAIR_SAMPLE_WEIGHT),
        (signals.face_length, FACE_LENGTH_WEIGHT),
        (signals.face_shape, FACE_SHAPE_WEIGHT),
    ];
    let sum: f64 = weighted
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, weight)| weight)
        .sum();
    sum.min(1.0)
}

/// Average and label one feature region. Failures are recorded, not raised.
fn sample_feature(
    image: &dyn PixelSource,
    region: &Region,
    domain: ColorDomain,
    stride: u32,
    errors: &mut Vec<String>,
) -> ColorSample {
    match average_color(image, region, stride) {
        Ok(rgb) => {
            let label = classify(rgb, domain);
            debug!("{domain} region {region:?} averaged to {rgb} ({label})");
            ColorSample::measured(rgb, label)
        }
        Err(e) => {
            warn!("{domain} sampling failed: {e}");
            errors.push(format!("{domain} sampling failed: {e}"));
            ColorSample::default()
        }
    }
}

/// Sample all four features around a located face.
fn sample_colors(
    image: &dyn PixelSource,
    face: &FaceRegion,
    stride: u32,
    errors: &mut Vec<String>,
) -> ColorProfile {
    let regions = FeatureRegions::for_face(face, image.width(), image.height());
    ColorProfile {
        hair: sample_feature(image, &regions.hair, ColorDomain::Hair, stride, errors),
        skin: sample_feature(image, &regions.skin, ColorDomain::Skin, stride, errors),
        eyes: sample_feature(image, &regions.eyes, ColorDomain::Eyes, stride, errors),
        lips: sample_feature(image, &regions.lips, ColorDomain::Lips, stride, errors),
    }
}

/// Run the locator, treating an error as "no face" and recording it.
fn locate_face(
    image: &dyn PixelSource,
    locator: &dyn FaceLocator,
    errors: &mut Vec<String>,
) -> Option<FaceRegion> {
    match locator.locate(image) {
        Ok(Some(face)) if face.fits_within(image.width(), image.height()) => Some(face),
        Ok(Some(face)) => {
            let e = FaceToneError::RegionOutOfBounds {
                x: face.x,
                y: face.y,
                width: face.width,
                height: face.height,
                image_width: image.width(),
                image_height: image.height(),
            };
            warn!("face locator returned an invalid region: {e}");
            errors.push(format!("face location failed: {e}"));
            None
        }
        Ok(None) => None,
        Err(e) => {
            warn!("face location failed: {e}");
            errors.push(format!("face location failed: {e}"));
            None
        }
    }
}

/// Full analysis pipeline: locate → sample → classify → measure → score.
///
/// Never fails. Stage errors land in `analysis_metadata.errors` and leave the
/// affected fields at their defaults.
pub fn analyze_pixels(
    image: &dyn PixelSource,
    locator: &dyn FaceLocator,
    config: &AnalyzerConfig,
    file_metadata: Option<FileMetadata>,
) -> AnalysisResult {
    let timer = Stopwatch::start();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let face = locate_face(image, locator, &mut errors);

    let (colors, face_dimensions, facial_features) = match face {
        Some(face) => {
            debug!("face located at {face:?}");
            let colors = sample_colors(image, &face, config.sample_stride, &mut errors);
            let dimensions = estimate_dimensions(&face);
            let features = estimate_features(&dimensions);
            (colors, Some(dimensions), features)
        }
        None => {
            warn!("{NO_FACE_WARNING}");
            warnings.push(NO_FACE_WARNING.to_string());
            (ColorProfile::default(), None, FacialFeatures::default())
        }
    };

    let face_detected = face.is_some();
    let confidence = confidence_score(ConfidenceSignals::from_parts(
        face_detected,
        &colors,
        face_dimensions.as_ref(),
        &facial_features,
    ));

    AnalysisResult {
        file_metadata,
        face_detected,
        face_count: u32::from(face_detected),
        face_region: face,
        colors,
        face_dimensions,
        facial_features,
        analysis_metadata: AnalysisMetadata {
            processing_time_ms: timer.elapsed_ms(),
            confidence,
            algorithm_id: locator.id().to_string(),
            errors,
            warnings,
        },
    }
}
