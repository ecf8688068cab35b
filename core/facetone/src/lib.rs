//! Portrait coloring analysis: hair, skin, eye and lip color plus a coarse face shape
//! from a single photo.
//!
//! # Example
//!
//! ```no_run
//! use facetone::FaceAnalyzer;
//!
//! let raw_bytes = std::fs::read("portrait.jpg").unwrap();
//! let result = FaceAnalyzer::new(raw_bytes)
//!     .unwrap()
//!     .file_name("portrait.jpg")
//!     .analyze()
//!     .unwrap();
//! println!("skin: {}", result.colors.skin.primary_label);
//! println!("{}", result.to_json_pretty().unwrap());
//! ```
//!
//! Already-decoded pixels can skip the decoder entirely via [`analyze_pixels`]
//! and any [`PixelSource`].

mod color;
mod config;
mod decode;
mod error;
/// Face locating strategies.
pub mod face_detector;
mod geometry;
mod image_access;
mod palette;
mod pipeline;
mod region;
mod result;
#[cfg(feature = "rustface")]
/// SeetaFace-based locator backend.
pub mod rustface_backend;
mod skin;

/// Color primitives and per-feature samples.
pub use color::{ColorProfile, ColorSample, Rgb, UNKNOWN_LABEL};
/// Sampling parameters.
pub use config::{AnalyzerConfig, DEFAULT_SAMPLE_STRIDE};
/// Error type returned by facetone operations.
pub use error::FaceToneError;
/// Locator trait and the default skin-tone strategy.
pub use face_detector::{FaceLocator, SkinToneLocator};
/// Face proportion estimates.
pub use geometry::{
    estimate_dimensions, estimate_features, FaceDimensions, FaceShape, FacialFeatures,
};
/// Pixel access over decoded images.
pub use image_access::{PixelSource, RgbBuffer};
/// Color category tables.
pub use palette::{classify, ColorDomain, ColorRange};
/// The analysis pipeline and its confidence score.
pub use pipeline::{analyze_pixels, confidence_score, ConfidenceSignals};
/// Pixel rectangles and feature sampling.
pub use region::{average_color, FaceRegion, FeatureRegions, Region};
/// Result types.
pub use result::{
    AnalysisMetadata, AnalysisResult, FileMetadata, ImageDimensions, NO_FACE_WARNING,
};
#[cfg(feature = "rustface")]
/// Locator that runs the bundled SeetaFace model.
pub use rustface_backend::RustfaceLocator;
/// Single-pixel skin heuristic.
pub use skin::is_skin_color;

/// Builder for analyzing one portrait.
///
/// Decodes the input image on construction, then runs the pipeline with
/// configurable strides and an optional custom face locator.
pub struct FaceAnalyzer {
    image: image::RgbImage,
    metadata: FileMetadata,
    config: AnalyzerConfig,
    /// User-provided locator. When `None`, a [`SkinToneLocator`] built from
    /// the configured stride and sample threshold is used.
    locator: Option<Box<dyn FaceLocator>>,
}

impl FaceAnalyzer {
    /// Decode raw image bytes (JPEG, PNG, WebP, GIF or BMP).
    pub fn new(input: Vec<u8>) -> Result<Self, FaceToneError> {
        let (image, metadata) = decode::decode_image(&input)?;
        Ok(Self {
            image,
            metadata,
            config: AnalyzerConfig::default(),
            locator: None,
        })
    }

    /// Record the name the file was uploaded under.
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.metadata.original_file_name = Some(name.into());
        self
    }

    /// Replace the decoder-computed file metadata with caller-supplied values.
    pub fn metadata(mut self, metadata: FileMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Apply a full configuration. Individual settings can be overridden after this call.
    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Grid spacing for the face scan (default: 10).
    pub fn face_stride(mut self, stride: u32) -> Self {
        self.config.face_stride = stride;
        self
    }

    /// Grid spacing for color averaging (default: 5).
    pub fn sample_stride(mut self, stride: u32) -> Self {
        self.config.sample_stride = stride;
        self
    }

    /// Skin-like samples required before a face is accepted (default: 50).
    pub fn min_skin_samples(mut self, samples: usize) -> Self {
        self.config.min_skin_samples = samples;
        self
    }

    /// Provide a custom face locator.
    ///
    /// When set, it replaces the skin-tone heuristic, and `face_stride` /
    /// `min_skin_samples` no longer apply.
    ///
    /// ```no_run
    /// use facetone::{FaceAnalyzer, FaceLocator, FaceRegion, FaceToneError, PixelSource};
    ///
    /// struct CenterLocator;
    /// impl FaceLocator for CenterLocator {
    ///     fn locate(&self, image: &dyn PixelSource) -> Result<Option<FaceRegion>, FaceToneError> {
    ///         let (w, h) = (image.width(), image.height());
    ///         Ok(Some(FaceRegion::new(w / 4, h / 4, w / 2, h / 2)))
    ///     }
    ///     fn id(&self) -> &str {
    ///         "center"
    ///     }
    /// }
    ///
    /// let bytes = std::fs::read("portrait.jpg").unwrap();
    /// let result = FaceAnalyzer::new(bytes).unwrap()
    ///     .face_locator(Box::new(CenterLocator))
    ///     .analyze().unwrap();
    /// ```
    pub fn face_locator(mut self, locator: Box<dyn FaceLocator>) -> Self {
        self.locator = Some(locator);
        self
    }

    /// Dimensions of the decoded image.
    pub fn dimensions(&self) -> ImageDimensions {
        ImageDimensions {
            width: self.image.width(),
            height: self.image.height(),
        }
    }

    /// Run the analysis with the configured settings.
    ///
    /// Only an invalid configuration is an error; everything that goes wrong
    /// inside the pipeline is reported in the result's metadata.
    pub fn analyze(self) -> Result<AnalysisResult, FaceToneError> {
        self.config.validate()?;

        let default_locator;
        let locator: &dyn FaceLocator = match self.locator.as_deref() {
            Some(locator) => locator,
            None => {
                default_locator =
                    SkinToneLocator::new(self.config.face_stride, self.config.min_skin_samples);
                &default_locator
            }
        };

        Ok(analyze_pixels(
            &self.image,
            locator,
            &self.config,
            Some(self.metadata),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_png(width: u32, height: u32) -> Vec<u8> {
        use image::codecs::png::PngEncoder;
        use image::ImageEncoder;
        use image::RgbImage;

        let mut img = RgbImage::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = image::Rgb([
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                128,
            ]);
        }
        let mut buffer = Vec::new();
        let encoder = PngEncoder::new(&mut buffer);
        encoder
            .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
            .unwrap();
        buffer
    }

    fn make_solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
        use image::codecs::png::PngEncoder;
        use image::ImageEncoder;

        let img = image::RgbImage::from_pixel(width, height, image::Rgb(rgb));
        let mut buffer = Vec::new();
        PngEncoder::new(&mut buffer)
            .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
            .unwrap();
        buffer
    }

    #[test]
    fn builder_defaults() {
        let png = make_test_png(200, 300);
        let result = FaceAnalyzer::new(png.clone()).unwrap().analyze().unwrap();
        let meta = result.file_metadata.unwrap();
        assert_eq!(meta.file_size, png.len() as u64);
        assert_eq!(meta.format, "png");
        assert_eq!(meta.dimensions, ImageDimensions { width: 200, height: 300 });
        assert_eq!(result.analysis_metadata.algorithm_id, SkinToneLocator::ALGORITHM_ID);
        assert!(result.analysis_metadata.confidence <= 1.0);
    }

    #[test]
    fn builder_records_file_name() {
        let png = make_test_png(20, 20);
        let result = FaceAnalyzer::new(png)
            .unwrap()
            .file_name("selfie.png")
            .analyze()
            .unwrap();
        assert_eq!(
            result.file_metadata.unwrap().original_file_name.as_deref(),
            Some("selfie.png")
        );
    }

    #[test]
    fn builder_invalid_input() {
        assert!(FaceAnalyzer::new(b"not an image".to_vec()).is_err());
    }

    #[test]
    fn builder_zero_stride_is_rejected() {
        let png = make_test_png(20, 20);
        let result = FaceAnalyzer::new(png).unwrap().sample_stride(0).analyze();
        assert!(matches!(result, Err(FaceToneError::InvalidConfig(_))));
    }

    #[test]
    fn builder_min_samples_controls_detection() {
        // 100x100 solid skin at stride 10 → exactly 100 samples.
        let png = make_solid_png(100, 100, [200, 120, 90]);
        let found = FaceAnalyzer::new(png.clone())
            .unwrap()
            .min_skin_samples(100)
            .analyze()
            .unwrap();
        assert!(found.face_detected);

        let missed = FaceAnalyzer::new(png)
            .unwrap()
            .min_skin_samples(101)
            .analyze()
            .unwrap();
        assert!(!missed.face_detected);
    }

    #[test]
    fn builder_metadata_override() {
        let png = make_test_png(20, 20);
        let supplied = FileMetadata {
            original_file_name: Some("upload.heic".to_string()),
            file_size: 99,
            format: "heic".to_string(),
            dimensions: ImageDimensions { width: 20, height: 20 },
        };
        let result = FaceAnalyzer::new(png)
            .unwrap()
            .metadata(supplied.clone())
            .analyze()
            .unwrap();
        assert_eq!(result.file_metadata, Some(supplied));
    }

    #[test]
    fn builder_reports_dimensions() {
        let analyzer = FaceAnalyzer::new(make_test_png(31, 17)).unwrap();
        assert_eq!(analyzer.dimensions(), ImageDimensions { width: 31, height: 17 });
    }
}
