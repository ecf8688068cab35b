uniffi::setup_scaffolding!();

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FaceToneError {
    #[error("failed to decode image: {message}")]
    DecodeError { message: String },
    #[error("unsupported image format")]
    UnsupportedFormat,
    #[error("image dimensions are zero")]
    ZeroDimensions,
    #[error("sampling stride must be > 0")]
    InvalidStride,
    #[error("region is empty or outside the image")]
    RegionOutOfBounds,
    #[error("invalid hex color: {value}")]
    InvalidHex { value: String },
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl From<facetone::FaceToneError> for FaceToneError {
    fn from(e: facetone::FaceToneError) -> Self {
        match e {
            facetone::FaceToneError::DecodeError(msg) => FaceToneError::DecodeError { message: msg },
            facetone::FaceToneError::UnsupportedFormat => FaceToneError::UnsupportedFormat,
            facetone::FaceToneError::ZeroDimensions => FaceToneError::ZeroDimensions,
            facetone::FaceToneError::InvalidStride => FaceToneError::InvalidStride,
            facetone::FaceToneError::RegionOutOfBounds { .. } => FaceToneError::RegionOutOfBounds,
            facetone::FaceToneError::InvalidHex(value) => FaceToneError::InvalidHex { value },
            facetone::FaceToneError::InvalidConfig(msg) => {
                FaceToneError::InvalidConfig { message: msg }
            }
        }
    }
}

#[derive(Debug, uniffi::Enum)]
pub enum FaceShape {
    Oval,
    Round,
    Square,
    Oblong,
    Unknown,
}

impl From<facetone::FaceShape> for FaceShape {
    fn from(shape: facetone::FaceShape) -> Self {
        match shape {
            facetone::FaceShape::Oval => FaceShape::Oval,
            facetone::FaceShape::Round => FaceShape::Round,
            facetone::FaceShape::Square => FaceShape::Square,
            facetone::FaceShape::Oblong => FaceShape::Oblong,
            facetone::FaceShape::Unknown => FaceShape::Unknown,
        }
    }
}

#[derive(Debug, uniffi::Enum)]
pub enum ColorDomain {
    Hair,
    Skin,
    Eyes,
    Lips,
}

impl From<ColorDomain> for facetone::ColorDomain {
    fn from(domain: ColorDomain) -> Self {
        match domain {
            ColorDomain::Hair => facetone::ColorDomain::Hair,
            ColorDomain::Skin => facetone::ColorDomain::Skin,
            ColorDomain::Eyes => facetone::ColorDomain::Eyes,
            ColorDomain::Lips => facetone::ColorDomain::Lips,
        }
    }
}

#[derive(Debug, uniffi::Record)]
pub struct ColorSample {
    pub primary_label: String,
    pub hex: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub confidence: f64,
}

#[derive(Debug, uniffi::Record)]
pub struct ColorProfile {
    pub hair: ColorSample,
    pub skin: ColorSample,
    pub eyes: ColorSample,
    pub lips: ColorSample,
}

#[derive(Debug, uniffi::Record)]
pub struct FaceRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, uniffi::Record)]
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

#[derive(Debug, uniffi::Record)]
pub struct FacialFeatures {
    pub face_shape: FaceShape,
    pub eye_shape: String,
    pub eye_distance: String,
    pub eyebrow_shape: String,
    pub nose_shape: String,
    pub lip_shape: String,
}

#[derive(Debug, uniffi::Record)]
pub struct FileMetadata {
    pub original_file_name: Option<String>,
    pub file_size: u64,
    pub format: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, uniffi::Record)]
pub struct AnalysisMetadata {
    pub processing_time_ms: u64,
    pub confidence: f64,
    pub algorithm_id: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, uniffi::Record)]
pub struct AnalysisResult {
    pub file_metadata: Option<FileMetadata>,
    pub face_detected: bool,
    pub face_count: u32,
    pub face_region: Option<FaceRegion>,
    pub colors: ColorProfile,
    pub face_dimensions: Option<FaceDimensions>,
    pub facial_features: FacialFeatures,
    pub analysis_metadata: AnalysisMetadata,
}

fn convert_sample(sample: facetone::ColorSample) -> ColorSample {
    ColorSample {
        primary_label: sample.primary_label,
        hex: sample.hex,
        r: sample.rgb.r,
        g: sample.rgb.g,
        b: sample.rgb.b,
        confidence: sample.confidence,
    }
}

fn convert_result(result: facetone::AnalysisResult) -> AnalysisResult {
    let colors = result.colors;
    let features = result.facial_features;
    let meta = result.analysis_metadata;

    AnalysisResult {
        file_metadata: result.file_metadata.map(|m| FileMetadata {
            original_file_name: m.original_file_name,
            file_size: m.file_size,
            format: m.format,
            width: m.dimensions.width,
            height: m.dimensions.height,
        }),
        face_detected: result.face_detected,
        face_count: result.face_count,
        face_region: result.face_region.map(|r| FaceRegion {
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
        }),
        colors: ColorProfile {
            hair: convert_sample(colors.hair),
            skin: convert_sample(colors.skin),
            eyes: convert_sample(colors.eyes),
            lips: convert_sample(colors.lips),
        },
        face_dimensions: result.face_dimensions.map(|d| FaceDimensions {
            face_length: d.face_length,
            face_width: d.face_width,
            jaw_width: d.jaw_width,
            forehead_width: d.forehead_width,
            cheekbone_width: d.cheekbone_width,
            length_to_width_ratio: d.length_to_width_ratio,
            jaw_to_forehead_ratio: d.jaw_to_forehead_ratio,
            cheekbone_to_jaw_ratio: d.cheekbone_to_jaw_ratio,
        }),
        facial_features: FacialFeatures {
            face_shape: features.face_shape.into(),
            eye_shape: features.eye_shape,
            eye_distance: features.eye_distance,
            eyebrow_shape: features.eyebrow_shape,
            nose_shape: features.nose_shape,
            lip_shape: features.lip_shape,
        },
        analysis_metadata: AnalysisMetadata {
            processing_time_ms: meta.processing_time_ms,
            confidence: meta.confidence,
            algorithm_id: meta.algorithm_id,
            errors: meta.errors,
            warnings: meta.warnings,
        },
    }
}

/// Analyze a portrait with default settings.
#[uniffi::export]
pub fn analyze(input: Vec<u8>, file_name: Option<String>) -> Result<AnalysisResult, FaceToneError> {
    let mut analyzer = facetone::FaceAnalyzer::new(input)?;
    if let Some(name) = file_name {
        analyzer = analyzer.file_name(name);
    }
    Ok(convert_result(analyzer.analyze()?))
}

/// Analyze a portrait with explicit sampling parameters.
#[uniffi::export]
pub fn analyze_with_config(
    input: Vec<u8>,
    file_name: Option<String>,
    face_stride: u32,
    sample_stride: u32,
    min_skin_samples: u32,
) -> Result<AnalysisResult, FaceToneError> {
    let mut analyzer = facetone::FaceAnalyzer::new(input)?
        .face_stride(face_stride)
        .sample_stride(sample_stride)
        .min_skin_samples(min_skin_samples as usize);
    if let Some(name) = file_name {
        analyzer = analyzer.file_name(name);
    }
    Ok(convert_result(analyzer.analyze()?))
}

/// Classify a `#rrggbb` color against one feature palette.
#[uniffi::export]
pub fn classify_color(hex: String, domain: ColorDomain) -> Result<String, FaceToneError> {
    let rgb = facetone::Rgb::from_hex(&hex)?;
    Ok(facetone::classify(rgb, domain.into()).to_string())
}

/// Whether a single RGB color passes the skin heuristic.
#[uniffi::export]
pub fn is_skin_color(r: u8, g: u8, b: u8) -> bool {
    facetone::is_skin_color(facetone::Rgb::new(r, g, b))
}
