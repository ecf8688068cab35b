use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Options for portrait analysis, passed as a JavaScript object.
///
/// All fields are optional; unset fields keep the library defaults.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeOptions {
    pub file_name: Option<String>,
    pub face_stride: Option<u32>,
    pub sample_stride: Option<u32>,
    pub min_skin_samples: Option<usize>,
}

/// Create a JS `Error` with a `code` property.
fn make_error(code: &str, message: &str) -> JsValue {
    let err = js_sys::Error::new(message);
    let _ = js_sys::Reflect::set(&err, &"code".into(), &JsValue::from_str(code));
    JsValue::from(err)
}

/// Convert a `FaceToneError` into a JS `Error` with a machine-readable `code` property.
fn to_js_error(e: facetone::FaceToneError) -> JsValue {
    let code = match &e {
        facetone::FaceToneError::DecodeError(_) => "DECODE_ERROR",
        facetone::FaceToneError::UnsupportedFormat => "UNSUPPORTED_FORMAT",
        facetone::FaceToneError::ZeroDimensions => "ZERO_DIMENSIONS",
        facetone::FaceToneError::InvalidStride => "INVALID_STRIDE",
        facetone::FaceToneError::RegionOutOfBounds { .. } => "REGION_OUT_OF_BOUNDS",
        facetone::FaceToneError::InvalidHex(_) => "INVALID_HEX",
        facetone::FaceToneError::InvalidConfig(_) => "INVALID_OPTIONS",
    };
    make_error(code, &e.to_string())
}

fn parse_options(options: JsValue) -> Result<AnalyzeOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        Ok(AnalyzeOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| make_error("INVALID_OPTIONS", &format!("invalid options: {e}")))
    }
}

/// Apply parsed `AnalyzeOptions` to a `FaceAnalyzer`.
fn apply_options(
    mut analyzer: facetone::FaceAnalyzer,
    opts: AnalyzeOptions,
) -> facetone::FaceAnalyzer {
    if let Some(name) = opts.file_name {
        analyzer = analyzer.file_name(name);
    }
    if let Some(stride) = opts.face_stride {
        analyzer = analyzer.face_stride(stride);
    }
    if let Some(stride) = opts.sample_stride {
        analyzer = analyzer.sample_stride(stride);
    }
    if let Some(samples) = opts.min_skin_samples {
        analyzer = analyzer.min_skin_samples(samples);
    }
    analyzer
}

/// Analyze a portrait photo.
///
/// @param input - Raw image bytes (JPEG, PNG, WebP, GIF or BMP)
/// @param options - Optional object with fields: fileName, faceStride,
///   sampleStride, minSkinSamples
/// @returns A plain object mirroring `AnalysisResult` with camelCase keys
#[wasm_bindgen]
pub fn analyze(input: Vec<u8>, options: JsValue) -> Result<JsValue, JsValue> {
    let started = js_sys::Date::now();
    let opts = parse_options(options)?;

    let analyzer = facetone::FaceAnalyzer::new(input).map_err(to_js_error)?;
    let mut result = apply_options(analyzer, opts)
        .analyze()
        .map_err(to_js_error)?;
    result.analysis_metadata.processing_time_ms = (js_sys::Date::now() - started).max(0.0) as u64;

    result
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| make_error("SERIALIZE_ERROR", &e.to_string()))
}

/// Classify a `#rrggbb` color against one feature palette.
///
/// @param hex - Color such as `"#c8503c"`
/// @param domain - One of `"hair"`, `"skin"`, `"eyes"`, `"lips"`
#[wasm_bindgen(js_name = "classifyColor")]
pub fn classify_color(hex: &str, domain: &str) -> Result<String, JsValue> {
    let rgb = facetone::Rgb::from_hex(hex).map_err(to_js_error)?;
    let domain: facetone::ColorDomain = domain
        .parse()
        .map_err(|e: String| make_error("INVALID_OPTIONS", &e))?;
    Ok(facetone::classify(rgb, domain).to_string())
}

/// Whether a single RGB color passes the skin heuristic.
#[wasm_bindgen(js_name = "isSkinColor")]
pub fn is_skin_color(r: u8, g: u8, b: u8) -> bool {
    facetone::is_skin_color(facetone::Rgb::new(r, g, b))
}
