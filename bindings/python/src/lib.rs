use facetone_core::{
    classify, AnalysisResult, ColorDomain, ColorSample, FaceAnalyzer, FaceToneError, Rgb,
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

fn to_py_err(e: FaceToneError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn sample_to_dict<'py>(py: Python<'py>, sample: &ColorSample) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("primary_label", &sample.primary_label)?;
    dict.set_item("hex", &sample.hex)?;
    dict.set_item("rgb", (sample.rgb.r, sample.rgb.g, sample.rgb.b))?;
    dict.set_item("confidence", sample.confidence)?;
    Ok(dict)
}

fn result_to_dict<'py>(py: Python<'py>, result: &AnalysisResult) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("face_detected", result.face_detected)?;
    dict.set_item("face_count", result.face_count)?;

    let region = result
        .face_region
        .map(|r| (r.x, r.y, r.width, r.height));
    dict.set_item("face_region", region)?;

    let colors = PyDict::new(py);
    colors.set_item("hair", sample_to_dict(py, &result.colors.hair)?)?;
    colors.set_item("skin", sample_to_dict(py, &result.colors.skin)?)?;
    colors.set_item("eyes", sample_to_dict(py, &result.colors.eyes)?)?;
    colors.set_item("lips", sample_to_dict(py, &result.colors.lips)?)?;
    dict.set_item("colors", colors)?;

    match &result.face_dimensions {
        Some(dims) => {
            let d = PyDict::new(py);
            d.set_item("face_length", dims.face_length)?;
            d.set_item("face_width", dims.face_width)?;
            d.set_item("jaw_width", dims.jaw_width)?;
            d.set_item("forehead_width", dims.forehead_width)?;
            d.set_item("cheekbone_width", dims.cheekbone_width)?;
            d.set_item("length_to_width_ratio", dims.length_to_width_ratio)?;
            d.set_item("jaw_to_forehead_ratio", dims.jaw_to_forehead_ratio)?;
            d.set_item("cheekbone_to_jaw_ratio", dims.cheekbone_to_jaw_ratio)?;
            dict.set_item("face_dimensions", d)?;
        }
        None => dict.set_item("face_dimensions", py.None())?,
    }

    let features = &result.facial_features;
    let f = PyDict::new(py);
    f.set_item("face_shape", features.face_shape.as_str())?;
    f.set_item("eye_shape", &features.eye_shape)?;
    f.set_item("eye_distance", &features.eye_distance)?;
    f.set_item("eyebrow_shape", &features.eyebrow_shape)?;
    f.set_item("nose_shape", &features.nose_shape)?;
    f.set_item("lip_shape", &features.lip_shape)?;
    dict.set_item("facial_features", f)?;

    if let Some(meta) = &result.file_metadata {
        let m = PyDict::new(py);
        m.set_item("original_file_name", &meta.original_file_name)?;
        m.set_item("file_size", meta.file_size)?;
        m.set_item("format", &meta.format)?;
        m.set_item("dimensions", (meta.dimensions.width, meta.dimensions.height))?;
        dict.set_item("file_metadata", m)?;
    } else {
        dict.set_item("file_metadata", py.None())?;
    }

    let meta = &result.analysis_metadata;
    let m = PyDict::new(py);
    m.set_item("processing_time_ms", meta.processing_time_ms)?;
    m.set_item("confidence", meta.confidence)?;
    m.set_item("algorithm_id", &meta.algorithm_id)?;
    m.set_item("errors", PyList::new(py, &meta.errors)?)?;
    m.set_item("warnings", PyList::new(py, &meta.warnings)?)?;
    dict.set_item("analysis_metadata", m)?;

    Ok(dict)
}

/// Decode `input` and apply the keyword options shared by `analyze` and `analyze_json`.
fn build_analyzer(
    input: Vec<u8>,
    file_name: Option<String>,
    face_stride: Option<u32>,
    sample_stride: Option<u32>,
    min_skin_samples: Option<usize>,
) -> PyResult<FaceAnalyzer> {
    let mut analyzer = FaceAnalyzer::new(input).map_err(to_py_err)?;

    if let Some(name) = file_name {
        analyzer = analyzer.file_name(name);
    }
    if let Some(stride) = face_stride {
        analyzer = analyzer.face_stride(stride);
    }
    if let Some(stride) = sample_stride {
        analyzer = analyzer.sample_stride(stride);
    }
    if let Some(samples) = min_skin_samples {
        analyzer = analyzer.min_skin_samples(samples);
    }
    Ok(analyzer)
}

/// Analyze a portrait photo.
///
/// Args:
///     input: Raw image bytes (JPEG, PNG, WebP, GIF or BMP)
///     file_name: Name the file was uploaded under (optional)
///     face_stride: Grid spacing for the face scan (default: 10)
///     sample_stride: Grid spacing for color averaging (default: 5)
///     min_skin_samples: Skin samples needed to accept a face (default: 50)
///
/// Returns:
///     dict with keys: face_detected, face_count, face_region, colors,
///     face_dimensions, facial_features, file_metadata, analysis_metadata
#[pyfunction]
#[pyo3(signature = (input, *, file_name=None, face_stride=None, sample_stride=None, min_skin_samples=None))]
fn analyze(
    py: Python<'_>,
    input: Vec<u8>,
    file_name: Option<String>,
    face_stride: Option<u32>,
    sample_stride: Option<u32>,
    min_skin_samples: Option<usize>,
) -> PyResult<Py<PyDict>> {
    let analyzer = build_analyzer(input, file_name, face_stride, sample_stride, min_skin_samples)?;
    let result = py.allow_threads(|| analyzer.analyze()).map_err(to_py_err)?;
    Ok(result_to_dict(py, &result)?.unbind())
}

/// Analyze a portrait photo and return the result as a JSON string.
///
/// Takes the same arguments as `analyze`. Keys are camelCase, matching the
/// JavaScript binding.
#[pyfunction]
#[pyo3(signature = (input, *, file_name=None, face_stride=None, sample_stride=None, min_skin_samples=None))]
fn analyze_json(
    py: Python<'_>,
    input: Vec<u8>,
    file_name: Option<String>,
    face_stride: Option<u32>,
    sample_stride: Option<u32>,
    min_skin_samples: Option<usize>,
) -> PyResult<String> {
    let analyzer = build_analyzer(input, file_name, face_stride, sample_stride, min_skin_samples)?;
    let result = py.allow_threads(|| analyzer.analyze()).map_err(to_py_err)?;
    result
        .to_json()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Classify a `#rrggbb` color against one feature palette.
///
/// Args:
///     hex: Color such as "#c8503c"
///     domain: "hair", "skin", "eyes", or "lips"
#[pyfunction]
fn classify_color(hex: &str, domain: &str) -> PyResult<&'static str> {
    let rgb = Rgb::from_hex(hex).map_err(to_py_err)?;
    let domain: ColorDomain = domain.parse().map_err(PyValueError::new_err)?;
    Ok(classify(rgb, domain))
}

#[pymodule]
fn facetone(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(analyze, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_json, m)?)?;
    m.add_function(wrap_pyfunction!(classify_color, m)?)?;
    Ok(())
}
