use crate::error::FaceToneError;
use crate::face_detector::{clip_span, FaceLocator};
use crate::image_access::PixelSource;
use crate::region::FaceRegion;

/// Face locator backed by the `rustface` crate (SeetaFace engine).
///
/// Loads the SeetaFace model on construction. The model is embedded in the
/// binary via `include_bytes!`, so no external files are needed at runtime.
pub struct RustfaceLocator {
    model: rustface::Model,
}

impl RustfaceLocator {
    pub const ALGORITHM_ID: &'static str = "seetaface-frontal-v1";

    /// Create a locator with the bundled SeetaFace model.
    pub fn new() -> Result<Self, FaceToneError> {
        let model_data: &[u8] = include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../model/seeta_fd_frontal_v1.0.bin"
        ));
        let model = rustface::read_model(std::io::Cursor::new(model_data))
            .map_err(|e| FaceToneError::InvalidConfig(format!("SeetaFace model: {e}")))?;
        Ok(Self { model })
    }
}

/// Rec. 601 luma, the same weighting `image::imageops::grayscale` uses.
fn to_gray(image: &dyn PixelSource) -> Vec<u8> {
    let (width, height) = (image.width(), image.height());
    let mut gray = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let rgb = image.rgb_at(x, y);
            let luma = 0.299 * rgb.r as f32 + 0.587 * rgb.g as f32 + 0.114 * rgb.b as f32;
            gray.push(luma.round() as u8);
        }
    }
    gray
}

impl FaceLocator for RustfaceLocator {
    fn locate(&self, image: &dyn PixelSource) -> Result<Option<FaceRegion>, FaceToneError> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(FaceToneError::ZeroDimensions);
        }

        let gray = to_gray(image);
        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(20);
        detector.set_score_thresh(2.0);
        detector.set_pyramid_scale_factor(0.8);
        detector.set_slide_window_step(4, 4);

        let faces = detector.detect(&rustface::ImageData::new(&gray, width, height));

        // Highest-scoring face only; the result model holds a single face.
        let best = faces.iter().max_by(|a, b| {
            a.score()
                .partial_cmp(&b.score())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(best.map(|face| {
            let bbox = face.bbox();
            let left = bbox.x() as f64;
            let top = bbox.y() as f64;
            let (x0, x1) = clip_span(left, left + bbox.width() as f64, width);
            let (y0, y1) = clip_span(top, top + bbox.height() as f64, height);
            FaceRegion::new(x0, y0, x1 - x0, y1 - y0)
        }))
    }

    fn id(&self) -> &str {
        Self::ALGORITHM_ID
    }
}
