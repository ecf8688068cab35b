use log::trace;

use crate::error::FaceToneError;
use crate::image_access::PixelSource;
use crate::region::FaceRegion;
use crate::skin::is_skin_color;

/// Default grid spacing, in pixels, when scanning for skin.
pub const DEFAULT_FACE_STRIDE: u32 = 10;

/// Default number of skin-like grid samples needed to accept a face.
pub const DEFAULT_MIN_SKIN_SAMPLES: usize = 50;

/// Widening applied to the raw skin bounding box.
const WIDTH_INFLATION: f64 = 1.2;

/// Heightening applied to the raw skin bounding box (forehead and chin are
/// often shadowed or covered by hair).
const HEIGHT_INFLATION: f64 = 1.4;

/// Pluggable face locating strategy.
///
/// Implement this trait to swap the color heuristic for a real detector and
/// pass it to [`crate::FaceAnalyzer::face_locator`]. Returned regions must be
/// clipped to the image and at least 1×1.
pub trait FaceLocator: Send + Sync {
    /// Locate the face, or `Ok(None)` when there is none.
    fn locate(&self, image: &dyn PixelSource) -> Result<Option<FaceRegion>, FaceToneError>;

    /// Identifier reported as `algorithmId` in the analysis metadata.
    fn id(&self) -> &str;
}

/// Locates a face as the padded bounding box of skin-colored pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkinToneLocator {
    stride: u32,
    min_samples: usize,
}

impl SkinToneLocator {
    pub const ALGORITHM_ID: &'static str = "skin-tone-heuristic-v1";

    pub fn new(stride: u32, min_samples: usize) -> Self {
        Self {
            stride,
            min_samples,
        }
    }

    pub fn stride(&self) -> u32 {
        self.stride
    }

    pub fn min_samples(&self) -> usize {
        self.min_samples
    }
}

impl Default for SkinToneLocator {
    fn default() -> Self {
        Self::new(DEFAULT_FACE_STRIDE, DEFAULT_MIN_SKIN_SAMPLES)
    }
}

impl FaceLocator for SkinToneLocator {
    fn locate(&self, image: &dyn PixelSource) -> Result<Option<FaceRegion>, FaceToneError> {
        if self.stride == 0 {
            return Err(FaceToneError::InvalidStride);
        }
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(FaceToneError::ZeroDimensions);
        }

        let mut count = 0usize;
        let (mut min_x, mut min_y) = (u32::MAX, u32::MAX);
        let (mut max_x, mut max_y) = (0u32, 0u32);

        for y in (0..height).step_by(self.stride as usize) {
            for x in (0..width).step_by(self.stride as usize) {
                if is_skin_color(image.rgb_at(x, y)) {
                    count += 1;
                    min_x = min_x.min(x);
                    max_x = max_x.max(x);
                    min_y = min_y.min(y);
                    max_y = max_y.max(y);
                }
            }
        }

        trace!("skin scan found {count} samples (need {})", self.min_samples);
        if count < self.min_samples || count == 0 {
            return Ok(None);
        }

        Ok(Some(inflate_and_clip(
            (min_x, min_y, max_x, max_y),
            width,
            height,
        )))
    }

    fn id(&self) -> &str {
        Self::ALGORITHM_ID
    }
}

/// Grow the raw skin box around its center and clip it to the image.
fn inflate_and_clip(
    (min_x, min_y, max_x, max_y): (u32, u32, u32, u32),
    image_width: u32,
    image_height: u32,
) -> FaceRegion {
    let center_x = (min_x as f64 + max_x as f64) / 2.0;
    let center_y = (min_y as f64 + max_y as f64) / 2.0;
    let half_w = (max_x - min_x) as f64 * WIDTH_INFLATION / 2.0;
    let half_h = (max_y - min_y) as f64 * HEIGHT_INFLATION / 2.0;

    let (x0, x1) = clip_span(center_x - half_w, center_x + half_w, image_width);
    let (y0, y1) = clip_span(center_y - half_h, center_y + half_h, image_height);

    FaceRegion::new(x0, y0, x1 - x0, y1 - y0)
}

/// Round a span to pixels, clip it to `[0, limit]`, and keep it at least one pixel wide.
pub(crate) fn clip_span(start: f64, end: f64, limit: u32) -> (u32, u32) {
    let limit_f = limit as f64;
    let lo = start.round().clamp(0.0, limit_f) as u32;
    let hi = end.round().clamp(0.0, limit_f) as u32;

    if hi > lo {
        (lo, hi)
    } else if lo < limit {
        (lo, lo + 1)
    } else {
        (limit.saturating_sub(1), limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::image_access::RgbBuffer;

    const SKIN: Rgb = Rgb::new(200, 120, 90);
    const BACKDROP: Rgb = Rgb::new(30, 60, 120);

    #[test]
    fn solid_skin_image_fills_frame() {
        let img = RgbBuffer::from_fn(500, 500, |_, _| SKIN);
        let face = SkinToneLocator::default().locate(&img).unwrap().unwrap();
        // Samples span 0..=490; inflated box overhangs on every side and is clipped.
        assert_eq!(face, FaceRegion::new(0, 0, 500, 500));
    }

    #[test]
    fn no_skin_means_no_face() {
        let img = RgbBuffer::from_fn(200, 200, |_, _| BACKDROP);
        assert_eq!(SkinToneLocator::default().locate(&img).unwrap(), None);
    }

    #[test]
    fn too_few_samples_means_no_face() {
        // 100x100 patch at stride 10 → 10x10 = 100 samples; demand more.
        let img = RgbBuffer::from_fn(400, 400, |x, y| {
            if x < 100 && y < 100 {
                SKIN
            } else {
                BACKDROP
            }
        });
        let strict = SkinToneLocator::new(10, 101);
        assert_eq!(strict.locate(&img).unwrap(), None);
        let relaxed = SkinToneLocator::new(10, 100);
        assert!(relaxed.locate(&img).unwrap().is_some());
    }

    #[test]
    fn centered_patch_is_inflated_about_its_center() {
        // Skin over x in 100..=300, y in 100..=300 (inclusive samples at stride 10).
        let img = RgbBuffer::from_fn(600, 600, |x, y| {
            if (100..=300).contains(&x) && (100..=300).contains(&y) {
                SKIN
            } else {
                BACKDROP
            }
        });
        let face = SkinToneLocator::default().locate(&img).unwrap().unwrap();
        // Raw box 200x200 centered at (200, 200) → 240x280.
        assert_eq!(face, FaceRegion::new(80, 60, 240, 280));
    }

    #[test]
    fn location_is_deterministic() {
        let img = RgbBuffer::from_fn(300, 300, |x, y| {
            if (x / 7 + y / 11) % 3 == 0 {
                SKIN
            } else {
                BACKDROP
            }
        });
        let locator = SkinToneLocator::new(3, 10);
        assert_eq!(locator.locate(&img).unwrap(), locator.locate(&img).unwrap());
    }

    #[test]
    fn single_skin_point_still_yields_a_pixel() {
        let img = RgbBuffer::from_fn(20, 20, |x, y| {
            if x == 10 && y == 10 {
                SKIN
            } else {
                BACKDROP
            }
        });
        let face = SkinToneLocator::new(1, 1).locate(&img).unwrap().unwrap();
        assert_eq!(face, FaceRegion::new(10, 10, 1, 1));
    }

    #[test]
    fn zero_stride_is_an_error() {
        let img = RgbBuffer::from_fn(2, 2, |_, _| SKIN);
        let err = SkinToneLocator::new(0, 1).locate(&img).unwrap_err();
        assert!(matches!(err, FaceToneError::InvalidStride));
    }

    #[test]
    fn clip_span_keeps_one_pixel_at_far_edge() {
        assert_eq!(clip_span(50.0, 60.0, 20), (19, 20));
        assert_eq!(clip_span(-5.0, 5.0, 20), (0, 5));
        assert_eq!(clip_span(3.2, 3.4, 20), (3, 4));
    }
}
