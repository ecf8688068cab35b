use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::FaceToneError;
use crate::image_access::PixelSource;

/// Fraction of the full image height scanned for hair, from the top edge.
const HAIR_HEIGHT_FRACTION: f64 = 0.3;

/// Cheek band within the face region: (x0, x1, y0, y1) as fractions.
const SKIN_BAND: (f64, f64, f64, f64) = (0.20, 0.80, 0.30, 0.70);

/// Eye band within the face region.
const EYE_BAND: (f64, f64, f64, f64) = (0.25, 0.75, 0.25, 0.45);

/// Lip band within the face region.
const LIP_BAND: (f64, f64, f64, f64) = (0.35, 0.65, 0.65, 0.80);

/// Axis-aligned pixel rectangle. Face regions are always clipped to the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// The heuristically located face rectangle.
pub type FaceRegion = Region;

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// True when the region is non-empty and lies inside a `width × height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.width > 0 && self.height > 0 && self.right() <= width && self.bottom() <= height
    }

    /// Sub-rectangle spanning the given fractions of this region.
    ///
    /// Edges are rounded to the nearest pixel and clamped to this region;
    /// each side keeps at least one pixel.
    fn fraction(&self, (x0, x1, y0, y1): (f64, f64, f64, f64)) -> Region {
        let (left, width) = band(self.width, x0, x1);
        let (top, height) = band(self.height, y0, y1);

        Region {
            x: self.x + left,
            y: self.y + top,
            width,
            height,
        }
    }
}

/// Offset and length of the `[from, to)` fraction of `extent` pixels,
/// kept inside `0..extent` and at least one pixel long.
fn band(extent: u32, from: f64, to: f64) -> (u32, u32) {
    let e = extent as f64;
    let start = ((e * from).round() as u32).min(extent.saturating_sub(1));
    let end = ((e * to).round() as u32).min(extent);
    (start, end.saturating_sub(start).max(1))
}

/// The sampling rectangles for each tracked feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureRegions {
    pub hair: Region,
    pub skin: Region,
    pub eyes: Region,
    pub lips: Region,
}

impl FeatureRegions {
    /// Derive feature rectangles from a located face inside a `width × height` image.
    ///
    /// Hair is measured over the top of the whole image rather than the face box,
    /// since hair usually sits above or around the detected skin.
    pub fn for_face(face: &FaceRegion, image_width: u32, image_height: u32) -> Self {
        let hair_height = ((image_height as f64 * HAIR_HEIGHT_FRACTION).round() as u32).max(1);
        Self {
            hair: Region::new(0, 0, image_width, hair_height),
            skin: face.fraction(SKIN_BAND),
            eyes: face.fraction(EYE_BAND),
            lips: face.fraction(LIP_BAND),
        }
    }
}

/// Per-channel mean of the pixels on a `stride` grid inside `region`, rounded half-up.
///
/// Sampling starts at the region origin, so a 1×1 region yields exactly its pixel.
pub fn average_color(
    image: &dyn PixelSource,
    region: &Region,
    stride: u32,
) -> Result<Rgb, FaceToneError> {
    if stride == 0 {
        return Err(FaceToneError::InvalidStride);
    }
    if !region.fits_within(image.width(), image.height()) {
        return Err(FaceToneError::RegionOutOfBounds {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            image_width: image.width(),
            image_height: image.height(),
        });
    }

    let mut sums = [0u64; 3];
    let mut count: u64 = 0;
    for y in (region.y..region.bottom()).step_by(stride as usize) {
        for x in (region.x..region.right()).step_by(stride as usize) {
            let rgb = image.rgb_at(x, y);
            for (sum, channel) in sums.iter_mut().zip(rgb.channels()) {
                *sum += channel as u64;
            }
            count += 1;
        }
    }

    let mean = |sum: u64| ((sum + count / 2) / count) as u8;
    Ok(Rgb::new(mean(sums[0]), mean(sums[1]), mean(sums[2])))
}
