use image::{Rgb as ImageRgb, RgbImage, RgbaImage};

use crate::color::Rgb;

/// Random-access RGB reads over a decoded image.
///
/// The pipeline only ever reads through this trait, so any decoded buffer can
/// be analyzed without copying it into an `image` type first.
pub trait PixelSource {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Color at `(x, y)`. Callers keep coordinates inside `width() × height()`.
    fn rgb_at(&self, x: u32, y: u32) -> Rgb;
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        RgbImage::width(self)
    }

    fn height(&self) -> u32 {
        RgbImage::height(self)
    }

    fn rgb_at(&self, x: u32, y: u32) -> Rgb {
        let ImageRgb([r, g, b]) = *self.get_pixel(x, y);
        Rgb::new(r, g, b)
    }
}

/// RGBA buffers are read as if composited over a white background.
impl PixelSource for RgbaImage {
    fn width(&self) -> u32 {
        RgbaImage::width(self)
    }

    fn height(&self) -> u32 {
        RgbaImage::height(self)
    }

    fn rgb_at(&self, x: u32, y: u32) -> Rgb {
        let [r, g, b, a] = self.get_pixel(x, y).0;
        let alpha = a as f32 / 255.0;
        let inv_alpha = 1.0 - alpha;
        let blend = |c: u8| (c as f32 * alpha + 255.0 * inv_alpha).round() as u8;
        Rgb::new(blend(r), blend(g), blend(b))
    }
}

/// A plain row-major RGB buffer, for callers that decode with something
/// other than the `image` crate.
pub struct RgbBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl RgbBuffer {
    /// Wrap `width × height × 3` bytes. Returns `None` when the length does not match.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(3)?;
        if data.len() != expected {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
        })
    }

    /// Build a buffer by evaluating `f` at every pixel.
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(u32, u32) -> Rgb,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for y in 0..height {
            for x in 0..width {
                let Rgb { r, g, b } = f(x, y);
                data.extend_from_slice(&[r, g, b]);
            }
        }
        Self {
            data,
            width,
            height,
        }
    }
}

impl PixelSource for RgbBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn rgb_at(&self, x: u32, y: u32) -> Rgb {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Rgb::new(self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }
}
