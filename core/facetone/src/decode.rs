use image::{DynamicImage, ImageFormat, RgbImage};

use crate::error::FaceToneError;
use crate::image_access::PixelSource;
use crate::result::{FileMetadata, ImageDimensions};

/// Detect the input image format from the raw bytes.
pub(crate) fn detect_format(input: &[u8]) -> Result<ImageFormat, FaceToneError> {
    image::guess_format(input).map_err(|_| FaceToneError::UnsupportedFormat)
}

/// Short lowercase name for a container format.
pub(crate) fn format_name(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "jpeg".to_string(),
        ImageFormat::Png => "png".to_string(),
        ImageFormat::WebP => "webp".to_string(),
        ImageFormat::Gif => "gif".to_string(),
        ImageFormat::Bmp => "bmp".to_string(),
        other => other
            .extensions_str()
            .first()
            .map_or_else(|| "unknown".to_string(), |ext| ext.to_string()),
    }
}

/// Decode input bytes into an RGB buffer, compositing any alpha over white.
pub(crate) fn decode_image(input: &[u8]) -> Result<(RgbImage, FileMetadata), FaceToneError> {
    let format = detect_format(input)?;
    let decoded = image::load_from_memory_with_format(input, format)
        .map_err(|e| FaceToneError::DecodeError(e.to_string()))?;

    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(FaceToneError::ZeroDimensions);
    }

    let rgb = flatten_alpha(&decoded);
    let metadata = FileMetadata {
        original_file_name: None,
        file_size: input.len() as u64,
        format: format_name(format),
        dimensions: ImageDimensions {
            width: rgb.width(),
            height: rgb.height(),
        },
    };
    Ok((rgb, metadata))
}

/// Flatten alpha channel by compositing onto a white background.
pub(crate) fn flatten_alpha(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let rgb = rgba.rgb_at(x, y);
        image::Rgb(rgb.channels())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageEncoder, RgbaImage};

    fn make_test_rgb(width: u32, height: u32) -> RgbImage {
        let mut img = RgbImage::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = image::Rgb([
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                128,
            ]);
        }
        img
    }

    fn make_test_png(width: u32, height: u32) -> Vec<u8> {
        let img = make_test_rgb(width, height);
        let mut buffer = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buffer);
        encoder
            .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
            .unwrap();
        buffer
    }

    #[test]
    fn decode_png_reports_metadata() {
        let png = make_test_png(40, 30);
        let (rgb, meta) = decode_image(&png).unwrap();
        assert_eq!((rgb.width(), rgb.height()), (40, 30));
        assert_eq!(meta.format, "png");
        assert_eq!(meta.file_size, png.len() as u64);
        assert_eq!(meta.dimensions, ImageDimensions { width: 40, height: 30 });
        assert_eq!(meta.original_file_name, None);
    }

    #[test]
    fn decode_jpeg_reports_format() {
        let img = make_test_rgb(16, 16);
        let mut buffer = Vec::new();
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, 90)
            .write_image(img.as_raw(), 16, 16, image::ExtendedColorType::Rgb8)
            .unwrap();
        let (_, meta) = decode_image(&buffer).unwrap();
        assert_eq!(meta.format, "jpeg");
    }

    #[test]
    fn garbage_is_unsupported() {
        let err = decode_image(b"not an image").unwrap_err();
        assert!(matches!(err, FaceToneError::UnsupportedFormat));
    }

    #[test]
    fn truncated_png_fails_to_decode() {
        let png = make_test_png(40, 30);
        let err = decode_image(&png[..png.len() / 2]).unwrap_err();
        assert!(matches!(err, FaceToneError::DecodeError(_)));
    }

    #[test]
    fn flatten_alpha_composites_over_white() {
        let mut rgba = RgbaImage::new(1, 1);
        rgba.put_pixel(0, 0, image::Rgba([255, 0, 0, 0]));
        let rgb = flatten_alpha(&DynamicImage::ImageRgba8(rgba));
        assert_eq!(rgb.get_pixel(0, 0), &image::Rgb([255, 255, 255]));
    }

    #[test]
    fn flatten_alpha_blends_semitransparent() {
        let mut rgba = RgbaImage::new(1, 1);
        rgba.put_pixel(0, 0, image::Rgba([255, 0, 0, 128]));
        let rgb = flatten_alpha(&DynamicImage::ImageRgba8(rgba));
        let pixel = rgb.get_pixel(0, 0);
        assert!((pixel.0[0] as i16 - 255).abs() <= 1);
        assert!((pixel.0[1] as i16 - 127).abs() <= 2);
        assert!((pixel.0[2] as i16 - 127).abs() <= 2);
    }
}
