use facetone_jni::*;

/// 200x300 portrait: dark hair over the top third, a fair skin block at
/// x 50..150, y 110..270, and a blue backdrop elsewhere.
fn make_portrait_png() -> Vec<u8> {
    use image::codecs::png::PngEncoder;
    use image::{ImageEncoder, RgbImage};

    let img = RgbImage::from_fn(200, 300, |x, y| {
        if y < 100 {
            image::Rgb([30, 20, 10])
        } else if (50..150).contains(&x) && (110..270).contains(&y) {
            image::Rgb([225, 190, 150])
        } else {
            image::Rgb([40, 60, 110])
        }
    });
    let mut buffer = Vec::new();
    let encoder = PngEncoder::new(&mut buffer);
    encoder
        .write_image(img.as_raw(), 200, 300, image::ExtendedColorType::Rgb8)
        .unwrap();
    buffer
}

#[test]
fn analyze_detects_face() {
    let png = make_portrait_png();
    let result = analyze(png, Some("me.png".to_string())).unwrap();
    assert!(result.face_detected);
    assert_eq!(result.face_count, 1);
    assert!(result.face_region.is_some());
    assert_eq!(result.colors.skin.primary_label, "fair");
    assert_eq!(result.colors.hair.primary_label, "black");

    let meta = result.file_metadata.unwrap();
    assert_eq!(meta.original_file_name.as_deref(), Some("me.png"));
    assert_eq!(meta.format, "png");
    assert_eq!((meta.width, meta.height), (200, 300));
}

#[test]
fn analyze_with_config_applies_strides() {
    let png = make_portrait_png();
    let result = analyze_with_config(png, None, 4, 2, 50).unwrap();
    assert!(result.face_detected);
    assert!(result.face_dimensions.is_some());
}

#[test]
fn zero_stride_is_rejected() {
    let png = make_portrait_png();
    let err = analyze_with_config(png, None, 0, 5, 50).unwrap_err();
    assert!(matches!(err, FaceToneError::InvalidConfig { .. }));
}

#[test]
fn invalid_input_returns_error() {
    let result = analyze(vec![0, 1, 2, 3], None);
    assert!(result.is_err());
}

#[test]
fn blank_image_has_no_face() {
    use image::codecs::png::PngEncoder;
    use image::{ImageEncoder, RgbImage};

    let img = RgbImage::from_pixel(120, 120, image::Rgb([40, 60, 110]));
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(img.as_raw(), 120, 120, image::ExtendedColorType::Rgb8)
        .unwrap();

    let result = analyze(png, None).unwrap();
    assert!(!result.face_detected);
    assert!(result.face_region.is_none());
    assert!(matches!(result.facial_features.face_shape, FaceShape::Unknown));
    assert!(!result.analysis_metadata.warnings.is_empty());
}

#[test]
fn helpers_match_core() {
    assert_eq!(classify_color("#e1be96".to_string(), ColorDomain::Skin).unwrap(), "fair");
    assert!(classify_color("nope".to_string(), ColorDomain::Hair).is_err());
    assert!(is_skin_color(200, 80, 60));
    assert!(!is_skin_color(40, 60, 110));
}
