use facetone_wasm::{analyze, classify_color, is_skin_color};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn make_portrait_png() -> Vec<u8> {
    let img = RgbImage::from_fn(300, 400, |x, y| {
        if y < 120 {
            Rgb([30, 20, 10])
        } else if (90..210).contains(&x) && (130..330).contains(&y) {
            Rgb([225, 190, 150])
        } else {
            Rgb([40, 60, 110])
        }
    });

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), 300, 400, ExtendedColorType::Rgb8)
        .unwrap();
    buffer
}

fn get(obj: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(obj, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn analyze_returns_plain_object() {
    let result = analyze(make_portrait_png(), JsValue::UNDEFINED).unwrap();

    assert_eq!(get(&result, "faceDetected").as_bool(), Some(true));
    assert_eq!(get(&result, "faceCount").as_f64(), Some(1.0));

    let skin = get(&get(&result, "colors"), "skin");
    assert_eq!(get(&skin, "primaryLabel").as_string().as_deref(), Some("fair"));
    assert_eq!(get(&skin, "hex").as_string().as_deref(), Some("#e1be96"));
    assert_eq!(get(&skin, "confidence").as_f64(), Some(0.8));
}

#[wasm_bindgen_test]
fn analyze_accepts_options() {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"fileName".into(), &"me.png".into()).unwrap();
    js_sys::Reflect::set(&options, &"sampleStride".into(), &JsValue::from(2)).unwrap();

    let result = analyze(make_portrait_png(), options.into()).unwrap();
    let meta = get(&result, "fileMetadata");
    assert_eq!(
        get(&meta, "originalFileName").as_string().as_deref(),
        Some("me.png")
    );
}

#[wasm_bindgen_test]
fn missing_face_is_null_region() {
    let img = RgbImage::from_pixel(100, 100, Rgb([40, 60, 110]));
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(img.as_raw(), 100, 100, ExtendedColorType::Rgb8)
        .unwrap();

    let result = analyze(png, JsValue::NULL).unwrap();
    assert!(get(&result, "faceRegion").is_null());
    assert_eq!(get(&result, "faceDetected").as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn invalid_input_returns_error() {
    assert!(analyze(b"not an image".to_vec(), JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn classify_and_skin_helpers() {
    assert_eq!(classify_color("#1e140a", "hair").unwrap(), "black");
    assert!(classify_color("#1e140a", "nose").is_err());
    assert!(classify_color("1e140a", "hair").is_err());
    assert!(is_skin_color(200, 80, 60));
    assert!(!is_skin_color(0, 0, 0));
}
