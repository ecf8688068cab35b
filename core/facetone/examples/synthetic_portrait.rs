//! Write a synthetic portrait PNG for trying the analyzer without real photos.
//!
//! Usage:
//!   cargo run --example synthetic_portrait -- out.png [skin hex]
//!
//! The image is 300x400: dark hair across the top, a skin-colored block in
//! the middle, and a blue backdrop.

use facetone::Rgb;
use image::{ImageFormat, RgbImage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "synthetic_portrait.png".to_string());
    let skin = match args.next() {
        Some(hex) => Rgb::from_hex(&hex)?,
        None => Rgb::new(225, 190, 150),
    };

    let img = RgbImage::from_fn(300, 400, |x, y| {
        if y < 120 {
            image::Rgb([30, 20, 10])
        } else if (90..210).contains(&x) && (130..330).contains(&y) {
            image::Rgb(skin.channels())
        } else {
            image::Rgb([40, 60, 110])
        }
    });
    img.save_with_format(&output, ImageFormat::Png)?;

    println!("wrote {output} (skin {skin})");
    Ok(())
}
