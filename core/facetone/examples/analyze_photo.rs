//! Analyze one or more portrait files and print the JSON result.
//!
//! Usage:
//!   RUST_LOG=facetone=debug cargo run --example analyze_photo -- photo.jpg [more.png ...]
//!
//! With `--features rustface` the SeetaFace locator is used instead of the
//! skin-tone heuristic.

use std::path::Path;

use facetone::FaceAnalyzer;

fn analyze_file(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let input = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let analyzer = FaceAnalyzer::new(input)?.file_name(file_name);
    #[cfg(feature = "rustface")]
    let analyzer = analyzer.face_locator(Box::new(facetone::RustfaceLocator::new()?));

    let result = analyzer.analyze()?;
    println!("{}", result.to_json_pretty()?);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: analyze_photo <image> [image ...]");
        std::process::exit(2);
    }

    let mut failed = false;
    for path in &paths {
        if let Err(e) = analyze_file(Path::new(path)) {
            eprintln!("{path}: {e}");
            failed = true;
        }
    }
    if failed {
        std::process::exit(1);
    }
}
