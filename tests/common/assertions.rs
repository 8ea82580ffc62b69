//! Assertion helpers for tests.

use std::path::Path;

use pixel_dither::{Image, Pixel};
use pretty_assertions::assert_eq;

/// Assert the file exists and starts with the PNG signature
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert every pixel is pure black or pure white
pub fn assert_binary(image: &Image) {
    for (i, p) in image.pixels().iter().enumerate() {
        assert!(
            *p == Pixel::grey(0) || *p == Pixel::grey(255),
            "Pixel {} ({}, {}) is {:?}, expected black or white",
            i,
            i % image.width(),
            i / image.width(),
            p
        );
    }
}

/// Assert two images have the same dimensions
pub fn assert_same_size(actual: &Image, expected: &Image) {
    assert_eq!(
        (actual.width(), actual.height()),
        (expected.width(), expected.height()),
        "Image dimensions differ"
    );
}

/// Fraction of white pixels in a binary image
pub fn white_ratio(image: &Image) -> f64 {
    let white = image
        .pixels()
        .iter()
        .filter(|p| p.intensity() == 255)
        .count();
    white as f64 / image.pixels().len() as f64
}
