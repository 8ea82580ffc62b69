//! Test fixtures and constants.

use pixel_dither::{Image, Pixel};

/// Uniform grey image
pub fn uniform(width: usize, height: usize, level: i32) -> Image {
    Image::from_pixels(width, height, vec![Pixel::grey(level); width * height])
        .expect("fixture dimensions match")
}

/// Horizontal gradient from black on the left to white on the right
pub fn gradient(width: usize, height: usize) -> Image {
    let denom = (width.max(2) - 1) as i32;
    let pixels = (0..height)
        .flat_map(|_| (0..width).map(move |x| Pixel::grey(x as i32 * 255 / denom)))
        .collect();
    Image::from_pixels(width, height, pixels).expect("fixture dimensions match")
}

/// The 2x2 diagonal image with a hand-traced dither result
pub fn diagonal() -> Image {
    Image::from_pixels(
        2,
        2,
        vec![
            Pixel::grey(200),
            Pixel::grey(50),
            Pixel::grey(50),
            Pixel::grey(200),
        ],
    )
    .expect("fixture dimensions match")
}

/// Expected dither output for [`diagonal`]
pub fn diagonal_dithered() -> Vec<Pixel> {
    vec![
        Pixel::grey(255),
        Pixel::grey(0),
        Pixel::grey(0),
        Pixel::grey(255),
    ]
}

/// Build a load / dither / save script
pub fn dither_script(input: &str, output: &str) -> String {
    format!(
        "# dither {input} into {output}\n\
         load {input} source\n\
         dither source result\n\
         save {output} result\n"
    )
}
