//! pixel-dither: pixel grid model and two-level error diffusion dithering
//!
//! The crate has two layers:
//!
//! - [`Pixel`] and [`Image`]: an owned, fixed-size RGB grid. Channel writes
//!   clamp into `0..=255` and never fail; coordinate access outside the grid
//!   fails with [`ImageError::OutOfBounds`].
//! - [`dither()`]: Floyd-Steinberg error diffusion to pure black and white,
//!   driven by each pixel's [`intensity`](Pixel::intensity).
//!
//! # Quick Start
//!
//! ```
//! use pixel_dither::{dither, Image, Pixel};
//!
//! let mut source = Image::new(4, 4);
//! for y in 0..4 {
//!     for x in 0..4 {
//!         source.set_pixel(x, y, Pixel::grey((x * 60) as i32)).unwrap();
//!     }
//! }
//!
//! let output = dither(&mut source);
//! assert_eq!(output.width(), 4);
//! assert!(output
//!     .pixels()
//!     .iter()
//!     .all(|p| p.to_bytes() == [0, 0, 0] || p.to_bytes() == [255, 255, 255]));
//! ```
//!
//! # Source Mutation
//!
//! Quantization error is written back into the source image as the scan
//! proceeds, so [`dither()`] takes `&mut Image`. Pixels that receive error
//! are collapsed to grey. Call [`dither_copy()`] when the input must be
//! preserved.
//!
//! # Intensity
//!
//! Intensity is the truncated, unweighted mean of the three channels. It is
//! the only signal the quantizer sees, so coloured input loses its hue.
//!
//! # Kernel
//!
//! The diffusion weights are fixed to Floyd-Steinberg and not part of the
//! public API:
//!
//! ```compile_fail
//! use pixel_dither::dither::Kernel;
//! ```

pub mod dither;
pub mod image;
pub mod pixel;


pub use dither::{dither, dither_copy, quantize, THRESHOLD};
pub use image::{Image, ImageError};
pub use pixel::{clamp_channel, Pixel};
