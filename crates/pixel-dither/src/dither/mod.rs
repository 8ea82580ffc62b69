//! Floyd-Steinberg error diffusion dithering.
//!
//! Converts an image to pure black and white by thresholding each pixel's
//! [intensity](crate::Pixel::intensity) and pushing the quantization error
//! onto neighbours that have not been scanned yet.
//!
//! # Scan model
//!
//! Pixels are visited strictly in row-major order (top to bottom, left to
//! right). Error is written back into the *source* image, so at any point
//! the cells before the cursor are settled and the cells after it are
//! pending. Only pending cells are ever read again or mutated. Reordering or
//! parallelizing the scan changes the output.
//!
//! # Example
//!
//! ```
//! use pixel_dither::{dither, Image, Pixel};
//!
//! let mut source = Image::new(2, 2);
//! source.set_pixel(0, 0, Pixel::grey(200)).unwrap();
//!
//! let output = dither(&mut source);
//! assert_eq!(output.get_pixel(0, 0).unwrap(), Pixel::grey(255));
//! assert!(output.pixels().iter().all(|p| p.is_grey()));
//! ```

mod kernel;

use kernel::{Kernel, FLOYD_STEINBERG};

use crate::image::Image;
use crate::pixel::Pixel;

/// Intensities strictly above this map to white; 127 itself maps to black.
pub const THRESHOLD: i32 = 127;

/// Output level for pixels above [`THRESHOLD`].
const WHITE: i32 = 255;

/// Output level for pixels at or below [`THRESHOLD`].
const BLACK: i32 = 0;

/// Dither `source` to a two-level image using Floyd-Steinberg diffusion.
///
/// Returns a new image of the same dimensions in which every pixel is
/// either `(0, 0, 0)` or `(255, 255, 255)`. Chrominance is discarded: the
/// decision is made on intensity alone.
///
/// `source` is mutated: every pixel the kernel reaches from an earlier
/// pixel is rewritten as a grey pixel carrying its adjusted intensity, even
/// when the error is zero. Only the top-left pixel is never written.
/// Use [`dither_copy`] to keep the input intact.
///
/// Zero-sized images produce an empty image of the same dimensions.
pub fn dither(source: &mut Image) -> Image {
    diffuse_with_kernel(source, &FLOYD_STEINBERG)
}

/// Like [`dither`], but works on a private copy of `source`.
pub fn dither_copy(source: &Image) -> Image {
    let mut scratch = source.clone();
    dither(&mut scratch)
}

/// Two-level quantization of a single intensity.
#[inline]
pub fn quantize(intensity: i32) -> i32 {
    if intensity > THRESHOLD {
        WHITE
    } else {
        BLACK
    }
}

/// Error diffusion loop parameterized by kernel.
fn diffuse_with_kernel(source: &mut Image, kernel: &Kernel) -> Image {
    debug_assert_eq!(kernel.total_weight(), kernel.divisor);

    let width = source.width();
    let height = source.height();
    let _span = tracing::debug_span!("dither", width, height).entered();

    let mut output = Image::new(width, height);
    let mut white = 0usize;

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let old = source.pixels()[idx].intensity();
            let new = quantize(old);
            let error = old - new;

            output.pixels_mut()[idx] = Pixel::grey(new);
            if new == WHITE {
                white += 1;
            }

            for &(dx, dy, weight) in kernel.entries {
                // Bounds check before touching the grid
                let Some(nx) = x.checked_add_signed(dx) else {
                    continue;
                };
                let ny = y + dy;
                if nx >= width || ny >= height {
                    continue;
                }
                let target = &mut source.pixels_mut()[ny * width + nx];
                spread_error(target, error, weight, kernel.divisor);
            }
        }
    }

    tracing::debug!(white, black = width * height - white, "dither complete");
    output
}

/// Shift a neighbour's intensity by `error * weight / divisor`.
///
/// The fraction is computed in floating point and the sum truncated toward
/// zero before clamping; the pixel collapses to grey.
#[inline]
fn spread_error(target: &mut Pixel, error: i32, weight: i32, divisor: i32) {
    let share = (error * weight) as f64 / divisor as f64;
    let shifted = target.intensity() as f64 + share;
    target.set_intensity(shifted as i32);
}
