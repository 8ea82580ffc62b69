//! Fixed-size pixel grid with bounds-checked access.

use thiserror::Error;

use crate::pixel::Pixel;

/// Errors raised by [`Image`] accessors and constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// Coordinate outside `[0, width) x [0, height)`.
    #[error("pixel ({x}, {y}) is out of bounds for a {width}x{height} image")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Pixel buffer length does not match `width * height`.
    #[error("pixel buffer holds {actual} values, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// `width * height` does not fit in `usize`.
    #[error("image dimensions {width}x{height} are too large")]
    TooLarge { width: usize, height: usize },
}

/// A `width x height` grid of [`Pixel`]s stored in row-major order.
///
/// Dimensions are fixed at construction. Either dimension may be zero, in
/// which case the image holds no pixels and every coordinate access fails.
///
/// # Example
///
/// ```
/// use pixel_dither::{Image, Pixel};
///
/// let mut image = Image::new(3, 2);
/// image.set_pixel(2, 1, Pixel::grey(200)).unwrap();
/// image.pixel_mut(0, 0).unwrap().set_red(90);
///
/// assert_eq!(image.get_pixel(2, 1).unwrap().intensity(), 200);
/// assert_eq!(image.get_pixel(0, 0).unwrap().red(), 90);
/// assert!(image.get_pixel(3, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Allocate a black image.
    ///
    /// # Panics
    ///
    /// Panics with a capacity overflow when `width * height` pixels cannot
    /// be allocated, like any oversized `Vec`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Pixel::default(); width.saturating_mul(height)],
        }
    }

    /// Wrap an existing row-major pixel buffer.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self, ImageError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(ImageError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build an image from packed `[R, G, B, R, G, B, ...]` bytes.
    pub fn from_rgb_bytes(width: usize, height: usize, rgb: &[u8]) -> Result<Self, ImageError> {
        let expected = pixel_count(width, height)?
            .checked_mul(3)
            .ok_or(ImageError::TooLarge { width, height })?;
        if rgb.len() != expected {
            return Err(ImageError::BufferSize {
                expected,
                actual: rgb.len(),
            });
        }
        let pixels = rgb
            .chunks_exact(3)
            .map(|c| Pixel::from([c[0], c[1], c[2]]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the image holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Packed RGB bytes, `width * height * 3` long.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_bytes()).collect()
    }

    /// Copy of the pixel at `(x, y)`.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Pixel, ImageError> {
        let idx = self.index(x, y)?;
        Ok(self.pixels[idx])
    }

    /// Mutable reference to the pixel at `(x, y)`.
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> Result<&mut Pixel, ImageError> {
        let idx = self.index(x, y)?;
        Ok(&mut self.pixels[idx])
    }

    /// Overwrite the pixel at `(x, y)`.
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), ImageError> {
        *self.pixel_mut(x, y)? = pixel;
        Ok(())
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, ImageError> {
        if x >= self.width || y >= self.height {
            return Err(ImageError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }
}

fn pixel_count(width: usize, height: usize) -> Result<usize, ImageError> {
    width
        .checked_mul(height)
        .ok_or(ImageError::TooLarge { width, height })
}
