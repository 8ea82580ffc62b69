//! RGB pixel with clamp-on-write channels.
//!
//! Every way of putting a value into a [`Pixel`] goes through
//! [`clamp_channel`], so out-of-range inputs are saturated instead of
//! rejected. Channels are stored as `u8`, which makes "every channel is
//! in `0..=255`" hold by construction.

/// Clamp an integer channel value into `0..=255`.
#[inline]
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// A single RGB pixel.
///
/// The default pixel is black.
///
/// # Example
///
/// ```
/// use pixel_dither::Pixel;
///
/// let mut pixel = Pixel::new(300, -20, 128);
/// assert_eq!(pixel.to_bytes(), [255, 0, 128]);
///
/// pixel.set_green(90);
/// assert_eq!(pixel.intensity(), (255 + 90 + 128) / 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    red: u8,
    green: u8,
    blue: u8,
}

impl Pixel {
    /// Create a pixel, clamping each channel into `0..=255`.
    #[inline]
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
        }
    }

    /// Create a grey pixel with all three channels set to `value` (clamped).
    #[inline]
    pub fn grey(value: i32) -> Self {
        let v = clamp_channel(value);
        Self {
            red: v,
            green: v,
            blue: v,
        }
    }

    #[inline]
    pub fn red(&self) -> u8 {
        self.red
    }

    #[inline]
    pub fn green(&self) -> u8 {
        self.green
    }

    #[inline]
    pub fn blue(&self) -> u8 {
        self.blue
    }

    #[inline]
    pub fn set_red(&mut self, value: i32) {
        self.red = clamp_channel(value);
    }

    #[inline]
    pub fn set_green(&mut self, value: i32) {
        self.green = clamp_channel(value);
    }

    #[inline]
    pub fn set_blue(&mut self, value: i32) {
        self.blue = clamp_channel(value);
    }

    /// Collapse the pixel to grey: all three channels become `value` (clamped).
    #[inline]
    pub fn set_intensity(&mut self, value: i32) {
        *self = Self::grey(value);
    }

    /// Luminance proxy used for threshold quantization.
    ///
    /// Unweighted mean of the three channels, truncated: `(r + g + b) / 3`.
    /// For grey pixels this is exactly the channel value.
    #[inline]
    pub fn intensity(&self) -> i32 {
        (self.red as i32 + self.green as i32 + self.blue as i32) / 3
    }

    /// Returns `true` when all three channels are equal.
    #[inline]
    pub fn is_grey(&self) -> bool {
        self.red == self.green && self.green == self.blue
    }

    /// Channel bytes in `[R, G, B]` order.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }
}
