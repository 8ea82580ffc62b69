//! Error diffusion kernel definition.
//!
//! A kernel lists the not-yet-visited neighbours that receive a share of a
//! pixel's quantization error, relative to the current scan position.

/// An error diffusion kernel.
///
/// Each neighbour receives `error * weight / divisor`. All entries point
/// forward in row-major scan order: either to the right on the current row
/// (`dy == 0, dx > 0`) or onto a later row (`dy > 0`).
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries, applied in order.
    pub entries: &'static [(isize, usize, i32)],

    /// Denominator shared by every weight.
    pub divisor: i32,
}

impl Kernel {
    /// Sum of all weights. Equal to `divisor` for full error propagation.
    pub fn total_weight(&self) -> i32 {
        self.entries.iter().map(|&(_, _, w)| w).sum()
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};
