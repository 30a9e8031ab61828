#![warn(missing_docs)]
//! # mosaic-relay-layout
//!
//! ## Purpose
//! Computes composite pixel dimensions for 1-4 image mosaics ahead of the
//! remote render.
//!
//! ## Responsibilities
//! - Combine two sizes side by side, scaling the shorter to the taller.
//! - Combine two sizes top to bottom, scaling the narrower to the wider.
//! - Dispatch 1-4 input sizes to a fixed composition strategy.
//! - Apply the configurable large-composite downscale policy.
//!
//! ## Data flow
//! Validated [`mosaic_relay_core::ImageSize`] values -> [`composite_size`] ->
//! composite size consumed by mosaic photo assembly.
//!
//! ## Ownership and lifetimes
//! All values are `Copy` pixel pairs; every combiner call produces a new
//! value and no input is mutated.
//!
//! ## Error model
//! Image counts outside 1-4 fail with [`LayoutError::InvalidImageCount`].
//! Non-positive dimensions are excluded at construction by
//! `mosaic_relay_core::ImageSize::new`, so the geometry here is total.

use mosaic_relay_core::ImageSize;
use thiserror::Error;

/// Fixed pixel gap inserted between adjacent images in a composite.
pub const SPACING: u32 = 10;

/// Composite edge length above which the downscale multiplier applies.
///
/// Empirical constant from the reference renderer; kept verbatim so computed
/// sizes keep matching what the render service produces.
pub const BIG_COMPOSITE_LIMIT: u32 = 2000;

/// Ratio at which a third image's allotted height is considered too tall for
/// a vertical stack. Empirical constant from the reference renderer.
pub const TALL_THIRD_RATIO: f64 = 1.5;

/// Two sizes placed side by side at a shared height.
///
/// `first_width`/`second_width` record the post-scaling widths of the two
/// operands in call order: the scaled operand carries its rounded width, the
/// unscaled operand its original width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalFit {
    /// Total composite width including spacing.
    pub width: u32,
    /// Shared height (the taller operand's height).
    pub height: u32,
    /// Post-scaling width allotted to the first operand.
    pub first_width: u32,
    /// Post-scaling width allotted to the second operand.
    pub second_width: u32,
}

impl HorizontalFit {
    /// Returns the bounding box of this combination.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width,
            height: self.height,
        }
    }
}

/// Two sizes stacked top to bottom at a shared width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalFit {
    /// Shared width (the wider operand's width).
    pub width: u32,
    /// Total composite height including spacing.
    pub height: u32,
    /// Post-scaling height allotted to the first operand.
    pub first_height: u32,
    /// Post-scaling height allotted to the second operand.
    pub second_height: u32,
}

impl VerticalFit {
    /// Returns the bounding box of this combination.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width,
            height: self.height,
        }
    }
}

/// Tunables for the large-composite downscale policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Multiplier applied to both composite dimensions when a 4-image
    /// composite exceeds [`BIG_COMPOSITE_LIMIT`] on either axis. Deployments
    /// may lower it below 1.0 to trade resolution for bandwidth.
    pub big_image_multiplier: f64,
}

impl LayoutConfig {
    /// Creates validated layout configuration.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidMultiplier`] when the multiplier is not
    /// finite or not strictly positive.
    pub fn new(big_image_multiplier: f64) -> Result<Self, LayoutError> {
        if !big_image_multiplier.is_finite() || big_image_multiplier <= 0.0 {
            return Err(LayoutError::InvalidMultiplier(big_image_multiplier));
        }

        Ok(Self {
            big_image_multiplier,
        })
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            big_image_multiplier: 1.0,
        }
    }
}

/// Places two sizes side by side, scaling the shorter to the taller's height.
///
/// # Semantics
/// The taller operand keeps its native size; the other is scaled to the
/// shared height and its width rounded half away from zero. Equal heights do
/// not swap: the comparison is strict, so `first` stays the unscaled operand.
pub fn combine_horizontal(first: ImageSize, second: ImageSize) -> HorizontalFit {
    let mut small = second;
    let mut big = first;
    let mut swapped = false;
    if second.height > first.height {
        small = first;
        big = second;
        swapped = true;
    }

    let small_width = scale_rounded(small.width, big.height, small.height);
    HorizontalFit {
        width: small_width + SPACING + big.width,
        height: big.height,
        first_width: if swapped { small_width } else { big.width },
        second_width: if swapped { big.width } else { small_width },
    }
}

/// Stacks two sizes top to bottom, scaling the narrower to the wider's width.
///
/// # Semantics
/// Mirror of [`combine_horizontal`] with the roles of width and height
/// exchanged; the swap comparison is strict on width.
pub fn combine_vertical(first: ImageSize, second: ImageSize) -> VerticalFit {
    let mut small = second;
    let mut big = first;
    let mut swapped = false;
    if second.width > first.width {
        small = first;
        big = second;
        swapped = true;
    }

    let small_height = scale_rounded(small.height, big.width, small.width);
    VerticalFit {
        width: big.width,
        height: small_height + SPACING + big.height,
        first_height: if swapped { small_height } else { big.height },
        second_height: if swapped { big.height } else { small_height },
    }
}

/// Computes the composite size for an ordered run of 1-4 images.
///
/// # Semantics
/// - 1 image: the input size unchanged.
/// - 2 images: one side-by-side row.
/// - 3 images: a row of two with the third stacked beneath, unless the
///   third's allotted height would exceed the row height by more than
///   [`TALL_THIRD_RATIO`], in which case all three go side by side.
/// - 4 images: two rows of two stacked, then the downscale policy when the
///   result exceeds [`BIG_COMPOSITE_LIMIT`] on either axis.
///
/// Input order is significant: it determines grid position.
///
/// # Errors
/// Returns [`LayoutError::InvalidImageCount`] for 0 or more than 4 images.
pub fn composite_size(
    images: &[ImageSize],
    config: &LayoutConfig,
) -> Result<ImageSize, LayoutError> {
    match images {
        [single] => Ok(*single),
        [first, second] => Ok(combine_horizontal(*first, *second).size()),
        [first, second, third] => {
            let row = combine_horizontal(*first, *second);
            let stacked = combine_vertical(row.size(), *third);

            if f64::from(stacked.second_height) * TALL_THIRD_RATIO > f64::from(row.height) {
                Ok(combine_horizontal(row.size(), *third).size())
            } else {
                Ok(stacked.size())
            }
        }
        [first, second, third, fourth] => {
            let top = combine_horizontal(*first, *second);
            let bottom = combine_horizontal(*third, *fourth);
            let all = combine_vertical(top.size(), bottom.size());

            Ok(downscale_big_composite(all.size(), config))
        }
        _ => Err(LayoutError::InvalidImageCount {
            actual: images.len(),
        }),
    }
}

fn downscale_big_composite(size: ImageSize, config: &LayoutConfig) -> ImageSize {
    if size.width <= BIG_COMPOSITE_LIMIT && size.height <= BIG_COMPOSITE_LIMIT {
        return size;
    }

    ImageSize {
        width: (f64::from(size.width) * config.big_image_multiplier).round() as u32,
        height: (f64::from(size.height) * config.big_image_multiplier).round() as u32,
    }
}

// Single rounding rule for every fractional intermediate: f64::round is
// half-away-from-zero, which agrees with the reference implementation for
// the strictly positive values that reach it.
fn scale_rounded(value: u32, numerator: u32, denominator: u32) -> u32 {
    (f64::from(numerator) / f64::from(denominator) * f64::from(value)).round() as u32
}

/// Error type for composite sizing.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Mosaics are built from 1 to 4 images.
    #[error("invalid image count: mosaics are built from 1 to 4 images, got {actual}")]
    InvalidImageCount {
        /// Rejected image count.
        actual: usize,
    },
    /// Downscale multiplier must be finite and strictly positive.
    #[error("invalid big image multiplier: {0}")]
    InvalidMultiplier(f64),
}
