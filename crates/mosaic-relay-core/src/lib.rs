#![warn(missing_docs)]
//! # mosaic-relay-core
//!
//! ## Purpose
//! Defines the pure data model used across the `mosaic-relay` workspace.
//!
//! ## Responsibilities
//! - Represent validated source image dimensions.
//! - Represent source images at the delivery boundary (URL plus size).
//! - Encode/decode the outward mosaic photo payload for transport.
//!
//! ## Data flow
//! Callers construct [`SourceImage`] values from upstream media records.
//! Layout code consumes their [`ImageSize`] values; delivery code consumes
//! their URLs. Results join into [`MosaicPhoto`] for the response payload.
//!
//! ## Ownership and lifetimes
//! Payload values own their strings (`String`) so response assembly never
//! borrows from transient upstream media buffers.
//!
//! ## Error model
//! Validation failures (non-positive dimensions) and codec failures return
//! [`CoreError`] variants with caller-actionable categorization.
//!
//! ## Example
//! ```rust
//! use mosaic_relay_core::{ImageSize, SourceImage};
//!
//! let image = SourceImage::new("https://pbs.example.test/media/abc123.jpg", 1280, 720)
//!     .expect("valid source image");
//! assert_eq!(image.size, ImageSize::new(1280, 720).unwrap());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pixel dimensions of one image or composite.
///
/// Both fields are strictly positive; [`ImageSize::new`] is the single place
/// that enforces it, so downstream geometry stays total over constructed
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageSize {
    /// Constructs a validated size.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] when either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, CoreError> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }

        Ok(Self { width, height })
    }
}

/// One source image at the delivery boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// Media URL the per-image key is extracted from. Treated as opaque;
    /// never fetched.
    pub url: String,
    /// Validated pixel dimensions.
    pub size: ImageSize,
}

impl SourceImage {
    /// Constructs a source image with validated dimensions.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] when either dimension is zero.
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> Result<Self, CoreError> {
        Ok(Self {
            url: url.into(),
            size: ImageSize::new(width, height)?,
        })
    }
}

/// Delivery URLs for one rendered mosaic, per output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicFormats {
    /// JPEG delivery URL.
    pub jpeg: String,
    /// WebP delivery URL.
    pub webp: String,
}

/// Outward mosaic payload: composite pixel size plus delivery URLs.
///
/// The width/height here are the pre-render composite dimensions, published
/// before the remote render completes so consumers can reserve layout space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicPhoto {
    /// Composite width in pixels.
    pub width: u32,
    /// Composite height in pixels.
    pub height: u32,
    /// Per-format delivery URLs.
    pub formats: MosaicFormats,
}

impl MosaicPhoto {
    /// Serializes payload to compact JSON bytes.
    ///
    /// # Errors
    /// Returns [`CoreError::Codec`] when JSON serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, CoreError> {
        serde_json::to_vec(self).map_err(CoreError::Codec)
    }

    /// Deserializes payload from JSON bytes.
    ///
    /// # Errors
    /// Returns [`CoreError::Codec`] when JSON decoding fails.
    pub fn from_json_bytes(raw: &[u8]) -> Result<Self, CoreError> {
        serde_json::from_slice(raw).map_err(CoreError::Codec)
    }
}

/// Error type for core domain validation and codec failures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Image dimensions must both be strictly positive.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Rejected width.
        width: u32,
        /// Rejected height.
        height: u32,
    },
    /// JSON encoding/decoding error.
    #[error("payload codec failure: {0}")]
    Codec(#[from] serde_json::Error),
}
