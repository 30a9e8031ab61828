#![warn(missing_docs)]
//! # mosaic-relay-app
//!
//! ## Purpose
//! Joins layout sizing and delivery glue into the single mosaic photo entry
//! point for `mosaic-relay`.
//!
//! ## Responsibilities
//! - Resolve a render target from configuration, treating "no servers" as an
//!   expected absent result.
//! - Compute the composite size for the supplied media run.
//! - Assemble the outward payload with per-format delivery URLs.
//! - Surface the deployment override for the downscale multiplier.
//!
//! ## Data flow
//! Validated [`SourceImage`] run + composite id -> [`compose_mosaic_photo`]
//! -> `Ok(None)` without a render target, otherwise `Ok(Some(MosaicPhoto))`.
//!
//! ## Ownership and lifetimes
//! The orchestrator hands owned payloads to callers; nothing borrows from
//! configuration or media past a call.
//!
//! ## Error model
//! Subsystem failures are wrapped in [`AppError`]. An empty render domain
//! list is not a failure; image counts outside 1-4 are.
//!
//! ## Security and privacy notes
//! Media URLs pass through as opaque strings; this crate performs no network
//! I/O and fetches nothing.

use mosaic_relay_core::{ImageSize, MosaicPhoto, SourceImage};
use mosaic_relay_delivery::{
    DeliveryError, format_urls, media_key, pick_render_domain, render_base_url,
};
use mosaic_relay_layout::{LayoutConfig, LayoutError, composite_size};
use rand::Rng;
use thiserror::Error;

/// Runtime configuration for mosaic photo assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig {
    /// Candidate render server domains. May be empty; composition then
    /// yields no photo.
    pub render_domains: Vec<String>,
    /// Layout sizing tunables.
    pub layout: LayoutConfig,
}

impl RelayConfig {
    /// Creates configuration with default layout tunables.
    pub fn new(render_domains: Vec<String>) -> Self {
        Self {
            render_domains,
            layout: LayoutConfig::default(),
        }
    }
}

/// Composes the mosaic photo payload for one media run.
///
/// # Semantics
/// - No configured render domain => `Ok(None)`; callers fall back to
///   per-image delivery.
/// - Otherwise one domain is drawn uniformly, the composite size is computed
///   from the media dimensions, and delivery URLs are assembled from the
///   composite id plus extracted media keys (URLs without an extractable key
///   contribute an empty path segment).
///
/// The sizing step is pure; only the domain draw consumes the injected rng.
///
/// # Errors
/// Returns [`AppError::Layout`] for image counts outside 1-4 and
/// [`AppError::Delivery`] for malformed configured domains.
pub fn compose_mosaic_photo<R: Rng + ?Sized>(
    media: &[SourceImage],
    mosaic_id: &str,
    config: &RelayConfig,
    rng: &mut R,
) -> Result<Option<MosaicPhoto>, AppError> {
    let Some(domain) = pick_render_domain(&config.render_domains, rng) else {
        return Ok(None);
    };
    let base = render_base_url(domain).map_err(AppError::Delivery)?;

    let sizes: Vec<ImageSize> = media.iter().map(|image| image.size).collect();
    let composite = composite_size(&sizes, &config.layout).map_err(AppError::Layout)?;

    let keys: Vec<String> = media
        .iter()
        .map(|image| media_key(&image.url).unwrap_or_default())
        .collect();
    let formats = format_urls(&base, mosaic_id, &keys);

    Ok(Some(MosaicPhoto {
        width: composite.width,
        height: composite.height,
        formats,
    }))
}

/// Reads the deployment override for the big-image downscale multiplier.
///
/// Semantics:
/// - Unset => `None` (keep configured default).
/// - Finite, strictly positive value => `Some(multiplier)`.
/// - Any other value => `None`.
pub fn big_image_multiplier_from_env() -> Option<f64> {
    let raw = std::env::var("MOSAIC_RELAY_BIG_IMAGE_MULTIPLIER").ok()?;
    let value: f64 = raw.trim().parse().ok()?;
    LayoutConfig::new(value)
        .ok()
        .map(|layout| layout.big_image_multiplier)
}

/// App integration error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Composite sizing error.
    #[error("layout error: {0}")]
    Layout(LayoutError),
    /// Delivery/url assembly error.
    #[error("delivery error: {0}")]
    Delivery(DeliveryError),
}
