#![warn(missing_docs)]
//! # mosaic-relay-delivery
//!
//! ## Purpose
//! Resolves where a mosaic will be rendered and under which URLs it will be
//! delivered.
//!
//! ## Responsibilities
//! - Pick one render domain uniformly from the configured list.
//! - Extract opaque per-image media keys from source URLs.
//! - Validate render base addresses and assemble jpeg/webp delivery URLs.
//!
//! ## Data flow
//! Configured domain list -> [`pick_render_domain`] -> [`render_base_url`] ->
//! [`format_urls`] joined with media keys from [`media_key`] into
//! [`mosaic_relay_core::MosaicFormats`].
//!
//! ## Ownership and lifetimes
//! Extracted keys and assembled URLs are owned `String`s; nothing borrows
//! from the caller's media records past a call.
//!
//! ## Error model
//! Malformed render domains fail with [`DeliveryError::InvalidDomain`].
//! An empty domain list is an expected operational state, not an error, and
//! surfaces as `None` from [`pick_render_domain`].
//!
//! ## Security and privacy notes
//! Source URLs are scanned as opaque strings and never fetched; only the
//! extracted key fragment is echoed into delivery URLs.

use mosaic_relay_core::MosaicFormats;
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;
use url::Url;

/// Path marker preceding the media key in source URLs.
pub const MEDIA_PATH_MARKER: &str = "/media/";

/// Maximum number of media keys carried in one delivery path.
pub const MAX_PATH_KEYS: usize = 4;

/// Picks one render domain uniformly at random.
///
/// # Semantics
/// - Empty list => `None` immediately. "No servers configured" is an
///   expected operational state.
/// - Non-empty list => exactly one uniform draw; repeated sampling cannot
///   change an already-present outcome.
///
/// The rng is injected so callers and tests control determinism.
pub fn pick_render_domain<'a, R: Rng + ?Sized>(
    domains: &'a [String],
    rng: &mut R,
) -> Option<&'a str> {
    domains.choose(rng).map(String::as_str)
}

/// Extracts the opaque media key from one source URL.
///
/// # Semantics
/// The key is the first non-empty run of `[A-Za-z0-9_-]` that directly
/// follows a `/media/` marker and is terminated by `.` or `?`. Every marker
/// occurrence is tried in order. `None` means the URL carries no extractable
/// key; assembly then emits an empty path segment for that image.
pub fn media_key(url: &str) -> Option<String> {
    for (position, _) in url.match_indices(MEDIA_PATH_MARKER) {
        let rest = &url[position + MEDIA_PATH_MARKER.len()..];
        let key_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
            .unwrap_or(rest.len());

        if key_len == 0 {
            continue;
        }

        match rest[key_len..].chars().next() {
            Some('.' | '?') => return Some(rest[..key_len].to_string()),
            _ => continue,
        }
    }

    None
}

/// Builds and validates the HTTPS base address for a render domain.
///
/// # Errors
/// Returns [`DeliveryError::InvalidDomain`] when the domain does not parse
/// as a bare HTTPS host, or smuggles a path, query, or credentials.
pub fn render_base_url(domain: &str) -> Result<Url, DeliveryError> {
    let base = Url::parse(&format!("https://{domain}/"))
        .map_err(|error| DeliveryError::InvalidDomain(format!("{domain}: {error}")))?;

    if base.host_str().is_none()
        || base.path() != "/"
        || base.query().is_some()
        || !base.username().is_empty()
    {
        return Err(DeliveryError::InvalidDomain(format!(
            "{domain}: render domain must be a bare host"
        )));
    }

    Ok(base)
}

/// Assembles per-format delivery URLs for one mosaic.
///
/// # Semantics
/// Each URL is the base address, a `jpeg/` or `webp/` segment, the composite
/// identifier, and a slash-joined run of at most [`MAX_PATH_KEYS`] media
/// keys in input order.
pub fn format_urls(base: &Url, mosaic_id: &str, keys: &[String]) -> MosaicFormats {
    let path: String = keys
        .iter()
        .take(MAX_PATH_KEYS)
        .map(|key| format!("/{key}"))
        .collect();

    MosaicFormats {
        jpeg: format!("{base}jpeg/{mosaic_id}{path}"),
        webp: format!("{base}webp/{mosaic_id}{path}"),
    }
}

/// Delivery layer error type.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Configured render domain cannot form a valid base address.
    #[error("invalid render domain: {0}")]
    InvalidDomain(String),
}
