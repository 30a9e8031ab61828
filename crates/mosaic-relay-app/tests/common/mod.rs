//! Shared fixtures for app integration tests.

use mosaic_relay_app::RelayConfig;
use mosaic_relay_core::SourceImage;

/// Creates a deterministic four-image media fixture with extractable keys.
#[allow(dead_code)]
pub fn fixture_media() -> Vec<SourceImage> {
    (1..=4)
        .map(|index| {
            SourceImage::new(
                format!("https://pbs.example.test/media/key-{index}.jpg"),
                200,
                200,
            )
            .expect("media fixture should be valid")
        })
        .collect()
}

/// Creates configuration with one render domain and default layout tunables.
#[allow(dead_code)]
pub fn fixture_config() -> RelayConfig {
    RelayConfig::new(vec!["mosaic.example.test".to_string()])
}
