//! Integration tests for the no-render-server fallback.

mod common;

use mosaic_relay_app::{RelayConfig, compose_mosaic_photo};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn render_domain_fallback_tests_yields_absent_photo_without_domains() {
    let media = common::fixture_media();
    let config = RelayConfig::new(Vec::new());
    let mut rng = StdRng::seed_from_u64(1);

    let photo = compose_mosaic_photo(&media, "id", &config, &mut rng)
        .expect("absent render target is not an error");
    assert!(photo.is_none());
}
