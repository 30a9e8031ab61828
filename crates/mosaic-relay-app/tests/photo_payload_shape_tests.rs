//! Integration tests for the outward payload JSON shape.

mod common;

use mosaic_relay_app::compose_mosaic_photo;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;

#[test]
fn photo_payload_shape_tests_serializes_expected_fields() {
    let media = common::fixture_media();
    let config = common::fixture_config();
    let mut rng = StdRng::seed_from_u64(1);

    let photo = compose_mosaic_photo(&media, "1234567890", &config, &mut rng)
        .expect("composition should succeed")
        .expect("photo should be present");

    let value = serde_json::to_value(&photo).expect("payload should serialize");
    assert_eq!(value["width"], 410);
    assert_eq!(value["height"], 410);
    assert!(
        value["formats"]["jpeg"]
            .as_str()
            .expect("jpeg url should be a string")
            .starts_with("https://")
    );
    assert!(
        value["formats"]["webp"]
            .as_str()
            .expect("webp url should be a string")
            .starts_with("https://")
    );
}
