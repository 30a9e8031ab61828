//! Integration tests for end-to-end mosaic photo composition.

mod common;

use mosaic_relay_app::compose_mosaic_photo;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn mosaic_pipeline_tests_composes_four_image_photo() {
    let media = common::fixture_media();
    let config = common::fixture_config();
    let mut rng = StdRng::seed_from_u64(1);

    let photo = compose_mosaic_photo(&media, "1234567890", &config, &mut rng)
        .expect("composition should succeed")
        .expect("photo should be present with a configured domain");

    assert_eq!(photo.width, 410);
    assert_eq!(photo.height, 410);
    assert_eq!(
        photo.formats.jpeg,
        "https://mosaic.example.test/jpeg/1234567890/key-1/key-2/key-3/key-4"
    );
    assert_eq!(
        photo.formats.webp,
        "https://mosaic.example.test/webp/1234567890/key-1/key-2/key-3/key-4"
    );
}

#[test]
fn mosaic_pipeline_tests_single_image_keeps_its_size() {
    let media = vec![common::fixture_media().remove(0)];
    let config = common::fixture_config();
    let mut rng = StdRng::seed_from_u64(1);

    let photo = compose_mosaic_photo(&media, "id", &config, &mut rng)
        .expect("composition should succeed")
        .expect("photo should be present");

    assert_eq!(photo.width, 200);
    assert_eq!(photo.height, 200);
}
