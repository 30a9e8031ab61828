//! Integration tests for image count contract violations.

mod common;

use mosaic_relay_app::{AppError, compose_mosaic_photo};
use mosaic_relay_core::SourceImage;
use mosaic_relay_layout::LayoutError;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn image_count_tests_rejects_empty_and_oversized_runs() {
    let config = common::fixture_config();
    let mut rng = StdRng::seed_from_u64(1);

    let empty = compose_mosaic_photo(&[], "id", &config, &mut rng);
    assert!(matches!(
        empty,
        Err(AppError::Layout(LayoutError::InvalidImageCount { actual: 0 }))
    ));

    let five: Vec<SourceImage> = (0..5)
        .map(|index| {
            SourceImage::new(
                format!("https://pbs.example.test/media/key-{index}.jpg"),
                100,
                100,
            )
            .expect("media fixture should be valid")
        })
        .collect();
    let oversized = compose_mosaic_photo(&five, "id", &config, &mut rng);
    assert!(matches!(
        oversized,
        Err(AppError::Layout(LayoutError::InvalidImageCount { actual: 5 }))
    ));
}
