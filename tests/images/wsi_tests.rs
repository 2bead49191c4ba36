//! Integration tests for the WSI accessor.
//!
//! These tests verify:
//! - Construction failure modes and their exact messages
//! - Metadata snapshotting and defaults
//! - Micron-to-pixel conversion and validation precedence
//! - Metadata equality across independent opens of the same path

use tempfile::NamedTempFile;

use wsimorph::error::WsiError;
use wsimorph::slide::Wsi;

use super::test_utils::{open_with, FailingSlideSource, StaticSlideSource};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_open_nonexistent_path_fails() {
    let source = StaticSlideSource::aperio_like();

    let err = Wsi::open("tests/_test_data/nonexistent.tiff", &source).unwrap_err();

    assert_eq!(err, WsiError::FileNotFound);
    assert_eq!(err.to_string(), "File not found.");
}

#[test]
fn test_backend_failure_propagates() {
    let file = NamedTempFile::new().unwrap();

    let err = Wsi::open(file.path(), &FailingSlideSource).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Slide backend error: decoder rejected file"
    );
}

#[test]
fn test_metadata_snapshot() {
    let (wsi, file) = open_with(&StaticSlideSource::aperio_like());

    assert_eq!(wsi.vendor(), "aperio");
    assert_eq!(wsi.level_count(), 3);
    assert_eq!(wsi.dimensions(), (46920, 33600));
    assert_eq!(
        wsi.level_dimensions(),
        &[(46920, 33600), (11730, 8400), (2932, 2100)]
    );
    assert_eq!(wsi.level_downsamples(), &[1.0, 4.0, 16.0]);
    assert_eq!(wsi.mpp_x(), 0.499);
    assert_eq!(wsi.mpp_y(), 0.499);
    assert_eq!(wsi.mpp(), 0.499);

    // The level count always matches the per-level sequences.
    assert_eq!(wsi.level_count(), wsi.level_dimensions().len());
    assert_eq!(wsi.level_count(), wsi.level_downsamples().len());

    // Name and stem derive from the opened path.
    let expected_name = file.path().file_name().unwrap().to_string_lossy();
    let expected_stem = file.path().file_stem().unwrap().to_string_lossy();
    assert_eq!(wsi.name(), expected_name);
    assert_eq!(wsi.stem(), expected_stem);
}

#[test]
fn test_missing_properties_use_defaults() {
    let (wsi, _file) = open_with(&StaticSlideSource::without_spacing());

    assert_eq!(wsi.vendor(), "Unknown");
    assert_eq!(wsi.mpp_x(), 0.0);
    assert_eq!(wsi.mpp_y(), 0.0);
    assert_eq!(wsi.mpp(), 0.0);
}

#[test]
fn test_reopening_same_path_yields_equal_metadata() {
    let source = StaticSlideSource::aperio_like();
    let file = NamedTempFile::new().unwrap();

    let first = Wsi::open(file.path(), &source).unwrap();
    let second = Wsi::open(file.path(), &source).unwrap();

    assert_eq!(first, second);
}

// =============================================================================
// Micron-to-Pixel Conversion
// =============================================================================

#[test]
fn test_pixels_from_microns_at_level_zero() {
    let (wsi, _file) = open_with(&StaticSlideSource::aperio_like());

    assert_eq!(wsi.pixels_from_microns(123.0, 0).unwrap(), 123.0 / 0.499);
}

#[test]
fn test_pixels_from_microns_scales_with_downsample() {
    let (wsi, _file) = open_with(&StaticSlideSource::aperio_like());

    assert_eq!(
        wsi.pixels_from_microns(123.0, 2).unwrap(),
        123.0 / (0.499 * 16.0)
    );
}

#[test]
fn test_level_out_of_range() {
    let (wsi, _file) = open_with(&StaticSlideSource::aperio_like());

    let err = wsi.pixels_from_microns(123.0, 123).unwrap_err();
    assert_eq!(err, WsiError::LevelOutOfRange);
    assert_eq!(
        err.to_string(),
        "Level must be greater than or equal to zero and less than the level count of the WSI."
    );

    assert_eq!(
        wsi.pixels_from_microns(123.0, -1).unwrap_err(),
        WsiError::LevelOutOfRange
    );
}

#[test]
fn test_non_positive_microns() {
    let (wsi, _file) = open_with(&StaticSlideSource::aperio_like());

    let err = wsi.pixels_from_microns(0.0, 0).unwrap_err();
    assert_eq!(err, WsiError::NonPositiveMicrons);
    assert_eq!(err.to_string(), "Microns must be greater than zero.");

    assert_eq!(
        wsi.pixels_from_microns(-5.0, 0).unwrap_err(),
        WsiError::NonPositiveMicrons
    );
}

#[test]
fn test_no_pixel_spacing() {
    let (wsi, _file) = open_with(&StaticSlideSource::without_spacing());

    let err = wsi.pixels_from_microns(123.0, 0).unwrap_err();
    assert_eq!(err, WsiError::NoPixelSpacing);
    assert_eq!(err.to_string(), "WSI has no pixel size information.");
}

#[test]
fn test_validation_precedence() {
    let (wsi, _file) = open_with(&StaticSlideSource::without_spacing());

    // Level is reported before microns, microns before missing spacing.
    assert_eq!(
        wsi.pixels_from_microns(0.0, 99).unwrap_err(),
        WsiError::LevelOutOfRange
    );
    assert_eq!(
        wsi.pixels_from_microns(0.0, 0).unwrap_err(),
        WsiError::NonPositiveMicrons
    );
    assert_eq!(
        wsi.pixels_from_microns(123.0, 0).unwrap_err(),
        WsiError::NoPixelSpacing
    );
}
