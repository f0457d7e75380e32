//! Integration tests for QA band decoding
//!
//! These exercise the public surface the way a masking application would:
//! decode raw band values pulled from real products and check every flag,
//! including the cross-band path from Level-1 QA to pixel QA to class.

use landsat_qa::decoder::{level1, level2, pixel};
use landsat_qa::{BandError, Confidence, PixelQa, QaClass, Sensor};

#[test]
fn pixel_qa_all_flags_off() {
    let qa = PixelQa::decode(0);
    assert_eq!(
        qa,
        PixelQa {
            fill: false,
            clear: false,
            water: false,
            cloud_shadow: false,
            snow: false,
            cloud: false,
            cloud_confidence: Confidence::None,
            cirrus_confidence: Confidence::None,
            terrain_occluded: false,
        }
    );
}

#[test]
fn pixel_qa_fill_only() {
    let qa = PixelQa::decode(0b1);
    assert!(qa.fill);
    assert!(!qa.clear && !qa.water && !qa.cloud_shadow && !qa.snow && !qa.cloud);
    assert_eq!(qa.cloud_confidence, Confidence::None);
    assert_eq!(qa.cirrus_confidence, Confidence::None);
    assert!(!qa.terrain_occluded);
}

#[test]
fn pixel_qa_clear_only() {
    let qa = PixelQa::decode(0b10);
    assert!(qa.clear);
    assert!(!qa.fill);
}

#[test]
fn pixel_qa_high_cloud_confidence() {
    // 192 = 0b11 << 6
    let qa = PixelQa::decode(192);
    assert_eq!(qa.cloud_confidence, Confidence::High);
    assert!(!qa.fill && !qa.clear && !qa.water && !qa.cloud_shadow);
    assert!(!qa.snow && !qa.cloud && !qa.terrain_occluded);
}

#[test]
fn pixel_qa_moderate_cirrus_confidence() {
    // 512 = 0b10 << 8
    let qa = PixelQa::decode(512);
    assert_eq!(qa.cirrus_confidence, Confidence::Moderate);
    assert_eq!(qa.cloud_confidence, Confidence::None);
}

#[test]
fn pixel_qa_cloud_with_terrain_occlusion() {
    // 1120 = terrain occlusion + cloud + low cloud confidence
    let qa = PixelQa::decode(1120);
    assert!(qa.cloud);
    assert!(qa.terrain_occluded);
    assert_eq!(qa.cloud_confidence, Confidence::Low);
    assert!(!qa.fill && !qa.clear && !qa.water && !qa.cloud_shadow && !qa.snow);
    assert_eq!(qa.cirrus_confidence, Confidence::None);
}

#[test]
fn pixel_qa_is_pure() {
    for v in [0u16, 66, 224, 1120, u16::MAX] {
        assert_eq!(pixel::is_cloud(v), pixel::is_cloud(v));
        assert_eq!(pixel::cloud_confidence(v), pixel::cloud_confidence(v));
        assert_eq!(PixelQa::decode(v), PixelQa::decode(v));
    }
}

#[test]
fn level1_to_pixel_qa_to_class() {
    // A Landsat 8 cloud pixel: cloud set, high cloud confidence, moderate
    // cirrus, terrain occluded.
    let qa_pixel = (1 << 3) | (0b11 << 8) | (0b10 << 14);
    let qa_radsat = 1 << 11;

    let qa = pixel::from_level1(qa_pixel, qa_radsat, Sensor::L89);
    let decoded = PixelQa::decode(qa);
    assert!(decoded.cloud);
    assert!(!decoded.clear);
    assert_eq!(decoded.cloud_confidence, Confidence::High);
    assert_eq!(decoded.cirrus_confidence, Confidence::Moderate);
    assert!(decoded.terrain_occluded);

    assert_eq!(QaClass::from_pixel_qa(qa), QaClass::Cloud);
}

#[test]
fn level1_fill_maps_to_fill_class() {
    let qa = pixel::from_level1(1, 0, Sensor::L47);
    assert!(pixel::is_fill(qa));
    assert_eq!(QaClass::from_pixel_qa(qa), QaClass::Fill);
}

#[test]
fn level1_clean_pixel_maps_to_clear_class() {
    let qa = pixel::from_level1(0, 0, Sensor::L47);
    assert!(pixel::is_clear(qa));
    assert_eq!(QaClass::from_pixel_qa(qa), QaClass::Clear);
}

#[test]
fn level1_saturation_band_validation() {
    assert_eq!(level1::is_saturated(0b0100, 3), Ok(true));
    assert_eq!(level1::is_saturated(0b0100, 2), Ok(false));
    assert_eq!(level1::is_saturated(1 << 5, 61), Ok(true));
    assert_eq!(level1::is_saturated(1 << 8, 62), Ok(true));
    assert_eq!(level1::is_saturated(0xFFFF, 12), Err(BandError::InvalidBand(12)));
    assert_eq!(level1::is_saturated(0xFFFF, 0), Err(BandError::InvalidBand(0)));
}

#[test]
fn band_error_message_names_the_band() {
    let err = level1::is_saturated(0, 13).unwrap_err();
    assert_eq!(err.to_string(), "band 13 has no radiometric saturation flag");
}

#[test]
fn ledaps_water_pixel() {
    // land/water bit clear means water
    let qa = 0x04u8; // cloud shadow
    assert!(level2::ledaps::is_cloud_shadow(qa));
    assert!(!level2::ledaps::is_land(qa));
}

#[test]
fn lasrc_cloudy_high_aerosol() {
    let qa = 0x08 | 0xC0;
    assert!(level2::lasrc::is_cloud_cirrus(qa));
    assert_eq!(
        level2::lasrc::aerosol_level(qa),
        landsat_qa::AerosolLevel::High
    );
    assert!(!level2::lasrc::is_fill(qa));
}
