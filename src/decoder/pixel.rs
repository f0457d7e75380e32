//! Level-2 pixel QA band decoder
//!
//! The pixel QA band is an unsigned 16-bit integer attached to every pixel
//! of a Level-2 product. Bit layout:
//!
//! ```text
//! 0:     fill
//! 1:     clear
//! 2:     water
//! 3:     cloud shadow
//! 4:     snow
//! 5:     cloud
//! 6-7:   cloud confidence
//! 8-9:   cirrus confidence (Landsat 8-9 only)
//! 10:    terrain occlusion (Landsat 8-9 only)
//! 11-15: reserved
//! ```
//!
//! Typing the value as `u16` pins down the encoding width: negative inputs
//! are unrepresentable and reserved high bits are simply never read.

use crate::models::{Confidence, Sensor};

use super::level1;

/// Bit position of the fill flag
pub const FILL_BIT: u16 = 0;
/// Bit position of the clear flag
pub const CLEAR_BIT: u16 = 1;
/// Bit position of the water flag
pub const WATER_BIT: u16 = 2;
/// Bit position of the cloud shadow flag
pub const CLOUD_SHADOW_BIT: u16 = 3;
/// Bit position of the snow flag
pub const SNOW_BIT: u16 = 4;
/// Bit position of the cloud flag
pub const CLOUD_BIT: u16 = 5;
/// Low bit of the 2-bit cloud confidence field
pub const CLOUD_CONF_BIT: u16 = 6;
/// Low bit of the 2-bit cirrus confidence field (Landsat 8-9 only)
pub const CIRRUS_CONF_BIT: u16 = 8;
/// Bit position of the terrain occlusion flag (Landsat 8-9 only)
pub const TERRAIN_OCCLUSION_BIT: u16 = 10;

/// Mask for a single-bit flag
pub const SINGLE_BIT: u16 = 0b1;
/// Mask for a 2-bit confidence field
pub const DOUBLE_BIT: u16 = 0b11;

/// Whether the pixel is fill (no valid observation)
pub fn is_fill(qa: u16) -> bool {
    (qa >> FILL_BIT) & SINGLE_BIT == 1
}

/// Whether the pixel is clear
pub fn is_clear(qa: u16) -> bool {
    (qa >> CLEAR_BIT) & SINGLE_BIT == 1
}

/// Whether the pixel is water
pub fn is_water(qa: u16) -> bool {
    (qa >> WATER_BIT) & SINGLE_BIT == 1
}

/// Whether the pixel is cloud shadow
pub fn is_cloud_shadow(qa: u16) -> bool {
    (qa >> CLOUD_SHADOW_BIT) & SINGLE_BIT == 1
}

/// Whether the pixel is snow
pub fn is_snow(qa: u16) -> bool {
    (qa >> SNOW_BIT) & SINGLE_BIT == 1
}

/// Whether the pixel is cloud
pub fn is_cloud(qa: u16) -> bool {
    (qa >> CLOUD_BIT) & SINGLE_BIT == 1
}

/// Cloud confidence for the pixel (bits 6-7)
pub fn cloud_confidence(qa: u16) -> Confidence {
    Confidence::from_bits(((qa >> CLOUD_CONF_BIT) & DOUBLE_BIT) as u8)
}

/// Cirrus confidence for the pixel (bits 8-9)
///
/// Only meaningful for Landsat 8-9 products; for other spacecraft these bits
/// are never set and this returns [`Confidence::None`].
pub fn cirrus_confidence(qa: u16) -> Confidence {
    Confidence::from_bits(((qa >> CIRRUS_CONF_BIT) & DOUBLE_BIT) as u8)
}

/// Whether the pixel is terrain occluded (bit 10, Landsat 8-9 only)
pub fn is_terrain_occluded(qa: u16) -> bool {
    (qa >> TERRAIN_OCCLUSION_BIT) & SINGLE_BIT == 1
}

/// Build a pixel QA value from the Level-1 QA band values for one pixel
///
/// This is the per-pixel rule used when generating the pixel QA band from
/// the Level-1 QA_PIXEL and QA_RADSAT bands. The value starts out clear;
/// fill wins outright, and any detected condition other than a low or
/// moderate confidence turns the clear flag off:
///
/// - high cloud shadow confidence sets the cloud shadow flag
/// - high snow/ice confidence sets the snow flag
/// - a Level-1 cloud sets the cloud flag
/// - cloud confidence is carried over as-is (high also clears the clear flag)
/// - for Landsat 8-9 only, cirrus confidence is carried over and terrain
///   occlusion is taken from the QA_RADSAT value; neither affects the clear
///   flag
///
/// Water is never set: the Level-1 QA has no water flag.
pub fn from_level1(qa_pixel: u16, qa_radsat: u16, sensor: Sensor) -> u16 {
    if level1::is_fill(qa_pixel) {
        return 1 << FILL_BIT;
    }

    let mut qa = 1 << CLEAR_BIT;

    if level1::cloud_shadow_confidence(qa_pixel) == Confidence::High {
        qa &= !(1 << CLEAR_BIT);
        qa |= 1 << CLOUD_SHADOW_BIT;
    }

    if level1::snow_ice_confidence(qa_pixel) == Confidence::High {
        qa &= !(1 << CLEAR_BIT);
        qa |= 1 << SNOW_BIT;
    }

    if level1::is_cloud(qa_pixel) {
        qa &= !(1 << CLEAR_BIT);
        qa |= 1 << CLOUD_BIT;
    }

    match level1::cloud_confidence(qa_pixel) {
        Confidence::None => {}
        Confidence::Low => qa |= 1 << CLOUD_CONF_BIT,
        Confidence::Moderate => qa |= 2 << CLOUD_CONF_BIT,
        Confidence::High => {
            qa &= !(1 << CLEAR_BIT);
            qa |= 3 << CLOUD_CONF_BIT;
        }
    }

    if sensor.has_cirrus() {
        qa |= u16::from(level1::cirrus_confidence(qa_pixel).bits()) << CIRRUS_CONF_BIT;
    }
    if sensor.has_terrain_occlusion() && level1::is_terrain_occluded(qa_radsat) {
        qa |= 1 << TERRAIN_OCCLUSION_BIT;
    }

    qa
}
