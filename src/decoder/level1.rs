//! Level-1 QA band decoders
//!
//! Level-1 products carry two 16-bit QA bands per pixel:
//!
//! QA_PIXEL (detection flags and confidences):
//!
//! ```text
//! 0:     fill
//! 3:     cloud
//! 8-9:   cloud confidence
//! 10-11: cloud shadow confidence
//! 12-13: snow/ice confidence
//! 14-15: cirrus confidence (Landsat 8-9 only)
//! ```
//!
//! QA_RADSAT (radiometric saturation and sensor artifacts):
//!
//! ```text
//! 0-10:  per-band radiometric saturation (band n at bit n-1)
//! 9:     dropped pixel (Landsat 4-7 only)
//! 11:    terrain occlusion (Landsat 8-9 only)
//! ```
//!
//! The functions here take whichever of the two band values they decode;
//! mixing them up is not detectable from the value alone, so the parameter
//! names spell out which band is expected.

use thiserror::Error;

use crate::models::Confidence;

/// Bit position of the fill flag in QA_PIXEL
pub const FILL_BIT: u16 = 0;
/// Bit position of the cloud flag in QA_PIXEL
pub const CLOUD_BIT: u16 = 3;
/// Low bit of the cloud confidence field in QA_PIXEL
pub const CLOUD_CONF_BIT: u16 = 8;
/// Low bit of the cloud shadow confidence field in QA_PIXEL
pub const CLOUD_SHADOW_CONF_BIT: u16 = 10;
/// Low bit of the snow/ice confidence field in QA_PIXEL
pub const SNOW_ICE_CONF_BIT: u16 = 12;
/// Low bit of the cirrus confidence field in QA_PIXEL (Landsat 8-9 only)
pub const CIRRUS_CONF_BIT: u16 = 14;
/// Bit position of the dropped pixel flag in QA_RADSAT (Landsat 4-7 only)
pub const DROPPED_PIXEL_BIT: u16 = 9;
/// Bit position of the terrain occlusion flag in QA_RADSAT (Landsat 8-9 only)
pub const TERRAIN_OCCLUSION_BIT: u16 = 11;

/// Error for a band number that carries no QA flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BandError {
    /// Band number has no radiometric saturation bit (valid: 1-11, 61, 62)
    #[error("band {0} has no radiometric saturation flag")]
    InvalidBand(u8),
}

/// Whether the QA_PIXEL value marks the pixel as fill
pub fn is_fill(qa_pixel: u16) -> bool {
    (qa_pixel >> FILL_BIT) & 1 == 1
}

/// Whether the QA_PIXEL value marks the pixel as cloud
pub fn is_cloud(qa_pixel: u16) -> bool {
    (qa_pixel >> CLOUD_BIT) & 1 == 1
}

/// Cloud confidence from the QA_PIXEL value (bits 8-9)
pub fn cloud_confidence(qa_pixel: u16) -> Confidence {
    Confidence::from_bits(((qa_pixel >> CLOUD_CONF_BIT) & 0b11) as u8)
}

/// Cloud shadow confidence from the QA_PIXEL value (bits 10-11)
pub fn cloud_shadow_confidence(qa_pixel: u16) -> Confidence {
    Confidence::from_bits(((qa_pixel >> CLOUD_SHADOW_CONF_BIT) & 0b11) as u8)
}

/// Snow/ice confidence from the QA_PIXEL value (bits 12-13)
pub fn snow_ice_confidence(qa_pixel: u16) -> Confidence {
    Confidence::from_bits(((qa_pixel >> SNOW_ICE_CONF_BIT) & 0b11) as u8)
}

/// Cirrus confidence from the QA_PIXEL value (bits 14-15, Landsat 8-9 only)
pub fn cirrus_confidence(qa_pixel: u16) -> Confidence {
    Confidence::from_bits(((qa_pixel >> CIRRUS_CONF_BIT) & 0b11) as u8)
}

/// Whether the QA_RADSAT value marks the pixel as terrain occluded
/// (Landsat 8-9 only)
pub fn is_terrain_occluded(qa_radsat: u16) -> bool {
    (qa_radsat >> TERRAIN_OCCLUSION_BIT) & 1 == 1
}

/// Whether the QA_RADSAT value marks the pixel as dropped
/// (Landsat 4-7 only)
pub fn is_dropped_pixel(qa_radsat: u16) -> bool {
    (qa_radsat >> DROPPED_PIXEL_BIT) & 1 == 1
}

/// Whether the QA_RADSAT value marks `band` as radiometrically saturated
///
/// Band `n` is flagged at bit `n - 1` for bands 1-11. The Landsat 7 band
/// aliases 61 (low-gain thermal) and 62 (high-gain thermal) map to the
/// band 6 and band 9 bits. Any other band number is a caller error.
pub fn is_saturated(qa_radsat: u16, band: u8) -> Result<bool, BandError> {
    // Landsat 7 thermal band aliases
    let bit_band = match band {
        61 => 6,
        62 => 9,
        b => b,
    };
    if !(1..=11).contains(&bit_band) {
        return Err(BandError::InvalidBand(band));
    }
    Ok((qa_radsat >> (bit_band - 1)) & 1 == 1)
}
