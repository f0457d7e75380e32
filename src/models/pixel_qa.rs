use crate::decoder::pixel;
use crate::models::Confidence;

/// Fully decoded Level-2 pixel QA value
///
/// A convenience over calling the individual predicates in
/// [`crate::decoder::pixel`] when a caller wants every flag at once. The
/// struct is plain data; nothing here refers back to the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelQa {
    /// Pixel is fill
    pub fill: bool,
    /// Pixel is clear
    pub clear: bool,
    /// Pixel is water
    pub water: bool,
    /// Pixel is cloud shadow
    pub cloud_shadow: bool,
    /// Pixel is snow
    pub snow: bool,
    /// Pixel is cloud
    pub cloud: bool,
    /// Cloud confidence (bits 6-7)
    pub cloud_confidence: Confidence,
    /// Cirrus confidence (bits 8-9, Landsat 8-9 only)
    pub cirrus_confidence: Confidence,
    /// Pixel is terrain occluded (bit 10, Landsat 8-9 only)
    pub terrain_occluded: bool,
}

impl PixelQa {
    /// Decode every flag of a pixel QA value
    pub fn decode(qa: u16) -> Self {
        Self {
            fill: pixel::is_fill(qa),
            clear: pixel::is_clear(qa),
            water: pixel::is_water(qa),
            cloud_shadow: pixel::is_cloud_shadow(qa),
            snow: pixel::is_snow(qa),
            cloud: pixel::is_cloud(qa),
            cloud_confidence: pixel::cloud_confidence(qa),
            cirrus_confidence: pixel::cirrus_confidence(qa),
            terrain_occluded: pixel::is_terrain_occluded(qa),
        }
    }
}

impl From<u16> for PixelQa {
    fn from(qa: u16) -> Self {
        Self::decode(qa)
    }
}
