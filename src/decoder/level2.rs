//! Surface reflectance QA decoders
//!
//! Surface reflectance processing attaches an 8-bit QA band whose layout
//! depends on the correction algorithm: LEDAPS for Landsat 4-7, LaSRC for
//! Landsat 8-9. Unlike the pixel QA decoder these are defined as masks
//! rather than bit positions, matching how the product documents them.

/// LEDAPS cloud QA band (Landsat 4-7 surface reflectance)
pub mod ledaps {
    /// Dark dense vegetation flag (bit 0)
    pub const DDV_BIT: u8 = 0x01;
    /// Cloud flag (bit 1)
    pub const CLOUD_BIT: u8 = 0x02;
    /// Cloud shadow flag (bit 2)
    pub const CLOUD_SHADOW_BIT: u8 = 0x04;
    /// Adjacent to cloud flag (bit 3)
    pub const ADJACENT_CLOUD_BIT: u8 = 0x08;
    /// Snow flag (bit 4)
    pub const SNOW_BIT: u8 = 0x10;
    /// Land/water flag (bit 5, 1 = land, 0 = water)
    pub const LAND_WATER_BIT: u8 = 0x20;

    /// Whether the pixel is dark dense vegetation (DDV)
    pub fn is_ddv(qa: u8) -> bool {
        qa & DDV_BIT != 0
    }

    /// Whether the pixel is cloud
    pub fn is_cloud(qa: u8) -> bool {
        qa & CLOUD_BIT != 0
    }

    /// Whether the pixel is cloud shadow
    pub fn is_cloud_shadow(qa: u8) -> bool {
        qa & CLOUD_SHADOW_BIT != 0
    }

    /// Whether the pixel is adjacent to a cloud
    pub fn is_adjacent_cloud(qa: u8) -> bool {
        qa & ADJACENT_CLOUD_BIT != 0
    }

    /// Whether the pixel is snow
    pub fn is_snow(qa: u8) -> bool {
        qa & SNOW_BIT != 0
    }

    /// Whether the pixel is land (true) or water (false)
    pub fn is_land(qa: u8) -> bool {
        qa & LAND_WATER_BIT != 0
    }
}

/// LaSRC aerosol QA band (Landsat 8-9 surface reflectance)
pub mod lasrc {
    use crate::models::AerosolLevel;

    /// Fill flag (bit 0)
    pub const FILL_BIT: u8 = 0x01;
    /// Valid aerosol retrieval flag (bit 1)
    pub const VALID_AEROSOL_RET_BIT: u8 = 0x02;
    /// Water flag (bit 2)
    pub const WATER_BIT: u8 = 0x04;
    /// Cloud or cirrus flag (bit 3)
    pub const CLOUD_CIRRUS_BIT: u8 = 0x08;
    /// Cloud shadow flag (bit 4)
    pub const CLOUD_SHADOW_BIT: u8 = 0x10;
    /// Aerosol interpolation flag (bit 5)
    pub const AEROSOL_INTERP_BIT: u8 = 0x20;
    /// Aerosol level field mask (bits 6-7)
    pub const AEROSOL_LEVEL_BITS: u8 = 0xC0;
    /// Low bit of the aerosol level field
    pub const AEROSOL_LEVEL_BIT: u8 = 6;

    /// Whether the pixel is fill
    pub fn is_fill(qa: u8) -> bool {
        qa & FILL_BIT != 0
    }

    /// Whether the aerosol retrieval for the pixel is valid
    pub fn is_valid_aerosol_retrieval(qa: u8) -> bool {
        qa & VALID_AEROSOL_RET_BIT != 0
    }

    /// Whether the pixel is water
    pub fn is_water(qa: u8) -> bool {
        qa & WATER_BIT != 0
    }

    /// Whether the pixel is cloud or cirrus
    pub fn is_cloud_cirrus(qa: u8) -> bool {
        qa & CLOUD_CIRRUS_BIT != 0
    }

    /// Whether the pixel is cloud shadow
    pub fn is_cloud_shadow(qa: u8) -> bool {
        qa & CLOUD_SHADOW_BIT != 0
    }

    /// Whether the aerosol value for the pixel was interpolated
    pub fn is_aerosol_interpolated(qa: u8) -> bool {
        qa & AEROSOL_INTERP_BIT != 0
    }

    /// Aerosol level for the pixel (bits 6-7)
    pub fn aerosol_level(qa: u8) -> AerosolLevel {
        AerosolLevel::from_bits((qa & AEROSOL_LEVEL_BITS) >> AEROSOL_LEVEL_BIT)
    }
}
