//! QA band bit decoders
//!
//! One module per band encoding:
//! - `pixel`: the Level-2 pixel QA band (16-bit, one flag per bit or bit pair)
//! - `level1`: the Level-1 QA_PIXEL and QA_RADSAT bands (16-bit)
//! - `level2`: the surface reflectance QA bands (8-bit LEDAPS cloud QA and
//!   LaSRC aerosol QA)
//!
//! Every function here is a pure shift-and-mask over its argument. Bits
//! outside the documented positions are ignored.

/// Level-1 QA_PIXEL and QA_RADSAT band decoders
pub mod level1;
/// Surface reflectance QA decoders (LEDAPS cloud QA, LaSRC aerosol QA)
pub mod level2;
/// Level-2 pixel QA band decoder
pub mod pixel;
