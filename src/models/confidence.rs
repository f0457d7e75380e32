/// Confidence level decoded from a 2-bit QA field
///
/// Several QA bands carry 2-bit confidence fields (cloud, cloud shadow,
/// snow/ice, cirrus). The four possible bit patterns always mean the same
/// thing: 00 = not checked, 01 = low, 10 = moderate, 11 = high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Confidence {
    /// Condition was not checked (00)
    None = 0,
    /// Low confidence (01)
    Low = 1,
    /// Moderate confidence (10)
    Moderate = 2,
    /// High confidence (11)
    High = 3,
}

impl Confidence {
    /// Decode from the low two bits of `bits` (higher bits are ignored)
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Confidence::None,
            1 => Confidence::Low,
            2 => Confidence::Moderate,
            _ => Confidence::High,
        }
    }

    /// Raw 2-bit field value (0-3)
    pub fn bits(self) -> u8 {
        self as u8
    }
}

/// Aerosol level decoded from the LaSRC aerosol QA band (bits 6-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AerosolLevel {
    /// Aerosol level bits are 00
    None = 0,
    /// Aerosol level bits are 01
    Low = 1,
    /// Aerosol level bits are 10
    Moderate = 2,
    /// Aerosol level bits are 11
    High = 3,
}

impl AerosolLevel {
    /// Decode from the low two bits of `bits` (higher bits are ignored)
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => AerosolLevel::None,
            1 => AerosolLevel::Low,
            2 => AerosolLevel::Moderate,
            _ => AerosolLevel::High,
        }
    }

    /// Raw 2-bit field value (0-3)
    pub fn bits(self) -> u8 {
        self as u8
    }
}
