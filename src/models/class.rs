use crate::decoder::pixel;

/// Class-based QA value
///
/// The class-based QA band collapses the pixel QA bit flags into a single
/// class code per pixel. Codes 0-4 are the defined classes; 255 marks fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QaClass {
    /// Clear pixel (0)
    Clear = 0,
    /// Water pixel (1)
    Water = 1,
    /// Cloud shadow pixel (2)
    CloudShadow = 2,
    /// Snow pixel (3)
    Snow = 3,
    /// Cloud pixel (4)
    Cloud = 4,
    /// Fill pixel (255)
    Fill = 255,
}

impl QaClass {
    /// Look up a class by its band value
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(QaClass::Clear),
            1 => Some(QaClass::Water),
            2 => Some(QaClass::CloudShadow),
            3 => Some(QaClass::Snow),
            4 => Some(QaClass::Cloud),
            255 => Some(QaClass::Fill),
            _ => None,
        }
    }

    /// The band value for this class
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Collapse a pixel QA value to its class
    ///
    /// A pixel QA value can have several condition bits set at once; the
    /// class band keeps one. Fill overrides everything, then cloud, snow,
    /// cloud shadow and water in that order. A value with none of those
    /// bits set is Clear.
    pub fn from_pixel_qa(qa: u16) -> Self {
        if pixel::is_fill(qa) {
            QaClass::Fill
        } else if pixel::is_cloud(qa) {
            QaClass::Cloud
        } else if pixel::is_snow(qa) {
            QaClass::Snow
        } else if pixel::is_cloud_shadow(qa) {
            QaClass::CloudShadow
        } else if pixel::is_water(qa) {
            QaClass::Water
        } else {
            QaClass::Clear
        }
    }
}
