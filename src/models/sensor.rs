/// Landsat spacecraft family a QA product came from
///
/// The QA encodings are shared across spacecraft, but a few flags only exist
/// for one family: Landsat 8-9 (OLI/TIRS) carry cirrus confidence and
/// terrain occlusion, while Landsat 4-7 (TM/ETM+) carry the dropped pixel
/// flag instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sensor {
    /// Landsat 4-7 (TM and ETM+)
    L47,
    /// Landsat 8-9 (OLI and TIRS)
    L89,
}

impl Sensor {
    /// Whether this family carries cirrus confidence bits
    pub fn has_cirrus(self) -> bool {
        matches!(self, Sensor::L89)
    }

    /// Whether this family carries the terrain occlusion flag
    pub fn has_terrain_occlusion(self) -> bool {
        matches!(self, Sensor::L89)
    }

    /// Whether this family carries the dropped pixel flag
    pub fn has_dropped_pixel(self) -> bool {
        matches!(self, Sensor::L47)
    }
}
