pub mod class;
pub mod confidence;
pub mod pixel_qa;
pub mod sensor;

pub use class::QaClass;
pub use confidence::{AerosolLevel, Confidence};
pub use pixel_qa::PixelQa;
pub use sensor::Sensor;
