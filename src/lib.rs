//! landsat-qa - Bit-level decoding of Landsat quality assessment bands
//!
//! A pure Rust library for interpreting the per-pixel QA values found in
//! Landsat Level-1 and Level-2 products. Each QA band packs independent
//! quality flags into the bits of a small integer; this crate exposes one
//! semantic predicate or accessor per flag so callers never deal with raw
//! bit offsets and masks.
//!
//! Every operation is a pure function of its integer argument: no state, no
//! allocation, no I/O. Reading a raster band and walking its pixels is the
//! caller's job; this crate decodes one value at a time and is safe to call
//! from any number of threads.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QA band bit decoders (pixel QA, Level-1 QA, surface reflectance QA)
pub mod decoder;
/// Core data structures (Confidence, Sensor, QaClass, PixelQa)
pub mod models;

pub use decoder::level1::BandError;
pub use models::{AerosolLevel, Confidence, PixelQa, QaClass, Sensor};
