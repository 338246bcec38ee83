//! Color representation and analysis module
//!
//! This module handles RGB/HSL conversions and the reduction of sampled
//! pixel buffers to one representative color value.

pub mod aggregate;
pub mod conversion;

pub use aggregate::ColorAggregator;
pub use conversion::{Hsl, Rgb};
