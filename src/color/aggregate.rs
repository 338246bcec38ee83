//! Representative color extraction
//!
//! Reduces a sampled pixel buffer to one average color with:
//! - Transparency exclusion (near-transparent pixels do not contribute)
//! - Luminance band filtering (near-black/near-white extremes skipped)
//! - Per-channel mean over the surviving pixels
//!
//! Naive full-image averaging is dominated by large uniform backgrounds
//! and overexposed skies; the luminance band favors the mid-tone content
//! palette derivation actually wants.

use crate::constants::filtering;
use crate::error::{Result, ThemeError};
use crate::color::Rgb;
use crate::sampler::PixelBuffer;

/// Computes one representative color from a sampled buffer
pub struct ColorAggregator {
    min_alpha: u8,
    luminance_min: f32,
    luminance_max: f32,
}

impl Default for ColorAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorAggregator {
    /// Create an aggregator with the standard thresholds
    pub fn new() -> Self {
        Self {
            min_alpha: filtering::MIN_ALPHA,
            luminance_min: filtering::LUMINANCE_MIN,
            luminance_max: filtering::LUMINANCE_MAX,
        }
    }

    /// Create an aggregator with custom thresholds
    pub fn with_params(min_alpha: u8, luminance_min: f32, luminance_max: f32) -> Self {
        Self {
            min_alpha,
            luminance_min,
            luminance_max,
        }
    }

    /// Compute the representative average color of `buffer`
    ///
    /// # Errors
    ///
    /// Returns `ThemeError::NoRepresentativeColor` when every pixel is
    /// filtered out (entirely transparent or extreme-luminance input).
    pub fn average_color(&self, buffer: &PixelBuffer) -> Result<Rgb> {
        let mut sum_r: u64 = 0;
        let mut sum_g: u64 = 0;
        let mut sum_b: u64 = 0;
        let mut n: u64 = 0;

        for pixel in buffer.pixels() {
            if pixel.a < self.min_alpha {
                continue;
            }
            let luminance = pixel.rgb().luminance();
            if luminance < self.luminance_min || luminance > self.luminance_max {
                continue;
            }
            sum_r += pixel.r as u64;
            sum_g += pixel.g as u64;
            sum_b += pixel.b as u64;
            n += 1;
        }

        if n == 0 {
            return Err(ThemeError::NoRepresentativeColor);
        }

        Ok(Rgb {
            r: ((sum_r as f64 / n as f64).round()) as u8,
            g: ((sum_g as f64 / n as f64).round()) as u8,
            b: ((sum_b as f64 / n as f64).round()) as u8,
        })
    }
}
