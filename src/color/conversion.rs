//! Color space conversion utilities
//!
//! Provides the hand-rolled conversions the derivation pipeline is built
//! on:
//! - RGB to HSL and back (60-degree hue sectors, chroma form)
//! - Luminance estimation for outlier filtering
//! - Hex and CSS string representations
//!
//! The conversions target "good enough, fast, dependency-free" palette
//! work, not colorimetric accuracy; no CIE spaces or ICC handling.

use serde::{Deserialize, Serialize};

use crate::constants::filtering;
use crate::error::{Result, ThemeError};

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color in cylindrical hue/saturation/lightness form
///
/// Hue is in degrees within `[0, 360)`; saturation and lightness are
/// fractions within `[0, 1]`. Intermediate only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Rgb {
    /// Create a color from 8-bit channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceptual luminance estimate in `[0, 255]` using Rec. 709 luma
    /// weights. Used only as an outlier-exclusion heuristic.
    pub fn luminance(self) -> f32 {
        filtering::LUMA_WEIGHT_R * self.r as f32
            + filtering::LUMA_WEIGHT_G * self.g as f32
            + filtering::LUMA_WEIGHT_B * self.b as f32
    }

    /// Convert to HSL
    ///
    /// Achromatic colors (equal channels) report hue 0 and saturation 0.
    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: (h * 60.0).rem_euclid(360.0),
            s,
            l,
        }
    }

    /// Hexadecimal representation (e.g., "#FF8800")
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS functional representation (e.g., "rgb(255, 136, 0)")
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Parse a hexadecimal color string ("#RRGGBB" or "RRGGBB")
    ///
    /// # Errors
    ///
    /// Returns `ThemeError::InvalidColor` if the string is not six hex
    /// digits after an optional leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return Err(ThemeError::InvalidColor {
                reason: format!("expected 6 hex digits, got {}", hex.len()),
            });
        }

        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| ThemeError::InvalidColor {
                reason: format!("bad hex digit: {e}"),
            })
        };

        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }
}

impl Hsl {
    /// Convert to 8-bit RGB
    ///
    /// Hue is wrapped into `[0, 360)` and saturation/lightness clamped to
    /// `[0, 1]` first, so the conversion is total over any input.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0);
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (h / 60.0) as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb {
            r: ((r + m) * 255.0).round() as u8,
            g: ((g + m) * 255.0).round() as u8,
            b: ((b + m) * 255.0).round() as u8,
        }
    }

    /// Rotate the hue by `degrees`, wrapping into `[0, 360)`
    pub fn rotate(self, degrees: f32) -> Self {
        Self {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }

    /// Multiply saturation by `factor`, clamped to `[0, 1]`
    pub fn scale_saturation(self, factor: f32) -> Self {
        Self {
            s: (self.s * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Multiply lightness by `factor`, clamped to `[0, 1]`
    pub fn scale_lightness(self, factor: f32) -> Self {
        Self {
            l: (self.l * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Raise lightness to at least `min`, clamped to `[0, 1]`
    pub fn floor_lightness(self, min: f32) -> Self {
        Self {
            l: self.l.max(min).clamp(0.0, 1.0),
            ..self
        }
    }
}
