//! Palette derivation and text contrast selection
//!
//! Turns one base color into the small named set of colors the
//! presentation layer consumes:
//! - A primary with slightly boosted saturation and a lightness floor
//! - Two analogous accents, hue-rotated 20 degrees to either side
//! - Text and muted text picked by a two-way lightness threshold
//!
//! All hue arithmetic wraps modulo 360 and all saturation/lightness
//! inputs are clamped before conversion back to RGB.

use serde::{Deserialize, Serialize};

use crate::color::{Hsl, Rgb};
use crate::constants::{contrast, derivation};

/// The named colors consumed by the presentation layer
///
/// Computed once per image load; a new palette overwrites the previous
/// one wholesale, no history is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Main accent color derived from the image
    pub primary: Rgb,
    /// Analogous accent rotated toward warmer hue, slightly lighter
    pub accent1: Rgb,
    /// Analogous accent rotated toward cooler hue, slightly darker
    pub accent2: Rgb,
    /// Foreground text color
    pub text: Rgb,
    /// Dimmed / secondary text color
    pub muted: Rgb,
}

impl Default for Palette {
    /// Startup scheme used before any image has been sampled: a neutral
    /// slate primary with near-white text, so a failed derivation leaves
    /// sensible values in place.
    fn default() -> Self {
        Self {
            primary: Rgb::new(100, 116, 139),
            accent1: Rgb::new(110, 114, 153),
            accent2: Rgb::new(89, 117, 126),
            text: contrast::TEXT_ON_DARK,
            muted: contrast::MUTED_ON_DARK,
        }
    }
}

impl Palette {
    /// Render the palette as CSS custom-property assignments
    ///
    /// The variable set matches what the hosting UI reads: `--primary-600`
    /// and `--accent2` alias the primary color, and the darker derived
    /// accent is exposed as `--accent3`.
    pub fn css_variables(&self) -> String {
        let mut out = String::new();
        for (name, color) in [
            ("--primary", self.primary),
            ("--primary-600", self.primary),
            ("--accent1", self.accent1),
            ("--accent2", self.primary),
            ("--accent3", self.accent2),
            ("--text", self.text),
            ("--muted", self.muted),
        ] {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(&color.css());
            out.push_str(";\n");
        }
        out
    }
}

/// Derives the primary and accent colors from a base HSL color
pub struct PaletteDeriver {
    primary_saturation_boost: f32,
    primary_lightness_floor: f32,
    accent_hue_offset: f32,
    accent_saturation_boost: f32,
    accent1_lightness_scale: f32,
    accent2_lightness_scale: f32,
}

impl Default for PaletteDeriver {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteDeriver {
    /// Create a deriver with the standard analogous-hue parameters
    pub fn new() -> Self {
        Self {
            primary_saturation_boost: derivation::PRIMARY_SATURATION_BOOST,
            primary_lightness_floor: derivation::PRIMARY_LIGHTNESS_FLOOR,
            accent_hue_offset: derivation::ACCENT_HUE_OFFSET,
            accent_saturation_boost: derivation::ACCENT_SATURATION_BOOST,
            accent1_lightness_scale: derivation::ACCENT1_LIGHTNESS_SCALE,
            accent2_lightness_scale: derivation::ACCENT2_LIGHTNESS_SCALE,
        }
    }

    /// Create a deriver with custom parameters
    pub fn with_params(
        primary_saturation_boost: f32,
        primary_lightness_floor: f32,
        accent_hue_offset: f32,
        accent_saturation_boost: f32,
        accent1_lightness_scale: f32,
        accent2_lightness_scale: f32,
    ) -> Self {
        Self {
            primary_saturation_boost,
            primary_lightness_floor,
            accent_hue_offset,
            accent_saturation_boost,
            accent1_lightness_scale,
            accent2_lightness_scale,
        }
    }

    /// Derive `(primary, accent1, accent2)` from the base color
    pub fn derive(&self, base: Hsl) -> (Rgb, Rgb, Rgb) {
        let primary = base
            .scale_saturation(self.primary_saturation_boost)
            .floor_lightness(self.primary_lightness_floor)
            .to_rgb();

        let accent1 = base
            .rotate(self.accent_hue_offset)
            .scale_saturation(self.accent_saturation_boost)
            .scale_lightness(self.accent1_lightness_scale)
            .to_rgb();

        let accent2 = base
            .rotate(-self.accent_hue_offset)
            .scale_saturation(self.accent_saturation_boost)
            .scale_lightness(self.accent2_lightness_scale)
            .to_rgb();

        (primary, accent1, accent2)
    }
}

/// Selects foreground text colors against the sampled background
///
/// A two-way threshold on perceived lightness, not a continuous
/// contrast-ratio computation. Deterministic on purpose.
pub struct ContrastSelector {
    light_threshold: f32,
    text_on_light: Rgb,
    muted_on_light: Rgb,
    text_on_dark: Rgb,
    muted_on_dark: Rgb,
}

impl Default for ContrastSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ContrastSelector {
    /// Create a selector with the standard threshold and text colors
    pub fn new() -> Self {
        Self {
            light_threshold: contrast::LIGHT_BACKGROUND_THRESHOLD,
            text_on_light: contrast::TEXT_ON_LIGHT,
            muted_on_light: contrast::MUTED_ON_LIGHT,
            text_on_dark: contrast::TEXT_ON_DARK,
            muted_on_dark: contrast::MUTED_ON_DARK,
        }
    }

    /// Create a selector with a custom threshold and text colors
    pub fn with_params(
        light_threshold: f32,
        text_on_light: Rgb,
        muted_on_light: Rgb,
        text_on_dark: Rgb,
        muted_on_dark: Rgb,
    ) -> Self {
        Self {
            light_threshold,
            text_on_light,
            muted_on_light,
            text_on_dark,
            muted_on_dark,
        }
    }

    /// Select `(text, muted)` for a background of the given lightness
    ///
    /// Lightness strictly above the threshold selects the dark-on-light
    /// pair; the threshold itself still counts as a dark background.
    pub fn select(&self, lightness: f32) -> (Rgb, Rgb) {
        if lightness > self.light_threshold {
            (self.text_on_light, self.muted_on_light)
        } else {
            (self.text_on_dark, self.muted_on_dark)
        }
    }
}
