//! Configuration structures for the theme derivation pipeline.
//!
//! All tunable parameters, organized into logical groups for sampling,
//! pixel filtering, palette derivation, and contrast selection. Defaults
//! mirror the constants in [`crate::constants`].
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use theme_sampler::ThemeConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ThemeConfig::from_json_file(Path::new("theme.json"))?;
//!
//! // Or use defaults
//! let config = ThemeConfig::default();
//! # Ok::<(), theme_sampler::ThemeError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::constants::{contrast, derivation, filtering, sampling};
use crate::error::{Result, ThemeError};

/// Complete configuration for one derivation run.
///
/// Can be serialized to/from JSON for reproducible theming across hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ThemeConfig {
    /// Image sampling configuration
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Pixel filtering configuration
    #[serde(default)]
    pub filtering: FilterConfig,

    /// Palette derivation configuration
    #[serde(default)]
    pub derivation: DerivationConfig,

    /// Text contrast configuration
    #[serde(default)]
    pub contrast: ContrastConfig,
}

/// Downsampling parameters for the image sampler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Downsample target width in pixels
    pub target_width: u32,
}

/// Pixel exclusion thresholds for average-color estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Minimum alpha for a pixel to contribute
    pub min_alpha: u8,

    /// Lower luminance bound (out of 255); darker pixels are skipped
    pub luminance_min: f32,

    /// Upper luminance bound (out of 255); brighter pixels are skipped
    pub luminance_max: f32,
}

/// Palette derivation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivationConfig {
    /// Saturation multiplier for the primary color
    pub primary_saturation_boost: f32,

    /// Lightness floor for the primary color
    pub primary_lightness_floor: f32,

    /// Hue rotation in degrees for the accents (applied +/-)
    pub accent_hue_offset: f32,

    /// Saturation multiplier for both accents
    pub accent_saturation_boost: f32,

    /// Lightness multiplier for the first accent
    pub accent1_lightness_scale: f32,

    /// Lightness multiplier for the second accent
    pub accent2_lightness_scale: f32,
}

/// Text contrast parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastConfig {
    /// Base lightness above which dark text is selected (strict `>`)
    pub light_threshold: f32,

    /// Text color over light backgrounds
    pub text_on_light: Rgb,

    /// Muted text color over light backgrounds
    pub muted_on_light: Rgb,

    /// Text color over dark backgrounds
    pub text_on_dark: Rgb,

    /// Muted text color over dark backgrounds
    pub muted_on_dark: Rgb,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            target_width: sampling::TARGET_WIDTH,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_alpha: filtering::MIN_ALPHA,
            luminance_min: filtering::LUMINANCE_MIN,
            luminance_max: filtering::LUMINANCE_MAX,
        }
    }
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self {
            primary_saturation_boost: derivation::PRIMARY_SATURATION_BOOST,
            primary_lightness_floor: derivation::PRIMARY_LIGHTNESS_FLOOR,
            accent_hue_offset: derivation::ACCENT_HUE_OFFSET,
            accent_saturation_boost: derivation::ACCENT_SATURATION_BOOST,
            accent1_lightness_scale: derivation::ACCENT1_LIGHTNESS_SCALE,
            accent2_lightness_scale: derivation::ACCENT2_LIGHTNESS_SCALE,
        }
    }
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            light_threshold: contrast::LIGHT_BACKGROUND_THRESHOLD,
            text_on_light: contrast::TEXT_ON_LIGHT,
            muted_on_light: contrast::MUTED_ON_LIGHT,
            text_on_dark: contrast::TEXT_ON_DARK,
            muted_on_dark: contrast::MUTED_ON_DARK,
        }
    }
}

impl ThemeConfig {
    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ThemeError::Config` if the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ThemeError::config(format!("failed to read config file: {}", path.display()), e)
        })?;
        serde_json::from_str(&content).map_err(|e| {
            ThemeError::config(
                format!("failed to parse config file: {}", path.display()),
                e,
            )
        })
    }

    /// Save configuration to a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ThemeError::Config` if the file cannot be written.
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            ThemeError::config("failed to serialize configuration", e)
        })?;
        std::fs::write(path, json).map_err(|e| {
            ThemeError::config(
                format!("failed to write config file: {}", path.display()),
                e,
            )
        })
    }
}
