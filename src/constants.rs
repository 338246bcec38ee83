//! Tuning constants for theme derivation
//!
//! This module contains the fixed parameters of the derivation pipeline.
//! The threshold values are carried over unchanged from the reference
//! behavior; they are documented here rather than re-derived, since the
//! goal is behavior parity across hosts.

use crate::color::Rgb;

/// Image sampling parameters
pub mod sampling {
    /// Downsample target width in pixels. Height is scaled to preserve
    /// the source aspect ratio.
    pub const TARGET_WIDTH: u32 = 64;

    /// Minimum downsampled height, for extremely wide sources
    pub const MIN_HEIGHT: u32 = 1;

    /// Image reference used when the caller provides none
    pub const DEFAULT_IMAGE_PATH: &str = "bg.jpg";
}

/// Pixel filtering thresholds for average-color estimation
pub mod filtering {
    /// Pixels with alpha below this value are treated as fully
    /// transparent and skipped
    pub const MIN_ALPHA: u8 = 16;

    /// Pixels with luminance below this value (out of 255) are skipped
    /// as near-black shadow regions
    pub const LUMINANCE_MIN: f32 = 20.0;

    /// Pixels with luminance above this value (out of 255) are skipped
    /// as near-white highlight regions
    pub const LUMINANCE_MAX: f32 = 235.0;

    /// Rec. 709 luma weights used for the luminance estimate. This is an
    /// outlier-exclusion heuristic, not a color-accurate measurement.
    pub const LUMA_WEIGHT_R: f32 = 0.2126;
    pub const LUMA_WEIGHT_G: f32 = 0.7152;
    pub const LUMA_WEIGHT_B: f32 = 0.0722;
}

/// Palette derivation parameters (analogous-hue scheme)
pub mod derivation {
    /// Saturation multiplier applied to the primary color
    pub const PRIMARY_SATURATION_BOOST: f32 = 1.1;

    /// Lightness floor for the primary color, so it stays visible as an
    /// accent even over dark imagery
    pub const PRIMARY_LIGHTNESS_FLOOR: f32 = 0.35;

    /// Hue rotation in degrees for the two accents (applied +/-)
    pub const ACCENT_HUE_OFFSET: f32 = 20.0;

    /// Saturation multiplier applied to both accents
    pub const ACCENT_SATURATION_BOOST: f32 = 1.05;

    /// Lightness multiplier for the first (lighter) accent
    pub const ACCENT1_LIGHTNESS_SCALE: f32 = 1.1;

    /// Lightness multiplier for the second (darker) accent
    pub const ACCENT2_LIGHTNESS_SCALE: f32 = 0.9;
}

/// Text contrast selection
pub mod contrast {
    use super::Rgb;

    /// Base lightness above which the image counts as predominantly
    /// light and dark text is selected. The comparison is strict (`>`).
    pub const LIGHT_BACKGROUND_THRESHOLD: f32 = 0.6;

    /// Near-black text for light backgrounds (#0A0A0A)
    pub const TEXT_ON_LIGHT: Rgb = Rgb::new(0x0A, 0x0A, 0x0A);

    /// Dark gray muted text for light backgrounds (#4A4A4A)
    pub const MUTED_ON_LIGHT: Rgb = Rgb::new(0x4A, 0x4A, 0x4A);

    /// Near-white text for dark backgrounds (#EAEAEA)
    pub const TEXT_ON_DARK: Rgb = Rgb::new(0xEA, 0xEA, 0xEA);

    /// Light gray muted text for dark backgrounds (#A3A3A3)
    pub const MUTED_ON_DARK: Rgb = Rgb::new(0xA3, 0xA3, 0xA3);
}
