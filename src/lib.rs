//! # Theme Sampler
//!
//! A Rust crate for deriving UI color themes from background images.
//!
//! This library samples an arbitrary image and derives a small harmonious
//! palette from it by:
//! - Downsampling the image to a fixed-width pixel buffer
//! - Computing a representative average color, excluding transparent and
//!   extreme-luminance pixels
//! - Converting between RGB and HSL without an external color library
//! - Hue-rotating and scaling the base color into a primary plus two
//!   analogous accents
//! - Selecting accessible text colors by perceived lightness
//!
//! Theming is cosmetic: a missing or broken image aborts the run quietly
//! and the previously active palette stays in place.
//!
//! ## Example
//!
//! ```rust,no_run
//! use theme_sampler::{compute_theme, ThemeStore};
//!
//! # async fn demo() -> theme_sampler::Result<()> {
//! let palette = compute_theme("backdrop.jpg").await?;
//! ThemeStore::global().apply(palette);
//! println!("{}", ThemeStore::global().current().primary.css());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod palette;
pub mod sampler;
pub mod store;

pub use color::{ColorAggregator, Hsl, Rgb};
pub use config::ThemeConfig;
pub use error::{Result, ThemeError};
pub use palette::{ContrastSelector, Palette, PaletteDeriver};
pub use sampler::{ImageDecoder, Pixel, PixelBuffer, PixelSource};
pub use store::ThemeStore;

/// Compute a palette from an image reference using the default
/// configuration
///
/// Pure with respect to presentation state: nothing is published. Pass
/// the result to [`ThemeStore::apply`], or use [`init_dynamic_theme`]
/// for the fail-open startup path.
///
/// # Errors
///
/// Returns `ThemeError::ResourceUnavailable` if the image cannot be
/// fetched or decoded, and `ThemeError::NoRepresentativeColor` if every
/// sampled pixel is filtered out.
pub async fn compute_theme(reference: impl Into<PathBuf>) -> Result<Palette> {
    compute_theme_with(reference, &ThemeConfig::default()).await
}

/// Compute a palette from an image reference with explicit configuration
pub async fn compute_theme_with(
    reference: impl Into<PathBuf>,
    config: &ThemeConfig,
) -> Result<Palette> {
    let buffer = sampler::sample(reference, config.sampling.target_width).await?;
    derive_from_buffer(&buffer, config)
}

/// Compute a palette through a caller-provided pixel source
///
/// Synchronous: the caller owns whatever scheduling its source needs.
/// This is the portable seam for hosts whose image decoding is not
/// file-based.
pub fn compute_theme_from_source(
    source: &dyn PixelSource,
    reference: impl Into<PathBuf>,
    config: &ThemeConfig,
) -> Result<Palette> {
    let buffer = source.decode_to_pixels(&reference.into(), config.sampling.target_width)?;
    derive_from_buffer(&buffer, config)
}

/// Derive a palette from an already-sampled pixel buffer
///
/// Everything past the sampler: aggregation, conversion, derivation and
/// contrast selection. Synchronous and total apart from the
/// all-pixels-filtered case.
pub fn derive_from_buffer(buffer: &PixelBuffer, config: &ThemeConfig) -> Result<Palette> {
    let aggregator = ColorAggregator::with_params(
        config.filtering.min_alpha,
        config.filtering.luminance_min,
        config.filtering.luminance_max,
    );
    let base = aggregator.average_color(buffer)?.to_hsl();

    let deriver = PaletteDeriver::with_params(
        config.derivation.primary_saturation_boost,
        config.derivation.primary_lightness_floor,
        config.derivation.accent_hue_offset,
        config.derivation.accent_saturation_boost,
        config.derivation.accent1_lightness_scale,
        config.derivation.accent2_lightness_scale,
    );
    let (primary, accent1, accent2) = deriver.derive(base);

    let selector = ContrastSelector::with_params(
        config.contrast.light_threshold,
        config.contrast.text_on_light,
        config.contrast.muted_on_light,
        config.contrast.text_on_dark,
        config.contrast.muted_on_dark,
    );
    let (text, muted) = selector.select(base.l);

    Ok(Palette {
        primary,
        accent1,
        accent2,
        text,
        muted,
    })
}

/// Derive a theme from a background image and publish it process-wide
///
/// The startup entry point: one asynchronous run per call, awaiting only
/// the image decode. On any failure the run ends quietly and the store
/// keeps its previous palette — theming never degrades the hosting
/// application. Falls back to
/// [`constants::sampling::DEFAULT_IMAGE_PATH`] when `reference` is
/// `None`.
pub async fn init_dynamic_theme(reference: Option<PathBuf>) {
    let reference =
        reference.unwrap_or_else(|| PathBuf::from(constants::sampling::DEFAULT_IMAGE_PATH));
    if let Ok(palette) = compute_theme(reference).await {
        ThemeStore::global().apply(palette);
    }
}
