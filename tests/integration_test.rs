//! Integration tests for the complete theme derivation pipeline
//!
//! These tests validate the end-to-end workflow including:
//! - Image loading and downsampling
//! - Representative color aggregation with outlier filtering
//! - RGB/HSL conversion and palette derivation
//! - Contrast selection
//! - Store publication and the fail-open startup path
//!
//! Synthetic test images are generated into a temp directory, so no
//! checked-in assets are required.

use std::path::PathBuf;

use theme_sampler::{
    compute_theme, compute_theme_with, constants, derive_from_buffer, init_dynamic_theme,
    Palette, PixelBuffer, ThemeConfig, ThemeError, ThemeStore,
};

fn fixture_dir() -> PathBuf {
    let dir = std::env::temp_dir().join("theme_sampler_integration");
    std::fs::create_dir_all(&dir).expect("fixture dir");
    dir
}

fn write_solid_png(name: &str, width: u32, height: u32, rgba: [u8; 4]) -> PathBuf {
    let path = fixture_dir().join(name);
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    img.save(&path).expect("write fixture image");
    path
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_compute_theme_file_not_found() {
    let result = compute_theme("nonexistent_backdrop.jpg").await;

    let err = result.unwrap_err();
    assert!(matches!(err, ThemeError::ResourceUnavailable { .. }));
    assert!(err.is_unavailable());
}

#[tokio::test]
async fn test_compute_theme_not_an_image() {
    let path = fixture_dir().join("not_an_image.png");
    std::fs::write(&path, b"plain text, not a png").unwrap();

    let err = compute_theme(path).await.unwrap_err();
    assert!(matches!(err, ThemeError::ResourceUnavailable { .. }));
}

#[tokio::test]
async fn test_all_white_image_has_no_representative_color() {
    let path = write_solid_png("all_white.png", 80, 60, [255, 255, 255, 255]);

    let err = compute_theme(path).await.unwrap_err();
    assert!(matches!(err, ThemeError::NoRepresentativeColor));
}

#[tokio::test]
async fn test_all_black_image_has_no_representative_color() {
    let path = write_solid_png("all_black.png", 80, 60, [0, 0, 0, 255]);

    let err = compute_theme(path).await.unwrap_err();
    assert!(matches!(err, ThemeError::NoRepresentativeColor));
}

#[tokio::test]
async fn test_fully_transparent_image_has_no_representative_color() {
    let path = write_solid_png("transparent.png", 32, 32, [128, 128, 128, 0]);

    let err = compute_theme(path).await.unwrap_err();
    assert!(matches!(err, ThemeError::NoRepresentativeColor));
}

// ============================================================================
// End-to-End Scenario Tests
// ============================================================================

#[tokio::test]
async fn test_solid_mid_blue_scenario() {
    // A solid RGB(40, 80, 200) image: base HSL ~ (225, 0.67, 0.47)
    let path = write_solid_png("mid_blue.png", 128, 96, [40, 80, 200, 255]);

    let palette = compute_theme(path).await.unwrap();

    let primary = palette.primary.to_hsl();
    assert!(
        (primary.h - 225.0).abs() < 2.0,
        "primary should keep the base hue, got {}",
        primary.h
    );
    assert!(primary.s > 0.6, "primary stays saturated");
    assert!(primary.l >= 0.35, "primary lightness is floored");

    let accent1 = palette.accent1.to_hsl();
    let accent2 = palette.accent2.to_hsl();
    assert!((accent1.h - 245.0).abs() < 2.0, "accent1 hue {}", accent1.h);
    assert!((accent2.h - 205.0).abs() < 2.0, "accent2 hue {}", accent2.h);

    // Base lightness 0.47 is below the 0.6 threshold: near-white text
    assert_eq!(palette.text, constants::contrast::TEXT_ON_DARK);
    assert_eq!(palette.muted, constants::contrast::MUTED_ON_DARK);
}

#[tokio::test]
async fn test_light_image_selects_dark_text() {
    let path = write_solid_png("light_gray.png", 64, 64, [220, 220, 220, 255]);

    let palette = compute_theme(path).await.unwrap();
    assert_eq!(palette.text, constants::contrast::TEXT_ON_LIGHT);
    assert_eq!(palette.muted, constants::contrast::MUTED_ON_LIGHT);
}

#[tokio::test]
async fn test_custom_sampling_width() {
    let path = write_solid_png("narrow_sample.png", 200, 100, [40, 80, 200, 255]);

    let mut config = ThemeConfig::default();
    config.sampling.target_width = 8;

    let palette = compute_theme_with(path, &config).await.unwrap();
    assert!((palette.primary.to_hsl().h - 225.0).abs() < 2.0);
}

#[tokio::test]
async fn test_mixed_image_averages_midtones_only() {
    // Half black (filtered out), half mid-green: the average is the green
    let path = fixture_dir().join("half_black_half_green.png");
    let mut img = image::RgbaImage::new(64, 64);
    for (_, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = if y < 32 {
            image::Rgba([0, 0, 0, 255])
        } else {
            image::Rgba([60, 160, 70, 255])
        };
    }
    img.save(&path).unwrap();

    let palette = compute_theme(path).await.unwrap();
    let primary = palette.primary.to_hsl();
    // Hue of RGB(60, 160, 70) is ~126: green, not darkened toward black
    assert!(
        (primary.h - 126.0).abs() < 4.0,
        "expected green primary, got hue {}",
        primary.h
    );
}

// ============================================================================
// Store Publication Tests
// ============================================================================

#[tokio::test]
async fn test_apply_publishes_all_values_together() {
    let path = write_solid_png("store_blue.png", 32, 32, [40, 80, 200, 255]);

    let store = ThemeStore::new();
    let mut rx = store.subscribe();

    let palette = compute_theme(path).await.unwrap();
    store.apply(palette.clone());

    rx.changed().await.unwrap();
    let seen = rx.borrow_and_update().clone();
    assert_eq!(seen, palette);
}

#[tokio::test]
async fn test_failed_derivation_leaves_store_untouched() {
    let store = ThemeStore::new();
    let before = store.current();

    // Simulate the fail-open startup path against a private store
    if let Ok(palette) = compute_theme("missing_backdrop.jpg").await {
        store.apply(palette);
    }

    assert_eq!(store.current(), before);
}

#[tokio::test]
async fn test_init_dynamic_theme_missing_default_is_silent() {
    // No bg.jpg in the working directory: the call must return without
    // panicking and without publishing a new palette revision
    let rx = ThemeStore::global().subscribe();
    init_dynamic_theme(None).await;
    assert!(!rx.has_changed().unwrap());
}

// ============================================================================
// Buffer-Level Pipeline Tests
// ============================================================================

#[test]
fn test_derive_from_buffer_without_io() {
    let data = [40u8, 80, 200, 255].repeat(64);
    let buffer = PixelBuffer::new(8, 8, data).unwrap();

    let palette = derive_from_buffer(&buffer, &ThemeConfig::default()).unwrap();
    assert!((palette.primary.to_hsl().h - 225.0).abs() < 2.0);
}

#[test]
fn test_palette_json_shape() {
    let palette = Palette::default();
    let json = serde_json::to_value(&palette).unwrap();

    for key in ["primary", "accent1", "accent2", "text", "muted"] {
        assert!(json.get(key).is_some(), "palette JSON missing {key}");
    }
}
