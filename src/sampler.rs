//! Image sampling for average-color estimation
//!
//! Decodes an image reference and produces a small downsampled RGBA pixel
//! buffer of fixed target width, with height scaled to preserve the source
//! aspect ratio. Bilinear resampling is sufficient here: the buffer only
//! feeds average-color estimation, never display.
//!
//! Decoding is environment-specific, so it sits behind the narrow
//! [`PixelSource`] capability trait; everything downstream of the sampler
//! is pure arithmetic and stays portable across hosting environments.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::ImageReader;

use crate::color::Rgb;
use crate::constants::sampling;
use crate::error::{Result, ThemeError};

/// A single RGBA pixel read from a sampled buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// The opaque color channels of this pixel
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// A downsampled RGBA pixel buffer in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes
    ///
    /// # Errors
    ///
    /// Returns `ThemeError::InvalidBuffer` if `data` is not exactly
    /// `width * height * 4` bytes or either dimension is zero.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ThemeError::InvalidBuffer {
                reason: format!("zero-sized buffer: {width}x{height}"),
            });
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(ThemeError::InvalidBuffer {
                reason: format!(
                    "data length {} does not match {width}x{height} RGBA (expected {expected})",
                    data.len()
                ),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in the buffer
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Iterate over the buffer's pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.data.chunks_exact(4).map(|chunk| Pixel {
            r: chunk[0],
            g: chunk[1],
            b: chunk[2],
            a: chunk[3],
        })
    }
}

/// Capability interface for decoding an image reference into pixels
///
/// Implementations own the environment-specific parts of sampling: how a
/// reference is fetched and decoded. A network-backed source is expected
/// to fetch without credentials and without sending a referrer; the
/// default [`ImageDecoder`] reads the local filesystem, where neither
/// applies.
pub trait PixelSource {
    /// Decode `reference` and downsample to `target_width` columns
    ///
    /// # Errors
    ///
    /// Returns `ThemeError::ResourceUnavailable` when the reference
    /// cannot be fetched or decoded.
    fn decode_to_pixels(&self, reference: &Path, target_width: u32) -> Result<PixelBuffer>;
}

/// Default file-backed pixel source using the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageDecoder;

impl ImageDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl PixelSource for ImageDecoder {
    fn decode_to_pixels(&self, reference: &Path, target_width: u32) -> Result<PixelBuffer> {
        if target_width == 0 {
            return Err(ThemeError::InvalidBuffer {
                reason: "target width must be at least 1".into(),
            });
        }

        let reader = ImageReader::open(reference).map_err(|e| {
            ThemeError::resource_unavailable(
                format!("failed to open image: {}", reference.display()),
                e,
            )
        })?;

        let img = reader.decode().map_err(|e| {
            ThemeError::resource_unavailable(
                format!("failed to decode image: {}", reference.display()),
                e,
            )
        })?;

        let (src_width, src_height) = (img.width(), img.height());
        if src_width == 0 || src_height == 0 {
            return Err(ThemeError::unavailable(format!(
                "image has no pixels: {}",
                reference.display()
            )));
        }

        let target_height = ((src_height as f32 / src_width as f32) * target_width as f32)
            .round()
            .max(sampling::MIN_HEIGHT as f32) as u32;

        let resized = image::imageops::resize(
            &img.to_rgba8(),
            target_width,
            target_height,
            FilterType::Triangle,
        );

        PixelBuffer::new(target_width, target_height, resized.into_raw())
    }
}

/// Asynchronously sample an image into a downsampled pixel buffer
///
/// The decode runs on the blocking thread pool; this await is the only
/// suspension point in the derivation pipeline.
pub async fn sample(reference: impl Into<PathBuf>, target_width: u32) -> Result<PixelBuffer> {
    let reference = reference.into();
    tokio::task::spawn_blocking(move || {
        ImageDecoder::new().decode_to_pixels(&reference, target_width)
    })
    .await
    .map_err(|e| ThemeError::resource_unavailable("sampling task failed", e))?
}
