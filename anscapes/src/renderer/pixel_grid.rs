// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use image::{DynamicImage, RgbaImage};

use crate::{AnscapesError, AnscapesResult, RgbValue};

/// Packed `0xAARRGGBB` pixels, row-major.
///
/// This is what the renderers read. Build it from an [`image`] crate image, from ARGB
/// values, or from a BGRA byte buffer with premultiplied alpha (the layout most video
/// decoders and screen capture APIs hand out).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelGrid {
    /// # Errors
    ///
    /// - [`AnscapesError::InvalidDimensions`] if `width` or `height` is zero.
    /// - [`AnscapesError::PixelCountMismatch`] if `pixels` doesn't hold exactly
    ///   `width * height` values.
    pub fn from_argb(width: usize, height: usize, pixels: Vec<u32>) -> AnscapesResult<Self> {
        check_dimensions(width, height)?;
        let expected = width * height;
        if pixels.len() != expected {
            return Err(AnscapesError::PixelCountMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Read 4 bytes per pixel in B, G, R, A order, where the color channels are
    /// premultiplied by alpha. Fully transparent and fully opaque pixels are kept as is,
    /// the others are un-premultiplied.
    ///
    /// # Errors
    ///
    /// - [`AnscapesError::InvalidDimensions`] if `width` or `height` is zero.
    /// - [`AnscapesError::PixelCountMismatch`] if `bytes` doesn't hold exactly
    ///   `width * height * 4` bytes.
    pub fn from_bgra_premultiplied(
        width: usize,
        height: usize,
        bytes: &[u8],
    ) -> AnscapesResult<Self> {
        check_dimensions(width, height)?;
        let expected = width * height * 4;
        if bytes.len() != expected {
            return Err(AnscapesError::PixelCountMismatch {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }

        let pixels = bytes
            .chunks_exact(4)
            .map(|bgra| {
                let [b, g, r, a] = [bgra[0], bgra[1], bgra[2], bgra[3]];
                let (r, g, b) = if a > 0 && a < u8::MAX {
                    (unpremultiply(r, a), unpremultiply(g, a), unpremultiply(b, a))
                } else {
                    (r, g, b)
                };
                pack_argb(a, r, g, b)
            })
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// # Errors
    ///
    /// Returns [`AnscapesError::InvalidDimensions`] if the image is empty.
    pub fn from_rgba_image(image: &RgbaImage) -> AnscapesResult<Self> {
        let (width, height) = (image.width() as usize, image.height() as usize);
        check_dimensions(width, height)?;
        let pixels = image
            .pixels()
            .map(|pixel| {
                let [r, g, b, a] = pixel.0;
                pack_argb(a, r, g, b)
            })
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Converts the image to RGBA first.
    ///
    /// # Errors
    ///
    /// Returns [`AnscapesError::InvalidDimensions`] if the image is empty.
    pub fn from_dynamic_image(image: &DynamicImage) -> AnscapesResult<Self> {
        Self::from_rgba_image(&image.to_rgba8())
    }

    #[must_use]
    pub fn width(&self) -> usize { self.width }

    #[must_use]
    pub fn height(&self) -> usize { self.height }

    #[must_use]
    pub fn pixels(&self) -> &[u32] { &self.pixels }

    /// The pixel at column `x`, row `y`, or [`None`] if it's out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            self.pixels.get(y * self.width + x).copied()
        } else {
            None
        }
    }

    /// Color of the pixel at `x`, `y`, ignoring alpha.
    #[must_use]
    pub fn rgb(&self, x: usize, y: usize) -> Option<RgbValue> { self.get(x, y).map(RgbValue::from) }
}

fn check_dimensions(width: usize, height: usize) -> AnscapesResult<()> {
    if width == 0 || height == 0 {
        return Err(AnscapesError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// `channel * 255 / alpha`, rounded, and saturated at 255.
#[allow(clippy::cast_possible_truncation)]
fn unpremultiply(channel: u8, alpha: u8) -> u8 {
    if channel >= alpha {
        return u8::MAX;
    }
    let (channel, alpha) = (u32::from(channel), u32::from(alpha));
    ((channel * 255 + alpha / 2) / alpha) as u8
}

const fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}
