// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{half_block_renderer::{CellEncoder, HalfBlockRenderer},
            render_options::DEFAULT_BIAS};
use crate::{AnscapesResult, ColorMode, RenderOptions, RgbValue, SgrCode,
            rgb_distance_squared};

/// Renders images with 24-bit colors.
pub type RgbImageRenderer = HalfBlockRenderer<RgbEncoder>;

/// Keeps pixels as they are. With a `bias` above zero, a color is only considered
/// changed when its Euclidean distance to the previous one is greater than `bias`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbEncoder {
    pub bias: u32,
}

impl CellEncoder for RgbEncoder {
    type Color = RgbValue;

    const COLOR_MODE: ColorMode = ColorMode::Truecolor;

    fn quantize(&self, argb: u32) -> RgbValue { RgbValue::from(argb) }

    fn differs(&self, prev: RgbValue, next: RgbValue) -> bool {
        let bias = u64::from(self.bias);
        u64::from(rgb_distance_squared(prev, next)) > bias * bias
    }

    fn fg(&self, RgbValue { red, green, blue }: RgbValue) -> SgrCode {
        SgrCode::ForegroundRgb(red, green, blue)
    }

    fn bg(&self, RgbValue { red, green, blue }: RgbValue) -> SgrCode {
        SgrCode::BackgroundRgb(red, green, blue)
    }
}

impl RgbImageRenderer {
    /// # Errors
    ///
    /// Returns [`crate::AnscapesError::InvalidDimensions`] if a target dimension is zero.
    pub fn new(target_width: usize, target_height: usize) -> AnscapesResult<Self> {
        Self::with_bias(target_width, target_height, DEFAULT_BIAS)
    }

    /// # Errors
    ///
    /// Returns [`crate::AnscapesError::InvalidDimensions`] if a target dimension is zero.
    pub fn with_bias(
        target_width: usize,
        target_height: usize,
        bias: u32,
    ) -> AnscapesResult<Self> {
        RenderOptions::new(ColorMode::Truecolor, target_width, target_height).validate()?;
        Ok(Self::new_unchecked(RgbEncoder { bias }, target_width, target_height))
    }

    #[must_use]
    pub fn bias(&self) -> u32 { self.encoder().bias }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ImageRenderer, PixelGrid, assert_eq2};

    #[test]
    fn test_exact_colors() {
        let pixels = vec![0xFF_FF_00_00, 0xFF_FF_00_00, 0xFF_00_00_FF, 0xFF_00_FF_00];
        let grid = PixelGrid::from_argb(2, 2, pixels).unwrap();
        let mut renderer = RgbImageRenderer::new(2, 2).unwrap();

        assert_eq2!(
            renderer.render_string(&grid),
            "\x1b[38;2;255;0;0m\x1b[48;2;0;0;255m▀\x1b[48;2;0;255;0m▀\x1b[0m\n"
        );
    }

    #[test]
    fn test_odd_height() {
        let pixels = vec![0xFF_FF_FF_FF, 0xFF_00_00_00, 0xFF_10_20_30];
        let grid = PixelGrid::from_argb(1, 3, pixels).unwrap();
        let mut renderer = RgbImageRenderer::new(1, 3).unwrap();

        assert_eq2!(
            renderer.render_string(&grid),
            "\x1b[38;2;255;255;255m\x1b[48;2;0;0;0m▀\x1b[0m\n\
             \x1b[38;2;16;32;48m\x1b[48;2;0;0;0m▀\x1b[0m\n"
        );
    }

    #[test]
    fn test_bias_skips_close_colors() {
        // Each cell is compared with the one just before it: 100 -> 105 is 5 away and
        // 105 -> 112 is 7 away, both within a bias of 10. 112 -> 130 is 18 away.
        let pixels = vec![0xFF_64_64_64, 0xFF_69_64_64, 0xFF_70_64_64, 0xFF_82_64_64];
        let grid = PixelGrid::from_argb(4, 1, pixels).unwrap();
        let mut renderer = RgbImageRenderer::with_bias(4, 1, 10).unwrap();
        assert_eq2!(renderer.bias(), 10);

        assert_eq2!(
            renderer.render_string(&grid),
            "\x1b[38;2;100;100;100m\x1b[48;2;0;0;0m▀▀▀\x1b[38;2;130;100;100m▀\x1b[0m\n"
        );
    }

    #[test]
    fn test_bias_is_strict() {
        // Exactly 10 away is not enough.
        let pixels = vec![0xFF_64_64_64, 0xFF_6E_64_64];
        let grid = PixelGrid::from_argb(2, 1, pixels).unwrap();
        let mut renderer = RgbImageRenderer::with_bias(2, 1, 10).unwrap();

        assert_eq2!(
            renderer.render_string(&grid),
            "\x1b[38;2;100;100;100m\x1b[48;2;0;0;0m▀▀\x1b[0m\n"
        );
    }
}
