// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{half_block_renderer::{CellEncoder, HalfBlockRenderer},
            render_options::DEFAULT_THRESHOLD};
use crate::{AnscapesResult, BasicColor, ColorMode, RenderOptions, RgbValue, SgrCode,
            find_nearest_basic_color};

/// Renders images with the 16 basic colors.
pub type AnsiImageRenderer = HalfBlockRenderer<BasicColorEncoder>;

/// Quantizes pixels with [`find_nearest_basic_color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicColorEncoder {
    pub threshold: u32,
}

impl CellEncoder for BasicColorEncoder {
    type Color = BasicColor;

    const COLOR_MODE: ColorMode = ColorMode::Ansi16;

    fn quantize(&self, argb: u32) -> BasicColor {
        find_nearest_basic_color(RgbValue::from(argb), self.threshold)
    }

    fn fg(&self, color: BasicColor) -> SgrCode { SgrCode::ForegroundBasic(color) }

    fn bg(&self, color: BasicColor) -> SgrCode { SgrCode::BackgroundBasic(color) }
}

impl AnsiImageRenderer {
    /// # Errors
    ///
    /// Returns [`crate::AnscapesError::InvalidDimensions`] if a target dimension is zero.
    pub fn new(target_width: usize, target_height: usize) -> AnscapesResult<Self> {
        Self::with_threshold(target_width, target_height, DEFAULT_THRESHOLD)
    }

    /// # Errors
    ///
    /// Returns [`crate::AnscapesError::InvalidDimensions`] if a target dimension is zero.
    pub fn with_threshold(
        target_width: usize,
        target_height: usize,
        threshold: u32,
    ) -> AnscapesResult<Self> {
        RenderOptions::new(ColorMode::Ansi16, target_width, target_height).validate()?;
        Ok(Self::new_unchecked(
            BasicColorEncoder { threshold },
            target_width,
            target_height,
        ))
    }

    #[must_use]
    pub fn threshold(&self) -> u32 { self.encoder().threshold }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ImageRenderer, PixelGrid, assert_eq2};

    fn argb(basic_color: BasicColor) -> u32 { 0xFF_00_00_00 | u32::from(basic_color.rgb()) }

    #[test]
    fn test_two_rows_of_pixels_make_one_row_of_cells() {
        let pixels = vec![
            argb(BasicColor::Red),
            argb(BasicColor::Red),
            argb(BasicColor::Blue),
            argb(BasicColor::Green),
        ];
        let grid = PixelGrid::from_argb(2, 2, pixels).unwrap();
        let mut renderer = AnsiImageRenderer::new(2, 2).unwrap();

        assert_eq2!(
            renderer.render_string(&grid),
            "\x1b[31m\x1b[44m▀\x1b[42m▀\x1b[0m\n"
        );
    }

    #[test]
    fn test_odd_height_pads_with_black_and_forgets_previous_colors() {
        let pixels = vec![
            argb(BasicColor::White),
            argb(BasicColor::Black),
            argb(BasicColor::White),
        ];
        let grid = PixelGrid::from_argb(1, 3, pixels).unwrap();
        let mut renderer = AnsiImageRenderer::new(1, 3).unwrap();

        assert_eq2!(
            renderer.render_string(&grid),
            "\x1b[37m\x1b[40m▀\x1b[0m\n\x1b[37m\x1b[40m▀\x1b[0m\n"
        );
    }

    #[test]
    fn test_quantizes_to_nearest() {
        // (200, 10, 10) is nearest to Red.
        let grid = PixelGrid::from_argb(1, 2, vec![0xFF_C8_0A_0A, 0xFF_00_00_00]).unwrap();
        let mut renderer = AnsiImageRenderer::with_threshold(1, 2, 0).unwrap();
        assert_eq2!(renderer.threshold(), 0);
        assert_eq2!(renderer.render_string(&grid), "\x1b[31m\x1b[40m▀\x1b[0m\n");
    }

    #[test]
    fn test_resizes_to_target() {
        let grid = PixelGrid::from_argb(4, 4, vec![argb(BasicColor::Cyan); 16]).unwrap();
        let mut renderer = AnsiImageRenderer::new(2, 2).unwrap();
        assert_eq2!(
            renderer.render_string(&grid),
            "\x1b[36m\x1b[46m▀▀\x1b[0m\n"
        );
    }

    #[test]
    fn test_buffers_are_reused() {
        let mut renderer = AnsiImageRenderer::new(1, 2).unwrap();
        let first = PixelGrid::from_argb(1, 2, vec![argb(BasicColor::Red); 2]).unwrap();
        let second = PixelGrid::from_argb(1, 2, vec![argb(BasicColor::Blue); 2]).unwrap();

        assert_eq2!(renderer.render_string(&first), "\x1b[31m\x1b[41m▀\x1b[0m\n");
        assert_eq2!(renderer.render_raw(&second), "\x1b[34m\x1b[44m▀\x1b[0m\n");
    }
}
