// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::half_block_renderer::{CellEncoder, HalfBlockRenderer};
use crate::{AnsiValue, AnscapesResult, ColorMode, RenderOptions, RgbValue, SgrCode,
            convert_rgb_into_ansi256};

/// Renders images with the xterm 256-color palette.
pub type Ansi256ImageRenderer = HalfBlockRenderer<Ansi256Encoder>;

/// Quantizes pixels with [`convert_rgb_into_ansi256`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ansi256Encoder;

impl CellEncoder for Ansi256Encoder {
    type Color = AnsiValue;

    const COLOR_MODE: ColorMode = ColorMode::Ansi256;

    fn quantize(&self, argb: u32) -> AnsiValue { convert_rgb_into_ansi256(RgbValue::from(argb)) }

    fn fg(&self, color: AnsiValue) -> SgrCode { SgrCode::ForegroundAnsi256(color.index) }

    fn bg(&self, color: AnsiValue) -> SgrCode { SgrCode::BackgroundAnsi256(color.index) }
}

impl Ansi256ImageRenderer {
    /// # Errors
    ///
    /// Returns [`crate::AnscapesError::InvalidDimensions`] if a target dimension is zero.
    pub fn new(target_width: usize, target_height: usize) -> AnscapesResult<Self> {
        RenderOptions::new(ColorMode::Ansi256, target_width, target_height).validate()?;
        Ok(Self::new_unchecked(Ansi256Encoder, target_width, target_height))
    }
}
