// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI 256-color palette representation.
//!
//! This provides a good balance between color precision and terminal compatibility.
//! Each index (0-255) maps to a specific color in the palette.

use super::{BasicColor, RgbValue,
            convert::{ansi_constants::ANSI_COLOR_PALETTE, convert_rgb_into_grayscale,
                      find_nearest_basic_color}};
use crate::TransformColor;

/// Represents a color in the ANSI 256-color palette format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct AnsiValue {
    pub index: u8,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl From<AnsiValue> for RgbValue {
    fn from(ansi: AnsiValue) -> Self { ansi.as_rgb() }
}

impl From<RgbValue> for AnsiValue {
    fn from(rgb: RgbValue) -> Self { rgb.as_ansi() }
}

impl TransformColor for AnsiValue {
    fn as_rgb(&self) -> RgbValue { ANSI_COLOR_PALETTE[self.index as usize].into() }

    fn as_ansi(&self) -> AnsiValue { *self }

    fn as_basic(&self) -> BasicColor {
        match BasicColor::from_index(self.index) {
            Some(basic_color) => basic_color,
            None => find_nearest_basic_color(self.as_rgb(), 0),
        }
    }

    fn as_grayscale(&self) -> AnsiValue { convert_rgb_into_grayscale(self.as_rgb()) }
}

impl AnsiValue {
    /// Create a new ANSI color value.
    #[must_use]
    pub const fn new(color: u8) -> Self { Self { index: color } }

    /// Basic ANSI colors (indices 0-15) are the standard 16 terminal colors. Their
    /// actual RGB values depend on the terminal theme.
    #[must_use]
    pub const fn is_basic(&self) -> bool { self.index < 16 }

    /// Extended ANSI colors (indices 16-255):
    /// - Indices 16-231: 6×6×6 RGB color cube (216 colors)
    /// - Indices 232-255: Grayscale ramp (24 shades)
    #[must_use]
    pub const fn is_extended(&self) -> bool { !self.is_basic() }
}
