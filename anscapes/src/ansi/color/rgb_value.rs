// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.
//!
//! This is the most precise color representation supported by modern terminals.

use super::{AnsiValue, BasicColor,
            convert::{convert_rgb_into_ansi256, convert_rgb_into_grayscale,
                      find_nearest_basic_color}};
use crate::{AnscapesError, AnscapesResult, TransformColor};

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

/// Unpack a `0xAARRGGBB` (or `0x00RRGGBB`) value. The alpha byte is ignored.
impl From<u32> for RgbValue {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: u32) -> Self {
        let red = ((value >> 16) & 0xFF) as u8;
        let green = ((value >> 8) & 0xFF) as u8;
        let blue = (value & 0xFF) as u8;
        Self { red, green, blue }
    }
}

impl From<RgbValue> for u32 {
    fn from(rgb: RgbValue) -> Self {
        (u32::from(rgb.red) << 16) | (u32::from(rgb.green) << 8) | u32::from(rgb.blue)
    }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Parse a `#rrggbb` or `rrggbb` hex color.
    ///
    /// # Errors
    ///
    /// Returns [`AnscapesError::InvalidHexColor`] if the input is not exactly 6 hex
    /// digits, with an optional leading `#`.
    pub fn try_from_hex_color(input: &str) -> AnscapesResult<RgbValue> {
        let invalid = || AnscapesError::InvalidHexColor {
            input: input.to_string(),
        };

        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.chars().all(|it| it.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        Ok(Self::from_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TransformColor for RgbValue {
    fn as_rgb(&self) -> RgbValue { *self }

    fn as_ansi(&self) -> AnsiValue { convert_rgb_into_ansi256(*self) }

    fn as_basic(&self) -> BasicColor { find_nearest_basic_color(*self, 0) }

    fn as_grayscale(&self) -> AnsiValue { convert_rgb_into_grayscale(self.as_ansi().as_rgb()) }
}
