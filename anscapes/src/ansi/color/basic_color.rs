// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The 16 basic ANSI colors, supported by practically every color terminal.
//!
//! The RGB values used to approximate them are arbitrary. Terminals theme these colors
//! freely, so these values are picked to give good results when quantizing images, and
//! they are not the xterm defaults (see [`SYSTEM_COLORS`] for those).
//!
//! [`SYSTEM_COLORS`]: super::ansi_constants::SYSTEM_COLORS

use strum_macros::{Display, EnumCount};

use super::{AnsiValue, RgbValue, convert::convert_rgb_into_grayscale};
use crate::TransformColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl BasicColor {
    /// All colors, in palette order. Quantization visits them in this order.
    pub const ALL: [BasicColor; 16] = [
        BasicColor::Black,
        BasicColor::Red,
        BasicColor::Green,
        BasicColor::Yellow,
        BasicColor::Blue,
        BasicColor::Magenta,
        BasicColor::Cyan,
        BasicColor::White,
        BasicColor::BrightBlack,
        BasicColor::BrightRed,
        BasicColor::BrightGreen,
        BasicColor::BrightYellow,
        BasicColor::BrightBlue,
        BasicColor::BrightMagenta,
        BasicColor::BrightCyan,
        BasicColor::BrightWhite,
    ];

    /// Position in the 256-color palette (0..=15).
    #[must_use]
    pub const fn index(self) -> u8 { self as u8 }

    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 16 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_bright(self) -> bool { self.index() >= 8 }

    /// SGR parameter that selects this color as the foreground (30-37, 90-97).
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        if self.is_bright() {
            90 + self.index() - 8
        } else {
            30 + self.index()
        }
    }

    /// SGR parameter that selects this color as the background (40-47, 100-107).
    #[must_use]
    pub const fn bg_code(self) -> u8 { self.fg_code() + 10 }

    /// Inverse of [`Self::fg_code`].
    #[must_use]
    pub const fn from_fg_code(code: u8) -> Option<Self> {
        match code {
            30..=37 => Self::from_index(code - 30),
            90..=97 => Self::from_index(code - 90 + 8),
            _ => None,
        }
    }

    /// Inverse of [`Self::bg_code`].
    #[must_use]
    pub const fn from_bg_code(code: u8) -> Option<Self> {
        match code {
            40..=47 | 100..=107 => Self::from_fg_code(code - 10),
            _ => None,
        }
    }

    /// RGB approximation used for quantization.
    #[rustfmt::skip]
    #[must_use]
    pub const fn rgb(self) -> RgbValue {
        match self {
            BasicColor::Black         => RgbValue::from_u8(0, 0, 0),
            BasicColor::Red           => RgbValue::from_u8(178, 0, 0),
            BasicColor::Green         => RgbValue::from_u8(50, 184, 26),
            BasicColor::Yellow        => RgbValue::from_u8(185, 183, 26),
            BasicColor::Blue          => RgbValue::from_u8(0, 21, 182),
            BasicColor::Magenta       => RgbValue::from_u8(177, 0, 182),
            BasicColor::Cyan          => RgbValue::from_u8(47, 186, 184),
            BasicColor::White         => RgbValue::from_u8(184, 184, 184),
            BasicColor::BrightBlack   => RgbValue::from_u8(58, 58, 58),
            BasicColor::BrightRed     => RgbValue::from_u8(247, 48, 58),
            BasicColor::BrightGreen   => RgbValue::from_u8(89, 255, 68),
            BasicColor::BrightYellow  => RgbValue::from_u8(255, 255, 67),
            BasicColor::BrightBlue    => RgbValue::from_u8(85, 91, 253),
            BasicColor::BrightMagenta => RgbValue::from_u8(246, 55, 253),
            BasicColor::BrightCyan    => RgbValue::from_u8(86, 255, 255),
            BasicColor::BrightWhite   => RgbValue::from_u8(255, 255, 255),
        }
    }
}

impl TransformColor for BasicColor {
    fn as_rgb(&self) -> RgbValue { self.rgb() }

    fn as_ansi(&self) -> AnsiValue { AnsiValue::new(self.index()) }

    fn as_basic(&self) -> BasicColor { *self }

    fn as_grayscale(&self) -> AnsiValue { convert_rgb_into_grayscale(self.rgb()) }
}
