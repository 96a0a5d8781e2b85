// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter, EnumString};

use crate::{ColorSupport, global_color_support};

/// The terminal capability tier that escape sequences and images are generated for.
///
/// Parsing is case insensitive and accepts a few common aliases.
///
/// ```
/// use std::str::FromStr;
/// use anscapes::ColorMode;
///
/// assert_eq!(ColorMode::from_str("RGB").unwrap(), ColorMode::Truecolor);
/// assert_eq!(ColorMode::from_str("256").unwrap(), ColorMode::Ansi256);
/// assert_eq!(ColorMode::Ansi16.to_string(), "ansi16");
/// ```
#[derive(Debug, Display, EnumString, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// The 16 basic colors.
    #[strum(ascii_case_insensitive, to_string = "ansi16", serialize = "ansi", serialize = "16")]
    Ansi16,
    /// The xterm 256-color palette.
    #[strum(ascii_case_insensitive, to_string = "ansi256", serialize = "256")]
    Ansi256,
    /// 24-bit RGB.
    #[strum(
        ascii_case_insensitive,
        to_string = "truecolor",
        serialize = "rgb",
        serialize = "24bit"
    )]
    Truecolor,
}

impl From<ColorSupport> for ColorMode {
    fn from(value: ColorSupport) -> Self {
        match value {
            ColorSupport::Truecolor => ColorMode::Truecolor,
            ColorSupport::Ansi256 | ColorSupport::Grayscale => ColorMode::Ansi256,
            ColorSupport::NoColor => ColorMode::Ansi16,
        }
    }
}

impl ColorMode {
    /// The mode matching what [`global_color_support::detect`] reports for stdout.
    #[must_use]
    pub fn detect() -> Self { global_color_support::detect().into() }
}
