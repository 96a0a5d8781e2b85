// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{AnsiValue, BasicColor, RgbValue};
use crate::{ColorMode, SgrCode, TransformColor};

/// Which layer of a cell a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorLayer {
    /// Text color.
    Foreground,
    /// Cell background color.
    Background,
}

/// A color in any of the three terminal capability tiers.
///
/// Each variant is encoded in its own tier by [`TermColor::to_fg_sgr`] and
/// [`TermColor::to_bg_sgr`]. To target a terminal that supports less, use
/// [`TermColor::to_fg_sgr_for`] and [`TermColor::to_bg_sgr_for`], which degrade the
/// color first. Colors are never upgraded to a richer tier.
///
/// ```
/// use anscapes::{ColorMode, RgbValue, TermColor};
///
/// let orange = TermColor::from(RgbValue::from_u8(255, 128, 0));
/// assert_eq!(orange.to_fg_sgr().to_string(), "\x1b[38;2;255;128;0m");
/// assert_eq!(orange.to_fg_sgr_for(ColorMode::Ansi256).to_string(), "\x1b[38;5;208m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermColor {
    Basic(BasicColor),
    Ansi(AnsiValue),
    Rgb(RgbValue),
}

impl From<BasicColor> for TermColor {
    fn from(value: BasicColor) -> Self { TermColor::Basic(value) }
}

impl From<AnsiValue> for TermColor {
    fn from(value: AnsiValue) -> Self { TermColor::Ansi(value) }
}

impl From<RgbValue> for TermColor {
    fn from(value: RgbValue) -> Self { TermColor::Rgb(value) }
}

impl From<(u8, u8, u8)> for TermColor {
    fn from(value: (u8, u8, u8)) -> Self { TermColor::Rgb(value.into()) }
}

impl TermColor {
    /// The richest [`ColorMode`] needed to show this color without loss.
    #[must_use]
    pub const fn color_mode(&self) -> ColorMode {
        match self {
            TermColor::Basic(_) => ColorMode::Ansi16,
            TermColor::Ansi(_) => ColorMode::Ansi256,
            TermColor::Rgb(_) => ColorMode::Truecolor,
        }
    }

    /// Approximate this color so that it fits in `mode`. Colors that already fit are
    /// returned unchanged.
    #[must_use]
    pub fn degrade(self, mode: ColorMode) -> TermColor {
        match (mode, self) {
            (ColorMode::Truecolor, it)
            | (ColorMode::Ansi256, it @ (TermColor::Basic(_) | TermColor::Ansi(_)))
            | (ColorMode::Ansi16, it @ TermColor::Basic(_)) => it,
            (ColorMode::Ansi256, TermColor::Rgb(rgb)) => TermColor::Ansi(rgb.as_ansi()),
            (ColorMode::Ansi16, it) => TermColor::Basic(it.as_basic()),
        }
    }

    #[must_use]
    pub fn to_fg_sgr(&self) -> SgrCode {
        match *self {
            TermColor::Basic(basic_color) => SgrCode::ForegroundBasic(basic_color),
            TermColor::Ansi(ansi) => SgrCode::ForegroundAnsi256(ansi.index),
            TermColor::Rgb(RgbValue { red, green, blue }) => {
                SgrCode::ForegroundRgb(red, green, blue)
            }
        }
    }

    #[must_use]
    pub fn to_bg_sgr(&self) -> SgrCode {
        match *self {
            TermColor::Basic(basic_color) => SgrCode::BackgroundBasic(basic_color),
            TermColor::Ansi(ansi) => SgrCode::BackgroundAnsi256(ansi.index),
            TermColor::Rgb(RgbValue { red, green, blue }) => {
                SgrCode::BackgroundRgb(red, green, blue)
            }
        }
    }

    #[must_use]
    pub fn to_fg_sgr_for(&self, mode: ColorMode) -> SgrCode {
        self.degrade(mode).to_fg_sgr()
    }

    #[must_use]
    pub fn to_bg_sgr_for(&self, mode: ColorMode) -> SgrCode {
        self.degrade(mode).to_bg_sgr()
    }

    /// Dispatch on `layer` to [`Self::to_fg_sgr_for`] or [`Self::to_bg_sgr_for`].
    #[must_use]
    pub fn to_sgr_for(&self, layer: ColorLayer, mode: ColorMode) -> SgrCode {
        match layer {
            ColorLayer::Foreground => self.to_fg_sgr_for(mode),
            ColorLayer::Background => self.to_bg_sgr_for(mode),
        }
    }
}

impl TransformColor for TermColor {
    fn as_rgb(&self) -> RgbValue {
        match self {
            TermColor::Basic(it) => it.as_rgb(),
            TermColor::Ansi(it) => it.as_rgb(),
            TermColor::Rgb(it) => it.as_rgb(),
        }
    }

    fn as_ansi(&self) -> AnsiValue {
        match self {
            TermColor::Basic(it) => it.as_ansi(),
            TermColor::Ansi(it) => it.as_ansi(),
            TermColor::Rgb(it) => it.as_ansi(),
        }
    }

    fn as_basic(&self) -> BasicColor {
        match self {
            TermColor::Basic(it) => it.as_basic(),
            TermColor::Ansi(it) => it.as_basic(),
            TermColor::Rgb(it) => it.as_basic(),
        }
    }

    fn as_grayscale(&self) -> AnsiValue {
        match self {
            TermColor::Basic(it) => it.as_grayscale(),
            TermColor::Ansi(it) => it.as_grayscale(),
            TermColor::Rgb(it) => it.as_grayscale(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test]
    fn test_color_mode_of_each_tier() {
        assert_eq2!(TermColor::from(BasicColor::Red).color_mode(), ColorMode::Ansi16);
        assert_eq2!(TermColor::from(AnsiValue::new(42)).color_mode(), ColorMode::Ansi256);
        assert_eq2!(TermColor::from((1, 2, 3)).color_mode(), ColorMode::Truecolor);
    }

    #[test]
    fn test_own_tier_encoding() {
        assert_eq2!(TermColor::from(BasicColor::Red).to_fg_sgr().to_string(), "\x1b[31m");
        assert_eq2!(
            TermColor::from(BasicColor::BrightRed).to_bg_sgr().to_string(),
            "\x1b[101m"
        );
        assert_eq2!(
            TermColor::from(AnsiValue::new(42)).to_fg_sgr().to_string(),
            "\x1b[38;5;42m"
        );
        assert_eq2!(
            TermColor::from((10, 20, 30)).to_bg_sgr().to_string(),
            "\x1b[48;2;10;20;30m"
        );
    }

    #[test_case(ColorMode::Truecolor, "\x1b[38;2;255;128;0m")]
    #[test_case(ColorMode::Ansi256, "\x1b[38;5;208m")]
    #[test_case(ColorMode::Ansi16, "\x1b[33m")]
    fn test_degrade_rgb(mode: ColorMode, expected: &str) {
        let orange = TermColor::from((255, 128, 0));
        assert_eq2!(orange.to_fg_sgr_for(mode).to_string(), expected);
    }

    #[test]
    fn test_degrade_never_upgrades() {
        let basic = TermColor::from(BasicColor::Cyan);
        assert_eq2!(basic.degrade(ColorMode::Truecolor), basic);
        assert_eq2!(basic.degrade(ColorMode::Ansi256), basic);

        let ansi = TermColor::from(AnsiValue::new(200));
        assert_eq2!(ansi.degrade(ColorMode::Truecolor), ansi);
        assert_eq2!(ansi.to_bg_sgr_for(ColorMode::Truecolor).to_string(), "\x1b[48;5;200m");
    }

    #[test]
    fn test_degrade_is_idempotent() {
        let colors = [
            TermColor::from(BasicColor::Yellow),
            TermColor::from(AnsiValue::new(99)),
            TermColor::from((12, 200, 99)),
        ];
        for color in colors {
            for mode in [ColorMode::Ansi16, ColorMode::Ansi256, ColorMode::Truecolor] {
                let once = color.degrade(mode);
                assert_eq2!(once.degrade(mode), once);
            }
        }
    }

    #[test]
    fn test_to_sgr_for_layer() {
        let color = TermColor::from(BasicColor::Green);
        assert_eq2!(
            color.to_sgr_for(ColorLayer::Foreground, ColorMode::Ansi16),
            SgrCode::ForegroundBasic(BasicColor::Green)
        );
        assert_eq2!(
            color.to_sgr_for(ColorLayer::Background, ColorMode::Ansi16),
            SgrCode::BackgroundBasic(BasicColor::Green)
        );
    }
}
