// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) code generation, and parsing of SGR color sequences.
//!
//! Every code is written as `CSI <params> m`. Colors are written in the shortest form
//! for their tier:
//!
//! ```text
//! ESC[31m              → basic foreground (red)
//! ESC[101m             → basic background (bright red)
//! ESC[38;5;196m        → 256-color foreground (index 196)
//! ESC[48;2;255;128;0m  → RGB background (orange)
//! ```
//!
//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

use std::fmt::{Display, Formatter, Result};

use super::constants::{CSI, CSI_PARAM_SEPARATOR, SGR, SGR_BG_EXTENDED,
                       SGR_COLOR_MODE_256, SGR_COLOR_MODE_RGB, SGR_FG_EXTENDED};
use crate::{AnsiValue, AnscapesError, AnscapesResult, BasicColor, ColorLayer, RgbValue,
            TermColor};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SgrCode {
    Reset,
    Bold,
    Faint,
    Italic,
    Underline,
    SlowBlink,
    RapidBlink,
    Invert,
    Conceal,
    Strikethrough,
    PrimaryFont,
    /// Use [`SgrCode::alternative_font`] to build this, it checks the range.
    AlternativeFont(u8),
    Fraktur,
    DoubleUnderline,
    /// Neither bold nor faint.
    NormalIntensity,
    ItalicOff,
    UnderlineOff,
    BlinkOff,
    InvertOff,
    ConcealOff,
    StrikethroughOff,
    DefaultForeground,
    DefaultBackground,
    Framed,
    Encircled,
    Overline,
    FramedOff,
    OverlineOff,
    ForegroundBasic(BasicColor),
    BackgroundBasic(BasicColor),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRgb(u8, u8, u8),
    BackgroundRgb(u8, u8, u8),
}

impl SgrCode {
    /// Select font `n`. `0` is the primary font and `1..=9` are the alternative fonts.
    ///
    /// # Errors
    ///
    /// Returns [`AnscapesError::FontOutOfRange`] if `n` is greater than 9.
    pub fn alternative_font(font: u8) -> AnscapesResult<SgrCode> {
        match font {
            0 => Ok(SgrCode::PrimaryFont),
            1..=9 => Ok(SgrCode::AlternativeFont(font)),
            _ => Err(AnscapesError::FontOutOfRange { font }),
        }
    }

    /// The numeric parameter of the codes that take a single one. Color codes return
    /// [`None`].
    #[rustfmt::skip]
    #[must_use]
    pub fn simple_param(&self) -> Option<u16> {
        let it = match self {
            SgrCode::Reset               => 0,
            SgrCode::Bold                => 1,
            SgrCode::Faint               => 2,
            SgrCode::Italic              => 3,
            SgrCode::Underline           => 4,
            SgrCode::SlowBlink           => 5,
            SgrCode::RapidBlink          => 6,
            SgrCode::Invert              => 7,
            SgrCode::Conceal             => 8,
            SgrCode::Strikethrough       => 9,
            SgrCode::PrimaryFont         => 10,
            SgrCode::AlternativeFont(n)  => 10 + u16::from(*n),
            SgrCode::Fraktur             => 20,
            SgrCode::DoubleUnderline     => 21,
            SgrCode::NormalIntensity     => 22,
            SgrCode::ItalicOff           => 23,
            SgrCode::UnderlineOff        => 24,
            SgrCode::BlinkOff            => 25,
            SgrCode::InvertOff           => 27,
            SgrCode::ConcealOff          => 28,
            SgrCode::StrikethroughOff    => 29,
            SgrCode::DefaultForeground   => 39,
            SgrCode::DefaultBackground   => 49,
            SgrCode::Framed              => 51,
            SgrCode::Encircled           => 52,
            SgrCode::Overline            => 53,
            SgrCode::FramedOff           => 54,
            SgrCode::OverlineOff         => 55,
            SgrCode::ForegroundBasic(basic_color) => u16::from(basic_color.fg_code()),
            SgrCode::BackgroundBasic(basic_color) => u16::from(basic_color.bg_code()),
            SgrCode::ForegroundAnsi256(_)
            | SgrCode::BackgroundAnsi256(_)
            | SgrCode::ForegroundRgb(..)
            | SgrCode::BackgroundRgb(..) => return None,
        };
        Some(it)
    }
}

impl Display for SgrCode {
    /// SGR: set graphics mode command.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(CSI)?;
        match *self {
            SgrCode::ForegroundAnsi256(index) => {
                write!(f, "{SGR_FG_EXTENDED};{SGR_COLOR_MODE_256};{index}")?;
            }
            SgrCode::BackgroundAnsi256(index) => {
                write!(f, "{SGR_BG_EXTENDED};{SGR_COLOR_MODE_256};{index}")?;
            }
            SgrCode::ForegroundRgb(r, g, b) => {
                write!(f, "{SGR_FG_EXTENDED};{SGR_COLOR_MODE_RGB};{r};{g};{b}")?;
            }
            SgrCode::BackgroundRgb(r, g, b) => {
                write!(f, "{SGR_BG_EXTENDED};{SGR_COLOR_MODE_RGB};{r};{g};{b}")?;
            }
            _ => {
                if let Some(param) = self.simple_param() {
                    write!(f, "{param}")?;
                }
            }
        }
        f.write_str(SGR)
    }
}

/// Parse a single SGR color sequence, such as `ESC[38;5;42m`, back into the layer and
/// color it selects. The `ESC[` prefix and the `m` suffix are optional, so `"38;5;42"`
/// parses too.
///
/// Recognized forms are the basic codes (30-37, 90-97, 40-47, 100-107), `38;5;n` /
/// `48;5;n` and `38;2;r;g;b` / `48;2;r;g;b`.
///
/// # Errors
///
/// Returns [`AnscapesError::InvalidSgrColor`] for anything else.
pub fn parse_sgr_color(input: &str) -> AnscapesResult<(ColorLayer, TermColor)> {
    let invalid = || AnscapesError::InvalidSgrColor {
        input: input.to_string(),
    };

    let body = input.strip_prefix(CSI).unwrap_or(input);
    let body = body.strip_suffix(SGR).unwrap_or(body);

    let params = body
        .split(CSI_PARAM_SEPARATOR)
        .map(str::parse::<u8>)
        .collect::<std::result::Result<Vec<u8>, _>>()
        .map_err(|_| invalid())?;

    match params.as_slice() {
        [code] => {
            if let Some(basic_color) = BasicColor::from_fg_code(*code) {
                Ok((ColorLayer::Foreground, basic_color.into()))
            } else if let Some(basic_color) = BasicColor::from_bg_code(*code) {
                Ok((ColorLayer::Background, basic_color.into()))
            } else {
                Err(invalid())
            }
        }
        [layer, SGR_COLOR_MODE_256, index] => {
            Ok((parse_layer(*layer).ok_or_else(invalid)?, AnsiValue::new(*index).into()))
        }
        [layer, SGR_COLOR_MODE_RGB, r, g, b] => Ok((
            parse_layer(*layer).ok_or_else(invalid)?,
            RgbValue::from_u8(*r, *g, *b).into(),
        )),
        _ => Err(invalid()),
    }
}

fn parse_layer(param: u8) -> Option<ColorLayer> {
    match param {
        SGR_FG_EXTENDED => Some(ColorLayer::Foreground),
        SGR_BG_EXTENDED => Some(ColorLayer::Background),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{ColorMode, assert_eq2};

    #[test_case(SgrCode::Reset, "\x1b[0m")]
    #[test_case(SgrCode::Bold, "\x1b[1m")]
    #[test_case(SgrCode::Faint, "\x1b[2m")]
    #[test_case(SgrCode::Italic, "\x1b[3m")]
    #[test_case(SgrCode::Underline, "\x1b[4m")]
    #[test_case(SgrCode::SlowBlink, "\x1b[5m")]
    #[test_case(SgrCode::RapidBlink, "\x1b[6m")]
    #[test_case(SgrCode::Invert, "\x1b[7m")]
    #[test_case(SgrCode::Conceal, "\x1b[8m")]
    #[test_case(SgrCode::Strikethrough, "\x1b[9m")]
    #[test_case(SgrCode::PrimaryFont, "\x1b[10m")]
    #[test_case(SgrCode::Fraktur, "\x1b[20m")]
    #[test_case(SgrCode::DoubleUnderline, "\x1b[21m")]
    #[test_case(SgrCode::NormalIntensity, "\x1b[22m")]
    #[test_case(SgrCode::InvertOff, "\x1b[27m")]
    #[test_case(SgrCode::StrikethroughOff, "\x1b[29m")]
    #[test_case(SgrCode::DefaultForeground, "\x1b[39m")]
    #[test_case(SgrCode::DefaultBackground, "\x1b[49m")]
    #[test_case(SgrCode::Overline, "\x1b[53m")]
    #[test_case(SgrCode::OverlineOff, "\x1b[55m")]
    fn test_attribute_codes(sgr_code: SgrCode, expected: &str) {
        assert_eq2!(sgr_code.to_string(), expected);
    }

    #[test]
    fn test_color_codes() {
        assert_eq2!(SgrCode::ForegroundBasic(BasicColor::Blue).to_string(), "\x1b[34m");
        assert_eq2!(
            SgrCode::BackgroundBasic(BasicColor::BrightCyan).to_string(),
            "\x1b[106m"
        );
        assert_eq2!(SgrCode::ForegroundAnsi256(150).to_string(), "\x1b[38;5;150m");
        assert_eq2!(SgrCode::BackgroundAnsi256(0).to_string(), "\x1b[48;5;0m");
        assert_eq2!(SgrCode::ForegroundRgb(175, 215, 135).to_string(), "\x1b[38;2;175;215;135m");
        assert_eq2!(SgrCode::BackgroundRgb(0, 0, 0).to_string(), "\x1b[48;2;0;0;0m");
    }

    #[test]
    fn test_alternative_font() {
        assert_eq2!(SgrCode::alternative_font(0).unwrap(), SgrCode::PrimaryFont);
        assert_eq2!(SgrCode::alternative_font(1).unwrap().to_string(), "\x1b[11m");
        assert_eq2!(SgrCode::alternative_font(9).unwrap().to_string(), "\x1b[19m");
        assert!(matches!(
            SgrCode::alternative_font(10),
            Err(AnscapesError::FontOutOfRange { font: 10 })
        ));
    }

    #[test]
    fn test_parse_sgr_color_accepts_bare_params() {
        assert_eq2!(
            parse_sgr_color("38;5;42").unwrap(),
            (ColorLayer::Foreground, TermColor::Ansi(AnsiValue::new(42)))
        );
        assert_eq2!(
            parse_sgr_color("\x1b[47m").unwrap(),
            (ColorLayer::Background, TermColor::Basic(BasicColor::White))
        );
    }

    #[test_case("\x1b[38;5m")]
    #[test_case("\x1b[38;2;1;2m")]
    #[test_case("\x1b[1m")]
    #[test_case("\x1b[58;5;1m")]
    #[test_case("\x1b[38;5;256m")]
    #[test_case("\x1b[38;9;1m")]
    #[test_case("")]
    fn test_parse_sgr_color_rejects(input: &str) {
        assert!(matches!(
            parse_sgr_color(input),
            Err(AnscapesError::InvalidSgrColor { .. })
        ));
    }

    /// Every color, encoded for every tier, parses back to the color that was intended
    /// for that tier.
    #[test]
    fn test_round_trip_through_parser() {
        let colors: Vec<TermColor> = BasicColor::ALL
            .iter()
            .map(|it| TermColor::from(*it))
            .chain((0..=255_u8).step_by(7).map(|it| AnsiValue::new(it).into()))
            .chain(
                [(0_u8, 0_u8, 0_u8), (255, 128, 0), (12, 34, 56), (255, 255, 255)]
                    .into_iter()
                    .map(TermColor::from),
            )
            .collect();

        for color in colors {
            for mode in [ColorMode::Ansi16, ColorMode::Ansi256, ColorMode::Truecolor] {
                let intended = color.degrade(mode);
                for layer in [ColorLayer::Foreground, ColorLayer::Background] {
                    let sequence = color.to_sgr_for(layer, mode).to_string();
                    assert_eq2!(parse_sgr_color(&sequence).unwrap(), (layer, intended));
                }
            }
        }
    }
}
