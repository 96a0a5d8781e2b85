// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor movement, erase, and screen mode sequences.
//!
//! More info:
//! - <https://vt100.net/docs/vt510-rm/chapter4.html>
//! - <https://gist.github.com/fnky/458719343aabd01cfb17a3a4f7296797>

use std::fmt::{Display, Formatter, Result};

use super::constants::{CSI, ESC};
use crate::{AnscapesError, AnscapesResult};

/// A control sequence other than SGR. Use [`Display`] to get the bytes to write.
///
/// ```
/// use anscapes::CsiSequence;
///
/// let seq = CsiSequence::CursorPosition { row: 3, col: 7 };
/// assert_eq!(seq.to_string(), "\x1b[3;7H");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CsiSequence {
    /// Erase from the cursor to the end of the screen.
    ClearDown,
    /// Erase from the start of the screen to the cursor.
    ClearUp,
    ClearScreen,
    /// Erase the scrollback buffer.
    ClearBuffer,
    ClearLine,
    CursorHome,
    CursorUp(u16),
    CursorDown(u16),
    CursorForward(u16),
    CursorBackward(u16),
    CursorNextLine(u16),
    CursorPrevLine(u16),
    /// Move to column `col` (1-based) of the current row.
    CursorHorizontalAbsolute(u16),
    /// Move to `row`, `col` (both 1-based).
    CursorPosition { row: u16, col: u16 },
    SaveCursor,
    RestoreCursor,
    HideCursor,
    ShowCursor,
    /// Ask the terminal to report the cursor position, see
    /// [`crate::query_cursor_position`].
    RequestCursorPosition,
    AlternateScreenOn,
    AlternateScreenOff,
    /// Use [`CsiSequence::set_screen_mode`] to build this, it checks the range.
    SetScreenMode(u8),
    /// Use [`CsiSequence::reset_screen_mode`] to build this, it checks the range.
    ResetScreenMode(u8),
    /// Full reset (RIS). This one is an ESC sequence rather than a CSI one.
    ResetTerminal,
}

impl CsiSequence {
    /// Screen modes 0..=7 are the text and color modes, 13..=19 the graphics modes.
    #[must_use]
    pub const fn is_valid_screen_mode(mode: u8) -> bool {
        matches!(mode, 0..=7 | 13..=19)
    }

    /// # Errors
    ///
    /// Returns [`AnscapesError::ScreenModeOutOfRange`] if `mode` is not a known screen
    /// mode.
    pub fn set_screen_mode(mode: u8) -> AnscapesResult<CsiSequence> {
        if Self::is_valid_screen_mode(mode) {
            Ok(CsiSequence::SetScreenMode(mode))
        } else {
            Err(AnscapesError::ScreenModeOutOfRange { mode })
        }
    }

    /// # Errors
    ///
    /// Returns [`AnscapesError::ScreenModeOutOfRange`] if `mode` is not a known screen
    /// mode.
    pub fn reset_screen_mode(mode: u8) -> AnscapesResult<CsiSequence> {
        if Self::is_valid_screen_mode(mode) {
            Ok(CsiSequence::ResetScreenMode(mode))
        } else {
            Err(AnscapesError::ScreenModeOutOfRange { mode })
        }
    }
}

impl Display for CsiSequence {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let CsiSequence::ResetTerminal = self {
            return write!(f, "{ESC}c");
        }

        f.write_str(CSI)?;
        match *self {
            CsiSequence::ClearDown                   => f.write_str("0J"),
            CsiSequence::ClearUp                     => f.write_str("1J"),
            CsiSequence::ClearScreen                 => f.write_str("2J"),
            CsiSequence::ClearBuffer                 => f.write_str("3J"),
            CsiSequence::ClearLine                   => f.write_str("2K"),
            CsiSequence::CursorHome                  => f.write_str("H"),
            CsiSequence::CursorUp(n)                 => write!(f, "{n}A"),
            CsiSequence::CursorDown(n)               => write!(f, "{n}B"),
            CsiSequence::CursorForward(n)            => write!(f, "{n}C"),
            CsiSequence::CursorBackward(n)           => write!(f, "{n}D"),
            CsiSequence::CursorNextLine(n)           => write!(f, "{n}E"),
            CsiSequence::CursorPrevLine(n)           => write!(f, "{n}F"),
            CsiSequence::CursorHorizontalAbsolute(c) => write!(f, "{}G", c.max(1)),
            CsiSequence::CursorPosition { row, col } => write!(f, "{};{}H", row.max(1), col.max(1)),
            CsiSequence::SaveCursor                  => f.write_str("s"),
            CsiSequence::RestoreCursor               => f.write_str("u"),
            CsiSequence::HideCursor                  => f.write_str("?25l"),
            CsiSequence::ShowCursor                  => f.write_str("?25h"),
            CsiSequence::RequestCursorPosition       => f.write_str("6n"),
            CsiSequence::AlternateScreenOn           => f.write_str("?1049h"),
            CsiSequence::AlternateScreenOff          => f.write_str("?1049l"),
            CsiSequence::SetScreenMode(mode)         => write!(f, "={mode}h"),
            CsiSequence::ResetScreenMode(mode)       => write!(f, "={mode}l"),
            CsiSequence::ResetTerminal               => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(CsiSequence::ClearDown, "\x1b[0J")]
    #[test_case(CsiSequence::ClearUp, "\x1b[1J")]
    #[test_case(CsiSequence::ClearScreen, "\x1b[2J")]
    #[test_case(CsiSequence::ClearBuffer, "\x1b[3J")]
    #[test_case(CsiSequence::ClearLine, "\x1b[2K")]
    #[test_case(CsiSequence::CursorHome, "\x1b[H")]
    #[test_case(CsiSequence::CursorUp(2), "\x1b[2A")]
    #[test_case(CsiSequence::CursorDown(3), "\x1b[3B")]
    #[test_case(CsiSequence::CursorForward(4), "\x1b[4C")]
    #[test_case(CsiSequence::CursorBackward(5), "\x1b[5D")]
    #[test_case(CsiSequence::CursorNextLine(1), "\x1b[1E")]
    #[test_case(CsiSequence::CursorPrevLine(1), "\x1b[1F")]
    #[test_case(CsiSequence::SaveCursor, "\x1b[s")]
    #[test_case(CsiSequence::RestoreCursor, "\x1b[u")]
    #[test_case(CsiSequence::HideCursor, "\x1b[?25l")]
    #[test_case(CsiSequence::ShowCursor, "\x1b[?25h")]
    #[test_case(CsiSequence::RequestCursorPosition, "\x1b[6n")]
    #[test_case(CsiSequence::AlternateScreenOn, "\x1b[?1049h")]
    #[test_case(CsiSequence::AlternateScreenOff, "\x1b[?1049l")]
    #[test_case(CsiSequence::ResetTerminal, "\x1bc")]
    fn test_display(seq: CsiSequence, expected: &str) {
        assert_eq2!(seq.to_string(), expected);
    }

    #[test]
    fn test_positions_are_clamped_to_one() {
        assert_eq2!(CsiSequence::CursorHorizontalAbsolute(0).to_string(), "\x1b[1G");
        assert_eq2!(CsiSequence::CursorHorizontalAbsolute(12).to_string(), "\x1b[12G");
        assert_eq2!(
            CsiSequence::CursorPosition { row: 0, col: 0 }.to_string(),
            "\x1b[1;1H"
        );
        assert_eq2!(
            CsiSequence::CursorPosition { row: 5, col: 0 }.to_string(),
            "\x1b[5;1H"
        );
    }

    #[test]
    fn test_screen_modes() {
        assert_eq2!(CsiSequence::set_screen_mode(0).unwrap().to_string(), "\x1b[=0h");
        assert_eq2!(CsiSequence::set_screen_mode(19).unwrap().to_string(), "\x1b[=19h");
        assert_eq2!(CsiSequence::reset_screen_mode(13).unwrap().to_string(), "\x1b[=13l");

        for mode in [8, 12, 20, 255] {
            assert!(matches!(
                CsiSequence::set_screen_mode(mode),
                Err(AnscapesError::ScreenModeOutOfRange { .. })
            ));
            assert!(CsiSequence::reset_screen_mode(mode).is_err());
        }
    }
}
