// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequence building blocks.

/// ESC (0x1B): starts every escape sequence.
pub const ESC: &str = "\x1b";

/// Control Sequence Introducer: ESC [
pub const CSI: &str = "\x1b[";

/// Final byte of an SGR (Select Graphic Rendition) sequence.
pub const SGR: &str = "m";

/// Separates the numeric parameters of a CSI sequence.
pub const CSI_PARAM_SEPARATOR: char = ';';

/// SGR Reset sequence.
pub const SGR_RESET: &str = "\x1b[0m";

/// SGR parameter that introduces an extended foreground color.
pub const SGR_FG_EXTENDED: u8 = 38;

/// SGR parameter that introduces an extended background color.
pub const SGR_BG_EXTENDED: u8 = 48;

/// Sub mode of [`SGR_FG_EXTENDED`] / [`SGR_BG_EXTENDED`] for a 256-color palette index.
pub const SGR_COLOR_MODE_256: u8 = 5;

/// Sub mode of [`SGR_FG_EXTENDED`] / [`SGR_BG_EXTENDED`] for an RGB triple.
pub const SGR_COLOR_MODE_RGB: u8 = 2;

/// Terminator of the cursor position report: ESC [ row ; col R
pub const DSR_CURSOR_POSITION_RESPONSE_END: u8 = b'R';

/// Upper half block. Its foreground paints the top pixel of a cell and its background
/// paints the bottom one.
pub const UPPER_HALF_BLOCK: char = '▀';

/// Lower half block. The counterpart of [`UPPER_HALF_BLOCK`].
pub const LOWER_HALF_BLOCK: char = '▄';
