// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Crate wide error type. Every fallible operation in the library returns an
//! [`AnscapesResult`]. Each variant carries a [diagnostic code] and help text, so the
//! binary can hand it straight to [`miette`] for display.
//!
//! [diagnostic code]: miette::Diagnostic::code

/// Convenience type alias for results in this crate.
pub type AnscapesResult<T> = Result<T, AnscapesError>;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum AnscapesError {
    /// An alternative font number outside `0..=9`.
    #[error("Font number {font} is out of range")]
    #[diagnostic(
        code(anscapes::sgr::font_out_of_range),
        help("Font number should be between 0 and 9, where 0 is the primary font.")
    )]
    FontOutOfRange { font: u8 },

    /// A screen mode outside `0..=7` and `13..=19`.
    #[error("Screen mode {mode} is out of range")]
    #[diagnostic(
        code(anscapes::csi::screen_mode_out_of_range),
        help("Screen mode should be in this interval: [0,7] U [13,19].")
    )]
    ScreenModeOutOfRange { mode: u8 },

    /// The string is not a `#rrggbb` color.
    #[error("Invalid hex color: '{input}'")]
    #[diagnostic(
        code(anscapes::color::invalid_hex_color),
        help("Use 6 hex digits with an optional leading '#', eg: '#ff8000'.")
    )]
    InvalidHexColor { input: String },

    /// The string is not a single SGR color sequence.
    #[error("Invalid SGR color sequence: {input:?}")]
    #[diagnostic(code(anscapes::sgr::invalid_color_sequence))]
    InvalidSgrColor { input: String },

    /// The reply to a cursor position request is not `ESC [ row ; col R`.
    #[error("Malformed cursor position report: {report:?}")]
    #[diagnostic(
        code(anscapes::cursor::malformed_report),
        help("The terminal may not support Device Status Report (DSR) queries.")
    )]
    MalformedCursorReport { report: String },

    /// Width or height of a renderer target or of a pixel grid is zero.
    #[error("Invalid target dimensions {width}x{height}")]
    #[diagnostic(
        code(anscapes::renderer::invalid_dimensions),
        help("Width and height must both be greater than 0.")
    )]
    InvalidDimensions { width: usize, height: usize },

    /// Pixel buffer size does not match the declared dimensions.
    #[error("Expected {expected} values for a {width}x{height} image, got {actual}")]
    #[diagnostic(
        code(anscapes::renderer::pixel_count_mismatch),
        help("ARGB buffers hold one u32 per pixel, BGRA buffers hold 4 bytes per pixel.")
    )]
    PixelCountMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// The image file could not be decoded.
    #[error("Could not decode image '{path}'")]
    #[diagnostic(
        code(anscapes::renderer::image_decode),
        help("Supported formats are the ones enabled in the `image` crate (png, jpeg, gif, bmp, ...).")
    )]
    ImageDecode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error")]
    #[diagnostic(code(anscapes::io))]
    Io(#[from] std::io::Error),
}
