// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::ColorMode;

/// A rendered image: the escape sequence, and what it was rendered for. `width` is in
/// cells and `height` is in pixels, so the image takes [`TerminalImage::rows`] lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalImage {
    pub sequence: String,
    pub width: usize,
    pub height: usize,
    pub color_mode: ColorMode,
}

impl TerminalImage {
    /// Number of terminal lines the image takes.
    #[must_use]
    pub fn rows(&self) -> usize { self.height.div_ceil(2) }
}

impl Display for TerminalImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(&self.sequence) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_rows_and_display() {
        let image = TerminalImage {
            sequence: "▀\x1b[0m\n".to_string(),
            width: 1,
            height: 3,
            color_mode: ColorMode::Ansi16,
        };
        assert_eq2!(image.rows(), 2);
        assert_eq2!(image.to_string(), "▀\x1b[0m\n");
    }
}
