// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The half-block algorithm shared by all the image renderers.
//!
//! Each terminal cell shows two vertically stacked pixels by printing
//! [`UPPER_HALF_BLOCK`] with the upper pixel as its foreground color and the lower pixel
//! as its background color. So a `w` x `h` pixel image takes `w` columns and `h / 2`
//! (rounded up) rows. When `h` is odd, the last row has a black lower pixel.
//!
//! ```text
//!   pixels              cells
//!   ┌───┬───┐           ┌───┬───┐
//!   │ a │ b │  y = 0    │▀ a│▀ b│  fg = a, b
//!   ├───┼───┤     ───▶  │  c│  d│  bg = c, d
//!   │ c │ d │  y = 1    └───┴───┘
//!   └───┴───┘
//! ```
//!
//! Along a row, a color code is only written when the color differs from the one in the
//! previous cell. Each row ends with a reset and a line feed.

use std::fmt::Write;

use super::resize::resize_nearest;
use crate::{ColorMode, ImageRenderer, PixelGrid, SgrCode, ansi::constants::{SGR_RESET,
            UPPER_HALF_BLOCK}};

const OPAQUE_BLACK: u32 = 0xFF_00_00_00;

/// Longest output of one cell: two `ESC[38;2;255;255;255m` codes and a half block.
const MAX_CELL_LEN: usize = 2 * 19 + 3;

/// Maps pixels to the colors of one terminal capability tier, and writes them.
pub trait CellEncoder {
    type Color: Copy + PartialEq;

    const COLOR_MODE: ColorMode;

    /// Quantize a `0xAARRGGBB` pixel. Alpha is ignored.
    fn quantize(&self, argb: u32) -> Self::Color;

    /// Whether `next` should be written after `prev`.
    fn differs(&self, prev: Self::Color, next: Self::Color) -> bool { prev != next }

    fn fg(&self, color: Self::Color) -> SgrCode;

    fn bg(&self, color: Self::Color) -> SgrCode;
}

/// An [`ImageRenderer`] for the tier of `E`. Use the type aliases
/// [`crate::AnsiImageRenderer`], [`crate::Ansi256ImageRenderer`] and
/// [`crate::RgbImageRenderer`].
#[derive(Debug, Clone)]
pub struct HalfBlockRenderer<E> {
    encoder: E,
    target_width: usize,
    target_height: usize,
    output: String,
    resize_buffer: Vec<u32>,
}

impl<E: CellEncoder> HalfBlockRenderer<E> {
    /// Callers check that the dimensions are not zero.
    pub(super) fn new_unchecked(encoder: E, target_width: usize, target_height: usize) -> Self {
        let rows = target_height.div_ceil(2);
        Self {
            encoder,
            target_width,
            target_height,
            output: String::with_capacity(rows * (target_width * MAX_CELL_LEN + SGR_RESET.len() + 1)),
            resize_buffer: vec![0; target_width * target_height],
        }
    }

    #[must_use]
    pub fn encoder(&self) -> &E { &self.encoder }
}

impl<E: CellEncoder> ImageRenderer for HalfBlockRenderer<E> {
    fn color_mode(&self) -> ColorMode { E::COLOR_MODE }

    fn target_width(&self) -> usize { self.target_width }

    fn target_height(&self) -> usize { self.target_height }

    fn render_raw(&mut self, grid: &PixelGrid) -> &str {
        let (width, height) = (self.target_width, self.target_height);

        let pixels: &[u32] = if grid.width() == width && grid.height() == height {
            grid.pixels()
        } else {
            resize_nearest(
                grid.pixels(),
                grid.width(),
                grid.height(),
                &mut self.resize_buffer,
                width,
                height,
            );
            &self.resize_buffer
        };

        self.output.clear();
        encode_half_blocks(&self.encoder, pixels, width, height, &mut self.output);

        tracing::debug!(
            message = "rendered image",
            color_mode = %E::COLOR_MODE,
            source_width = grid.width(),
            source_height = grid.height(),
            target_width = width,
            target_height = height,
            output_len = self.output.len()
        );

        &self.output
    }
}

fn encode_half_blocks<E: CellEncoder>(
    encoder: &E,
    pixels: &[u32],
    width: usize,
    height: usize,
    acc: &mut String,
) {
    let black = encoder.quantize(OPAQUE_BLACK);

    for y in (0..height).step_by(2) {
        let mut prev_upper: Option<E::Color> = None;
        let mut prev_lower: Option<E::Color> = None;

        for x in 0..width {
            let upper = encoder.quantize(pixels[y * width + x]);
            let lower = if y + 1 < height {
                encoder.quantize(pixels[(y + 1) * width + x])
            } else {
                black
            };

            // Writing to a String can't fail.
            if prev_upper.is_none_or(|prev| encoder.differs(prev, upper)) {
                let _ = write!(acc, "{}", encoder.fg(upper));
            }
            if prev_lower.is_none_or(|prev| encoder.differs(prev, lower)) {
                let _ = write!(acc, "{}", encoder.bg(lower));
            }
            acc.push(UPPER_HALF_BLOCK);

            prev_upper = Some(upper);
            prev_lower = Some(lower);
        }

        acc.push_str(SGR_RESET);
        acc.push('\n');
    }
}
