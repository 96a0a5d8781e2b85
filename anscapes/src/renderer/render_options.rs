// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnscapesError, AnscapesResult, ColorMode};

/// Spot-on distance for 16-color quantization. A pixel this close to one of the basic
/// colors takes it without looking at the others.
pub const DEFAULT_THRESHOLD: u32 = 8;

/// Truecolor rendering re-emits a color as soon as it changes at all.
pub const DEFAULT_BIAS: u32 = 0;

/// Everything needed to build an [`crate::ImageRenderer`] with
/// [`crate::create_renderer_with_options`].
///
/// - `target_width` is in cells (and pixels), `target_height` in pixels. Each terminal
///   row shows two pixel rows.
/// - `threshold` is only used for [`ColorMode::Ansi16`].
/// - `bias` is only used for [`ColorMode::Truecolor`]. A color is re-emitted only when
///   it is further than `bias` away from the previous cell's color, which trades
///   accuracy for shorter output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub color_mode: ColorMode,
    pub target_width: usize,
    pub target_height: usize,
    pub threshold: u32,
    pub bias: u32,
}

impl RenderOptions {
    #[must_use]
    pub fn new(color_mode: ColorMode, target_width: usize, target_height: usize) -> Self {
        Self {
            color_mode,
            target_width,
            target_height,
            threshold: DEFAULT_THRESHOLD,
            bias: DEFAULT_BIAS,
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_bias(mut self, bias: u32) -> Self {
        self.bias = bias;
        self
    }

    /// # Errors
    ///
    /// Returns [`AnscapesError::InvalidDimensions`] if a target dimension is zero.
    pub fn validate(&self) -> AnscapesResult<()> {
        if self.target_width == 0 || self.target_height == 0 {
            return Err(AnscapesError::InvalidDimensions {
                width: self.target_width,
                height: self.target_height,
            });
        }
        Ok(())
    }

    /// Height in pixels that keeps the aspect ratio of a `width` x `height` image once
    /// it's scaled to `target_width`. Never less than 1.
    #[must_use]
    pub fn height_keeping_aspect_ratio(target_width: usize, width: usize, height: usize) -> usize {
        if width == 0 {
            return 1;
        }
        (height * target_width / width).max(1)
    }
}
