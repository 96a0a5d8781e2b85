// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use image::{DynamicImage, ImageError};

use crate::{AnsiImageRenderer, Ansi256ImageRenderer, AnscapesError, AnscapesResult,
            ColorMode, PixelGrid, RenderOptions, RgbImageRenderer, TerminalImage};

/// Turns pixels into an escape sequence that draws them in the terminal.
///
/// A renderer owns its output and resize buffers, and reuses them from one call to the
/// next. Keep one renderer per image sequence (eg: the frames of a video) to avoid
/// reallocating them for every frame.
pub trait ImageRenderer {
    fn color_mode(&self) -> ColorMode;

    /// Width in cells.
    fn target_width(&self) -> usize;

    /// Height in pixels. Each terminal row holds two.
    fn target_height(&self) -> usize;

    /// Render into the internal output buffer, and borrow it. The buffer is overwritten
    /// by the next call. `grid` is resized to the target dimensions if needed.
    fn render_raw(&mut self, grid: &PixelGrid) -> &str;

    /// Render, and hand the borrowed output to `consumer`.
    fn render_into(&mut self, grid: &PixelGrid, consumer: &mut dyn FnMut(&str)) {
        consumer(self.render_raw(grid));
    }

    fn render_string(&mut self, grid: &PixelGrid) -> String { self.render_raw(grid).to_owned() }

    fn render(&mut self, grid: &PixelGrid) -> TerminalImage {
        TerminalImage {
            sequence: self.render_string(grid),
            width: self.target_width(),
            height: self.target_height(),
            color_mode: self.color_mode(),
        }
    }

    /// # Errors
    ///
    /// Returns [`AnscapesError::InvalidDimensions`] if the image is empty.
    fn render_image(&mut self, image: &DynamicImage) -> AnscapesResult<TerminalImage> {
        let grid = PixelGrid::from_dynamic_image(image)?;
        Ok(self.render(&grid))
    }
}

/// Create a renderer for `color_mode` with default parameters.
///
/// ```
/// use anscapes::{ColorMode, PixelGrid, create_renderer};
///
/// let mut renderer = create_renderer(ColorMode::Truecolor, 1, 2).unwrap();
/// let grid = PixelGrid::from_argb(1, 2, vec![0xFF_FF_00_00, 0xFF_00_00_FF]).unwrap();
/// assert_eq!(
///     renderer.render_string(&grid),
///     "\x1b[38;2;255;0;0m\x1b[48;2;0;0;255m▀\x1b[0m\n"
/// );
/// ```
///
/// # Errors
///
/// Returns [`AnscapesError::InvalidDimensions`] if a target dimension is zero.
pub fn create_renderer(
    color_mode: ColorMode,
    target_width: usize,
    target_height: usize,
) -> AnscapesResult<Box<dyn ImageRenderer>> {
    create_renderer_with_options(&RenderOptions::new(color_mode, target_width, target_height))
}

/// Create a renderer for `options.color_mode`, using the threshold or bias from
/// `options`.
///
/// # Errors
///
/// Returns [`AnscapesError::InvalidDimensions`] if a target dimension is zero.
pub fn create_renderer_with_options(
    options: &RenderOptions,
) -> AnscapesResult<Box<dyn ImageRenderer>> {
    let RenderOptions {
        color_mode,
        target_width,
        target_height,
        threshold,
        bias,
    } = *options;

    Ok(match color_mode {
        ColorMode::Ansi16 => Box::new(AnsiImageRenderer::with_threshold(
            target_width,
            target_height,
            threshold,
        )?),
        ColorMode::Ansi256 => Box::new(Ansi256ImageRenderer::new(target_width, target_height)?),
        ColorMode::Truecolor => Box::new(RgbImageRenderer::with_bias(
            target_width,
            target_height,
            bias,
        )?),
    })
}

/// Decode an image file, in any format the [`image`] crate is built with.
///
/// # Errors
///
/// - [`AnscapesError::Io`] if the file can't be read.
/// - [`AnscapesError::ImageDecode`] if its content can't be decoded.
pub fn load_image(path: impl AsRef<Path>) -> AnscapesResult<DynamicImage> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|error| match error {
        ImageError::IoError(io_error) => AnscapesError::Io(io_error),
        other => AnscapesError::ImageDecode {
            path: path.display().to_string(),
            source: other,
        },
    })?;

    tracing::debug!(
        message = "loaded image",
        path = %path.display(),
        width = image.width(),
        height = image.height()
    );

    Ok(image)
}
