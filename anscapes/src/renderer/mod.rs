// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Render images as half-block character art.
//!
//! 1. Get pixels into a [`PixelGrid`]: from `0xAARRGGBB` values, premultiplied BGRA
//!    bytes, or an [`image::DynamicImage`] (see [`load_image`]).
//! 2. Pick a renderer for the terminal's [`crate::ColorMode`] with [`create_renderer`],
//!    or use [`AnsiImageRenderer`], [`Ansi256ImageRenderer`] or [`RgbImageRenderer`]
//!    directly.
//! 3. Call [`ImageRenderer::render`] (or [`ImageRenderer::render_raw`] to skip the
//!    copy), and print the result.

// Attach.
mod ansi256_image_renderer;
mod ansi_image_renderer;
mod half_block_renderer;
mod image_renderer;
mod pixel_grid;
mod render_options;
mod resize;
mod rgb_image_renderer;
mod terminal_image;

// Re-export.
pub use ansi256_image_renderer::*;
pub use ansi_image_renderer::*;
pub use half_block_renderer::*;
pub use image_renderer::*;
pub use pixel_grid::*;
pub use render_options::*;
pub use resize::*;
pub use rgb_image_renderer::*;
pub use terminal_image::*;
