// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # anscapes
//!
//! Color codes and images for your terminal.
//!
//! Terminals come in three capability tiers: 16 colors, 256 colors, and 24-bit
//! truecolor. This crate generates the escape sequences for each tier, maps colors from
//! one tier onto another, and renders images as half-block character art with as few
//! escape sequences as possible.
//!
//! ## Colors and text attributes
//!
//! [`SgrCode`] covers Select Graphic Rendition: bold, underline, fonts, and colors in
//! every tier. [`TermColor`] holds a color of any tier and [`TermColor::degrade`]s it to
//! what the terminal supports.
//!
//! ```
//! use anscapes::{ColorMode, ColorLayer, SgrCode, TermColor};
//!
//! let orange = TermColor::from((255, 128, 0));
//! let fg_truecolor = orange.to_fg_sgr_for(ColorMode::Truecolor).to_string();
//! assert_eq!(fg_truecolor, "\x1b[38;2;255;128;0m");
//! let fg_256 = orange.to_fg_sgr_for(ColorMode::Ansi256).to_string();
//! assert_eq!(fg_256, "\x1b[38;5;208m");
//! let bg_16 = orange.to_sgr_for(ColorLayer::Background, ColorMode::Ansi16).to_string();
//! assert_eq!(bg_16, "\x1b[43m");
//! assert_eq!(SgrCode::Bold.to_string(), "\x1b[1m");
//! ```
//!
//! ## Cursor and screen control
//!
//! [`CsiSequence`] covers cursor movement, erasing, scrolling and screen modes.
//! [`query_cursor_position`] asks the terminal where the cursor is.
//!
//! ## Images
//!
//! ```no_run
//! use anscapes::{ColorMode, create_renderer, load_image};
//!
//! let image = load_image("cat.png").unwrap();
//! let mut renderer = create_renderer(ColorMode::detect(), 80, 60).unwrap();
//! print!("{}", renderer.render_image(&image).unwrap());
//! ```
//!
//! ## Color support detection
//!
//! [`global_color_support::detect`] inspects the environment (`NO_COLOR`, `TERM`,
//! `COLORTERM`, CI, whether stdout is a TTY) and caches the result.
//! [`ColorMode::detect`] turns that into a tier.
//!
//! ## Logging
//!
//! Logging uses [`tracing`] and is off by default. Turn it on with
//! [`try_initialize_logging_global`] or [`try_initialize_logging_thread_local`].

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod ansi;
pub mod cli;
pub mod common;
pub mod log;
pub mod renderer;

// Re-export.
pub use ansi::*;
pub use cli::*;
pub use common::*;
pub use log::*;
pub use renderer::*;
