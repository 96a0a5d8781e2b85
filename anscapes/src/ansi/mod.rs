// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequence generation for the three terminal capability tiers.
//!
//! - [`color`]: color types and quantization between tiers.
//! - [`SgrCode`]: text attributes and colors, plus [`parse_sgr_color`] to read color
//!   codes back.
//! - [`CsiSequence`]: cursor, erase and screen mode control.
//! - [`global_color_support`]: find out which tier the terminal supports.

// Attach.
pub mod color;
pub mod constants;
mod color_mode;
mod csi_sequence;
mod cursor_position;
mod detect_color_support;
mod escape;
mod sgr_code;

// Re-export.
pub use color::*;
pub use color_mode::*;
pub use csi_sequence::*;
pub use cursor_position::*;
pub use detect_color_support::*;
pub use escape::*;
pub use sgr_code::*;
