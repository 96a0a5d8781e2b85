// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Colors for the three terminal capability tiers, and quantization between them.

// Attach.
mod ansi_value;
mod basic_color;
mod convert;
mod rgb_value;
mod term_color;
mod transform_color;

// Re-export.
pub use ansi_value::*;
pub use basic_color::*;
pub use convert::*;
pub use rgb_value::*;
pub use term_color::*;
pub use transform_color::*;
