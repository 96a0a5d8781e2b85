// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The `anscapes` command line: argument parsing and the render loop of the binary.

// Include.
pub mod clap_config;
pub mod launcher;

// Reexport.
pub use clap_config::*;
pub use launcher::*;
