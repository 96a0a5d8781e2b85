// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging with [`tracing`]. Logging is off unless it is configured with
//! [`try_initialize_logging_global`] or [`try_initialize_logging_thread_local`].

// Attach sources.
pub mod public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use public_api::*;
pub use tracing_config::*;
pub use tracing_init::*;
