// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;

use crate::{TracingConfig, ok};

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Docs for [Global default tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
///
/// Logging is **DISABLED** by **default**.
///
/// If you don't call this function w/ a value other than
/// [`tracing_core::LevelFilter::OFF`], then logging won't be enabled. It won't matter if
/// you call [`tracing::info!`], [`tracing::debug!`], etc.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber is
/// already installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Thread local subscriber, which is thread local, and you can assign different ones
/// to different threads.
/// - This is great for tests.
/// - Docs for [Thread local tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_default.html)
///
/// Logging is **DISABLED** by **default**, as with [`try_initialize_logging_global`].
/// When the level filter is off, `Ok(None)` is returned and nothing is installed.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests {
    use tracing_core::LevelFilter;

    use super::*;
    use crate::{WriterConfig, assert_eq2};

    #[test]
    fn test_off_is_a_no_op() {
        assert!(try_initialize_logging_global(TracingConfig::off()).is_ok());
        assert!(try_initialize_logging_thread_local(LevelFilter::OFF).unwrap().is_none());
    }

    #[test]
    fn test_thread_local_is_installed() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("public_api.log");
        let config: TracingConfig =
            WriterConfig::File(file_path.to_str().unwrap().to_string()).into();

        let guard = try_initialize_logging_thread_local(config).unwrap();
        assert!(guard.is_some());
        tracing::info!(message = "hello");
        drop(guard);

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert_eq2!(content.contains("hello"), true);
    }
}
