// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

/// Create a file appender that writes to `path_str`, and never rolls over. The image
/// renderer logs once per frame, so one file per run is plenty.
///
/// Note that if you wrap this up in a non blocking writer, the log lines written just
/// before the process exits get lost, since nothing holds on to the worker guard.
///
/// # Errors
///
/// Returns an error if the path has no parent directory or no file name.
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = Path::new(path_str);

    let parent = match path.parent() {
        // A bare file name has an empty parent, which means the current folder.
        Some(it) if it.as_os_str().is_empty() => Path::new("."),
        Some(it) => it,
        None => miette::bail!(
            "Can't access the folder of {}. It might not exist, or you might not have \
             the required permissions.",
            path.display()
        ),
    };

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or you might not have the \
             required permissions.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}
