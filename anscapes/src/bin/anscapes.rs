// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use anscapes::{CliArgs, TracingConfig, ok, run, set_mimalloc_in_main,
               setup_default_miette_global_report_handler, try_initialize_logging_global};
use clap::Parser;

set_mimalloc_in_main!();

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);

    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CliArgs` struct.
    let cli_args = CliArgs::parse();

    let enable_logging = cli_args.global_options.enable_logging;
    if enable_logging {
        try_initialize_logging_global(TracingConfig::new_file(
            Some(cli_args.global_options.log_file.clone()),
            tracing_core::LevelFilter::DEBUG,
        ))?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_args = ?cli_args);
    }

    let result = run(&cli_args, &mut std::io::stdout().lock());

    if let Err(ref error) = result {
        tracing::error!(message = "Could not render the image", error = ?error);
    }
    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    result?;
    ok!()
}
