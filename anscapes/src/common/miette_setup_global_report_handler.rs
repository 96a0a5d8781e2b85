// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Customize how [`miette::Report`]s are displayed when `main() -> miette::Result<_>`
//! returns an error.
//!
//! The [`miette::ErrorHook`] is lazily evaluated, so the terminal width is only queried
//! if an error is actually displayed.

use miette::MietteHandlerOpts;
use tracing::debug;

use crate::DEFAULT_TERMINAL_WIDTH;

pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_TERMINAL_WIDTH, |(columns, _rows)| columns)
                as usize;
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
