// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use miette::IntoDiagnostic;

use crate::{CliArgs, ColorMode, RenderOptions, create_renderer_with_options,
            escape_for_copy_paste, load_image};

/// Fill in what the command line leaves out. `terminal_width` is only called when no
/// width is given.
#[must_use]
pub fn resolve_render_options(
    args: &CliArgs,
    image_width: usize,
    image_height: usize,
    detect_color_mode: impl FnOnce() -> ColorMode,
    terminal_width: impl FnOnce() -> u16,
) -> RenderOptions {
    let it = &args.render_options;

    let color_mode = it.mode.unwrap_or_else(detect_color_mode);
    let target_width = it
        .width
        .unwrap_or_else(|| usize::from(terminal_width()))
        .max(1);
    let target_height = it.height.unwrap_or_else(|| {
        RenderOptions::height_keeping_aspect_ratio(target_width, image_width, image_height)
    });

    RenderOptions::new(color_mode, target_width, target_height)
        .with_threshold(it.threshold)
        .with_bias(it.bias)
}

/// Load the image named in `args`, render it for the detected (or requested) color mode,
/// and write it to `writer`.
///
/// # Errors
///
/// Returns an error if the image can't be loaded or rendered, or `writer` fails.
pub fn run(args: &CliArgs, writer: &mut impl Write) -> miette::Result<()> {
    let image = load_image(&args.file_path)?;

    let options = resolve_render_options(
        args,
        image.width() as usize,
        image.height() as usize,
        ColorMode::detect,
        crate::get_terminal_width,
    );
    // % is Display, ? is Debug.
    tracing::debug!(message = "render options", options = ?options);

    let mut renderer = create_renderer_with_options(&options)?;
    let rendered = renderer.render_image(&image)?;

    if args.render_options.escape {
        writeln!(writer, "{}", escape_for_copy_paste(&rendered.sequence)).into_diagnostic()?;
    } else {
        write!(writer, "{rendered}").into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}
