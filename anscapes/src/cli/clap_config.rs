// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::{ColorMode, DEFAULT_BIAS, DEFAULT_LOG_FILE_NAME, DEFAULT_THRESHOLD};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "anscapes")]
#[command(about = "🎨 Color codes and images for your terminal")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nRender an image file with half-block characters.\nUSAGE 📓:\n  anscapes [\x1b[34moptions\x1b[0m] <\x1b[32mFILE\x1b[0m>\n\n[options]\n{options}"
)]
pub struct CliArgs {
    #[arg(name = "FILE", help = "Image file to render (png, jpeg, gif, bmp, ...)")]
    pub file_path: PathBuf,

    #[command(flatten)]
    pub render_options: RenderArgs,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[arg(
        long,
        short = 'm',
        help = "Color mode: ansi16, ansi256 or truecolor. Detected from the terminal if \
                not set"
    )]
    pub mode: Option<ColorMode>,

    #[arg(
        long,
        short = 'W',
        help = "Target width in cells. Defaults to the terminal width, or 80"
    )]
    pub width: Option<usize>,

    #[arg(
        long,
        short = 'H',
        help = "Target height in pixel rows, two per line. Defaults to keeping the \
                aspect ratio"
    )]
    pub height: Option<usize>,

    #[arg(
        long,
        short = 't',
        default_value_t = DEFAULT_THRESHOLD,
        help = "Spot-on distance for 16 color quantization"
    )]
    pub threshold: u32,

    #[arg(
        long,
        short = 'b',
        default_value_t = DEFAULT_BIAS,
        help = "Truecolor only. Skip color codes for colors this close to the previous one"
    )]
    pub bias: u32,

    #[arg(
        long,
        short = 'e',
        help = "Print the escaped form, which can be copy-pasted into source code"
    )]
    pub escape: bool,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value = DEFAULT_LOG_FILE_NAME,
        help = "Log file used with --enable-logging"
    )]
    pub log_file: String,
}
