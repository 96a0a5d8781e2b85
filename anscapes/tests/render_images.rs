// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Render image files end to end: write a PNG, load it, render it in every color mode,
//! and read the colors back out of the output with [`parse_sgr_color`].

use std::path::{Path, PathBuf};

use anscapes::{AnsiImageRenderer, BasicColor, ColorLayer, ColorMode, ImageRenderer,
               PixelGrid, RenderOptions, RgbValue, SgrCode, TermColor, TransformColor,
               assert_eq2, create_renderer, create_renderer_with_options, load_image,
               parse_sgr_color};
use image::{Rgba, RgbaImage};

/// Left half red, right half blue, 8x4 pixels.
fn write_two_tone_png(dir: &Path) -> PathBuf {
    let path = dir.join("two_tone.png");
    RgbaImage::from_fn(8, 4, |x, _y| {
        if x < 4 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 255])
        }
    })
    .save(&path)
    .unwrap();
    path
}

/// Split the first row of a rendering into its SGR color codes.
fn color_codes_of_first_row(sequence: &str) -> Vec<(ColorLayer, TermColor)> {
    let row = sequence.lines().next().unwrap();
    row.split('\x1b')
        .filter(|it| !it.is_empty())
        .filter_map(|it| {
            let code = format!("\x1b{}", it.trim_end_matches('▀'));
            parse_sgr_color(&code).ok()
        })
        .collect()
}

#[test]
fn test_every_mode_recovers_the_colors() {
    let dir = tempfile::tempdir().unwrap();
    let image = load_image(write_two_tone_png(dir.path())).unwrap();

    for mode in [ColorMode::Ansi16, ColorMode::Ansi256, ColorMode::Truecolor] {
        let mut renderer = create_renderer(mode, 4, 2).unwrap();
        let rendered = renderer.render_image(&image).unwrap();

        assert_eq2!(rendered.color_mode, mode);
        assert_eq2!(rendered.rows(), 1);
        assert!(rendered.sequence.ends_with("\x1b[0m\n"));

        let red = TermColor::from((255, 0, 0)).degrade(mode);
        let blue = TermColor::from((0, 0, 255)).degrade(mode);
        assert_eq2!(
            color_codes_of_first_row(&rendered.sequence),
            vec![
                (ColorLayer::Foreground, red),
                (ColorLayer::Background, red),
                (ColorLayer::Foreground, blue),
                (ColorLayer::Background, blue),
            ]
        );
    }
}

#[test]
fn test_rendered_size_matches_target() {
    let dir = tempfile::tempdir().unwrap();
    let image = load_image(write_two_tone_png(dir.path())).unwrap();

    let options = RenderOptions::new(ColorMode::Truecolor, 5, 7);
    let mut renderer = create_renderer_with_options(&options).unwrap();
    let rendered = renderer.render_image(&image).unwrap();

    assert_eq2!(rendered.rows(), 4);
    let lines: Vec<&str> = rendered.sequence.lines().collect();
    assert_eq2!(lines.len(), 4);
    for line in lines {
        assert_eq2!(line.matches('▀').count(), 5);
    }
}

#[test]
fn test_transparent_pixels_are_black() {
    let grid = PixelGrid::from_bgra_premultiplied(1, 2, &[0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
    let mut renderer = AnsiImageRenderer::new(1, 2).unwrap();
    assert_eq2!(
        renderer.render_string(&grid),
        format!(
            "{}{}▀\x1b[0m\n",
            SgrCode::ForegroundBasic(BasicColor::Black),
            SgrCode::BackgroundBasic(BasicColor::Black)
        )
    );
}

#[test]
fn test_ansi256_output_is_the_palette_entry_nearest_each_pixel() {
    let pixels = vec![0xFF_12_34_56, 0xFF_AB_CD_EF];
    let grid = PixelGrid::from_argb(1, 2, pixels).unwrap();
    let mut renderer = create_renderer(ColorMode::Ansi256, 1, 2).unwrap();
    let rendered = renderer.render_string(&grid);

    let expected_fg = RgbValue::from(0x12_34_56_u32).as_ansi();
    let expected_bg = RgbValue::from(0xAB_CD_EF_u32).as_ansi();
    assert_eq2!(
        color_codes_of_first_row(&rendered),
        vec![
            (ColorLayer::Foreground, TermColor::Ansi(expected_fg)),
            (ColorLayer::Background, TermColor::Ansi(expected_bg)),
        ]
    );
}
