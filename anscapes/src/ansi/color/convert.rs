// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color quantization. Maps 24-bit colors onto the 256-color palette, onto the 16 basic
//! colors, and onto the grayscale ramp.
//!
//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/Grayscale#Converting_color_to_grayscale>
//! - <https://github.com/Qix-/color-convert/>

use super::{AnsiValue, BasicColor, RgbValue};

pub mod ansi_constants {
    /// Levels of each channel in the 6x6x6 color cube (palette indices 16..=231).
    pub const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

    /// First palette index of the 6x6x6 color cube.
    pub const CUBE_START: u8 = 16;

    /// First palette index of the 24 step grayscale ramp (232..=255).
    pub const GRAY_RAMP_START: u8 = 232;

    /// xterm defaults for the 16 system colors (palette indices 0..=15).
    pub const SYSTEM_COLORS: [u32; 16] = [
        0x00_00_00, 0x80_00_00, 0x00_80_00, 0x80_80_00, 0x00_00_80, 0x80_00_80,
        0x00_80_80, 0xc0_c0_c0, 0x80_80_80, 0xff_00_00, 0x00_ff_00, 0xff_ff_00,
        0x00_00_ff, 0xff_00_ff, 0x00_ff_ff, 0xff_ff_ff,
    ];

    /// The xterm 256-color palette, packed as `0xRRGGBB`.
    pub const ANSI_COLOR_PALETTE: [u32; 256] = build_palette();

    #[allow(clippy::cast_lossless)]
    const fn build_palette() -> [u32; 256] {
        let mut palette = [0_u32; 256];
        let mut index = 0;

        while index < 16 {
            palette[index] = SYSTEM_COLORS[index];
            index += 1;
        }

        while index < 232 {
            let offset = index - 16;
            let red = CUBE_LEVELS[offset / 36] as u32;
            let green = CUBE_LEVELS[(offset / 6) % 6] as u32;
            let blue = CUBE_LEVELS[offset % 6] as u32;
            palette[index] = (red << 16) | (green << 8) | blue;
            index += 1;
        }

        while index < 256 {
            let level = (8 + (index - 232) * 10) as u32;
            palette[index] = (level << 16) | (level << 8) | level;
            index += 1;
        }

        palette
    }
}

use ansi_constants::{CUBE_LEVELS, CUBE_START, GRAY_RAMP_START};

/// Squared Euclidean distance between two colors in RGB space.
#[must_use]
pub fn rgb_distance_squared(lhs: RgbValue, rhs: RgbValue) -> u32 {
    let dr = i32::from(lhs.red) - i32::from(rhs.red);
    let dg = i32::from(lhs.green) - i32::from(rhs.green);
    let db = i32::from(lhs.blue) - i32::from(rhs.blue);
    (dr * dr + dg * dg + db * db).unsigned_abs()
}

/// Euclidean distance between two colors in RGB space.
#[must_use]
pub fn rgb_distance(lhs: RgbValue, rhs: RgbValue) -> f64 {
    f64::from(rgb_distance_squared(lhs, rhs)).sqrt()
}

/// Index into [`CUBE_LEVELS`] closest to the given channel value.
fn cube_level_index(value: u8) -> u8 {
    match value {
        0..48 => 0,
        48..115 => 1,
        _ => (value - 35) / 40,
    }
}

/// xterm algorithm: pick the closest entry of the 6x6x6 cube and the closest entry of
/// the grayscale ramp, then keep whichever of the two is nearer. Ties go to the cube.
#[must_use]
pub fn convert_rgb_into_ansi256(rgb: RgbValue) -> AnsiValue {
    let (ri, gi, bi) = (
        cube_level_index(rgb.red),
        cube_level_index(rgb.green),
        cube_level_index(rgb.blue),
    );
    let cube_color = RgbValue::from_u8(
        CUBE_LEVELS[ri as usize],
        CUBE_LEVELS[gi as usize],
        CUBE_LEVELS[bi as usize],
    );
    let cube_index = CUBE_START + 36 * ri + 6 * gi + bi;

    let average =
        (u16::from(rgb.red) + u16::from(rgb.green) + u16::from(rgb.blue)) / 3;
    let gray_step: u8 = match average {
        0..3 => 0,
        239.. => 23,
        #[allow(clippy::cast_possible_truncation)]
        _ => ((average - 3) / 10) as u8,
    };
    let gray_level = 8 + gray_step * 10;
    let gray_color = RgbValue::from_u8(gray_level, gray_level, gray_level);
    let gray_index = GRAY_RAMP_START + gray_step;

    if rgb_distance_squared(rgb, gray_color) < rgb_distance_squared(rgb, cube_color) {
        AnsiValue::new(gray_index)
    } else {
        AnsiValue::new(cube_index)
    }
}

/// Gamma corrected luma of the color, mapped back onto the 256-color palette.
#[must_use]
pub fn convert_rgb_into_grayscale(rgb: RgbValue) -> AnsiValue {
    // See https://en.wikipedia.org/wiki/Grayscale#Converting_color_to_grayscale
    const SCALE: f64 = 256.0;

    // Changing SRGB to Linear for gamma correction.
    let red = srgb_to_linear(f64::from(rgb.red) / SCALE);
    let green = srgb_to_linear(f64::from(rgb.green) / SCALE);
    let blue = srgb_to_linear(f64::from(rgb.blue) / SCALE);

    // Converting to grayscale.
    let gray_linear = red * 0.299 + green * 0.587 + blue * 0.114;

    // Gamma correction.
    let gray_srgb = linear_to_srgb(gray_linear);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let gray = (gray_srgb * SCALE).clamp(0.0, 255.0) as u8;
    convert_rgb_into_ansi256(RgbValue::from_u8(gray, gray, gray))
}

#[must_use]
pub fn linear_to_srgb(intensity: f64) -> f64 {
    if intensity <= 0.003_130_8 {
        12.92 * intensity
    } else {
        1.055 * intensity.powf(1.0 / 2.4) - 0.055
    }
}

#[must_use]
pub fn srgb_to_linear(intensity: f64) -> f64 {
    if intensity < 0.04045 {
        intensity / 12.92
    } else {
        ((intensity + 0.055) / 1.055).powf(2.4)
    }
}

/// Find the basic color nearest to `rgb`.
///
/// The 16 colors are visited in [`BasicColor::ALL`] order. If one of them is closer
/// than `threshold` it is a spot-on match and is returned right away. Otherwise the
/// closest one wins, and on a tie the first one visited wins.
#[must_use]
pub fn find_nearest_basic_color(rgb: RgbValue, threshold: u32) -> BasicColor {
    let threshold_squared = u64::from(threshold) * u64::from(threshold);
    let mut closest = BasicColor::Black;
    let mut closest_distance = u32::MAX;

    for basic_color in BasicColor::ALL {
        let distance = rgb_distance_squared(basic_color.rgb(), rgb);

        // Speedup, if low distance its a spot-on.
        if u64::from(distance) < threshold_squared {
            return basic_color;
        }

        if distance < closest_distance {
            closest_distance = distance;
            closest = basic_color;
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::{ansi_constants::ANSI_COLOR_PALETTE, *};
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(RgbValue::from_u8(0, 0, 0), 16)]
    #[test_case(RgbValue::from_u8(0, 128, 255), 33)]
    #[test_case(RgbValue::from_u8(255, 128, 0), 208)]
    #[test_case(RgbValue::from_u8(255, 255, 255), 231)]
    #[test_case(RgbValue::from_u8(95, 0, 255), 57)]
    #[test_case(RgbValue::from_u8(128, 128, 128), 244)]
    fn test_convert_rgb_into_ansi256(rgb: RgbValue, index: u8) {
        assert_eq2!(convert_rgb_into_ansi256(rgb), AnsiValue::new(index));
    }

    #[test]
    fn test_palette_entries_round_trip() {
        for index in 16..=255_u8 {
            let rgb = RgbValue::from(ANSI_COLOR_PALETTE[index as usize]);
            assert_eq2!(convert_rgb_into_ansi256(rgb), AnsiValue::new(index));
        }
    }

    #[test]
    fn test_palette_layout() {
        assert_eq2!(ANSI_COLOR_PALETTE[16], 0x00_00_00);
        assert_eq2!(ANSI_COLOR_PALETTE[42], 0x00_d7_87);
        assert_eq2!(ANSI_COLOR_PALETTE[231], 0xff_ff_ff);
        assert_eq2!(ANSI_COLOR_PALETTE[232], 0x08_08_08);
        assert_eq2!(ANSI_COLOR_PALETTE[255], 0xee_ee_ee);
    }

    #[test_case(RgbValue::from_u8(0, 135, 255), 245)]
    #[test_case(RgbValue::from_u8(255, 135, 0), 249)]
    #[test_case(RgbValue::from_u8(175, 215, 135), 251)]
    #[test_case(RgbValue::from_u8(0, 0, 0), 16)]
    fn test_convert_rgb_into_grayscale(rgb: RgbValue, index: u8) {
        assert_eq2!(convert_rgb_into_grayscale(rgb), AnsiValue::new(index));
    }

    #[test]
    fn test_find_nearest_basic_color_exact() {
        for basic_color in BasicColor::ALL {
            assert_eq2!(find_nearest_basic_color(basic_color.rgb(), 0), basic_color);
        }
    }

    #[test]
    fn test_find_nearest_basic_color_closest() {
        assert_eq2!(
            find_nearest_basic_color(RgbValue::from_u8(200, 10, 10), 0),
            BasicColor::Red
        );
        assert_eq2!(
            find_nearest_basic_color(RgbValue::from_u8(250, 250, 250), 0),
            BasicColor::BrightWhite
        );
        assert_eq2!(
            find_nearest_basic_color(RgbValue::from_u8(40, 40, 40), 0),
            BasicColor::BrightBlack
        );
    }

    #[test]
    fn test_find_nearest_basic_color_spot_on_shortcut() {
        // (20, 20, 20) is ~34.6 away from Black and ~65.8 away from BrightBlack. A
        // threshold of 40 accepts Black as soon as it is visited.
        assert_eq2!(
            find_nearest_basic_color(RgbValue::from_u8(20, 20, 20), 40),
            BasicColor::Black
        );
        // With a huge threshold the first color visited always wins.
        assert_eq2!(
            find_nearest_basic_color(RgbValue::from_u8(255, 255, 255), 1000),
            BasicColor::Black
        );
    }

    #[test]
    fn test_rgb_distance() {
        let lhs = RgbValue::from_u8(0, 0, 0);
        let rhs = RgbValue::from_u8(3, 4, 0);
        assert_eq2!(rgb_distance_squared(lhs, rhs), 25);
        assert!((rgb_distance(lhs, rhs) - 5.0).abs() < f64::EPSILON);
    }
}
