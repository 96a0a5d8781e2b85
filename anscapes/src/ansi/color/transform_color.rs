// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{AnsiValue, BasicColor, RgbValue};

/// Convert between the color representations of the three terminal capability tiers.
///
/// Converting a value into its own representation is the identity, so re-encoding an
/// already encoded color never changes it.
pub trait TransformColor {
    /// Returns a [`RgbValue`] representation of the `self` color.
    fn as_rgb(&self) -> RgbValue;

    /// Returns the index of a color in 256-color ANSI palette approximating the `self`
    /// color.
    fn as_ansi(&self) -> AnsiValue;

    /// Returns the basic 16 color approximating the `self` color.
    fn as_basic(&self) -> BasicColor;

    /// Returns the index of a color in 256-color ANSI palette approximating the `self`
    /// color as grayscale.
    fn as_grayscale(&self) -> AnsiValue;
}
