// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          io::IsTerminal,
          sync::atomic::{AtomicI8, Ordering}};

/// Process wide color support state, which can be used to:
/// 1. Override the color support.
/// 2. Memoize the result of [`examine_env_vars_to_determine_color_support`], so that the
///    environment is only examined once.
///
/// An override always wins over the cached detection result.
///
/// ```
/// use anscapes::{ColorSupport, global_color_support};
///
/// global_color_support::set_override(ColorSupport::NoColor);
/// assert_eq!(global_color_support::detect(), ColorSupport::NoColor);
/// global_color_support::clear_override();
/// ```
pub mod global_color_support {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    static COLOR_SUPPORT_OVERRIDE: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    static COLOR_SUPPORT_CACHED: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    const NOT_SET_VALUE: i8 = -1;

    /// Determine whether color is supported on stdout, and if so what kind.
    ///
    /// - If the value has been set using [`set_override`], then that value is returned.
    /// - Otherwise the cached result of a previous detection is returned.
    /// - Otherwise [`examine_env_vars_to_determine_color_support`] runs and its result
    ///   is cached.
    #[must_use]
    pub fn detect() -> ColorSupport {
        if let Ok(it) = try_get_override() {
            return it;
        }

        if let Ok(cached) = try_get_cached() {
            return cached;
        }

        let detected = examine_env_vars_to_determine_color_support(Stream::Stdout);
        tracing::debug!(message = "detected color support", color_support = ?detected);
        COLOR_SUPPORT_CACHED.store(i8::from(detected), Ordering::Release);
        detected
    }

    /// Override the color support. Regardless of the value of the environment variables
    /// the value you set here will be used when you call [`detect()`].
    ///
    /// # Testing support
    ///
    /// In any test in which this function is called, please use the `#[serial]`
    /// attribute to annotate that test. Otherwise there will be flakiness in the test
    /// results (tests are run in parallel using many threads).
    pub fn set_override(value: ColorSupport) {
        COLOR_SUPPORT_OVERRIDE.store(i8::from(value), Ordering::Release);
    }

    pub fn clear_override() { COLOR_SUPPORT_OVERRIDE.store(NOT_SET_VALUE, Ordering::Release); }

    /// Forget the memoized detection result, so the next [`detect()`] examines the
    /// environment again.
    pub fn clear_cache() { COLOR_SUPPORT_CACHED.store(NOT_SET_VALUE, Ordering::Release); }

    /// Get the color support override value.
    ///
    /// # Errors
    ///
    /// Returns `Err(())` if no override has been set with [`set_override`].
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_OVERRIDE.load(Ordering::Acquire))
    }

    /// Get the memoized detection result.
    ///
    /// # Errors
    ///
    /// Returns `Err(())` if [`detect()`] hasn't examined the environment yet.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_cached() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_CACHED.load(Ordering::Acquire))
    }
}

/// Determine whether color is supported heuristically, based on the environment
/// variables, the OS, and whether `stream` is a terminal.
#[must_use]
pub fn examine_env_vars_to_determine_color_support(stream: Stream) -> ColorSupport {
    determine_color_support(
        |key| env::var(key).ok(),
        is_a_tty(stream),
        env::consts::OS,
        is_ci::uncached(),
    )
}

/// The decision behind [`examine_env_vars_to_determine_color_support`], with its
/// inputs passed in. `get_env` looks up an environment variable.
#[must_use]
pub fn determine_color_support(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    os: &str,
    is_ci: bool,
) -> ColorSupport {
    let term = get_env("TERM");
    let term = term.as_deref();
    let colorterm = get_env("COLORTERM");
    let colorterm = colorterm.as_deref();
    let is_set_and_not_zero = |key: &str| get_env(key).is_some_and(|it| it != "0");

    if is_set_and_not_zero("NO_COLOR")
        || term == Some("dumb")
        || !(is_tty || is_set_and_not_zero("IGNORE_IS_TERMINAL"))
    {
        return ColorSupport::NoColor;
    }

    if os == "macos" {
        let term_program = get_env("TERM_PROGRAM");
        match term_program.as_deref() {
            Some("Apple_Terminal") if term.is_some_and(check_256_color) => {
                return ColorSupport::Ansi256;
            }
            Some("iTerm.app") => return ColorSupport::Truecolor,
            _ => {}
        }
    }

    if matches!(colorterm, Some("truecolor" | "24bit")) {
        return ColorSupport::Truecolor;
    }

    if os == "windows" {
        return ColorSupport::Truecolor;
    }

    if term.is_some_and(check_256_color) {
        return ColorSupport::Ansi256;
    }

    if colorterm.is_some()
        || term.is_some_and(check_ansi_color)
        || is_set_and_not_zero("CLICOLOR")
        || is_ci
    {
        return ColorSupport::Truecolor;
    }

    ColorSupport::NoColor
}

/// The stream to check for color support.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// The result of the color support check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSupport {
    Truecolor,
    Ansi256,
    Grayscale,
    NoColor,
}

/// These trait implementations allow us to use `ColorSupport` and `i8` interchangeably.
mod convert_between_color_and_i8 {
    impl TryFrom<i8> for super::ColorSupport {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(super::ColorSupport::Ansi256),
                2 => Ok(super::ColorSupport::Truecolor),
                3 => Ok(super::ColorSupport::NoColor),
                4 => Ok(super::ColorSupport::Grayscale),
                _ => Err(()),
            }
        }
    }

    impl From<super::ColorSupport> for i8 {
        #[rustfmt::skip]
        fn from(value: super::ColorSupport) -> Self {
            match value {
                super::ColorSupport::Ansi256   => 1,
                super::ColorSupport::Truecolor => 2,
                super::ColorSupport::NoColor   => 3,
                super::ColorSupport::Grayscale => 4,
            }
        }
    }
}

mod helpers {
    use super::{IsTerminal, Stream};

    #[must_use]
    pub fn is_a_tty(stream: Stream) -> bool {
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    #[must_use]
    pub fn check_256_color(term: &str) -> bool {
        term.ends_with("256") || term.ends_with("256color")
    }

    #[must_use]
    pub fn check_ansi_color(term: &str) -> bool {
        term.starts_with("screen")
            || term.starts_with("xterm")
            || term.starts_with("vt100")
            || term.starts_with("vt220")
            || term.starts_with("rxvt")
            || term.contains("color")
            || term.contains("ansi")
            || term.contains("cygwin")
            || term.contains("linux")
    }
}
pub use helpers::*;
