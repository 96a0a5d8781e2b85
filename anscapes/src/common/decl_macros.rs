// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the [`pretty_assertions::assert_eq`] macro, so that tests print a colored diff
/// when they fail.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Shorthand for `Ok(())` or `Ok(value)`.
///
/// ```
/// use anscapes::{AnscapesResult, ok};
///
/// fn it_works() -> AnscapesResult<()> { ok!() }
/// fn it_returns() -> AnscapesResult<u8> { ok!(1) }
/// # assert!(it_works().is_ok());
/// # assert_eq!(it_returns().unwrap(), 1);
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Install [`mimalloc`] as the global allocator. Call this at the top level of a binary,
/// outside of any function.
#[macro_export]
macro_rules! set_mimalloc_in_main {
    () => {
        #[global_allocator]
        static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;
    };
}
