// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Make escape sequences printable, so they can be copy pasted into `echo -e` or a
/// source file. ESC becomes `\033`, and line breaks become `\n` and `\r`.
///
/// ```
/// use anscapes::{SgrCode, escape_for_copy_paste};
///
/// let seq = format!("{}hi{}\n", SgrCode::Bold, SgrCode::Reset);
/// assert_eq!(escape_for_copy_paste(&seq), r"\033[1mhi\033[0m\n");
/// ```
#[must_use]
pub fn escape_for_copy_paste(input: &str) -> String {
    let mut acc = String::with_capacity(input.len() + input.len() / 4);
    for ch in input.chars() {
        match ch {
            '\x1b' => acc.push_str(r"\033"),
            '\n' => acc.push_str(r"\n"),
            '\r' => acc.push_str(r"\r"),
            _ => acc.push(ch),
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_escape_for_copy_paste() {
        assert_eq2!(escape_for_copy_paste(""), "");
        assert_eq2!(escape_for_copy_paste("plain ▀ text"), "plain ▀ text");
        assert_eq2!(
            escape_for_copy_paste("\x1b[38;5;42m▀\x1b[0m\r\n"),
            r"\033[38;5;42m▀\033[0m\r\n"
        );
    }
}
