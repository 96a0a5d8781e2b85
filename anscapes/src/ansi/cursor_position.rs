// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor position report (DSR 6), the terminal's reply to
//! [`CsiSequence::RequestCursorPosition`].
//!
//! ```text
//! ESC [ 6 n         → request
//! ESC [ 12 ; 40 R   → reply: row 12, column 40
//! ```

use std::io::{Read, Write};

use super::constants::{CSI, CSI_PARAM_SEPARATOR, DSR_CURSOR_POSITION_RESPONSE_END};
use crate::{AnscapesError, AnscapesResult, CsiSequence};

/// Longest reply accepted before giving up: `ESC[65535;65535R` plus some slack.
const MAX_REPORT_LEN: usize = 32;

/// 1-based cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorPos {
    pub row: u16,
    pub col: u16,
}

impl Default for CursorPos {
    fn default() -> Self { Self { row: 1, col: 1 } }
}

/// Parse a cursor position report such as `ESC[12;40R`. An empty row or column field
/// stands for 1.
///
/// # Errors
///
/// Returns [`AnscapesError::MalformedCursorReport`] if the input is not a report.
pub fn parse_cursor_position_report(report: &[u8]) -> AnscapesResult<CursorPos> {
    let malformed = || AnscapesError::MalformedCursorReport {
        report: String::from_utf8_lossy(report).into_owned(),
    };

    let text = std::str::from_utf8(report).map_err(|_| malformed())?;
    let body = text
        .strip_prefix(CSI)
        .and_then(|it| it.strip_suffix(char::from(DSR_CURSOR_POSITION_RESPONSE_END)))
        .ok_or_else(malformed)?;
    let (row, col) = body.split_once(CSI_PARAM_SEPARATOR).ok_or_else(malformed)?;

    let parse_field = |field: &str| -> AnscapesResult<u16> {
        if field.is_empty() {
            Ok(1)
        } else {
            field.parse::<u16>().map_err(|_| malformed())
        }
    };

    Ok(CursorPos {
        row: parse_field(row)?,
        col: parse_field(col)?,
    })
}

/// Ask the terminal where the cursor is. Writes [`CsiSequence::RequestCursorPosition`]
/// to `writer` and reads the reply from `reader`.
///
/// This is experimental. The terminal must be in raw mode, otherwise the reply is line
/// buffered (and echoed). Any input that arrives before the reply is mixed into it.
///
/// # Errors
///
/// - [`AnscapesError::Io`] if writing the request or reading the reply fails.
/// - [`AnscapesError::MalformedCursorReport`] if the reply can't be parsed, or the
///   reader ends before the reply is complete.
pub fn query_cursor_position(
    reader: &mut impl Read,
    writer: &mut impl Write,
) -> AnscapesResult<CursorPos> {
    write!(writer, "{}", CsiSequence::RequestCursorPosition)?;
    writer.flush()?;

    let mut acc = Vec::with_capacity(MAX_REPORT_LEN);
    let mut byte = [0_u8; 1];
    loop {
        if reader.read(&mut byte)? == 0 || acc.len() >= MAX_REPORT_LEN {
            return Err(AnscapesError::MalformedCursorReport {
                report: String::from_utf8_lossy(&acc).into_owned(),
            });
        }
        acc.push(byte[0]);
        if byte[0] == DSR_CURSOR_POSITION_RESPONSE_END {
            break;
        }
    }

    tracing::debug!(message = "cursor position report", report = ?String::from_utf8_lossy(&acc));
    parse_cursor_position_report(&acc)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(b"\x1b[12;40R", 12, 40)]
    #[test_case(b"\x1b[1;1R", 1, 1)]
    #[test_case(b"\x1b[;7R", 1, 7)]
    #[test_case(b"\x1b[3;R", 3, 1)]
    #[test_case(b"\x1b[;R", 1, 1)]
    fn test_parse(report: &[u8], row: u16, col: u16) {
        assert_eq2!(parse_cursor_position_report(report).unwrap(), CursorPos { row, col });
    }

    #[test_case(b"")]
    #[test_case(b"12;40R")]
    #[test_case(b"\x1b[12;40")]
    #[test_case(b"\x1b[1240R")]
    #[test_case(b"\x1b[a;4R")]
    #[test_case(b"\x1b[99999;4R")]
    fn test_parse_malformed(report: &[u8]) {
        assert!(matches!(
            parse_cursor_position_report(report),
            Err(AnscapesError::MalformedCursorReport { .. })
        ));
    }

    #[test]
    fn test_query_writes_request_and_reads_reply() {
        let mut reader = Cursor::new(b"\x1b[24;80Rtrailing".to_vec());
        let mut writer = Vec::<u8>::new();

        let pos = query_cursor_position(&mut reader, &mut writer).unwrap();

        assert_eq2!(pos, CursorPos { row: 24, col: 80 });
        assert_eq2!(writer, b"\x1b[6n".to_vec());
        // Only the reply is consumed.
        assert_eq2!(reader.position(), 8);
    }

    #[test]
    fn test_query_truncated_reply() {
        let mut reader = Cursor::new(b"\x1b[24;8".to_vec());
        let mut writer = Vec::<u8>::new();
        assert!(matches!(
            query_cursor_position(&mut reader, &mut writer),
            Err(AnscapesError::MalformedCursorReport { .. })
        ));
    }
}
