//! Cursor over source text plus the scalar token scanners.
//!
//! The [`Cursor`] is a forward-only position tracker with one-character
//! lookahead. The scanners consume a single string, number, boolean, or null
//! token starting at the cursor's current position and report failures with
//! the byte offset where they were detected.
//!
//! Dialect notes (kept from the library's lineage, documented rather than
//! silently widened):
//!
//! - `skip_spaces` consumes `' '` only; tab and newline are not whitespace.
//! - Number/boolean/null tokens terminate at a **delimiter**: space, `}`,
//!   `]`, or `,` (or end of input).
//! - Recognized string escapes are `\b \f \n \r \t \" \\`; `\uXXXX` is not
//!   decoded and fails like any other unknown escape.
//! - Exponent notation is not part of the number grammar; the `e` fails the
//!   scan as a non-digit character.

use crate::error::{JsonError, Result};

/// Forward-only cursor over a borrowed text snapshot.
///
/// Position is monotonic; there is no rewind. The cursor borrows the source
/// text for the duration of one parse call and nothing produced by the parse
/// retains it afterwards.
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor { input, pos: 0 }
    }

    /// Current character without consuming it. `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Consume and return the current character. `None` at end of input.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Byte offset of the current position, for error reporting.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Consume a run of plain space characters. Tab and newline are not
    /// treated as whitespace.
    pub fn skip_spaces(&mut self) {
        while self.peek() == Some(' ') {
            self.pos += 1;
        }
    }
}

/// A character that terminates a number/boolean/null token.
pub(crate) fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '}' | ']' | ',')
}

/// Decode a single-character escape. `None` for unrecognized escapes.
fn decode_escape(c: char) -> Option<char> {
    match c {
        'b' => Some('\u{0008}'),
        'f' => Some('\u{000C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '"' => Some('"'),
        '\\' => Some('\\'),
        _ => None,
    }
}

/// Consume a quoted string token, returning its decoded content.
pub(crate) fn scan_string(cur: &mut Cursor) -> Result<String> {
    if cur.peek() != Some('"') {
        return Err(JsonError::MalformedString {
            offset: cur.pos(),
            message: "expected opening quote".to_string(),
        });
    }
    cur.next();

    let mut content = String::new();
    loop {
        let at = cur.pos();
        match cur.next() {
            None => {
                return Err(JsonError::MalformedString {
                    offset: at,
                    message: "unterminated string".to_string(),
                })
            }
            Some('"') => return Ok(content),
            Some('\\') => match cur.next() {
                None => {
                    return Err(JsonError::MalformedString {
                        offset: at,
                        message: "unterminated escape sequence".to_string(),
                    })
                }
                Some(e) => match decode_escape(e) {
                    Some(decoded) => content.push(decoded),
                    None => {
                        return Err(JsonError::MalformedString {
                            offset: at,
                            message: format!("unknown escape `\\{e}`"),
                        })
                    }
                },
            },
            Some(c) => content.push(c),
        }
    }
}

/// Consume a number token up to the next delimiter, returning its value.
pub(crate) fn scan_number(cur: &mut Cursor) -> Result<f64> {
    let start = cur.pos();
    let mut digits = String::new();

    if cur.peek() == Some('-') {
        cur.next();
        digits.push('-');
    }

    let mut seen_point = false;
    while let Some(c) = cur.peek() {
        if is_delimiter(c) {
            break;
        }
        let at = cur.pos();
        cur.next();
        match c {
            '.' if seen_point => {
                return Err(JsonError::MalformedNumber {
                    offset: at,
                    message: "second decimal point".to_string(),
                })
            }
            '.' => {
                seen_point = true;
                digits.push('.');
            }
            '0'..='9' => digits.push(c),
            other => {
                return Err(JsonError::MalformedNumber {
                    offset: at,
                    message: format!("unexpected character `{other}` in number"),
                })
            }
        }
    }

    digits.parse::<f64>().map_err(|_| JsonError::MalformedNumber {
        offset: start,
        message: format!("`{digits}` is not a number"),
    })
}

/// Consume characters up to the next delimiter (or end of input).
fn scan_literal_token(cur: &mut Cursor) -> String {
    let mut token = String::new();
    while let Some(c) = cur.peek() {
        if is_delimiter(c) {
            break;
        }
        cur.next();
        token.push(c);
    }
    token
}

/// Consume a boolean token: exactly `true` or `false` up to a delimiter.
pub(crate) fn scan_boolean(cur: &mut Cursor) -> Result<bool> {
    let start = cur.pos();
    match scan_literal_token(cur).as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(JsonError::MalformedLiteral {
            offset: start,
            message: format!("expected `true` or `false`, found `{other}`"),
        }),
    }
}

/// Consume a null token: exactly `null` up to a delimiter.
pub(crate) fn scan_null(cur: &mut Cursor) -> Result<()> {
    let start = cur.pos();
    match scan_literal_token(cur).as_str() {
        "null" => Ok(()),
        other => Err(JsonError::MalformedLiteral {
            offset: start,
            message: format!("expected `null`, found `{other}`"),
        }),
    }
}
