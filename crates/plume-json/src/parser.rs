//! Recursive-descent parser: text in, value tree out.
//!
//! The dispatcher skips spaces, peeks one character, and routes to a scalar
//! scanner or recurses for a container. Recursion depth tracks input nesting
//! depth, so an explicit ceiling is threaded through the descent and
//! adversarial input fails with [`JsonError::TooDeeplyNested`] instead of
//! exhausting the call stack.
//!
//! A parse call consumes one value; text after the root value is not
//! inspected. Errors short-circuit on first failure and carry the byte
//! offset where they were detected — there is no shared error state between
//! calls, so parsing is freely reentrant.

use crate::cursor::{self, Cursor};
use crate::error::{JsonError, Result};
use crate::value::Value;

/// Default ceiling on container nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Parse one JSON value from `text` with the default depth ceiling.
pub fn parse(text: &str) -> Result<Value> {
    parse_with_depth(text, DEFAULT_MAX_DEPTH)
}

/// Parse one JSON value from `text`, failing with
/// [`JsonError::TooDeeplyNested`] once containers nest more than `max_depth`
/// levels deep.
pub fn parse_with_depth(text: &str, max_depth: usize) -> Result<Value> {
    let mut cur = Cursor::new(text);
    parse_value(&mut cur, 0, max_depth)
}

/// Dispatch on the next significant character.
fn parse_value(cur: &mut Cursor, depth: usize, max_depth: usize) -> Result<Value> {
    cur.skip_spaces();
    let offset = cur.pos();
    match cur.peek() {
        Some('"') => Ok(Value::String(cursor::scan_string(cur)?)),
        Some('-' | '0'..='9') => Ok(Value::Number(cursor::scan_number(cur)?)),
        Some('t' | 'f') => Ok(Value::Bool(cursor::scan_boolean(cur)?)),
        Some('n') => {
            cursor::scan_null(cur)?;
            Ok(Value::Null)
        }
        Some('{') => parse_object(cur, depth, max_depth),
        Some('[') => parse_array(cur, depth, max_depth),
        Some(other) => Err(JsonError::UnexpectedToken {
            offset,
            message: format!("no value form starts with `{other}`"),
        }),
        None => Err(JsonError::UnexpectedToken {
            offset,
            message: "unexpected end of input".to_string(),
        }),
    }
}

fn parse_object(cur: &mut Cursor, depth: usize, max_depth: usize) -> Result<Value> {
    if depth >= max_depth {
        return Err(JsonError::TooDeeplyNested {
            offset: cur.pos(),
            limit: max_depth,
        });
    }
    cur.next(); // consume '{'

    let mut object = Value::object();

    cur.skip_spaces();
    if cur.peek() == Some('}') {
        cur.next();
        return Ok(object);
    }

    loop {
        cur.skip_spaces();
        let key_at = cur.pos();
        if cur.peek() != Some('"') {
            return Err(JsonError::MalformedContainer {
                offset: key_at,
                message: "object keys must be quoted strings".to_string(),
            });
        }
        let key = cursor::scan_string(cur)?;

        cur.skip_spaces();
        let colon_at = cur.pos();
        if cur.next() != Some(':') {
            return Err(JsonError::MalformedContainer {
                offset: colon_at,
                message: "expected `:` after object key".to_string(),
            });
        }

        let value = parse_value(cur, depth + 1, max_depth)?;
        // Duplicate keys are last-write-wins.
        object.set(key, value);

        cur.skip_spaces();
        let sep_at = cur.pos();
        match cur.next() {
            Some(',') => {
                cur.skip_spaces();
                if cur.peek() == Some('}') {
                    return Err(JsonError::MalformedContainer {
                        offset: cur.pos(),
                        message: "trailing comma before `}`".to_string(),
                    });
                }
            }
            Some('}') => return Ok(object),
            Some(other) => {
                return Err(JsonError::MalformedContainer {
                    offset: sep_at,
                    message: format!("expected `,` or `}}` after object member, found `{other}`"),
                })
            }
            None => {
                return Err(JsonError::MalformedContainer {
                    offset: sep_at,
                    message: "unterminated object".to_string(),
                })
            }
        }
    }
}

fn parse_array(cur: &mut Cursor, depth: usize, max_depth: usize) -> Result<Value> {
    if depth >= max_depth {
        return Err(JsonError::TooDeeplyNested {
            offset: cur.pos(),
            limit: max_depth,
        });
    }
    cur.next(); // consume '['

    let mut array = Value::array();

    cur.skip_spaces();
    if cur.peek() == Some(']') {
        cur.next();
        return Ok(array);
    }

    loop {
        let value = parse_value(cur, depth + 1, max_depth)?;
        array.append(value);

        cur.skip_spaces();
        let sep_at = cur.pos();
        match cur.next() {
            Some(',') => {
                cur.skip_spaces();
                if cur.peek() == Some(']') {
                    return Err(JsonError::MalformedContainer {
                        offset: cur.pos(),
                        message: "trailing comma before `]`".to_string(),
                    });
                }
            }
            Some(']') => return Ok(array),
            Some(other) => {
                return Err(JsonError::MalformedContainer {
                    offset: sep_at,
                    message: format!("expected `,` or `]` after array element, found `{other}`"),
                })
            }
            None => {
                return Err(JsonError::MalformedContainer {
                    offset: sep_at,
                    message: "unterminated array".to_string(),
                })
            }
        }
    }
}
