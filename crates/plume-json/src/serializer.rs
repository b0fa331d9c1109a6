//! Compact serializer: value tree in, JSON text out.
//!
//! Output carries no indentation or inter-token spacing. Object members are
//! emitted in insertion order so a parsed document renders back in its
//! original member order.
//!
//! String content is emitted verbatim between quotes, without re-escaping.
//! Control characters, quotes, or backslashes stored in a string (e.g. a
//! newline decoded from `\n` during parsing) therefore reach the output
//! raw; round-trip fidelity holds for strings free of quotes and
//! backslashes.

use crate::value::Value;

/// Render `value` as compact JSON text.
pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            // f64 Display renders whole doubles without a fractional part
            // (18.0 -> "18") and shortest round-trip digits otherwise.
            out.push_str(&n.to_string());
        }
        Value::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(entries) => {
            out.push('{');
            for (i, (key, member)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('"');
                out.push_str(key);
                out.push_str("\":");
                write_value(member, out);
            }
            out.push('}');
        }
    }
}
