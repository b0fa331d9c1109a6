//! File adapters: load a tree from disk, dump a tree's serialization to disk.
//!
//! The file handle in each adapter is scoped to the call and released on
//! every exit path, including parse failure.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::parser::parse;
use crate::serializer::serialize;
use crate::value::Value;

/// Read the file at `path` and parse its content as one JSON value.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Write `value`'s compact serialization to the file at `path`, overwriting
/// any existing content.
pub fn dump_to_file<P: AsRef<Path>>(value: &Value, path: P) -> Result<()> {
    fs::write(path, serialize(value))?;
    Ok(())
}
