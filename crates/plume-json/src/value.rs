//! The JSON value tree: a tagged variant with exhaustive matching at each
//! consumer, plus the query and mutation surface.
//!
//! Ownership is strictly tree-shaped. Every child is owned by its parent and
//! the root is owned by the caller; inserting moves a value into the tree and
//! dropping any node recursively drops its subtree. Nothing in a tree borrows
//! from the text it was parsed from.

use std::ops::Index;

/// One JSON value: a scalar or a container of owned children.
///
/// Numbers are stored uniformly as `f64`; there is no integer/float
/// distinction. Objects keep their members in insertion order (round-trip
/// fidelity with the source document) and keys are unique — [`Value::set`]
/// and the parser replace an existing key's value in place.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    /// Key-value pairs in insertion order. Keys are unique.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// New empty object.
    pub fn object() -> Value {
        Value::Object(Vec::new())
    }

    /// New empty array.
    pub fn array() -> Value {
        Value::Array(Vec::new())
    }

    /// String content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Array elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Object members in insertion order, if this is an object.
    pub fn entries(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Number of children of a container. Scalars have no children and
    /// report 0.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(entries) => entries.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the member stored under `key`. `None` if this is not an object
    /// or the key is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Mutably borrow the member stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Value::Object(entries) => entries
                .iter_mut()
                .find(|entry| entry.0 == key)
                .map(|entry| &mut entry.1),
            _ => None,
        }
    }

    /// Borrow the array element at `index`. `None` if this is not an array
    /// or the index is out of bounds.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array()?.get(index)
    }

    /// Insert or replace the member stored under `key`, taking ownership of
    /// `value`. Returns the replaced value when the key already existed.
    ///
    /// # Panics
    ///
    /// Panics if this value is not an object.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let Value::Object(entries) = self else {
            panic!("Value::set called on a non-object value");
        };
        let key = key.into();
        for (k, v) in entries.iter_mut() {
            if *k == key {
                return Some(std::mem::replace(v, value));
            }
        }
        entries.push((key, value));
        None
    }

    /// Add `value` at the end of the array, taking ownership of it.
    ///
    /// # Panics
    ///
    /// Panics if this value is not an array.
    pub fn append(&mut self, value: Value) {
        let Value::Array(items) = self else {
            panic!("Value::append called on a non-array value");
        };
        items.push(value);
    }

    /// Remove and return the final array element. `None` when the array is
    /// already empty.
    ///
    /// # Panics
    ///
    /// Panics if this value is not an array.
    pub fn remove_last(&mut self) -> Option<Value> {
        let Value::Array(items) = self else {
            panic!("Value::remove_last called on a non-array value");
        };
        items.pop()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

/// Array element access: `value[2]`.
///
/// Panics if the value is not an array or the index is out of bounds; use
/// [`Value::get_index`] for a non-panicking lookup.
impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        match self {
            Value::Array(items) => &items[index],
            _ => panic!("indexed into a non-array value"),
        }
    }
}

/// Object member access: `value["name"]`.
///
/// Panics if the value is not an object or the key is absent; use
/// [`Value::get`] for a non-panicking lookup.
impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.get(key) {
            Some(v) => v,
            None => panic!("no member `{key}` in object"),
        }
    }
}
