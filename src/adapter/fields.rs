//! Forgiving accessors over decoded command output
//!
//! Paths are JSON Pointers (`/Reservations/0/Instances`). A missing field, or
//! one of the wrong type, reads as empty instead of failing.

use serde_json::Value;

/// Field lookups that fall back to empty values
pub trait FieldExt {
    /// String at `pointer`, or `""`
    fn text(&self, pointer: &str) -> &str;

    /// String at `pointer`, or `fallback` when missing or empty
    fn text_or<'a>(&'a self, pointer: &str, fallback: &'a str) -> &'a str;

    /// Array at `pointer`, or an empty slice
    fn items(&self, pointer: &str) -> &[Value];

    /// Integer at `pointer`
    fn number(&self, pointer: &str) -> Option<i64>;
}

impl FieldExt for Value {
    fn text(&self, pointer: &str) -> &str {
        self.pointer(pointer).and_then(Value::as_str).unwrap_or("")
    }

    fn text_or<'a>(&'a self, pointer: &str, fallback: &'a str) -> &'a str {
        match self.text(pointer) {
            "" => fallback,
            text => text,
        }
    }

    fn items(&self, pointer: &str) -> &[Value] {
        self.pointer(pointer)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn number(&self, pointer: &str) -> Option<i64> {
        self.pointer(pointer).and_then(Value::as_i64)
    }
}
