//! Shared property lookup for ffprobe JSON objects
//!
//! Every accessor in this crate follows the same pattern: find a key in a
//! JSON object scope, then convert the value it holds. A missing scope, a
//! scope that is not an object, and a missing key all resolve to `None`.
//!
//! Scalar conversion is deliberately permissive:
//!
//! - text: strings as-is, numbers and booleans as their JSON text, `null` as
//!   the empty string, arrays and objects as compact JSON.
//! - integers: integers as-is (saturating at `i64::MAX`), floats truncated
//!   toward zero, strings parsed as an integer or else a float, booleans as
//!   1/0, everything else as 0.
//!
//! The integer conversion never fails, so it must not be used to validate
//! that a field is numeric.

use serde_json::{Map, Number, Value};

pub const KEY_TAGS: &str = "tags";

/// A borrowed view of one JSON object scope.
///
/// Lookups return `None` unless the scope exists, is an object, and
/// contains the key. Results borrow from the document, not from the view.
#[derive(Debug, Clone, Copy)]
pub struct PropertyScope<'a> {
    scope: Option<&'a Value>,
}

impl<'a> PropertyScope<'a> {
    pub fn new(scope: Option<&'a Value>) -> Self {
        Self { scope }
    }

    pub fn property(self, key: &str) -> Option<&'a Value> {
        self.scope?.as_object()?.get(key)
    }

    pub fn string_property(self, key: &str) -> Option<String> {
        self.property(key).map(value_to_string)
    }

    pub fn number_property(self, key: &str) -> Option<i64> {
        self.property(key).map(value_to_i64)
    }

    /// The `"tags"` object of the scope, if it has one
    pub fn tags(self) -> Option<&'a Map<String, Value>> {
        self.property(KEY_TAGS)?.as_object()
    }

    pub fn tag(self, name: &str) -> Option<String> {
        self.tags()?.get(name).map(value_to_string)
    }
}

/// Converts a JSON value to text.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Converts a JSON value to a 64-bit integer. Non-numeric values yield 0.
pub fn value_to_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => number_to_i64(n),
        Value::String(s) => text_to_i64(s),
        Value::Bool(b) => i64::from(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}

fn number_to_i64(n: &Number) -> i64 {
    if let Some(i) = n.as_i64() {
        i
    } else if n.is_u64() {
        i64::MAX
    } else {
        // `as` saturates out-of-range floats
        n.as_f64().map(|f| f as i64).unwrap_or(0)
    }
}

fn text_to_i64(text: &str) -> i64 {
    let trimmed = text.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return i;
    }

    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => f as i64,
        _ => 0,
    }
}

/// Typed accessors over a single JSON object.
///
/// Implementors only say where their object lives; the lookups and
/// conversions come from `PropertyScope`.
pub trait JsonProperties {
    /// The object this accessor reads from, if any.
    fn properties(&self) -> Option<&Value>;

    fn scope(&self) -> PropertyScope<'_> {
        PropertyScope::new(self.properties())
    }

    /// Returns the raw value stored under `key`.
    fn property(&self, key: &str) -> Option<&Value> {
        self.scope().property(key)
    }

    /// Returns the value stored under `key` converted to text.
    fn string_property(&self, key: &str) -> Option<String> {
        self.scope().string_property(key)
    }

    /// Returns the value stored under `key` converted to an integer.
    fn number_property(&self, key: &str) -> Option<i64> {
        self.scope().number_property(key)
    }

    /// Returns the `"tags"` object.
    fn tags(&self) -> Option<&Map<String, Value>> {
        self.scope().tags()
    }

    /// Returns a single tag converted to text.
    fn tag(&self, name: &str) -> Option<String> {
        self.scope().tag(name)
    }
}
