use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row returned by a list endpoint
///
/// The panel does not know entity shapes; it reads `id` plus the few fields
/// used for conditional formatting, and hands the rest to the form modals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// `None` unless the value is a JSON object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Record id as a string; numeric ids are accepted too.
    pub fn id(&self) -> Option<String> {
        match self.get("id")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Numeric field; numeric strings are parsed.
    pub fn f64(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(value_as_f64)
    }

    pub fn i64(&self, field: &str) -> Option<i64> {
        match self.get(field)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Display text of a field; null and missing render as an empty string.
    pub fn text(&self, field: &str) -> String {
        self.get(field).map(value_text).unwrap_or_default()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Item {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

pub(crate) fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
