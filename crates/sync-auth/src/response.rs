//! Abstract view over a decoded response body.
//!
//! Models are built from any string-keyed mapping that implements
//! [`ResponseMap`]. Implementations are provided for the map types produced
//! by `serde_json`; other decoders can implement the trait directly.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

/// A single looked-up field of a [`ResponseMap`].
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    /// The key is not present.
    Absent,
    /// The key is present with an explicit null.
    Null,
    Bool(bool),
    /// Any numeric value, integer or floating point, widened to `f64`.
    Number(f64),
    String(&'a str),
    /// An array. Elements are never inspected by this crate.
    Array,
    /// A nested string-keyed mapping.
    Map(&'a dyn ResponseMap),
}

impl<'a> FieldValue<'a> {
    /// Returns a short name for the kind of value, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Absent => "absent",
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "bool",
            FieldValue::Number(_) => "number",
            FieldValue::String(_) => "string",
            FieldValue::Array => "array",
            FieldValue::Map(_) => "map",
        }
    }

    /// Returns the string if this is a string value.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            FieldValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the nested mapping if this is a map value.
    pub fn as_map(&self) -> Option<&'a dyn ResponseMap> {
        match *self {
            FieldValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl std::fmt::Debug for FieldValue<'_> {
    // Values may be credentials, so only the kind is shown.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FieldValue::{}", self.kind())
    }
}

/// A read-only, string-keyed mapping decoded from a response body.
pub trait ResponseMap {
    /// Look up a single field.
    fn field(&self, key: &str) -> FieldValue<'_>;

    /// Iterate over the keys present in the mapping.
    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}

fn from_json(value: Option<&Value>) -> FieldValue<'_> {
    match value {
        None => FieldValue::Absent,
        Some(Value::Null) => FieldValue::Null,
        Some(Value::Bool(b)) => FieldValue::Bool(*b),
        // Only numbers outside f64 range fail to convert; NaN is rejected downstream.
        Some(Value::Number(n)) => FieldValue::Number(n.as_f64().unwrap_or(f64::NAN)),
        Some(Value::String(s)) => FieldValue::String(s),
        Some(Value::Array(_)) => FieldValue::Array,
        Some(Value::Object(m)) => FieldValue::Map(m),
    }
}

impl ResponseMap for Map<String, Value> {
    fn field(&self, key: &str) -> FieldValue<'_> {
        from_json(self.get(key))
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(Map::keys(self).map(String::as_str))
    }
}

impl<S: BuildHasher> ResponseMap for HashMap<String, Value, S> {
    fn field(&self, key: &str) -> FieldValue<'_> {
        from_json(self.get(key))
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(HashMap::keys(self).map(String::as_str))
    }
}

impl ResponseMap for BTreeMap<String, Value> {
    fn field(&self, key: &str) -> FieldValue<'_> {
        from_json(self.get(key))
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(BTreeMap::keys(self).map(String::as_str))
    }
}
