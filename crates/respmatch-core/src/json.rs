//! Generic JSON documents
//!
//! `serde_json::Value` is dynamically typed, so this is where the
//! "different kinds never match" rule is checked at runtime.

use crate::map::match_map_entries;
use crate::Structural;
use serde_json::{Map, Number, Value};

impl Structural for Value {
    fn structurally_matches(&self, actual: &Self) -> bool {
        match (self, actual) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(want), Value::Bool(have)) => want == have,
            (Value::Number(want), Value::Number(have)) => want.structurally_matches(have),
            (Value::String(want), Value::String(have)) => want == have,
            (Value::Array(want), Value::Array(have)) => want.structurally_matches(have),
            (Value::Object(want), Value::Object(have)) => want.structurally_matches(have),
            _ => false,
        }
    }
}

/// JSON has a single number kind: integers compare exactly, and as soon as
/// either side is a float both are compared as `f64`.
impl Structural for Number {
    fn structurally_matches(&self, actual: &Self) -> bool {
        if let (Some(want), Some(have)) = (self.as_i64(), actual.as_i64()) {
            return want == have;
        }
        if let (Some(want), Some(have)) = (self.as_u64(), actual.as_u64()) {
            return want == have;
        }
        match (self.as_f64(), actual.as_f64()) {
            (Some(want), Some(have)) => want == have,
            _ => false,
        }
    }
}

impl Structural for Map<String, Value> {
    fn structurally_matches(&self, actual: &Self) -> bool {
        match_map_entries(self, |key| actual.get(key))
    }
}
