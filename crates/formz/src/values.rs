// File: src/values.rs
// Purpose: Read access to the submitted values of a form

use std::collections::{BTreeMap, HashMap};

/// Value of a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Single(String),
    /// Multi-valued fields (checkboxes, multiple selects)
    List(Vec<String>),
}

impl FieldValue {
    /// String placed in the value data attribute; list items are joined
    /// with a single space.
    pub fn to_attribute_value(&self) -> String {
        match self {
            FieldValue::Single(value) => value.clone(),
            FieldValue::List(values) => values.join(" "),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Single(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::List(values)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        FieldValue::List(values.into_iter().map(String::from).collect())
    }
}

/// Capability to read a field's value from a bound form instance.
///
/// Returns `None` when the instance does not expose the field; such fields
/// are left out of the generated attributes.
pub trait FormValues {
    fn get(&self, field_name: &str) -> Option<FieldValue>;
}

impl<T: FormValues + ?Sized> FormValues for &T {
    fn get(&self, field_name: &str) -> Option<FieldValue> {
        (**self).get(field_name)
    }
}

impl FormValues for HashMap<String, FieldValue> {
    fn get(&self, field_name: &str) -> Option<FieldValue> {
        HashMap::get(self, field_name).cloned()
    }
}

impl FormValues for BTreeMap<String, FieldValue> {
    fn get(&self, field_name: &str) -> Option<FieldValue> {
        BTreeMap::get(self, field_name).cloned()
    }
}

impl FormValues for HashMap<String, String> {
    fn get(&self, field_name: &str) -> Option<FieldValue> {
        HashMap::get(self, field_name).cloned().map(FieldValue::Single)
    }
}

impl FormValues for serde_json::Map<String, serde_json::Value> {
    fn get(&self, field_name: &str) -> Option<FieldValue> {
        serde_json::Map::get(self, field_name).and_then(json_to_field_value)
    }
}

/// Only objects expose fields; any other JSON value exposes none.
impl FormValues for serde_json::Value {
    fn get(&self, field_name: &str) -> Option<FieldValue> {
        self.as_object().and_then(|object| FormValues::get(object, field_name))
    }
}

/// Scalars become single values and arrays of scalars become lists.
/// `null` and objects count as absent.
fn json_to_field_value(value: &serde_json::Value) -> Option<FieldValue> {
    use serde_json::Value;

    match value {
        Value::Array(items) => Some(FieldValue::List(
            items.iter().filter_map(json_scalar_to_string).collect(),
        )),
        other => json_scalar_to_string(other).map(FieldValue::Single),
    }
}

fn json_scalar_to_string(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
