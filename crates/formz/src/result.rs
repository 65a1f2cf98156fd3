// File: src/result.rs
// Purpose: Server-side validation result (per-field errors plus metadata tree)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

use crate::naming::DEFAULT_ERROR_TITLE;

/// Metadata key under which the names of deactivated fields are stored.
pub const ACTIVATION_METADATA_KEY: &str = "activation";

/// A single validation error for a field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the failed rule, possibly namespaced (`vendor:rule`)
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
        }
    }

    pub fn with_title(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            message: message.into(),
        }
    }

    /// The title, or `default` when the error has none.
    pub fn title_or_default(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => DEFAULT_ERROR_TITLE,
        }
    }
}

/// Validation outcome of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldResult {
    errors: Vec<FieldError>,
}

impl FieldResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

/// Result of validating a submitted form.
///
/// Field results are kept per field name. Metadata is a free-form tree
/// addressed with dotted paths; `activation.<field>` marks a deactivated
/// field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(default)]
    fields: BTreeMap<String, FieldResult>,

    #[serde(default)]
    metadata: Value,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(content: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Records a field as validated, creating an empty sub-result if needed.
    pub fn mark_validated(&mut self, field_name: impl Into<String>) -> &mut Self {
        self.fields.entry(field_name.into()).or_default();
        self
    }

    pub fn add_error(&mut self, field_name: impl Into<String>, error: FieldError) -> &mut Self {
        self.fields
            .entry(field_name.into())
            .or_default()
            .errors
            .push(error);
        self
    }

    /// Marks a field as deactivated for this request.
    pub fn deactivate_field(&mut self, field_name: &str) -> &mut Self {
        self.set_metadata(&format!("{}.{}", ACTIVATION_METADATA_KEY, field_name), Value::Bool(true))
    }

    pub fn sub_result(&self, field_name: &str) -> Option<&FieldResult> {
        self.fields.get(field_name)
    }

    pub fn sub_results(&self) -> impl Iterator<Item = (&str, &FieldResult)> {
        self.fields.iter().map(|(name, result)| (name.as_str(), result))
    }

    /// A missing sub-result has no errors.
    pub fn has_errors(&self, field_name: &str) -> bool {
        self.sub_result(field_name).is_some_and(FieldResult::has_errors)
    }

    /// Value stored at a dotted metadata path.
    pub fn metadata(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.metadata, |node, segment| node.as_object()?.get(segment))
    }

    /// Stores a value at a dotted metadata path, creating intermediate
    /// objects and replacing any non-object found on the way.
    pub fn set_metadata(&mut self, path: &str, value: Value) -> &mut Self {
        let segments: Vec<&str> = path.split('.').collect();
        let metadata = std::mem::take(&mut self.metadata);
        self.metadata = with_path(metadata, &segments, value);
        self
    }

    /// Names of the fields deactivated for this request.
    pub fn deactivated_fields(&self) -> BTreeSet<&str> {
        self.metadata(ACTIVATION_METADATA_KEY)
            .and_then(Value::as_object)
            .map(|entries| entries.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// Returns `node` with `value` stored under `segments`.
fn with_path(node: Value, segments: &[&str], value: Value) -> Value {
    let Some((first, rest)) = segments.split_first() else {
        return value;
    };

    let mut map = match node {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    let child = map.remove(*first).unwrap_or(Value::Null);
    map.insert(first.to_string(), with_path(child, rest, value));

    Value::Object(map)
}
