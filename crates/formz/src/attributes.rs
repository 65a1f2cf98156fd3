// File: src/attributes.rs
// Purpose: Data attributes reflecting field values, validity and errors on the form element

use maud::html;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::form::FormConfiguration;
use crate::naming::{error_key, valid_key, validation_error_key, value_key};
use crate::result::ValidationResult;
use crate::values::FormValues;

/// Attribute name to attribute value, ordered by name.
///
/// Keys are given without the `data-` prefix, which is added when rendering
/// HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DataAttributes(BTreeMap<String, String>);

impl DataAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an attribute; an existing value for the key is replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merges `other` into `self`, later values winning.
    pub fn merge(&mut self, other: DataAttributes) {
        self.0.extend(other.0);
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }

    /// Renders the attributes as `data-{key}="{value}"` pairs, values
    /// HTML-escaped.
    pub fn render_html(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| format!(r#"data-{}="{}""#, key, html! { (value) }.into_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromIterator<(String, String)> for DataAttributes {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Generates the data attributes of one form for one request.
///
/// Deactivated fields (see [`ValidationResult::deactivated_fields`]) never
/// produce any attribute.
pub struct DataAttributeMapper<'a> {
    form: &'a FormConfiguration,
    result: &'a ValidationResult,
    deactivated: BTreeSet<&'a str>,
}

impl<'a> DataAttributeMapper<'a> {
    pub fn new(form: &'a FormConfiguration, result: &'a ValidationResult) -> Self {
        Self {
            form,
            result,
            deactivated: result.deactivated_fields(),
        }
    }

    fn is_deactivated(&self, field_name: &str) -> bool {
        self.deactivated.contains(field_name)
    }

    /// `formz-value-{field}` for every field the form instance exposes.
    pub fn fields_values(&self, values: &dyn FormValues) -> DataAttributes {
        self.form
            .fields
            .iter()
            .filter(|field| !self.is_deactivated(&field.name))
            .filter_map(|field| match values.get(&field.name) {
                Some(value) => Some((value_key(&field.name), value.to_attribute_value())),
                None => {
                    tracing::trace!(field = %field.name, "no value exposed by form instance");
                    None
                }
            })
            .collect()
    }

    /// `formz-error-{field}` and `formz-error-{field}-{title}` for every
    /// configured field whose sub-result holds errors.
    pub fn fields_errors(&self) -> DataAttributes {
        let mut attributes = DataAttributes::new();

        for (field_name, field_result) in self.result.sub_results() {
            if self.is_deactivated(field_name) || !self.form.has_field(field_name) {
                tracing::trace!(field = %field_name, "skipping errors of unknown or deactivated field");
                continue;
            }

            if !field_result.has_errors() {
                continue;
            }

            attributes.insert(error_key(field_name), "1");
            for error in field_result.errors() {
                attributes.insert(validation_error_key(field_name, error.title_or_default()), "1");
            }
        }

        attributes
    }

    /// `formz-valid-{field}` for every configured field without errors.
    pub fn fields_valid(&self) -> DataAttributes {
        self.form
            .fields
            .iter()
            .filter(|field| !self.is_deactivated(&field.name) && !self.result.has_errors(&field.name))
            .map(|field| (valid_key(&field.name), "1".to_string()))
            .collect()
    }
}

/// Builds every data attribute of the form: values, then errors, then
/// validity.
pub fn build_data_attributes(
    values: &dyn FormValues,
    result: &ValidationResult,
    form: &FormConfiguration,
) -> DataAttributes {
    let mapper = DataAttributeMapper::new(form, result);

    let mut attributes = mapper.fields_values(values);
    attributes.merge(mapper.fields_errors());
    attributes.merge(mapper.fields_valid());

    tracing::debug!(form = %form.name, attributes = attributes.len(), "built data attributes");
    attributes
}
