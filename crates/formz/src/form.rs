// File: src/form.rs
// Purpose: Form definition (fields, validators, activation conditions) loaded from TOML or JSON

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use crate::condition::{self, ConditionItem};
use crate::error::{FormzError, Result};

/// Configuration of a single form: its name, its fields and the condition
/// items shared by every activation of the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormConfiguration {
    pub name: String,

    /// Condition items usable from any activation expression of the form.
    #[serde(default)]
    pub conditions: BTreeMap<String, ConditionItem>,

    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A named input of a form and its ordered validators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Field {
    pub name: String,

    #[serde(default)]
    pub validators: Vec<Validator>,
}

/// A validation rule attached to a field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Validator {
    pub name: String,

    /// When absent the validator is always active.
    #[serde(default)]
    pub activation: Option<Activation>,
}

/// Boolean expression over condition names, deciding client-side whether a
/// validator runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Activation {
    pub expression: String,

    /// Items local to this activation; they shadow form-wide conditions.
    #[serde(default)]
    pub items: BTreeMap<String, ConditionItem>,
}

impl FormConfiguration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder: adds a field
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Builder: adds a form-wide condition item
    pub fn with_condition(mut self, name: impl Into<String>, item: ConditionItem) -> Self {
        self.conditions.insert(name.into(), item);
        self
    }

    /// Load a form definition, choosing the format from the file extension
    /// (`.toml` or `.json`). The loaded definition is validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| FormzError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let form = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => return Err(FormzError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::debug!(form = %form.name, fields = form.fields.len(), "loaded form definition");
        Ok(form)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let form: Self = toml::from_str(content)?;
        form.validate()?;
        Ok(form)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let form: Self = serde_json::from_str(content)?;
        form.validate()?;
        Ok(form)
    }

    /// Checks that every activation expression parses and only references
    /// known condition items.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                tracing::warn!(form = %self.name, field = %field.name, "duplicate field name");
            }

            for validator in &field.validators {
                let Some(activation) = &validator.activation else {
                    continue;
                };

                let condition_error = |message: String| FormzError::Condition {
                    field: field.name.clone(),
                    validator: validator.name.clone(),
                    message,
                };

                let tree = condition::parse(&activation.expression).map_err(&condition_error)?;

                if let Some(unknown) = tree
                    .condition_names()
                    .into_iter()
                    .find(|name| self.resolve_condition(activation, name).is_none())
                {
                    return Err(condition_error(format!("unknown condition `{}`", unknown)));
                }
            }
        }

        Ok(())
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Looks a condition name up in the activation's own items first, then in
    /// the form-wide conditions.
    pub fn resolve_condition<'a>(
        &'a self,
        activation: &'a Activation,
        name: &str,
    ) -> Option<&'a ConditionItem> {
        activation
            .items
            .get(name)
            .or_else(|| self.conditions.get(name))
    }
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            validators: Vec::new(),
        }
    }

    /// Builder: adds a validator
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }
}

impl Validator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            activation: None,
        }
    }

    /// Builder: gates the validator behind an activation expression
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = Some(activation);
        self
    }
}

impl Activation {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            items: BTreeMap::new(),
        }
    }

    /// Builder: declares an item local to this activation
    pub fn with_item(mut self, name: impl Into<String>, item: ConditionItem) -> Self {
        self.items.insert(name.into(), item);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRATION: &str = r#"
        name = "registration"

        [conditions.colorIsRed]
        type = "fieldHasValue"
        fieldName = "color"
        fieldValue = "red"

        [[fields]]
        name = "color"

        [[fields]]
        name = "email"

        [[fields.validators]]
        name = "required"

        [fields.validators.activation]
        expression = "colorIsRed && !emailEmpty"

        [fields.validators.activation.items.emailEmpty]
        type = "fieldIsEmpty"
        fieldName = "email"
    "#;

    #[test]
    fn test_parse_toml_definition() {
        let form = FormConfiguration::from_toml_str(REGISTRATION).unwrap();

        assert_eq!(form.name, "registration");
        assert_eq!(form.fields.len(), 2);
        assert!(form.has_field("email"));
        assert!(!form.has_field("unknown"));

        let email = form.field("email").unwrap();
        let activation = email.validators[0].activation.as_ref().unwrap();
        assert_eq!(activation.expression, "colorIsRed && !emailEmpty");
        assert!(form.resolve_condition(activation, "colorIsRed").is_some());
        assert!(form.resolve_condition(activation, "emailEmpty").is_some());
    }

    #[test]
    fn test_unknown_condition_is_rejected() {
        let form = FormConfiguration::new("contact").with_field(
            Field::new("email")
                .with_validator(Validator::new("required").with_activation(Activation::new("missing"))),
        );

        let err = form.validate().unwrap_err();
        match err {
            FormzError::Condition { field, validator, message } => {
                assert_eq!(field, "email");
                assert_eq!(validator, "required");
                assert!(message.contains("missing"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_syntax_error_is_rejected() {
        let form = FormConfiguration::new("contact")
            .with_condition("a", ConditionItem::FieldIsValid { field_name: "x".into() })
            .with_field(
                Field::new("email").with_validator(
                    Validator::new("required").with_activation(Activation::new("a &&")),
                ),
            );

        assert!(matches!(form.validate(), Err(FormzError::Condition { .. })));
    }

    #[test]
    fn test_local_item_shadows_form_condition() {
        let local = ConditionItem::FieldIsEmpty { field_name: "local".into() };
        let activation = Activation::new("flag").with_item("flag", local.clone());
        let form = FormConfiguration::new("contact")
            .with_condition("flag", ConditionItem::FieldIsValid { field_name: "global".into() });

        assert_eq!(form.resolve_condition(&activation, "flag"), Some(&local));
    }

    #[test]
    fn test_json_definition() {
        let json = r#"{
            "name": "newsletter",
            "fields": [
                { "name": "email", "validators": [ { "name": "email" } ] }
            ]
        }"#;

        let form = FormConfiguration::from_json_str(json).unwrap();
        assert_eq!(form.fields[0].validators[0].name, "email");
        assert!(form.fields[0].validators[0].activation.is_none());
        assert!(form.conditions.is_empty());
    }
}
