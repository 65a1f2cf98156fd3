// File: src/condition/mod.rs
// Purpose: Activation condition items, expression trees and the processor seam

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::Result;
use crate::form::{Field, Validator};

pub mod javascript;
pub mod parser;

pub use javascript::JavaScriptProcessor;
pub use parser::{parse, ConditionNode};

/// A named client-side check referenced by activation expressions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ConditionItem {
    /// The field currently holds the given value.
    #[serde(rename_all = "camelCase")]
    FieldHasValue {
        field_name: String,
        field_value: String,
    },

    /// The field failed the given validation with the given error.
    #[serde(rename_all = "camelCase")]
    FieldHasError {
        field_name: String,
        validation_name: String,
        #[serde(default = "default_error_name")]
        error_name: String,
    },

    /// The field passed all of its validation rules.
    #[serde(rename_all = "camelCase")]
    FieldIsValid { field_name: String },

    /// The field has no value.
    #[serde(rename_all = "camelCase")]
    FieldIsEmpty { field_name: String },
}

fn default_error_name() -> String {
    crate::naming::DEFAULT_ERROR_TITLE.to_string()
}

impl ConditionItem {
    /// Identifier of the item type, as understood by the client runtime.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConditionItem::FieldHasValue { .. } => "fieldHasValue",
            ConditionItem::FieldHasError { .. } => "fieldHasError",
            ConditionItem::FieldIsValid { .. } => "fieldIsValid",
            ConditionItem::FieldIsEmpty { .. } => "fieldIsEmpty",
        }
    }

    /// Parameters handed to the client runtime along with the type.
    pub fn parameters(&self) -> serde_json::Value {
        match self {
            ConditionItem::FieldHasValue {
                field_name,
                field_value,
            } => json!({ "fieldName": field_name, "fieldValue": field_value }),
            ConditionItem::FieldHasError {
                field_name,
                validation_name,
                error_name,
            } => json!({
                "fieldName": field_name,
                "validationName": validation_name,
                "errorName": error_name,
            }),
            ConditionItem::FieldIsValid { field_name } | ConditionItem::FieldIsEmpty { field_name } => {
                json!({ "fieldName": field_name })
            }
        }
    }
}

/// Translates a validator's activation condition into target-language
/// boolean expressions.
///
/// `Ok(None)` means the validator has no activation condition and is always
/// active.
pub trait ConditionProcessor {
    fn render_activation_condition(
        &self,
        field: &Field,
        validator: &Validator,
    ) -> Result<Option<Vec<String>>>;
}
