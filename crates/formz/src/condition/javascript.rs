// File: src/condition/javascript.rs
// Purpose: Render activation condition trees as JavaScript boolean expressions

use crate::condition::{parse, ConditionNode, ConditionProcessor};
use crate::error::{FormzError, Result};
use crate::form::{Activation, Field, FormConfiguration, Validator};
use crate::js::{array_to_javascript_json, quote_js_value};

/// Condition processor producing expressions for the client-side Formz
/// runtime. Each condition item becomes a call to
/// `Formz.Condition.validateCondition(type, form, parameters)`.
#[derive(Debug, Clone, Copy)]
pub struct JavaScriptProcessor<'a> {
    form: &'a FormConfiguration,
}

impl<'a> JavaScriptProcessor<'a> {
    pub fn new(form: &'a FormConfiguration) -> Self {
        Self { form }
    }

    fn render_node(&self, activation: &Activation, node: &ConditionNode) -> std::result::Result<String, String> {
        Ok(match node {
            ConditionNode::Condition(name) => {
                let item = self
                    .form
                    .resolve_condition(activation, name)
                    .ok_or_else(|| format!("unknown condition `{}`", name))?;

                format!(
                    "Formz.Condition.validateCondition({}, form, {})",
                    quote_js_value(item.type_name()),
                    array_to_javascript_json(&item.parameters())
                )
            }
            ConditionNode::Not(inner) => format!("!({})", self.render_node(activation, inner)?),
            ConditionNode::And(left, right) => format!(
                "({}) && ({})",
                self.render_node(activation, left)?,
                self.render_node(activation, right)?
            ),
            ConditionNode::Or(left, right) => format!(
                "({}) || ({})",
                self.render_node(activation, left)?,
                self.render_node(activation, right)?
            ),
        })
    }
}

impl ConditionProcessor for JavaScriptProcessor<'_> {
    fn render_activation_condition(
        &self,
        field: &Field,
        validator: &Validator,
    ) -> Result<Option<Vec<String>>> {
        let Some(activation) = &validator.activation else {
            return Ok(None);
        };

        let expression = parse(&activation.expression)
            .and_then(|tree| self.render_node(activation, &tree))
            .map_err(|message| FormzError::Condition {
                field: field.name.clone(),
                validator: validator.name.clone(),
                message,
            })?;

        Ok(Some(vec![expression]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ConditionItem;
    use pretty_assertions::assert_eq;

    fn form() -> FormConfiguration {
        FormConfiguration::new("contact")
            .with_condition(
                "colorIsRed",
                ConditionItem::FieldHasValue {
                    field_name: "color".into(),
                    field_value: "red".into(),
                },
            )
            .with_condition(
                "emailValid",
                ConditionItem::FieldIsValid {
                    field_name: "email".into(),
                },
            )
    }

    #[test]
    fn test_no_activation_renders_nothing() {
        let form = form();
        let processor = JavaScriptProcessor::new(&form);
        let rendered = processor
            .render_activation_condition(&Field::new("email"), &Validator::new("required"))
            .unwrap();

        assert_eq!(rendered, None);
    }

    #[test]
    fn test_single_item() {
        let form = form();
        let processor = JavaScriptProcessor::new(&form);
        let validator = Validator::new("required").with_activation(Activation::new("colorIsRed"));

        let rendered = processor
            .render_activation_condition(&Field::new("size"), &validator)
            .unwrap();

        assert_eq!(
            rendered,
            Some(vec![
                r#"Formz.Condition.validateCondition('fieldHasValue', form, {"fieldName":"color","fieldValue":"red"})"#
                    .to_string()
            ])
        );
    }

    #[test]
    fn test_composed_expression() {
        let form = form();
        let processor = JavaScriptProcessor::new(&form);
        let validator =
            Validator::new("required").with_activation(Activation::new("!colorIsRed || emailValid"));

        let rendered = processor
            .render_activation_condition(&Field::new("size"), &validator)
            .unwrap()
            .unwrap();

        assert_eq!(
            rendered[0],
            concat!(
                r#"(!(Formz.Condition.validateCondition('fieldHasValue', form, {"fieldName":"color","fieldValue":"red"})))"#,
                r#" || (Formz.Condition.validateCondition('fieldIsValid', form, {"fieldName":"email"}))"#
            )
        );
    }

    #[test]
    fn test_error_and_empty_items() {
        let form = FormConfiguration::new("contact");
        let processor = JavaScriptProcessor::new(&form);
        let validator = Validator::new("required").with_activation(
            Activation::new("emailFailed && nameEmpty")
                .with_item(
                    "emailFailed",
                    ConditionItem::FieldHasError {
                        field_name: "email".into(),
                        validation_name: "required".into(),
                        error_name: "default".into(),
                    },
                )
                .with_item(
                    "nameEmpty",
                    ConditionItem::FieldIsEmpty {
                        field_name: "name".into(),
                    },
                ),
        );

        let rendered = processor
            .render_activation_condition(&Field::new("size"), &validator)
            .unwrap()
            .unwrap();

        assert_eq!(
            rendered[0],
            concat!(
                r#"(Formz.Condition.validateCondition('fieldHasError', form, {"errorName":"default","fieldName":"email","validationName":"required"}))"#,
                r#" && (Formz.Condition.validateCondition('fieldIsEmpty', form, {"fieldName":"name"}))"#
            )
        );
    }

    #[test]
    fn test_unknown_condition_is_an_error() {
        let form = form();
        let processor = JavaScriptProcessor::new(&form);
        let validator = Validator::new("required").with_activation(Activation::new("nope"));

        let err = processor
            .render_activation_condition(&Field::new("size"), &validator)
            .unwrap_err();

        assert!(err.to_string().contains("unknown condition `nope`"));
    }
}
