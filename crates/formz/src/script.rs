// File: src/script.rs
// Purpose: JavaScript registering the activation conditions of every validator of a form

use crate::condition::ConditionProcessor;
use crate::error::Result;
use crate::form::FormConfiguration;
use crate::js::quote_js_value;

/// Rule set under which generated activation conditions are registered on
/// the client.
pub const DEFAULT_RULE_SET: &str = "__auto";

const EXPRESSION_INDENT: &str = "                    ";

/// Builds the activation script of a form with the default rule set.
pub fn build_activation_script(
    form: &FormConfiguration,
    processor: &dyn ConditionProcessor,
) -> Result<String> {
    build_activation_script_for_rule_set(form, processor, DEFAULT_RULE_SET)
}

/// Builds the activation script of a form.
///
/// Every validator with an activation condition gets a block registering
/// a callback on its field; once all blocks ran the client refreshes all
/// fields. Output is deterministic for a given form and processor.
pub fn build_activation_script_for_rule_set(
    form: &FormConfiguration,
    processor: &dyn ConditionProcessor,
    rule_set: &str,
) -> Result<String> {
    let mut blocks = Vec::new();

    for field in &form.fields {
        for validator in &field.validators {
            let Some(expressions) = processor.render_activation_condition(field, validator)? else {
                continue;
            };

            let conditions: Vec<String> = expressions
                .iter()
                .filter(|expression| !expression.is_empty())
                .map(|expression| format!("flag = flag || ({});", expression))
                .collect();

            tracing::debug!(
                field = %field.name,
                validator = %validator.name,
                conditions = conditions.len(),
                "activation condition block"
            );

            blocks.push(field_activation_block(
                &field.name,
                &validator.name,
                rule_set,
                &conditions,
            ));
        }
    }

    Ok(format!(
        r#"(function() {{
    Formz.Form.get(
        {form_name},
        function(form) {{
            var field = null;

{blocks}

            form.refreshAllFields();
        }}
    );
}})();"#,
        form_name = quote_js_value(&form.name),
        blocks = blocks.join("\n"),
    ))
}

fn field_activation_block(
    field_name: &str,
    validator_name: &str,
    rule_set: &str,
    conditions: &[String],
) -> String {
    format!(
        r#"        field = form.getFieldByName({field_name});

        if (null !== field) {{
            field.addActivationConditionForValidator(
                {rule_set},
                {validator_name},
                function (field, continueValidation) {{
                    var flag = false;
                    {conditions}
                    continueValidation(flag);
                }}
            );
        }}"#,
        field_name = quote_js_value(field_name),
        rule_set = quote_js_value(rule_set),
        validator_name = quote_js_value(validator_name),
        conditions = conditions.join(&format!("\n{}", EXPRESSION_INDENT)),
    )
}
