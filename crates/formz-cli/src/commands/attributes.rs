use anyhow::{Context, Result};
use formz::{FormzContext, ValidationResult};
use std::fs;
use std::path::Path;

use super::load_form;

pub fn execute(
    context: &FormzContext,
    form_path: &Path,
    values_path: Option<&Path>,
    result_path: Option<&Path>,
    html: bool,
) -> Result<()> {
    let form = load_form(form_path)?;

    let values = match values_path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read values: {:?}", path))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse values: {:?}", path))?
        }
        None => serde_json::Value::Null,
    };

    let result = match result_path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read validation result: {:?}", path))?;
            ValidationResult::from_json_str(&content)
                .with_context(|| format!("Failed to parse validation result: {:?}", path))?
        }
        None => ValidationResult::new(),
    };

    let attributes = context.build_data_attributes(&values, &result, &form);

    if html {
        println!("{}", attributes.render_html());
    } else {
        for (key, value) in attributes.iter() {
            println!("{}={}", key, value);
        }
    }

    Ok(())
}
