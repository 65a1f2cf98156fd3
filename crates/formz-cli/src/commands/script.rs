use anyhow::{Context, Result};
use formz::FormzContext;
use std::path::Path;

use super::load_form;

pub fn execute(context: &FormzContext, form_path: &Path) -> Result<()> {
    let form = load_form(form_path)?;

    let script = context
        .build_activation_script(&form)
        .with_context(|| format!("Failed to build activation script for form '{}'", form.name))?;

    println!("{}", script);
    Ok(())
}
