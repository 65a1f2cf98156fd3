pub mod attributes;
pub mod cache_id;
pub mod script;

use anyhow::{Context, Result};
use formz::{FormConfiguration, FormzContext, FormzSettings};
use std::path::Path;

pub fn load_context(settings: &Path) -> Result<FormzContext> {
    let settings = FormzSettings::load(settings)
        .with_context(|| format!("Failed to load settings: {:?}", settings))?;
    Ok(FormzContext::new(settings))
}

pub fn load_form(path: &Path) -> Result<FormConfiguration> {
    FormConfiguration::load(path).with_context(|| format!("Failed to load form definition: {:?}", path))
}
