// File: src/context.rs
// Purpose: Explicit entry point holding settings for attribute and script generation

use sha1::{Digest, Sha1};

use crate::attributes::{build_data_attributes, DataAttributes};
use crate::condition::{ConditionProcessor, JavaScriptProcessor};
use crate::config::FormzSettings;
use crate::error::Result;
use crate::form::FormConfiguration;
use crate::result::ValidationResult;
use crate::script::build_activation_script_for_rule_set;
use crate::values::FormValues;

/// Context handed to the rendering layer.
///
/// Holds no per-request state; one context can serve any number of forms
/// and requests.
#[derive(Debug, Clone, Default)]
pub struct FormzContext {
    settings: FormzSettings,
}

impl FormzContext {
    pub fn new(settings: FormzSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &FormzSettings {
        &self.settings
    }

    pub fn build_data_attributes(
        &self,
        values: &dyn FormValues,
        result: &ValidationResult,
        form: &FormConfiguration,
    ) -> DataAttributes {
        build_data_attributes(values, result, form)
    }

    /// Activation script rendered with the [`JavaScriptProcessor`].
    pub fn build_activation_script(&self, form: &FormConfiguration) -> Result<String> {
        self.build_activation_script_with(form, &JavaScriptProcessor::new(form))
    }

    /// Activation script rendered with a caller-supplied processor.
    pub fn build_activation_script_with(
        &self,
        form: &FormConfiguration,
        processor: &dyn ConditionProcessor,
    ) -> Result<String> {
        let script = build_activation_script_for_rule_set(form, processor, &self.settings.rule_set)?;

        if self.settings.debug_mode {
            // JS treats U+2028/U+2029 as line terminators too
            let name = form.name.replace(['\r', '\n', '\u{2028}', '\u{2029}'], " ");
            return Ok(format!("// formz: {}\n{}", name, script));
        }
        Ok(script)
    }

    /// Identifier for assets generated for a form type, bounded by the
    /// configured maximum length.
    pub fn cache_identifier(&self, prefix: &str, form_type_name: &str) -> String {
        cache_identifier(prefix, form_type_name, self.settings.cache_identifier_max_length)
    }
}

/// `lowercase(prefix + short type name + "-" + sha1(type name))`, cut to
/// `max_length` characters.
///
/// The short type name is the last segment of a `::` or `\` separated path.
pub fn cache_identifier(prefix: &str, form_type_name: &str, max_length: usize) -> String {
    let short_name = form_type_name
        .rsplit("::")
        .next()
        .and_then(|segment| segment.rsplit('\\').next())
        .unwrap_or(form_type_name);

    let mut hasher = Sha1::new();
    hasher.update(form_type_name.as_bytes());
    let digest = format!("{:x}", hasher.finalize());

    format!("{}{}-{}", prefix, short_name, digest)
        .to_lowercase()
        .chars()
        .take(max_length)
        .collect()
}
