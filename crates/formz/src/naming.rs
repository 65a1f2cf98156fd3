// File: src/naming.rs
// Purpose: Data attribute key formatting for field values, validity and errors

/// Prefix shared by every attribute generated for a form.
pub const ATTRIBUTE_PREFIX: &str = "formz";

/// Title used for errors that carry none.
pub const DEFAULT_ERROR_TITLE: &str = "default";

/// Converts an identifier to the lower-dash form used in attribute keys.
///
/// `fieldName` becomes `field-name`, `field_name` becomes `field-name`.
pub fn clean_name(identifier: &str) -> String {
    camel_case_to_lower_underscored(identifier).replace('_', "-")
}

/// `formz-value-{field}`
pub fn value_key(field_name: &str) -> String {
    format!("{}-value-{}", ATTRIBUTE_PREFIX, clean_name(field_name))
}

/// `formz-valid-{field}`
pub fn valid_key(field_name: &str) -> String {
    format!("{}-valid-{}", ATTRIBUTE_PREFIX, clean_name(field_name))
}

/// `formz-error-{field}`
pub fn error_key(field_name: &str) -> String {
    format!("{}-error-{}", ATTRIBUTE_PREFIX, clean_name(field_name))
}

/// `formz-error-{field}-{error title}`
///
/// Colons are reserved for namespaced validator identifiers and are turned
/// into dashes before the title is cleaned.
pub fn validation_error_key(field_name: &str, error_title: &str) -> String {
    format!(
        "{}-{}",
        error_key(field_name),
        clean_name(&error_title.replace(':', "-"))
    )
}

/// Inserts an underscore before every uppercase ASCII letter preceded by a
/// word character, then lowercases ASCII letters. Other characters are kept.
fn camel_case_to_lower_underscored(identifier: &str) -> String {
    let mut result = String::with_capacity(identifier.len() + 4);
    let mut previous: Option<char> = None;

    for c in identifier.chars() {
        if c.is_ascii_uppercase() && previous.is_some_and(is_word_char) {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
        previous = Some(c);
    }

    result
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
