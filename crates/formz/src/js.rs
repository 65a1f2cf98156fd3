// File: src/js.rs
// Purpose: Safe embedding of configuration-supplied strings and data into generated JavaScript

/// Quotes a string as a single-quoted JavaScript literal.
///
/// The content is JSON-escaped, and characters that could close the
/// literal or the surrounding `<script>` element are hex-escaped.
pub fn quote_js_value(value: &str) -> String {
    let json = serde_json::Value::String(value.to_owned()).to_string();
    let inner = &json[1..json.len() - 1];
    format!("'{}'", hex_escape(inner))
}

/// Encodes a value as JSON that can be inlined in a script block.
pub fn array_to_javascript_json(value: &serde_json::Value) -> String {
    hex_escape(&value.to_string())
}

fn hex_escape(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003C"),
            '>' => escaped.push_str("\\u003E"),
            '&' => escaped.push_str("\\u0026"),
            '\'' => escaped.push_str("\\u0027"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quote_plain_value() {
        assert_eq!(quote_js_value("email"), "'email'");
    }

    #[test]
    fn test_quote_escapes_quotes() {
        assert_eq!(quote_js_value("it's"), "'it\\u0027s'");
        assert_eq!(quote_js_value("say \"hi\""), "'say \\\"hi\\\"'");
    }

    #[test]
    fn test_quote_escapes_script_breakout() {
        let quoted = quote_js_value("</script><script>alert(1)</script>");
        assert!(!quoted.contains('<'));
        assert!(!quoted.contains('>'));
    }

    #[test]
    fn test_quote_escapes_control_characters() {
        assert_eq!(quote_js_value("a\nb\\c"), "'a\\nb\\\\c'");
    }

    #[test]
    fn test_javascript_json() {
        let value = json!({ "fieldName": "a&b", "fieldValue": "<x>'" });
        assert_eq!(
            array_to_javascript_json(&value),
            r#"{"fieldName":"a\u0026b","fieldValue":"\u003Cx\u003E\u0027"}"#
        );
    }
}
