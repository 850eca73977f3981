//! SQL literal rendering.
//!
//! Escaping follows the MySQL dump convention: backslashes are doubled,
//! single quotes are doubled, newlines and carriage returns become `\n` and
//! `\r` escape sequences. Arrays and objects render as their JSON text
//! escaped like any other string (for `json` columns).

use serde_json::Value;

/// Renders a string as a quoted SQL literal.
pub fn sql_str(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("''"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped.push('\'');
    escaped
}

/// Renders any JSON value as a SQL literal. Total over all inputs:
/// null becomes `NULL`, booleans become `1`/`0`, numbers render bare,
/// strings are escaped and quoted, arrays/objects are JSON-stringified and
/// then treated as strings.
pub fn sql_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => "0".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => sql_str(s),
        other => sql_str(&other.to_string()),
    }
}

/// Renders a boolean as the `tinyint(1)` literals a MySQL dump uses.
pub fn sql_bool(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Renders an optional id foreign key: bare number or `NULL`.
pub fn sql_fk(value: Option<i64>) -> String {
    match value {
        Some(id) => id.to_string(),
        None => "NULL".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn plain_strings_are_quoted() {
        assert_eq!(sql_str("abc"), "'abc'");
        assert_eq!(sql_str(""), "''");
    }

    #[test]
    fn special_characters_are_escaped() {
        assert_eq!(sql_str("it's"), "'it''s'");
        assert_eq!(sql_str("a\\b"), "'a\\\\b'");
        assert_eq!(sql_str("line1\nline2"), "'line1\\nline2'");
        assert_eq!(sql_str("a\rb"), "'a\\rb'");
    }

    #[test]
    fn scalar_values_render_per_type() {
        assert_eq!(sql_value(&Value::Null), "NULL");
        assert_eq!(sql_value(&json!(true)), "1");
        assert_eq!(sql_value(&json!(false)), "0");
        assert_eq!(sql_value(&json!(42)), "42");
        assert_eq!(sql_value(&json!("x")), "'x'");
    }

    #[test]
    fn arrays_render_as_escaped_json_text() {
        let rendered = sql_value(&json!(["a", "it's"]));
        assert_eq!(rendered, "'[\"a\",\"it''s\"]'");
    }

    // Inverse of the escaping rules, for the round-trip property below.
    fn unescape(literal: &str) -> String {
        let inner = &literal[1..literal.len() - 1];
        let mut out = String::new();
        let mut chars = inner.chars();
        while let Some(ch) = chars.next() {
            match ch {
                '\\' => match chars.next() {
                    Some('\\') => out.push('\\'),
                    Some('n') => out.push('\n'),
                    Some('r') => out.push('\r'),
                    Some(other) => {
                        out.push('\\');
                        out.push(other);
                    }
                    None => out.push('\\'),
                },
                '\'' => {
                    // Quotes only appear doubled inside a literal.
                    chars.next();
                    out.push('\'');
                }
                _ => out.push(ch),
            }
        }
        out
    }

    proptest! {
        #[test]
        fn escaping_round_trips(input in ".*") {
            let literal = sql_str(&input);
            prop_assert!(literal.starts_with('\'') && literal.ends_with('\''));
            prop_assert_eq!(unescape(&literal), input);
        }

        #[test]
        fn literal_body_never_contains_a_lone_quote(input in ".*") {
            let literal = sql_str(&input);
            let inner = &literal[1..literal.len() - 1];
            let mut quotes = 0usize;
            for ch in inner.chars() {
                if ch == '\'' {
                    quotes += 1;
                } else {
                    prop_assert!(quotes % 2 == 0);
                }
            }
            prop_assert!(quotes % 2 == 0);
        }
    }
}
