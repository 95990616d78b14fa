//! Markdown helpers shared by the summarizers

use serde_json::Value;

const ELLIPSIS: &str = "...";

/// Make a value safe to place inside a table cell
///
/// Newlines would end the row and `|` would open a new column.
pub fn escape_cell(value: &str) -> String {
    value.replace('\n', " ").replace('|', "\\|")
}

/// Two-column `Field | Value` table
pub fn field_table<K, V>(rows: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = vec!["| Field | Value |".to_string(), "|---|---|".to_string()];
    for (key, value) in rows {
        out.push(format!(
            "| {} | {} |",
            escape_cell(key.as_ref()),
            escape_cell(value.as_ref())
        ));
    }
    out.join("\n")
}

/// Cut `text` to `max_chars` characters, ending in `...` when shortened
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Text form of a scalar JSON value; null, empty strings and containers give `None`
pub fn json_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
