//! Rendering command results as text or JSON.

use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => {
            let value = serde_json::to_value(value)?;
            Ok(render_text(&value))
        }
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_text(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            if items.is_empty() {
                return String::from("(none)");
            }
            items
                .iter()
                .map(summarize)
                .collect::<Vec<_>>()
                .join("\n")
        }
        Value::Object(map) => {
            let mut lines = Vec::with_capacity(map.len());
            for (key, entry) in map {
                lines.push(format!("{key}: {}", scalar_to_text(entry)));
            }
            lines.join("\n")
        }
        scalar => scalar_to_text(scalar),
    }
}

/// One line per record: prefer `slug` and `name`/`term`/`text` columns.
fn summarize(value: &Value) -> String {
    let Some(map) = value.as_object() else {
        return scalar_to_text(value);
    };
    let slug = map.get("slug").and_then(Value::as_str);
    let label = ["name", "term", "text", "description"]
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str));

    match (slug, label) {
        (Some(slug), Some(label)) => format!("{slug:<30} {label}"),
        (Some(slug), None) => slug.to_string(),
        _ => scalar_to_text(value),
    }
}

fn scalar_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
