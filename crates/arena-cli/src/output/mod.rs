use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table_options()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = flatten_object(&map)
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    let flattened = items
        .iter()
        .filter_map(Value::as_object)
        .map(flatten_object)
        .collect::<Vec<_>>();

    let mut headers = Vec::<String>::new();
    for row in &flattened {
        for (key, _) in row {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    headers.sort();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = flattened
        .iter()
        .map(|row| {
            headers
                .iter()
                .map(|header| {
                    row.iter()
                        .find(|(key, _)| key == header)
                        .map_or_else(|| String::from("-"), |(_, value)| value_to_cell(value))
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

/// Nested objects become `parent.child` keys so a turn's referee scores get
/// their own columns. Arrays stay as JSON cells.
fn flatten_object(map: &Map<String, Value>) -> Vec<(String, Value)> {
    let mut out = Vec::with_capacity(map.len());
    flatten_into("", map, &mut out);
    out.sort_by(|a, b| a.0.cmp(&b.0));
    out
}

fn flatten_into(prefix: &str, map: &Map<String, Value>, out: &mut Vec<(String, Value)>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(inner) if !inner.is_empty() => flatten_into(&path, inner, out),
            other => out.push((path, other.clone())),
        }
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.replace('\n', " "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::table::{TableOptions, render_entity_table};
    use super::{flatten_object, render, render_table};
    use crate::cli::OutputFormat;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[derive(Serialize)]
    struct Example {
        turn_id: i64,
        label: &'static str,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            turn_id: 7,
            label: "agree",
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["turn_id"], 7);
        assert_eq!(parsed["label"], "agree");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example {
            turn_id: 7,
            label: "agree",
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let value = Example {
            turn_id: 7,
            label: "agree",
        };
        let out = render_table(&value, PLAIN).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("turn_id"));
        assert!(out.contains("agree"));
    }

    #[test]
    fn table_render_for_empty_array() {
        let out = render_table(&Vec::<Example>::new(), PLAIN).expect("render");
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn nested_objects_flatten_to_dotted_columns() {
        let value = serde_json::json!({
            "turn_id": 1,
            "referee": {
                "critique": "fine",
                "scores": {"clarity": 8}
            },
            "human_label": null
        });
        let flat = flatten_object(value.as_object().unwrap());
        let keys = flat.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![
                "human_label",
                "referee.critique",
                "referee.scores.clarity",
                "turn_id"
            ]
        );
    }

    #[test]
    fn array_table_has_column_per_flattened_key() {
        let value = serde_json::json!([
            {"turn_id": 1, "referee": {"chosen_agent": "agent_a"}},
            {"turn_id": 2, "referee": {"chosen_agent": "agent_b"}}
        ]);
        let out = render_table(&value, PLAIN).expect("render");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("referee.chosen_agent"));
        assert!(lines[0].contains("turn_id"));
        assert!(lines[2].contains("agent_a"));
        assert!(lines[3].contains("agent_b"));
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["turn_id", "question"];
        let rows = vec![
            vec!["1".to_string(), "short".to_string()],
            vec!["200".to_string(), "a much longer question".to_string()],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("turn_id"));
        assert!(lines[1].chars().all(|c| c == '-'));
    }
}
