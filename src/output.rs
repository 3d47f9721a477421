use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use serde_json::Value;

fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(arr) => {
            if arr.is_empty() {
                "-".to_string()
            } else if arr.iter().all(|v| !v.is_object() && !v.is_array()) {
                arr.iter().map(format_cell).collect::<Vec<_>>().join(", ")
            } else {
                serde_json::to_string(value).unwrap_or_else(|_| "-".to_string())
            }
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_else(|_| "-".to_string()),
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn to_table(data: &Value) -> Option<Table> {
    match data {
        Value::Object(map) if !map.is_empty() => {
            let mut table = new_table();
            table.set_header(vec!["Field", "Value"]);
            for (key, value) in map {
                table.add_row(vec![key.clone(), format_cell(value)]);
            }
            Some(table)
        }
        Value::Array(items) if !items.is_empty() => {
            let mut table = new_table();
            table.set_header(vec!["#", "Value"]);
            for (idx, item) in items.iter().enumerate() {
                table.add_row(vec![idx.to_string(), format_cell(item)]);
            }
            Some(table)
        }
        _ => None,
    }
}

pub fn format_output(data: &Value, format: &str) -> String {
    match format {
        "json" => serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string()),
        "yaml" => serde_yaml::to_string(data).unwrap_or_else(|_| data.to_string()),
        _ => match to_table(data) {
            Some(table) => table.to_string(),
            None => format_cell(data),
        },
    }
}

pub fn render(data: &Value, format: &str) {
    println!("{}", format_output(data, format));
}

pub fn print_success(msg: &str) {
    use colored::Colorize;
    println!("{}", msg.green());
}

pub fn print_error(msg: &str) {
    use colored::Colorize;
    eprintln!("{}", msg.red());
}
