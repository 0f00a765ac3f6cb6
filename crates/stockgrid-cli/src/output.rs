use std::fmt::Write as _;

use serde_json::Value;
use stockgrid_core::Envelope;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => print!("{}", format_text(envelope)),
    }

    Ok(())
}

/// Terminal rendering: the data grid (or a key/value listing), then warnings and errors.
pub fn format_text(envelope: &Envelope<Value>) -> String {
    let mut out = String::new();

    match format_grid(&envelope.data) {
        Some(grid) => out.push_str(&grid),
        None => {
            if let Some(fields) = envelope.data.as_object() {
                for (key, value) in fields {
                    let _ = writeln!(out, "{key:<11}: {}", cell_text(value));
                }
            }
        }
    }

    if !envelope.meta.warnings.is_empty() {
        out.push_str("warnings:\n");
        for warning in &envelope.meta.warnings {
            let _ = writeln!(out, "  - {warning}");
        }
    }

    if !envelope.errors.is_empty() {
        out.push_str("errors:\n");
        for error in &envelope.errors {
            let _ = writeln!(out, "  - {}: {}", error.code, error.message);
        }
    }

    out
}

struct Column<'a> {
    name: &'a str,
    header: String,
    numeric: bool,
    width: usize,
}

/// Grid for table payloads (`columns` + `rows`). Blank padding rows keep short
/// pages at full height.
fn format_grid(data: &Value) -> Option<String> {
    let columns = data.get("columns")?.as_array()?;
    let rows = data.get("rows")?.as_array()?;
    let page_size = data.get("pageSize").and_then(Value::as_u64).unwrap_or(0) as usize;
    let padding = data
        .get("padding")
        .and_then(Value::as_u64)
        .unwrap_or(0) as usize;

    let mut columns = columns
        .iter()
        .filter_map(|column| {
            let name = column.get("name")?.as_str()?;
            let label = column.get("label")?.as_str()?;
            let header = match column.get("sorted").and_then(Value::as_str) {
                Some("ascending") => format!("{label} ^"),
                Some("descending") => format!("{label} v"),
                _ => label.to_owned(),
            };
            Some(Column {
                name,
                width: header.chars().count(),
                header,
                numeric: column.get("numeric").and_then(Value::as_bool).unwrap_or(false),
            })
        })
        .collect::<Vec<_>>();

    let cells = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| row.get(column.name).map(cell_text).unwrap_or_default())
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    for line in &cells {
        for (column, cell) in columns.iter_mut().zip(line) {
            column.width = column.width.max(cell.chars().count());
        }
    }

    let mut out = String::new();
    if let Some(title) = data.get("title").and_then(Value::as_str) {
        if !title.is_empty() {
            let _ = writeln!(out, "{title}");
        }
    }

    let headers = columns
        .iter()
        .map(|column| column.header.clone())
        .collect::<Vec<_>>();
    push_line(&mut out, &columns, &headers);
    let rule = columns
        .iter()
        .map(|column| "-".repeat(column.width))
        .collect::<Vec<_>>();
    push_line(&mut out, &columns, &rule);

    for line in &cells {
        push_line(&mut out, &columns, line);
    }
    for _ in 0..padding.min(page_size) {
        out.push('\n');
    }

    let _ = writeln!(out, "{}", footer(data, rows.len()));
    Some(out)
}

fn push_line(out: &mut String, columns: &[Column<'_>], cells: &[String]) {
    let line = columns
        .iter()
        .zip(cells)
        .map(|(column, cell)| {
            if column.numeric {
                format!("{cell:>width$}", width = column.width)
            } else {
                format!("{cell:<width$}", width = column.width)
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}

fn footer(data: &Value, shown: usize) -> String {
    let number = |key: &str| data.get(key).and_then(Value::as_u64).unwrap_or(0);
    let total = number("total");
    let page = number("page");
    let page_size = number("pageSize");
    let page_count = number("pageCount").max(1);

    let range = if shown == 0 {
        String::from("no rows")
    } else {
        let first = page * page_size + 1;
        format!("rows {first}-{} of {total}", first + shown as u64 - 1)
    };
    format!(
        "{range} | page {} of {page_count} | {page_size} per page",
        page + 1
    )
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
