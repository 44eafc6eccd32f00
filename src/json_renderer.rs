use crate::error::RenderError;
use crate::format::DisplayRow;
use chrono::NaiveDateTime;
use serde::Serialize;

/// JSON carries the same display strings as the table, not typed values.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct JsonRow<'a> {
    mod_time: &'a str,
    size: &'a str,
    #[serde(rename = "Type")]
    kind: &'a str,
    name: &'a str,
}

/// Pretty-printed array of rows. Each timestamp must parse back under `time_format`.
pub fn render_json(rows: &[DisplayRow], time_format: &str) -> Result<String, RenderError> {
    let mut items = Vec::with_capacity(rows.len());
    for row in rows {
        if NaiveDateTime::parse_from_str(&row.mod_time, time_format).is_err() {
            return Err(RenderError::Timestamp(row.mod_time.clone()));
        }
        items.push(JsonRow {
            mod_time: &row.mod_time,
            size: &row.size,
            kind: &row.kind,
            name: &row.name,
        });
    }

    let mut out = serde_json::to_string_pretty(&items)?;
    out.push('\n');
    Ok(out)
}
