use crate::error::RenderError;
use crate::format::{DisplayRow, HEADERS};
use csv::{QuoteStyle, WriterBuilder};

/// Header line plus one fully quoted record per row.
pub fn render_csv(rows: &[DisplayRow]) -> Result<String, RenderError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;
    for row in rows {
        writer.write_record(row.columns())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RenderError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
