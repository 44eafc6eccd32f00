use crate::config::{OutputFormat, RenderOptions, Truncation};
use crate::csv_renderer::render_csv;
use crate::error::RenderError;
use crate::format::{self, SizeFormat};
use crate::html_renderer::render_html;
use crate::json_renderer::render_json;
use crate::table_renderer::render_table;
use crate::types::Row;
use log::debug;

/// Columns taken by the time, size and type cells plus table borders.
const NAME_MARGIN: usize = 48;
const MILLISECONDS_MARGIN: usize = 4;

/// Produce the complete output for the selected format.
pub fn render(rows: &[Row], opts: &RenderOptions) -> Result<String, RenderError> {
    let size_fmt = match opts.format {
        // separators would collide with the field delimiter
        OutputFormat::Csv => SizeFormat {
            commas: false,
            ..opts.size
        },
        _ => opts.size,
    };
    let display = format::display_rows(rows, size_fmt, opts.milliseconds);

    match opts.format {
        OutputFormat::Table => Ok(render_table(&display, name_width(opts))),
        OutputFormat::Csv => render_csv(&display),
        OutputFormat::Html => Ok(render_html(&display)),
        OutputFormat::Json => render_json(&display, format::time_format(opts.milliseconds)),
    }
}

fn name_width(opts: &RenderOptions) -> Option<usize> {
    match opts.truncation {
        Truncation::Disabled => None,
        Truncation::Width(w) => Some(w),
        Truncation::Terminal => {
            let margin = if opts.milliseconds {
                NAME_MARGIN + MILLISECONDS_MARGIN
            } else {
                NAME_MARGIN
            };
            let width = crossterm::terminal::size()
                .ok()
                .map(|(cols, _)| usize::from(cols).saturating_sub(margin))
                .filter(|w| *w > 0);
            debug!("terminal name width: {width:?}");
            width
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Entry, EntryType};
    use chrono::{Local, TimeZone};

    fn rows() -> Vec<Row> {
        vec![Row::Data(Entry {
            full_name: "media/movie.mkv".to_string(),
            size: 1_234_567,
            modified: Local.with_ymd_and_hms(2021, 6, 1, 12, 30, 0).unwrap(),
            kind: EntryType::File,
        })]
    }

    fn options(format: OutputFormat) -> RenderOptions {
        RenderOptions {
            format,
            size: SizeFormat {
                commas: true,
                mebibytes: false,
            },
            milliseconds: false,
            truncation: Truncation::Disabled,
        }
    }

    #[test]
    fn test_csv_never_has_thousands_separators() {
        let out = render(&rows(), &options(OutputFormat::Csv)).unwrap();
        assert!(out.contains("\"1234567\""));
        assert!(!out.contains("1,234,567"));
    }

    #[test]
    fn test_other_formats_keep_separators() {
        for format in [OutputFormat::Table, OutputFormat::Html, OutputFormat::Json] {
            let out = render(&rows(), &options(format)).unwrap();
            assert!(out.contains("1,234,567"), "{format:?}");
        }
    }

    #[test]
    fn test_empty_rows_per_format() {
        assert_eq!(render(&[], &options(OutputFormat::Table)).unwrap(), "");
        assert!(!render(&[], &options(OutputFormat::Csv)).unwrap().is_empty());
        assert!(!render(&[], &options(OutputFormat::Html)).unwrap().is_empty());
        assert_eq!(render(&[], &options(OutputFormat::Json)).unwrap(), "[]\n");
    }

    #[test]
    fn test_explicit_width_wins() {
        let opts = RenderOptions {
            truncation: Truncation::Width(10),
            ..options(OutputFormat::Table)
        };
        assert_eq!(name_width(&opts), Some(10));
        assert_eq!(name_width(&options(OutputFormat::Table)), None);
    }
}
