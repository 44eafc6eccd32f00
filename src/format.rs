//! Turns rows into the string columns every output format shares.

use crate::types::{EntryType, Row, SummaryValue};
use chrono::{DateTime, Local};

pub const HEADERS: [&str; 4] = ["Mod Time", "Size", "Type", "Name"];

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const TIME_FORMAT_MS: &str = "%Y-%m-%d %H:%M:%S%.3f";

const MEBIBYTE: u64 = 1_048_576;
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeFormat {
    pub commas: bool,
    pub mebibytes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub mod_time: String,
    pub size: String,
    pub kind: String,
    pub name: String,
    pub is_summary: bool,
}

impl DisplayRow {
    #[must_use]
    pub fn columns(&self) -> [&str; 4] {
        [
            self.mod_time.as_str(),
            self.size.as_str(),
            self.kind.as_str(),
            self.name.as_str(),
        ]
    }
}

#[must_use]
pub fn time_format(milliseconds: bool) -> &'static str {
    if milliseconds { TIME_FORMAT_MS } else { TIME_FORMAT }
}

#[must_use]
pub fn format_time(t: &DateTime<Local>, milliseconds: bool) -> String {
    t.format(time_format(milliseconds)).to_string()
}

#[must_use]
pub fn type_letter(kind: EntryType) -> &'static str {
    match kind {
        EntryType::File => "F",
        EntryType::Directory => "D",
        EntryType::SymbolicLink => "L",
        EntryType::Unknown => "?",
    }
}

/// Insert a comma every three digits: 1234567 -> "1,234,567".
#[must_use]
pub fn add_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Byte counts are divided down to MiB before the separators go in.
#[must_use]
pub fn format_size(size: u64, fmt: SizeFormat) -> String {
    let size = if fmt.mebibytes { size / MEBIBYTE } else { size };
    format_count(size, fmt.commas)
}

fn format_count(n: u64, commas: bool) -> String {
    if commas { add_commas(n) } else { n.to_string() }
}

#[must_use]
pub fn display_rows(rows: &[Row], size_fmt: SizeFormat, milliseconds: bool) -> Vec<DisplayRow> {
    rows.iter()
        .map(|row| match row {
            Row::Data(e) => DisplayRow {
                mod_time: format_time(&e.modified, milliseconds),
                size: format_size(e.size, size_fmt),
                kind: type_letter(e.kind).to_string(),
                name: e.full_name.clone(),
                is_summary: false,
            },
            Row::Summary(s) => DisplayRow {
                mod_time: String::new(),
                size: match s.value {
                    SummaryValue::Bytes(b) => format_size(b, size_fmt),
                    SummaryValue::Count(c) => format_count(c, size_fmt.commas),
                },
                kind: s.kind.map(type_letter).unwrap_or_default().to_string(),
                name: s.label.to_string(),
                is_summary: true,
            },
        })
        .collect()
}

/// Shorten `name` to at most `width` characters by replacing its middle with "...".
#[must_use]
pub fn truncate_middle(name: &str, width: usize) -> String {
    let len = name.chars().count();
    if len <= width {
        return name.to_string();
    }
    if width <= ELLIPSIS.len() {
        return name.chars().take(width).collect();
    }

    let keep = width - ELLIPSIS.len();
    let head = keep.div_ceil(2);
    let tail = keep / 2;

    let mut out: String = name.chars().take(head).collect();
    out.push_str(ELLIPSIS);
    out.extend(name.chars().skip(len - tail));
    out
}
