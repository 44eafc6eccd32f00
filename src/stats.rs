use crate::types::{Entry, EntryType, Row, SummaryRow, SummaryValue};
use log::debug;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub total_size: u64,
    pub file_count: u64,
    pub dir_count: u64,
    pub symlink_count: u64,
    pub average_file_size: u64,
    pub average_files_per_dir: u64,
}

#[must_use]
pub fn calculate_totals(entries: &[Entry]) -> Totals {
    let mut totals = Totals::default();

    for e in entries {
        match e.kind {
            EntryType::File => {
                totals.total_size += e.size;
                totals.file_count += 1;
            }
            EntryType::Directory => totals.dir_count += 1,
            EntryType::SymbolicLink => totals.symlink_count += 1,
            EntryType::Unknown => {}
        }
    }

    totals.average_file_size = totals
        .total_size
        .checked_div(totals.file_count)
        .unwrap_or(0);
    totals.average_files_per_dir = totals
        .file_count
        .checked_div(totals.dir_count)
        .unwrap_or(0);

    debug!("{totals:?}");
    totals
}

impl Totals {
    #[must_use]
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        vec![
            SummaryRow {
                label: "total size",
                value: SummaryValue::Bytes(self.total_size),
                kind: None,
            },
            SummaryRow {
                label: "files",
                value: SummaryValue::Count(self.file_count),
                kind: Some(EntryType::File),
            },
            SummaryRow {
                label: "directories",
                value: SummaryValue::Count(self.dir_count),
                kind: Some(EntryType::Directory),
            },
            SummaryRow {
                label: "symlinks",
                value: SummaryValue::Count(self.symlink_count),
                kind: Some(EntryType::SymbolicLink),
            },
            SummaryRow {
                label: "average file size",
                value: SummaryValue::Bytes(self.average_file_size),
                kind: None,
            },
            SummaryRow {
                label: "average files per directory",
                value: SummaryValue::Count(self.average_files_per_dir),
                kind: None,
            },
        ]
    }
}

/// Wrap entries as data rows, appending the summary rows when requested.
///
/// An empty entry list never gets summary rows, so the table stays empty.
#[must_use]
pub fn build_rows(entries: Vec<Entry>, with_totals: bool) -> Vec<Row> {
    let summary = if with_totals && !entries.is_empty() {
        calculate_totals(&entries).summary_rows()
    } else {
        Vec::new()
    };

    entries
        .into_iter()
        .map(Row::Data)
        .chain(summary.into_iter().map(Row::Summary))
        .collect()
}
