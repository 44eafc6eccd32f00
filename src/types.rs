use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
    SymbolicLink,
    Unknown,
}

/// One examined path. `full_name` is the path exactly as it was supplied.
#[derive(Debug, Clone)]
pub struct Entry {
    pub full_name: String,
    pub size: u64,
    pub modified: DateTime<Local>,
    pub kind: EntryType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryValue {
    Bytes(u64),
    Count(u64),
}

/// Synthetic trailing row produced by the totals calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: SummaryValue,
    pub kind: Option<EntryType>,
}

#[derive(Debug, Clone)]
pub enum Row {
    Data(Entry),
    Summary(SummaryRow),
}
