use crate::types::{Entry, EntryType};
use chrono::{DateTime, Days, Local, NaiveDate, TimeZone};
use regex::Regex;
use std::path::MAIN_SEPARATOR;

pub const DATE_FORMAT: &str = "%Y%m%d";

/// Compiled filter settings. Every active check must pass for a path to be kept.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub exclude_dot: bool,
    pub exclude: Option<Regex>,
    pub include: Option<Regex>,
    /// Entries modified before this instant are rejected.
    pub newer: Option<DateTime<Local>>,
    /// Entries modified at or after this instant are rejected.
    pub older: Option<DateTime<Local>>,
    /// Files larger than this are rejected; 0 disables the check.
    pub smaller: u64,
    /// Files smaller than this are rejected; 0 disables the check.
    pub larger: u64,
}

impl FilterOptions {
    /// Checks that only need the path string. Exclusion runs before inclusion.
    #[must_use]
    pub fn accepts_name(&self, full_name: &str) -> bool {
        if self.exclude_dot && is_dot_path(full_name) {
            return false;
        }
        if let Some(re) = &self.exclude
            && re.is_match(full_name)
        {
            return false;
        }
        if let Some(re) = &self.include
            && !re.is_match(full_name)
        {
            return false;
        }
        true
    }

    /// Checks that need the stat result: date range for every type, size range for files.
    #[must_use]
    pub fn accepts_entry(&self, entry: &Entry) -> bool {
        if let Some(older) = self.older
            && entry.modified >= older
        {
            return false;
        }
        if let Some(newer) = self.newer
            && entry.modified < newer
        {
            return false;
        }
        if entry.kind == EntryType::File {
            if self.smaller > 0 && entry.size > self.smaller {
                return false;
            }
            if self.larger > 0 && entry.size < self.larger {
                return false;
            }
        }
        true
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// True for dot files and for anything below a dot directory.
#[must_use]
pub fn is_dot_path(full_name: &str) -> bool {
    let base = full_name.rsplit(is_separator).next().unwrap_or(full_name);
    if base.starts_with('.') {
        return true;
    }
    full_name
        .char_indices()
        .any(|(i, c)| is_separator(c) && full_name[i + c.len_utf8()..].starts_with('.'))
}

#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

fn local_midnight(date: NaiveDate) -> Option<DateTime<Local>> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Local.from_local_datetime(&midnight).earliest()
}

/// First instant of the day after `date`: anything during `date` or earlier is "older".
#[must_use]
pub fn older_bound(date: NaiveDate) -> Option<DateTime<Local>> {
    local_midnight(date.checked_add_days(Days::new(1))?)
}

/// First instant of `date`: anything during `date` or later is "newer".
#[must_use]
pub fn newer_bound(date: NaiveDate) -> Option<DateTime<Local>> {
    local_midnight(date)
}
