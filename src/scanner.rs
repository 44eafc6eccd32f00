use crate::filter::FilterOptions;
use crate::types::{Entry, EntryType};
use chrono::{DateTime, Local};
use colored::Colorize;
use log::debug;
use std::fs;
use std::io;
use std::time::SystemTime;

/// Result of a single "get file status" call.
#[derive(Debug, Clone)]
pub struct FileStatus {
    pub size: u64,
    pub modified: DateTime<Local>,
    pub kind: EntryType,
}

pub trait StatSource {
    fn stat(&self, path: &str) -> io::Result<FileStatus>;
}

/// Reads metadata from the local filesystem without following symlinks.
pub struct LocalFs;

impl StatSource for LocalFs {
    fn stat(&self, path: &str) -> io::Result<FileStatus> {
        let metadata = fs::symlink_metadata(path)?;
        let file_type = metadata.file_type();

        let kind = if file_type.is_file() {
            EntryType::File
        } else if file_type.is_dir() {
            EntryType::Directory
        } else if file_type.is_symlink() {
            EntryType::SymbolicLink
        } else {
            EntryType::Unknown
        };

        // Use UNIX_EPOCH when the platform cannot report a modification time
        let modified: DateTime<Local> =
            metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH).into();

        Ok(FileStatus {
            size: metadata.len(),
            modified,
            kind,
        })
    }
}

/// Examine every path in input order and keep the ones passing all filters.
///
/// A path that cannot be examined is reported on stderr (unless `quiet`)
/// and skipped.
pub fn collect_entries<S: StatSource>(
    paths: &[String],
    filter: &FilterOptions,
    quiet: bool,
    source: &S,
) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(paths.len());
    let mut rejected = 0;
    let mut failed = 0;

    for path in paths {
        if !filter.accepts_name(path) {
            rejected += 1;
            continue;
        }

        let status = match source.stat(path) {
            Ok(s) => s,
            Err(e) => {
                failed += 1;
                if !quiet {
                    eprintln!("{} {path}: {e}", "Error:".red());
                }
                continue;
            }
        };

        let entry = Entry {
            full_name: path.clone(),
            size: status.size,
            modified: status.modified,
            kind: status.kind,
        };

        if filter.accepts_entry(&entry) {
            entries.push(entry);
        } else {
            rejected += 1;
        }
    }

    debug!(
        "collected {} entries ({} filtered out, {} stat failures)",
        entries.len(),
        rejected,
        failed
    );
    entries
}
