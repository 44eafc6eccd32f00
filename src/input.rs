use crate::config::InputSource;
use crate::error::InputError;
use colored::Colorize;
use log::{debug, warn};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Acquire the list of paths to examine. An empty list is an error.
///
/// Names that are not valid UTF-8 are reported (unless `quiet`) and skipped.
pub fn read_paths(source: &InputSource, quiet: bool) -> Result<Vec<String>, InputError> {
    let paths = match source {
        InputSource::Stdin => read_lines(io::stdin().lock(), quiet)?,
        InputSource::File(path) => {
            let file = File::open(path).map_err(|source| InputError::Open {
                path: path.display().to_string(),
                source,
            })?;
            read_lines(BufReader::new(file), quiet)?
        }
        InputSource::Glob(patterns) => expand_globs(patterns, quiet)?,
    };

    if paths.is_empty() {
        return Err(InputError::Empty);
    }
    debug!("read {} paths", paths.len());
    Ok(paths)
}

fn report_undecodable(name: &str, quiet: bool) {
    if !quiet {
        eprintln!("{} {name}: file name is not valid UTF-8", "Error:".red());
    }
}

/// One path per line. Blank lines are skipped, everything else is kept verbatim.
pub fn read_lines<R: BufRead>(reader: R, quiet: bool) -> io::Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.split(b'\n') {
        let line = line?;
        let line = line.strip_suffix(b"\r").unwrap_or(&line);
        match std::str::from_utf8(line) {
            Ok(name) if name.trim().is_empty() => {}
            Ok(name) => paths.push(name.to_string()),
            Err(_) => report_undecodable(&String::from_utf8_lossy(line), quiet),
        }
    }
    Ok(paths)
}

/// Expand whitespace-separated wildcard expressions, dropping repeated paths.
pub fn expand_globs(patterns: &str, quiet: bool) -> Result<Vec<String>, InputError> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();
    let mut matched = 0;

    for pattern in patterns.split_whitespace() {
        let matches = glob::glob(pattern).map_err(|source| InputError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        for entry in matches {
            match entry {
                Ok(path) => {
                    matched += 1;
                    match path.into_os_string().into_string() {
                        Ok(name) => {
                            if seen.insert(name.clone()) {
                                paths.push(name);
                            }
                        }
                        Err(raw) => report_undecodable(&raw.to_string_lossy(), quiet),
                    }
                }
                Err(e) => warn!("skipping unreadable glob match: {e}"),
            }
        }
    }

    if matched == 0 {
        return Err(InputError::NoMatches(patterns.trim().to_string()));
    }
    Ok(paths)
}
