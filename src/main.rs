mod config;
mod csv_renderer;
mod error;
mod filter;
mod format;
mod html_renderer;
mod input;
mod json_renderer;
mod output;
mod scanner;
mod sort;
mod stats;
mod table_renderer;
mod types;

use clap::Parser;
use colored::Colorize;
use config::Config;
use error::{AppError, RenderError};
use log::debug;
use std::io::Write;
use std::path::PathBuf;

/// Get info for a list of files across multiple directories
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// File containing one path per line (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Whitespace-separated wildcard expressions to examine instead of a list
    #[arg(long, short = 'g', value_name = "PATTERNS")]
    pub glob: Option<String>,

    /// Sort by file size
    #[arg(short = 's')]
    pub sort_size: bool,

    /// Sort by file size, descending
    #[arg(short = 'S')]
    pub sort_size_desc: bool,

    /// Sort by file modified date
    #[arg(short = 'd')]
    pub sort_time: bool,

    /// Sort by file modified date, newest first
    #[arg(short = 'D')]
    pub sort_time_desc: bool,

    /// Sort by file name
    #[arg(short = 'n')]
    pub sort_name: bool,

    /// Sort by file name, reverse alphabetical order
    #[arg(short = 'N')]
    pub sort_name_desc: bool,

    /// Case-insensitive sort by file name
    #[arg(short = 'i')]
    pub sort_name_ci: bool,

    /// Case-insensitive sort by file name, reverse alphabetical order
    #[arg(short = 'I')]
    pub sort_name_ci_desc: bool,

    /// Do not display file errors
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Add comma thousands separator to file sizes
    #[arg(long, short = 'c')]
    pub commas: bool,

    /// Convert file sizes to mebibytes
    #[arg(long, short = 'm')]
    pub mebibytes: bool,

    /// Show modification times with millisecond resolution
    #[arg(long, short = 'M')]
    pub milliseconds: bool,

    /// Append total size and counts by type
    #[arg(long, short = 't')]
    pub totals: bool,

    /// Exclude paths matching this regular expression
    #[arg(long, short = 'x', value_name = "REGEX")]
    pub exclude: Option<String>,

    /// Only include paths matching this regular expression
    #[arg(long, short = 'r', value_name = "REGEX")]
    pub include: Option<String>,

    /// Exclude dot files and anything inside dot directories
    #[arg(long, short = 'X')]
    pub exclude_dot: bool,

    /// Only files modified on or after this date
    #[arg(long, value_name = "YYYYMMDD")]
    pub newer: Option<String>,

    /// Only files modified on or before this date
    #[arg(long, value_name = "YYYYMMDD")]
    pub older: Option<String>,

    /// Only files of at least this many bytes
    #[arg(long, value_name = "BYTES")]
    pub larger: Option<u64>,

    /// Only files of at most this many bytes
    #[arg(long, value_name = "BYTES")]
    pub smaller: Option<u64>,

    /// Output CSV
    #[arg(long)]
    pub csv: bool,

    /// Output an HTML table
    #[arg(long)]
    pub html: bool,

    /// Output JSON
    #[arg(long)]
    pub json: bool,

    /// Never truncate long file names
    #[arg(long)]
    pub no_truncate: bool,

    /// Truncate file names to this many characters
    #[arg(long, short = 'w', value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub width: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(error::USAGE_EXIT_CODE);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    if let Err(e) = run(&args) {
        eprintln!("{} {e}", "Error:".red());
        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let config = Config::from_args(args)?;
    debug!("{config:?}");

    let paths = input::read_paths(&config.source, config.quiet)?;
    let mut entries =
        scanner::collect_entries(&paths, &config.filter, config.quiet, &scanner::LocalFs);

    if let Some(order) = config.sort {
        sort::sort_entries(&mut entries, order);
    }

    let rows = stats::build_rows(entries, config.totals);
    let rendered = output::render(&rows, &config.render)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(RenderError::from)?;
    Ok(())
}
