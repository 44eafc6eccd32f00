use crate::Args;
use crate::error::ConfigError;
use crate::filter::{self, FilterOptions};
use crate::format::SizeFormat;
use crate::sort::{SortKey, SortOrder};
use chrono::{DateTime, Local};
use regex::Regex;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Glob(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Html,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    /// Fit names to the detected terminal width.
    Terminal,
    Disabled,
    Width(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub size: SizeFormat,
    pub milliseconds: bool,
    pub truncation: Truncation,
}

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: InputSource,
    pub quiet: bool,
    pub filter: FilterOptions,
    pub sort: Option<SortOrder>,
    pub totals: bool,
    pub render: RenderOptions,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let sort = sort_order(args)?;
        let format = output_format(args)?;

        if args.totals && format != OutputFormat::Table {
            return Err(ConfigError::TotalsWithFormat);
        }

        let truncation = match (args.no_truncate, args.width) {
            (true, Some(_)) => return Err(ConfigError::ConflictingTruncation),
            (true, None) => Truncation::Disabled,
            (false, Some(w)) => Truncation::Width(usize::try_from(w).unwrap_or(usize::MAX)),
            (false, None) => Truncation::Terminal,
        };

        let source = match (&args.glob, &args.file) {
            (Some(_), Some(_)) => return Err(ConfigError::GlobWithInputFile),
            (Some(pattern), None) => InputSource::Glob(pattern.clone()),
            (None, Some(path)) => InputSource::File(path.clone()),
            (None, None) => InputSource::Stdin,
        };

        let exclude = args
            .exclude
            .as_deref()
            .map(|p| {
                Regex::new(p).map_err(|source| ConfigError::InvalidExclude {
                    pattern: p.to_string(),
                    source,
                })
            })
            .transpose()?;
        let include = args
            .include
            .as_deref()
            .map(|p| {
                Regex::new(p).map_err(|source| ConfigError::InvalidInclude {
                    pattern: p.to_string(),
                    source,
                })
            })
            .transpose()?;

        let newer = date_bound(args.newer.as_deref(), "--newer", filter::newer_bound)?;
        let older = date_bound(args.older.as_deref(), "--older", filter::older_bound)?;
        // older is the start of the following day, so equal dates give newer < older
        if let (Some(n), Some(o)) = (newer, older)
            && n >= o
        {
            return Err(ConfigError::InvertedDateRange);
        }

        let smaller = args.smaller.unwrap_or(0);
        let larger = args.larger.unwrap_or(0);
        if smaller > 0 && larger > smaller {
            return Err(ConfigError::InvertedSizeRange);
        }

        Ok(Config {
            source,
            quiet: args.quiet,
            filter: FilterOptions {
                exclude_dot: args.exclude_dot,
                exclude,
                include,
                newer,
                older,
                smaller,
                larger,
            },
            sort,
            totals: args.totals,
            render: RenderOptions {
                format,
                size: SizeFormat {
                    commas: args.commas,
                    mebibytes: args.mebibytes,
                },
                milliseconds: args.milliseconds,
                truncation,
            },
        })
    }
}

fn sort_order(args: &Args) -> Result<Option<SortOrder>, ConfigError> {
    let flags = [
        (args.sort_size, SortKey::Size, false),
        (args.sort_size_desc, SortKey::Size, true),
        (args.sort_time, SortKey::ModTime, false),
        (args.sort_time_desc, SortKey::ModTime, true),
        (args.sort_name, SortKey::Name, false),
        (args.sort_name_desc, SortKey::Name, true),
        (args.sort_name_ci, SortKey::NameCaseInsensitive, false),
        (args.sort_name_ci_desc, SortKey::NameCaseInsensitive, true),
    ];

    let mut selected = flags.iter().filter(|(on, _, _)| *on);
    let order = selected.next().map(|(_, key, descending)| SortOrder {
        key: *key,
        descending: *descending,
    });
    if selected.next().is_some() {
        return Err(ConfigError::ConflictingSort);
    }
    Ok(order)
}

fn output_format(args: &Args) -> Result<OutputFormat, ConfigError> {
    let formats = [
        (args.csv, OutputFormat::Csv),
        (args.html, OutputFormat::Html),
        (args.json, OutputFormat::Json),
    ];

    let mut selected = formats.iter().filter(|(on, _)| *on);
    let format = selected.next().map_or(OutputFormat::Table, |(_, f)| *f);
    if selected.next().is_some() {
        return Err(ConfigError::ConflictingFormats);
    }
    Ok(format)
}

fn date_bound(
    value: Option<&str>,
    flag: &'static str,
    bound: fn(chrono::NaiveDate) -> Option<DateTime<Local>>,
) -> Result<Option<DateTime<Local>>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    filter::parse_date(value)
        .and_then(bound)
        .map(Some)
        .ok_or_else(|| ConfigError::InvalidDate {
            flag,
            value: value.to_string(),
        })
}
