use thiserror::Error;

/// Exit code for arguments clap itself rejects (unknown flags, unparsable values).
pub const USAGE_EXIT_CODE: i32 = 16;

/// Invalid flag values or combinations, detected before any path is examined.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("only one sorting argument can be given")]
    ConflictingSort,

    #[error("only one of --csv, --html and --json can be given")]
    ConflictingFormats,

    #[error("--totals cannot be combined with --csv, --html or --json")]
    TotalsWithFormat,

    #[error("--no-truncate and --width are mutually exclusive")]
    ConflictingTruncation,

    #[error("invalid exclude pattern '{pattern}': {source}")]
    InvalidExclude {
        pattern: String,
        source: regex::Error,
    },

    #[error("invalid include pattern '{pattern}': {source}")]
    InvalidInclude {
        pattern: String,
        source: regex::Error,
    },

    #[error("invalid {flag} date '{value}', expected YYYYMMDD")]
    InvalidDate { flag: &'static str, value: String },

    #[error("--newer date must not be later than --older date")]
    InvertedDateRange,

    #[error("--larger size must not exceed --smaller size")]
    InvertedSizeRange,

    #[error("--glob cannot be combined with an input file")]
    GlobWithInputFile,
}

impl ConfigError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::ConflictingSort => 2,
            ConfigError::ConflictingFormats => 3,
            ConfigError::TotalsWithFormat => 4,
            ConfigError::ConflictingTruncation => 5,
            ConfigError::InvalidExclude { .. } => 6,
            ConfigError::InvalidInclude { .. } => 7,
            ConfigError::InvalidDate { .. } => 8,
            ConfigError::InvertedDateRange => 9,
            ConfigError::InvertedSizeRange => 10,
            ConfigError::GlobWithInputFile => 11,
        }
    }
}

/// Failures while acquiring the list of paths to examine.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot read input list: {0}")]
    Read(#[from] std::io::Error),

    #[error("no file names were given")]
    Empty,

    #[error("no files matched '{0}'")]
    NoMatches(String),

    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
}

impl InputError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            InputError::Open { .. } | InputError::Read(_) => 1,
            InputError::Empty => 12,
            InputError::NoMatches(_) => 13,
            InputError::InvalidPattern { .. } => 14,
        }
    }
}

/// Internal consistency failures while producing output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("malformed timestamp '{0}' in output row")]
    Timestamp(String),

    #[error("cannot serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl AppError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(e) => e.exit_code(),
            AppError::Input(e) => e.exit_code(),
            AppError::Render(_) => 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors: Vec<AppError> = vec![
            ConfigError::ConflictingSort.into(),
            ConfigError::ConflictingFormats.into(),
            ConfigError::TotalsWithFormat.into(),
            ConfigError::ConflictingTruncation.into(),
            ConfigError::InvalidDate {
                flag: "--older",
                value: "x".to_string(),
            }
            .into(),
            ConfigError::InvertedDateRange.into(),
            ConfigError::InvertedSizeRange.into(),
            ConfigError::GlobWithInputFile.into(),
            InputError::Empty.into(),
            InputError::NoMatches("*.zip".to_string()).into(),
            RenderError::Timestamp("bogus".to_string()).into(),
        ];

        let mut codes: Vec<i32> = errors.iter().map(AppError::exit_code).collect();
        codes.push(USAGE_EXIT_CODE);
        assert!(codes.iter().all(|c| *c > 1));
        let count = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), count);
    }
}
