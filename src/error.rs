use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, parsing or configuring a roster.
#[derive(Error, Debug)]
pub enum Error {
    /// The source file could not be opened or read.
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The remote fetch failed: connection, timeout, non-2xx status or body decode.
    #[error("cannot fetch {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A record line was malformed. The whole parse is aborted.
    #[error("line {line}: {kind} (content: {content:?})")]
    Parse {
        /// 1-based line number in the raw text.
        line: u64,
        /// The raw line, without its terminator.
        content: String,
        kind: ParseErrorKind,
    },

    /// No source identifier was given.
    #[error("missing source identifier (expected a file path or http(s) URL)")]
    MissingSource,

    #[error("invalid value {value:?} for {key}")]
    Config { key: &'static str, value: String },
}

/// Why a single record line was rejected.
#[derive(Error, Debug)]
pub enum ParseErrorKind {
    #[error("expected 6 comma-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("field `{field}` is not a valid integer: {value:?}")]
    InvalidInteger {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("hire date {value:?} is not a YYYY-MM-DD date")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The tokenizer itself gave up on the input.
    #[error("unreadable record: {0}")]
    Unreadable(#[source] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
