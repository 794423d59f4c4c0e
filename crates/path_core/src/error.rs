use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of the replay event stream
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed trace record at line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Line {line}: entity {index} already exists")]
    DuplicateEntity { line: usize, index: u32 },

    #[error("Line {line}: unknown entity {index}")]
    UnknownEntity { line: usize, index: u32 },

    #[error("Line {line}: tick {tick} arrives after tick {previous}")]
    TickOrder { line: usize, tick: i32, previous: i32 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
