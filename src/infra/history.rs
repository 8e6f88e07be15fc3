use crate::domain::{Entry, ParseError, parse_history};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadHistoryError {
    #[error("failed to read history file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed history file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },
}

pub fn load_history(path: &Path) -> Result<Vec<Entry>, LoadHistoryError> {
    let text = fs::read_to_string(path).map_err(|source| LoadHistoryError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let entries = parse_history(&text).map_err(|source| LoadHistoryError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    tracing::debug!(path = %path.display(), entries = entries.len(), "history loaded");
    Ok(entries)
}
