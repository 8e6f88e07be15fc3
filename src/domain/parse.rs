use crate::domain::Entry;
use thiserror::Error;
use time::OffsetDateTime;

// `|<timestamp>|<user>|<via>|<comment>|`: the field before the first `|` is unused.
const TIMESTAMP: usize = 1;
const USER: usize = 2;
const VIA: usize = 3;
const COMMENT: usize = 4;
const MIN_FIELDS: usize = COMMENT + 1;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("line {line}: expected at least 5 '|'-separated fields, found {found}")]
    MissingFields { line: usize, found: usize },

    #[error("line {line}: invalid timestamp: {value:?}")]
    InvalidTimestamp { line: usize, value: String },
}

/// Parses a whole history file, one entry per line.
///
/// A single bad line rejects the file: entry numbers are line positions, so
/// dropping a line would silently renumber everything after it.
pub fn parse_history(text: &str) -> Result<Vec<Entry>, ParseError> {
    text.lines()
        .enumerate()
        .map(|(index, line)| parse_history_line(line, index + 1))
        .collect()
}

pub fn parse_history_line(line: &str, line_no: usize) -> Result<Entry, ParseError> {
    let fields = line.split('|').collect::<Vec<_>>();
    if fields.len() < MIN_FIELDS {
        return Err(ParseError::MissingFields {
            line: line_no,
            found: fields.len(),
        });
    }

    let raw_timestamp = fields[TIMESTAMP].trim();
    let timestamp = raw_timestamp
        .parse::<i64>()
        .ok()
        .filter(|seconds| OffsetDateTime::from_unix_timestamp(*seconds).is_ok())
        .ok_or_else(|| ParseError::InvalidTimestamp {
            line: line_no,
            value: raw_timestamp.to_string(),
        })?;

    Ok(Entry {
        timestamp,
        user: fields[USER].to_string(),
        via: fields[VIA].to_string(),
        comment: fields[COMMENT].to_string(),
    })
}
