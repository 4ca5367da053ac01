// crates/zet-core/src/id.rs - Timestamp identifiers and the path each one maps to
//
// A note identifier is the local creation minute formatted as YYMMDDHHmm.
// Fixed width and zero padding make identifiers sort lexically in creation
// order, and the first two characters select the year partition:
//
//   2403051412  ->  <root>/24/2403051412.md
//
// Two notes created in the same minute get the same identifier and the second
// overwrites the first. Nothing here tries to prevent that.

use chrono::{Local, NaiveDateTime};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// chrono format string for a freshly generated identifier
pub const ID_FORMAT: &str = "%y%m%d%H%M";

/// Length of every generated identifier
pub const ID_LEN: usize = 10;

/// Extension given to every note file
pub const NOTE_EXTENSION: &str = "md";

/// Number of leading characters that name the year partition
const YEAR_LEN: usize = 2;

/// Errors that can occur while accepting a user-supplied identifier
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IdError {
    #[error("invalid note id '{0}': expected at least 2 characters")]
    TooShort(String),
}

/// Result type for ID operations
pub type IdResult<T> = Result<T, IdError>;

/// Identifier of a single zet.
///
/// Generated identifiers are always ten ASCII digits. Identifiers typed by
/// the user are taken as-is provided they are long enough to name a year
/// partition; a malformed id simply points at a file that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(String);

impl NoteId {
    /// Identifier for the current local minute
    pub fn now() -> Self {
        Self::from_datetime(&Local::now().naive_local())
    }

    /// Identifier for an arbitrary wall-clock time
    pub fn from_datetime(datetime: &NaiveDateTime) -> Self {
        Self(datetime.format(ID_FORMAT).to_string())
    }

    /// Accept an identifier typed on the command line
    pub fn parse(input: &str) -> IdResult<Self> {
        if input.chars().count() < YEAR_LEN {
            return Err(IdError::TooShort(input.to_string()));
        }
        Ok(Self(input.to_string()))
    }

    /// The year partition this note lives in (first two characters)
    pub fn year(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(YEAR_LEN)
            .map_or(self.0.len(), |(idx, _)| idx);
        &self.0[..end]
    }

    /// File name of the note, `<id>.md`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, NOTE_EXTENSION)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NoteId {
    type Err = IdError;

    fn from_str(s: &str) -> IdResult<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Storage path of a note: `<root>/<year>/<id>.md`.
///
/// Pure string work. The year directory is expected to exist already; nothing
/// in this crate ever creates it.
pub fn path_for(root: &Path, id: &NoteId) -> PathBuf {
    root.join(id.year()).join(id.file_name())
}
