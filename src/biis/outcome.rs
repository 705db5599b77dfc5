//! Results of a decode pass

use std::fmt;

use serde::Serialize;

use super::error::BiisError;
use crate::gif::Container;

/// How an unrecognized token was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    /// Field was set to the converter's "not specified" member
    Defaulted,
    /// Field was left unset
    Unset,
}

/// A field whose source token was not recognized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeNote {
    /// Canonical path of the element
    pub path: String,
    /// Source text as read
    pub token: String,
    /// Resolution applied
    pub kind: NoteKind,
}

impl DecodeNote {
    pub(crate) fn new(path: &str, token: &str, kind: NoteKind) -> Self {
        Self {
            path: path.to_string(),
            token: token.to_string(),
            kind,
        }
    }
}

impl fmt::Display for DecodeNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolution = match self.kind {
            NoteKind::Defaulted => "defaulted",
            NoteKind::Unset => "left unset",
        };
        write!(f, "{}: unrecognized {:?}, {}", self.path, self.token, resolution)
    }
}

/// A document decoded to the end
#[derive(Debug, Clone)]
pub struct DecodeOutcome {
    /// The populated container
    pub container: Container,
    /// Fields whose token was not recognized
    pub notes: Vec<DecodeNote>,
}

impl DecodeOutcome {
    /// True when every mapped token was recognized
    pub fn is_complete(&self) -> bool {
        self.notes.is_empty()
    }
}

/// A decode pass that stopped before the end of the document.
///
/// `partial` holds everything assembled from the elements processed before
/// the failing one.
#[derive(Debug, thiserror::Error)]
#[error("BIIS-XML decode stopped before end of document")]
pub struct DecodeFailure {
    /// Cause of the failure
    #[source]
    pub error: BiisError,
    /// Container assembled up to the failing element
    pub partial: Box<Container>,
    /// Notes collected up to the failing element
    pub notes: Vec<DecodeNote>,
}

impl From<BiisError> for DecodeFailure {
    fn from(error: BiisError) -> Self {
        Self {
            error,
            partial: Box::default(),
            notes: Vec::new(),
        }
    }
}
