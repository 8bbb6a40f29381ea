//! Error Taxonomy
//!
//! Every failure path in the app maps to one of these conditions; none is
//! fatal, the current screen always stays usable.

use serde::{Deserialize, Serialize};

/// Common result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Grid-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GridError {
    /// A required field (title, category name, choice, image URL) is empty
    Validation(String),
    /// The target title is already used by a different grid
    DuplicateTitle(String),
    /// A shared token could not be decoded into a well-formed grid
    MalformedToken(String),
    /// Persistent storage rejected a write
    Storage(String),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            GridError::DuplicateTitle(title) => {
                write!(f, "A TopGrid titled \"{}\" already exists", title)
            }
            GridError::MalformedToken(msg) => write!(f, "Malformed share token: {}", msg),
            GridError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}
