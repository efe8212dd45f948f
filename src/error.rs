//! Error types shared by the document, geometry and template modules

use std::path::PathBuf;
use thiserror::Error;

/// Every way building a BAGEL input can fail.
///
/// None of these are recovered from internally; they abort the run before
/// anything is written.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse geometry {} (line {line_number}): {details}", path.display())]
    Parse {
        path: PathBuf,
        line_number: usize,
        details: String,
    },

    #[error("{title} section not found in template")]
    Lookup { title: String },

    #[error("unknown type '{type_name}' for bagel serialization")]
    Serialization { type_name: String },

    #[error("invalid template {}: {details}", path.display())]
    Template { path: PathBuf, details: String },

    #[error("unknown element symbol '{symbol}'")]
    UnknownElement { symbol: String },

    #[error("{electrons} electrons cannot fill {nact} active orbitals")]
    Electrons { electrons: i64, nact: i64 },
}

impl InputError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, line_number: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line_number,
            details: details.into(),
        }
    }

    pub fn template(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::Template {
            path: path.into(),
            details: details.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InputError>;
