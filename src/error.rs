//! Error types for the yaml2env CLI.
//!
//! Uses thiserror for derive macros. Every variant is fatal and maps to an
//! exit code; non-fatal conditions are reported through `tracing` instead.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conversion runs.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// An input file could not be read (missing, unreadable, not UTF-8).
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The YAML parser rejected the input.
    #[error("failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Writing the `.env` lines to the output failed.
    #[error("failed to write output: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    /// The document root is not a mapping.
    #[error(
        "expected a YAML file that contains a single document with a configuration mapping, found {found}"
    )]
    NotAMapping { found: &'static str },

    /// A list mixes configuration objects with other values.
    #[error("expected list of configuration objects at '{path}', found {found}")]
    ExpectedObjectList { path: String, found: &'static str },

    /// A mapping key that cannot become part of a variable name.
    #[error("unsupported key ({found}) under '{path}'")]
    UnsupportedKey { path: String, found: &'static str },

    /// A structural error attributed to the file it was found in.
    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<ConvertError>,
    },
}

impl ConvertError {
    /// Attach the originating file to an error that does not carry one yet.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            ConvertError::Read { .. }
            | ConvertError::Parse { .. }
            | ConvertError::Write { .. }
            | ConvertError::InFile { .. } => self,
            other => ConvertError::InFile {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::Read { .. } | ConvertError::Write { .. } => exit_codes::IO_FAILURE,
            ConvertError::Parse { .. } => exit_codes::PARSE_FAILURE,
            ConvertError::NotAMapping { .. }
            | ConvertError::ExpectedObjectList { .. }
            | ConvertError::UnsupportedKey { .. } => exit_codes::STRUCTURE_FAILURE,
            ConvertError::InFile { source, .. } => source.exit_code(),
        }
    }
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
