//! Error types for sigview.
//!
//! Two layers: [`LoadError`] describes a single source that could not be
//! ingested (never fatal, collected in a [`LoadReport`](crate::data::loader::LoadReport)),
//! while [`Error`] covers the outer surfaces that can genuinely fail
//! (reading config, writing the dashboard document).

use std::path::PathBuf;

use thiserror::Error;

use crate::data::source::{Encoding, SourceKind};

/// A per-source problem encountered while loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A fixed input file is not present.
    #[error("{kind} source '{}' does not exist", path.display())]
    MissingSource { kind: SourceKind, path: PathBuf },

    /// The processed-output directory is not present.
    #[error("directory '{}' does not exist", path.display())]
    MissingDirectory { path: PathBuf },

    /// A line failed its source's numeric decoding rule; the whole source was skipped.
    #[error("{}:{line_no}: cannot decode {line:?} as {encoding}", path.display())]
    Decode {
        path: PathBuf,
        line_no: usize,
        line: String,
        encoding: Encoding,
    },

    /// A hex value too large for the sample type; the whole source was skipped.
    #[error("{}:{line_no}: hex value {line:?} is out of range", path.display())]
    OutOfRange {
        path: PathBuf,
        line_no: usize,
        line: String,
    },

    /// The source exists but could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A processed file whose display name could not be derived unambiguously.
    /// The series is still loaded under `name`.
    #[error("display name of '{}' is ambiguous ({reason}); using '{name}'", path.display())]
    AmbiguousName {
        path: PathBuf,
        name: String,
        reason: &'static str,
    },
}

impl LoadError {
    /// `true` when the source contributed no series because of this issue.
    pub fn is_skip(&self) -> bool {
        !matches!(self, LoadError::AmbiguousName { .. })
    }
}

/// Fatal errors of the binaries and output writers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize dashboard payload: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
