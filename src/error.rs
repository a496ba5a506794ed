//! Conversion error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

/// Everything that can stop a conversion.
///
/// All variants are fatal: a failed conversion writes no output.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The named input file does not exist.
    #[error("Missing {}", path.display())]
    MissingInput { path: PathBuf },

    /// The command line did not name both an input and an output.
    #[error("Usage: blockmark <input_file> <output_file>")]
    Usage,

    /// A line ended inside its marker, e.g. a lone digit or a bare `###`.
    #[error("line {line}: cannot classify {content:?}, the line ends before its marker does")]
    MalformedLine { line: usize, content: String },

    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
