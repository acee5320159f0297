//! Errors raised while reading or validating story data.

use std::path::PathBuf;

use serde_json::error::Category;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryError {
    /// The story file could not be read.
    #[error("failed to read story file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed JSON.
    #[error("malformed story JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// A required field is missing, mistyped, or empty.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl StoryError {
    /// Sort a `serde_json` failure into parse vs. validation.
    ///
    /// Syntax and EOF errors mean the document itself is broken. Data errors
    /// mean the document parsed but does not have the story shape.
    pub(crate) fn from_json(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::Validation(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => Self::Parse(err),
        }
    }
}
