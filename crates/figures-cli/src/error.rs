//! Error types for the Figures CLI.
//!
//! The shape model itself cannot fail; everything here comes from reading
//! configuration or writing the drawing.

use std::{io, ops::Range, path::PathBuf};

use thiserror::Error;

/// The main error type returned by [`run`](crate::run).
#[derive(Debug, Error)]
pub enum FiguresError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to parse TOML configuration `{}`: {message}", .path.display())]
    Parse {
        path: PathBuf,
        src: String,
        message: String,
        span: Option<Range<usize>>,
    },
}

impl ConfigError {
    /// Create a new `Parse` error from a TOML error and the text it was raised for.
    pub fn from_toml(err: &toml::de::Error, path: impl Into<PathBuf>, src: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            src: src.into(),
            message: err.message().to_string(),
            span: err.span(),
        }
    }
}
