//! Error adapter for converting FiguresError to miette diagnostics.
//!
//! This module provides the bridge between the CLI's standard error types
//! and miette's rich diagnostic formatting. Configuration parse errors are
//! rendered with a snippet of the offending TOML.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, SourceSpan};

use crate::error::{ConfigError, FiguresError};

/// Adapter that renders a [`FiguresError`] as a miette [`Diagnostic`].
pub struct ErrorAdapter<'a>(pub &'a FiguresError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl Diagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            FiguresError::Io(_) => "figures::io",
            FiguresError::Config(ConfigError::MissingFile(_)) => "figures::config::missing",
            FiguresError::Config(ConfigError::Parse { .. }) => "figures::config::parse",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            FiguresError::Io(_) => return None,
            FiguresError::Config(ConfigError::MissingFile(_)) => {
                "check the path passed to --config"
            }
            FiguresError::Config(ConfigError::Parse { .. }) => {
                "offsets are tables such as `move_offset = { dx = 1, dy = 1 }`"
            }
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.0 {
            FiguresError::Config(ConfigError::Parse { src, .. }) => {
                Some(src as &dyn miette::SourceCode)
            }
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let FiguresError::Config(ConfigError::Parse {
            message,
            span: Some(span),
            ..
        }) = self.0
        else {
            return None;
        };

        let label =
            LabeledSpan::new_primary_with_span(Some(message.clone()), SourceSpan::from(span.clone()));
        Some(Box::new(std::iter::once(label)))
    }
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use super::*;

    fn parse_error() -> FiguresError {
        ConfigError::Parse {
            path: PathBuf::from("config.toml"),
            src: "[scene]\nmove_offset = 3\n".to_string(),
            message: "invalid type: integer `3`, expected struct Offset".to_string(),
            span: Some(22..23),
        }
        .into()
    }

    #[test]
    fn test_codes() {
        let io_err = FiguresError::from(io::Error::other("boom"));
        let missing = FiguresError::from(ConfigError::MissingFile(PathBuf::from("x.toml")));

        let code = |err: &FiguresError| ErrorAdapter(err).code().map(|c| c.to_string());
        assert_eq!(code(&io_err).as_deref(), Some("figures::io"));
        assert_eq!(code(&missing).as_deref(), Some("figures::config::missing"));
        assert_eq!(code(&parse_error()).as_deref(), Some("figures::config::parse"));
    }

    #[test]
    fn test_parse_error_has_source_and_label() {
        let err = parse_error();
        let adapter = ErrorAdapter(&err);

        assert!(adapter.source_code().is_some());
        let labels: Vec<LabeledSpan> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 22);
        assert_eq!(labels[0].len(), 1);
    }

    #[test]
    fn test_io_error_has_no_snippet() {
        let err = FiguresError::from(io::Error::other("boom"));
        let adapter = ErrorAdapter(&err);

        assert!(adapter.source_code().is_none());
        assert!(adapter.labels().is_none());
        assert!(adapter.help().is_none());
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let err = parse_error();
        let mut rendered = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut rendered, &ErrorAdapter(&err))
            .unwrap();

        assert!(rendered.contains("figures::config::parse"));
        assert!(rendered.contains("move_offset"));
    }
}
