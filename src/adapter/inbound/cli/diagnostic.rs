//! Miette-based error diagnostics for CLI error presentation.
//!
//! Renders configuration parse errors with the offending TOML snippet
//! highlighted, the way `cargo` shows manifest errors.

use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, Error};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(sarwatch::config))]
pub struct ConfigDiagnostic {
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        name: impl AsRef<str>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: NamedSource::new(name, src.into()),
            span: (offset, len).into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build a diagnostic for a TOML parse failure that carries a span.
    #[must_use]
    pub fn from_error(error: &Error, name: &str, src: &str) -> Option<Self> {
        let Error::Config(ConfigError::Parse(parse)) = error else {
            return None;
        };
        let span = parse.span()?;
        Some(
            Self::new(
                parse.message().to_string(),
                name,
                src,
                span.start,
                span.end.saturating_sub(span.start),
            )
            .with_help("see config.toml.example for the expected layout"),
        )
    }
}

/// Print a rich report for `error` when it points into `src`.
///
/// Returns `true` when a report was printed.
pub fn render_config_error(error: &Error, name: &str, src: &str) -> bool {
    match ConfigDiagnostic::from_error(error, name, src) {
        Some(diagnostic) => {
            eprintln!("{:?}", Report::new(diagnostic));
            true
        }
        None => false,
    }
}
