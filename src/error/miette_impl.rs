//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{Stage, TeeError};

/// A diagnostic wrapper for tee errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct TeeDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage) -> Option<String> {
    let text = match stage {
        Stage::Args => "Run `tee --help` for usage",
        Stage::Open => "Check that the parent directory exists and is writable",
        Stage::Read => "The input stream failed; files keep what was written before it",
        Stage::Write => "A destination rejected the data; later destinations were not written",
    };
    Some(text.into())
}

impl From<TeeError> for TeeDiagnostic {
    fn from(e: TeeError) -> Self {
        let stage = e.stage();
        let message = match e.target() {
            Some(target) => format!("[{stage}] on '{target}'"),
            None => format!("[{stage}]"),
        };
        TeeDiagnostic {
            message,
            source: Some(Box::new(e)),
            help: help_for(stage),
            severity: Severity::Error,
        }
    }
}

impl From<TeeError> for miette::Report {
    fn from(e: TeeError) -> Self {
        miette::Report::new(TeeDiagnostic::from(e))
    }
}
