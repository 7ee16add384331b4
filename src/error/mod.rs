//! Error types for tee runs.
//!
//! This module provides:
//! - `Stage`: Indicates which phase of a run failed
//! - `TeeError`: The single terminal error of a run
//! - `WriteFailure`: A destination write error carried through the read path

use std::fmt;
use std::io;

use thiserror::Error;

/// Target id used for the primary output stream.
pub const PRIMARY_ID: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Malformed command line
    Args,
    /// Error while opening an output target
    Open,
    Read,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Args => write!(f, "Args"),
            Stage::Open => write!(f, "Open"),
            Stage::Read => write!(f, "Read"),
            Stage::Write => write!(f, "Write"),
        }
    }
}

/// The terminal error of a tee run.
///
/// Every failure is fatal to the run; there is no partial-success variant.
#[derive(Debug, Error)]
pub enum TeeError {
    /// The command line could not be parsed. The clap error carries usage text.
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("{target}: {source}")]
    Open {
        /// Identifier of the target (file path)
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("read error: {0}")]
    Read(#[source] io::Error),

    #[error("{target}: write error: {source}")]
    Write {
        /// Identifier of the destination ("-" for the primary stream)
        target: String,
        #[source]
        source: io::Error,
    },
}

impl TeeError {
    /// The phase of the run this error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            TeeError::Usage(_) => Stage::Args,
            TeeError::Open { .. } => Stage::Open,
            TeeError::Read(_) => Stage::Read,
            TeeError::Write { .. } => Stage::Write,
        }
    }

    /// Identifier of the failing destination, if the error has one.
    pub fn target(&self) -> Option<&str> {
        match self {
            TeeError::Open { target, .. } | TeeError::Write { target, .. } => Some(target),
            TeeError::Usage(_) | TeeError::Read(_) => None,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            TeeError::Usage(e) => e.exit_code(),
            _ => 1,
        }
    }
}

/// A failed write to one fan-out member.
///
/// Travels inside an `io::Error` through `Read::read` of a `TeeReader`, so the
/// runner can tell destination failures apart from input failures.
#[derive(Debug, Error)]
#[error("{target}: {source}")]
pub struct WriteFailure {
    pub target: String,
    #[source]
    pub source: io::Error,
}

impl WriteFailure {
    /// Wrap a member's write error, keeping its kind.
    pub fn into_io(target: &str, source: io::Error) -> io::Error {
        let kind = source.kind();
        io::Error::new(
            kind,
            WriteFailure {
                target: target.to_string(),
                source,
            },
        )
    }
}

impl From<io::Error> for TeeError {
    fn from(err: io::Error) -> Self {
        let is_write = err
            .get_ref()
            .is_some_and(|inner| inner.is::<WriteFailure>());
        if !is_write {
            return TeeError::Read(err);
        }

        let kind = err.kind();
        match err.into_inner().map(|inner| inner.downcast::<WriteFailure>()) {
            Some(Ok(failure)) => {
                let WriteFailure { target, source } = *failure;
                TeeError::Write { target, source }
            }
            Some(Err(other)) => TeeError::Read(io::Error::new(kind, other)),
            None => TeeError::Read(io::Error::from(kind)),
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
