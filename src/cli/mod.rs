//! Command-line surface of the `tee` binary.
//!
//! ```text
//! tee [-a] [-v...] [file ...]
//! ```
//!
//! Standard input is copied to standard output and to every named file.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::Level;

use crate::config::WriteMode;
use crate::error::TeeError;

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "tee",
    version,
    about = "Copy standard input to standard output and to each FILE",
    long_about = "Copy standard input to standard output and to each FILE.

Files are truncated unless -a is given. If any FILE cannot be opened, nothing
is copied. Writes stop at the first destination that fails."
)]
pub struct TeeArgs {
    /// Append to each FILE instead of overwriting it
    #[arg(short = 'a', long = "append")]
    pub append: bool,

    /// Verbose level on stderr: -v INFO / -vv DEBUG / -vvv TRACE (default: ERROR)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Files to write, in order
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl TeeArgs {
    /// Parse a full argument vector, program name first.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, TeeError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::try_parse_from(args)?)
    }

    /// Write mode selected by the flags.
    pub fn write_mode(&self) -> WriteMode {
        WriteMode::from_append(self.append)
    }

    /// Log level selected by the `-v` count.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::ERROR,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
