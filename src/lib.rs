//! # teeio
//!
//! Copy an input stream to a primary output and any number of files, like
//! the Unix `tee` tool.
//!
//! ## Overview
//!
//! teeio provides:
//! - **Output sets**: Open a list of files with one write mode (truncate or append),
//!   all-or-nothing, and close them together
//! - **Fan-out writer**: One `Write` that replicates every write to the primary
//!   stream and each file, stopping at the first destination that fails
//! - **Tee reader**: A `Read` decorator that mirrors each chunk into a writer before
//!   returning it
//! - **Engine**: One streaming pass from input to all destinations with guaranteed
//!   release of the opened files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::io;
//!
//! use teeio::{TeeBuilder, WriteMode};
//!
//! fn main() -> Result<(), teeio::TeeError> {
//!     let engine = TeeBuilder::new()
//!         .add_output("copy-a.log")
//!         .add_output("copy-b.log")
//!         .with_mode(WriteMode::Append)
//!         .build();
//!
//!     engine.run(&mut io::stdin().lock(), &mut io::stdout().lock())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming semantics
//!
//! - Memory use is bounded by the copy buffer, not by the input size.
//! - Each chunk reaches the primary stream first, then the files in argument
//!   order. When a destination fails, later destinations do not receive that
//!   chunk and the run stops.
//! - Nothing is rolled back: bytes already written stay written.

use std::ffi::OsString;
use std::io::{Read, Write};

use tracing::info;

pub mod builder;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod io;

// Re-exports for convenience
pub use builder::TeeBuilder;
pub use cli::TeeArgs;
pub use config::WriteMode;
pub use engine::TeeEngine;
pub use error::{Stage, TeeError, WriteFailure};
pub use io::{FanOut, FileOutput, InMemorySink, OutputSet, OutputTarget, TeeReader};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::TeeDiagnostic;

/// Run one tee invocation.
///
/// `args` is the full argument vector, program name first. Arguments are
/// parsed before any file is touched; then every named file is opened, the
/// whole of `input` is copied to `primary` and the files, and the files are
/// closed. Returns the number of bytes copied.
pub fn run<I, T>(args: I, input: &mut dyn Read, primary: &mut dyn Write) -> Result<u64, TeeError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = TeeArgs::try_parse_args(args)?;
    run_with_args(&args, input, primary)
}

/// Run one tee invocation from already parsed arguments.
pub fn run_with_args(
    args: &TeeArgs,
    input: &mut dyn Read,
    primary: &mut dyn Write,
) -> Result<u64, TeeError> {
    let engine = TeeBuilder::from_args(args).build();
    let copied = engine.run(input, primary)?;
    info!(bytes = copied, files = args.files.len(), mode = %args.write_mode(), "tee finished");
    Ok(copied)
}
