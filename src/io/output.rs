//! Output target trait definition.

use std::fmt::Debug;
use std::io::Write;

use crate::config::WriteMode;

/// Trait for synchronous output targets.
///
/// Implementors provide a way to open a writable stream to a named
/// destination such as a file or an in-memory buffer.
pub trait OutputTarget: Send + Sync + Debug {
    /// Returns a unique identifier for this output target.
    ///
    /// This is used for error messages and logging.
    /// Convention: the file path for files.
    fn id(&self) -> &str;

    /// Open the target for writing, truncating any existing content.
    fn open_overwrite(&self) -> std::io::Result<Box<dyn Write + Send>>;

    /// Open the target for appending to existing content.
    fn open_append(&self) -> std::io::Result<Box<dyn Write + Send>>;

    /// Open the target according to `mode`.
    fn open(&self, mode: WriteMode) -> std::io::Result<Box<dyn Write + Send>> {
        match mode {
            WriteMode::Truncate => self.open_overwrite(),
            WriteMode::Append => self.open_append(),
        }
    }
}
