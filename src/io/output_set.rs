//! All output targets of one run, opened and closed together.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use super::{FanOut, FileOutput, OutputTarget};
use crate::config::WriteMode;
use crate::error::TeeError;

/// One opened output target.
struct TargetFile {
    id: String,
    writer: Box<dyn Write + Send>,
}

/// The opened output targets of a run, in argument order.
///
/// Construction is all-or-nothing: if any target fails to open, the ones
/// opened before it are closed and no set is returned. Closing releases every
/// target and ignores close errors. Dropping the set closes it too, so every
/// exit path releases the targets.
pub struct OutputSet {
    mode: WriteMode,
    targets: Vec<TargetFile>,
}

impl OutputSet {
    /// Open every target in order with the same write mode.
    pub fn open(targets: &[Arc<dyn OutputTarget>], mode: WriteMode) -> Result<Self, TeeError> {
        let mut set = OutputSet {
            mode,
            targets: Vec::with_capacity(targets.len()),
        };

        for target in targets {
            // On error `set` is dropped here, which closes what was opened so far.
            let writer = target.open(mode).map_err(|source| TeeError::Open {
                target: target.id().to_string(),
                source,
            })?;
            debug!(output = target.id(), %mode, "opened output");
            set.targets.push(TargetFile {
                id: target.id().to_string(),
                writer,
            });
        }

        Ok(set)
    }

    /// Open every path as a file target.
    pub fn open_paths<P>(paths: &[P], mode: WriteMode) -> Result<Self, TeeError>
    where
        P: Clone + Into<PathBuf>,
    {
        let targets: Vec<Arc<dyn OutputTarget>> = paths
            .iter()
            .map(|p| Arc::new(FileOutput::new(p.clone())) as Arc<dyn OutputTarget>)
            .collect();
        Self::open(&targets, mode)
    }

    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    /// Number of opened targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Target ids in argument order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.targets.iter().map(|t| t.id.as_str())
    }

    /// Build a fan-out writer: the primary stream first, then every target.
    pub fn fan_out<'a>(&'a mut self, primary: &'a mut dyn Write) -> FanOut<'a> {
        let mut fan_out = FanOut::new(primary);
        for target in &mut self.targets {
            let TargetFile { id, writer } = target;
            fan_out.push(id.as_str(), &mut **writer);
        }
        fan_out
    }

    /// Close every target. Close errors are not reported.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.targets.is_empty() {
            return;
        }
        debug!(count = self.targets.len(), "closing outputs");
        // Dropping a handle closes it; the result of the close is discarded.
        self.targets.clear();
    }
}

impl Drop for OutputSet {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for OutputSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputSet")
            .field("mode", &self.mode)
            .field("targets", &self.ids().collect::<Vec<_>>())
            .finish()
    }
}
