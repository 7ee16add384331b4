//! Tee engine: opens the targets, drives one copy pass, and releases the targets.

use std::io::{self, Read, Write};
use std::sync::Arc;

use tracing::debug;

use crate::config::WriteMode;
use crate::error::TeeError;
use crate::io::{OutputSet, OutputTarget, TeeReader};

/// Engine for one tee invocation.
///
/// The input and the primary output are supplied to [`TeeEngine::run`] by the
/// caller, so the same engine works over the process streams or in-memory
/// buffers.
#[derive(Debug, Clone)]
pub struct TeeEngine {
    mode: WriteMode,
    outputs: Vec<Arc<dyn OutputTarget>>,
}

impl TeeEngine {
    /// Create a new tee engine.
    pub fn new(mode: WriteMode, outputs: Vec<Arc<dyn OutputTarget>>) -> Self {
        Self { mode, outputs }
    }

    /// Get the write mode.
    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    /// Get the output targets in write order.
    pub fn outputs(&self) -> &[Arc<dyn OutputTarget>] {
        &self.outputs
    }

    /// Copy `input` to `primary` and every output target until end of stream.
    ///
    /// Opening is all-or-nothing; nothing is read if any target fails to
    /// open. The targets are closed on every path once they are open. Returns
    /// the number of bytes copied.
    pub fn run(&self, input: &mut dyn Read, primary: &mut dyn Write) -> Result<u64, TeeError> {
        let mut outputs = OutputSet::open(&self.outputs, self.mode)?;
        let result = copy(input, primary, &mut outputs);
        outputs.close();
        result
    }
}

fn copy(
    input: &mut dyn Read,
    primary: &mut dyn Write,
    outputs: &mut OutputSet,
) -> Result<u64, TeeError> {
    let mut fan_out = outputs.fan_out(primary);
    let copied = {
        let mut tee = TeeReader::new(input, &mut fan_out);
        io::copy(&mut tee, &mut io::sink())?
    };

    fan_out.flush()?;
    debug!(bytes = copied, destinations = fan_out.len(), "copy complete");
    Ok(copied)
}
