//! Builder for creating TeeEngine instances.

use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::TeeArgs;
use crate::config::WriteMode;
use crate::engine::TeeEngine;
use crate::io::{FileOutput, OutputTarget};

#[derive(Debug, Default)]
pub struct TeeBuilder {
    outputs: Vec<Arc<dyn OutputTarget>>,
    mode: WriteMode,
}

impl TeeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from parsed command-line arguments.
    pub fn from_args(args: &TeeArgs) -> Self {
        Self::new()
            .with_mode(args.write_mode())
            .outputs_from_paths(&args.files)
    }

    /// Add a file output after the existing ones.
    pub fn add_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.outputs.push(Arc::new(FileOutput::new(path)));
        self
    }

    pub fn outputs_from_paths(mut self, paths: &[PathBuf]) -> Self {
        for path in paths {
            self = self.add_output(path.clone());
        }
        self
    }

    /// Add a pre-built output target after the existing ones.
    pub fn add_target(mut self, target: Arc<dyn OutputTarget>) -> Self {
        self.outputs.push(target);
        self
    }

    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn append(self, append: bool) -> Self {
        self.with_mode(WriteMode::from_append(append))
    }

    pub fn build(self) -> TeeEngine {
        TeeEngine::new(self.mode, self.outputs)
    }
}
