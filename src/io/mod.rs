//! I/O abstractions for output targets and the tee data path.
//!
//! This module provides:
//! - `OutputTarget`: Trait for named output destinations
//! - `FileOutput` and `InMemorySink`: file-backed and in-memory targets
//! - `OutputSet`: All targets of one run, opened and closed together
//! - `FanOut`: A writer replicating every write to the primary stream and each target
//! - `TeeReader`: A reader mirroring every chunk it returns into a writer

mod fan_out;
mod memory;
mod output;
mod output_set;
mod std_io;
mod tee_reader;

pub use fan_out::FanOut;
pub use memory::InMemorySink;
pub use output::OutputTarget;
pub use output_set::OutputSet;
pub use std_io::FileOutput;
pub use tee_reader::TeeReader;
