//! Configuration types for output targets.
//!
//! This module provides:
//! - `WriteMode`: How each named output file is opened (truncate or append)

mod mode;

pub use mode::WriteMode;
