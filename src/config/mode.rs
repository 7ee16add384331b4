//! Write mode for output targets.

use std::fmt;

/// How each output target is opened before the copy starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Discard existing content
    #[default]
    Truncate,
    /// Keep existing content and write at its end
    Append,
}

impl WriteMode {
    /// Derive the mode from the `-a` flag.
    pub fn from_append(append: bool) -> Self {
        if append {
            WriteMode::Append
        } else {
            WriteMode::Truncate
        }
    }

    /// Parse a mode from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "truncate" | "overwrite" => Some(WriteMode::Truncate),
            "append" => Some(WriteMode::Append),
            _ => None,
        }
    }

    pub fn is_append(self) -> bool {
        matches!(self, WriteMode::Append)
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteMode::Truncate => write!(f, "truncate"),
            WriteMode::Append => write!(f, "append"),
        }
    }
}
