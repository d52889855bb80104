//! Crate-level error types.

use std::fmt;

/// Errors produced by the glview crate.
///
/// Camera math itself is infallible; only the I/O surfaces (option presets
/// and replay traces) can fail.
#[derive(Debug)]
pub enum ViewError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A replay trace line could not be decoded.
    Trace {
        /// 1-based line number within the trace.
        line: usize,
        /// Decoder message.
        message: String,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Trace { line, message } => {
                write!(f, "trace error on line {line}: {message}")
            }
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ViewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
