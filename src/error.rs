//! Error types for the crate
//!
//! Deserialization failures carry their own detailed type,
//! [`DeserializeError`]. This module wraps it together with the I/O failures
//! that can happen when expressions are read from files.

use crate::expression::DeserializeError;
use std::fmt;
use std::io;

/// The main error type of the crate
#[derive(Debug)]
pub enum Error {
    /// The input is not a valid JSON-encoded expression
    Deserialize(DeserializeError),

    /// IO error wrapper
    ///
    /// Wraps standard IO errors that occur while reading input files.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Deserialize(e) => write!(f, "Malformed expression: {}", e),
            Error::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Deserialize(e) => Some(e),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<DeserializeError> for Error {
    fn from(err: DeserializeError) -> Self {
        Error::Deserialize(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(e) => e,
            Error::Deserialize(e) => e.into(),
        }
    }
}
