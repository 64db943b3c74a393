//! Error types for expression deserialization

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors that can occur when decoding an expression from JSON
///
/// The first variant covers text that is not JSON at all; the others cover
/// valid JSON that does not follow the expression grammar. Callers that only
/// need a success/failure answer can treat every variant alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeserializeError {
    /// The input is not valid JSON
    InvalidJson {
        /// The error message from the JSON parser
        message: Arc<str>,
        /// The original input string that failed to parse
        input: Arc<str>,
        /// 1-based line of the error
        line: usize,
        /// 1-based column of the error
        column: usize,
    },
    /// A string used as a variable matches an operator token
    ReservedVariable {
        /// The offending name, as written
        name: Arc<str>,
    },
    /// The first element of an operator array is not `NOT`, `OR` or `AND`
    UnknownOperator {
        /// The JSON text of the first element
        token: Arc<str>,
    },
    /// An operator array has the wrong number of operands
    InvalidArity {
        /// The operator token, as written
        operator: Arc<str>,
        /// Number of operands the operator takes
        expected: usize,
        /// Number of operands found
        found: usize,
    },
    /// A JSON value that has no meaning in the grammar (number, null, object)
    UnexpectedValue {
        /// The kind of JSON value found
        kind: &'static str,
    },
    /// An empty JSON array
    EmptyArray,
}

impl fmt::Display for DeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeserializeError::InvalidJson {
                message,
                input,
                line,
                column,
            } => write!(
                f,
                "Invalid JSON at line {} column {}: {}. Input: {:?}",
                line, column, message, input
            ),
            DeserializeError::ReservedVariable { name } => {
                write!(f, "Operator token {:?} cannot be used as a variable", name)
            }
            DeserializeError::UnknownOperator { token } => {
                write!(f, "Unknown operator {}; expected NOT, OR or AND", token)
            }
            DeserializeError::InvalidArity {
                operator,
                expected,
                found,
            } => write!(
                f,
                "Operator {:?} takes {} operand(s), found {}",
                operator, expected, found
            ),
            DeserializeError::UnexpectedValue { kind } => {
                write!(f, "Unexpected JSON {}; expected boolean, string or array", kind)
            }
            DeserializeError::EmptyArray => write!(f, "Empty array is not an expression"),
        }
    }
}

impl std::error::Error for DeserializeError {}

impl From<DeserializeError> for io::Error {
    fn from(err: DeserializeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
