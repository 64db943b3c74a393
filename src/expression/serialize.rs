//! JSON encoding of expressions
//!
//! The grammar is a LISP-like nesting of JSON arrays:
//!
//! ```text
//! expr     := true | false | "<name>" | not-expr | or-expr | and-expr | [ expr ]
//! not-expr := [ "NOT", expr ]
//! or-expr  := [ "OR", expr, expr ]
//! and-expr := [ "AND", expr, expr ]
//! ```
//!
//! Operator tokens are matched case-insensitively and may not be used as
//! variable names. Variable names are case-sensitive. A single-element array
//! is the same as its element; the encoder never produces one.

use super::error::DeserializeError;
use super::{and, is_reserved, not, or, Expression};
use crate::error::Error;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

impl Expression {
    /// Encode the expression as compact JSON text
    ///
    /// ```
    /// use boolexps::expr;
    /// use boolexps::Expression;
    ///
    /// let e = expr!(!"x" + "y" * 1);
    /// assert_eq!(e.serialize(), r#"["OR",["NOT","x"],["AND","y",true]]"#);
    /// ```
    pub fn serialize(&self) -> String {
        self.to_json_value().to_string()
    }

    /// Encode the expression as a `serde_json` value
    pub fn to_json_value(&self) -> Value {
        match self {
            Expression::True => Value::Bool(true),
            Expression::False => Value::Bool(false),
            Expression::Variable(name) => Value::String(name.to_string()),
            Expression::Not(inner) => {
                Value::Array(vec![Value::from("NOT"), inner.to_json_value()])
            }
            Expression::Or(left, right) => Value::Array(vec![
                Value::from("OR"),
                left.to_json_value(),
                right.to_json_value(),
            ]),
            Expression::And(left, right) => Value::Array(vec![
                Value::from("AND"),
                left.to_json_value(),
                right.to_json_value(),
            ]),
        }
    }

    /// Decode an expression from JSON text
    ///
    /// Fails without panicking on text that is not JSON and on JSON that does
    /// not follow the grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolexps::Expression;
    ///
    /// let e = Expression::deserialize(r#"["or", "x", ["Not", "y"]]"#).unwrap();
    /// assert_eq!(e, Expression::variable("x").or(&Expression::variable("y").not()));
    ///
    /// assert!(Expression::deserialize(r#"["AND", "OR"]"#).is_err());
    /// assert!(Expression::deserialize(r#"["NOT", "x""#).is_err());
    /// ```
    pub fn deserialize(json: &str) -> Result<Self, DeserializeError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| DeserializeError::InvalidJson {
                message: Arc::from(e.to_string().as_str()),
                input: Arc::from(json),
                line: e.line(),
                column: e.column(),
            })?;
        Self::from_json_value(&value)
    }

    /// Decode an expression from an already parsed `serde_json` value
    pub fn from_json_value(value: &Value) -> Result<Self, DeserializeError> {
        match value {
            Value::Bool(b) => Ok(Expression::constant(*b)),
            Value::String(name) => {
                if is_reserved(name) {
                    Err(DeserializeError::ReservedVariable {
                        name: Arc::from(name.as_str()),
                    })
                } else {
                    Ok(Expression::variable(name))
                }
            }
            Value::Array(items) => from_json_array(items),
            Value::Null => Err(DeserializeError::UnexpectedValue { kind: "null" }),
            Value::Number(_) => Err(DeserializeError::UnexpectedValue { kind: "number" }),
            Value::Object(_) => Err(DeserializeError::UnexpectedValue { kind: "object" }),
        }
    }

    /// Read and decode an expression from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        Ok(Self::deserialize(&content)?)
    }
}

fn from_json_array(items: &[Value]) -> Result<Expression, DeserializeError> {
    let (head, operands) = match items {
        [] => return Err(DeserializeError::EmptyArray),
        [single] => return Expression::from_json_value(single),
        [head, operands @ ..] => (head, operands),
    };

    let token = match head {
        Value::String(token) => token.as_str(),
        other => {
            return Err(DeserializeError::UnknownOperator {
                token: Arc::from(other.to_string().as_str()),
            })
        }
    };

    let arity_error = |expected: usize| DeserializeError::InvalidArity {
        operator: Arc::from(token),
        expected,
        found: operands.len(),
    };

    if token.eq_ignore_ascii_case("NOT") {
        match operands {
            [operand] => Ok(not(Expression::from_json_value(operand)?)),
            _ => Err(arity_error(1)),
        }
    } else if token.eq_ignore_ascii_case("OR") {
        match operands {
            [left, right] => Ok(or(
                Expression::from_json_value(left)?,
                Expression::from_json_value(right)?,
            )),
            _ => Err(arity_error(2)),
        }
    } else if token.eq_ignore_ascii_case("AND") {
        match operands {
            [left, right] => Ok(and(
                Expression::from_json_value(left)?,
                Expression::from_json_value(right)?,
            )),
            _ => Err(arity_error(2)),
        }
    } else {
        Err(DeserializeError::UnknownOperator {
            token: Arc::from(head.to_string().as_str()),
        })
    }
}

impl FromStr for Expression {
    type Err = DeserializeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::deserialize(s)
    }
}
