//! Propositional logic expressions and their transformations
//!
//! This module provides the expression tree used throughout the crate together with
//! its structural queries, evaluation, equivalence checking, normal-form
//! conversions and the JSON encoding.
//!
//! # Main Types
//!
//! - [`Expression`] - an immutable tree of constants, variables, NOT, AND and OR.
//!   Every transformation returns a fresh tree; nothing is mutated in place.
//! - [`Interpretation`] - an assignment of truth values to variable names.
//!
//! # Quick Start
//!
//! ## Building Expressions
//!
//! ```
//! use boolexps::{expr, Expression};
//!
//! // Method API
//! let p = Expression::variable("p");
//! let q = Expression::variable("q");
//! let implication = p.not().or(&q);
//!
//! // Operator overloading
//! let same = !&p + &q;
//! assert_eq!(implication, same);
//!
//! // The expr! macro
//! let also_same = expr!(!p + q);
//! assert_eq!(implication, also_same);
//! ```
//!
//! ## JSON Encoding
//!
//! ```
//! use boolexps::Expression;
//!
//! let e = Expression::deserialize(r#"["AND", ["OR", "p", "q"], "r"]"#).unwrap();
//! let dnf = e.to_dnf();
//! assert!(dnf.is_dnf());
//! assert_eq!(
//!     dnf.serialize(),
//!     r#"["OR",["AND","p","r"],["AND","q","r"]]"#
//! );
//! ```
//!
//! ## Evaluating and Comparing
//!
//! ```
//! use boolexps::{expr, Expression, Interpretation};
//! use std::sync::Arc;
//!
//! let e = expr!("p" * "q" + !"p");
//!
//! let mut interp = Interpretation::new();
//! interp.insert(Arc::from("p"), true);
//! interp.insert(Arc::from("q"), false);
//! assert_eq!(e.evaluate(&interp), Some(false));
//!
//! // Missing variables produce no result instead of a default
//! interp.remove("q");
//! assert_eq!(e.evaluate(&interp), None);
//!
//! // Implication is equivalent to its DNF
//! assert!(e.is_equivalent_to(&e.to_dnf()));
//! ```

mod ast;
mod classify;
mod display;
pub mod error;
mod eval;
mod normal_form;
mod operators;
mod serialize;

pub use ast::ExprNode;
pub use error::DeserializeError;
pub use eval::Interpretations;

use std::collections::HashMap;
use std::sync::Arc;

/// Truth values assigned to variable names
///
/// Keys are unique by construction. An interpretation is complete for an
/// expression when it covers every name in [`Expression::all_vars`].
pub type Interpretation = HashMap<Arc<str>, bool>;

/// Operator tokens that may not be used as variable names (compared case-insensitively)
pub const RESERVED_WORDS: [&str; 3] = ["NOT", "OR", "AND"];

/// Returns true if `name` collides with an operator token of the JSON encoding
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS
        .iter()
        .any(|word| name.eq_ignore_ascii_case(word))
}

/// A propositional logic expression
///
/// Each operator node owns its operand subtrees exclusively, so the value is a
/// finite tree. Equality (`==`) is structural: `p * q` and `q * p` are
/// different values even though they are logically equivalent. Use
/// [`Expression::is_equivalent_to`] for the semantic comparison.
///
/// # Examples
///
/// ```
/// use boolexps::Expression;
///
/// let p = Expression::variable("p");
/// let q = Expression::variable("q");
///
/// assert_ne!(p.and(&q), q.and(&p));
/// assert!(p.and(&q).is_equivalent_to(&q.and(&p)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// The constant true
    True,
    /// The constant false
    False,
    /// A named atom; names are case-sensitive
    Variable(Arc<str>),
    /// Logical NOT
    Not(Box<Expression>),
    /// Logical OR of two operands
    Or(Box<Expression>, Box<Expression>),
    /// Logical AND of two operands
    And(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Create a variable expression with the given name
    ///
    /// The name is taken as is. Names that collide with the operator tokens
    /// `NOT`, `OR` or `AND` can be built programmatically but cannot be encoded
    /// unambiguously; [`Expression::deserialize`] rejects them.
    pub fn variable(name: &str) -> Self {
        Expression::Variable(Arc::from(name))
    }

    /// Create a constant expression (true or false)
    pub fn constant(value: bool) -> Self {
        if value {
            Expression::True
        } else {
            Expression::False
        }
    }

    /// Logical AND of this expression and another
    pub fn and(&self, other: &Expression) -> Expression {
        Expression::And(Box::new(self.clone()), Box::new(other.clone()))
    }

    /// Logical OR of this expression and another
    pub fn or(&self, other: &Expression) -> Expression {
        Expression::Or(Box::new(self.clone()), Box::new(other.clone()))
    }

    /// Logical NOT of this expression
    ///
    /// This only wraps the expression; see [`Expression::negate`] for the
    /// De Morgan push-down.
    #[allow(clippy::should_implement_trait)]
    pub fn not(&self) -> Expression {
        Expression::Not(Box::new(self.clone()))
    }

    /// Returns the constant value if this expression is `True` or `False`
    pub fn as_constant(&self) -> Option<bool> {
        match self {
            Expression::True => Some(true),
            Expression::False => Some(false),
            _ => None,
        }
    }
}

impl From<bool> for Expression {
    fn from(value: bool) -> Self {
        Expression::constant(value)
    }
}

// Owning builders used by the transformations; they avoid the clones of the
// by-reference API.
pub(crate) fn not(e: Expression) -> Expression {
    Expression::Not(Box::new(e))
}

pub(crate) fn or(a: Expression, b: Expression) -> Expression {
    Expression::Or(Box::new(a), Box::new(b))
}

pub(crate) fn and(a: Expression, b: Expression) -> Expression {
    Expression::And(Box::new(a), Box::new(b))
}
