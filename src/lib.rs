//! # boolexps
//!
//! This crate manipulates propositional logic expressions: it decodes them
//! from a LISP-like JSON encoding, evaluates them under variable assignments,
//! checks semantic equivalence, and rewrites them into negation normal form
//! (NNF), disjunctive normal form (DNF) or a simplified equivalent.
//!
//! ## Overview
//!
//! Expressions are immutable trees ([`Expression`]) built from the constants
//! `true`/`false`, named variables, NOT, binary OR and binary AND. Every
//! operation is a pure function returning a new tree, so expressions can be
//! shared across threads freely.
//!
//! ## Three Ways to Build Expressions
//!
//! ### 1. The JSON Encoding
//!
//! ```
//! use boolexps::Expression;
//!
//! let e = Expression::deserialize(r#"["NOT", ["OR", "p", ["AND", "q", true]]]"#).unwrap();
//! assert_eq!(e.to_nnf().serialize(), r#"["AND",["NOT","p"],["OR",["NOT","q"],false]]"#);
//! ```
//!
//! ### 2. The `expr!` Macro
//!
//! ```
//! use boolexps::{expr, Expression};
//!
//! let e = expr!(("p" + "q") * !"r");
//! println!("{}", e); // (p + q) * ~r
//! println!("{}", e.to_dnf()); // p * ~r + q * ~r
//! ```
//!
//! ### 3. Methods and Operators
//!
//! ```
//! use boolexps::Expression;
//!
//! let p = Expression::variable("p");
//! let q = Expression::variable("q");
//! let e = &p * &q + !&p;
//! assert_eq!(e, p.and(&q).or(&p.not()));
//! ```
//!
//! ## Transformations
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`Expression::to_nnf`] | negations pushed down to variables |
//! | [`Expression::simplify`] | identity, annihilation, idempotence and complement rules applied bottom-up |
//! | [`Expression::nnf_to_dnf`] | AND distributed over OR on an NNF input |
//! | [`Expression::to_dnf`] | `nnf_to_dnf(simplify(to_nnf(e)))` |
//! | [`Expression::negate`] | De Morgan complement |
//!
//! Equivalence ([`Expression::is_equivalent_to`]) compares truth tables and
//! is exponential in the number of variables; the simplifier relies on it,
//! so both are meant for expressions over a handful of variables.
//!
//! ## Serving Requests
//!
//! The [`service`] module maps the `/DNF`, `/NNF` and `/simplify` endpoints
//! to transformations and produces the response bodies, including the fixed
//! `"Malformed JSON"` reply for undecodable input.

pub mod error;
pub mod expression;
pub mod service;

pub use boolexps_macros::expr;
pub use error::Error;
pub use expression::{
    is_reserved, DeserializeError, ExprNode, Expression, Interpretation, Interpretations,
    RESERVED_WORDS,
};
pub use service::Transform;
