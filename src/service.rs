//! Request handling for the `/DNF`, `/NNF` and `/simplify` endpoints
//!
//! A server front end only needs to read the request body, pick the
//! [`Transform`] for the path and send back what [`respond`] returns. Any
//! body that does not decode to an expression is answered with the fixed
//! JSON string [`MALFORMED_JSON`], whichever endpoint was hit.
//!
//! ```
//! use boolexps::service::{route, MALFORMED_JSON};
//!
//! let reply = route("/DNF", r#"["AND", ["OR", "p", "q"], "r"]"#).unwrap();
//! assert_eq!(reply, r#"["OR",["AND","p","r"],["AND","q","r"]]"#);
//!
//! assert_eq!(route("/NNF", "[\"NOT\"").unwrap(), MALFORMED_JSON);
//! assert!(route("/CNF", "true").is_none());
//! ```

use crate::expression::Expression;
use log::{debug, warn};
use std::fmt;
use std::str::FromStr;

/// Response body sent for any request that fails to deserialize
pub const MALFORMED_JSON: &str = "\"Malformed JSON\"";

/// The transformations exposed as endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Disjunctive normal form, `/DNF`
    Dnf,
    /// Negation normal form, `/NNF`
    Nnf,
    /// Single-pass simplification, `/simplify`
    Simplify,
}

impl Transform {
    /// All transforms, in menu order
    pub const ALL: [Transform; 3] = [Transform::Dnf, Transform::Nnf, Transform::Simplify];

    /// Endpoint path of the transform
    pub fn path(self) -> &'static str {
        match self {
            Transform::Dnf => "/DNF",
            Transform::Nnf => "/NNF",
            Transform::Simplify => "/simplify",
        }
    }

    /// Transform served at `path`, if any; the match is exact
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.path() == path)
    }

    /// Apply the transform
    pub fn apply(self, expr: &Expression) -> Expression {
        match self {
            Transform::Dnf => expr.to_dnf(),
            Transform::Nnf => expr.to_nnf(),
            Transform::Simplify => expr.simplify(),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transform::Dnf => "dnf",
            Transform::Nnf => "nnf",
            Transform::Simplify => "simplify",
        };
        write!(f, "{}", name)
    }
}

/// Parses the short names `dnf`, `nnf`, `simplify` (case-insensitive)
impl FromStr for Transform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown transform '{}': expected dnf, nnf or simplify", s))
    }
}

/// Decode `body`, apply `transform` and encode the result
///
/// Returns [`MALFORMED_JSON`] when `body` is not a valid expression.
pub fn respond(transform: Transform, body: &str) -> String {
    match Expression::deserialize(body) {
        Ok(expr) => {
            debug!("{}: {}", transform.path(), expr);
            transform.apply(&expr).serialize()
        }
        Err(e) => {
            warn!("{}: {}", transform.path(), e);
            MALFORMED_JSON.to_string()
        }
    }
}

/// [`respond`] for the transform served at `path`; `None` for an unknown path
pub fn route(path: &str, body: &str) -> Option<String> {
    Transform::from_path(path).map(|t| respond(t, body))
}
