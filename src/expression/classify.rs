//! Literal, clause and DNF classification, and De Morgan negation

use super::{and, not, or, Expression};

/// Operator kind of a binary node, used to check clause homogeneity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Connective {
    Or,
    And,
}

impl Expression {
    /// Returns true for `True`, `False`, a variable, or the negation of a variable
    pub fn is_literal(&self) -> bool {
        match self {
            Expression::True | Expression::False | Expression::Variable(_) => true,
            Expression::Not(inner) => matches!(**inner, Expression::Variable(_)),
            Expression::Or(..) | Expression::And(..) => false,
        }
    }

    /// Returns true if the expression combines literals with a single connective
    ///
    /// An `Or` node is a clause when each child is a literal or itself an `Or`
    /// clause; likewise for `And`. Mixing the two kinds anywhere in the tree
    /// makes it a non-clause. A lone literal counts as a (trivial) clause.
    ///
    /// ```
    /// use boolexps::expr;
    /// use boolexps::Expression;
    ///
    /// assert!(expr!("a" + !"b" + "c").is_clause());
    /// assert!(expr!("a" * "b" * 1).is_clause());
    /// assert!(!expr!("a" + "b" * "c").is_clause());
    /// assert!(!expr!(!("a" + "b")).is_clause());
    /// ```
    pub fn is_clause(&self) -> bool {
        match self {
            Expression::Or(left, right) => {
                left.is_clause_of(Connective::Or) && right.is_clause_of(Connective::Or)
            }
            Expression::And(left, right) => {
                left.is_clause_of(Connective::And) && right.is_clause_of(Connective::And)
            }
            _ => self.is_literal(),
        }
    }

    /// Child check for [`is_clause`]: a literal, or a clause built with `kind`
    ///
    /// [`is_clause`]: Expression::is_clause
    fn is_clause_of(&self, kind: Connective) -> bool {
        match (self, kind) {
            (Expression::Or(..), Connective::Or) | (Expression::And(..), Connective::And) => {
                self.is_clause()
            }
            (Expression::Or(..), Connective::And) | (Expression::And(..), Connective::Or) => false,
            _ => self.is_literal(),
        }
    }

    /// Returns true if the expression is in disjunctive normal form
    ///
    /// Constants and variables are in DNF. `Not(e)` is in DNF when `e` is a
    /// literal. An `Or` is in DNF when both operands are, and an `And` when the
    /// whole conjunction is a clause.
    pub fn is_dnf(&self) -> bool {
        match self {
            Expression::True | Expression::False | Expression::Variable(_) => true,
            Expression::Not(inner) => inner.is_literal(),
            Expression::Or(left, right) => left.is_dnf() && right.is_dnf(),
            Expression::And(..) => self.is_clause(),
        }
    }

    /// Returns true if negations appear only directly above variables
    pub fn is_nnf(&self) -> bool {
        match self {
            Expression::True | Expression::False | Expression::Variable(_) => true,
            Expression::Not(inner) => matches!(**inner, Expression::Variable(_)),
            Expression::Or(left, right) | Expression::And(left, right) => {
                left.is_nnf() && right.is_nnf()
            }
        }
    }

    /// Negate the expression using De Morgan's laws
    ///
    /// Constants flip, a variable gains a `Not`, a `Not` is removed, and
    /// `Or`/`And` swap while their operands are negated recursively. The
    /// result is logically the complement but not necessarily in any
    /// canonical shape.
    ///
    /// ```
    /// use boolexps::{expr, Expression};
    ///
    /// assert_eq!(expr!("a" + !"b").negate(), expr!(!"a" * "b"));
    /// ```
    pub fn negate(&self) -> Expression {
        match self {
            Expression::True => Expression::False,
            Expression::False => Expression::True,
            Expression::Variable(_) => not(self.clone()),
            Expression::Not(inner) => (**inner).clone(),
            Expression::Or(left, right) => and(left.negate(), right.negate()),
            Expression::And(left, right) => or(left.negate(), right.negate()),
        }
    }
}
