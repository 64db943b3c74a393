//! Normal-form conversions and the term simplifier
//!
//! - [`Expression::to_nnf`] pushes negations down to the variables.
//! - [`Expression::simplify`] removes redundant operands in one bottom-up pass.
//! - [`Expression::nnf_to_dnf`] distributes AND over OR on an NNF tree.
//! - [`Expression::to_dnf`] composes the three: NNF, simplify, distribute.

use super::{and, not, or, Expression};
use log::debug;

impl Expression {
    /// Convert to negation normal form
    ///
    /// Negations are pushed through `Or`/`And` with De Morgan's laws, double
    /// negations cancel, and negated constants are folded. The result has
    /// `Not` only directly above variables.
    ///
    /// ```
    /// use boolexps::{expr, Expression};
    ///
    /// let e = expr!(!("a" * !("b" + 1)));
    /// assert_eq!(e.to_nnf(), expr!(!"a" + ("b" + 1)));
    /// assert!(e.to_nnf().is_nnf());
    /// ```
    pub fn to_nnf(&self) -> Expression {
        match self {
            Expression::True | Expression::False | Expression::Variable(_) => self.clone(),
            Expression::Or(left, right) => or(left.to_nnf(), right.to_nnf()),
            Expression::And(left, right) => and(left.to_nnf(), right.to_nnf()),
            Expression::Not(inner) => match inner.as_ref() {
                Expression::True => Expression::False,
                Expression::False => Expression::True,
                Expression::Variable(_) => self.clone(),
                Expression::Not(e) => e.to_nnf(),
                Expression::Or(a, b) => and(
                    not((**a).clone()).to_nnf(),
                    not((**b).clone()).to_nnf(),
                ),
                Expression::And(a, b) => or(
                    not((**a).clone()).to_nnf(),
                    not((**b).clone()).to_nnf(),
                ),
            },
        }
    }

    /// Simplify the expression with equational rewrite rules
    ///
    /// Children are simplified first, then each `Or` node is rewritten by the
    /// first rule that applies:
    ///
    /// 1. identity: `x + 0 → x`, `0 + x → x`
    /// 2. annihilation: `x + 1 → 1`, `1 + x → 1`
    /// 3. idempotence: `x + y → x` when `x` is equivalent to `y`
    /// 4. complement: `x + y → 1` when `negate(x)` is equivalent to `y`
    ///
    /// `And` nodes use the dual rules with the constants swapped. A negated
    /// constant folds to the opposite constant. Literals are left untouched.
    ///
    /// The cheap structural rules run before the equivalence-based ones,
    /// which enumerate truth tables. This is a single pass; the result is
    /// equivalent to the input but not guaranteed to be a fixpoint.
    ///
    /// The equivalence checks simplify their operands again, so the cost is
    /// exponential in the nesting depth as well as in the number of
    /// variables: a left-deep chain `x0 + x1 + ... + xn` takes roughly `3^n`
    /// steps. Keep inputs to a few levels and a handful of variables.
    ///
    /// ```
    /// use boolexps::{expr, Expression};
    ///
    /// assert_eq!(expr!("p" + 1).simplify(), Expression::True);
    /// assert_eq!(expr!(("p" * "q") + ("q" * "p")).simplify(), expr!("p" * "q"));
    /// assert_eq!(expr!("p" * !"p" + "r").simplify(), expr!("r"));
    /// ```
    pub fn simplify(&self) -> Expression {
        match self {
            Expression::True | Expression::False | Expression::Variable(_) => self.clone(),
            Expression::Not(inner) => match inner.simplify() {
                Expression::True => Expression::False,
                Expression::False => Expression::True,
                inner => not(inner),
            },
            Expression::Or(left, right) => simplify_or(left.simplify(), right.simplify()),
            Expression::And(left, right) => simplify_and(left.simplify(), right.simplify()),
        }
    }

    /// Convert a negation normal form expression to disjunctive normal form
    ///
    /// Literals and clauses are returned unchanged. `Or` nodes convert both
    /// children. `And` nodes distribute over an `Or` operand,
    /// `(x + y) * z → x * z + y * z`, and otherwise convert both operands
    /// and distribute the results into each other.
    ///
    /// The input is expected to be in NNF (see [`Expression::to_nnf`]); a
    /// `Not` above a compound operand is returned as is.
    pub fn nnf_to_dnf(&self) -> Expression {
        if self.is_clause() {
            return self.clone();
        }

        match self {
            Expression::Or(left, right) => or(left.nnf_to_dnf(), right.nnf_to_dnf()),
            Expression::And(left, right) => match (left.as_ref(), right.as_ref()) {
                (Expression::Or(x, y), z) => {
                    debug!("nnf_to_dnf: (x + y) * z => x * z + y * z");
                    or(
                        and((**x).clone(), z.clone()).nnf_to_dnf(),
                        and((**y).clone(), z.clone()).nnf_to_dnf(),
                    )
                }
                (z, Expression::Or(x, y)) => {
                    debug!("nnf_to_dnf: z * (x + y) => z * x + z * y");
                    or(
                        and(z.clone(), (**x).clone()).nnf_to_dnf(),
                        and(z.clone(), (**y).clone()).nnf_to_dnf(),
                    )
                }
                (left, right) => distribute(left.nnf_to_dnf(), right.nnf_to_dnf()),
            },
            _ => self.clone(),
        }
    }

    /// Convert to disjunctive normal form
    ///
    /// Equivalent to `self.to_nnf().simplify().nnf_to_dnf()`. Simplifying
    /// before distribution keeps redundant operands from being multiplied out.
    ///
    /// ```
    /// use boolexps::{expr, Expression};
    ///
    /// let e = expr!(("p" + "q") * "r");
    /// let dnf = e.to_dnf();
    /// assert_eq!(dnf, expr!("p" * "r" + "q" * "r"));
    /// assert!(dnf.is_dnf());
    /// ```
    pub fn to_dnf(&self) -> Expression {
        self.to_nnf().simplify().nnf_to_dnf()
    }
}

fn simplify_or(left: Expression, right: Expression) -> Expression {
    if right == Expression::False {
        debug!("simplify: x + 0 => x");
        return left;
    }
    if left == Expression::False {
        debug!("simplify: 0 + x => x");
        return right;
    }
    if left == Expression::True || right == Expression::True {
        debug!("simplify: x + 1 => 1");
        return Expression::True;
    }
    if left.is_equivalent_to(&right) {
        debug!("simplify: x + x => x");
        return left;
    }
    if left.negate().is_equivalent_to(&right) {
        debug!("simplify: x + ~x => 1");
        return Expression::True;
    }
    or(left, right)
}

fn simplify_and(left: Expression, right: Expression) -> Expression {
    if right == Expression::True {
        debug!("simplify: x * 1 => x");
        return left;
    }
    if left == Expression::True {
        debug!("simplify: 1 * x => x");
        return right;
    }
    if left == Expression::False || right == Expression::False {
        debug!("simplify: x * 0 => 0");
        return Expression::False;
    }
    if left.is_equivalent_to(&right) {
        debug!("simplify: x * x => x");
        return left;
    }
    if left.negate().is_equivalent_to(&right) {
        debug!("simplify: x * ~x => 0");
        return Expression::False;
    }
    and(left, right)
}

/// Conjunction of two DNF operands, multiplied out into DNF
fn distribute(left: Expression, right: Expression) -> Expression {
    match (left, right) {
        (Expression::Or(x, y), z) => or(distribute(*x, z.clone()), distribute(*y, z)),
        (z, Expression::Or(x, y)) => or(distribute(z.clone(), *x), distribute(z, *y)),
        (left, right) => and(left, right),
    }
}
