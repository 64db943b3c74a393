//! Evaluation and equivalence checking for expressions

use super::{Expression, Interpretation};
use log::trace;
use std::collections::BTreeSet;
use std::sync::Arc;

impl Expression {
    /// Evaluate the expression under a variable assignment
    ///
    /// Returns `None` if any variable of the expression is missing from
    /// `interp`. Both operands of `Or`/`And` are always evaluated, so a
    /// missing variable is reported even where the other operand alone
    /// would decide the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolexps::{Expression, Interpretation};
    /// use std::sync::Arc;
    ///
    /// let a = Expression::variable("a");
    /// let b = Expression::variable("b");
    /// let e = a.or(&b);
    ///
    /// let mut interp = Interpretation::new();
    /// interp.insert(Arc::from("a"), true);
    /// assert_eq!(e.evaluate(&interp), None);
    ///
    /// interp.insert(Arc::from("b"), false);
    /// assert_eq!(e.evaluate(&interp), Some(true));
    /// ```
    pub fn evaluate(&self, interp: &Interpretation) -> Option<bool> {
        match self {
            Expression::True => Some(true),
            Expression::False => Some(false),
            Expression::Variable(name) => interp.get(name).copied(),
            Expression::Not(inner) => inner.evaluate(interp).map(|v| !v),
            Expression::Or(left, right) => {
                let left = left.evaluate(interp)?;
                let right = right.evaluate(interp)?;
                Some(left || right)
            }
            Expression::And(left, right) => {
                let left = left.evaluate(interp)?;
                let right = right.evaluate(interp)?;
                Some(left && right)
            }
        }
    }

    /// Enumerate every interpretation over a set of variable names
    ///
    /// Yields `2^k` interpretations for `k` names, in binary counting order
    /// with the first name (in set order) as the most significant bit. An
    /// empty set yields a single empty interpretation.
    ///
    /// ```
    /// use boolexps::Expression;
    ///
    /// let e = Expression::variable("p").and(&Expression::variable("q"));
    /// let satisfying = Expression::interpretations(&e.all_vars())
    ///     .filter(|interp| e.evaluate(interp) == Some(true))
    ///     .count();
    /// assert_eq!(satisfying, 1);
    /// ```
    pub fn interpretations(vars: &BTreeSet<Arc<str>>) -> Interpretations {
        Interpretations::new(vars.iter().cloned().collect())
    }

    /// Check if two expressions are logically equivalent
    ///
    /// Both sides are simplified first. Two variable-free sides are compared
    /// structurally, since simplification reduces them to `True` or `False`.
    /// Sides with disjoint, non-empty variable sets are reported as not
    /// equivalent without further work. Otherwise every interpretation over
    /// the union of the variables is checked, which is `O(2^k)` for `k`
    /// variables: intended for small expressions only.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolexps::expr;
    /// use boolexps::Expression;
    ///
    /// let lhs = expr!(!("a" + "b"));
    /// let rhs = expr!(!"a" * !"b");
    /// assert!(lhs.is_equivalent_to(&rhs));
    ///
    /// assert!(!expr!("a").is_equivalent_to(&expr!("b")));
    /// ```
    pub fn is_equivalent_to(&self, other: &Expression) -> bool {
        let lhs = self.simplify();
        let rhs = other.simplify();

        let lhs_vars = lhs.all_vars();
        let rhs_vars = rhs.all_vars();

        if lhs_vars.is_empty() && rhs_vars.is_empty() {
            return lhs == rhs;
        }

        if !lhs_vars.is_empty() && !rhs_vars.is_empty() && lhs_vars.is_disjoint(&rhs_vars) {
            return false;
        }

        let vars: BTreeSet<Arc<str>> = lhs_vars.union(&rhs_vars).cloned().collect();
        trace!(
            "is_equivalent_to: checking {} interpretations over {:?}",
            1u128 << vars.len().min(127),
            vars
        );

        Self::interpretations(&vars).all(|interp| lhs.evaluate(&interp) == rhs.evaluate(&interp))
    }
}

/// Iterator over all interpretations of a fixed list of variables
///
/// Created by [`Expression::interpretations`]. Counts in binary over the
/// variables without materialising the whole table.
#[derive(Debug, Clone)]
pub struct Interpretations {
    vars: Vec<Arc<str>>,
    bits: Vec<bool>,
    done: bool,
}

impl Interpretations {
    fn new(vars: Vec<Arc<str>>) -> Self {
        let bits = vec![false; vars.len()];
        Interpretations {
            vars,
            bits,
            done: false,
        }
    }

    /// Advance `bits` to the next binary number; false after the last one
    fn increment(&mut self) -> bool {
        for bit in self.bits.iter_mut().rev() {
            if *bit {
                *bit = false;
            } else {
                *bit = true;
                return true;
            }
        }
        false
    }
}

impl Iterator for Interpretations {
    type Item = Interpretation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let interp = self
            .vars
            .iter()
            .cloned()
            .zip(self.bits.iter().copied())
            .collect();

        self.done = !self.increment();
        Some(interp)
    }
}
