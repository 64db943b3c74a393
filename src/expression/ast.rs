//! Tree traversal operations
//!
//! This module contains the fold over expression trees and the structural
//! queries built on top of it.

use super::Expression;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Node type for expression tree folding
///
/// This enum mirrors the shape of an [`Expression`] node with the children
/// replaced by the results already computed for them. It is used with
/// [`Expression::fold`] to write bottom-up analyses without matching on boxed
/// subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<'a, T> {
    /// A constant boolean value
    Constant(bool),
    /// A variable with the given name
    Variable(&'a Arc<str>),
    /// Logical NOT with the result from the operand
    Not(T),
    /// Logical OR with results from left and right subtrees
    Or(T, T),
    /// Logical AND with results from left and right subtrees
    And(T, T),
}

impl Expression {
    /// Fold the expression tree depth-first from leaves to root
    ///
    /// The function `f` is called once per node and receives an [`ExprNode`]
    /// holding the results of folding the node's children.
    ///
    /// # Examples
    ///
    /// Count the number of operators in an expression:
    ///
    /// ```
    /// use boolexps::{expr, ExprNode, Expression};
    ///
    /// let e = expr!("a" * !"b");
    ///
    /// let op_count = e.fold(&|node| match node {
    ///     ExprNode::Variable(_) | ExprNode::Constant(_) => 0,
    ///     ExprNode::And(l, r) | ExprNode::Or(l, r) => l + r + 1,
    ///     ExprNode::Not(inner) => inner + 1,
    /// });
    ///
    /// assert_eq!(op_count, 2);
    /// ```
    pub fn fold<'a, T, F>(&'a self, f: &F) -> T
    where
        F: Fn(ExprNode<'a, T>) -> T,
    {
        match self {
            Expression::True => f(ExprNode::Constant(true)),
            Expression::False => f(ExprNode::Constant(false)),
            Expression::Variable(name) => f(ExprNode::Variable(name)),
            Expression::Not(inner) => {
                let inner = inner.fold(f);
                f(ExprNode::Not(inner))
            }
            Expression::Or(left, right) => {
                let left = left.fold(f);
                let right = right.fold(f);
                f(ExprNode::Or(left, right))
            }
            Expression::And(left, right) => {
                let left = left.fold(f);
                let right = right.fold(f);
                f(ExprNode::And(left, right))
            }
        }
    }

    /// Names of all variables appearing anywhere in the expression
    ///
    /// Empty for expressions built only from constants. The set is ordered,
    /// so iteration is alphabetical.
    pub fn all_vars(&self) -> BTreeSet<Arc<str>> {
        let mut vars = BTreeSet::new();
        self.collect_vars(&mut vars);
        vars
    }

    fn collect_vars(&self, vars: &mut BTreeSet<Arc<str>>) {
        match self {
            Expression::True | Expression::False => {}
            Expression::Variable(name) => {
                vars.insert(Arc::clone(name));
            }
            Expression::Not(inner) => inner.collect_vars(vars),
            Expression::Or(left, right) | Expression::And(left, right) => {
                left.collect_vars(vars);
                right.collect_vars(vars);
            }
        }
    }

    /// Number of nodes in the tree
    pub fn size(&self) -> usize {
        self.fold(&|node| match node {
            ExprNode::Constant(_) | ExprNode::Variable(_) => 1,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::Or(l, r) | ExprNode::And(l, r) => l + r + 1,
        })
    }

    /// Length of the longest root-to-leaf path, counting nodes
    pub fn depth(&self) -> usize {
        self.fold(&|node| match node {
            ExprNode::Constant(_) | ExprNode::Variable(_) => 1,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::Or(l, r) | ExprNode::And(l, r) => usize::max(l, r) + 1,
        })
    }
}
