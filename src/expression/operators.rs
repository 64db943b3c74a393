//! Operator overloading for expressions
//!
//! `*` builds AND, `+` builds OR and `!` builds NOT, matching the infix
//! notation used by `Display` and the `expr!` macro.

use super::{and, not, or, Expression};
use std::ops::{Add, Mul, Not};

/// Logical AND operator for references: `&a * &b`
///
/// ```
/// use boolexps::Expression;
///
/// let a = Expression::variable("a");
/// let b = Expression::variable("b");
/// assert_eq!(&a * &b, a.and(&b));
/// ```
impl Mul for &Expression {
    type Output = Expression;

    fn mul(self, rhs: &Expression) -> Expression {
        self.and(rhs)
    }
}

/// Logical AND operator: `a * b`, reusing both operands without cloning
impl Mul for Expression {
    type Output = Expression;

    fn mul(self, rhs: Expression) -> Expression {
        and(self, rhs)
    }
}

/// Logical AND of an owned and a borrowed operand: `(&a + &b) * &c`
impl Mul<&Expression> for Expression {
    type Output = Expression;

    fn mul(self, rhs: &Expression) -> Expression {
        and(self, rhs.clone())
    }
}

/// Logical OR operator for references: `&a + &b`
///
/// ```
/// use boolexps::Expression;
///
/// let a = Expression::variable("a");
/// let b = Expression::variable("b");
/// assert_eq!(&a + &b, a.or(&b));
/// ```
impl Add for &Expression {
    type Output = Expression;

    fn add(self, rhs: &Expression) -> Expression {
        self.or(rhs)
    }
}

/// Logical OR operator: `a + b`, reusing both operands without cloning
impl Add for Expression {
    type Output = Expression;

    fn add(self, rhs: Expression) -> Expression {
        or(self, rhs)
    }
}

/// Logical OR of an owned and a borrowed operand: `!&a + &b`
///
/// ```
/// use boolexps::Expression;
///
/// let a = Expression::variable("a");
/// let b = Expression::variable("b");
/// assert_eq!(!&a + &b, a.not().or(&b));
/// ```
impl Add<&Expression> for Expression {
    type Output = Expression;

    fn add(self, rhs: &Expression) -> Expression {
        or(self, rhs.clone())
    }
}

/// Logical NOT operator for references: `!&a`
impl Not for &Expression {
    type Output = Expression;

    fn not(self) -> Expression {
        Expression::not(self)
    }
}

/// Logical NOT operator: `!a`
impl Not for Expression {
    type Output = Expression;

    fn not(self) -> Expression {
        not(self)
    }
}
