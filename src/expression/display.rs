//! Infix formatting for expressions

use super::Expression;
use std::fmt;

impl Expression {
    /// Binding strength of the top connective; leaves and `Not` bind tightest
    fn precedence(&self) -> u8 {
        match self {
            Expression::Or(..) => 1,
            Expression::And(..) => 2,
            _ => 3,
        }
    }

    /// Write `self`, parenthesized when it binds looser than `min`
    fn write_operand(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        if self.precedence() < min {
            write!(f, "(")?;
            self.write_infix(f)?;
            write!(f, ")")
        } else {
            self.write_infix(f)
        }
    }

    fn write_infix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::True => write!(f, "1"),
            Expression::False => write!(f, "0"),
            Expression::Variable(name) => write!(f, "{}", name),
            Expression::Not(inner) => {
                write!(f, "~")?;
                inner.write_operand(f, 3)
            }
            Expression::And(left, right) => {
                left.write_operand(f, 2)?;
                write!(f, " * ")?;
                right.write_operand(f, 2)
            }
            Expression::Or(left, right) => {
                left.write_operand(f, 1)?;
                write!(f, " + ")?;
                right.write_operand(f, 1)
            }
        }
    }
}

/// Infix formatting for expressions
///
/// Uses boolean algebra notation: `*` for AND, `+` for OR, `~` for NOT, `1`
/// and `0` for the constants, with parentheses only where precedence needs
/// them. This is a human-readable view; the interchange format is
/// [`Expression::serialize`].
///
/// # Examples
///
/// ```
/// use boolexps::{expr, Expression};
///
/// let e = expr!(("a" + "b") * !"c" + !("a" * 1));
/// assert_eq!(e.to_string(), "(a + b) * ~c + ~(a * 1)");
/// ```
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_infix(f)
    }
}
