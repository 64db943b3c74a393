//! Tests for evaluation, equivalence and the algebraic laws of expressions

use boolexps::{expr, Expression, Interpretation};
use std::sync::Arc;

fn var(name: &str) -> Expression {
    Expression::variable(name)
}

fn assign(pairs: &[(&str, bool)]) -> Interpretation {
    pairs.iter().map(|(n, v)| (Arc::from(*n), *v)).collect()
}

/// A handful of operands over p, q and r used to instantiate the laws
fn operands() -> Vec<Expression> {
    vec![
        var("p"),
        var("q").not(),
        expr!("p" * "q"),
        expr!("q" + !"r"),
        Expression::True,
        Expression::False,
        expr!(!("p" * "r")),
        expr!("p" * "q" + !"p"),
    ]
}

#[test]
fn test_xor_expression() {
    let xor = expr!("a" * !"b" + !"a" * "b");

    assert_eq!(xor.evaluate(&assign(&[("a", false), ("b", false)])), Some(false));
    assert_eq!(xor.evaluate(&assign(&[("a", false), ("b", true)])), Some(true));
    assert_eq!(xor.evaluate(&assign(&[("a", true), ("b", false)])), Some(true));
    assert_eq!(xor.evaluate(&assign(&[("a", true), ("b", true)])), Some(false));
}

#[test]
fn test_xnor_expression() {
    let xnor = expr!("a" * "b" + !"a" * !"b");

    assert_eq!(xnor.evaluate(&assign(&[("a", false), ("b", false)])), Some(true));
    assert_eq!(xnor.evaluate(&assign(&[("a", false), ("b", true)])), Some(false));
    assert_eq!(xnor.evaluate(&assign(&[("a", true), ("b", false)])), Some(false));
    assert_eq!(xnor.evaluate(&assign(&[("a", true), ("b", true)])), Some(true));
}

#[test]
fn test_evaluate_incomplete_interpretation() {
    let e = expr!("a" * "b");
    assert_eq!(e.evaluate(&assign(&[("a", false)])), None);
    // Extra variables are ignored
    assert_eq!(
        e.evaluate(&assign(&[("a", true), ("b", true), ("z", false)])),
        Some(true)
    );
}

#[test]
fn test_xor_is_not_xnor() {
    let xor = expr!("a" * !"b" + !"a" * "b");
    let xnor = expr!("a" * "b" + !"a" * !"b");
    assert!(!xor.is_equivalent_to(&xnor));
    assert!(xor.is_equivalent_to(&xnor.not()));
    assert!(xor.negate().is_equivalent_to(&xnor));
}

#[test]
fn test_commutativity() {
    for a in operands() {
        for b in operands() {
            assert!(a.or(&b).is_equivalent_to(&b.or(&a)), "{} + {}", a, b);
            assert!(a.and(&b).is_equivalent_to(&b.and(&a)), "{} * {}", a, b);
        }
    }
}

#[test]
fn test_associativity() {
    for a in operands() {
        for b in operands() {
            for c in operands() {
                assert!(
                    a.or(&b).or(&c).is_equivalent_to(&a.or(&b.or(&c))),
                    "({} + {}) + {}",
                    a,
                    b,
                    c
                );
                assert!(
                    a.and(&b).and(&c).is_equivalent_to(&a.and(&b.and(&c))),
                    "({} * {}) * {}",
                    a,
                    b,
                    c
                );
            }
        }
    }
}

#[test]
fn test_identity_and_annihilation() {
    for a in operands() {
        assert!(a.or(&Expression::False).is_equivalent_to(&a));
        assert!(a.or(&Expression::True).is_equivalent_to(&Expression::True));
        assert!(a.and(&Expression::True).is_equivalent_to(&a));
        assert!(a.and(&Expression::False).is_equivalent_to(&Expression::False));
    }
}

#[test]
fn test_idempotence_and_complement() {
    for a in operands() {
        assert!(a.or(&a).is_equivalent_to(&a), "{}", a);
        assert!(a.and(&a).is_equivalent_to(&a), "{}", a);
        assert!(a.or(&a.not()).is_equivalent_to(&Expression::True), "{}", a);
        assert!(a.and(&a.not()).is_equivalent_to(&Expression::False), "{}", a);
    }
}

#[test]
fn test_distribution() {
    for a in operands() {
        for b in operands() {
            for c in operands() {
                let lhs = a.or(&b.and(&c));
                let rhs = a.or(&b).and(&a.or(&c));
                assert!(lhs.is_equivalent_to(&rhs), "{} vs {}", lhs, rhs);
            }
        }
    }
}

#[test]
fn test_double_negation_and_de_morgan() {
    for a in operands() {
        assert!(a.not().not().is_equivalent_to(&a));
        for b in operands() {
            assert!(a.or(&b).not().is_equivalent_to(&a.not().and(&b.not())));
            assert!(a.and(&b).not().is_equivalent_to(&a.not().or(&b.not())));
        }
    }
}

#[test]
fn test_transformations_preserve_meaning() {
    for a in operands() {
        for b in operands() {
            let e = a.and(&b.not()).or(&b.and(&a).not());
            assert!(e.simplify().is_equivalent_to(&e), "simplify {}", e);
            assert!(e.to_nnf().is_equivalent_to(&e), "to_nnf {}", e);
            let dnf = e.to_dnf();
            assert!(dnf.is_equivalent_to(&e), "to_dnf {}", e);
            assert!(dnf.is_dnf(), "{} is not DNF", dnf);
        }
    }
}

#[test]
fn test_dnf_of_product_of_sums() {
    let e = expr!(("a" + "b") * ("c" + "d") * ("e" + !"a"));
    let dnf = e.to_dnf();
    assert!(dnf.is_dnf());
    assert!(dnf.is_equivalent_to(&e));
}

#[test]
fn test_structural_equality_is_not_equivalence() {
    let lhs = expr!("a" * "b");
    let rhs = expr!("b" * "a");
    assert_ne!(lhs, rhs);
    assert!(lhs.is_equivalent_to(&rhs));
}

#[test]
fn test_collect_variables() {
    let e = expr!("c" * "a" + !"b" + 1);
    let names: Vec<String> = e.all_vars().iter().map(|s| s.to_string()).collect();
    assert_eq!(names, vec!["a", "b", "c"]); // Should be alphabetical
}
