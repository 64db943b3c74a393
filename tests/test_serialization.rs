//! Tests for the JSON encoding: round trips and malformed input

use boolexps::{expr, DeserializeError, Expression};

/// Grammar-conforming documents, written with arbitrary spacing
const DOCUMENTS: &[&str] = &[
    "true",
    "false",
    r#""x""#,
    r#"["NOT", "x"]"#,
    r#"["OR", "x", "y"]"#,
    r#"["AND", "x", ["NOT", false]]"#,
    r#"[ "OR" , [ "AND" , "p" , "q" ] , [ "NOT" , [ "OR" , "r" , true ] ] ]"#,
    "[\"AND\",\n  [\"NOT\", [\"NOT\", \"Deeply Nested\"]],\n  \"x\"\n]",
];

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Byte offsets that lie outside JSON string literals, including the end
fn offsets_outside_strings(text: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut in_string = false;
    let mut escaped = false;
    for (i, c) in text.char_indices() {
        if !in_string {
            offsets.push(i);
        }
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        }
    }
    offsets.push(text.len());
    offsets
}

#[test]
fn test_roundtrip_from_expression() {
    let samples = vec![
        Expression::True,
        expr!("x"),
        expr!(!"x"),
        expr!("a" * !("b" + 0) + !!"c"),
        expr!(("a" + "b") * ("c" + "d") * !(1 * "e")),
        Expression::variable("with \"quotes\" and \\ and \u{e9}"),
    ];
    for e in samples {
        let text = e.serialize();
        assert_eq!(Expression::deserialize(&text), Ok(e), "{}", text);
    }
}

#[test]
fn test_roundtrip_from_text() {
    for doc in DOCUMENTS {
        let e = Expression::deserialize(doc).unwrap();
        assert_eq!(strip_whitespace(&e.serialize()), strip_whitespace(doc));
    }
}

#[test]
fn test_operator_case_is_normalised_on_output() {
    let e = Expression::deserialize(r#"["aNd", ["not", "x"], ["Or", "y", "z"]]"#).unwrap();
    assert_eq!(e.serialize(), r#"["AND",["NOT","x"],["OR","y","z"]]"#);
}

#[test]
fn test_single_element_wrapping_is_dropped() {
    let e = Expression::deserialize(r#"[["OR", ["x"], [["y"]]]]"#).unwrap();
    assert_eq!(e.serialize(), r#"["OR","x","y"]"#);
}

#[test]
fn test_removed_bracket_is_rejected() {
    for doc in DOCUMENTS {
        for (i, c) in doc.char_indices() {
            if c != '[' && c != ']' {
                continue;
            }
            let mut broken = doc.to_string();
            broken.remove(i);
            assert!(
                Expression::deserialize(&broken).is_err(),
                "accepted {:?}",
                broken
            );
        }
    }
}

#[test]
fn test_injected_bracket_or_brace_is_rejected() {
    for doc in DOCUMENTS {
        for offset in offsets_outside_strings(doc) {
            for extra in ['[', ']', '{', '}'] {
                let mut broken = doc.to_string();
                broken.insert(offset, extra);
                assert!(
                    Expression::deserialize(&broken).is_err(),
                    "accepted {:?}",
                    broken
                );
            }
        }
    }
}

#[test]
fn test_truncated_input_is_rejected() {
    for doc in DOCUMENTS {
        let doc = doc.trim_end();
        for end in 1..doc.len() {
            if !doc.is_char_boundary(end) {
                continue;
            }
            let prefix = &doc[..end];
            // A prefix can only be valid if it is a complete document itself
            if prefix.trim() == "true" || prefix.trim() == "false" {
                continue;
            }
            assert!(
                Expression::deserialize(prefix).is_err(),
                "accepted {:?}",
                prefix
            );
        }
    }
}

#[test]
fn test_grammar_violations_are_errors_not_panics() {
    let cases = [
        "",
        "   ",
        "[]",
        "[[]]",
        "{}",
        "1",
        "null",
        r#"["NOT"]"#,
        r#"["OR", "x"]"#,
        r#"["AND", "x", "y", "z"]"#,
        r#"["IMPLIES", "x", "y"]"#,
        r#"[true, "x"]"#,
        r#""NoT""#,
        r#"["OR", "x", "and"]"#,
        r#"["NOT", ["NOT", ["NOT", 3]]]"#,
    ];
    for case in cases {
        assert!(Expression::deserialize(case).is_err(), "accepted {:?}", case);
    }
}

#[test]
fn test_syntax_and_grammar_errors_are_distinguished() {
    assert!(matches!(
        Expression::deserialize("[\"OR\", \"x\""),
        Err(DeserializeError::InvalidJson { .. })
    ));
    assert!(matches!(
        Expression::deserialize(r#"["OR", "x"]"#),
        Err(DeserializeError::InvalidArity { .. })
    ));
}

#[test]
fn test_deeply_nested_input_fails_cleanly() {
    let depth = 10_000;
    let text = format!("{}\"x\"{}", "[\"NOT\",".repeat(depth), "]".repeat(depth));
    assert!(Expression::deserialize(&text).is_err());
}
