//! Tests for the endpoint contract and for reading expressions from files

use boolexps::service::{respond, route, MALFORMED_JSON};
use boolexps::{Error, Expression, Transform};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_dnf_endpoint() {
    let reply = route("/DNF", r#"["AND", ["OR", "p", "q"], "r"]"#).unwrap();
    let dnf = Expression::deserialize(&reply).unwrap();
    assert!(dnf.is_dnf());
    assert_eq!(reply, r#"["OR",["AND","p","r"],["AND","q","r"]]"#);
}

#[test]
fn test_nnf_endpoint() {
    let reply = route("/NNF", r#"["NOT", ["OR", "p", ["NOT", "q"]]]"#).unwrap();
    assert_eq!(reply, r#"["AND",["NOT","p"],"q"]"#);
}

#[test]
fn test_simplify_endpoint() {
    let reply = route("/simplify", r#"["AND", ["OR", "p", false], ["NOT", "p"]]"#).unwrap();
    assert_eq!(reply, "false");
}

#[test]
fn test_unknown_path() {
    assert_eq!(route("/CNF", "true"), None);
    assert_eq!(route("/simplify/", "true"), None);
}

#[test]
fn test_malformed_json_reply_is_fixed() {
    let bodies = ["", "[", "]", "{\"x\": 1}", "[\"AND\",\"OR\"]", "\"not\"", "[\"NOT\", \"x\"]]"];
    for t in Transform::ALL {
        for body in bodies {
            assert_eq!(respond(t, body), MALFORMED_JSON, "{} {:?}", t.path(), body);
        }
    }
    // The reply is itself a JSON string
    let decoded: String = serde_json::from_str(MALFORMED_JSON).unwrap();
    assert_eq!(decoded, "Malformed JSON");
}

#[test]
fn test_service_keeps_serving_after_failure() {
    assert_eq!(respond(Transform::Nnf, "[["), MALFORMED_JSON);
    assert_eq!(respond(Transform::Nnf, r#"["NOT", true]"#), "false");
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"["OR", "x", ["NOT", "x"]]"#).unwrap();

    let e = Expression::from_file(file.path()).unwrap();
    assert_eq!(e.simplify(), Expression::True);
}

#[test]
fn test_from_file_malformed() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"["OR", "x""#).unwrap();

    let err = Expression::from_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Deserialize(_)));
}

#[test]
fn test_from_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = Expression::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
