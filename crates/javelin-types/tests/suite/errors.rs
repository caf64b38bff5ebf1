use javelin_types::{parse_type, Malformed, ResolveError, TypeScope};
use pretty_assertions::assert_eq;

#[test]
fn ambiguity_lists_every_candidate() {
    let err = ResolveError::Ambiguous {
        name: "q".to_string(),
        candidates: vec!["q(int, long)".to_string(), "q(long, int)".to_string()],
    };
    assert_eq!(
        err.to_string(),
        "ambiguous call to `q`; candidates: q(int, long), q(long, int)"
    );
    assert!(!err.is_hard_failure());
}

#[test]
fn parse_errors_are_malformed_usages() {
    let err = parse_type("java.util.Map<java.lang.String", &TypeScope::new()).unwrap_err();
    match err {
        ResolveError::MalformedUsage(Malformed::Unparseable { text, offset, .. }) => {
            assert_eq!(text, "java.util.Map<java.lang.String");
            assert_eq!(offset, text.len());
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = parse_type("?", &TypeScope::new()).unwrap_err();
    assert!(err.is_hard_failure());
}
