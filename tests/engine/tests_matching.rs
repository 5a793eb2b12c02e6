//! Partial and complete matching of whole expressions.

use rstest::rstest;

use cali::MatchOutcome;
use cali::ide::AnalysisHost;

use crate::helpers::fixtures::{widget_directory, widget_host};

#[rstest]
#[case("", MatchOutcome::Partial)]
#[case("Wid", MatchOutcome::Partial)]
#[case("widget", MatchOutcome::Partial)]
#[case("Widget ", MatchOutcome::Partial)]
#[case("Widget(", MatchOutcome::Partial)]
#[case("Widget(\"x", MatchOutcome::Partial)]
#[case("Widget(\"x\")", MatchOutcome::Complete)]
#[case("WIDGET(\"x\")", MatchOutcome::Complete)]
#[case("Widget(\"x\", 2)", MatchOutcome::None)]
#[case("Widget(\"x\") tail", MatchOutcome::None)]
#[case("Wid get(", MatchOutcome::None)]
#[case("Pair(1", MatchOutcome::Partial)]
#[case("Pair(1)", MatchOutcome::Complete)]
#[case("Pair(1, 2)", MatchOutcome::Complete)]
#[case("Pair(1, 2, 3)", MatchOutcome::None)]
#[case("Holder(Pair(1, 2)", MatchOutcome::Partial)]
#[case("Holder(Pair(1, 2))", MatchOutcome::Complete)]
#[case("Gadget()", MatchOutcome::Complete)]
#[case("Gadget(1)", MatchOutcome::None)]
#[case("Zebra", MatchOutcome::None)]
fn test_constructor_statements(#[case] expression: &str, #[case] expected: MatchOutcome) {
    let host = widget_host();
    let directory = widget_directory();
    let analysis = host.analysis(&directory);
    assert_eq!(
        analysis.match_outcome(expression),
        expected,
        "expression: {expression:?}"
    );
}

#[rstest]
#[case("w", MatchOutcome::Partial)]
#[case("W1", MatchOutcome::Partial)]
#[case("w1.", MatchOutcome::Complete)]
#[case("W1.", MatchOutcome::Complete)]
#[case("giz.", MatchOutcome::Partial)]
#[case("w1.re", MatchOutcome::Partial)]
#[case("w1.Re", MatchOutcome::None)]
#[case("w1.rename", MatchOutcome::Partial)]
#[case("w1.rename ", MatchOutcome::Partial)]
#[case("w1.rename(", MatchOutcome::Partial)]
#[case("w1.rename(\"y\")", MatchOutcome::Complete)]
#[case("w1.ren(\"y\")", MatchOutcome::Partial)]
#[case("w1.renameA(\"y\")", MatchOutcome::Complete)]
#[case("w1.resize(1, 2)", MatchOutcome::Complete)]
#[case("w1.resize(1)", MatchOutcome::None)]
#[case("w1.RES", MatchOutcome::None)]
#[case("w1.RESIZE(1, 2)", MatchOutcome::None)]
#[case("w1.res ", MatchOutcome::Partial)]
#[case("w1.res (", MatchOutcome::Partial)]
#[case("w1.res (1, 2)", MatchOutcome::Complete)]
#[case("w1.rename(\"y\").rename(\"z\")", MatchOutcome::None)]
#[case("p1.rename", MatchOutcome::None)]
#[case("nobody.", MatchOutcome::None)]
fn test_object_statements(#[case] expression: &str, #[case] expected: MatchOutcome) {
    let host = widget_host();
    let directory = widget_directory();
    let analysis = host.analysis(&directory);
    assert_eq!(
        analysis.match_outcome(expression),
        expected,
        "expression: {expression:?}"
    );
}

#[test]
fn test_ambiguous_type_names_need_the_full_name() {
    let mut host = AnalysisHost::new();
    host.register("Foo", vec![], vec![]).unwrap();
    host.register("Foobar", vec![], vec![]).unwrap();
    let directory = cali::InMemoryDirectory::new();
    let analysis = host.analysis(&directory);

    assert!(analysis.partial_matches("Fo("));
    assert!(analysis.resolve("Foo").is_none());
    assert!(analysis.resolve("Fo()").is_none());
    assert!(analysis.resolve("Foo()").is_some());
    assert!(analysis.resolve("Foob()").is_none());
    assert!(analysis.resolve("foobar()").is_some());
}

#[test]
fn test_case_folded_type_collision_is_never_complete() {
    let mut host = AnalysisHost::new();
    host.register("Node", vec![], vec![]).unwrap();
    host.register("NODE", vec![], vec![]).unwrap();
    let directory = cali::InMemoryDirectory::new();
    let analysis = host.analysis(&directory);

    assert!(analysis.partial_matches("node("));
    assert!(!analysis.complete_matches("Node()"));
}
