//! Auto-completion and picker suggestions over whole expressions.

use rstest::rstest;

use crate::helpers::fixtures::{widget_directory, widget_host};

#[rstest]
#[case("Wi", "Widget(")]
#[case("wid", "Widget(")]
#[case("Ga", "Gadget()")]
#[case("Ho", "Holder(")]
#[case("Holder(p", "Holder(p1)")]
#[case("Holder(Pa", "Holder(Pa")]
#[case("Pair(1, 2", "Pair(1, 2)")]
#[case("Pair(1", "Pair(1")]
#[case("gi", "gizmo.")]
#[case("g", "g")]
#[case("gizmo.", "gizmo.")]
#[case("gizmo.rena", "gizmo.rename")]
#[case("gizmo.res", "gizmo.resize(")]
#[case("gizmo.at", "gizmo.attach(")]
#[case("gizmo.attach(w", "gizmo.attach(w")]
#[case("gizmo.attach(g", "gizmo.attach(gizmo)")]
#[case("gizmo.resize(1, 2", "gizmo.resize(1, 2)")]
fn test_auto_complete(#[case] expression: &str, #[case] expected: &str) {
    let host = widget_host();
    let directory = widget_directory();
    let analysis = host.analysis(&directory);
    assert_eq!(
        analysis.auto_complete(expression).as_deref(),
        Some(expected),
        "expression: {expression:?}"
    );
}

#[rstest]
#[case("Zebra")]
#[case("w1.fly")]
#[case("Pair(1, 2, 3)")]
fn test_no_completion_outside_the_grammar(#[case] expression: &str) {
    let host = widget_host();
    let directory = widget_directory();
    assert_eq!(host.analysis(&directory).auto_complete(expression), None);
}

#[rstest]
#[case("P", vec!["air(", "1."])]
#[case("Pair(", vec!["<Number> )", "<Number>, <Number> )"])]
#[case("Pair(1", vec![")", ", <Number> )"])]
#[case("Pair(1, ", vec!["<Number> )"])]
#[case("Pair(1, 2)", vec![])]
#[case("w", vec!["idget(", "1.", "2."])]
#[case("w1.re", vec!["name(", "nameAll(", "size("])]
#[case("w1.rename ", vec!["("])]
#[case("w1.resize(", vec!["<Number>, <Number> )"])]
#[case("w1.attach(", vec!["<Widget> )"])]
fn test_suggestions(#[case] expression: &str, #[case] expected: Vec<&str>) {
    let host = widget_host();
    let directory = widget_directory();
    assert_eq!(
        host.analysis(&directory).suggestions(expression),
        expected,
        "expression: {expression:?}"
    );
}
