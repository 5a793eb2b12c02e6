//! Resolution of complete statements and argument conversion.

use rstest::rstest;

use cali::ide::AnalysisHost;
use cali::{EngineConfig, Identifier, InMemoryDirectory, ResolvedInvocation, Value};

use crate::helpers::fixtures::{widget_directory, widget_host};

#[rstest]
#[case("Widget(\"x\")", vec![Value::Text("x".into())])]
#[case("Widget(plain)", vec![Value::Text("plain".into())])]
#[case("Pair(1, 2.5)", vec![Value::Number(1.0), Value::Number(2.5)])]
#[case("Holder(p1)", vec![Value::Object(Identifier::new("p1"))])]
#[case("w1.resize(10, 20)", vec![Value::Number(10.0), Value::Number(20.0)])]
#[case("w1.attach(GIZMO)", vec![Value::Object(Identifier::new("gizmo"))])]
#[case("Gadget()", vec![])]
fn test_resolved_arguments(#[case] expression: &str, #[case] expected: Vec<Value>) {
    let host = widget_host();
    let directory = widget_directory();
    let resolved = host.analysis(&directory).resolve(expression).unwrap();
    assert_eq!(resolved.arguments(), expected.as_slice());
}

#[rstest]
#[case("Pair(one)")]
#[case("Pair(1, two)")]
#[case("Pair(NaN)")]
#[case("w1.resize(inf, 2)")]
#[case("Holder(w1)")]
#[case("Holder(nobody)")]
#[case("Holder(Widget(\"x\"))")]
#[case("w1.attach(p1)")]
#[case("w1.attach(w)")]
fn test_failed_conversion_does_not_resolve(#[case] expression: &str) {
    let host = widget_host();
    let directory = widget_directory();
    let analysis = host.analysis(&directory);
    assert!(analysis.complete_matches(expression));
    assert_eq!(analysis.resolve(expression), None);
}

#[test]
fn test_nested_constructor_argument() {
    let host = widget_host();
    let directory = widget_directory();
    let resolved = host
        .analysis(&directory)
        .resolve("Holder(Pair(3, 4))")
        .unwrap();

    let [Value::New(pair)] = resolved.arguments() else {
        panic!("expected one nested constructor, got {resolved:?}");
    };
    assert_eq!(pair.type_name, "Pair");
    assert_eq!(pair.arguments, vec![Value::Number(3.0), Value::Number(4.0)]);
}

#[test]
fn test_bare_reference_resolves_to_the_object() {
    let host = widget_host();
    let directory = widget_directory();
    assert_eq!(
        host.analysis(&directory).resolve("gizmo."),
        Some(ResolvedInvocation::Object(Identifier::new("gizmo")))
    );
}

#[test]
fn test_method_resolves_against_the_receiver_type() {
    let host = widget_host();
    let directory = widget_directory();
    let resolved = host
        .analysis(&directory)
        .resolve("w2.renameAll(\"z\")")
        .unwrap();
    let descriptor = resolved.descriptor().unwrap();
    assert_eq!(descriptor.owner(), "Widget");
    assert_eq!(descriptor.name(), "renameAll");
}

#[test]
fn test_quotes_kept_when_configured() {
    let mut host = AnalysisHost::with_config(EngineConfig::new().with_strip_string_quotes(false));
    host.register(
        "Note",
        vec![cali::CallableDescriptor::constructor(
            "Note",
            vec![cali::TypeTag::String],
        )],
        vec![],
    )
    .unwrap();
    let directory = InMemoryDirectory::new();
    let resolved = host.analysis(&directory).resolve("Note(\"hi\")").unwrap();
    assert_eq!(resolved.arguments(), &[Value::Text("\"hi\"".into())]);
}
