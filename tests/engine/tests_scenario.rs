//! The widget scenario: one type, one constructor, one method, one object.

use cali::ide::AnalysisHost;
use cali::slot::{ConstructorCall, MethodCall};
use cali::{
    CallableDescriptor, Identifier, InMemoryDirectory, ResolvedInvocation, TypeTag, Value,
};

fn scenario() -> (AnalysisHost, InMemoryDirectory) {
    let mut host = AnalysisHost::new();
    host.register(
        "Widget",
        vec![CallableDescriptor::constructor("Widget", vec![TypeTag::String])],
        vec![CallableDescriptor::method("Widget", "rename", vec![TypeTag::String])],
    )
    .unwrap();
    let directory = InMemoryDirectory::new().with("w1", "Widget");
    (host, directory)
}

#[test]
fn test_constructor_call() {
    let (host, directory) = scenario();
    let analysis = host.analysis(&directory);

    assert!(analysis.partial_matches("Widget("));
    assert!(analysis.complete_matches("Widget(\"x\")"));
    assert_eq!(
        analysis.resolve("Widget(\"x\")"),
        Some(ResolvedInvocation::Constructor(ConstructorCall {
            type_name: "Widget".into(),
            descriptor: CallableDescriptor::constructor("Widget", vec![TypeTag::String]),
            arguments: vec![Value::Text("x".into())],
        }))
    );
}

#[test]
fn test_method_call() {
    let (host, directory) = scenario();
    let analysis = host.analysis(&directory);

    assert!(analysis.partial_matches("w1.ren"));
    assert!(analysis.complete_matches("w1.rename(\"y\")"));
    assert_eq!(
        analysis.resolve("w1.rename(\"y\")"),
        Some(ResolvedInvocation::Method(MethodCall {
            receiver: Identifier::new("w1"),
            descriptor: CallableDescriptor::method("Widget", "rename", vec![TypeTag::String]),
            arguments: vec![Value::Text("y".into())],
        }))
    );
}

#[test]
fn test_parameter_hint_after_open() {
    let (host, directory) = scenario();
    let analysis = host.analysis(&directory);
    assert!(
        analysis
            .suggestions("Widget(")
            .contains(&"<String> )".to_string())
    );
}

#[test]
fn test_typing_a_method_call_from_scratch() {
    let (host, directory) = scenario();
    let analysis = host.analysis(&directory);

    assert_eq!(analysis.auto_complete("w").as_deref(), Some("w"));
    assert_eq!(analysis.auto_complete("w1").as_deref(), Some("w1.rename("));
    assert_eq!(
        analysis.auto_complete("w1.rename(\"y\"").as_deref(),
        Some("w1.rename(\"y\")")
    );
}
