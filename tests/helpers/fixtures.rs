//! A small registry and directory most engine tests run against.

use cali::ide::AnalysisHost;
use cali::{CallableDescriptor, InMemoryDirectory, TypeTag};

/// Registers:
///
/// - `Widget(String)` with `rename(String)`, `renameAll(String)`,
///   `resize(Number, Number)` and `attach(Widget)`
/// - `Pair(Number)` and `Pair(Number, Number)`
/// - `Holder(Pair)`
/// - `Gadget` with no declared constructors
pub fn widget_host() -> AnalysisHost {
    let mut host = AnalysisHost::new();
    host.register(
        "Widget",
        vec![CallableDescriptor::constructor("Widget", vec![TypeTag::String])],
        vec![
            CallableDescriptor::method("Widget", "rename", vec![TypeTag::String]),
            CallableDescriptor::method("Widget", "renameAll", vec![TypeTag::String]),
            CallableDescriptor::method("Widget", "resize", vec![TypeTag::Number, TypeTag::Number]),
            CallableDescriptor::method("Widget", "attach", vec![TypeTag::reference("Widget")]),
        ],
    )
    .unwrap();
    host.register(
        "Pair",
        vec![
            CallableDescriptor::constructor("Pair", vec![TypeTag::Number, TypeTag::Number]),
            CallableDescriptor::constructor("Pair", vec![TypeTag::Number]),
        ],
        vec![],
    )
    .unwrap();
    host.register(
        "Holder",
        vec![CallableDescriptor::constructor("Holder", vec![TypeTag::reference("Pair")])],
        vec![],
    )
    .unwrap();
    host.register("Gadget", vec![], vec![]).unwrap();
    host
}

/// `w1`, `w2` and `gizmo` are widgets, `p1` is a pair.
pub fn widget_directory() -> InMemoryDirectory {
    InMemoryDirectory::new()
        .with("w1", "Widget")
        .with("w2", "Widget")
        .with("gizmo", "Widget")
        .with("p1", "Pair")
}

/// Complete statements over [`widget_host`] and [`widget_directory`].
pub const COMPLETE_STATEMENTS: &[&str] = &[
    "Widget(\"x\")",
    "Widget(plain)",
    "Pair(1)",
    "Pair(1, 2.5)",
    "Holder(p1)",
    "Holder(Pair(3, 4))",
    "Gadget()",
    "w1.",
    "w1.rename(\"y\")",
    "w2.renameAll(\"z\")",
    "gizmo.resize(10, 20)",
    "w1.attach(gizmo)",
];
