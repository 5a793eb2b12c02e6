//! Evaluating expressions against a registry shared between threads.

use std::sync::Arc;
use std::thread;

use cali::{Analysis, CallableDescriptor, InMemoryDirectory, SharedRegistry, TypeTag};

use crate::helpers::fixtures::{widget_directory, widget_host};

#[test]
fn test_analysis_over_a_read_guard() {
    let shared = SharedRegistry::new(widget_host().registry().clone());
    let directory = widget_directory();

    let guard = shared.read();
    let analysis = Analysis::new(&guard, &directory);
    assert!(analysis.complete_matches("w1.rename(\"y\")"));
}

#[test]
fn test_registration_is_seen_by_later_evaluations() {
    let shared = SharedRegistry::default();
    let directory = InMemoryDirectory::new().with("lamp", "Lamp");

    assert!(!Analysis::new(&shared.read(), &directory).partial_matches("lamp.on"));

    shared
        .register(
            "Lamp",
            vec![],
            vec![CallableDescriptor::method("Lamp", "on", vec![])],
        )
        .unwrap();
    let guard = shared.read();
    let analysis = Analysis::new(&guard, &directory);
    assert!(analysis.complete_matches("lamp.on()"));
    assert!(analysis.complete_matches("Lamp()"));
}

#[test]
fn test_concurrent_evaluations() {
    let shared = SharedRegistry::new(widget_host().registry().clone());
    let directory = Arc::new(widget_directory());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = shared.clone();
            let directory = Arc::clone(&directory);
            thread::spawn(move || {
                let guard = shared.read();
                let analysis = Analysis::new(&guard, &*directory);
                let expression = format!("w1.resize({i}, {i})");
                analysis.resolve(&expression).is_some()
            })
        })
        .collect();

    shared
        .register(
            "Extra",
            vec![CallableDescriptor::constructor("Extra", vec![TypeTag::Number])],
            vec![],
        )
        .unwrap();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert!(shared.read().exact_type_name("extra").is_some());
}
