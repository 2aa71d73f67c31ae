//! # Registry Unit Tests / 注册表单元测试
//!
//! Tests for scenario registration, duplicate detection and listing.
//!
//! 场景注册、重复检测和列出功能的测试。

mod common;

use common::lines;
use pattern_runner::core::registry::{RegistryError, Scenario, ScenarioRegistry};

#[test]
fn test_register_keeps_registration_order() {
    let mut registry = ScenarioRegistry::new();
    for name in ["state", "adapter", "builder"] {
        registry.register(name, || Ok(vec![])).unwrap();
    }

    let names: Vec<&str> = registry.list().collect();
    assert_eq!(names, vec!["state", "adapter", "builder"]);
    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());
}

#[test]
fn test_duplicate_name_is_rejected() {
    let mut registry = ScenarioRegistry::new();
    registry
        .register("factory", || Ok(lines(&["first"])))
        .unwrap();

    let err = registry
        .register("factory", || Ok(lines(&["second"])))
        .unwrap_err();

    assert_eq!(err, RegistryError::DuplicateName("factory".to_string()));
    assert_eq!(err.to_string(), "scenario 'factory' is already registered");
    assert_eq!(registry.len(), 1);

    // The first registration is untouched.
    let scenario = registry.get("factory").unwrap();
    assert_eq!(scenario.invoke().unwrap(), lines(&["first"]));
}

#[test]
fn test_insert_prebuilt_scenario() {
    let mut registry = ScenarioRegistry::new();
    registry
        .insert(Scenario::new("proxy", || Ok(lines(&["gate"]))))
        .unwrap();
    assert!(matches!(
        registry.insert(Scenario::new("proxy", || Ok(vec![]))),
        Err(RegistryError::DuplicateName(name)) if name == "proxy"
    ));
}

#[test]
fn test_list_is_restartable() {
    let mut registry = ScenarioRegistry::new();
    registry.register("a", || Ok(vec![])).unwrap();
    registry.register("b", || Ok(vec![])).unwrap();

    let first: Vec<&str> = registry.list().collect();
    let second: Vec<&str> = registry.list().collect();
    assert_eq!(first, second);

    let names = registry.list();
    let cloned: Vec<&str> = names.clone().collect();
    assert_eq!(cloned, names.collect::<Vec<_>>());
}

#[test]
fn test_empty_registry() {
    let registry = ScenarioRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.list().count(), 0);
    assert!(registry.get("anything").is_none());
    assert_eq!(registry.position("anything"), None);
}

#[test]
fn test_position_and_get() {
    let mut registry = ScenarioRegistry::new();
    registry.register("first", || Ok(vec![])).unwrap();
    registry.register("second", || Ok(lines(&["two"]))).unwrap();

    assert_eq!(registry.position("second"), Some(1));
    assert_eq!(registry.get("second").unwrap().name(), "second");
    assert_eq!(format!("{:?}", registry.get("first").unwrap()), "Scenario { name: \"first\", .. }");
}
