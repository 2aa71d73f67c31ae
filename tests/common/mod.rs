// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pattern_runner::core::{ScenarioRegistry, ScenarioRunner};
use tempfile::TempDir;

pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The two-scenario runner used throughout the end-to-end checks.
pub fn vehicle_runner() -> ScenarioRunner {
    let mut runner = ScenarioRunner::new().with_jobs(4);
    runner
        .register("factory", || {
            Ok(lines(&["I am two wheeler", "I am four wheeler"]))
        })
        .unwrap();
    runner
        .register("singleton", || {
            Ok(lines(&["This is a Red vehicle", "This is still a Red vehicle"]))
        })
        .unwrap();
    runner
}

/// A registry with one passing, one erroring and one panicking scenario.
pub fn mixed_registry() -> ScenarioRegistry {
    let mut registry = ScenarioRegistry::new();
    registry.register("ok", || Ok(lines(&["fine"]))).unwrap();
    registry
        .register("errors", || anyhow::bail!("engine would not start"))
        .unwrap();
    registry
        .register("panics", || -> anyhow::Result<Vec<String>> {
            panic!("wheel fell off")
        })
        .unwrap();
    registry
}

/// Registers a scenario that counts its invocations.
pub fn counting_scenario(runner: &mut ScenarioRunner, name: &str) -> Arc<AtomicUsize> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let label = name.to_string();
    runner
        .register(name, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(vec![format!("{label} ran")])
        })
        .unwrap();
    calls
}

/// Helper function to write a config file into a temporary directory
pub fn write_config(temp_dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(file_name);
    fs::write(&path, content).unwrap();
    path
}
