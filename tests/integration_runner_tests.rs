//! # Runner Integration Tests / 运行器集成测试
//!
//! End-to-end tests for `ScenarioRunner`: ordering, isolation of failures,
//! not-found handling and determinism.
//!
//! `ScenarioRunner` 的端到端测试：顺序、失败隔离、未找到处理和确定性。

mod common;

use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;

use common::{counting_scenario, lines, mixed_registry, vehicle_runner};
use pattern_runner::core::{FailureReason, RegistryError, ScenarioRunner};

#[tokio::test]
async fn test_run_all_end_to_end() {
    let runner = vehicle_runner();
    let results = runner.run_all().await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].name, "factory");
    assert_eq!(results[0].lines, lines(&["I am two wheeler", "I am four wheeler"]));
    assert_eq!(results[0].failure, None);
    assert_eq!(results[1].name, "singleton");
    assert_eq!(
        results[1].lines,
        lines(&["This is a Red vehicle", "This is still a Red vehicle"])
    );
    assert_eq!(results[1].failure, None);
}

#[tokio::test]
async fn test_results_follow_registration_order_not_completion_order() {
    let mut runner = ScenarioRunner::new().with_jobs(4);
    runner
        .register("slow", || {
            thread::sleep(Duration::from_millis(150));
            Ok(lines(&["slow done"]))
        })
        .unwrap();
    runner
        .register("fast", || Ok(lines(&["fast done"])))
        .unwrap();

    for request in [["slow", "fast"], ["fast", "slow"]] {
        let results = runner.run(Some(&request[..])).await;
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["slow", "fast"]);
    }
}

#[tokio::test]
async fn test_unknown_name_does_not_abort_batch() {
    let runner = vehicle_runner();
    let results = runner
        .run(Some(&["factory", "time_machine", "singleton"][..]))
        .await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].name, "factory");
    assert!(!results[0].is_failure());
    assert_eq!(results[1].name, "singleton");
    assert!(!results[1].is_failure());
    assert_eq!(results[2].name, "time_machine");
    assert_eq!(results[2].failure, Some(FailureReason::NotFound));
    assert!(results[2].lines.is_empty());
    assert_eq!(results[2].duration, Duration::ZERO);
}

#[tokio::test]
async fn test_faults_are_contained() {
    let runner = ScenarioRunner::with_registry(mixed_registry()).with_jobs(2);
    let results = runner.run_all().await;

    assert_eq!(results.len(), 3);

    assert_eq!(results[0].name, "ok");
    assert_eq!(results[0].lines, lines(&["fine"]));
    assert!(!results[0].is_failure());

    assert_eq!(results[1].name, "errors");
    assert_eq!(
        results[1].failure,
        Some(FailureReason::Fault {
            cause: "engine would not start".to_string()
        })
    );

    assert_eq!(results[2].name, "panics");
    match &results[2].failure {
        Some(FailureReason::Fault { cause }) => {
            assert!(cause.contains("panicked"), "cause was {cause}");
            assert!(cause.contains("wheel fell off"), "cause was {cause}");
        }
        other => panic!("Expected a fault, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_context_chain_is_kept() {
    let mut runner = ScenarioRunner::new();
    runner
        .register("layered", || {
            use anyhow::Context;
            Err(anyhow::anyhow!("tyre pressure low")).context("pre-drive check failed")
        })
        .unwrap();

    let results = runner.run_all().await;
    assert_eq!(
        results[0].failure,
        Some(FailureReason::Fault {
            cause: "pre-drive check failed: tyre pressure low".to_string()
        })
    );
}

#[tokio::test]
async fn test_each_scenario_runs_exactly_once_per_call() {
    let mut runner = ScenarioRunner::new().with_jobs(3);
    let first = counting_scenario(&mut runner, "first");
    let second = counting_scenario(&mut runner, "second");

    runner
        .run(Some(&["first", "first", "second"][..]))
        .await;
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 1);

    runner.run(Some(&["second"][..])).await;
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_repeated_runs_are_identical() {
    let runner = vehicle_runner();
    let first = runner.run(Some(&["singleton"][..])).await;
    let second = runner.run(Some(&["singleton"][..])).await;
    assert_eq!(first[0].lines, second[0].lines);
    assert_eq!(first[0].failure, second[0].failure);
}

#[tokio::test]
async fn test_duplicate_registration_leaves_first_runnable() {
    let mut runner = vehicle_runner();
    let err = runner
        .register("factory", || Ok(lines(&["impostor"])))
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateName("factory".to_string()));

    let results = runner.run(Some(&["factory"][..])).await;
    assert_eq!(results[0].lines, lines(&["I am two wheeler", "I am four wheeler"]));
}

#[tokio::test]
async fn test_empty_selection_yields_no_results() {
    let runner = vehicle_runner();
    let none: Vec<String> = Vec::new();
    assert!(runner.run(Some(none.as_slice())).await.is_empty());
    assert!(ScenarioRunner::new().run_all().await.is_empty());
}

#[tokio::test]
async fn test_single_job_still_runs_everything_in_order() {
    let runner = vehicle_runner().with_jobs(0);
    assert_eq!(runner.jobs(), 1);

    let results = runner.run_all().await;
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["factory", "singleton"]);
}

#[test]
fn test_list_matches_registration_order() {
    let runner = vehicle_runner();
    let first: Vec<&str> = runner.list().collect();
    let second: Vec<&str> = runner.list().collect();
    assert_eq!(first, vec!["factory", "singleton"]);
    assert_eq!(first, second);
}
