//! # Models Module Unit Tests / Models 模块单元测试
//!
//! Tests for result construction, status helpers and report counting.
//!
//! 结果构造、状态辅助函数和报告计数的测试。

use pattern_runner::models::{FailureReason, RunReport, RunResult};
use std::time::Duration;

#[test]
fn test_passed_result() {
    let result = RunResult::passed("factory", vec!["I am two wheeler".into()], Duration::from_millis(3));
    assert!(!result.is_failure());
    assert!(!result.is_not_found());
    assert_eq!(result.get_status_class(), "status-Passed");
    assert_eq!(result.failure_detail("en"), "");
    assert_eq!(result.to_string(), "factory (1 lines)");
}

#[test]
fn test_not_found_result() {
    let result = RunResult::not_found("ghost");
    assert!(result.is_failure());
    assert!(result.is_not_found());
    assert!(result.lines.is_empty());
    assert_eq!(result.duration, Duration::ZERO);
    assert_eq!(result.failure, Some(FailureReason::NotFound));
    assert_eq!(result.get_status_class(), "status-NotFound");
    assert!(result.failure_detail("en").contains("ghost"));
    assert_eq!(result.to_string(), "ghost: scenario not found");
}

#[test]
fn test_fault_result() {
    let result = RunResult::fault("broken", "panicked: boom", Duration::from_millis(1));
    assert!(result.is_failure());
    assert!(!result.is_not_found());
    assert!(result.lines.is_empty());
    assert_eq!(result.get_status_class(), "status-Failed");
    assert_eq!(result.failure_detail("en"), "panicked: boom");
    assert_eq!(result.to_string(), "broken: scenario fault: panicked: boom");
}

#[test]
fn test_status_strings_are_distinct() {
    let passed = RunResult::passed("a", vec![], Duration::ZERO).get_status_str("en");
    let missing = RunResult::not_found("b").get_status_str("en");
    let faulted = RunResult::fault("c", "x", Duration::ZERO).get_status_str("en");
    assert_ne!(passed, missing);
    assert_ne!(passed, faulted);
    assert_ne!(missing, faulted);
}

#[test]
fn test_failure_reason_serializes_with_kind_tag() {
    let json = serde_json::to_value(FailureReason::Fault { cause: "flat tyre".into() }).unwrap();
    assert_eq!(json["kind"], "fault");
    assert_eq!(json["cause"], "flat tyre");

    let json = serde_json::to_value(FailureReason::NotFound).unwrap();
    assert_eq!(json["kind"], "not_found");
}

#[test]
fn test_report_counts() {
    let report = RunReport::new(
        vec![
            RunResult::passed("a", vec!["x".into()], Duration::ZERO),
            RunResult::not_found("b"),
            RunResult::fault("c", "boom", Duration::ZERO),
        ],
        "en",
    );
    assert_eq!(report.total, 3);
    assert_eq!(report.failed, 2);
    assert!(report.has_failures());
    assert_eq!(report.language, "en");

    let clean = RunReport::new(vec![RunResult::passed("a", vec![], Duration::ZERO)], "en");
    assert!(!clean.has_failures());
}
