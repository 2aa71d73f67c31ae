//! # Transcript Module Unit Tests / 转录模块单元测试
//!
//! Tests for comparing output with golden transcripts and recording them.
//!
//! 将输出与黄金转录进行比较以及记录转录的测试。

mod common;

use common::lines;
use pattern_runner::core::transcript::{
    TranscriptCheck, compare, ensure_storable, record, render_lines, verify,
};
use pattern_runner::infra::fs::transcript_path;
use pattern_runner::models::RunResult;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

fn passed(name: &str, out: &[&str]) -> RunResult {
    RunResult::passed(name, lines(out), Duration::ZERO)
}

#[test]
fn test_render_lines_terminates_every_line() {
    assert_eq!(render_lines(&lines(&["a", "b"])), "a\nb\n");
    assert_eq!(render_lines(&[]), "");
}

#[test]
fn test_compare_equal_lines() {
    let out = lines(&["I am two wheeler", "I am four wheeler"]);
    assert_eq!(compare("factory", &out, &out), TranscriptCheck::Match);
}

#[test]
fn test_compare_produces_unified_diff() {
    let expected = lines(&["I am two wheeler", "I am four wheeler"]);
    let actual = lines(&["I am two wheeler", "I am six wheeler"]);

    match compare("factory", &expected, &actual) {
        TranscriptCheck::Mismatch { diff } => {
            assert!(diff.contains("--- expected/factory"));
            assert!(diff.contains("+++ actual/factory"));
            assert!(diff.contains("-I am four wheeler"));
            assert!(diff.contains("+I am six wheeler"));
        }
        other => panic!("expected a mismatch, got {other:?}"),
    }
}

#[test]
fn test_transcript_path_escapes_name() {
    let path = transcript_path(Path::new("golden"), "template method/v2");
    assert_eq!(path, Path::new("golden").join("template%20method%2Fv2.txt"));
    assert_eq!(
        transcript_path(Path::new("golden"), "template_method"),
        Path::new("golden").join("template_method.txt")
    );
}

#[test]
fn test_similar_names_get_separate_transcripts() {
    let dir = Path::new("golden");
    let paths = ["car.v1", "car_v1", "car%2Ev1", "car v1"].map(|name| transcript_path(dir, name));
    for (i, a) in paths.iter().enumerate() {
        for b in &paths[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_record_keeps_similar_names_apart() {
    let temp_dir = tempdir().unwrap();
    let dir = temp_dir.path();
    let results = vec![passed("car.v1", &["car one"]), passed("car_v1", &["car two"])];

    let written = record(dir, &results).unwrap();
    assert_eq!(written.len(), 2);
    assert_ne!(written[0], written[1]);

    let checks = verify(dir, &results).unwrap();
    assert_eq!(checks, vec![TranscriptCheck::Match, TranscriptCheck::Match]);
}

#[test]
fn test_line_breaks_inside_a_line_are_rejected() {
    let temp_dir = tempdir().unwrap();
    let dir = temp_dir.path().join("transcripts");

    for bad in [&["a\nb"][..], &["c\r"][..], &["fine", "d\r\ne"][..]] {
        let results = vec![passed("factory", &["I am two wheeler"]), passed("broken", bad)];

        assert!(ensure_storable(&results).is_err());
        let err = record(&dir, &results).unwrap_err();
        assert!(format!("{err:#}").contains("broken"));
        assert!(verify(&dir, &results).is_err());
    }
    assert!(!dir.join("factory.txt").exists());
}

#[test]
fn test_failed_results_are_not_checked_for_line_breaks() {
    let results = vec![
        passed("factory", &["I am two wheeler"]),
        RunResult::fault("broken", "panicked: a\nb", Duration::ZERO),
    ];
    assert!(ensure_storable(&results).is_ok());
}

#[test]
fn test_record_then_verify() {
    let temp_dir = tempdir().unwrap();
    let dir = temp_dir.path().join("transcripts");
    let results = vec![
        passed("factory", &["I am two wheeler", "I am four wheeler"]),
        RunResult::not_found("ghost"),
    ];

    let written = record(&dir, &results).unwrap();
    assert_eq!(written, vec![dir.join("factory.txt")]);
    assert_eq!(
        fs::read_to_string(dir.join("factory.txt")).unwrap(),
        "I am two wheeler\nI am four wheeler\n"
    );
    assert!(!dir.join("ghost.txt").exists());

    let checks = verify(&dir, &results).unwrap();
    assert_eq!(checks, vec![TranscriptCheck::Match, TranscriptCheck::Failed]);
}

#[test]
fn test_verify_reports_missing_and_mismatch() {
    let temp_dir = tempdir().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("singleton.txt"), "This is a Blue vehicle\n").unwrap();

    let results = vec![
        passed("singleton", &["This is a Red vehicle"]),
        passed("builder", &["Built a Blue vehicle"]),
    ];
    let checks = verify(dir, &results).unwrap();

    assert!(matches!(checks[0], TranscriptCheck::Mismatch { .. }));
    assert_eq!(checks[1], TranscriptCheck::Missing);
    assert!(checks.iter().all(|c| !c.is_match()));
}

#[test]
fn test_record_overwrites_existing_transcript() {
    let temp_dir = tempdir().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("state.txt"), "stale\n").unwrap();

    record(dir, &[passed("state", &["Shifted from Parked to Driving"])]).unwrap();
    assert_eq!(
        fs::read_to_string(dir.join("state.txt")).unwrap(),
        "Shifted from Parked to Driving\n"
    );
}
