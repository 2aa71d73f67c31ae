//! # Transcript Module / 转录模块
//!
//! Compares captured scenario output against golden transcripts and records
//! new ones. A transcript is `<dir>/<scenario>.txt`, one output line per line.
//!
//! 将捕获的场景输出与黄金转录进行比较，并记录新的转录。
//! 转录文件为 `<dir>/<scenario>.txt`，每行对应一条输出。

use anyhow::{Result, bail};
use serde::Serialize;
use similar::TextDiff;
use std::path::{Path, PathBuf};

use crate::core::models::RunResult;
use crate::infra::fs;

/// Outcome of checking one result against its transcript.
/// 根据转录检查单个结果的结果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TranscriptCheck {
    /// Output equals the transcript line for line.
    Match,
    /// Output differs; `diff` is a unified diff from expected to actual.
    Mismatch { diff: String },
    /// No transcript file exists for the scenario.
    Missing,
    /// The scenario itself failed, so there is nothing to compare.
    Failed,
}

impl TranscriptCheck {
    pub fn is_match(&self) -> bool {
        matches!(self, TranscriptCheck::Match)
    }
}

/// Renders lines the way they are stored on disk.
/// 按照磁盘上存储的方式渲染行。
pub fn render_lines(lines: &[String]) -> String {
    lines.iter().fold(String::new(), |mut out, line| {
        out.push_str(line);
        out.push('\n');
        out
    })
}

/// Checks that every line of the successful results survives a round trip
/// through a transcript file. A line holding `\n` or `\r` would be split or
/// trimmed on read, so it is rejected.
///
/// 检查成功结果的每一行都能在转录文件中原样往返。
/// 包含 `\n` 或 `\r` 的行在读取时会被拆分或截断，因此会被拒绝。
pub fn ensure_storable(results: &[RunResult]) -> Result<()> {
    for result in results.iter().filter(|r| !r.is_failure()) {
        if let Some(number) = result
            .lines
            .iter()
            .position(|line| line.contains(['\n', '\r']))
        {
            bail!(
                "scenario '{}' output line {} contains a line break and cannot be stored as a transcript",
                result.name,
                number + 1
            );
        }
    }
    Ok(())
}

/// Compares expected and actual lines for the scenario `name`.
/// 比较场景 `name` 的期望行和实际行。
pub fn compare(name: &str, expected: &[String], actual: &[String]) -> TranscriptCheck {
    if expected == actual {
        return TranscriptCheck::Match;
    }

    let expected_text = render_lines(expected);
    let actual_text = render_lines(actual);
    let diff = TextDiff::from_lines(&expected_text, &actual_text)
        .unified_diff()
        .header(&format!("expected/{name}"), &format!("actual/{name}"))
        .to_string();

    TranscriptCheck::Mismatch { diff }
}

/// Checks every result against the transcripts in `dir`, preserving order.
///
/// # Errors
/// Propagates I/O errors other than a missing transcript file, and fails
/// before reading anything if an output line holds a line break.
///
/// 根据 `dir` 中的转录检查每个结果，保持顺序。
pub fn verify(dir: &Path, results: &[RunResult]) -> Result<Vec<TranscriptCheck>> {
    ensure_storable(results)?;
    results
        .iter()
        .map(|result| {
            if result.is_failure() {
                return Ok(TranscriptCheck::Failed);
            }
            Ok(match fs::read_transcript(dir, &result.name)? {
                Some(expected) => compare(&result.name, &expected, &result.lines),
                None => TranscriptCheck::Missing,
            })
        })
        .collect()
}

/// Writes a transcript for every successful result and returns the paths
/// written. Failed results are skipped. Nothing is written if any output line
/// holds a line break.
///
/// 为每个成功的结果写入转录并返回写入的路径。失败的结果会被跳过。
pub fn record(dir: &Path, results: &[RunResult]) -> Result<Vec<PathBuf>> {
    ensure_storable(results)?;
    fs::ensure_dir(dir)?;
    results
        .iter()
        .filter(|result| !result.is_failure())
        .map(|result| fs::write_transcript(dir, &result.name, &render_lines(&result.lines)))
        .collect()
}
