//! # JSON Reporting Module / JSON 报告模块
//!
//! Writes a machine-readable `RunReport` for a batch of results.
//!
//! 为一批结果写入机器可读的 `RunReport`。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::models::{RunReport, RunResult};
use crate::infra::fs::ensure_parent_dir;

/// Serializes `results` as a pretty-printed JSON report at `output_path`.
///
/// 将 `results` 序列化为格式化的 JSON 报告并写入 `output_path`。
pub fn generate_json_report(results: &[RunResult], output_path: &Path, locale: &str) -> Result<()> {
    let report = RunReport::new(results.to_vec(), locale);
    let content = serde_json::to_string_pretty(&report).context("Failed to serialize run report")?;

    ensure_parent_dir(output_path)?;
    fs::write(output_path, content)
        .with_context(|| format!("Failed to write JSON report: {}", output_path.display()))
}
