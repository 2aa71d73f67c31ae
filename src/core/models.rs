//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures produced by a run: the per-scenario
//! `RunResult`, the reasons a scenario can fail, and the serialisable report
//! that wraps a whole batch.
//!
//! 此模块定义运行产生的数据结构：每个场景的 `RunResult`、场景可能失败的原因，
//! 以及包装整个批次的可序列化报告。

use crate::infra::t;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Enumerates the possible reasons for a scenario failure.
/// 枚举场景失败的可能原因。
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// The requested name is not registered.
    /// 请求的名称未注册。
    #[error("scenario not found")]
    NotFound,
    /// The scenario's operation returned an error or panicked.
    /// 场景的操作返回了错误或发生了 panic。
    #[error("scenario fault: {cause}")]
    Fault { cause: String },
}

/// The outcome of executing one scenario.
/// 执行单个场景的结果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// The scenario name as requested / 请求的场景名称
    pub name: String,
    /// Captured output lines, in the order the scenario produced them.
    /// 捕获的输出行，按场景生成的顺序排列。
    pub lines: Vec<String>,
    /// `None` when the scenario completed / 场景完成时为 `None`
    pub failure: Option<FailureReason>,
    /// Time spent inside the operation. Zero for names that were never run.
    /// 在操作内部花费的时间。对于从未运行的名称为零。
    pub duration: Duration,
}

impl RunResult {
    pub fn passed(name: impl Into<String>, lines: Vec<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            lines,
            failure: None,
            duration,
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
            failure: Some(FailureReason::NotFound),
            duration: Duration::ZERO,
        }
    }

    pub fn fault(name: impl Into<String>, cause: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
            failure: Some(FailureReason::Fault {
                cause: cause.into(),
            }),
            duration,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.failure, Some(FailureReason::NotFound))
    }

    /// Gets the appropriate CSS class for the result status.
    pub fn get_status_class(&self) -> &'static str {
        match &self.failure {
            None => "status-Passed",
            Some(FailureReason::NotFound) => "status-NotFound",
            Some(FailureReason::Fault { .. }) => "status-Failed",
        }
    }

    /// Gets the status of the result as a localised string for display.
    /// 以本地化字符串形式获取结果的状态以供显示。
    pub fn get_status_str(&self, locale: &str) -> String {
        match &self.failure {
            None => t!("report.status_passed", locale = locale).to_string(),
            Some(FailureReason::NotFound) => t!("report.status_not_found", locale = locale).to_string(),
            Some(FailureReason::Fault { .. }) => t!("report.status_failed", locale = locale).to_string(),
        }
    }

    /// Human readable description of the failure, localised.
    /// Returns an empty string for passed results.
    ///
    /// 本地化的失败描述。对于通过的结果返回空字符串。
    pub fn failure_detail(&self, locale: &str) -> String {
        match &self.failure {
            None => String::new(),
            Some(FailureReason::NotFound) => {
                t!("report.not_found_detail", locale = locale, name = &self.name).to_string()
            }
            Some(FailureReason::Fault { cause }) => cause.clone(),
        }
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failure {
            None => write!(f, "{} ({} lines)", self.name, self.lines.len()),
            Some(reason) => write!(f, "{}: {}", self.name, reason),
        }
    }
}

/// A whole batch, as written to JSON reports.
/// 整个批次，写入 JSON 报告时使用。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub generated_at: DateTime<Utc>,
    pub language: String,
    pub total: usize,
    pub failed: usize,
    pub results: Vec<RunResult>,
}

impl RunReport {
    pub fn new(results: Vec<RunResult>, language: &str) -> Self {
        let failed = results.iter().filter(|r| r.is_failure()).count();
        Self {
            generated_at: Utc::now(),
            language: language.to_string(),
            total: results.len(),
            failed,
            results,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
