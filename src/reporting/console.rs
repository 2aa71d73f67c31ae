//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints scenario output, run summaries, failure details and
//! transcript verification results to the console, with colour and
//! internationalization support.
//!
//! 此模块将场景输出、运行摘要、失败详情和转录验证结果打印到控制台，支持颜色和国际化。

use colored::*;

use crate::core::models::{FailureReason, RunResult};
use crate::core::transcript::TranscriptCheck;
use crate::infra::t;

/// Prints every passed scenario as a header followed by its indented lines.
///
/// 将每个通过的场景打印为标题，后跟其缩进的输出行。
///
/// # Output Format / 输出格式
/// ```text
/// == factory ==
///    I am two wheeler
///    I am four wheeler
/// ```
pub fn print_outputs(results: &[RunResult]) {
    for result in results.iter().filter(|r| !r.is_failure()) {
        println!("\n{}", format!("== {} ==", result.name).cyan().bold());
        for line in &result.lines {
            println!("   {line}");
        }
    }
}

/// Prints a formatted summary of run results to the console.
///
/// 在控制台打印格式化的运行结果摘要。
///
/// # Output Format / 输出格式
/// ```text
/// --- Scenario Summary ---
///   - Passed     | factory                        |   120.00µs |  2 lines
///   - Failed     | broken                         |    80.00µs |
///   - Not Found  | missing                        |        N/A |
/// ```
pub fn print_summary(results: &[RunResult], locale: &str) {
    println!("\n{}", t!("summary_banner", locale = locale).bold());

    for result in results {
        let status_str = result.get_status_str(locale);
        let status_colored = match &result.failure {
            None => status_str.green(),
            Some(FailureReason::NotFound) => status_str.yellow(),
            Some(FailureReason::Fault { .. }) => status_str.red(),
        };

        let duration_str = if result.is_not_found() {
            "N/A".to_string()
        } else {
            format!("{:.2?}", result.duration)
        };

        let lines_str = if result.is_failure() {
            String::new()
        } else {
            t!("summary_lines", locale = locale, count = result.lines.len()).to_string()
        };

        println!(
            "  - {:<12} | {:<30} | {:>10} | {}",
            status_colored, result.name, duration_str, lines_str
        );
    }

    let failed = results.iter().filter(|r| r.is_failure()).count();
    println!(
        "\n{}",
        t!(
            "summary_totals",
            locale = locale,
            total = results.len(),
            passed = results.len() - failed,
            failed = failed
        )
    );
}

/// Prints the cause of every failed result.
/// Returns early if nothing failed.
///
/// 打印每个失败结果的原因。如果没有失败则提前返回。
pub fn print_failure_details(results: &[RunResult], locale: &str) {
    let failures: Vec<&RunResult> = results.iter().filter(|r| r.is_failure()).collect();
    if failures.is_empty() {
        return;
    }

    println!("\n{}", t!("failure_banner", locale = locale).red().bold());
    println!("{}", "-".repeat(80));

    for (i, result) in failures.iter().enumerate() {
        println!(
            "[{}/{}] {} '{}'",
            i + 1,
            failures.len(),
            t!("failure_header", locale = locale).red(),
            result.name.cyan()
        );
        println!("  {}", result.failure_detail(locale));
    }
    println!("{}", "-".repeat(80));
}

/// Prints the outcome of a transcript verification, diffs included.
///
/// 打印转录验证的结果，包括差异。
pub fn print_verification(results: &[RunResult], checks: &[TranscriptCheck], locale: &str) {
    println!("\n{}", t!("verify_banner", locale = locale).bold());

    for (result, check) in results.iter().zip(checks) {
        let status = match check {
            TranscriptCheck::Match => t!("verify.match", locale = locale).green(),
            TranscriptCheck::Mismatch { .. } => t!("verify.mismatch", locale = locale).red(),
            TranscriptCheck::Missing => t!("verify.missing", locale = locale).yellow(),
            TranscriptCheck::Failed => t!("verify.failed", locale = locale).red(),
        };
        println!("  - {:<12} | {}", status, result.name);

        if let TranscriptCheck::Mismatch { diff } = check {
            for line in diff.lines() {
                let line_colored = if line.starts_with('+') && !line.starts_with("+++") {
                    line.green()
                } else if line.starts_with('-') && !line.starts_with("---") {
                    line.red()
                } else {
                    line.dimmed()
                };
                println!("      {line_colored}");
            }
        }
    }
}
