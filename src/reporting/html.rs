//! # HTML Reporting Module / HTML 报告模块
//!
//! This module handles the generation of HTML run reports.
//! It creates a self-contained, styled HTML file with summary counts, a results
//! table, and a toggle per row for viewing the captured output or failure cause.
//!
//! 此模块处理 HTML 运行报告的生成。
//! 它创建一个独立的样式化 HTML 文件，包含汇总计数、结果表格，
//! 以及每行用于查看捕获输出或失败原因的切换。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::models::RunResult;
use crate::infra::{fs::ensure_parent_dir, t};

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Embedded JavaScript for HTML report interactivity / HTML 报告交互性的嵌入式 JavaScript
const HTML_SCRIPT: &str = include_str!("assets/report.js");

/// Renders the HTML report for `results` into a string.
///
/// 将 `results` 的 HTML 报告渲染为字符串。
pub fn render_html_report(results: &[RunResult], locale: &str) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html><html><head><meta charset='utf-8'><title>{}</title>",
        t!("html_report.title", locale = locale)
    ));
    html.push_str("<style>");
    html.push_str(HTML_STYLE);
    html.push_str("</style>");
    html.push_str("</head><body>");
    html.push_str(&format!(
        "<h1>{}</h1>",
        t!("html_report.main_header", locale = locale)
    ));

    let total = results.len();
    let not_found = results.iter().filter(|r| r.is_not_found()).count();
    let failed = results.iter().filter(|r| r.is_failure()).count() - not_found;
    let passed = total - failed - not_found;

    html.push_str("<div class='summary-container'>");
    for (count, class, label) in [
        (total, "", t!("html_report.summary.total", locale = locale)),
        (passed, "passed-text", t!("html_report.summary.passed", locale = locale)),
        (failed, "failed-text", t!("html_report.summary.failed", locale = locale)),
        (not_found, "not-found-text", t!("html_report.summary.not_found", locale = locale)),
    ] {
        html.push_str(&format!(
            "<div class='summary-item'><span class='count {class}'>{count}</span><span class='label'>{label}</span></div>"
        ));
    }
    html.push_str("</div>");

    html.push_str("<table><thead><tr>");
    html.push_str(&format!(
        "<th>{}</th>",
        t!("html_report.table.header.name", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='status-col'>{}</th>",
        t!("html_report.table.header.status", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='duration-cell'>{}</th>",
        t!("html_report.table.header.duration", locale = locale)
    ));
    html.push_str(&format!(
        "<th class='lines-cell'>{}</th>",
        t!("html_report.table.header.lines", locale = locale)
    ));
    html.push_str("</tr></thead><tbody>");

    for (i, result) in results.iter().enumerate() {
        let output_id = format!("output-{i}");
        let duration_str = if result.is_not_found() {
            "N/A".to_string()
        } else {
            format!("{:.3}ms", result.duration.as_secs_f64() * 1000.0)
        };
        let details = if result.is_failure() {
            result.failure_detail(locale)
        } else {
            result.lines.join("\n")
        };

        html.push_str("<tr>");
        html.push_str(&format!("<td>{}</td>", escape_html(&result.name)));
        html.push_str(&format!(
            "<td class='status-col'><div class='status-cell {}'>{}</div><div class='output-toggle' onclick=\"toggleOutput('{}')\">{}</div></td>",
            result.get_status_class(),
            result.get_status_str(locale),
            output_id,
            t!("html_report.toggle_output", locale = locale)
        ));
        html.push_str(&format!("<td class='duration-cell'>{duration_str}</td>"));
        html.push_str(&format!("<td class='lines-cell'>{}</td>", result.lines.len()));
        html.push_str("</tr>");
        html.push_str(&format!(
            "<tr id='{}' style='display:none;'><td colspan='4'><pre class='output-content'>{}</pre></td></tr>",
            output_id,
            escape_html(&details)
        ));
    }

    html.push_str("</tbody></table>");
    html.push_str("<script>");
    html.push_str(HTML_SCRIPT);
    html.push_str("</script></body></html>");
    html
}

/// Generates the HTML report and writes it to `output_path`, creating parent
/// directories as needed.
///
/// # Errors / 错误
/// Returns an error if the file cannot be written.
///
/// 生成 HTML 报告并写入 `output_path`，根据需要创建父目录。
pub fn generate_html_report(results: &[RunResult], output_path: &Path, locale: &str) -> Result<()> {
    ensure_parent_dir(output_path)?;
    fs::write(output_path, render_html_report(results, locale))
        .with_context(|| format!("Failed to write HTML report: {}", output_path.display()))
}

/// Simple HTML escape function to replace special characters with their HTML entities
/// 简单的 HTML 转义函数，用 HTML 实体替换特殊字符
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
