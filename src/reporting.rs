//! # Reporting Module / 报告模块
//!
//! This module handles the display and export of run results in multiple formats:
//! coloured console output, a self-contained HTML report and a JSON report.
//!
//! 此模块处理多种格式的运行结果显示和导出：
//! 彩色控制台输出、独立的 HTML 报告和 JSON 报告。

pub mod console;
pub mod html;
pub mod json;

// Re-export common reporting functions
pub use console::{print_failure_details, print_outputs, print_summary, print_verification};
pub use html::generate_html_report;
pub use json::generate_json_report;
