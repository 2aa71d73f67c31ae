//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command, which executes the selected
//! scenarios, prints their output and a summary, and optionally exports HTML
//! and JSON reports.
//!
//! 此模块实现 `run` 命令，执行所选场景，打印其输出和摘要，
//! 并可选择导出 HTML 和 JSON 报告。

use anyhow::Result;
use colored::*;

use crate::{
    commands::{RunArgs, Session},
    infra::t,
    reporting::{
        generate_html_report, generate_json_report, print_failure_details, print_outputs,
        print_summary,
    },
};

/// Executes the run command with the provided arguments.
///
/// # Returns
/// An error if any requested scenario failed or was not found.
pub async fn execute(args: RunArgs, lang_override: Option<String>) -> Result<()> {
    let session = Session::prepare(&args, lang_override)?;
    let locale = session.locale.as_str();

    let results = session.execute().await;

    print_outputs(&results);
    print_summary(&results, locale);

    if let Some(report_path) = &args.html {
        println!(
            "\n{}",
            t!("generating_html_report", locale = locale, path = report_path.display())
        );
        if let Err(e) = generate_html_report(&results, report_path, locale) {
            eprintln!("{} {:#}", t!("html_report_failed", locale = locale).red(), e);
        }
    }

    if let Some(report_path) = &args.json {
        println!(
            "\n{}",
            t!("generating_json_report", locale = locale, path = report_path.display())
        );
        if let Err(e) = generate_json_report(&results, report_path, locale) {
            eprintln!("{} {:#}", t!("json_report_failed", locale = locale).red(), e);
        }
    }

    if results.iter().any(|r| r.is_failure()) {
        print_failure_details(&results, locale);
        anyhow::bail!(t!("run_failed", locale = locale).to_string());
    }

    println!("\n{}", t!("all_scenarios_passed", locale = locale).green().bold());
    Ok(())
}
