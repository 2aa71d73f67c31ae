//! # Transcript Commands Module / 转录命令模块
//!
//! The `record` command writes golden transcripts for the selected scenarios;
//! the `verify` command runs them again and diffs the output against those
//! transcripts.
//!
//! `record` 命令为所选场景写入黄金转录；
//! `verify` 命令重新运行它们并将输出与这些转录进行比较。

use anyhow::{Result, bail};
use colored::*;
use std::path::PathBuf;

use crate::{
    commands::{RunArgs, Session},
    core::transcript,
    infra::t,
    reporting::{print_failure_details, print_verification},
};

fn transcripts_dir(args: &RunArgs, session: &Session) -> PathBuf {
    args.transcripts
        .clone()
        .unwrap_or_else(|| session.config.transcripts_dir())
}

/// Records a transcript for every selected scenario that succeeds.
///
/// # Returns
/// An error if any scenario failed, after the successful ones were written.
pub async fn record(args: RunArgs, lang_override: Option<String>) -> Result<()> {
    let session = Session::prepare(&args, lang_override)?;
    let locale = session.locale.as_str();
    let dir = transcripts_dir(&args, &session);

    let results = session.execute().await;
    let written = transcript::record(&dir, &results)?;

    for path in &written {
        println!("  {} {}", "+".green(), path.display());
    }
    println!(
        "\n{}",
        t!(
            "record_done",
            locale = locale,
            count = written.len(),
            path = dir.display()
        )
        .bold()
    );

    if results.iter().any(|r| r.is_failure()) {
        print_failure_details(&results, locale);
        bail!(t!("record_failed", locale = locale).to_string());
    }
    Ok(())
}

/// Verifies the selected scenarios against their transcripts.
///
/// # Returns
/// An error unless every scenario matches its transcript.
pub async fn verify(args: RunArgs, lang_override: Option<String>) -> Result<()> {
    let session = Session::prepare(&args, lang_override)?;
    let locale = session.locale.as_str();
    let dir = transcripts_dir(&args, &session);

    let results = session.execute().await;
    let checks = transcript::verify(&dir, &results)?;

    print_verification(&results, &checks, locale);
    print_failure_details(&results, locale);

    let mismatched = checks.iter().filter(|c| !c.is_match()).count();
    if mismatched > 0 {
        bail!(t!("verify_failed", locale = locale, count = mismatched).to_string());
    }

    println!(
        "\n{}",
        t!("verify_passed", locale = locale, count = checks.len()).green().bold()
    );
    Ok(())
}
