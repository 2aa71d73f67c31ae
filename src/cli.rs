// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::{
    commands::{self, RunArgs},
    infra::t,
};

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang=").map(str::to_string))
}

fn scenario_args(locale: &str) -> [Arg; 3] {
    [
        Arg::new("names")
            .help(t!("arg_names", locale = locale).to_string())
            .value_name("SCENARIO")
            .num_args(0..)
            .action(ArgAction::Append),
        Arg::new("jobs")
            .short('j')
            .long("jobs")
            .help(t!("arg_jobs", locale = locale).to_string())
            .value_name("JOBS")
            .value_parser(clap::value_parser!(usize))
            .action(ArgAction::Set),
        Arg::new("config")
            .short('c')
            .long("config")
            .help(t!("arg_config", locale = locale).to_string())
            .value_name("CONFIG")
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set),
    ]
}

fn transcripts_arg(locale: &str) -> Arg {
    Arg::new("transcripts")
        .short('t')
        .long("transcripts")
        .help(t!("arg_transcripts", locale = locale).to_string())
        .value_name("DIR")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("pattern-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(Command::new("list").about(t!("cmd_list_about", locale = locale).to_string()))
        .subcommand(
            Command::new("run")
                .about(t!("cmd_run_about", locale = locale).to_string())
                .args(scenario_args(locale))
                .arg(
                    Arg::new("html")
                        .long("html")
                        .help(t!("arg_html", locale = locale).to_string())
                        .value_name("HTML")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help(t!("arg_json", locale = locale).to_string())
                        .value_name("JSON")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("record")
                .about(t!("cmd_record_about", locale = locale).to_string())
                .args(scenario_args(locale))
                .arg(transcripts_arg(locale)),
        )
        .subcommand(
            Command::new("verify")
                .about(t!("cmd_verify_about", locale = locale).to_string())
                .args(scenario_args(locale))
                .arg(transcripts_arg(locale)),
        )
}

fn run_args(matches: &ArgMatches) -> RunArgs {
    RunArgs {
        names: matches
            .get_many::<String>("names")
            .map(|names| names.cloned().collect())
            .unwrap_or_default(),
        jobs: matches.get_one::<usize>("jobs").copied(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        html: matches.try_get_one::<PathBuf>("html").ok().flatten().cloned(),
        json: matches.try_get_one::<PathBuf>("json").ok().flatten().cloned(),
        transcripts: matches
            .try_get_one::<PathBuf>("transcripts")
            .ok()
            .flatten()
            .cloned(),
    }
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let requested = pre_parse_language();
    let language = crate::resolve_locale(requested.as_deref());
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();
    let lang_override = requested;

    match matches.subcommand() {
        Some(("list", _)) => commands::list::execute(&language),
        Some(("run", run_matches)) => {
            commands::run::execute(run_args(run_matches), lang_override).await
        }
        Some(("record", record_matches)) => {
            commands::transcript::record(run_args(record_matches), lang_override).await
        }
        Some(("verify", verify_matches)) => {
            commands::transcript::verify(run_args(verify_matches), lang_override).await
        }
        _ => {
            // Clap has already printed help info.
            Ok(())
        }
    }
}
