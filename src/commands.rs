//! # Commands Module / 命令模块
//!
//! Implementations of the CLI subcommands and the setup they share: loading
//! the run configuration, resolving the locale, building the catalog runner
//! and executing the requested selection.
//!
//! CLI 子命令的实现及其共享的准备工作：加载运行配置、解析语言环境、
//! 构建目录运行器并执行请求的选择。

pub mod list;
pub mod run;
pub mod transcript;

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use crate::{
    catalog,
    core::{RunConfig, RunResult, ScenarioRunner, execution::default_jobs},
    infra::t,
    resolve_locale,
};

/// Arguments shared by `run`, `record` and `verify`.
/// `run`、`record` 和 `verify` 共享的参数。
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    pub names: Vec<String>,
    pub jobs: Option<usize>,
    pub config: Option<PathBuf>,
    pub html: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub transcripts: Option<PathBuf>,
}

/// Everything a command needs after setup.
pub(crate) struct Session {
    pub runner: ScenarioRunner,
    pub config: RunConfig,
    pub locale: String,
    pub names: Option<Vec<String>>,
}

impl Session {
    /// Loads the configuration and builds the runner. Command-line values take
    /// precedence over the config file.
    pub fn prepare(args: &RunArgs, lang_override: Option<String>) -> Result<Self> {
        let (config, config_path) = RunConfig::load(args.config.as_deref())?;

        let locale = resolve_locale(lang_override.as_deref().or(config.language.as_deref()));
        rust_i18n::set_locale(&locale);

        if let Some(path) = &config_path {
            println!(
                "{}",
                t!("config_loaded", locale = &locale, path = path.display())
            );
        }

        let jobs = args.jobs.or(config.jobs).unwrap_or_else(default_jobs);
        let runner = catalog::builtin_runner()?.with_jobs(jobs);

        let names = if args.names.is_empty() {
            config.selection().map(<[String]>::to_vec)
        } else {
            Some(args.names.clone())
        };

        Ok(Self {
            runner,
            config,
            locale,
            names,
        })
    }

    /// Runs the selection, announcing it first.
    pub async fn execute(&self) -> Vec<RunResult> {
        let plan = self.runner.plan(self.names.as_deref());

        for name in &plan.missing {
            println!(
                "{}",
                t!("unknown_scenario", locale = &self.locale, name = name).yellow()
            );
        }
        println!(
            "{}",
            t!(
                "running_scenarios",
                locale = &self.locale,
                count = plan.scheduled.len(),
                jobs = self.runner.jobs()
            )
            .bold()
        );

        self.runner.execute(plan).await
    }
}
