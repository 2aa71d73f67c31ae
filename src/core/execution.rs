//! # Scenario Execution Engine Module / 场景执行引擎模块
//!
//! This module provides the `ScenarioRunner`, which owns the registry and
//! executes scenarios in isolation. Each scenario runs on the blocking pool so
//! that an error or a panic inside it is contained at the task boundary and
//! turned into a failed `RunResult` instead of reaching the caller.
//!
//! 此模块提供 `ScenarioRunner`，它拥有注册表并隔离地执行场景。
//! 每个场景在阻塞线程池上运行，因此其内部的错误或 panic 被限制在任务边界内，
//! 并转换为失败的 `RunResult`，而不会传递给调用者。

use futures::{StreamExt, stream};
use std::any::Any;
use std::time::{Duration, Instant};
use tokio::task::JoinError;

use crate::core::{
    models::RunResult,
    planner::{RunPlan, plan_run},
    registry::{RegistryError, Scenario, ScenarioRegistry},
};

/// Default parallelism, the same heuristic the CLI uses when `--jobs` is absent.
/// 默认并行度，与 CLI 在未指定 `--jobs` 时使用的启发式方法相同。
pub fn default_jobs() -> usize {
    num_cpus::get() / 2 + 1
}

/// Registers scenarios, then runs them any number of times.
///
/// Registration takes `&mut self` while listing and running take `&self`, so
/// the registry cannot change once a run is in flight.
///
/// 注册场景，然后可多次运行它们。
/// 注册需要 `&mut self`，而列出和运行只需要 `&self`，因此运行期间注册表不会改变。
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    registry: ScenarioRegistry,
    jobs: usize,
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::with_registry(ScenarioRegistry::new())
    }

    pub fn with_registry(registry: ScenarioRegistry) -> Self {
        Self {
            registry,
            jobs: default_jobs(),
        }
    }

    /// Caps how many scenarios execute at once. Values below 1 are treated as 1.
    /// 限制同时执行的场景数量。小于 1 的值视为 1。
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    pub fn registry(&self) -> &ScenarioRegistry {
        &self.registry
    }

    /// Adds a scenario.
    ///
    /// # Errors
    /// [`RegistryError::DuplicateName`] if `name` is already registered.
    pub fn register<F>(&mut self, name: impl Into<String>, operation: F) -> Result<(), RegistryError>
    where
        F: Fn() -> anyhow::Result<Vec<String>> + Send + Sync + 'static,
    {
        self.registry.register(name, operation)
    }

    /// Registered names in registration order.
    /// 按注册顺序列出的已注册名称。
    pub fn list(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.registry.list()
    }

    /// Resolves `names` without running anything.
    pub fn plan<S: AsRef<str>>(&self, names: Option<&[S]>) -> RunPlan {
        plan_run(&self.registry, names)
    }

    /// Runs every registered scenario.
    pub async fn run_all(&self) -> Vec<RunResult> {
        self.run::<&str>(None).await
    }

    /// Runs the requested scenarios, or all of them when `names` is `None`.
    ///
    /// Results for registered names come back in registration order no matter
    /// which finished first, followed by one `NotFound` result per unknown
    /// name. Every scenario operation is invoked exactly once per call.
    ///
    /// 运行请求的场景，若 `names` 为 `None` 则运行全部。
    /// 已注册名称的结果按注册顺序返回（无论哪个先完成），
    /// 之后为每个未知名称返回一个 `NotFound` 结果。每次调用中每个场景操作只调用一次。
    pub async fn run<S: AsRef<str>>(&self, names: Option<&[S]>) -> Vec<RunResult> {
        let plan = self.plan(names);
        self.execute(plan).await
    }

    /// Executes an already resolved plan.
    pub async fn execute(&self, plan: RunPlan) -> Vec<RunResult> {
        let RunPlan { scheduled, missing } = plan;

        let mut completed: Vec<(usize, RunResult)> = stream::iter(
            scheduled
                .into_iter()
                .map(|(index, scenario)| async move { (index, run_scenario(scenario).await) }),
        )
        .buffer_unordered(self.jobs)
        .collect()
        .await;

        completed.sort_by_key(|(index, _)| *index);

        let mut results: Vec<RunResult> = completed.into_iter().map(|(_, result)| result).collect();
        results.extend(missing.into_iter().map(RunResult::not_found));
        results
    }
}

/// Runs a single scenario on the blocking pool and converts its outcome into a
/// `RunResult`. Never fails: errors and panics become `Fault` results.
///
/// 在阻塞线程池上运行单个场景，并将其结果转换为 `RunResult`。
/// 永不失败：错误和 panic 都会变成 `Fault` 结果。
pub async fn run_scenario(scenario: Scenario) -> RunResult {
    let name = scenario.name().to_string();

    let handle = tokio::task::spawn_blocking(move || {
        let start_time = Instant::now();
        let outcome = scenario.invoke();
        (outcome, start_time.elapsed())
    });

    match handle.await {
        Ok((Ok(lines), duration)) => RunResult::passed(name, lines, duration),
        Ok((Err(e), duration)) => RunResult::fault(name, format!("{e:#}"), duration),
        Err(e) => RunResult::fault(name, describe_join_error(e), Duration::ZERO),
    }
}

fn describe_join_error(err: JoinError) -> String {
    if err.is_panic() {
        format!("panicked: {}", panic_message(err.into_panic().as_ref()))
    } else {
        err.to_string()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
