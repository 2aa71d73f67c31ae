//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Pattern Runner:
//! the scenario registry, run planning and execution, the result models,
//! configuration and transcript handling.
//!
//! 此模块包含 Pattern Runner 的核心功能：
//! 场景注册表、运行计划与执行、结果模型、配置和转录处理。

pub mod config;
pub mod execution;
pub mod models;
pub mod planner;
pub mod registry;
pub mod transcript;

// Re-exports
pub use config::RunConfig;
pub use execution::ScenarioRunner;
pub use models::{FailureReason, RunResult};
pub use registry::{RegistryError, ScenarioRegistry};
