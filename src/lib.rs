//! # Pattern Runner Library / Pattern Runner 库
//!
//! This library provides a catalog of Vehicle-themed design pattern
//! demonstrations and the scenario runner that executes them in isolation,
//! captures their output and verifies it against golden transcripts.
//!
//! 此库提供以车辆为主题的设计模式演示目录，
//! 以及隔离执行这些演示、捕获其输出并与黄金转录进行验证的场景运行器。
//!
//! ## Modules / 模块
//!
//! - `core` - Scenario registry, run planning and execution, result models
//! - `catalog` - The built-in pattern demonstrations
//! - `infra` - File system operations and i18n support
//! - `reporting` - Console, HTML and JSON reports
//! - `cli` / `commands` - Command-line interface and commands
//!
//! - `core` - 场景注册表、运行计划与执行、结果模型
//! - `catalog` - 内置的模式演示
//! - `infra` - 文件系统操作和国际化支持
//! - `reporting` - 控制台、HTML 和 JSON 报告
//! - `cli` / `commands` - 命令行接口和命令

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::execution;
pub use crate::core::models;
pub use crate::core::{FailureReason, RegistryError, RunResult, ScenarioRegistry, ScenarioRunner};

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");

/// Resolves the language for the application's messages.
///
/// The requested language (from `--lang` or the config file) wins when given,
/// otherwise the system locale is used. It attempts to match the full locale
/// (e.g., "zh-CN"), then just the language code (e.g., "en"), and finally
/// falls back to the default language ("en").
pub fn resolve_locale(requested: Option<&str>) -> String {
    let locale = requested
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    let lang = if available_locales.contains(&locale.as_str()) {
        locale.as_str()
    } else {
        locale
            .split(['-', '_'])
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    lang.to_string()
}
