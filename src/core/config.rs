use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when `--config` is not given.
/// 未指定 `--config` 时在工作目录中查找的文件。
pub const DEFAULT_CONFIG_FILE: &str = "Patterns.toml";

/// Transcript directory used when neither the CLI nor the config names one.
/// CLI 和配置都未指定时使用的转录目录。
pub const DEFAULT_TRANSCRIPTS_DIR: &str = "transcripts";

/// Represents the run configuration, loaded from a TOML file.
/// Every field is optional; command-line flags take precedence over it.
///
/// 代表从 TOML 文件加载的运行配置。
/// 每个字段都是可选的；命令行参数优先于配置文件。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    #[serde(default)]
    pub language: Option<String>,

    /// Maximum number of scenarios executed at once.
    /// 同时执行的最大场景数。
    #[serde(default)]
    pub jobs: Option<usize>,

    /// Default selection of scenarios. Empty means all of them.
    /// 默认选择的场景。为空表示全部。
    #[serde(default)]
    pub scenarios: Vec<String>,

    /// Directory holding golden transcripts.
    /// 存放黄金转录文件的目录。
    #[serde(default)]
    pub transcripts: Option<PathBuf>,
}

impl RunConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse run configuration")
    }

    /// Reads and parses the configuration at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Loads the configuration for a command.
    ///
    /// An explicitly passed path must exist. Without one, `Patterns.toml` in the
    /// current directory is used if present, otherwise defaults apply.
    ///
    /// 为命令加载配置。显式传入的路径必须存在。
    /// 未传入时，若当前目录存在 `Patterns.toml` 则使用它，否则使用默认值。
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        match explicit {
            Some(path) => Ok((Self::from_file(path)?, Some(path.to_path_buf()))),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Ok((Self::from_file(fallback)?, Some(fallback.to_path_buf())))
                } else {
                    Ok((Self::default(), None))
                }
            }
        }
    }

    /// The scenario selection, `None` when everything should run.
    pub fn selection(&self) -> Option<&[String]> {
        if self.scenarios.is_empty() {
            None
        } else {
            Some(&self.scenarios)
        }
    }

    pub fn transcripts_dir(&self) -> PathBuf {
        self.transcripts
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TRANSCRIPTS_DIR))
    }
}
