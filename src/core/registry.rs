//! # Scenario Registry Module / 场景注册表模块
//!
//! This module holds the write-once-then-read-only mapping of scenario names
//! to their operations. Scenarios keep the order in which they were registered,
//! which is the order every run reports them in.
//!
//! 此模块保存场景名称到其操作的映射，先写入后只读。
//! 场景保持注册时的顺序，每次运行都按此顺序报告。

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// The operation behind a scenario: a zero-argument function producing the
/// ordered output lines, or failing.
/// 场景背后的操作：一个无参数函数，生成有序的输出行或失败。
pub type ScenarioFn = dyn Fn() -> anyhow::Result<Vec<String>> + Send + Sync;

/// Errors raised while populating the registry.
/// 填充注册表时引发的错误。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A scenario with this name is already registered.
    /// 已注册同名场景。
    #[error("scenario '{0}' is already registered")]
    DuplicateName(String),
}

/// A named, pure, deterministic demonstration unit.
/// Cloning is cheap: the operation is shared behind an `Arc`.
///
/// 一个具名的、纯粹的、确定性的演示单元。
/// 克隆成本很低：操作通过 `Arc` 共享。
#[derive(Clone)]
pub struct Scenario {
    name: String,
    operation: Arc<ScenarioFn>,
}

impl Scenario {
    pub fn new<F>(name: impl Into<String>, operation: F) -> Self
    where
        F: Fn() -> anyhow::Result<Vec<String>> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            operation: Arc::new(operation),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the operation once.
    /// 调用一次操作。
    pub fn invoke(&self) -> anyhow::Result<Vec<String>> {
        (self.operation)()
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of uniquely named scenarios.
/// 具有唯一名称的有序场景集合。
#[derive(Debug, Default, Clone)]
pub struct ScenarioRegistry {
    scenarios: Vec<Scenario>,
}

impl ScenarioRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scenario at the end of the registration order.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateName`] when the name is taken. The
    /// registry is left untouched in that case.
    ///
    /// 在注册顺序末尾添加一个场景。名称已被占用时返回错误，注册表保持不变。
    pub fn register<F>(&mut self, name: impl Into<String>, operation: F) -> Result<(), RegistryError>
    where
        F: Fn() -> anyhow::Result<Vec<String>> + Send + Sync + 'static,
    {
        self.insert(Scenario::new(name, operation))
    }

    /// Adds an already built scenario. Same rules as [`register`](Self::register).
    pub fn insert(&mut self, scenario: Scenario) -> Result<(), RegistryError> {
        if self.position(scenario.name()).is_some() {
            return Err(RegistryError::DuplicateName(scenario.name));
        }
        self.scenarios.push(scenario);
        Ok(())
    }

    /// Registered names in registration order. The iterator borrows the
    /// registry, so it can be recreated (or cloned) as often as needed.
    ///
    /// 按注册顺序返回已注册的名称。迭代器借用注册表，因此可以按需重新创建（或克隆）。
    pub fn list(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.scenarios.iter().map(Scenario::name)
    }

    pub fn get(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    /// Registration index of `name`, if registered.
    /// `name` 的注册索引（如果已注册）。
    pub fn position(&self, name: &str) -> Option<usize> {
        self.scenarios.iter().position(|s| s.name == name)
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
