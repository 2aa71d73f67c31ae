//! # Pattern Catalog Module / 模式目录模块
//!
//! The compiled-in list of design pattern demonstrations, one scenario per
//! pattern, grouped by category. The order of `CATALOG` is the registration
//! order and therefore the order every run reports in.
//!
//! 编译期内置的设计模式演示列表，每个模式一个场景，按类别分组。
//! `CATALOG` 的顺序即注册顺序，也是每次运行报告的顺序。

pub mod behavioral;
pub mod creational;
pub mod structural;

use std::fmt;

use crate::core::{ScenarioRegistry, ScenarioRunner, registry::RegistryError};

/// The three families of the classic pattern catalog.
/// 经典模式目录的三个类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Creational => "creational",
            Category::Structural => "structural",
            Category::Behavioral => "behavioral",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single compiled-in demonstration.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub category: Category,
    pub run: fn() -> anyhow::Result<Vec<String>>,
}

const fn entry(
    name: &'static str,
    category: Category,
    run: fn() -> anyhow::Result<Vec<String>>,
) -> CatalogEntry {
    CatalogEntry {
        name,
        category,
        run,
    }
}

pub const CATALOG: &[CatalogEntry] = &[
    entry("factory", Category::Creational, creational::factory),
    entry("abstract_factory", Category::Creational, creational::abstract_factory),
    entry("builder", Category::Creational, creational::builder),
    entry("prototype", Category::Creational, creational::prototype),
    entry("singleton", Category::Creational, creational::singleton),
    entry("adapter", Category::Structural, structural::adapter),
    entry("bridge", Category::Structural, structural::bridge),
    entry("composite", Category::Structural, structural::composite),
    entry("decorator", Category::Structural, structural::decorator),
    entry("facade", Category::Structural, structural::facade),
    entry("flyweight", Category::Structural, structural::flyweight),
    entry("proxy", Category::Structural, structural::proxy),
    entry("chain_of_responsibility", Category::Behavioral, behavioral::chain_of_responsibility),
    entry("command", Category::Behavioral, behavioral::command),
    entry("interpreter", Category::Behavioral, behavioral::interpreter),
    entry("iterator", Category::Behavioral, behavioral::iterator),
    entry("mediator", Category::Behavioral, behavioral::mediator),
    entry("memento", Category::Behavioral, behavioral::memento),
    entry("observer", Category::Behavioral, behavioral::observer),
    entry("state", Category::Behavioral, behavioral::state),
    entry("strategy", Category::Behavioral, behavioral::strategy),
    entry("template_method", Category::Behavioral, behavioral::template_method),
    entry("visitor", Category::Behavioral, behavioral::visitor),
];

/// Looks up the category of a catalog scenario.
/// 查找目录场景的类别。
pub fn category_of(name: &str) -> Option<Category> {
    CATALOG
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.category)
}

/// Registers every catalog entry into `registry`, in catalog order.
///
/// # Errors
/// Fails if one of the names is already present in `registry`.
pub fn register_all(registry: &mut ScenarioRegistry) -> Result<(), RegistryError> {
    for entry in CATALOG {
        registry.register(entry.name, entry.run)?;
    }
    Ok(())
}

/// A runner pre-populated with the whole catalog.
/// 预先填充了整个目录的运行器。
pub fn builtin_runner() -> Result<ScenarioRunner, RegistryError> {
    let mut registry = ScenarioRegistry::new();
    register_all(&mut registry)?;
    Ok(ScenarioRunner::with_registry(registry))
}
