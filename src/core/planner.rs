//! # Run Planner Module / 运行计划模块
//!
//! This module resolves a run request (an optional list of names) against the
//! registry, producing the scenarios to schedule in registration order and the
//! names that could not be found.
//!
//! 此模块根据注册表解析运行请求（可选的名称列表），
//! 生成按注册顺序调度的场景以及找不到的名称。

use crate::core::registry::{Scenario, ScenarioRegistry};

/// Represents a resolved run request.
/// 表示已解析的运行请求。
#[derive(Debug, Default)]
pub struct RunPlan {
    /// Scenarios to execute, paired with their registration index, in
    /// registration order. Each scenario appears at most once.
    /// 要执行的场景及其注册索引，按注册顺序排列。每个场景最多出现一次。
    pub scheduled: Vec<(usize, Scenario)>,
    /// Requested names that are not registered, in request order, deduplicated.
    /// 未注册的请求名称，按请求顺序排列并去重。
    pub missing: Vec<String>,
}

impl RunPlan {
    /// Number of results a run of this plan yields.
    pub fn len(&self) -> usize {
        self.scheduled.len() + self.missing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scheduled.is_empty() && self.missing.is_empty()
    }
}

/// Creates a run plan. `None` selects every registered scenario.
///
/// 创建运行计划。`None` 选择所有已注册的场景。
pub fn plan_run<S: AsRef<str>>(registry: &ScenarioRegistry, names: Option<&[S]>) -> RunPlan {
    let Some(names) = names else {
        return RunPlan {
            scheduled: registry.scenarios().iter().cloned().enumerate().collect(),
            missing: Vec::new(),
        };
    };

    let mut selected = vec![false; registry.len()];
    let mut missing: Vec<String> = Vec::new();

    for name in names {
        let name = name.as_ref();
        match registry.position(name) {
            Some(index) => selected[index] = true,
            None => {
                if !missing.iter().any(|m| m == name) {
                    missing.push(name.to_string());
                }
            }
        }
    }

    let scheduled = registry
        .scenarios()
        .iter()
        .enumerate()
        .filter(|(index, _)| selected[*index])
        .map(|(index, scenario)| (index, scenario.clone()))
        .collect();

    RunPlan { scheduled, missing }
}
