//! # Planner Unit Tests / 计划器单元测试
//!
//! Tests for resolving run requests against the registry.
//!
//! 根据注册表解析运行请求的测试。

use pattern_runner::core::planner::plan_run;
use pattern_runner::core::registry::ScenarioRegistry;

fn registry() -> ScenarioRegistry {
    let mut registry = ScenarioRegistry::new();
    for name in ["factory", "builder", "singleton"] {
        registry.register(name, || Ok(vec![])).unwrap();
    }
    registry
}

fn scheduled_names(plan: &pattern_runner::core::planner::RunPlan) -> Vec<(usize, String)> {
    plan.scheduled
        .iter()
        .map(|(index, scenario)| (*index, scenario.name().to_string()))
        .collect()
}

#[test]
fn test_no_selection_schedules_everything() {
    let plan = plan_run::<&str>(&registry(), None);
    assert_eq!(
        scheduled_names(&plan),
        vec![
            (0, "factory".to_string()),
            (1, "builder".to_string()),
            (2, "singleton".to_string())
        ]
    );
    assert!(plan.missing.is_empty());
    assert_eq!(plan.len(), 3);
}

#[test]
fn test_selection_follows_registration_order() {
    let plan = plan_run(&registry(), Some(&["singleton", "factory"][..]));
    assert_eq!(
        scheduled_names(&plan),
        vec![(0, "factory".to_string()), (2, "singleton".to_string())]
    );
}

#[test]
fn test_unknown_names_are_collected_once() {
    let plan = plan_run(
        &registry(),
        Some(&["ghost", "builder", "ghost", "phantom"][..]),
    );
    assert_eq!(scheduled_names(&plan), vec![(1, "builder".to_string())]);
    assert_eq!(plan.missing, vec!["ghost".to_string(), "phantom".to_string()]);
    assert_eq!(plan.len(), 3);
}

#[test]
fn test_repeated_names_are_scheduled_once() {
    let plan = plan_run(&registry(), Some(&["builder", "builder"][..]));
    assert_eq!(plan.scheduled.len(), 1);
}

#[test]
fn test_empty_selection_is_empty_plan() {
    let names: Vec<String> = Vec::new();
    let plan = plan_run(&registry(), Some(names.as_slice()));
    assert!(plan.is_empty());
}
