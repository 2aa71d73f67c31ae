//! # List Command Module / 列表命令模块
//!
//! Prints the registered scenarios in registration order.
//!
//! 按注册顺序打印已注册的场景。

use anyhow::Result;
use colored::*;

use crate::{catalog, infra::t};

pub fn execute(locale: &str) -> Result<()> {
    let runner = catalog::builtin_runner()?;

    println!("{}", t!("list_banner", locale = locale).bold());
    for (i, name) in runner.list().enumerate() {
        let category = catalog::category_of(name)
            .map(|c| c.as_str())
            .unwrap_or("-");
        println!("  {:>2}. {:<26} {}", i + 1, name, category.dimmed());
    }
    println!(
        "\n{}",
        t!("list_total", locale = locale, count = runner.list().count())
    );
    Ok(())
}
