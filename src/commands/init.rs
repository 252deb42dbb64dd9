//! Provision a new project in the current directory

use anyhow::Result;
use colored::*;

use react_scaffold::environment::check_required_tools;
use react_scaffold::scaffold::{Scaffold, ScaffoldReport};
use react_scaffold::ScaffoldConfig;

/// Run the whole scaffold and return the process exit code.
///
/// Only a missing or broken package manager/runtime yields 1; failed steps
/// after that are reported and the run still exits 0.
pub fn execute() -> Result<i32> {
    println!("{}", "🚀 React Scaffold".bold().blue());

    let base_dir = std::env::current_dir()?;
    let config = ScaffoldConfig::load(&base_dir)?;

    let tools = match check_required_tools(&config) {
        Ok(tools) => tools,
        Err(_) => {
            eprintln!(
                "{}",
                format!(
                    "{} or {} is not installed",
                    config.package_manager, config.runtime
                )
                .red()
                .bold()
            );
            return Ok(1);
        }
    };

    let scaffold = Scaffold::new(&base_dir, config, tools.package_manager.path);
    let report = scaffold.run();
    display_summary(&report, &scaffold);

    Ok(0)
}

fn display_summary(report: &ScaffoldReport, scaffold: &Scaffold) {
    println!();
    if report.is_clean() {
        println!(
            "{} {} steps completed",
            "✅".green(),
            report.succeeded()
        );
    } else {
        println!(
            "{} {} of {} steps completed",
            "⚠️ ".yellow(),
            report.succeeded(),
            report.steps.len()
        );
        for failed in report.failed() {
            if let Err(reason) = &failed.outcome {
                println!("   {} {}: {}", "✗".red().bold(), failed.step, reason);
            }
        }
    }
    println!("   Project: {}", scaffold.project_dir().display());
}
