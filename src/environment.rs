use anyhow::{bail, Context, Result};
use colored::*;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::config::ScaffoldConfig;

/// An external tool that was found on PATH and answered `--version`
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: String,
    pub path: PathBuf,
    pub version: Option<String>,
}

/// Locate `name` on PATH and run it with `--version`.
///
/// Fails if the executable cannot be resolved, cannot be spawned, or exits
/// with a non-zero status.
pub fn check_tool(name: &str) -> Result<ToolInfo> {
    let path = which::which(name).with_context(|| format!("{name} not found on PATH"))?;

    let output = Command::new(&path)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("Failed to run {} --version", path.display()))?;

    if !output.status.success() {
        bail!("{name} --version exited with {}", output.status);
    }

    let version = String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty());

    Ok(ToolInfo {
        name: name.to_string(),
        path,
        version,
    })
}

/// The two executables a scaffold run depends on
#[derive(Debug, Clone)]
pub struct RequiredTools {
    pub package_manager: ToolInfo,
    pub runtime: ToolInfo,
}

/// Check the package manager and then the runtime, printing a status line per tool.
///
/// Stops at the first tool that is missing or unusable.
pub fn check_required_tools(config: &ScaffoldConfig) -> Result<RequiredTools> {
    let package_manager = report_check(&config.package_manager)?;
    let runtime = report_check(&config.runtime)?;

    println!("{}", "check is done!".green());
    Ok(RequiredTools {
        package_manager,
        runtime,
    })
}

fn report_check(name: &str) -> Result<ToolInfo> {
    println!("🔍 check {name}...");
    match check_tool(name) {
        Ok(info) => {
            println!(
                "   {} {}",
                "✓".green().bold(),
                info.version.as_deref().unwrap_or("installed").dimmed()
            );
            Ok(info)
        }
        Err(e) => {
            println!("   {} {:#}", "✗".red().bold(), e);
            println!("{}", "check is failed!".red());
            Err(e)
        }
    }
}
