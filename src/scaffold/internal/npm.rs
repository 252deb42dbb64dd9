//! Package manager invocations

use anyhow::{bail, Context, Result};
use colored::*;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run `<npm> init -y` inside `project_dir`.
pub fn init(npm: &Path, project_dir: &Path) -> Result<()> {
    run(npm, project_dir, &["init", "-y"])
}

/// Install runtime packages, then development packages with `--save-dev`.
///
/// The second install is not attempted when the first one fails.
pub fn install(
    npm: &Path,
    project_dir: &Path,
    dependencies: &[String],
    dev_dependencies: &[String],
) -> Result<()> {
    let mut args = vec!["install"];
    args.extend(dependencies.iter().map(String::as_str));
    run(npm, project_dir, &args).context("Base install failed")?;
    println!("   {} base install is done", "✓".green());

    let mut args = vec!["install"];
    args.extend(dev_dependencies.iter().map(String::as_str));
    args.push("--save-dev");
    run(npm, project_dir, &args).context("Dev install failed")
}

/// Spawn the package manager and wait for it; output streams to the terminal.
fn run(npm: &Path, project_dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new(npm)
        .args(args)
        .current_dir(project_dir)
        .stdin(Stdio::null())
        .status()
        .with_context(|| format!("Failed to run {} {}", npm.display(), args.join(" ")))?;

    if !status.success() {
        bail!("{} {} exited with {}", npm.display(), args.join(" "), status);
    }
    Ok(())
}
