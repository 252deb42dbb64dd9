//! Internal implementation for the scaffold pipeline

pub mod layout;
pub mod manifest;
pub mod npm;
pub mod report;
pub mod templates;

use anyhow::Result;
use colored::*;
use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;

use self::report::{ScaffoldReport, Step};
use self::templates::Artifact;

/// Everything a step needs to locate its inputs and outputs
pub struct RunContext<'a> {
    pub base_dir: &'a Path,
    pub config: &'a ScaffoldConfig,
    pub package_manager: &'a Path,
}

impl RunContext<'_> {
    fn project_dir(&self) -> PathBuf {
        self.base_dir.join(&self.config.root_dir)
    }
}

/// The fixed step sequence; directories precede the files placed in them.
pub fn plan(config: &ScaffoldConfig) -> Vec<Step> {
    let root = PathBuf::from(&config.root_dir);
    let src = root.join("src");
    let components = src.join("components");

    vec![
        Step::CreateDir(root.clone()),
        Step::InitPackage,
        Step::InstallDependencies,
        Step::PatchManifest,
        Step::Emit(Artifact::WebpackConfig),
        Step::Emit(Artifact::Babelrc),
        Step::CreateDir(src),
        Step::CreateDir(components.clone()),
        Step::CreateDir(components.join("App")),
        Step::Emit(Artifact::AppComponent),
        Step::Emit(Artifact::IndexJs),
        Step::CreateDir(root.join("public")),
        Step::Emit(Artifact::IndexHtml),
    ]
}

/// Execute every planned step in order. Failures are recorded, never propagated.
pub fn run_pipeline(ctx: &RunContext<'_>) -> ScaffoldReport {
    let mut report = ScaffoldReport::default();

    for step in plan(ctx.config) {
        println!("📦 {step}...");
        let outcome = execute(&step, ctx);
        match &outcome {
            Ok(()) => println!("   {} done", "✓".green().bold()),
            Err(e) => println!("   {} {:#}", "✗".red().bold(), e),
        }
        report.record(step, outcome);
    }

    report
}

fn execute(step: &Step, ctx: &RunContext<'_>) -> Result<()> {
    let project_dir = ctx.project_dir();
    match step {
        Step::CreateDir(relative) => layout::make_dir(&ctx.base_dir.join(relative)),
        Step::InitPackage => npm::init(ctx.package_manager, &project_dir),
        Step::InstallDependencies => npm::install(
            ctx.package_manager,
            &project_dir,
            &ctx.config.dependencies,
            &ctx.config.dev_dependencies,
        ),
        Step::PatchManifest => {
            manifest::set_scripts(&project_dir.join("package.json"), &ctx.config.scripts)
        }
        Step::Emit(artifact) => artifact.emit(&project_dir, ctx.config),
    }
}
