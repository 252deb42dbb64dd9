//! Step bookkeeping for a scaffold run

use std::fmt;
use std::path::PathBuf;

use super::templates::Artifact;

/// One stage of the scaffold pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Create a directory, relative to the invocation directory
    CreateDir(PathBuf),
    InitPackage,
    InstallDependencies,
    PatchManifest,
    Emit(Artifact),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::CreateDir(path) => write!(f, "create {} dir", path.display()),
            Step::InitPackage => f.write_str("init package.json"),
            Step::InstallDependencies => f.write_str("install dependencies"),
            Step::PatchManifest => f.write_str("add scripts to package.json"),
            Step::Emit(artifact) => write!(f, "create {artifact}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StepResult {
    pub step: Step,
    /// Error chain rendered as text on failure
    pub outcome: Result<(), String>,
}

impl StepResult {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Every step attempted by a run, in execution order
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    pub steps: Vec<StepResult>,
}

impl ScaffoldReport {
    pub fn record(&mut self, step: Step, outcome: anyhow::Result<()>) {
        self.steps.push(StepResult {
            step,
            outcome: outcome.map_err(|e| format!("{e:#}")),
        });
    }

    pub fn succeeded(&self) -> usize {
        self.steps.iter().filter(|s| s.is_ok()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &StepResult> {
        self.steps.iter().filter(|s| !s.is_ok())
    }

    pub fn is_clean(&self) -> bool {
        self.failed().next().is_none()
    }

    pub fn outcome_of(&self, step: &Step) -> Option<&Result<(), String>> {
        self.steps
            .iter()
            .find(|s| &s.step == step)
            .map(|s| &s.outcome)
    }
}
