//! Provision a React + webpack + Babel project tree
//!
//! Public interface only; the steps live in `internal/`.
//!
//! # Example
//!
//! ```no_run
//! use react_scaffold::config::ScaffoldConfig;
//! use react_scaffold::scaffold::Scaffold;
//!
//! let report = Scaffold::new(".", ScaffoldConfig::default(), "npm").run();
//! for failed in report.failed() {
//!     eprintln!("{} failed", failed.step);
//! }
//! ```

mod internal;

use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;

pub use internal::report::{ScaffoldReport, Step, StepResult};
pub use internal::templates::Artifact;

pub struct Scaffold {
    base_dir: PathBuf,
    config: ScaffoldConfig,
    package_manager: PathBuf,
}

impl Scaffold {
    /// `base_dir` receives the project directory; `package_manager` is the
    /// executable used for `init` and `install`.
    pub fn new(
        base_dir: impl AsRef<Path>,
        config: ScaffoldConfig,
        package_manager: impl Into<PathBuf>,
    ) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            config,
            package_manager: package_manager.into(),
        }
    }

    /// Directory the project is generated into
    pub fn project_dir(&self) -> PathBuf {
        self.base_dir.join(&self.config.root_dir)
    }

    /// Steps `run` will attempt, in order
    pub fn plan(&self) -> Vec<Step> {
        internal::plan(&self.config)
    }

    /// Run every step once, continuing past failures.
    ///
    /// The environment check is not part of the run; callers gate on
    /// [`crate::environment::check_required_tools`] first.
    pub fn run(&self) -> ScaffoldReport {
        internal::run_pipeline(&internal::RunContext {
            base_dir: &self.base_dir,
            config: &self.config,
            package_manager: &self.package_manager,
        })
    }
}
