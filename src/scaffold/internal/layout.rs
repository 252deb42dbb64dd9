//! Directory builder

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Create a single directory; its parent must already exist.
///
/// An existing directory is reported as a failure of its own so the caller
/// can tell a re-run apart from a permission or path problem.
pub fn make_dir(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            bail!("{} already exists", path.display())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to create {}", path.display())),
    }
}
