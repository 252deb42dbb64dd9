//! End-to-end runs of the react-scaffold binary against fake npm/node
//!
//! Run with: cargo test --test scaffold_cli -- --nocapture

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const FAKE_NPM: &str = r#"#!/bin/sh
case "$1" in
  --version) echo 10.2.4 ;;
  init)
    if [ -n "$FAKE_NPM_FAIL_INIT" ]; then exit 1; fi
    printf '{\n  "name": "root",\n  "version": "1.0.0",\n  "scripts": {\n    "test": "echo test"\n  },\n  "license": "ISC"\n}\n' > package.json
    ;;
  install) ;;
esac
"#;

const FAKE_NODE: &str = "#!/bin/sh\necho v20.11.0\n";

struct Sandbox {
    _temp: TempDir,
    bin_dir: PathBuf,
    work_dir: PathBuf,
}

impl Sandbox {
    /// Empty work directory plus a PATH directory, optionally holding fake tools
    fn new(with_tools: bool) -> Self {
        let temp = TempDir::new().unwrap();
        let bin_dir = temp.path().join("bin");
        let work_dir = temp.path().join("work");
        fs::create_dir(&bin_dir).unwrap();
        fs::create_dir(&work_dir).unwrap();

        if with_tools {
            write_executable(&bin_dir.join("npm"), FAKE_NPM);
            write_executable(&bin_dir.join("node"), FAKE_NODE);
        }

        Self {
            _temp: temp,
            bin_dir,
            work_dir,
        }
    }

    fn run(&self, envs: &[(&str, &str)]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_react-scaffold"))
            .current_dir(&self.work_dir)
            .env("PATH", &self.bin_dir)
            .envs(envs.iter().copied())
            .output()
            .unwrap()
    }

    fn root(&self) -> PathBuf {
        self.work_dir.join("root")
    }
}

fn write_executable(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Every file under `dir`, relative to it, sorted
fn file_tree(dir: &Path) -> Vec<String> {
    fn walk(base: &Path, dir: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(base, &path, out);
            } else {
                let relative = path.strip_prefix(base).unwrap();
                out.push(relative.to_string_lossy().to_string());
            }
        }
    }

    let mut files = Vec::new();
    walk(dir, dir, &mut files);
    files.sort();
    files
}

#[test]
fn test_missing_tools_exit_one_without_mutation() {
    let sandbox = Sandbox::new(false);
    let output = sandbox.run(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("npm or node is not installed"));
    assert_eq!(fs::read_dir(&sandbox.work_dir).unwrap().count(), 0);
}

#[test]
fn test_full_run_produces_project_tree() {
    let sandbox = Sandbox::new(true);
    let output = sandbox.run(&[]);

    assert_eq!(output.status.code(), Some(0), "{}", stdout(&output));
    assert_eq!(
        file_tree(&sandbox.root()),
        vec![
            ".babelrc",
            "package.json",
            "public/index.html",
            "src/components/App/App.jsx",
            "src/index.js",
            "webpack.config.js",
        ]
    );

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(sandbox.root().join("package.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["name"], "root");
    assert_eq!(manifest["license"], "ISC");
    assert_eq!(manifest["scripts"]["start"], "webpack-dev-server --open");
    assert_eq!(
        manifest["scripts"]["start-mob"],
        "webpack-dev-server --open --host 0.0.0.0"
    );
    assert_eq!(manifest["scripts"]["build"], "webpack");
    assert!(stdout(&output).contains("13 steps completed"));
}

#[test]
fn test_rerun_over_existing_root_continues() {
    let sandbox = Sandbox::new(true);
    assert_eq!(sandbox.run(&[]).status.code(), Some(0));
    let first = fs::read_to_string(sandbox.root().join("webpack.config.js")).unwrap();

    fs::write(sandbox.root().join("src/index.js"), "modified").unwrap();
    let output = sandbox.run(&[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("already exists"));
    assert_eq!(
        fs::read_to_string(sandbox.root().join("webpack.config.js")).unwrap(),
        first
    );
    let index = fs::read_to_string(sandbox.root().join("src/index.js")).unwrap();
    assert!(index.starts_with("import { createRoot } from \"react-dom/client\";"));
}

#[test]
fn test_failed_init_leaves_no_manifest_but_emits_files() {
    let sandbox = Sandbox::new(true);
    let output = sandbox.run(&[("FAKE_NPM_FAIL_INIT", "1")]);

    assert_eq!(output.status.code(), Some(0));
    assert!(!sandbox.root().join("package.json").exists());
    assert!(stdout(&output).contains("Failed to read"));
    assert!(sandbox.root().join("webpack.config.js").exists());
    assert!(sandbox.root().join("public/index.html").exists());
}

#[test]
fn test_emitted_files_are_deterministic() {
    let first = Sandbox::new(true);
    let second = Sandbox::new(true);
    first.run(&[]);
    second.run(&[]);

    for file in [
        ".babelrc",
        "webpack.config.js",
        "src/index.js",
        "src/components/App/App.jsx",
        "public/index.html",
    ] {
        assert_eq!(
            fs::read(first.root().join(file)).unwrap(),
            fs::read(second.root().join(file)).unwrap(),
            "{file} differs between runs"
        );
    }
}
