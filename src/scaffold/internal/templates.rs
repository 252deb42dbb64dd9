//! Boilerplate files written into a fresh project

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;

const BABELRC: &str =
    r#"{"presets": ["@babel/preset-env",["@babel/preset-react", {"runtime": "automatic"}]]}"#;

const INDEX_JS: &str = r#"import { createRoot } from "react-dom/client";
import App from "./components/App/App";

const container = document.getElementById("root");
const root = createRoot(container);

root.render(<App />);"#;

const APP_JSX: &str = r#"import React from "react";

function App() {return (<div>Hello from base app</div>)}

export default App;"#;

/// A generated file, identified by its place in the project tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    WebpackConfig,
    Babelrc,
    AppComponent,
    IndexJs,
    IndexHtml,
}

impl Artifact {
    /// Location relative to the project root
    pub fn relative_path(self) -> &'static str {
        match self {
            Artifact::WebpackConfig => "webpack.config.js",
            Artifact::Babelrc => ".babelrc",
            Artifact::AppComponent => "src/components/App/App.jsx",
            Artifact::IndexJs => "src/index.js",
            Artifact::IndexHtml => "public/index.html",
        }
    }

    pub fn path_in(self, root: &Path) -> PathBuf {
        root.join(self.relative_path())
    }

    pub fn render(self, config: &ScaffoldConfig) -> String {
        match self {
            Artifact::WebpackConfig => webpack_config(&config.module_exports),
            Artifact::Babelrc => BABELRC.to_string(),
            Artifact::AppComponent => APP_JSX.to_string(),
            Artifact::IndexJs => INDEX_JS.to_string(),
            Artifact::IndexHtml => index_html(&config.app_title),
        }
    }

    /// Write the rendered payload under `root`, truncating any existing file.
    pub fn emit(self, root: &Path, config: &ScaffoldConfig) -> Result<()> {
        let path = self.path_in(root);
        fs::write(&path, self.render(config))
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = Path::new(self.relative_path())
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        f.write_str(name)
    }
}

fn webpack_config(module_exports: &str) -> String {
    format!(
        "const path = require(\"path\");\n\
         const HtmlWebpackPlugin = require(\"html-webpack-plugin\");\n\n\
         module.exports = {module_exports}"
    )
}

fn index_html(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<title>{title}</title>
</head>
<body>
<main id="root"></main>
<script src="bundle.js"></script>
</body>
</html>
"#
    )
}
