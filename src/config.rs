use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Optional overrides file looked up in the invocation directory
pub const CONFIG_FILE: &str = "react-scaffold.toml";

const WEBPACK_MODULE_EXPORTS: &str = r#"{
    entry: "./src/index.js",
    output: {
        path: path.resolve(__dirname, "dist"),
        filename: "bundle.js",
        publicPath: "/",
    },
    module: {
        rules: [
            {
                test: /\.(js|jsx)$/,
                exclude: /node_modules/,
                use: "babel-loader",
            },
            {
                test: /\.css$/,
                use: ["style-loader", "css-loader"],
            },
        ],
    },
    resolve: {
        extensions: [".js", ".jsx"],
    },
    plugins: [
        new HtmlWebpackPlugin({
            template: "./public/index.html",
        }),
    ],
    devServer: {
        historyApiFallback: true,
        port: 3000,
    },
    mode: "development",
};
"#;

/// A named run-script injected into package.json
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Script {
    pub name: String,
    pub command: String,
}

impl Script {
    fn new(name: &str, command: &str) -> Self {
        Self {
            name: name.to_string(),
            command: command.to_string(),
        }
    }
}

/// Every fixed value the scaffolding pipeline uses
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Project directory created under the invocation directory
    pub root_dir: String,
    /// Package manager executable (resolved on PATH)
    pub package_manager: String,
    /// JavaScript runtime executable (resolved on PATH)
    pub runtime: String,
    /// Runtime packages, installed first
    pub dependencies: Vec<String>,
    /// Development-only packages, installed with `--save-dev`
    pub dev_dependencies: Vec<String>,
    /// Replaces the `scripts` field of package.json, in this order
    pub scripts: Vec<Script>,
    /// Object literal assigned to `module.exports` in webpack.config.js
    pub module_exports: String,
    /// `<title>` of the HTML template
    pub app_title: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            root_dir: "root".to_string(),
            package_manager: "npm".to_string(),
            runtime: "node".to_string(),
            dependencies: [
                "@babel/core",
                "@babel/preset-env",
                "@babel/preset-react",
                "babel-loader",
                "css-loader",
                "html-webpack-plugin",
                "react",
                "react-dom",
                "react-router-dom",
                "style-loader",
                "webpack",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            dev_dependencies: [
                "webpack-cli",
                "webpack-dev-server",
                "@types/react-dom",
                "@types/react",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            scripts: vec![
                Script::new("start", "webpack-dev-server --open"),
                Script::new("start-mob", "webpack-dev-server --open --host 0.0.0.0"),
                Script::new("build", "webpack"),
            ],
            module_exports: WEBPACK_MODULE_EXPORTS.to_string(),
            app_title: "Template".to_string(),
        }
    }
}

impl ScaffoldConfig {
    /// Load configuration for a run started in `dir`.
    ///
    /// Falls back to the built-in defaults when `react-scaffold.toml` is absent;
    /// keys missing from the file keep their default values.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }
}
