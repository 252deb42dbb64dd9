use anyhow::Result;
use clap::Parser;

mod commands;

/// Creates ./root with package.json, webpack and Babel config, and a starter
/// React app. Requires npm and node on PATH.
#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold a React + webpack + Babel project", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let code = commands::init::execute()?;
    std::process::exit(code)
}
