//! OpenAPI Linter CLI
//!
//! Lints OpenAPI documents and prints structural issues.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use openapi_lint::analyzer::lint_paths;
use openapi_lint::{LintConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "openapi-lint")]
#[command(about = "Lint OpenAPI v2/v3 documents for structural defects")]
struct Cli {
    /// Files or directories to lint
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Path to config file
    #[arg(short, long, default_value = "openapi-lint.toml")]
    config: PathBuf,

    /// Output JSON instead of the configured format
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(0) => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<usize> {
    let config = LintConfig::load_from(&cli.config)?;
    let findings = lint_paths(&cli.paths, &config.suffixes());
    let total: usize = findings.iter().map(|(_, issues)| issues.len()).sum();

    let format = if cli.json { OutputFormat::Json } else { config.output.format };
    match format {
        OutputFormat::Json => {
            let report: Vec<serde_json::Value> = findings
                .iter()
                .map(|(path, issues)| {
                    serde_json::json!({ "file": path.display().to_string(), "issues": issues })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Pretty => {
            for (path, issues) in &findings {
                println!("{}", path.display());
                for issue in issues {
                    println!("  [{}] {} ({})", issue.rule, issue.message, issue.path);
                }
            }
            if total == 0 {
                println!("No issues found.");
            } else {
                println!("{} issue(s) found.", total);
            }
        }
    }

    Ok(total)
}
