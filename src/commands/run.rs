//! cidstamp run コマンド
//!
//! 環境マップ（JSON）を組み立てて Importer を実行し、更新後の環境を stdout に出力する。
//! 失敗時も環境は出力し、エラーは stderr に出す。

use cidstamp::config::ImporterConfig;
use cidstamp::error::formatter::ErrorFormatter;
use cidstamp::error::{ImportError, Result};
use cidstamp::output::ConsoleOutput;
use cidstamp::step::{ARTIFACT_PATH, PKGINFO_PATH};
use cidstamp::{Importer, StepEnv};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// JSON object with the step environment ("-" reads stdin)
    #[arg(long, value_name = "FILE")]
    pub env_file: Option<String>,

    /// Path to the pkginfo file (overrides the env file)
    #[arg(long, value_name = "PATH")]
    pub pkginfo_path: Option<String>,

    /// Path to the built package, or a remote reference (overrides the env file)
    #[arg(long, value_name = "PATH")]
    pub artifact_path: Option<String>,

    /// Content-addressing tool executable
    #[arg(long, value_name = "PATH")]
    pub tool: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// pkginfo key that receives the CID
    #[arg(long, value_name = "KEY")]
    pub field: Option<String>,
}

pub fn run(args: Args, verbose: bool) -> std::result::Result<(), String> {
    let formatter = ErrorFormatter::new(verbose);

    let mut env = build_env(&args).map_err(|e| formatter.format(&e))?;
    let config = resolve_config(&args).map_err(|e| formatter.format(&e))?;

    let importer = Importer::new(config);
    let out = ConsoleOutput::new(use_color());
    let result = importer.run(&mut env, &out);

    print_env(&env)?;
    result.map_err(|e| formatter.format(&e))
}

/// 環境ファイル → CLI 引数 の順に環境を組み立てる
fn build_env(args: &Args) -> Result<StepEnv> {
    let mut env = match args.env_file.as_deref() {
        Some(source) => read_env(source)?,
        None => StepEnv::new(),
    };

    let mut overrides = StepEnv::new();
    if let Some(path) = &args.pkginfo_path {
        overrides.set(PKGINFO_PATH, path.as_str());
    }
    if let Some(path) = &args.artifact_path {
        overrides.set(ARTIFACT_PATH, path.as_str());
    }
    env.merge(overrides);

    tracing::debug!(
        pkginfo_path = env.get_str(PKGINFO_PATH),
        artifact_path = env.get_str(ARTIFACT_PATH),
        "step environment ready"
    );
    Ok(env)
}

fn read_env(source: &str) -> Result<StepEnv> {
    let content = if source == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(source)?
    };

    parse_env(&content)
}

fn parse_env(content: &str) -> Result<StepEnv> {
    serde_json::from_str(content).map_err(|e| ImportError::Input {
        key: "env-file".to_string(),
        reason: format!("expected a JSON object: {}", e),
    })
}

/// 設定ファイル/環境変数 → CLI 引数 の順に設定を解決
fn resolve_config(args: &Args) -> Result<ImporterConfig> {
    let mut config = ImporterConfig::load(args.config.as_deref())?;

    if let Some(tool) = &args.tool {
        config = config.with_tool_path(tool);
    }
    if let Some(field) = &args.field {
        config = config.with_record_field(field);
    }

    Ok(config)
}

fn print_env(env: &StepEnv) -> std::result::Result<(), String> {
    serde_json::to_string_pretty(env)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize environment: {}", e))
}

fn use_color() -> bool {
    std::io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err()
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
