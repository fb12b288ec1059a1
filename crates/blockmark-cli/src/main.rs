/// blockmark command-line tool: convert between canonical block text and the
/// JSON block documents the editor works with, and check files for
/// canonical form.
///
/// ```text
/// blockmark <COMMAND> [OPTIONS]
///
/// Commands:
///   parse      Canonical text in, JSON document out
///   serialize  JSON document in, canonical text out
///   normalize  Rewrite text into canonical form
///   check      Report files that are not in canonical form
///
/// Global options:
///   -v, --verbose        Enable debug logging
///   --config <PATH>      Use this config file instead of ~/.config/blockmark/config.toml
/// ```
///
/// Exit code is 0 on success and 1 on any error or failed check. Errors go to
/// stderr so stdout can be piped.
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use blockmark_config::Config;
use clap::{Parser, Subcommand};

mod cmd_check;
mod cmd_normalize;
mod cmd_parse;
mod cmd_serialize;

#[derive(Parser)]
#[command(name = "blockmark", version, about = "Block document transcoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse canonical text into a JSON block document.
    Parse(ParseArgs),
    /// Serialize a JSON block document into canonical text.
    Serialize(SerializeArgs),
    /// Parse and re-serialize text into canonical form.
    Normalize(NormalizeArgs),
    /// Report files whose text is not in canonical form.
    Check(CheckArgs),
}

/// Arguments for `blockmark parse`.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// Text file to parse, or `-` for stdin.
    pub input: PathBuf,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact JSON even if the config asks for pretty output.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for `blockmark serialize`.
#[derive(clap::Args)]
pub struct SerializeArgs {
    /// JSON document to serialize, or `-` for stdin.
    pub input: PathBuf,

    /// Write text to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `blockmark normalize`.
#[derive(clap::Args)]
pub struct NormalizeArgs {
    /// Text file to normalize, or `-` for stdin.
    pub input: PathBuf,

    /// Rewrite the file in place instead of printing.
    #[arg(short, long)]
    pub write: bool,
}

/// Arguments for `blockmark check`.
///
/// With no files, scans `documents_path` from the config file.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Files to check.
    pub files: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let result = load_config(cli.config.as_deref()).and_then(|config| {
        init_logging(cli.verbose, &config);
        match &cli.command {
            Commands::Parse(args) => cmd_parse::run(args, &config),
            Commands::Serialize(args) => cmd_serialize::run(args),
            Commands::Normalize(args) => cmd_normalize::run(args),
            Commands::Check(args) => cmd_check::run(args, &config),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    Ok(loaded.unwrap_or_default())
}

fn init_logging(verbose: bool, config: &Config) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        config
            .log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(log::LevelFilter::Warn)
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Reads a file, or stdin when the path is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("cannot read stdin")?;
        return Ok(text);
    }
    blockmark_engine::io::read_text(path)
        .with_context(|| format!("cannot read {}", path.display()))
}
