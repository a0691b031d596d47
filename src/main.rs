//! pseudolens - Entry Point

use clap::{Parser, Subcommand};
use pseudolens::config::{self, ResolvedConfig};
use pseudolens::model::{AppError, ParsedDocument};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// pseudolens - split @level-annotated pseudo-files into abstraction levels
#[derive(Parser, Debug)]
#[command(name = "pseudolens")]
#[command(version)]
#[command(about = "Split @level-annotated pseudo-files into abstraction levels and sections")]
pub struct Args {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Serve the HTTP API
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Enable debug logging
        #[arg(long)]
        debug: bool,
    },

    /// Parse a pseudo-file and print the result as JSON
    Parse {
        /// Path to the pseudo-file (reads from stdin if not provided)
        file: Option<PathBuf>,

        /// Print only the lines filed under this level
        #[arg(short, long, conflicts_with = "outline")]
        level: Option<String>,

        /// Print a short summary instead of JSON
        #[arg(long)]
        outline: bool,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match args.command {
        Command::Serve { host, port, debug } => {
            // Defaults → Config File → Env Vars → CLI Args
            let config = resolve_config(args.config, host, port, debug.then_some(true))?;
            serve(config)?;
        }
        Command::Parse {
            file,
            level,
            outline,
            compact,
        } => {
            // Only logging settings apply to offline parsing.
            resolve_config(args.config, None, None, None)?;
            parse_to_stdout(file, level.as_deref(), outline, compact)?;
        }
    }

    Ok(())
}

/// Resolve the configuration and start logging with it.
///
/// Env values that were ignored during resolution are reported once the
/// subscriber is installed.
fn resolve_config(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    debug: Option<bool>,
) -> Result<ResolvedConfig, AppError> {
    let config_file = config::load_config_with_precedence(config_path)?;
    let merged = config::merge_config(config_file);
    let (with_env, rejected) = config::apply_env_overrides(merged);
    let config = config::apply_cli_overrides(with_env, host, port, debug);

    pseudolens::logging::init(config.log_file_path.as_deref(), config.debug)?;
    for rejection in &rejected {
        rejection.log();
    }

    Ok(config)
}

fn serve(config: ResolvedConfig) -> Result<(), AppError> {
    info!(config = ?config, "Configuration loaded and resolved");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(pseudolens::server::run(&config))?;

    Ok(())
}

fn parse_to_stdout(
    file: Option<PathBuf>,
    level: Option<&str>,
    outline: bool,
    compact: bool,
) -> Result<(), AppError> {
    let content = pseudolens::source::read_document(file)?;
    let document = pseudolens::parser::parse(&content);

    let rendered = render(&document, level, outline, compact)?;
    std::io::stdout().lock().write_all(rendered.as_bytes())?;
    Ok(())
}

/// Render a parsed document for stdout.
fn render(
    document: &ParsedDocument,
    level: Option<&str>,
    outline: bool,
    compact: bool,
) -> Result<String, AppError> {
    if let Some(level) = level {
        return Ok(document
            .lines_at_level(level)
            .map(|line| format!("{line}\n"))
            .collect());
    }

    if outline {
        return Ok(document.outline());
    }

    let mut json = if compact {
        serde_json::to_string(document)?
    } else {
        serde_json::to_string_pretty(document)?
    };
    json.push('\n');
    Ok(json)
}
