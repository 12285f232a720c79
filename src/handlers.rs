//! CLI run mode: scan, assemble, deliver.

use crate::cli::Cli;
use crate::config::ScanConfig;
use crate::document;
use crate::error::{BridgeError, Result};
use crate::scanner::{ScanRequest, Scanner};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;
use tracing::{debug, info};

/// Run one bundle generation per the CLI arguments.
///
/// Status lines go to stderr so stdout stays clean for piping into a
/// clipboard tool.
pub fn run_bridge(cli: &Cli) -> ExitCode {
    eprintln!("{}", "Packing project context...".bold());
    if cli.focus.is_empty() {
        eprintln!("-> mode: full scan (size gate applied)");
    } else {
        eprintln!("-> mode: focused ({} files selected)", cli.focus.len());
    }

    match generate(cli) {
        Ok(document) => {
            let size_kb = document.len() as f64 / 1024.0;
            if let Err(e) = deliver(cli, &document) {
                eprintln!("{} {}", "error:".red().bold(), e);
                return ExitCode::from(2);
            }
            eprintln!(
                "{} bundle ({:.2} KB) written to {}",
                "done:".green().bold(),
                size_kb,
                cli.output
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "stdout".to_string()),
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

/// Scan and assemble the bundle document.
fn generate(cli: &Cli) -> Result<String> {
    info!(root = %cli.root.display(), focused = !cli.focus.is_empty(), "Starting scan");

    let config = ScanConfig::new()
        .with_max_file_size(cli.max_file_size)
        .with_extra_ignores(cli.ignore.iter().cloned());
    let scanner = Scanner::new(config);

    let request = if cli.focus.is_empty() {
        ScanRequest::full(&cli.root)
    } else {
        ScanRequest::focused(&cli.root, cli.focus.iter().cloned())
    };

    let outcome = scanner.scan(&request)?;
    debug!(
        files = outcome.records.len(),
        symbol_blocks = outcome.symbol_summaries.len(),
        "Scan complete"
    );

    let timestamp = chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S%.6f")
        .to_string();

    Ok(document::assemble(
        &outcome.symbol_summaries,
        &outcome.records,
        &cli.query,
        &timestamp,
    ))
}

/// Write the document to the configured sink.
fn deliver(cli: &Cli, document: &str) -> Result<()> {
    match &cli.output {
        Some(path) => fs::write(path, document).map_err(|e| BridgeError::WriteError {
            path: path.display().to_string(),
            source: e,
        }),
        None => {
            println!("{document}");
            Ok(())
        }
    }
}
