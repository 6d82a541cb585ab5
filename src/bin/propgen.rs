//! propgen CLI Binary
//!
//! Command-line interface for the CSS property ID generator.

use clap::Parser;
use propgen::cli::{Cli, RunContext};
use propgen::config::ConfigLoader;
use propgen::logging::{init_logging, resolve_log_file_path, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("propgen starting");

    let context = match RunContext::new(cli.workspace.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", propgen::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            if !output.text.is_empty() {
                println!("{}", output.text);
            }
            if !output.success {
                error!("Command reported problems");
                process::exit(1);
            }
            info!("Command completed successfully");
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", propgen::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args, environment, and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(&cli.workspace)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if config.output == "file" {
        config.file = Some(resolve_log_file_path(cli.log_file.clone(), config.file.clone()));
    } else if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
