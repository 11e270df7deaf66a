//! Macrobundle CLI Binary
//!
//! Command-line interface for bundling macro folders. With no arguments it
//! builds the default layout in the current directory.

use clap::Parser;
use macrobundle::cli::{Cli, RunContext};
use macrobundle::config::{ConfigLoader, MacrobundleConfig};
use macrobundle::logging::{
    apply_env_overrides, init_logging, LoggingConfig, DEFAULT_LOG_FILE,
};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let loaded = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path),
        None => ConfigLoader::load(&cli.workspace),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            let err = macrobundle::error::CommandError::from(e);
            eprintln!("{}", macrobundle::cli::map_error(&err));
            process::exit(1);
        }
    };

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli, &config);

    // Initialize logging early
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Macrobundle CLI starting");

    let context = match RunContext::with_config(cli.workspace.clone(), config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", macrobundle::cli::map_error(&e));
            process::exit(1);
        }
    };

    let command = cli.command.clone().unwrap_or_default();
    match context.execute(&command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            if let Some(report) = e.stdout_report() {
                println!("{}", report);
            }
            eprintln!("{}", macrobundle::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args, environment, and config file.
/// Precedence: CLI flags override environment override config file override defaults.
fn build_logging_config(cli: &Cli, config: &MacrobundleConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();
    apply_env_overrides(&mut logging);

    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }
    if logging.output == "file" && logging.file.is_none() {
        logging.file = Some(PathBuf::from(DEFAULT_LOG_FILE));
    }
    if let Some(ref file) = logging.file {
        if file.is_relative() {
            logging.file = Some(cli.workspace.join(file));
        }
    }

    logging
}
