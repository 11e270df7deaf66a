//! CLI route: single route table and run context. Dispatches to the aggregator and presentation.

use crate::bundle::Aggregator;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_build_report_json, format_build_report_text, format_check_report_json,
    format_check_report_text, format_plan_json, format_plan_text,
};
use crate::cli::{command_format, command_name};
use crate::config::{ConfigLoader, MacrobundleConfig};
use crate::error::CommandError;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace root and validated configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: MacrobundleConfig,
    color: bool,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, CommandError> {
        let config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Self::with_config(workspace_root, config)
    }

    /// Create run context from an already loaded configuration.
    pub fn with_config(
        workspace_root: PathBuf,
        config: MacrobundleConfig,
    ) -> Result<Self, CommandError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            CommandError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        Ok(Self {
            workspace_root,
            config,
            color: std::io::stdout().is_terminal(),
        })
    }

    /// Force colored text output on or off.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn config(&self) -> &MacrobundleConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, CommandError> {
        let started = Instant::now();
        info!(
            command = command_name(command),
            workspace = %self.workspace_root.display(),
            "Command started"
        );
        if let Some(format) = command_format(command) {
            validate_format(format)?;
        }

        let result = self.execute_inner(command);
        debug!(
            command = command_name(command),
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, CommandError> {
        let aggregator = Aggregator::new(&self.workspace_root, &self.config.bundle);
        match command {
            Commands::Build { format } => {
                let report = aggregator.run()?;
                if format == "json" {
                    format_build_report_json(&report)
                } else {
                    Ok(format_build_report_text(&report, self.color))
                }
            }
            Commands::Check { format } => {
                let report = aggregator.check()?;
                let rendered = if format == "json" {
                    format_check_report_json(&report)?
                } else {
                    format_check_report_text(&report, self.color)
                };
                if report.is_up_to_date() {
                    Ok(rendered)
                } else {
                    Err(CommandError::OutputsStale {
                        files: report.out_of_date(),
                        report: rendered,
                    })
                }
            }
            Commands::Plan { format } => {
                let plan = aggregator.plan()?;
                if format == "json" {
                    format_plan_json(&plan)
                } else {
                    Ok(format_plan_text(&plan, self.color))
                }
            }
            Commands::Config => Ok(toml::to_string_pretty(&self.config)?),
        }
    }
}

fn validate_format(format: &str) -> Result<(), CommandError> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(CommandError::ConfigError(format!(
            "Invalid output format '{}' (must be 'text' or 'json')",
            other
        ))),
    }
}
