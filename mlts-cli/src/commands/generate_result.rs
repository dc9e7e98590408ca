//! generate-result command implementation

use super::require_file;
use crate::{CliError, CliResult};
use anyhow::{Context, Result};
use clap::Parser;
use mlts_core::ReportConfig;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming a TOML report configuration file
pub const CONFIG_ENV: &str = "MLTS_REPORT_CONFIG";

/// Environment variable overriding the charting library location
pub const CHART_SCRIPT_ENV: &str = "MLTS_CHART_SCRIPT";

/// Generate an HTML page summarising an MLTS benchmark CSV log
#[derive(Debug, Parser)]
#[command(name = "generate-result", version)]
pub struct GenerateResultArgs {
    /// Input CSV file written by the benchmark
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output HTML file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

impl GenerateResultArgs {
    /// Execute the command
    pub fn execute(&self) -> CliResult<()> {
        log::debug!("Arguments: {:?}", self);
        require_file(&self.input)?;

        let config = report_config(
            std::env::var_os(CONFIG_ENV),
            std::env::var_os(CHART_SCRIPT_ENV),
        )?;

        let summary = mlts_core::generate_report(&self.input, &self.output, &config)
            .with_context(|| {
                format!(
                    "Failed to generate report from {}",
                    self.input.display()
                )
            })?;

        log::info!(
            "Report with {} table(s) and {} row(s) written to {}",
            summary.groups,
            summary.runs,
            self.output.display()
        );
        Ok(())
    }
}

/// Build the report configuration from the optional config file and chart
/// script override (normally taken from the environment)
pub fn report_config(
    config_file: Option<OsString>,
    chart_script: Option<OsString>,
) -> Result<ReportConfig> {
    let mut config = match config_file {
        Some(path) if path.is_empty() => {
            return Err(CliError::ConfigError(format!("{CONFIG_ENV} is empty")).into())
        }
        Some(path) => {
            let path = Path::new(&path);
            log::debug!("Loading report configuration from {}", path.display());
            ReportConfig::from_file(path).with_context(|| {
                format!("Failed to load report configuration {}", path.display())
            })?
        }
        None => ReportConfig::default(),
    };

    if let Some(script) = chart_script.filter(|s| !s.is_empty()) {
        config.chart_script = Some(PathBuf::from(script));
    }

    Ok(config)
}
