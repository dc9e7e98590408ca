//! Report configuration

use crate::error::{ReportError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the bundled charting library
pub const DEFAULT_CHART_SCRIPT: &str = "Chart.bundle.min.js";

/// jQuery build the chart initialisation code is written against
pub const DEFAULT_JQUERY_URL: &str = "https://ajax.googleapis.com/ajax/libs/jquery/3.3.1/jquery.min.js";

/// Settings for the generated report page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Page title
    pub title: String,

    /// Charting library to inline (default: next to the executable)
    pub chart_script: Option<PathBuf>,

    /// Where the page loads jQuery from
    pub jquery_url: String,

    /// Width of each latency chart cell in pixels
    pub chart_width_px: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "MLTS results".to_string(),
            chart_script: None,
            jquery_url: DEFAULT_JQUERY_URL.to_string(),
            chart_width_px: 500,
        }
    }
}

impl ReportConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
        Self::from_toml_str(&text).map_err(|e| match e {
            ReportError::Config(msg) => ReportError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| ReportError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.chart_width_px == 0 {
            return Err(ReportError::Config(
                "chart_width_px must be positive".to_string(),
            ));
        }
        if self.jquery_url.trim().is_empty() {
            return Err(ReportError::Config("jquery_url must not be empty".to_string()));
        }
        Ok(())
    }

    /// Path of the charting library to inline
    pub fn chart_script_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.chart_script {
            return Ok(path.clone());
        }
        let exe = std::env::current_exe().map_err(|e| ReportError::io("current executable", e))?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(dir.join(DEFAULT_CHART_SCRIPT))
    }

    /// Read the charting library source
    pub fn load_chart_script(&self) -> Result<String> {
        let path = self.chart_script_path()?;
        log::debug!("Loading chart script from {}", path.display());
        fs::read_to_string(&path).map_err(|e| ReportError::io(path, e))
    }
}
