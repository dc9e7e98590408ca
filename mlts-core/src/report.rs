//! End-to-end report generation

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::grouping::group_runs;
use crate::parser::parse_file;
use crate::render::render_report;
use std::fs;
use std::path::Path;

/// What a report generation run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    /// Number of result tables
    pub groups: usize,
    /// Number of result rows
    pub runs: usize,
    /// Size of the written page in bytes
    pub bytes: usize,
}

/// Parse `input`, render the report and write it to `output`.
///
/// The output file is only created once the whole page has been rendered,
/// so a malformed log leaves no output behind.
pub fn generate_report(
    input: &Path,
    output: &Path,
    config: &ReportConfig,
) -> Result<ReportSummary> {
    let log = parse_file(input)?;
    let runs = log.runs.len();
    let groups = group_runs(log.runs);

    let chart_script = config.load_chart_script()?;
    let html = render_report(&log.session, &groups, &chart_script, config)?;

    fs::write(output, &html).map_err(|e| ReportError::io(output, e))?;
    log::info!(
        "Wrote {} result group(s), {} run(s) to {}",
        groups.len(),
        runs,
        output.display()
    );

    Ok(ReportSummary {
        groups: groups.len(),
        runs,
        bytes: html.len(),
    })
}
