//! HTML result report rendering

mod templates;

use crate::accuracy::{AccuracySchema, AccuracyValues};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::grouping::RunGroup;
use crate::run::{BenchmarkRun, LatencyHistogram, SessionInfo};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;
use templates::{
    DeviceInfoContext, GroupContext, HeaderCellContext, PageContext, RowContext,
    TemplateContext, ValueCellContext,
};

/// Hands out chart element ids, unique across one render pass
#[derive(Debug, Default)]
pub struct ChartIds {
    next: usize,
}

impl ChartIds {
    /// Start numbering from zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Next unused chart id
    pub fn next_id(&mut self) -> String {
        let id = format!("latency_chart{}", self.next);
        self.next += 1;
        id
    }
}

/// Render the complete report page.
///
/// `chart_script` is the charting library source; it is inlined verbatim.
pub fn render_report(
    session: &SessionInfo,
    groups: &[RunGroup],
    chart_script: &str,
    config: &ReportConfig,
) -> Result<String> {
    let mut ids = ChartIds::new();
    let results = groups
        .iter()
        .map(|group| render_group(group, &mut ids, config))
        .collect::<Result<String>>()?;

    let page = PageContext {
        title: encode_text(&config.title).into_owned(),
        jquery_url: encode_double_quoted_attribute(&config.jquery_url).into_owned(),
        chart_script: chart_script.to_string(),
        device_info: render_device_info(session),
        results,
    };
    Ok(page.render())
}

/// Session header block
pub fn render_device_info(session: &SessionInfo) -> String {
    DeviceInfoContext {
        device: encode_text(&session.device).into_owned(),
        started_at: encode_text(&session.started_at).into_owned(),
    }
    .render()
}

/// One result table. Chart ids are drawn from `ids`.
pub fn render_group(
    group: &RunGroup,
    ids: &mut ChartIds,
    config: &ReportConfig,
) -> Result<String> {
    let schema = group
        .representative()
        .map_or(AccuracySchema::NoAccuracyData, AccuracySchema::of_run);
    log::debug!("Group {} uses {:?} accuracy columns", group.name, schema);

    let accuracy_headers: String = schema
        .headers()
        .iter()
        .map(|text| HeaderCellContext { text }.render())
        .collect();

    let rows = group
        .runs
        .iter()
        .map(|run| render_row(run, schema.headers().len(), &ids.next_id(), config))
        .collect::<Result<String>>()?;

    Ok(GroupContext {
        accuracy_headers,
        rows,
    }
    .render())
}

/// One result row with its chart.
///
/// Accuracy cells come from the run's own evaluator keys and are aligned to
/// `accuracy_columns`, the header count of the enclosing table.
pub fn render_row(
    run: &BenchmarkRun,
    accuracy_columns: usize,
    chart_id: &str,
    config: &ReportConfig,
) -> Result<String> {
    let values = AccuracyValues::of_run(run);
    if AccuracySchema::of_run(run).headers().len() != accuracy_columns {
        log::warn!(
            "{} on {} reports different accuracy metrics than its table",
            run.name,
            run.backend
        );
    }
    let accuracy_cells: String = values
        .cells_for(accuracy_columns)
        .iter()
        .map(|text| ValueCellContext { text }.render())
        .collect();

    let row = RowContext {
        name: encode_text(&run.name).into_owned(),
        backend: encode_text(&run.backend).into_owned(),
        iterations: run.iterations.to_string(),
        testset_size: run.testset_size.to_string(),
        average_latency: format!("{:.2}ms", run.average_latency_ms()),
        accuracy_cells,
        chart_width: config.chart_width_px.to_string(),
        chart_id: chart_id.to_string(),
        chart_label: script_json(&format!("{} latency frequency", run.name))?,
        labels: script_json(&latency_labels(&run.latency))?,
        counts: script_json(&run.latency.bucket_counts)?,
    };
    Ok(row.render())
}

/// X-axis labels for the latency chart, one per bucket
pub fn latency_labels(histogram: &LatencyHistogram) -> Vec<String> {
    histogram
        .bucket_starts_ms()
        .map(|ms| format!("{ms:.2}ms"))
        .collect()
}

/// JSON for embedding inside a `<script>` element
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
