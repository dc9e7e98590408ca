//! Benchmark log parser
//!
//! A benchmark log is a comma separated file. Lines starting with `#` are
//! comments. The first data line carries the session start time and the device
//! description; every following line is one [`BenchmarkRun`]:
//!
//! ```text
//! name,backend,iterations,total_time_sec,max_single_error,testset_size,N,
//!     key_1,value_1,...,key_N,value_N,
//!     latency_start_sec,latency_step_sec,count_1,...,count_M
//! ```

use crate::error::{ReportError, Result};
use crate::run::{BenchmarkRun, EvaluatorResult, LatencyHistogram, SessionInfo};
use csv::StringRecord;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Fields before the evaluator pairs
const FIXED_FIELDS: usize = 7;

/// Latency start and step fields following the evaluator pairs
const HISTOGRAM_HEADER_FIELDS: usize = 2;

/// Parsed benchmark log
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLog {
    /// Session metadata from the first data line
    pub session: SessionInfo,
    /// Result rows in file order
    pub runs: Vec<BenchmarkRun>,
}

/// Parse a benchmark log file
pub fn parse_file(path: &Path) -> Result<ParsedLog> {
    let text = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    let log = parse_str(&text)?;
    log::info!(
        "Parsed {} benchmark runs from {}",
        log.runs.len(),
        path.display()
    );
    Ok(log)
}

/// Parse a benchmark log held in memory
pub fn parse_str(input: &str) -> Result<ParsedLog> {
    parse_reader(input.as_bytes())
}

/// Parse a benchmark log from any reader
pub fn parse_reader<R: Read>(reader: R) -> Result<ParsedLog> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = csv_reader.records();

    let session = match records.next() {
        Some(record) => parse_session(&record.map_err(csv_error)?)?,
        None => {
            return Err(ReportError::format(
                0,
                "input contains no benchmark info line",
            ))
        }
    };

    let runs = records
        .map(|record| record.map_err(csv_error).and_then(|r| parse_run(&r)))
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "Session started at {} on {}: {} runs",
        session.started_at,
        session.device,
        runs.len()
    );

    Ok(ParsedLog { session, runs })
}

fn csv_error(err: csv::Error) -> ReportError {
    let line = err.position().map_or(0, |p| p.line());
    ReportError::format(line, err.to_string())
}

fn parse_session(record: &StringRecord) -> Result<SessionInfo> {
    let line = line_of(record);
    match (record.get(0), record.get(1)) {
        (Some(started_at), Some(device)) => Ok(SessionInfo {
            started_at: started_at.to_string(),
            device: device.to_string(),
        }),
        _ => Err(ReportError::format(
            line,
            format!(
                "benchmark info line needs a start time and a device, found {} field(s)",
                record.len()
            ),
        )),
    }
}

fn parse_run(record: &StringRecord) -> Result<BenchmarkRun> {
    let mut fields = RowCursor::new(record);

    let name = fields.next_str("name")?.to_string();
    let backend = fields.next_str("backend")?.to_string();

    let iterations: u64 = fields.next_parsed("iterations")?;
    if iterations == 0 {
        return Err(fields.error("iterations must be positive"));
    }

    let total_time_sec: f64 = fields.next_parsed("total time")?;
    if total_time_sec.is_nan() || total_time_sec < 0.0 {
        return Err(fields.error(format!(
            "total time must be non-negative, found {total_time_sec}"
        )));
    }

    let max_single_error: f64 = fields.next_parsed("max single error")?;
    let testset_size: u64 = fields.next_parsed("test set size")?;
    let evaluator_count: usize = fields.next_parsed("evaluator count")?;

    let required = evaluator_count
        .saturating_mul(2)
        .saturating_add(FIXED_FIELDS + HISTOGRAM_HEADER_FIELDS);
    if record.len() < required {
        return Err(fields.error(format!(
            "row declares {evaluator_count} evaluator result(s) and needs at least \
             {required} fields, found {}",
            record.len()
        )));
    }

    let evaluators = (0..evaluator_count)
        .map(|_| -> Result<EvaluatorResult> {
            let key = fields.next_str("evaluator key")?.to_string();
            let value = fields.next_parsed("evaluator value")?;
            Ok(EvaluatorResult { key, value })
        })
        .collect::<Result<Vec<_>>>()?;

    let start_sec = fields.next_parsed("latency start")?;
    let step_sec = fields.next_parsed("latency step")?;
    let bucket_counts = fields.remaining_parsed("latency bucket count")?;

    Ok(BenchmarkRun {
        name,
        backend,
        iterations,
        total_time_sec,
        max_single_error,
        testset_size,
        evaluators,
        latency: LatencyHistogram {
            start_sec,
            step_sec,
            bucket_counts,
        },
    })
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

/// Positional reader over the fields of one row
struct RowCursor<'a> {
    record: &'a StringRecord,
    line: u64,
    next: usize,
}

impl<'a> RowCursor<'a> {
    fn new(record: &'a StringRecord) -> Self {
        Self {
            record,
            line: line_of(record),
            next: 0,
        }
    }

    fn error(&self, reason: impl Into<String>) -> ReportError {
        ReportError::format(self.line, reason)
    }

    fn next_str(&mut self, what: &str) -> Result<&'a str> {
        let field = self.record.get(self.next).ok_or_else(|| {
            self.error(format!(
                "missing {what} (column {}), row has {} field(s)",
                self.next + 1,
                self.record.len()
            ))
        })?;
        self.next += 1;
        Ok(field)
    }

    fn next_parsed<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let column = self.next + 1;
        let field = self.next_str(what)?;
        field
            .parse()
            .map_err(|_| self.error(format!("invalid {what} {field:?} in column {column}")))
    }

    fn remaining_parsed<T: FromStr>(&mut self, what: &str) -> Result<Vec<T>> {
        let mut values = Vec::with_capacity(self.record.len().saturating_sub(self.next));
        while self.next < self.record.len() {
            values.push(self.next_parsed(what)?);
        }
        Ok(values)
    }
}
