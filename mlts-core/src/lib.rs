//! MLTS benchmark result tooling
//!
//! Turns the CSV log written by the MLTS benchmark app into a static HTML
//! report, and converts TTS reference vectors into the raw float files the
//! benchmark harness loads.
//!
//! The report pipeline runs strictly forward:
//!
//! 1. [`parser`] reads the log into a [`SessionInfo`] and [`BenchmarkRun`]s
//! 2. [`grouping`] collects runs into [`RunGroup`]s by test name
//! 3. [`accuracy`] picks the accuracy columns for each group
//! 4. [`render`] produces the HTML page
//!
//! [`generate_report`] wires the steps together.

#![warn(missing_docs)]

pub mod accuracy;
pub mod config;
pub mod error;
pub mod grouping;
pub mod parser;
pub mod render;
pub mod report;
pub mod run;
pub mod tts;

// Re-export key types
pub use accuracy::{AccuracySchema, AccuracyValues};
pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use grouping::{group_runs, RunGroup};
pub use parser::{parse_file, parse_str, ParsedLog};
pub use render::render_report;
pub use report::{generate_report, ReportSummary};
pub use run::{BenchmarkRun, EvaluatorResult, LatencyHistogram, SessionInfo};
pub use tts::{generate_tts_data, TtsDataFiles};
