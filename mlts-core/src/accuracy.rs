//! Accuracy column selection
//!
//! Evaluators report their metrics as an ordered list of keys. The shape of
//! that list decides which accuracy columns a result table shows.

use crate::error::{ReportError, Result};
use crate::run::BenchmarkRun;

/// Keys reported by the top-k classification evaluator
pub const TOP_K_KEYS: [&str; 5] = ["top_1", "top_2", "top_3", "top_4", "top_5"];

/// Keys reported by the Mel-cepstral / log(F0) speech evaluator
pub const SPEECH_DISTORTION_KEYS: [&str; 2] = ["max_mel_cep_distortion", "max_log_f0_error"];

/// Accuracy presentation chosen from the evaluator key shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccuracySchema {
    /// Top-1 .. top-5 classification accuracy
    TopK,
    /// Speech synthesis distortion metrics
    SpeechDistortion,
    /// Any other evaluator; only the max single error is shown
    Basic,
    /// No evaluator ran; no accuracy columns
    NoAccuracyData,
}

impl AccuracySchema {
    /// Classify an evaluator key list
    pub fn classify(keys: &[&str]) -> Self {
        if keys == TOP_K_KEYS.as_slice() {
            AccuracySchema::TopK
        } else if keys == SPEECH_DISTORTION_KEYS.as_slice() {
            AccuracySchema::SpeechDistortion
        } else if keys.is_empty() {
            AccuracySchema::NoAccuracyData
        } else {
            AccuracySchema::Basic
        }
    }

    /// Classify a single run
    pub fn of_run(run: &BenchmarkRun) -> Self {
        Self::classify(&run.evaluator_keys())
    }

    /// Column headers for this schema
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            AccuracySchema::TopK => &["Top 1", "Top 2", "Top 3", "Top 4", "Top 5"],
            AccuracySchema::SpeechDistortion => &[
                "Max log(F0) error",
                "Max Mel Cep distortion",
                "Max scalar error",
            ],
            AccuracySchema::Basic => &["Max single scalar error"],
            AccuracySchema::NoAccuracyData => &[],
        }
    }
}

/// Accuracy values of one run, shaped by its group's schema
#[derive(Debug, Clone, PartialEq)]
pub enum AccuracyValues {
    /// Top-k accuracies as fractions
    TopK([f64; 5]),
    /// Speech distortion metrics
    SpeechDistortion {
        /// Largest log(F0) error
        max_log_f0_error: f64,
        /// Largest Mel-cepstral distortion
        max_mel_cep_distortion: f64,
        /// Largest single output error
        max_single_error: f64,
    },
    /// Largest single output error
    Basic {
        /// Largest single output error
        max_single_error: f64,
    },
    /// Nothing to show
    NoAccuracyData,
}

impl AccuracyValues {
    /// Values of `run` classified by its own evaluator keys
    pub fn of_run(run: &BenchmarkRun) -> Self {
        Self::shaped(AccuracySchema::of_run(run), run).unwrap_or(AccuracyValues::Basic {
            max_single_error: run.max_single_error,
        })
    }

    /// Pull the values `schema` needs out of `run`.
    ///
    /// Fails with [`ReportError::UnknownSchema`] when the run's own keys
    /// classify differently from `schema`.
    pub fn extract(schema: AccuracySchema, run: &BenchmarkRun) -> Result<Self> {
        Self::shaped(schema, run)
            .filter(|_| AccuracySchema::of_run(run) == schema)
            .ok_or_else(|| ReportError::UnknownSchema {
                name: run.name.clone(),
                backend: run.backend.clone(),
            })
    }

    fn shaped(schema: AccuracySchema, run: &BenchmarkRun) -> Option<Self> {
        let values = match (schema, run.evaluators.as_slice()) {
            (AccuracySchema::TopK, [top1, top2, top3, top4, top5]) => AccuracyValues::TopK([
                top1.value, top2.value, top3.value, top4.value, top5.value,
            ]),
            (AccuracySchema::SpeechDistortion, [mel_cep, log_f0]) => {
                AccuracyValues::SpeechDistortion {
                    max_log_f0_error: log_f0.value,
                    max_mel_cep_distortion: mel_cep.value,
                    max_single_error: run.max_single_error,
                }
            }
            (AccuracySchema::Basic, [_, ..]) => AccuracyValues::Basic {
                max_single_error: run.max_single_error,
            },
            (AccuracySchema::NoAccuracyData, []) => AccuracyValues::NoAccuracyData,
            _ => return None,
        };
        Some(values)
    }

    /// Cells padded with blanks or cut to exactly `columns` entries
    pub fn cells_for(&self, columns: usize) -> Vec<String> {
        let mut cells = self.cells();
        cells.resize(columns, String::new());
        cells
    }

    /// Formatted table cells, one per header of the schema
    pub fn cells(&self) -> Vec<String> {
        match self {
            AccuracyValues::TopK(values) => values
                .iter()
                .map(|v| format!("{:.3}%", v * 100.0))
                .collect(),
            AccuracyValues::SpeechDistortion {
                max_log_f0_error,
                max_mel_cep_distortion,
                max_single_error,
            } => vec![
                format_scientific(*max_log_f0_error),
                format_scientific(*max_mel_cep_distortion),
                format_scientific(*max_single_error),
            ],
            AccuracyValues::Basic { max_single_error } => vec![format!("{max_single_error:.2}")],
            AccuracyValues::NoAccuracyData => Vec::new(),
        }
    }
}

/// Scientific notation with two fractional digits and a signed two-digit
/// exponent, e.g. `1.50E-03`
pub fn format_scientific(value: f64) -> String {
    let formatted = format!("{value:.2E}");
    match formatted.split_once('E') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}E{sign}{:02}", exp.unsigned_abs())
            }
            Err(_) => formatted,
        },
        None => formatted,
    }
}
