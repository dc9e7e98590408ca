//! Benchmark result records

/// Session metadata from the first data line of a benchmark log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// Benchmark start time, as written by the device
    pub started_at: String,
    /// Free-form device description
    pub device: String,
}

/// One named accuracy metric reported by an evaluator
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatorResult {
    /// Metric name, e.g. `top_1`
    pub key: String,
    /// Metric value
    pub value: f64,
}

/// Latency distribution over fixed-width buckets
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyHistogram {
    /// Lower bound of the first bucket, in seconds
    pub start_sec: f64,
    /// Width of each bucket, in seconds
    pub step_sec: f64,
    /// Iterations that fell into each bucket
    pub bucket_counts: Vec<f64>,
}

impl LatencyHistogram {
    /// Lower bound of every bucket in milliseconds
    pub fn bucket_starts_ms(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.bucket_counts.len())
            .map(move |i| (self.start_sec + i as f64 * self.step_sec) * 1000.0)
    }
}

/// One benchmark result row
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRun {
    /// Test case name
    pub name: String,
    /// Backend the test ran on
    pub backend: String,
    /// Number of iterations, always positive
    pub iterations: u64,
    /// Total elapsed time in seconds
    pub total_time_sec: f64,
    /// Largest single-value error, meaning depends on the evaluator
    pub max_single_error: f64,
    /// Number of entries in the test set
    pub testset_size: u64,
    /// Evaluator metrics in reported order
    pub evaluators: Vec<EvaluatorResult>,
    /// Latency distribution
    pub latency: LatencyHistogram,
}

impl BenchmarkRun {
    /// Evaluator metric names in reported order
    pub fn evaluator_keys(&self) -> Vec<&str> {
        self.evaluators.iter().map(|e| e.key.as_str()).collect()
    }

    /// Evaluator metric values, parallel to [`Self::evaluator_keys`]
    pub fn evaluator_values(&self) -> Vec<f64> {
        self.evaluators.iter().map(|e| e.value).collect()
    }

    /// Value of the named evaluator metric
    pub fn evaluator(&self, key: &str) -> Option<f64> {
        self.evaluators
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value)
    }

    /// Mean latency per iteration in milliseconds
    pub fn average_latency_ms(&self) -> f64 {
        self.total_time_sec / self.iterations as f64 * 1000.0
    }
}
