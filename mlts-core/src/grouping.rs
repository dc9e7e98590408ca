//! Grouping of benchmark runs by test name

use crate::run::BenchmarkRun;
use std::collections::BTreeMap;

/// Runs of one test case across backends
#[derive(Debug, Clone, PartialEq)]
pub struct RunGroup {
    /// Shared test case name
    pub name: String,
    /// Runs ordered by backend
    pub runs: Vec<BenchmarkRun>,
}

impl RunGroup {
    /// The run whose evaluator keys decide the accuracy columns of the group
    pub fn representative(&self) -> Option<&BenchmarkRun> {
        self.runs.first()
    }
}

/// Group runs by name, ordering groups by name and runs by backend.
///
/// Names compare byte-wise, so ordering is case-sensitive. Runs sharing a
/// backend keep their input order.
pub fn group_runs(runs: Vec<BenchmarkRun>) -> Vec<RunGroup> {
    let mut by_name: BTreeMap<String, Vec<BenchmarkRun>> = BTreeMap::new();
    for run in runs {
        by_name.entry(run.name.clone()).or_default().push(run);
    }

    let groups: Vec<RunGroup> = by_name
        .into_iter()
        .map(|(name, mut runs)| {
            runs.sort_by(|a, b| a.backend.cmp(&b.backend));
            RunGroup { name, runs }
        })
        .collect();

    log::debug!("Formed {} result group(s)", groups.len());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::LatencyHistogram;
    use proptest::prelude::*;

    fn run(name: &str, backend: &str, iterations: u64) -> BenchmarkRun {
        BenchmarkRun {
            name: name.to_string(),
            backend: backend.to_string(),
            iterations,
            total_time_sec: 1.0,
            max_single_error: 0.0,
            testset_size: 1,
            evaluators: Vec::new(),
            latency: LatencyHistogram {
                start_sec: 0.0,
                step_sec: 0.001,
                bucket_counts: vec![1.0],
            },
        }
    }

    #[test]
    fn test_groups_sorted_by_name() {
        let groups = group_runs(vec![
            run("mobilenet", "cpu", 1),
            run("Inception", "cpu", 1),
            run("inception", "cpu", 1),
        ]);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Inception", "inception", "mobilenet"]);
    }

    #[test]
    fn test_backends_sorted_within_group() {
        let groups = group_runs(vec![run("B", "gpu", 1), run("B", "cpu", 1)]);
        assert_eq!(groups.len(), 1);
        let backends: Vec<&str> = groups[0].runs.iter().map(|r| r.backend.as_str()).collect();
        assert_eq!(backends, vec!["cpu", "gpu"]);
    }

    #[test]
    fn test_equal_backends_keep_input_order() {
        let groups = group_runs(vec![
            run("A", "nnapi", 1),
            run("A", "cpu", 2),
            run("A", "nnapi", 3),
            run("A", "cpu", 4),
        ]);
        let order: Vec<u64> = groups[0].runs.iter().map(|r| r.iterations).collect();
        assert_eq!(order, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_runs(Vec::new()).is_empty());
    }

    #[test]
    fn test_representative_is_first_backend() {
        let groups = group_runs(vec![run("A", "tflite", 1), run("A", "nnapi", 2)]);
        assert_eq!(groups[0].representative().unwrap().backend, "nnapi");
    }

    proptest! {
        #[test]
        fn prop_grouping_is_a_partition(
            rows in prop::collection::vec(("[a-c]{1,2}", "[a-d]{1,3}"), 0..40)
        ) {
            let runs: Vec<BenchmarkRun> = rows
                .iter()
                .enumerate()
                .map(|(i, (name, backend))| run(name, backend, i as u64 + 1))
                .collect();

            let groups = group_runs(runs.clone());

            let mut seen: Vec<u64> = Vec::new();
            for group in &groups {
                prop_assert!(!group.runs.is_empty());
                for pair in group.runs.windows(2) {
                    prop_assert!(pair[0].backend <= pair[1].backend);
                }
                for r in &group.runs {
                    prop_assert_eq!(&r.name, &group.name);
                    seen.push(r.iterations);
                }
            }
            for pair in groups.windows(2) {
                prop_assert!(pair[0].name < pair[1].name);
            }

            seen.sort_unstable();
            let expected: Vec<u64> = (1..=runs.len() as u64).collect();
            prop_assert_eq!(seen, expected);
        }
    }
}
