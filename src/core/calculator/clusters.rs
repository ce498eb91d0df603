//! Close-cluster detection shared by the classifier and the insight summary.

use std::ops::Range;

/// Adjacent check-ins at most this far apart belong to the same cluster.
pub const CLUSTER_GAP_MS: i64 = 60_000;

/// Split ascending epoch-millisecond instants into maximal runs whose
/// adjacent gaps are all `<= CLUSTER_GAP_MS`. Singletons are returned too.
pub fn close_runs(epochs: &[i64]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = 0;

    for i in 0..epochs.len() {
        let is_last = i + 1 == epochs.len();
        if is_last || epochs[i + 1] - epochs[i] > CLUSTER_GAP_MS {
            runs.push(start..i + 1);
            start = i + 1;
        }
    }

    runs
}

/// A run only counts as a cluster with at least two check-ins.
pub fn is_cluster(run: &Range<usize>) -> bool {
    run.len() >= 2
}
