//! Random workload generation.
//!
//! Produces valid process sets for demos, benchmarks, and invariant tests.

use rand::Rng;

use crate::models::Process;

/// Generates `count` processes named `P1..Pn`.
///
/// Arrival times are drawn from `0..=max_arrival` and burst times from
/// `1..=max_burst`. Out-of-range bounds are clamped so the output always
/// passes validation (when `count > 0`).
pub fn random_processes<R: Rng>(
    count: usize,
    max_arrival: i64,
    max_burst: i64,
    rng: &mut R,
) -> Vec<Process> {
    let max_arrival = max_arrival.max(0);
    let max_burst = max_burst.max(1);

    (1..=count)
        .map(|i| {
            Process::new(
                format!("P{i}"),
                rng.random_range(0..=max_arrival),
                rng.random_range(1..=max_burst),
            )
        })
        .collect()
}
