//! Simulation (solution) model.
//!
//! A simulation is the complete outcome of one scheduling run: one result
//! per process, in emission order, plus the CPU timeline that produced them.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::SimulationResult;

/// A contiguous interval during which one process held the CPU.
///
/// Covers `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Running process.
    pub pid: String,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(pid: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            pid: pid.into(),
            start,
            end,
        }
    }

    /// Length of the slice in time units.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// The outcome of a scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simulation {
    /// Per-process results in completion (emission) order.
    pub results: Vec<SimulationResult>,
    /// CPU execution slices in time order. Idle gaps are not recorded.
    pub timeline: Vec<Slice>,
}

impl Simulation {
    /// Creates an empty simulation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished process.
    pub fn add_result(&mut self, result: SimulationResult) {
        self.results.push(result);
    }

    /// Records CPU time for `pid` over `[start, end)`.
    ///
    /// Empty intervals are dropped. An interval that continues the previous
    /// slice of the same process extends it instead of opening a new one.
    pub fn record_slice(&mut self, pid: &str, start: i64, end: i64) {
        if end <= start {
            return;
        }
        if let Some(last) = self.timeline.last_mut() {
            if last.pid == pid && last.end == start {
                last.end = end;
                return;
            }
        }
        self.timeline.push(Slice::new(pid, start, end));
    }

    /// Finds the result for a given process.
    pub fn result_for(&self, pid: &str) -> Option<&SimulationResult> {
        self.results.iter().find(|r| r.pid == pid)
    }

    /// Returns all execution slices of a given process.
    pub fn slices_for(&self, pid: &str) -> Vec<&Slice> {
        self.timeline.iter().filter(|s| s.pid == pid).collect()
    }

    /// Makespan: latest completion time across all results.
    pub fn makespan(&self) -> i64 {
        self.results
            .iter()
            .map(|r| r.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Total time the CPU spent executing.
    pub fn busy_time(&self) -> i64 {
        self.timeline.iter().map(Slice::duration).sum()
    }

    /// Time between t=0 and the makespan during which the CPU was idle.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Number of results.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Splits off the per-process results, dropping the timeline.
    pub fn into_results(self) -> Vec<SimulationResult> {
        self.results
    }
}
