//! Per-process simulation result.

use serde::{Deserialize, Serialize};

use super::Process;

/// Outcome of one process in a scheduling run.
///
/// Echoes the input fields and adds the derived timing metrics:
/// - `turnaround_time = completion_time - arrival_time`
/// - `waiting_time = turnaround_time - burst_time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Process identifier.
    pub pid: String,
    /// Arrival time (echoed).
    pub arrival_time: i64,
    /// Burst time (echoed).
    pub burst_time: i64,
    /// Time unit at which the process finished.
    pub completion_time: i64,
    /// Total time spent in the system.
    pub turnaround_time: i64,
    /// Time spent ready but not executing.
    pub waiting_time: i64,
}

impl SimulationResult {
    /// Builds the result for `process` finishing at `completion_time`.
    pub fn from_completion(process: &Process, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            pid: process.pid.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
        }
    }
}
