//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time (ties keep submission order).
//! 2. Run each to completion in that order, idling until it arrives if the
//!    CPU is free earlier.
//!
//! # Complexity
//! O(n log n) for the sort, then a single pass.

use log::trace;

use super::{ensure_valid, Scheduler};
use crate::error::Result;
use crate::models::{Process, Simulation, SimulationResult};

/// Non-preemptive arrival-order scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{Fcfs, Scheduler};
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let results = Fcfs.run(&processes).unwrap();
/// assert_eq!(results[1].completion_time, 8);
/// assert_eq!(results[1].waiting_time, 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn simulate(&self, processes: &[Process]) -> Result<Simulation> {
        ensure_valid(self.name(), processes)?;

        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival_time);

        Ok(run_to_completion(processes, &order))
    }
}

/// Runs processes back to back in the given index order.
///
/// Each process starts at `max(current_time, arrival_time)` and holds the
/// CPU until it finishes.
pub(super) fn run_to_completion(processes: &[Process], order: &[usize]) -> Simulation {
    let mut simulation = Simulation::new();
    let mut current_time = 0;

    for &idx in order {
        let process = &processes[idx];
        let start = current_time.max(process.arrival_time);
        let completion = process.finish_if_started_at(start);
        trace!("{} runs {start}..{completion}", process.pid);

        simulation.record_slice(&process.pid, start, completion);
        simulation.add_result(SimulationResult::from_completion(process, completion));
        current_time = completion;
    }

    simulation
}
