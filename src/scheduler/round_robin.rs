//! Round Robin scheduling with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Seed a FIFO queue with every process in submission order.
//! 2. Pop the front process. If it has not arrived yet, advance the clock
//!    to its arrival time.
//! 3. Run it for `min(quantum, remaining)`.
//! 4. Emit a result if it finished, otherwise push it to the back.
//!
//! # Admission order
//!
//! The queue is seeded up front and never re-sorted, so rotation order is
//! submission order even for processes that arrive later. A process listed
//! early with a late arrival makes the clock jump to its arrival when it
//! reaches the front, even if processes behind it arrived sooner.

use std::collections::VecDeque;

use log::{debug, trace};

use super::{reject_invalid, Scheduler};
use crate::error::Result;
use crate::models::{Process, Simulation, SimulationResult};
use crate::validation::{validate_processes, validate_quantum};

/// Fixed-quantum Round Robin scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{RoundRobin, Scheduler};
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let results = RoundRobin::new(2).run(&processes).unwrap();
/// assert_eq!(results[0].pid, "P2");
/// assert_eq!(results[0].completion_time, 7);
/// assert_eq!(results[1].completion_time, 8);
///
/// assert!(RoundRobin::new(0).run(&processes).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round Robin scheduler.
    ///
    /// The quantum is checked when a run starts; a non-positive value makes
    /// every run fail with `InvalidInput`.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// Time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn simulate(&self, processes: &[Process]) -> Result<Simulation> {
        let mut errors = validate_processes(processes).err().unwrap_or_default();
        if let Err(quantum_errors) = validate_quantum(self.quantum) {
            errors.extend(quantum_errors);
        }
        reject_invalid(self.name(), errors)?;
        debug!(
            "{} scheduling {} processes, quantum {}",
            self.name(),
            processes.len(),
            self.quantum
        );

        let mut simulation = Simulation::new();
        let mut queue: VecDeque<usize> = (0..processes.len()).collect();
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
        let mut current_time = 0;

        while let Some(idx) = queue.pop_front() {
            let process = &processes[idx];
            current_time = current_time.max(process.arrival_time);

            let run_for = self.quantum.min(remaining[idx]);
            trace!(
                "{} runs {current_time}..{}",
                process.pid,
                current_time + run_for
            );
            simulation.record_slice(&process.pid, current_time, current_time + run_for);
            remaining[idx] -= run_for;
            current_time += run_for;

            if remaining[idx] == 0 {
                simulation.add_result(SimulationResult::from_completion(process, current_time));
            } else {
                queue.push_back(idx);
            }
        }

        Ok(simulation)
    }
}
