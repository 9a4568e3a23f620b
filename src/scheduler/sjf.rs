//! Shortest-Job-First scheduling, non-preemptive and preemptive (SRTF).
//!
//! # Non-preemptive
//!
//! Stable-sorts by `(arrival_time, burst_time)` and then runs exactly like
//! FCFS. Burst order is only consulted among processes sharing an arrival
//! time; a short job arriving later never overtakes an earlier long one.
//!
//! # Preemptive (Shortest Remaining Time First)
//!
//! Whenever the ready set changes, the ready process with the least
//! remaining time takes the CPU. Ties go to the process listed first in
//! the input. Time jumps from one decision point (an arrival or a
//! completion) to the next instead of advancing one unit at a time; the
//! resulting timeline is the same as a unit-step simulation.
//!
//! # Complexity
//! Non-preemptive: O(n log n). Preemptive: O(n log n), since every
//! preemption is caused by an arrival.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::trace;

use super::fcfs::run_to_completion;
use super::{ensure_valid, Scheduler};
use crate::error::Result;
use crate::models::{Process, Simulation, SimulationResult};

/// Shortest-Job-First scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::{Scheduler, Sjf};
///
/// let processes = vec![Process::new("P1", 0, 8), Process::new("P2", 1, 4)];
///
/// let results = Sjf::preemptive().run(&processes).unwrap();
/// assert_eq!(results[0].pid, "P2");
/// assert_eq!(results[0].completion_time, 5);
/// assert_eq!(results[1].completion_time, 12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf {
    preemptive: bool,
}

impl Sjf {
    /// Creates an SJF scheduler; `preemptive` selects SRTF.
    pub fn new(preemptive: bool) -> Self {
        Self { preemptive }
    }

    /// Non-preemptive SJF.
    pub fn non_preemptive() -> Self {
        Self::new(false)
    }

    /// Shortest Remaining Time First.
    pub fn preemptive() -> Self {
        Self::new(true)
    }

    /// Whether this scheduler preempts.
    pub fn is_preemptive(&self) -> bool {
        self.preemptive
    }
}

impl Scheduler for Sjf {
    fn name(&self) -> &'static str {
        if self.preemptive {
            "SRTF"
        } else {
            "SJF"
        }
    }

    fn simulate(&self, processes: &[Process]) -> Result<Simulation> {
        ensure_valid(self.name(), processes)?;

        if self.preemptive {
            return Ok(shortest_remaining_first(processes));
        }

        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| (processes[i].arrival_time, processes[i].burst_time));
        Ok(run_to_completion(processes, &order))
    }
}

fn shortest_remaining_first(processes: &[Process]) -> Simulation {
    let mut simulation = Simulation::new();

    let mut arrivals: Vec<usize> = (0..processes.len()).collect();
    arrivals.sort_by_key(|&i| processes[i].arrival_time);
    let mut next_arrival = 0;

    // Keyed by (remaining time, input index): equal remaining times favour
    // the process submitted first.
    let mut ready: BinaryHeap<Reverse<(i64, usize)>> = BinaryHeap::new();
    let mut current_time = 0;

    loop {
        while let Some(&idx) = arrivals.get(next_arrival) {
            if processes[idx].arrival_time > current_time {
                break;
            }
            ready.push(Reverse((processes[idx].burst_time, idx)));
            next_arrival += 1;
        }

        let upcoming = arrivals
            .get(next_arrival)
            .map(|&idx| processes[idx].arrival_time);

        let Some(Reverse((remaining, idx))) = ready.pop() else {
            match upcoming {
                // CPU idle until the next arrival.
                Some(arrival) => {
                    current_time = arrival;
                    continue;
                }
                None => break,
            }
        };

        let process = &processes[idx];
        let run_for = match upcoming {
            Some(arrival) => remaining.min(arrival - current_time),
            None => remaining,
        };
        trace!(
            "{} runs {current_time}..{} ({remaining} remaining)",
            process.pid,
            current_time + run_for
        );

        simulation.record_slice(&process.pid, current_time, current_time + run_for);
        current_time += run_for;

        let remaining = remaining - run_for;
        if remaining == 0 {
            simulation.add_result(SimulationResult::from_completion(process, current_time));
        } else {
            ready.push(Reverse((remaining, idx)));
        }
    }

    simulation
}
