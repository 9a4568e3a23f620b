//! CPU scheduling algorithms and KPI evaluation.
//!
//! Four classical single-CPU policies share one input model (`Process`)
//! and one output model (`Simulation` / `SimulationResult`):
//!
//! | Scheduler | Policy | Preemptive |
//! |-----------|--------|------------|
//! | `Fcfs` | Arrival order | No |
//! | `Sjf::non_preemptive()` | Arrival, then burst | No |
//! | `Sjf::preemptive()` | Shortest remaining time | Yes |
//! | `RoundRobin::new(q)` | FIFO rotation, quantum `q` | Yes |
//!
//! Every run validates its input first and either returns a result for
//! every process or fails without producing any. Runs own all of their
//! bookkeeping, so schedulers are stateless and can be shared across
//! threads.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod request;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use kpi::ScheduleKpi;
pub use request::{Algorithm, SimulationRequest};
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

use std::fmt::Debug;

use log::{debug, warn};

use crate::error::Result;
use crate::models::{Process, Simulation, SimulationResult};
use crate::validation::{validate_processes, ValidationError};

/// A CPU scheduling policy.
///
/// Implementations are pure: the same input always yields the same
/// simulation, and no state survives between runs.
pub trait Scheduler: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "SRTF").
    fn name(&self) -> &'static str;

    /// Runs the policy over `processes`, returning results and timeline.
    ///
    /// Results are in completion order, not input order.
    fn simulate(&self, processes: &[Process]) -> Result<Simulation>;

    /// Runs the policy and returns only the per-process results.
    fn run(&self, processes: &[Process]) -> Result<Vec<SimulationResult>> {
        let simulation = self.simulate(processes)?;
        debug!(
            "{} finished {} processes, makespan {}",
            self.name(),
            simulation.result_count(),
            simulation.makespan()
        );
        Ok(simulation.into_results())
    }
}

/// First-Come-First-Served.
pub fn fcfs(processes: &[Process]) -> Result<Vec<SimulationResult>> {
    Fcfs.run(processes)
}

/// Shortest-Job-First; `preemptive` selects Shortest Remaining Time First.
pub fn sjf(processes: &[Process], preemptive: bool) -> Result<Vec<SimulationResult>> {
    Sjf::new(preemptive).run(processes)
}

/// Round Robin with the given time quantum.
pub fn round_robin(processes: &[Process], quantum: i64) -> Result<Vec<SimulationResult>> {
    RoundRobin::new(quantum).run(processes)
}

/// Validates `processes` for the scheduler called `name`.
pub(crate) fn ensure_valid(name: &str, processes: &[Process]) -> Result<()> {
    reject_invalid(name, validate_processes(processes).err().unwrap_or_default())?;
    debug!("{name} scheduling {} processes", processes.len());
    Ok(())
}

/// Fails with `InvalidInput` if any validation errors were collected.
pub(crate) fn reject_invalid(name: &str, errors: Vec<ValidationError>) -> Result<()> {
    if errors.is_empty() {
        return Ok(());
    }
    warn!("{name} rejected input with {} error(s)", errors.len());
    Err(errors.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;
    use crate::validation::ValidationErrorKind;
    use crate::workload::random_processes;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn all_schedulers() -> Vec<Box<dyn Scheduler>> {
        vec![
            Box::new(Fcfs),
            Box::new(Sjf::non_preemptive()),
            Box::new(Sjf::preemptive()),
            Box::new(RoundRobin::new(1)),
            Box::new(RoundRobin::new(3)),
        ]
    }

    /// Reference SRTF: advance one time unit per step, scanning the input
    /// list for the first process with the least remaining time.
    fn unit_step_srtf(processes: &[Process]) -> Vec<SimulationResult> {
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
        let mut done = vec![false; processes.len()];
        let mut results = Vec::new();
        let mut time = 0;

        while results.len() < processes.len() {
            let mut best: Option<usize> = None;
            for (i, p) in processes.iter().enumerate() {
                let ready = p.arrival_time <= time && !done[i];
                if ready && best.map_or(true, |b| remaining[i] < remaining[b]) {
                    best = Some(i);
                }
            }
            time += 1;
            if let Some(i) = best {
                remaining[i] -= 1;
                if remaining[i] == 0 {
                    done[i] = true;
                    results.push(SimulationResult::from_completion(&processes[i], time));
                }
            }
        }
        results
    }

    #[test]
    fn test_free_functions() {
        let processes = vec![Process::new("1", 0, 5), Process::new("2", 1, 3)];
        assert_eq!(fcfs(&processes).unwrap()[1].completion_time, 8);
        assert_eq!(sjf(&processes, false).unwrap()[1].completion_time, 8);
        assert_eq!(sjf(&processes, true).unwrap()[0].pid, "2");
        assert_eq!(round_robin(&processes, 2).unwrap()[0].completion_time, 7);
        assert!(round_robin(&processes, 0).is_err());
    }

    #[test]
    fn test_single_process_never_waits() {
        init_logger();
        let processes = vec![Process::new("only", 4, 6)];
        for scheduler in all_schedulers() {
            let results = scheduler.run(&processes).unwrap();
            assert_eq!(results.len(), 1, "{}", scheduler.name());
            assert_eq!(results[0].waiting_time, 0, "{}", scheduler.name());
            assert_eq!(results[0].completion_time, 10, "{}", scheduler.name());
        }
    }

    #[test]
    fn test_invalid_input_rejected_by_all() {
        let bad = vec![Process::new("P1", 0, 0)];
        for scheduler in all_schedulers() {
            assert!(matches!(
                scheduler.run(&bad),
                Err(ScheduleError::InvalidInput(_))
            ));
            assert!(scheduler.run(&[]).is_err());
        }
    }

    #[test]
    fn test_clock_overflow_rejected_by_all() {
        let late = vec![Process::new("P1", i64::MAX - 2, 5)];
        let long = vec![Process::new("P1", 0, i64::MAX), Process::new("P2", 0, 2)];
        let mut schedulers = all_schedulers();
        schedulers.push(Box::new(RoundRobin::new(i64::MAX)));

        for scheduler in schedulers {
            for processes in [&late, &long] {
                let err = scheduler.run(processes).unwrap_err();
                assert!(
                    err.validation_errors()
                        .iter()
                        .any(|e| e.kind == ValidationErrorKind::TimeOverflow),
                    "{}",
                    scheduler.name()
                );
            }
        }

        assert!(fcfs(&late).is_err());
        assert!(sjf(&long, true).is_err());
        assert!(round_robin(&long, i64::MAX).is_err());
    }

    #[test]
    fn test_clock_at_limit_runs_without_overflow() {
        let processes = vec![Process::new("P1", i64::MAX - 5, 2), Process::new("P2", 0, 3)];
        let mut schedulers = all_schedulers();
        schedulers.push(Box::new(RoundRobin::new(i64::MAX)));

        for scheduler in schedulers {
            let simulation = scheduler.simulate(&processes).unwrap();
            assert_eq!(
                simulation.result_for("P1").unwrap().completion_time,
                i64::MAX - 3,
                "{}",
                scheduler.name()
            );
        }
    }

    #[test]
    fn test_random_workloads_hold_invariants() {
        init_logger();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let processes = random_processes(8, 20, 9, &mut rng);
            let input_pids: HashSet<&str> = processes.iter().map(|p| p.pid.as_str()).collect();
            let total_burst: i64 = processes.iter().map(|p| p.burst_time).sum();

            for scheduler in all_schedulers() {
                let simulation = scheduler.simulate(&processes).unwrap();
                let name = scheduler.name();

                // Completeness
                let output_pids: HashSet<&str> =
                    simulation.results.iter().map(|r| r.pid.as_str()).collect();
                assert_eq!(simulation.results.len(), processes.len(), "{name}");
                assert_eq!(output_pids, input_pids, "{name}");

                // Non-negativity
                for r in &simulation.results {
                    assert!(r.waiting_time >= 0, "{name}: {r:?}");
                    assert!(r.turnaround_time >= r.burst_time, "{name}: {r:?}");
                }

                // Timeline accounts for exactly the requested CPU time
                assert_eq!(simulation.busy_time(), total_burst, "{name}");
                for r in &simulation.results {
                    let served: i64 = simulation.slices_for(&r.pid).iter().map(|s| s.duration()).sum();
                    assert_eq!(served, r.burst_time, "{name}");
                    let last_end = simulation.slices_for(&r.pid).iter().map(|s| s.end).max();
                    assert_eq!(last_end, Some(r.completion_time), "{name}");
                }

                // Idempotence
                assert_eq!(scheduler.simulate(&processes).unwrap(), simulation, "{name}");
            }
        }
    }

    #[test]
    fn test_srtf_matches_unit_step_reference() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let processes = random_processes(6, 12, 6, &mut rng);
            let fast = Sjf::preemptive().run(&processes).unwrap();
            assert_eq!(fast, unit_step_srtf(&processes), "{processes:?}");
        }
    }

    #[test]
    fn test_schedulers_are_shareable() {
        let processes = vec![Process::new("P1", 0, 3), Process::new("P2", 1, 2)];
        let scheduler: std::sync::Arc<dyn Scheduler> = std::sync::Arc::new(RoundRobin::new(1));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let scheduler = scheduler.clone();
                let processes = processes.clone();
                std::thread::spawn(move || scheduler.run(&processes).unwrap())
            })
            .collect();
        let outputs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    }
}
