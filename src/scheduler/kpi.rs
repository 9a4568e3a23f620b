//! Simulation quality metrics (KPIs).
//!
//! Summarizes a completed simulation the way scheduling results are
//! usually compared across algorithms.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Avg Turnaround | Mean of completion - arrival |
//! | Avg Waiting | Mean of turnaround - burst |
//! | Max Waiting | Largest single waiting time |
//! | Throughput | Processes completed per time unit |
//! | CPU Utilization | Busy time / makespan |

use crate::models::Simulation;

/// Simulation performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Largest waiting time of any single process.
    pub max_waiting_time: i64,
    /// Processes completed per time unit over the makespan.
    pub throughput: f64,
    /// Fraction of `[0, makespan)` the CPU was executing (0.0..1.0).
    pub cpu_utilization: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a completed simulation.
    pub fn calculate(simulation: &Simulation) -> Self {
        let count = simulation.result_count();
        let makespan = simulation.makespan();

        let (avg_turnaround_time, avg_waiting_time) = if count == 0 {
            (0.0, 0.0)
        } else {
            let turnaround: i64 = simulation.results.iter().map(|r| r.turnaround_time).sum();
            let waiting: i64 = simulation.results.iter().map(|r| r.waiting_time).sum();
            (
                turnaround as f64 / count as f64,
                waiting as f64 / count as f64,
            )
        };

        let max_waiting_time = simulation
            .results
            .iter()
            .map(|r| r.waiting_time)
            .max()
            .unwrap_or(0);

        let (throughput, cpu_utilization) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                count as f64 / makespan as f64,
                simulation.busy_time() as f64 / makespan as f64,
            )
        };

        Self {
            makespan,
            avg_turnaround_time,
            avg_waiting_time,
            max_waiting_time,
            throughput,
            cpu_utilization,
        }
    }
}
