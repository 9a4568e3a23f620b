//! CPU scheduling simulation.
//!
//! Computes single-CPU timelines for a fixed set of submitted processes
//! under four classical policies and derives completion, turnaround, and
//! waiting time for each process.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `SimulationResult`, `Simulation`, `Slice`
//! - **`scheduler`**: `Fcfs`, `Sjf` (with SRTF mode), `RoundRobin`, KPIs, requests
//! - **`validation`**: Input integrity checks (empty input, duplicate PIDs, bad times, quantum)
//! - **`workload`**: Random process-set generation
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//! use cpu_sched::scheduler;
//!
//! let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
//! let results = scheduler::round_robin(&processes, 2).unwrap();
//! assert_eq!(results[0].pid, "P2");
//! assert_eq!(results[0].completion_time, 7);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, ScheduleError};
