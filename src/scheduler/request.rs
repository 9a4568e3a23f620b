//! Simulation requests: algorithm selection plus its parameters.
//!
//! A request is what a caller hands over to get one scheduling run: the
//! processes, which algorithm to use, and that algorithm's knobs.
//! Requests deserialize from the usual JSON shape:
//!
//! ```json
//! { "algorithm": "round_robin", "processes": [...], "quantum": 2 }
//! ```
//!
//! Process pids may be JSON strings or integers. Algorithm names are
//! case-insensitive. Absent fields take the defaults `quantum = None` and
//! `preemptive = false`. A Round Robin request without a quantum is
//! rejected as `InvalidInput`.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::{Fcfs, RoundRobin, Scheduler, Sjf};
use crate::error::{Result, ScheduleError};
use crate::models::{Process, Simulation, SimulationResult};

/// Scheduling algorithm selector.
///
/// Names are matched case-insensitively, by `FromStr` and by serde alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case", try_from = "String")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First (SRTF when preemptive).
    Sjf,
    /// Round Robin.
    #[strum(to_string = "round_robin", serialize = "rr", serialize = "round-robin")]
    RoundRobin,
}

impl TryFrom<String> for Algorithm {
    type Error = ScheduleError;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
            .map_err(|_: strum::ParseError| ScheduleError::UnknownAlgorithm(name))
    }
}

/// Input container for one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Algorithm to run.
    pub algorithm: Algorithm,
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Round Robin quantum. Ignored by other algorithms.
    #[serde(default)]
    pub quantum: Option<i64>,
    /// SJF preemption flag. Ignored by other algorithms.
    #[serde(default)]
    pub preemptive: bool,
}

impl SimulationRequest {
    /// Creates a request with default parameters.
    pub fn new(algorithm: Algorithm, processes: Vec<Process>) -> Self {
        Self {
            algorithm,
            processes,
            quantum: None,
            preemptive: false,
        }
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Sets the SJF preemption flag.
    pub fn with_preemptive(mut self, preemptive: bool) -> Self {
        self.preemptive = preemptive;
        self
    }

    /// Builds the scheduler this request selects.
    pub fn scheduler(&self) -> Box<dyn Scheduler> {
        match self.algorithm {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf::new(self.preemptive)),
            Algorithm::RoundRobin => Box::new(RoundRobin::new(self.quantum.unwrap_or(0))),
        }
    }

    /// Runs the request, returning results and timeline.
    pub fn simulate(&self) -> Result<Simulation> {
        self.scheduler().simulate(&self.processes)
    }

    /// Runs the request, returning only per-process results.
    pub fn run(&self) -> Result<Vec<SimulationResult>> {
        self.scheduler().run(&self.processes)
    }
}
