//! Process model.
//!
//! A process is the schedulable unit: it becomes eligible at its arrival
//! time and needs `burst_time` units of CPU before it finishes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Deserializer, Serialize};

/// A process submitted to a scheduling run.
///
/// Immutable for the duration of a run. Identity is the `pid`; uniqueness
/// is checked by [`crate::validation::validate_processes`], not here.
///
/// # Time Representation
/// All times are abstract integer time units relative to t=0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier. Integer pids deserialize to their decimal form.
    #[serde(deserialize_with = "deserialize_pid")]
    pub pid: String,
    /// Time unit at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(pid: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
        }
    }

    /// Time unit at which the process would finish if started at `start`
    /// and run without interruption.
    #[inline]
    pub fn finish_if_started_at(&self, start: i64) -> i64 {
        start + self.burst_time
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPid {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

fn deserialize_pid<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawPid::deserialize(deserializer)? {
        RawPid::Text(pid) => pid,
        RawPid::Signed(pid) => pid.to_string(),
        RawPid::Unsigned(pid) => pid.to_string(),
    })
}
