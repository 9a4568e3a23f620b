//! Scheduling domain models.
//!
//! Provides the shared input and output data types used by every
//! scheduling algorithm in this crate.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Input: a schedulable unit |
//! | `SimulationResult` | Output: per-process timing metrics |
//! | `Slice` | Output: one contiguous CPU interval |
//! | `Simulation` | Output: results plus timeline of one run |

mod process;
mod result;
mod simulation;

pub use process::Process;
pub use result::SimulationResult;
pub use simulation::{Simulation, Slice};
