//! CPU scheduling policies.
//!
//! Each policy turns a set of process descriptors into an ordered
//! execution timeline. Policies are stateless between calls: the
//! descriptors (and the quantum, for Round Robin) are the whole input.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule_sim::models::ProcessDescriptor;
//! use cpu_schedule_sim::policies::{Fcfs, SchedulingPolicy};
//!
//! let processes = vec![
//!     ProcessDescriptor::new("P1", 0, 5),
//!     ProcessDescriptor::new("P2", 1, 3),
//! ];
//! let schedule = Fcfs.schedule(&processes);
//! assert_eq!(schedule.makespan(), 8);
//! ```
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection key | Tie-break |
//! |--------|-----------|---------------|-----------|
//! | FCFS | no | arrival | input order |
//! | SJF | no | burst | remaining order |
//! | SRTF | yes | remaining burst | arrival |
//! | Round Robin | yes (quantum) | queue head | arrival order |
//! | Priority | no | priority value | remaining order |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use priority::PriorityScheduling;
pub use round_robin::RoundRobin;
pub use sjf::{ShortestJobFirst, ShortestRemainingTimeFirst};

use std::fmt::Debug;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::models::{ProcessDescriptor, Schedule};
use crate::validation::{ValidationError, ValidationErrorKind};

/// A CPU scheduling discipline.
///
/// Implementations must be deterministic: the same descriptors always
/// yield the same schedule. Caller-owned descriptors are never mutated.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Short policy name (e.g., "FCFS", "SRTF").
    fn name(&self) -> &'static str;

    /// Simulates the policy over `processes`.
    ///
    /// Input is assumed valid (see [`crate::validation`]). An empty
    /// slice yields an empty schedule.
    fn schedule(&self, processes: &[ProcessDescriptor]) -> Schedule;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Serializable policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyKind {
    /// First-Come-First-Served.
    Fcfs,
    /// Non-preemptive Shortest-Job-First.
    Sjf,
    /// Preemptive Shortest-Job-First (shortest remaining time).
    Srtf,
    /// Round Robin with the given quantum.
    RoundRobin { quantum: i64 },
    /// Non-preemptive priority scheduling.
    Priority,
}

impl PolicyKind {
    /// All selectable policies, Round Robin with the given quantum.
    pub fn all(quantum: i64) -> [PolicyKind; 5] {
        [
            PolicyKind::Fcfs,
            PolicyKind::Sjf,
            PolicyKind::Srtf,
            PolicyKind::RoundRobin { quantum },
            PolicyKind::Priority,
        ]
    }

    /// Whether every descriptor must carry a priority.
    pub fn requires_priority(&self) -> bool {
        matches!(self, PolicyKind::Priority)
    }

    /// Configured quantum, for Round Robin.
    pub fn quantum(&self) -> Option<i64> {
        match self {
            PolicyKind::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }

    /// Instantiates the selected policy.
    ///
    /// Fails only for a non-positive Round Robin quantum.
    pub fn build(&self) -> Result<Box<dyn SchedulingPolicy>, ValidationError> {
        Ok(match *self {
            PolicyKind::Fcfs => Box::new(Fcfs),
            PolicyKind::Sjf => Box::new(ShortestJobFirst),
            PolicyKind::Srtf => Box::new(ShortestRemainingTimeFirst),
            PolicyKind::RoundRobin { quantum } => {
                let quantum = u64::try_from(quantum)
                    .ok()
                    .and_then(NonZeroU64::new)
                    .ok_or_else(|| {
                        ValidationError::new(
                            ValidationErrorKind::NonPositiveQuantum,
                            format!("Round Robin quantum must be positive, got {quantum}"),
                        )
                    })?;
                Box::new(RoundRobin::new(quantum))
            }
            PolicyKind::Priority => Box::new(PriorityScheduling),
        })
    }
}

/// Indices of `processes` ordered by arrival time. Ties keep input order.
pub(crate) fn arrival_order(processes: &[ProcessDescriptor]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival_time);
    order
}

/// Shared stepping loop of the non-preemptive selection policies.
///
/// `remaining` is the traversal order. At each step the first process
/// (in that order) with the minimum `key` among those arrived by the
/// clock runs to completion. When nothing has arrived the clock jumps to
/// the earliest pending arrival; no idle entry is recorded.
pub(crate) fn run_non_preemptive<K, F>(
    processes: &[ProcessDescriptor],
    mut remaining: Vec<usize>,
    key: F,
) -> Schedule
where
    K: Ord,
    F: Fn(&ProcessDescriptor) -> K,
{
    let mut schedule = Schedule::new();
    let mut clock: i64 = 0;

    while !remaining.is_empty() {
        let selected = remaining
            .iter()
            .enumerate()
            .filter(|&(_, &i)| processes[i].arrival_time <= clock)
            .min_by_key(|&(_, &i)| key(&processes[i]))
            .map(|(pos, _)| pos);

        let Some(pos) = selected else {
            // Nothing arrived yet; `remaining` is non-empty here.
            if let Some(next) = remaining.iter().map(|&i| processes[i].arrival_time).min() {
                log::trace!("clock {clock} -> {next}: no process arrived");
                clock = next;
            }
            continue;
        };

        let process = &processes[remaining.remove(pos)];
        let start = clock.max(process.arrival_time);
        let completion = start + process.burst_time;
        log::trace!("dispatch {} over [{start}, {completion})", process.id);
        schedule.push_busy(process.id.clone(), start, completion);
        clock = completion;
    }

    schedule
}
