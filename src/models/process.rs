//! Process descriptor model.
//!
//! A process descriptor is the immutable input to every scheduling
//! policy: identity, arrival instant, CPU demand and an optional priority.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled on the single simulated CPU.
///
/// Policies never mutate descriptors; anything that consumes burst time
/// during a run keeps its own remaining-time counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique process identifier.
    pub id: String,
    /// Instant the process becomes eligible to run (ticks, >= 0).
    pub arrival_time: i64,
    /// Total CPU time required (ticks, >= 1).
    pub burst_time: i64,
    /// Scheduling priority (lower value = higher priority).
    /// Only consulted by the priority policy.
    #[serde(default)]
    pub priority: Option<i32>,
}

impl ProcessDescriptor {
    /// Creates a descriptor without a priority.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Priority used for ordering. Missing priorities rank last.
    #[inline]
    pub fn priority_key(&self) -> i32 {
        self.priority.unwrap_or(i32::MAX)
    }
}
