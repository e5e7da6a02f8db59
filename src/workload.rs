//! Random workload generation.
//!
//! Produces valid process sets for demos, benchmarks and property tests.
//! Generation is deterministic for a seeded RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::ProcessDescriptor;

/// Shape of a generated workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival (ticks, inclusive).
    pub max_arrival: i64,
    /// Shortest burst (ticks, inclusive, at least 1).
    pub min_burst: i64,
    /// Longest burst (ticks, inclusive).
    pub max_burst: i64,
    /// Largest priority value; priorities are drawn from `1..=max_priority`.
    pub max_priority: i32,
}

impl WorkloadConfig {
    /// Creates a config for `count` processes with small default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            max_priority: 5,
        }
    }

    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority;
        self
    }
}

/// Generates `config.count` processes named `P1..Pn`.
///
/// Out-of-range bounds are clamped so the result always passes validation
/// for every policy: arrivals in `0..=max_arrival`, bursts >= 1, and a
/// priority on every process.
pub fn generate<R: Rng>(config: &WorkloadConfig, rng: &mut R) -> Vec<ProcessDescriptor> {
    let max_arrival = config.max_arrival.max(0);
    let min_burst = config.min_burst.max(1);
    let max_burst = config.max_burst.max(min_burst);
    let max_priority = config.max_priority.max(1);

    (1..=config.count)
        .map(|n| {
            ProcessDescriptor::new(
                format!("P{n}"),
                rng.random_range(0..=max_arrival),
                rng.random_range(min_burst..=max_burst),
            )
            .with_priority(rng.random_range(1..=max_priority))
        })
        .collect()
}
