//! Per-process and aggregate scheduling metrics.
//!
//! Derives standard CPU scheduling measures from the original process
//! descriptors and a schedule produced by any policy.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//!
//! Completion is the latest end of a process's busy segments and first
//! start is the start of its earliest one, so preemptive schedules with
//! several segments per process are handled.
//!
//! Averages divide by the number of descriptors, not the number of
//! schedule entries.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{ProcessDescriptor, ScheduleEntry};

/// Metrics for a single process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Start of the first busy segment.
    pub first_start: i64,
    /// End of the last busy segment.
    pub completion_time: i64,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
    /// Time from arrival to first execution.
    pub response_time: i64,
}

/// Metrics for a whole schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    /// Per-process metrics (process_id → metrics).
    pub per_process: HashMap<String, ProcessMetrics>,
    /// Mean waiting time over all descriptors.
    pub avg_waiting_time: f64,
    /// Mean turnaround time over all descriptors.
    pub avg_turnaround_time: f64,
    /// Mean response time over all descriptors.
    pub avg_response_time: f64,
}

/// Contract violations detected while computing metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// A busy entry names a process absent from the descriptor set.
    UnknownProcessId(String),
    /// An idle entry was passed in; idle slots have no descriptor.
    IdleEntry { start: i64, completion: i64 },
    /// No descriptors, so averages are undefined.
    EmptyProcessSet,
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProcessId(id) => write!(f, "UnknownProcessID: no descriptor for '{id}'"),
            Self::IdleEntry { start, completion } => write!(
                f,
                "UnknownProcessID: idle entry [{start}, {completion}) has no descriptor; \
                 filter idle entries before computing metrics"
            ),
            Self::EmptyProcessSet => write!(f, "cannot compute metrics for an empty process set"),
        }
    }
}

impl std::error::Error for MetricsError {}

impl MetricsResult {
    /// Computes metrics from descriptors and busy schedule entries.
    ///
    /// # Errors
    /// - [`MetricsError::IdleEntry`] if `entries` contains an idle slot.
    /// - [`MetricsError::UnknownProcessId`] if a busy entry has no descriptor.
    /// - [`MetricsError::EmptyProcessSet`] if `processes` is empty.
    ///
    /// # Example
    /// ```
    /// use cpu_schedule_sim::metrics::MetricsResult;
    /// use cpu_schedule_sim::models::ProcessDescriptor;
    /// use cpu_schedule_sim::policies::{Fcfs, SchedulingPolicy};
    ///
    /// let processes = vec![
    ///     ProcessDescriptor::new("P1", 0, 5),
    ///     ProcessDescriptor::new("P2", 1, 3),
    /// ];
    /// let schedule = Fcfs.schedule(&processes);
    /// let metrics = MetricsResult::calculate(&processes, &schedule.busy_entries()).unwrap();
    /// assert_eq!(metrics.get("P2").unwrap().waiting_time, 4);
    /// ```
    pub fn calculate(
        processes: &[ProcessDescriptor],
        entries: &[ScheduleEntry],
    ) -> Result<Self, MetricsError> {
        if processes.is_empty() {
            return Err(MetricsError::EmptyProcessSet);
        }

        let by_id: HashMap<&str, &ProcessDescriptor> =
            processes.iter().map(|p| (p.id.as_str(), p)).collect();

        // process_id → (first start, latest completion)
        let mut spans: HashMap<&str, (i64, i64)> = HashMap::new();
        for entry in entries {
            let (process_id, start, completion) = match entry {
                ScheduleEntry::Busy {
                    process_id,
                    start,
                    completion,
                } => (process_id.as_str(), *start, *completion),
                ScheduleEntry::Idle { start, completion } => {
                    return Err(MetricsError::IdleEntry {
                        start: *start,
                        completion: *completion,
                    });
                }
            };
            if !by_id.contains_key(process_id) {
                return Err(MetricsError::UnknownProcessId(process_id.to_string()));
            }

            spans
                .entry(process_id)
                .and_modify(|span| span.1 = span.1.max(completion))
                .or_insert((start, completion));
        }

        let mut per_process = HashMap::with_capacity(spans.len());
        let (mut total_waiting, mut total_turnaround, mut total_response) = (0i64, 0i64, 0i64);

        for (process_id, (first_start, completion_time)) in spans {
            let process = by_id[process_id];
            let turnaround_time = completion_time - process.arrival_time;
            let waiting_time = turnaround_time - process.burst_time;
            let response_time = first_start - process.arrival_time;

            total_waiting += waiting_time;
            total_turnaround += turnaround_time;
            total_response += response_time;

            per_process.insert(
                process_id.to_string(),
                ProcessMetrics {
                    first_start,
                    completion_time,
                    waiting_time,
                    turnaround_time,
                    response_time,
                },
            );
        }

        let count = processes.len() as f64;
        Ok(Self {
            per_process,
            avg_waiting_time: total_waiting as f64 / count,
            avg_turnaround_time: total_turnaround as f64 / count,
            avg_response_time: total_response as f64 / count,
        })
    }

    /// Metrics of a single process.
    pub fn get(&self, process_id: &str) -> Option<&ProcessMetrics> {
        self.per_process.get(process_id)
    }

    /// Whether every average is within the given bounds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, max_avg_response: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.avg_response_time <= max_avg_response
    }
}
