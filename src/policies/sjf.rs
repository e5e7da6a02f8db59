//! Shortest-Job-First, non-preemptive and preemptive.
//!
//! # Algorithm (non-preemptive)
//! Among arrived, unscheduled processes pick the minimum burst time and
//! run it to completion. Ties go to the first process in the remaining
//! (arrival-ordered) set.
//!
//! # Algorithm (preemptive, SRTF)
//! Time-stepped: every tick the arrived process with the least remaining
//! burst runs for one unit (ties: earliest arrival). Consecutive ticks of
//! the same process collapse into one entry; periods with nothing
//! runnable are recorded as idle slots.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use super::{arrival_order, run_non_preemptive, SchedulingPolicy};
use crate::models::{ProcessDescriptor, Schedule, ScheduleEntry};

/// Non-preemptive Shortest-Job-First.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobFirst;

impl SchedulingPolicy for ShortestJobFirst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> Schedule {
        let schedule = run_non_preemptive(processes, arrival_order(processes), |p| p.burst_time);
        log::debug!("SJF: {} entries, makespan {}", schedule.len(), schedule.makespan());
        schedule
    }

    fn description(&self) -> &'static str {
        "Non-Preemptive Shortest Job First"
    }
}

/// Preemptive Shortest-Job-First (Shortest Remaining Time First).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemainingTimeFirst;

impl SchedulingPolicy for ShortestRemainingTimeFirst {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> Schedule {
        let order = arrival_order(processes);
        // Remaining burst per process, indexed like `processes`.
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
        let mut pending = processes.len();
        let mut schedule = Schedule::new();
        let mut clock: i64 = 0;
        let mut switches = 0usize;

        while pending > 0 {
            let selected = order
                .iter()
                .copied()
                .filter(|&i| processes[i].arrival_time <= clock && remaining[i] > 0)
                .min_by_key(|&i| (remaining[i], processes[i].arrival_time));

            let Some(i) = selected else {
                // Idle until the next arrival; identical to stepping tick by tick.
                let next = order
                    .iter()
                    .copied()
                    .filter(|&i| remaining[i] > 0)
                    .map(|i| processes[i].arrival_time)
                    .min()
                    .unwrap_or(clock + 1);
                if schedule.last().is_some_and(ScheduleEntry::is_idle) {
                    schedule.close_last(next);
                } else {
                    schedule.push_idle(clock, next);
                }
                clock = next;
                continue;
            };

            let process = &processes[i];
            let previous = schedule.last().and_then(ScheduleEntry::process_id);
            if previous == Some(process.id.as_str()) {
                schedule.close_last(clock + 1);
            } else {
                if let Some(previous) = previous {
                    log::trace!("t={clock}: {} replaces {previous}", process.id);
                    switches += 1;
                }
                schedule.push_busy(process.id.clone(), clock, clock + 1);
            }

            remaining[i] -= 1;
            clock += 1;
            if remaining[i] == 0 {
                pending -= 1;
            }
        }

        log::debug!(
            "SRTF: {} entries, {} switches, makespan {}",
            schedule.len(),
            switches,
            clock
        );
        schedule
    }

    fn description(&self) -> &'static str {
        "Preemptive Shortest Job First"
    }
}
