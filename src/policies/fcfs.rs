//! First-Come-First-Served.
//!
//! # Algorithm
//! 1. Order processes by arrival time (stable).
//! 2. Run each to completion in that order; when the CPU would be idle,
//!    jump the clock to the next arrival without recording the gap.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.

use super::{arrival_order, SchedulingPolicy};
use crate::models::{ProcessDescriptor, Schedule};

/// Non-preemptive First-Come-First-Served.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> Schedule {
        let mut schedule = Schedule::new();
        let mut clock: i64 = 0;

        for i in arrival_order(processes) {
            let process = &processes[i];
            let start = clock.max(process.arrival_time);
            let completion = start + process.burst_time;
            schedule.push_busy(process.id.clone(), start, completion);
            clock = completion;
        }

        log::debug!("FCFS: {} entries, makespan {}", schedule.len(), clock);
        schedule
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleEntry;

    #[test]
    fn test_fcfs_textbook_example() {
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 5),
            ProcessDescriptor::new("P2", 1, 3),
            ProcessDescriptor::new("P3", 2, 8),
        ];
        let schedule = Fcfs.schedule(&processes);
        assert_eq!(
            schedule.entries(),
            &[
                ScheduleEntry::busy("P1", 0, 5),
                ScheduleEntry::busy("P2", 5, 8),
                ScheduleEntry::busy("P3", 8, 16),
            ]
        );
    }

    #[test]
    fn test_fcfs_orders_by_arrival() {
        let processes = vec![
            ProcessDescriptor::new("late", 4, 2),
            ProcessDescriptor::new("early", 0, 3),
        ];
        let schedule = Fcfs.schedule(&processes);
        assert_eq!(schedule.entries()[0].process_id(), Some("early"));
        // early ends at 3, late arrives at 4 → gap skipped, no idle entry
        assert_eq!(schedule.entries()[1], ScheduleEntry::busy("late", 4, 6));
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_fcfs_ties_keep_input_order() {
        let processes = vec![
            ProcessDescriptor::new("B", 0, 1),
            ProcessDescriptor::new("A", 0, 1),
            ProcessDescriptor::new("C", 0, 1),
        ];
        let ids: Vec<_> = Fcfs
            .schedule(&processes)
            .entries()
            .iter()
            .filter_map(|e| e.process_id().map(str::to_string))
            .collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_fcfs_first_arrival_after_zero() {
        let processes = vec![ProcessDescriptor::new("P1", 3, 2)];
        let schedule = Fcfs.schedule(&processes);
        assert_eq!(schedule.entries(), &[ScheduleEntry::busy("P1", 3, 5)]);
    }
}
