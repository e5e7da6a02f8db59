//! Non-preemptive priority scheduling.
//!
//! Traversal order is `(arrival, priority)` ascending. At each step the
//! arrived process with the numerically lowest priority runs to
//! completion; ties go to the first one in traversal order.
//!
//! Descriptors without a priority rank below every prioritized process.

use super::{run_non_preemptive, SchedulingPolicy};
use crate::models::{ProcessDescriptor, Schedule};

/// Non-preemptive priority scheduling (lower value = higher priority).
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduling;

impl SchedulingPolicy for PriorityScheduling {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> Schedule {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| (processes[i].arrival_time, processes[i].priority_key()));

        let schedule = run_non_preemptive(processes, order, ProcessDescriptor::priority_key);
        log::debug!(
            "PRIORITY: {} entries, makespan {}",
            schedule.len(),
            schedule.makespan()
        );
        schedule
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleEntry;

    #[test]
    fn test_priority_lower_value_first() {
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 4).with_priority(2),
            ProcessDescriptor::new("P2", 0, 3).with_priority(1),
        ];
        let schedule = PriorityScheduling.schedule(&processes);
        assert_eq!(
            schedule.entries(),
            &[ScheduleEntry::busy("P2", 0, 3), ScheduleEntry::busy("P1", 3, 7)]
        );
    }

    #[test]
    fn test_priority_non_preemptive() {
        // P2 has higher priority but arrives while P1 runs.
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 5).with_priority(3),
            ProcessDescriptor::new("P2", 1, 2).with_priority(1),
            ProcessDescriptor::new("P3", 2, 2).with_priority(2),
        ];
        let schedule = PriorityScheduling.schedule(&processes);
        assert_eq!(
            schedule.entries(),
            &[
                ScheduleEntry::busy("P1", 0, 5),
                ScheduleEntry::busy("P2", 5, 7),
                ScheduleEntry::busy("P3", 7, 9),
            ]
        );
    }

    #[test]
    fn test_priority_tie_first_in_traversal_order() {
        let processes = vec![
            ProcessDescriptor::new("late", 2, 1).with_priority(1),
            ProcessDescriptor::new("B", 0, 3).with_priority(4),
            ProcessDescriptor::new("A", 1, 1).with_priority(1),
        ];
        let schedule = PriorityScheduling.schedule(&processes);
        let ids: Vec<_> = schedule.entries().iter().filter_map(|e| e.process_id()).collect();
        // At t=3 both A and late have priority 1; A precedes late by arrival.
        assert_eq!(ids, vec!["B", "A", "late"]);
    }

    #[test]
    fn test_priority_idle_gap_jump() {
        let processes = vec![ProcessDescriptor::new("P1", 5, 2).with_priority(1)];
        let schedule = PriorityScheduling.schedule(&processes);
        assert_eq!(schedule.entries(), &[ScheduleEntry::busy("P1", 5, 7)]);
    }
}
