//! Round Robin.
//!
//! # Algorithm
//! 1. Seed a FIFO queue once with every process, ordered by arrival.
//! 2. Pop the head; if it has not arrived yet, jump the clock to its arrival.
//! 3. Run it for `min(quantum, remaining)` ticks.
//! 4. Requeue it at the back if work remains.
//!
//! Arrival is only honored at the head of the queue. A requeued process is
//! not reordered against processes that arrive later; all processes are
//! treated as known up front.
//!
//! # Complexity
//! O(sum(burst) / quantum + n log n).

use std::collections::VecDeque;
use std::num::NonZeroU64;

use super::{arrival_order, SchedulingPolicy};
use crate::models::{ProcessDescriptor, Schedule};

/// Round Robin with a fixed time quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: NonZeroU64,
}

impl RoundRobin {
    /// Creates a Round Robin policy with the given quantum (ticks).
    pub fn new(quantum: NonZeroU64) -> Self {
        Self { quantum }
    }

    /// Time slice granted per dispatch.
    pub fn quantum(&self) -> NonZeroU64 {
        self.quantum
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &[ProcessDescriptor]) -> Schedule {
        let quantum = i64::try_from(self.quantum.get()).unwrap_or(i64::MAX);
        // (index into `processes`, remaining burst)
        let mut queue: VecDeque<(usize, i64)> = arrival_order(processes)
            .into_iter()
            .map(|i| (i, processes[i].burst_time))
            .collect();
        let mut schedule = Schedule::new();
        let mut clock: i64 = 0;

        while let Some((i, remaining)) = queue.pop_front() {
            let process = &processes[i];
            if process.arrival_time > clock {
                clock = process.arrival_time;
            }

            let slice = quantum.min(remaining);
            schedule.push_busy(process.id.clone(), clock, clock + slice);
            clock += slice;

            let left = remaining - slice;
            if left > 0 {
                log::trace!("t={clock}: {} requeued with {left} left", process.id);
                queue.push_back((i, left));
            }
        }

        log::debug!(
            "RR(q={}): {} entries, makespan {}",
            self.quantum,
            schedule.len(),
            clock
        );
        schedule
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleEntry;

    fn rr(quantum: u64) -> RoundRobin {
        RoundRobin::new(NonZeroU64::new(quantum).unwrap())
    }

    #[test]
    fn test_round_robin_basic() {
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 5),
            ProcessDescriptor::new("P2", 1, 3),
            ProcessDescriptor::new("P3", 2, 1),
        ];
        let schedule = rr(2).schedule(&processes);
        assert_eq!(
            schedule.entries(),
            &[
                ScheduleEntry::busy("P1", 0, 2),
                ScheduleEntry::busy("P2", 2, 4),
                ScheduleEntry::busy("P3", 4, 5),
                ScheduleEntry::busy("P1", 5, 7),
                ScheduleEntry::busy("P2", 7, 8),
                ScheduleEntry::busy("P1", 8, 9),
            ]
        );
    }

    #[test]
    fn test_round_robin_large_quantum_is_fcfs() {
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 5),
            ProcessDescriptor::new("P2", 1, 3),
        ];
        let schedule = rr(10).schedule(&processes);
        assert_eq!(
            schedule.entries(),
            &[ScheduleEntry::busy("P1", 0, 5), ScheduleEntry::busy("P2", 5, 8)]
        );
    }

    #[test]
    fn test_round_robin_first_arrival_jump() {
        let processes = vec![ProcessDescriptor::new("P1", 3, 3)];
        let schedule = rr(2).schedule(&processes);
        assert_eq!(
            schedule.entries(),
            &[ScheduleEntry::busy("P1", 3, 5), ScheduleEntry::busy("P1", 5, 6)]
        );
    }

    #[test]
    fn test_round_robin_requeued_process_not_reordered_by_arrival() {
        // P2 arrives at 10, after P1 has been requeued, yet still runs
        // before P1's second slice: the queue was fixed up front.
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 4),
            ProcessDescriptor::new("P2", 10, 1),
        ];
        let schedule = rr(2).schedule(&processes);
        assert_eq!(
            schedule.entries(),
            &[
                ScheduleEntry::busy("P1", 0, 2),
                ScheduleEntry::busy("P2", 10, 11),
                ScheduleEntry::busy("P1", 11, 13),
            ]
        );
    }

    #[test]
    fn test_round_robin_quantum_accessor() {
        assert_eq!(rr(3).quantum().get(), 3);
    }
}
