//! Schedule (timeline) model.
//!
//! A schedule is the chronological execution timeline produced by a
//! scheduling policy. Each entry is either a busy segment of one process
//! or an idle slot where no process was runnable.
//!
//! # Invariants
//! - Entries are in chronological order.
//! - `completion >= start` for every entry.
//! - Entries never overlap.

use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

/// One segment of the execution timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleEntry {
    /// A process occupies the CPU over `[start, completion)`.
    Busy {
        /// Running process.
        process_id: String,
        /// Segment start (ticks).
        start: i64,
        /// Segment end (ticks).
        completion: i64,
    },
    /// No process is runnable over `[start, completion)`.
    Idle {
        /// Slot start (ticks).
        start: i64,
        /// Slot end (ticks).
        completion: i64,
    },
}

impl ScheduleEntry {
    /// Creates a busy segment.
    pub fn busy(process_id: impl Into<String>, start: i64, completion: i64) -> Self {
        Self::Busy {
            process_id: process_id.into(),
            start,
            completion,
        }
    }

    /// Creates an idle slot.
    pub fn idle(start: i64, completion: i64) -> Self {
        Self::Idle { start, completion }
    }

    #[inline]
    pub fn start(&self) -> i64 {
        match self {
            Self::Busy { start, .. } | Self::Idle { start, .. } => *start,
        }
    }

    #[inline]
    pub fn completion(&self) -> i64 {
        match self {
            Self::Busy { completion, .. } | Self::Idle { completion, .. } => *completion,
        }
    }

    /// Segment length (completion - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.completion() - self.start()
    }

    /// Running process, or `None` for an idle slot.
    pub fn process_id(&self) -> Option<&str> {
        match self {
            Self::Busy { process_id, .. } => Some(process_id.as_str()),
            Self::Idle { .. } => None,
        }
    }

    /// Whether this is an idle slot.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle { .. })
    }

    fn set_completion(&mut self, value: i64) {
        match self {
            Self::Busy { completion, .. } | Self::Idle { completion, .. } => *completion = value,
        }
    }
}

/// A bar of a Gantt-style chart, anchored to an absolute reference epoch.
///
/// Offsets are interpreted as seconds after the epoch. The mapping exists
/// for visualization only; simulation time stays integral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttBar {
    /// Row label (`Process <id>` or `Idle`).
    pub label: String,
    /// Absolute start.
    pub start: SystemTime,
    /// Absolute finish.
    pub finish: SystemTime,
}

/// A complete execution timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schedule from already-ordered entries.
    pub fn from_entries(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Appends a busy segment.
    pub fn push_busy(&mut self, process_id: impl Into<String>, start: i64, completion: i64) {
        self.entries
            .push(ScheduleEntry::busy(process_id, start, completion));
    }

    /// Appends an idle slot.
    pub fn push_idle(&mut self, start: i64, completion: i64) {
        self.entries.push(ScheduleEntry::idle(start, completion));
    }

    /// Moves the completion of the last entry, if any.
    pub(crate) fn close_last(&mut self, completion: i64) {
        if let Some(last) = self.entries.last_mut() {
            last.set_completion(completion);
        }
    }

    pub(crate) fn last(&self) -> Option<&ScheduleEntry> {
        self.entries.last()
    }

    /// All entries in chronological order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Consumes the schedule, returning its entries.
    pub fn into_entries(self) -> Vec<ScheduleEntry> {
        self.entries
    }

    /// Number of entries (busy and idle).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of this schedule with idle slots removed.
    ///
    /// The metrics calculator only accepts busy entries.
    pub fn busy_entries(&self) -> Vec<ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| !e.is_idle())
            .cloned()
            .collect()
    }

    /// Busy segments of a given process.
    pub fn entries_for_process(&self, process_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.process_id() == Some(process_id))
            .collect()
    }

    /// Latest completion across all entries (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.completion()).max().unwrap_or(0)
    }

    /// Total busy time across all processes.
    pub fn busy_time(&self) -> i64 {
        self.entries
            .iter()
            .filter(|e| !e.is_idle())
            .map(|e| e.duration())
            .sum()
    }

    /// CPU utilization: busy_time / makespan.
    ///
    /// Returns `None` if the makespan is zero.
    pub fn cpu_utilization(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// Completion time for a process (latest end of its segments).
    pub fn completion_time(&self, process_id: &str) -> Option<i64> {
        self.entries_for_process(process_id)
            .iter()
            .map(|e| e.completion())
            .max()
    }

    /// Returns a copy where every gap on `[0, makespan)` is an explicit idle slot.
    ///
    /// Non-preemptive policies jump the clock over gaps without recording
    /// them; renderers that need a fully accounted timeline use this.
    /// Adjacent idle slots are merged.
    pub fn with_idle_gaps(&self) -> Schedule {
        let mut filled = Schedule::new();
        let mut cursor = 0;

        for entry in &self.entries {
            if entry.start() > cursor {
                filled.push_idle_merged(cursor, entry.start());
            }
            if entry.is_idle() {
                filled.push_idle_merged(entry.start(), entry.completion());
            } else {
                filled.push(entry.clone());
            }
            cursor = cursor.max(entry.completion());
        }

        filled
    }

    fn push_idle_merged(&mut self, start: i64, completion: i64) {
        match self.entries.last_mut() {
            Some(last) if last.is_idle() && last.completion() == start => {
                last.set_completion(completion);
            }
            _ => self.push_idle(start, completion),
        }
    }

    /// Maps every entry onto absolute timestamps relative to `epoch`.
    pub fn gantt_bars(&self, epoch: SystemTime) -> Vec<GanttBar> {
        let at = |offset: i64| epoch + Duration::from_secs(u64::try_from(offset).unwrap_or(0));

        self.entries
            .iter()
            .map(|e| GanttBar {
                label: match e.process_id() {
                    Some(id) => format!("Process {id}"),
                    None => "Idle".to_string(),
                },
                start: at(e.start()),
                finish: at(e.completion()),
            })
            .collect()
    }
}
