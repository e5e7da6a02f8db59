//! CPU scheduling domain models.
//!
//! Provides the input and output types shared by every policy:
//! process descriptors going in, an execution timeline coming out.
//!
//! # Domain Mappings
//!
//! | cpu-schedule-sim | OS textbook | Batch system |
//! |------------------|-------------|--------------|
//! | ProcessDescriptor | PCB (static part) | Job |
//! | ScheduleEntry | Gantt segment | Run slot |
//! | Schedule | Gantt chart | Run log |

mod process;
mod schedule;

pub use process::ProcessDescriptor;
pub use schedule::{GanttBar, Schedule, ScheduleEntry};
