//! Deterministic CPU scheduling simulator.
//!
//! Simulates classic single-CPU scheduling disciplines over a fixed set of
//! process descriptors and reports the execution timeline together with
//! waiting, turnaround and response time.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessDescriptor`, `ScheduleEntry`,
//!   `Schedule`, `GanttBar`
//! - **`policies`**: FCFS, SJF, SRTF, Round Robin and Priority scheduling
//! - **`metrics`**: Per-process and average waiting/turnaround/response time
//! - **`validation`**: Input integrity checks (IDs, times, priority, quantum)
//! - **`simulation`**: Request/report wrapper running validation → policy → metrics
//! - **`workload`**: Seeded random process sets
//!
//! # Architecture
//!
//! Every run is a pure, single-threaded computation: descriptors (and a
//! quantum) in, schedule and metrics out. Nothing is shared between runs,
//! so independent simulations may run concurrently without locking.
//! Logging goes through the `log` facade; the embedding application
//! installs a logger.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod metrics;
pub mod models;
pub mod policies;
pub mod simulation;
pub mod validation;
pub mod workload;
