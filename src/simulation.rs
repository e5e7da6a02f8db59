//! End-to-end simulation runs.
//!
//! # Flow
//!
//! 1. Validate descriptors against the selected policy.
//! 2. Run the policy to obtain the timeline.
//! 3. Drop idle slots and compute metrics over the busy entries.
//!
//! A [`SimulationRequest`] is plain data and (de)serializes with serde, so a
//! presentation layer can hand it over as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::metrics::{MetricsError, MetricsResult};
use crate::models::{ProcessDescriptor, Schedule};
use crate::policies::PolicyKind;
use crate::validation::{validate_processes, ValidationError};

/// Input container for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<ProcessDescriptor>,
    /// Selected policy.
    pub policy: PolicyKind,
}

/// Output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Policy that produced the schedule.
    pub policy: PolicyKind,
    /// Execution timeline, idle slots included.
    pub schedule: Schedule,
    /// Metrics, or `None` when there were no processes.
    pub metrics: Option<MetricsResult>,
}

/// Why a simulation run was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The request failed boundary validation.
    Invalid(Vec<ValidationError>),
    /// The schedule could not be evaluated.
    Metrics(MetricsError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(errors) => {
                write!(f, "invalid simulation request ({} errors)", errors.len())?;
                for e in errors {
                    write!(f, "; {e}")?;
                }
                Ok(())
            }
            Self::Metrics(e) => write!(f, "metrics failed: {e}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(_) => None,
            Self::Metrics(e) => Some(e),
        }
    }
}

impl From<MetricsError> for SimulationError {
    fn from(e: MetricsError) -> Self {
        Self::Metrics(e)
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Invalid(errors)
    }
}

impl SimulationRequest {
    /// Creates a request.
    pub fn new(processes: Vec<ProcessDescriptor>, policy: PolicyKind) -> Self {
        Self { processes, policy }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: ProcessDescriptor) -> Self {
        self.processes.push(process);
        self
    }

    /// Replaces the selected policy.
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    /// Validates, schedules and evaluates the request.
    ///
    /// # Example
    /// ```
    /// use cpu_schedule_sim::models::ProcessDescriptor;
    /// use cpu_schedule_sim::policies::PolicyKind;
    /// use cpu_schedule_sim::simulation::SimulationRequest;
    ///
    /// let report = SimulationRequest::new(Vec::new(), PolicyKind::RoundRobin { quantum: 2 })
    ///     .with_process(ProcessDescriptor::new("P1", 0, 3))
    ///     .with_process(ProcessDescriptor::new("P2", 0, 2))
    ///     .run()
    ///     .unwrap();
    /// assert_eq!(report.schedule.len(), 3);
    /// assert!(report.metrics.is_some());
    /// ```
    pub fn run(&self) -> Result<SimulationReport, SimulationError> {
        if let Err(errors) = validate_processes(&self.processes, &self.policy) {
            log::warn!("rejected {:?} request: {} errors", self.policy, errors.len());
            return Err(errors.into());
        }

        let policy = self.policy.build().map_err(|e| SimulationError::Invalid(vec![e]))?;
        let schedule = policy.schedule(&self.processes);

        let metrics = if self.processes.is_empty() {
            None
        } else {
            Some(MetricsResult::calculate(
                &self.processes,
                &schedule.busy_entries(),
            )?)
        };

        log::debug!(
            "{} over {} processes: {} entries, makespan {}",
            policy.name(),
            self.processes.len(),
            schedule.len(),
            schedule.makespan()
        );

        Ok(SimulationReport {
            policy: self.policy,
            schedule,
            metrics,
        })
    }
}
