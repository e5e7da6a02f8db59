//! Input validation for simulation requests.
//!
//! The policies assume well-formed input; this module is the boundary
//! that guarantees it. Detects:
//! - Empty or duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Missing priorities when the priority policy is selected
//! - Non-positive Round Robin quantum

use std::collections::HashSet;
use std::fmt;

use crate::models::ProcessDescriptor;
use crate::policies::PolicyKind;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has an empty ID.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires no CPU time (or less).
    NonPositiveBurst,
    /// The priority policy is selected but a process has no priority.
    MissingPriority,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates process descriptors for the given policy.
///
/// Checks:
/// 1. No empty process IDs
/// 2. No duplicate process IDs
/// 3. Arrival time >= 0
/// 4. Burst time >= 1
/// 5. Every process has a priority, if the policy needs one
/// 6. Round Robin quantum >= 1
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessDescriptor], policy: &PolicyKind) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (index, p) in processes.iter().enumerate() {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process #{index} has an empty ID"),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' arrives at {} (< 0)", p.id, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has burst time {} (< 1)", p.id, p.burst_time),
            ));
        }

        if policy.requires_priority() && p.priority.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process '{}' has no priority", p.id),
            ));
        }
    }

    if let Some(quantum) = policy.quantum() {
        if quantum <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveQuantum,
                format!("Round Robin quantum must be positive, got {quantum}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<ProcessDescriptor> {
        vec![
            ProcessDescriptor::new("P1", 0, 5).with_priority(2),
            ProcessDescriptor::new("P2", 1, 3).with_priority(1),
        ]
    }

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind.clone()).collect()
    }

    #[test]
    fn test_valid_input() {
        let processes = sample_processes();
        for policy in PolicyKind::all(2) {
            assert!(validate_processes(&processes, &policy).is_ok());
        }
    }

    #[test]
    fn test_empty_process_set_is_valid() {
        assert!(validate_processes(&[], &PolicyKind::Fcfs).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 1),
            ProcessDescriptor::new("P1", 1, 1),
        ];
        let errors = validate_processes(&processes, &PolicyKind::Fcfs).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::DuplicateId]);
        assert!(errors[0].message.contains("P1"));
    }

    #[test]
    fn test_empty_id() {
        let processes = vec![ProcessDescriptor::new("  ", 0, 1)];
        let errors = validate_processes(&processes, &PolicyKind::Fcfs).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::EmptyId]);
    }

    #[test]
    fn test_negative_arrival_and_bad_burst() {
        let processes = vec![ProcessDescriptor::new("P1", -1, 0)];
        let errors = validate_processes(&processes, &PolicyKind::Sjf).unwrap_err();
        assert_eq!(
            kinds(&errors),
            vec![
                ValidationErrorKind::NegativeArrival,
                ValidationErrorKind::NonPositiveBurst
            ]
        );
    }

    #[test]
    fn test_missing_priority_only_for_priority_policy() {
        let processes = vec![ProcessDescriptor::new("P1", 0, 2)];
        assert!(validate_processes(&processes, &PolicyKind::Srtf).is_ok());

        let errors = validate_processes(&processes, &PolicyKind::Priority).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::MissingPriority]);
    }

    #[test]
    fn test_non_positive_quantum() {
        let processes = sample_processes();
        let errors =
            validate_processes(&processes, &PolicyKind::RoundRobin { quantum: 0 }).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::NonPositiveQuantum]);
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![
            ProcessDescriptor::new("", 0, 1),
            ProcessDescriptor::new("P1", 0, -4),
        ];
        let errors =
            validate_processes(&processes, &PolicyKind::RoundRobin { quantum: -2 }).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate process ID: P1");
        assert_eq!(err.to_string(), "DuplicateId: Duplicate process ID: P1");
    }
}
