//! Input validation for simulation configurations.
//!
//! Checks a [`SimConfig`](crate::sim::SimConfig) for structural problems
//! before running. Detects:
//! - Pending work with no servers to process it
//! - Servers that can never advance a task (speed 0)
//! - An empty task length range
//!
//! Validation is advisory and caller-invoked; `Simulation::new` accepts
//! any configuration, and the degenerate ones terminate in zero ticks.

use crate::sim::SimConfig;

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
    /// Tasks are pending but the fleet is empty.
    NoServers,
    /// A server group has speed 0: its queue could never drain.
    ZeroSpeed,
    /// Random task lengths are requested from an empty range.
    EmptyLengthRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a simulation configuration.
///
/// Checks:
/// 1. At least one server exists when tasks are pending
/// 2. Every populated server group has a positive speed
/// 3. `max_task_length` is positive when random tasks will be drawn
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &SimConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.tasks > 0 && config.server_count() == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoServers,
            format!("{} tasks pending but no servers configured", config.tasks),
        ));
    }

    if config.fast_servers > 0 && config.fast_speed == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroSpeed,
            "fast server group has speed 0",
        ));
    }
    if config.slow_servers > 0 && config.slow_speed == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroSpeed,
            "slow server group has speed 0",
        ));
    }

    if config.tasks > 0 && config.max_task_length == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyLengthRange,
            "max_task_length is 0, task lengths cannot be drawn",
        ));
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

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&SimConfig::new(100, 100, 10_000)).is_ok());
    }

    #[test]
    fn test_empty_run_is_valid() {
        // No tasks and no servers is a defined degenerate case, not an error
        assert!(validate_config(&SimConfig::new(0, 0, 0)).is_ok());
    }

    #[test]
    fn test_tasks_without_servers() {
        let errors = validate_config(&SimConfig::new(0, 0, 10)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NoServers);
    }

    #[test]
    fn test_zero_speed_group() {
        let config = SimConfig::new(2, 2, 10).with_speeds(3, 0);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ZeroSpeed);
    }

    #[test]
    fn test_zero_speed_empty_group_ignored() {
        // A speed-0 group with no members can harm nothing
        let config = SimConfig::new(2, 0, 10).with_speeds(3, 0);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_length_range() {
        let config = SimConfig::new(1, 1, 10).with_max_task_length(0);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyLengthRange);
    }

    #[test]
    fn test_all_issues_collected() {
        let config = SimConfig::new(0, 1, 10)
            .with_speeds(3, 0)
            .with_max_task_length(0);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
