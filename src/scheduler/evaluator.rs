//! Constraint evaluation.
//!
//! Partitions a constraint list into satisfied and violated names by
//! invoking each stored predicate against the finished schedule. No
//! mutation, no memory between calls.

use log::debug;

use crate::models::{Constraint, Schedule};

/// Constraint names partitioned by outcome, in constraint-list order.
#[derive(Debug, Clone, Default)]
pub struct ConstraintReport {
    /// Names of constraints the schedule satisfies.
    pub satisfied: Vec<String>,
    /// Names of constraints the schedule violates.
    pub violated: Vec<String>,
}

/// Evaluates every constraint against a finished schedule.
pub fn evaluate_constraints(schedule: &Schedule, constraints: &[Constraint]) -> ConstraintReport {
    let mut report = ConstraintReport::default();
    for constraint in constraints {
        if constraint.is_satisfied_by(schedule) {
            report.satisfied.push(constraint.name.clone());
        } else {
            debug!("constraint violated: {}", constraint.name);
            report.violated.push(constraint.name.clone());
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{standard_constraints, ConstraintKind};
    use std::sync::Arc;

    #[test]
    fn test_empty_schedule_satisfies_standard_set() {
        let report = evaluate_constraints(&Schedule::new(), &standard_constraints());
        assert_eq!(report.satisfied.len(), 5);
        assert!(report.violated.is_empty());
    }

    #[test]
    fn test_partition_preserves_list_order() {
        let constraints = vec![
            Constraint::hard("always-fails", Arc::new(|_| false)),
            Constraint::soft("always-passes", 0.5, Arc::new(|_| true)),
            Constraint::soft("fails-too", 0.5, Arc::new(|_| false)),
        ];
        let report = evaluate_constraints(&Schedule::new(), &constraints);
        assert_eq!(report.satisfied, vec!["always-passes"]);
        assert_eq!(report.violated, vec!["always-fails", "fails-too"]);
        assert_eq!(constraints[0].kind, ConstraintKind::Hard);
    }

    #[test]
    fn test_evaluation_is_stateless() {
        let constraints = vec![Constraint::hard("always-fails", Arc::new(|_| false))];
        let first = evaluate_constraints(&Schedule::new(), &constraints);
        let second = evaluate_constraints(&Schedule::new(), &constraints);
        assert_eq!(first.violated, second.violated);
    }
}
