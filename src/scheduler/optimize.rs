//! Result assembly and the public entry point.
//!
//! [`optimize_schedule`] runs the greedy pass, evaluates constraints,
//! scores the result, and packages everything into an
//! [`OptimizationResult`]. It is a pure function of its input: identical
//! requests (same list orderings) produce byte-identical output, so
//! separate invocations may run concurrently with no locking — each
//! owns its input and output exclusively.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{ScheduleEntry, SchedulingRequest};

use super::evaluator::evaluate_constraints;
use super::greedy::GreedyScheduler;
use super::score::{score_schedule, ScoreWeights};

/// Everything a caller gets back from one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// The produced weekly timetable.
    pub schedule: Vec<ScheduleEntry>,
    /// Quality score in [0, 100].
    pub score: i32,
    /// Names of satisfied constraints, in constraint-list order.
    pub satisfied_constraints: Vec<String>,
    /// Names of violated constraints, in constraint-list order.
    pub violated_constraints: Vec<String>,
    /// Shortfall notes for under-assigned (subject, class) pairs.
    pub suggestions: Vec<String>,
    /// Reserved extension point; always empty.
    pub alternative_schedules: Vec<Vec<ScheduleEntry>>,
}

/// Produces a weekly timetable for the request.
///
/// Best-effort partial coverage: unsatisfiable pairs become suggestion
/// strings, never errors. Degenerate input (empty teacher or room
/// lists) yields an empty schedule plus suggestions. Violated hard
/// constraints are reported but never auto-repaired.
pub fn optimize_schedule(request: &SchedulingRequest) -> OptimizationResult {
    let outcome = GreedyScheduler::new().assign(request);
    let report = evaluate_constraints(&outcome.schedule, &request.constraints);
    let score = score_schedule(&outcome.schedule, &request.constraints, &ScoreWeights::default());

    debug!(
        "optimized: {} entries, score {}, {} violated constraints, {} suggestions",
        outcome.schedule.len(),
        score,
        report.violated.len(),
        outcome.suggestions.len()
    );

    OptimizationResult {
        schedule: outcome.schedule.entries,
        score,
        satisfied_constraints: report.satisfied,
        violated_constraints: report.violated,
        suggestions: outcome.suggestions,
        alternative_schedules: Vec::new(),
    }
}
