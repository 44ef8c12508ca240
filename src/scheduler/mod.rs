//! Greedy timetable construction, evaluation, and scoring.
//!
//! # Pipeline
//!
//! 1. [`GreedyScheduler`] places entries with a deterministic first-fit
//!    heuristic and records shortfall suggestions.
//! 2. [`evaluate_constraints`] partitions the request's constraints
//!    into satisfied and violated against the finished schedule.
//! 3. [`score_schedule`] folds constraint penalties, teacher idle time,
//!    and workload balance into a 0–100 score.
//! 4. [`optimize_schedule`] assembles everything into an
//!    [`OptimizationResult`].
//!
//! The engine is single-threaded and synchronous with no internal
//! cancellation; callers with very large inputs should wrap it in an
//! external time budget.

mod availability;
mod evaluator;
mod greedy;
mod optimize;
mod rooms;
mod score;

pub use availability::{is_room_available, is_teacher_available};
pub use evaluator::{evaluate_constraints, ConstraintReport};
pub use greedy::{AssignmentOutcome, GreedyScheduler};
pub use optimize::{optimize_schedule, OptimizationResult};
pub use rooms::find_room;
pub use score::{score_schedule, teacher_idle_time, workload_balance, ScoreWeights};
