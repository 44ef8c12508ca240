//! School timetable scheduling engine.
//!
//! Assigns subject-teaching periods to the cells of a fixed weekly grid
//! (5 days × 8 periods) across classes, teachers, and rooms under hard
//! and soft constraints, producing a timetable plus a 0–100 quality
//! score and shortfall diagnostics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`models::SchedulingRequest`],
//!   [`models::Schedule`], [`models::Constraint`], the weekly grid
//! - **`scheduler`**: The greedy assignment engine, constraint
//!   evaluator, score calculator, and result assembler
//!
//! # Design
//!
//! The algorithm is a strict first-fit heuristic: it commits the first
//! feasible teacher + room pair at each slot and never backtracks. The
//! goal is a usable timetable quickly, not a provably optimal one.
//! Input list order is the documented tie-break rule, so identical
//! requests produce byte-identical results. Unsatisfiable pairs are
//! reported as suggestions, never raised as errors.

pub mod models;
pub mod scheduler;

pub use scheduler::{optimize_schedule, OptimizationResult};
