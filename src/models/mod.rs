//! Timetabling domain models.
//!
//! Core data types for representing a scheduling request and its
//! solution: the static weekly grid, the request-side registries
//! (classes, subjects, teachers, rooms), the schedule under
//! construction, and the constraint records evaluated against it.

mod constraint;
mod request;
mod schedule;
mod slot;

pub use constraint::{
    standard_constraints, Constraint, ConstraintCheck, ConstraintKind, BALANCED_LOAD_WEIGHT,
    DIFFICULT_SUBJECTS, MAX_DAILY_CLASS_PERIODS, MORNING_CUTOFF_PERIOD, MORNING_RATIO,
    MORNING_SUBJECTS_WEIGHT,
};
pub use request::{Room, RoomType, SchedulingRequest, SchoolClass, Subject, Teacher};
pub use schedule::{Schedule, ScheduleEntry};
pub use slot::{period_times, weekly_slots, Day, SlotKey, TimeSlot, PERIODS_PER_DAY};
