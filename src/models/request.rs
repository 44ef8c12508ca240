//! Scheduling request models.
//!
//! The input side of the engine: classes, subjects, teachers, rooms,
//! and the constraint list, bundled into a [`SchedulingRequest`].
//!
//! # Ordering Contract
//! The greedy engine scans every list in input order and commits the
//! first feasible choice, so list order is a product-visible tie-break
//! rule: reordering any input list may change the concrete schedule.
//!
//! # Validation
//! This core performs no structural validation of its input (missing
//! ids, zero-period subjects, duplicate entries). That responsibility
//! belongs to the registry assembling the request.

use serde::{Deserialize, Serialize};

use super::constraint::{standard_constraints, Constraint};
use super::slot::{Day, SlotKey};

/// A class (student group) to be timetabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolClass {
    /// Unique class identifier.
    pub id: String,
    /// Human-readable name (e.g., "JSS 1A").
    pub name: String,
}

impl SchoolClass {
    /// Creates a new class.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A subject with its weekly period requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Subject name (e.g., "Mathematics").
    pub name: String,
    /// Periods per week each class must receive.
    pub weekly_periods: u8,
    /// Whether lessons must be held in a lab room.
    pub requires_lab: bool,
}

impl Subject {
    /// Creates a new subject.
    pub fn new(id: impl Into<String>, name: impl Into<String>, weekly_periods: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weekly_periods,
            requires_lab: false,
        }
    }

    /// Marks the subject as requiring a lab room.
    pub fn with_lab(mut self) -> Self {
        self.requires_lab = true;
        self
    }
}

/// A teacher with availability limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Slots where the teacher can never be scheduled.
    pub unavailable_slots: Vec<SlotKey>,
    /// Maximum number of periods the teacher may hold on one day.
    ///
    /// Despite the name carried over from the source system, this caps
    /// the teacher's total daily period count, not a consecutive run.
    pub max_consecutive_periods: u8,
}

impl Teacher {
    /// Creates a new teacher with no unavailable slots.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        max_consecutive_periods: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unavailable_slots: Vec::new(),
            max_consecutive_periods,
        }
    }

    /// Marks a slot as unavailable.
    pub fn with_unavailable(mut self, day: Day, period: u8) -> Self {
        self.unavailable_slots.push(SlotKey::new(day, period));
        self
    }

    /// Whether the teacher is blocked at the given slot.
    pub fn is_unavailable_at(&self, day: Day, period: u8) -> bool {
        self.unavailable_slots
            .iter()
            .any(|s| s.day == day && s.period == period)
    }
}

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// General-purpose teaching room.
    Classroom,
    /// Science laboratory.
    Lab,
    /// Gymnasium.
    Gym,
    /// Assembly hall.
    Auditorium,
}

/// A teaching room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
    /// Room classification.
    pub room_type: RoomType,
}

impl Room {
    /// Creates a new room.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        capacity: u32,
        room_type: RoomType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            room_type,
        }
    }

    /// Creates a classroom.
    pub fn classroom(id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, name, capacity, RoomType::Classroom)
    }

    /// Creates a lab.
    pub fn lab(id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, name, capacity, RoomType::Lab)
    }
}

/// Immutable input for one scheduling run.
///
/// Every class is assumed to take every subject. Constraints travel
/// with the request: they are plain data (name, kind, weight, stored
/// predicate), passed explicitly to the evaluator and score calculator.
#[derive(Debug, Clone)]
pub struct SchedulingRequest {
    /// Classes to timetable, in scan order.
    pub classes: Vec<SchoolClass>,
    /// Subjects to place, in scan order.
    pub subjects: Vec<Subject>,
    /// Teacher pool, in scan order.
    pub teachers: Vec<Teacher>,
    /// Room pool, in scan order.
    pub rooms: Vec<Room>,
    /// Constraints to evaluate against the finished schedule.
    pub constraints: Vec<Constraint>,
}

impl SchedulingRequest {
    /// Creates a request with the standard constraint set.
    pub fn new(
        classes: Vec<SchoolClass>,
        subjects: Vec<Subject>,
        teachers: Vec<Teacher>,
        rooms: Vec<Room>,
    ) -> Self {
        Self {
            classes,
            subjects,
            teachers,
            rooms,
            constraints: standard_constraints(),
        }
    }

    /// Replaces the constraint list.
    pub fn with_constraints(mut self, constraints: Vec<Constraint>) -> Self {
        self.constraints = constraints;
        self
    }
}
