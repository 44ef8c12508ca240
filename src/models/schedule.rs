//! Schedule (solution) model.
//!
//! A schedule is an append-only list of [`ScheduleEntry`] values, each
//! binding one (class, subject) to one (day, period) with a chosen
//! teacher and room. The engine builds it within a single run; nothing
//! here is persisted.

use serde::{Deserialize, Serialize};

use super::request::{Room, SchoolClass, Subject, Teacher};
use super::slot::{Day, SlotKey};

/// One lesson placed on the weekly grid.
///
/// The entry id is deterministic: `{classId}-{subjectId}-{Day}-{period}`.
/// Room fields are optional so that constraint predicates can reason
/// about entries without rooms; the greedy engine always sets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Deterministic entry identifier.
    pub id: String,
    /// School day.
    pub day: Day,
    /// Period number (1-based).
    pub period: u8,
    /// Period start time ("HH:MM").
    pub start_time: String,
    /// Period end time ("HH:MM").
    pub end_time: String,
    /// Subject identifier.
    pub subject_id: String,
    /// Subject name.
    pub subject_name: String,
    /// Teacher identifier.
    pub teacher_id: String,
    /// Teacher name.
    pub teacher_name: String,
    /// Class identifier.
    pub class_id: String,
    /// Class name.
    pub class_name: String,
    /// Assigned room identifier, if any.
    pub room_id: Option<String>,
    /// Assigned room name, if any.
    pub room_name: Option<String>,
}

impl ScheduleEntry {
    /// Creates an entry without a room.
    pub fn new(
        class: &SchoolClass,
        subject: &Subject,
        teacher: &Teacher,
        day: Day,
        period: u8,
        start_time: &str,
        end_time: &str,
    ) -> Self {
        Self {
            id: format!("{}-{}-{}-{}", class.id, subject.id, day, period),
            day,
            period,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            subject_id: subject.id.clone(),
            subject_name: subject.name.clone(),
            teacher_id: teacher.id.clone(),
            teacher_name: teacher.name.clone(),
            class_id: class.id.clone(),
            class_name: class.name.clone(),
            room_id: None,
            room_name: None,
        }
    }

    /// Sets the room.
    pub fn with_room(mut self, room: &Room) -> Self {
        self.room_id = Some(room.id.clone());
        self.room_name = Some(room.name.clone());
        self
    }

    /// The (day, period) cell this entry occupies.
    #[inline]
    pub fn slot(&self) -> SlotKey {
        SlotKey::new(self.day, self.period)
    }
}

/// A weekly timetable under construction or completed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Placed lessons, in assignment order.
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries for a teacher.
    pub fn entries_for_teacher(&self, teacher_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.teacher_id == teacher_id)
            .collect()
    }

    /// All entries for a class.
    pub fn entries_for_class(&self, class_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.class_id == class_id)
            .collect()
    }

    /// Number of periods a teacher already holds on a day.
    pub fn teacher_period_count_on(&self, teacher_id: &str, day: Day) -> usize {
        self.entries
            .iter()
            .filter(|e| e.teacher_id == teacher_id && e.day == day)
            .count()
    }

    /// Whether a teacher already occupies the given slot.
    pub fn has_teacher_at(&self, teacher_id: &str, day: Day, period: u8) -> bool {
        self.entries
            .iter()
            .any(|e| e.teacher_id == teacher_id && e.day == day && e.period == period)
    }

    /// Whether a room already hosts a lesson at the given slot.
    pub fn has_room_at(&self, room_id: &str, day: Day, period: u8) -> bool {
        self.entries
            .iter()
            .any(|e| e.room_id.as_deref() == Some(room_id) && e.day == day && e.period == period)
    }

    /// Whether a class already has a lesson at the given slot.
    pub fn has_class_at(&self, class_id: &str, day: Day, period: u8) -> bool {
        self.entries
            .iter()
            .any(|e| e.class_id == class_id && e.day == day && e.period == period)
    }

    /// Teacher ids in order of first appearance.
    pub fn teacher_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for e in &self.entries {
            if !ids.contains(&e.teacher_id.as_str()) {
                ids.push(e.teacher_id.as_str());
            }
        }
        ids
    }
}
