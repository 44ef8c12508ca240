//! Availability predicates.
//!
//! Pure, side-effect-free checks evaluated against the partial schedule
//! built so far. The greedy engine calls these before committing a
//! teacher or room to a slot.

use crate::models::{Day, Schedule, Teacher};

/// Whether a teacher can take the given slot.
///
/// Rejects when the slot is in the teacher's unavailable set, when the
/// teacher already holds an entry at that exact slot, or when the
/// teacher's period count for the day has reached
/// `max_consecutive_periods` (a daily-count cap, not a run length).
pub fn is_teacher_available(teacher: &Teacher, day: Day, period: u8, schedule: &Schedule) -> bool {
    if teacher.is_unavailable_at(day, period) {
        return false;
    }
    if schedule.has_teacher_at(&teacher.id, day, period) {
        return false;
    }
    schedule.teacher_period_count_on(&teacher.id, day) < teacher.max_consecutive_periods as usize
}

/// Whether a room is free at the given slot.
pub fn is_room_available(room_id: &str, day: Day, period: u8, schedule: &Schedule) -> bool {
    !schedule.has_room_at(room_id, day, period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{period_times, Room, RoomType, ScheduleEntry, SchoolClass, Subject};

    fn booked(teacher: &Teacher, day: Day, period: u8) -> ScheduleEntry {
        let class = SchoolClass::new("c1", "JSS 1A");
        let subject = Subject::new("s1", "English", 5);
        let room = Room::new("r1", "Room 101", 40, RoomType::Classroom);
        let (start, end) = period_times(period).unwrap();
        ScheduleEntry::new(&class, &subject, teacher, day, period, start, end).with_room(&room)
    }

    #[test]
    fn test_teacher_free_on_empty_schedule() {
        let t = Teacher::new("t1", "Mr. Bello", 6);
        let s = Schedule::new();
        assert!(is_teacher_available(&t, Day::Monday, 1, &s));
    }

    #[test]
    fn test_teacher_rejected_by_unavailable_slot() {
        let t = Teacher::new("t1", "Mr. Bello", 6).with_unavailable(Day::Monday, 1);
        let s = Schedule::new();
        assert!(!is_teacher_available(&t, Day::Monday, 1, &s));
        assert!(is_teacher_available(&t, Day::Monday, 2, &s));
        assert!(is_teacher_available(&t, Day::Tuesday, 1, &s));
    }

    #[test]
    fn test_teacher_rejected_by_exact_slot_booking() {
        let t = Teacher::new("t1", "Mr. Bello", 6);
        let mut s = Schedule::new();
        s.add_entry(booked(&t, Day::Monday, 3));
        assert!(!is_teacher_available(&t, Day::Monday, 3, &s));
        assert!(is_teacher_available(&t, Day::Monday, 4, &s));
    }

    #[test]
    fn test_teacher_rejected_by_daily_cap() {
        // Cap of 2 periods per day, reached with non-consecutive entries.
        let t = Teacher::new("t1", "Mr. Bello", 2);
        let mut s = Schedule::new();
        s.add_entry(booked(&t, Day::Monday, 1));
        s.add_entry(booked(&t, Day::Monday, 5));
        assert!(!is_teacher_available(&t, Day::Monday, 3, &s));
        // A fresh day is unaffected.
        assert!(is_teacher_available(&t, Day::Tuesday, 1, &s));
    }

    #[test]
    fn test_room_availability() {
        let t = Teacher::new("t1", "Mr. Bello", 6);
        let mut s = Schedule::new();
        s.add_entry(booked(&t, Day::Monday, 1));
        assert!(!is_room_available("r1", Day::Monday, 1, &s));
        assert!(is_room_available("r1", Day::Monday, 2, &s));
        assert!(is_room_available("r2", Day::Monday, 1, &s));
    }
}
