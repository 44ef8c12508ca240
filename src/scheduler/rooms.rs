//! Room matching.
//!
//! Selects a usable room for a subject at a slot. Lab subjects restrict
//! the candidate pool to lab rooms; the first available candidate in
//! input order wins. There is no capacity-aware ranking: first match is
//! the documented, deterministic tie-break.

use crate::models::{Day, Room, RoomType, Schedule, Subject};

use super::availability::is_room_available;

/// Finds a room for a subject at a slot, or `None` if every candidate
/// is occupied (or, for lab subjects, no lab exists).
pub fn find_room<'a>(
    subject: &Subject,
    day: Day,
    period: u8,
    rooms: &'a [Room],
    schedule: &Schedule,
) -> Option<&'a Room> {
    rooms
        .iter()
        .filter(|room| !subject.requires_lab || room.room_type == RoomType::Lab)
        .find(|room| is_room_available(&room.id, day, period, schedule))
}
