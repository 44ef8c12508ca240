//! Weekly timetable grid: days, periods, and wall-clock times.
//!
//! The school week is a fixed 5×8 grid of (day, period) cells. Periods
//! are not uniformly spaced: a 20-minute break follows period 3 and a
//! lunch break follows period 6. The grid is static reference data —
//! pure lookup, no behavior.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of teaching periods per school day.
pub const PERIODS_PER_DAY: u8 = 8;

/// A school day (Monday through Friday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All school days in chronological order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Display name of the day.
    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    /// Zero-based position within the week (Monday = 0).
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Day::Monday => 0,
            Day::Tuesday => 1,
            Day::Wednesday => 2,
            Day::Thursday => 3,
            Day::Friday => 4,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wall-clock times per period, shared by all days.
///
/// Periods 4 and 7 start late relative to the preceding period's end:
/// those gaps are the morning break and lunch.
const PERIOD_TIMES: [(&str, &str); PERIODS_PER_DAY as usize] = [
    ("08:00", "08:45"),
    ("08:45", "09:30"),
    ("09:30", "10:15"),
    ("10:35", "11:20"),
    ("11:20", "12:05"),
    ("12:05", "12:50"),
    ("13:40", "14:25"),
    ("14:25", "15:10"),
];

/// Returns the (start, end) clock times for a period.
///
/// Periods are numbered `1..=PERIODS_PER_DAY`; anything else is `None`.
pub fn period_times(period: u8) -> Option<(&'static str, &'static str)> {
    if (1..=PERIODS_PER_DAY).contains(&period) {
        Some(PERIOD_TIMES[(period - 1) as usize])
    } else {
        None
    }
}

/// One cell of the weekly grid with its wall-clock times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// School day.
    pub day: Day,
    /// Period number (1-based).
    pub period: u8,
    /// Period start time ("HH:MM").
    pub start_time: String,
    /// Period end time ("HH:MM").
    pub end_time: String,
}

/// The full weekly grid in (day, period) order.
pub fn weekly_slots() -> Vec<TimeSlot> {
    let mut slots = Vec::with_capacity(Day::ALL.len() * PERIODS_PER_DAY as usize);
    for day in Day::ALL {
        for (i, (start, end)) in PERIOD_TIMES.iter().enumerate() {
            slots.push(TimeSlot {
                day,
                period: (i + 1) as u8,
                start_time: (*start).to_string(),
                end_time: (*end).to_string(),
            });
        }
    }
    slots
}

/// A (day, period) cell reference without clock times.
///
/// Used for teacher unavailability sets and slot-level lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotKey {
    /// School day.
    pub day: Day,
    /// Period number (1-based).
    pub period: u8,
}

impl SlotKey {
    /// Creates a slot key.
    pub fn new(day: Day, period: u8) -> Self {
        Self { day, period }
    }
}
