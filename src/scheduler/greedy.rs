//! Greedy assignment engine.
//!
//! # Algorithm
//!
//! Single-pass, first-fit, no backtracking:
//!
//! 1. For each subject (input order), for each class (input order):
//! 2. Walk days Monday→Friday and periods 1→8, stopping once the
//!    subject's weekly requirement is met.
//! 3. Skip slots where the class already has a lesson; otherwise take
//!    the first teacher (input order) passing the availability check,
//!    then ask the room matcher for a room. Commit only when both
//!    succeed; a tentative teacher choice with no room is discarded,
//!    not reserved.
//! 4. A committed entry ends the period scan for that day, so a
//!    (subject, class) pair receives at most one period per day.
//!
//! Later pairs never cause earlier commitments to be revisited. When a
//! pair cannot reach its weekly requirement, a human-readable shortfall
//! suggestion is recorded and the engine moves on; nothing is raised.
//!
//! # Complexity
//! O(subjects × classes × days × periods × (teachers + rooms)), fully
//! deterministic for identical input orderings.

use log::{debug, trace};

use crate::models::{
    period_times, Day, Schedule, ScheduleEntry, SchedulingRequest, SchoolClass, Subject,
    PERIODS_PER_DAY,
};

use super::availability::is_teacher_available;
use super::rooms::find_room;

/// Output of one assignment pass: the schedule plus shortfall notes.
#[derive(Debug, Clone, Default)]
pub struct AssignmentOutcome {
    /// The schedule built by the pass.
    pub schedule: Schedule,
    /// One human-readable note per under-assigned (subject, class) pair.
    pub suggestions: Vec<String>,
}

/// First-fit greedy scheduler.
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler;

impl GreedyScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Assigns subject periods to slots for every (subject, class) pair.
    pub fn assign(&self, request: &SchedulingRequest) -> AssignmentOutcome {
        let mut schedule = Schedule::new();
        let mut suggestions = Vec::new();

        for subject in &request.subjects {
            for class in &request.classes {
                let assigned = self.assign_pair(subject, class, request, &mut schedule);
                if assigned < subject.weekly_periods {
                    trace!(
                        "shortfall: {} for {} got {}/{} periods",
                        subject.name,
                        class.name,
                        assigned,
                        subject.weekly_periods
                    );
                    suggestions.push(format!(
                        "Could not fully schedule {} for {}: assigned {} of {} weekly periods",
                        subject.name, class.name, assigned, subject.weekly_periods
                    ));
                }
            }
        }

        debug!(
            "greedy pass placed {} entries with {} shortfalls",
            schedule.len(),
            suggestions.len()
        );
        AssignmentOutcome {
            schedule,
            suggestions,
        }
    }

    /// Places periods for one (subject, class) pair; returns how many
    /// were committed.
    fn assign_pair(
        &self,
        subject: &Subject,
        class: &SchoolClass,
        request: &SchedulingRequest,
        schedule: &mut Schedule,
    ) -> u8 {
        let mut assigned: u8 = 0;

        'week: for day in Day::ALL {
            if assigned >= subject.weekly_periods {
                break;
            }
            for period in 1..=PERIODS_PER_DAY {
                if schedule.has_class_at(&class.id, day, period) {
                    continue;
                }
                let teacher = match request
                    .teachers
                    .iter()
                    .find(|t| is_teacher_available(t, day, period, schedule))
                {
                    Some(t) => t,
                    None => continue,
                };
                let room = match find_room(subject, day, period, &request.rooms, schedule) {
                    Some(r) => r,
                    None => continue,
                };
                let (start, end) = match period_times(period) {
                    Some(times) => times,
                    None => continue,
                };

                schedule.add_entry(
                    ScheduleEntry::new(class, subject, teacher, day, period, start, end)
                        .with_room(room),
                );
                assigned += 1;
                // One period of a subject per class per day.
                continue 'week;
            }
        }

        assigned
    }
}
