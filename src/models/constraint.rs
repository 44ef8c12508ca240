//! Timetable constraints.
//!
//! A constraint is plain data: a name, a hard/soft tag, a weight, and a
//! stored predicate over a full schedule. Constraints are passed
//! explicitly into the evaluator and score calculator — there is no
//! global registry and no hidden state.
//!
//! Hard constraints must never be violated and carry a flat score
//! penalty; soft constraints are preferred-but-tolerated and penalize
//! proportionally to their weight. Violations are surfaced in the
//! result but never auto-repaired.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::schedule::Schedule;
use super::slot::Day;

/// Constraint classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintKind {
    /// Zero tolerance; violation incurs a heavy fixed penalty.
    Hard,
    /// Preferred; violation penalized by the configured weight.
    Soft,
}

/// Stored predicate over a finished schedule.
pub type ConstraintCheck = Arc<dyn Fn(&Schedule) -> bool + Send + Sync>;

/// A named rule over a full schedule.
#[derive(Clone)]
pub struct Constraint {
    /// Constraint name, reported in results.
    pub name: String,
    /// Hard or soft.
    pub kind: ConstraintKind,
    /// Penalty weight (only meaningful for soft constraints).
    pub weight: f64,
    validate: ConstraintCheck,
}

impl Constraint {
    /// Creates a hard constraint.
    pub fn hard(name: impl Into<String>, validate: ConstraintCheck) -> Self {
        Self {
            name: name.into(),
            kind: ConstraintKind::Hard,
            weight: 1.0,
            validate,
        }
    }

    /// Creates a soft constraint with the given weight.
    pub fn soft(name: impl Into<String>, weight: f64, validate: ConstraintCheck) -> Self {
        Self {
            name: name.into(),
            kind: ConstraintKind::Soft,
            weight,
            validate,
        }
    }

    /// Runs the stored predicate against a schedule.
    pub fn is_satisfied_by(&self, schedule: &Schedule) -> bool {
        (self.validate)(schedule)
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

/// Subjects preferred in morning periods.
pub const DIFFICULT_SUBJECTS: [&str; 4] =
    ["Mathematics", "Physics", "Chemistry", "Further Mathematics"];

/// Last period counted as "morning" (periods 1..=4).
pub const MORNING_CUTOFF_PERIOD: u8 = 4;

/// Required share of a difficult subject's occurrences in the morning.
pub const MORNING_RATIO: f64 = 0.7;

/// Most periods a class may hold on one day before the daily-load
/// constraint trips.
pub const MAX_DAILY_CLASS_PERIODS: usize = 6;

/// Soft weight for the balanced-daily-load rule.
pub const BALANCED_LOAD_WEIGHT: f64 = 0.8;

/// Soft weight for the difficult-subjects-in-morning rule.
pub const MORNING_SUBJECTS_WEIGHT: f64 = 0.6;

/// Builds the standard constraint set.
///
/// Three hard uniqueness rules (teacher, class, room double booking)
/// and two soft preferences (balanced daily load, difficult subjects
/// in the morning).
pub fn standard_constraints() -> Vec<Constraint> {
    vec![
        Constraint::hard(
            "no-teacher-double-booking",
            Arc::new(|s| no_duplicate_keys(s, |e| Some((e.teacher_id.clone(), e.day, e.period)))),
        ),
        Constraint::hard(
            "no-class-double-booking",
            Arc::new(|s| no_duplicate_keys(s, |e| Some((e.class_id.clone(), e.day, e.period)))),
        ),
        Constraint::hard(
            "no-room-double-booking",
            Arc::new(|s| {
                no_duplicate_keys(s, |e| e.room_id.clone().map(|r| (r, e.day, e.period)))
            }),
        ),
        Constraint::soft(
            "balanced-daily-load",
            BALANCED_LOAD_WEIGHT,
            Arc::new(balanced_daily_load),
        ),
        Constraint::soft(
            "difficult-subjects-in-morning",
            MORNING_SUBJECTS_WEIGHT,
            Arc::new(difficult_subjects_in_morning),
        ),
    ]
}

/// True when the key extractor yields no duplicate across entries.
/// Entries mapped to `None` are exempt.
fn no_duplicate_keys<F>(schedule: &Schedule, key: F) -> bool
where
    F: Fn(&crate::models::ScheduleEntry) -> Option<(String, Day, u8)>,
{
    let mut seen = HashSet::new();
    for entry in &schedule.entries {
        if let Some(k) = key(entry) {
            if !seen.insert(k) {
                return false;
            }
        }
    }
    true
}

/// No class exceeds [`MAX_DAILY_CLASS_PERIODS`] on any single day.
fn balanced_daily_load(schedule: &Schedule) -> bool {
    let mut counts: HashMap<(&str, Day), usize> = HashMap::new();
    for entry in &schedule.entries {
        let count = counts.entry((entry.class_id.as_str(), entry.day)).or_insert(0);
        *count += 1;
        if *count > MAX_DAILY_CLASS_PERIODS {
            return false;
        }
    }
    true
}

/// Each difficult subject has at least [`MORNING_RATIO`] of its
/// occurrences in periods 1..=[`MORNING_CUTOFF_PERIOD`].
///
/// Vacuously true for subjects with zero occurrences.
fn difficult_subjects_in_morning(schedule: &Schedule) -> bool {
    for name in DIFFICULT_SUBJECTS {
        let mut total = 0usize;
        let mut morning = 0usize;
        for entry in &schedule.entries {
            if entry.subject_name == name {
                total += 1;
                if entry.period <= MORNING_CUTOFF_PERIOD {
                    morning += 1;
                }
            }
        }
        if total > 0 && (morning as f64) < MORNING_RATIO * total as f64 {
            return false;
        }
    }
    true
}
