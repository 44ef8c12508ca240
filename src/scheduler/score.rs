//! Schedule quality scoring.
//!
//! Combines constraint penalties with idle-time and workload-balance
//! heuristics into a single 0–100 integer:
//!
//! 1. Start at 100.
//! 2. −`hard_violation_penalty` per violated hard constraint.
//! 3. −`weight × soft_violation_factor` per violated soft constraint.
//! 4. −`idle_penalty` per unit of teacher idle time (unfilled periods
//!    strictly between a teacher's first and last period of a day).
//! 5. +`balance_bonus × mean(max(0, baseline − variance))` where the
//!    variance is each teacher's daily period count variance across
//!    the five weekdays.
//! 6. Clamp to [0, 100] and round to the nearest integer.
//!
//! The weights are named configuration, not inline literals, so they
//! can be recalibrated without touching the formula.

use std::collections::{BTreeMap, HashSet};

use crate::models::{Constraint, ConstraintKind, Day, Schedule};

/// Named scoring weights with the calibrated defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Flat penalty per violated hard constraint.
    pub hard_violation_penalty: f64,
    /// Multiplier applied to a violated soft constraint's weight.
    pub soft_violation_factor: f64,
    /// Penalty per idle period.
    pub idle_penalty: f64,
    /// Multiplier for the average balance contribution.
    pub balance_bonus: f64,
    /// Per-teacher balance ceiling; variance is subtracted from it.
    pub balance_baseline: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            hard_violation_penalty: 25.0,
            soft_violation_factor: 10.0,
            idle_penalty: 0.5,
            balance_bonus: 0.3,
            balance_baseline: 10.0,
        }
    }
}

/// Scores a schedule against a constraint list.
///
/// Pure and deterministic: identical input always yields the same
/// integer, bounded to [0, 100].
pub fn score_schedule(
    schedule: &Schedule,
    constraints: &[Constraint],
    weights: &ScoreWeights,
) -> i32 {
    let mut score = 100.0;

    for constraint in constraints {
        if !constraint.is_satisfied_by(schedule) {
            score -= match constraint.kind {
                ConstraintKind::Hard => weights.hard_violation_penalty,
                ConstraintKind::Soft => constraint.weight * weights.soft_violation_factor,
            };
        }
    }

    score -= teacher_idle_time(schedule) as f64 * weights.idle_penalty;
    score += workload_balance(schedule, weights.balance_baseline) * weights.balance_bonus;

    score.clamp(0.0, 100.0).round() as i32
}

/// Total teacher idle time across the week.
///
/// For each teacher and day: the number of unfilled periods strictly
/// between that teacher's earliest and latest assigned period.
pub fn teacher_idle_time(schedule: &Schedule) -> u32 {
    let mut by_teacher_day: BTreeMap<(&str, Day), Vec<u8>> = BTreeMap::new();
    for entry in &schedule.entries {
        by_teacher_day
            .entry((entry.teacher_id.as_str(), entry.day))
            .or_default()
            .push(entry.period);
    }

    let mut idle = 0u32;
    for periods in by_teacher_day.values() {
        let first = periods.iter().min().copied().unwrap_or(0);
        let last = periods.iter().max().copied().unwrap_or(0);
        let distinct: HashSet<u8> = periods.iter().copied().collect();
        let span = (last - first + 1) as u32;
        idle += span - distinct.len() as u32;
    }
    idle
}

/// Average per-teacher balance contribution.
///
/// Each teacher contributes `max(0, baseline − variance)` where the
/// variance is taken over their five daily period counts (days with no
/// entries count as zero). Returns 0 for a schedule with no teachers.
pub fn workload_balance(schedule: &Schedule, baseline: f64) -> f64 {
    let teachers = schedule.teacher_ids();
    if teachers.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    for teacher_id in &teachers {
        let mut counts = [0.0f64; 5];
        for entry in schedule.entries_for_teacher(teacher_id) {
            counts[entry.day.index()] += 1.0;
        }
        let mean: f64 = counts.iter().sum::<f64>() / counts.len() as f64;
        let variance: f64 =
            counts.iter().map(|c| (c - mean) * (c - mean)).sum::<f64>() / counts.len() as f64;
        total += (baseline - variance).max(0.0);
    }
    total / teachers.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        period_times, Room, RoomType, ScheduleEntry, SchoolClass, Subject, Teacher,
    };
    use std::sync::Arc;

    fn entry(teacher_id: &str, class_id: &str, day: Day, period: u8) -> ScheduleEntry {
        let class = SchoolClass::new(class_id, class_id.to_uppercase());
        let subject = Subject::new("s1", "English", 5);
        let teacher = Teacher::new(teacher_id, "Teacher", 8);
        let room = Room::new("r1", "Room 101", 40, RoomType::Classroom);
        let (start, end) = period_times(period).unwrap();
        ScheduleEntry::new(&class, &subject, &teacher, day, period, start, end).with_room(&room)
    }

    #[test]
    fn test_default_weights() {
        let w = ScoreWeights::default();
        assert!((w.hard_violation_penalty - 25.0).abs() < 1e-10);
        assert!((w.soft_violation_factor - 10.0).abs() < 1e-10);
        assert!((w.idle_penalty - 0.5).abs() < 1e-10);
        assert!((w.balance_bonus - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_empty_schedule_scores_within_bounds() {
        let score = score_schedule(&Schedule::new(), &[], &ScoreWeights::default());
        assert_eq!(score, 100);
    }

    #[test]
    fn test_hard_violation_penalty() {
        let constraints = vec![Constraint::hard("always-fails", Arc::new(|_| false))];
        let score = score_schedule(&Schedule::new(), &constraints, &ScoreWeights::default());
        assert_eq!(score, 75);
    }

    #[test]
    fn test_soft_violation_scaled_by_weight() {
        let constraints = vec![Constraint::soft("fails", 0.8, Arc::new(|_| false))];
        let score = score_schedule(&Schedule::new(), &constraints, &ScoreWeights::default());
        // 100 - 0.8 * 10 = 92
        assert_eq!(score, 92);
    }

    #[test]
    fn test_score_clamped_to_zero() {
        let always_fails: crate::models::ConstraintCheck = Arc::new(|_| false);
        let constraints: Vec<Constraint> = (0..6)
            .map(|i| Constraint::hard(format!("h{i}"), always_fails.clone()))
            .collect();
        let score = score_schedule(&Schedule::new(), &constraints, &ScoreWeights::default());
        assert_eq!(score, 0);
    }

    #[test]
    fn test_score_clamped_to_hundred() {
        // Perfectly balanced teacher gives +3, which must not exceed 100.
        let mut s = Schedule::new();
        for day in Day::ALL {
            s.add_entry(entry("t1", "c1", day, 1));
        }
        let score = score_schedule(&s, &[], &ScoreWeights::default());
        assert_eq!(score, 100);
    }

    #[test]
    fn test_idle_time_counts_interior_gaps() {
        let mut s = Schedule::new();
        s.add_entry(entry("t1", "c1", Day::Monday, 1));
        s.add_entry(entry("t1", "c2", Day::Monday, 4));
        // Periods 2 and 3 are idle.
        assert_eq!(teacher_idle_time(&s), 2);

        // Edges do not count: nothing before the first or after the last.
        s.add_entry(entry("t1", "c3", Day::Tuesday, 8));
        assert_eq!(teacher_idle_time(&s), 2);
    }

    #[test]
    fn test_idle_time_sums_across_teachers_and_days() {
        let mut s = Schedule::new();
        s.add_entry(entry("t1", "c1", Day::Monday, 1));
        s.add_entry(entry("t1", "c2", Day::Monday, 3)); // gap of 1
        s.add_entry(entry("t2", "c3", Day::Tuesday, 2));
        s.add_entry(entry("t2", "c4", Day::Tuesday, 6)); // gap of 3
        assert_eq!(teacher_idle_time(&s), 4);
    }

    #[test]
    fn test_workload_balance_even_load() {
        // One period each weekday: variance 0, contribution = baseline.
        let mut s = Schedule::new();
        for day in Day::ALL {
            s.add_entry(entry("t1", "c1", day, 1));
        }
        assert!((workload_balance(&s, 10.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_workload_balance_uneven_load() {
        // 5 periods on Monday, none elsewhere: mean 1, variance
        // ((5-1)^2 + 4*(0-1)^2)/5 = 4, contribution 6.
        let mut s = Schedule::new();
        for period in 1..=5 {
            s.add_entry(entry("t1", "c1", Day::Monday, period));
        }
        assert!((workload_balance(&s, 10.0) - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_workload_balance_floor_at_zero() {
        // 8 periods on one day: variance 10.24 > baseline, floored to 0.
        let mut s = Schedule::new();
        for period in 1..=8 {
            s.add_entry(entry("t1", "c1", Day::Monday, period));
        }
        assert!(workload_balance(&s, 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_workload_balance_averages_across_teachers() {
        // t1 perfectly even (contribution 10), t2 bunched on Monday
        // (variance 4, contribution 6): average 8.
        let mut s = Schedule::new();
        for day in Day::ALL {
            s.add_entry(entry("t1", "c1", day, 1));
        }
        for period in 2..=6 {
            s.add_entry(entry("t2", "c2", Day::Monday, period));
        }
        assert!((workload_balance(&s, 10.0) - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_workload_balance_no_teachers() {
        assert!(workload_balance(&Schedule::new(), 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_score_is_deterministic() {
        let mut s = Schedule::new();
        s.add_entry(entry("t1", "c1", Day::Monday, 1));
        s.add_entry(entry("t2", "c2", Day::Monday, 5));
        s.add_entry(entry("t1", "c1", Day::Tuesday, 3));
        let constraints = crate::models::standard_constraints();
        let weights = ScoreWeights::default();

        let first = score_schedule(&s, &constraints, &weights);
        let second = score_schedule(&s, &constraints, &weights);
        assert_eq!(first, second);
        assert!((0..=100).contains(&first));
    }

    #[test]
    fn test_idle_penalty_applied() {
        // One teacher, Monday periods 1 and 4: idle 2 → −1.0.
        // Daily counts [2,0,0,0,0]: variance 0.64, balance 9.36 → +2.808.
        let mut s = Schedule::new();
        s.add_entry(entry("t1", "c1", Day::Monday, 1));
        s.add_entry(entry("t1", "c2", Day::Monday, 4));
        let score = score_schedule(&s, &[], &ScoreWeights::default());
        assert_eq!(score, 100); // 100 - 1.0 + 2.808 clamps to 100
    }
}
