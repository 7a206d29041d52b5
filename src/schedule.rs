//! Weekly schedule resolution
//!
//! Maps a weekday onto one of a plan's training days for a given training
//! frequency. The tables follow common gym programming (rest days between
//! sessions at 3/week, Wednesday off at 4/week) rather than an even spread.

use chrono::Weekday;
use serde::Serialize;

use crate::plan::{DailyWorkout, Focus, PlanIndex};

use chrono::Weekday::{Fri, Mon, Sat, Thu, Tue, Wed};

pub const DEFAULT_DAYS_PER_WEEK: i64 = 3;

const THREE_DAY: &[(Weekday, u32)] = &[(Mon, 1), (Wed, 2), (Fri, 3)];
const FOUR_DAY: &[(Weekday, u32)] = &[(Mon, 1), (Tue, 2), (Thu, 3), (Fri, 4)];
const FIVE_DAY: &[(Weekday, u32)] = &[(Mon, 1), (Tue, 2), (Wed, 3), (Thu, 4), (Fri, 5)];
const SIX_DAY: &[(Weekday, u32)] = &[
  (Mon, 1),
  (Tue, 2),
  (Wed, 3),
  (Thu, 4),
  (Fri, 5),
  (Sat, 6),
];

/// Convert a Monday-based weekday index (0 = Monday, 6 = Sunday)
pub fn weekday_from_index(index: u32) -> Option<Weekday> {
  match index {
    0 => Some(Weekday::Mon),
    1 => Some(Weekday::Tue),
    2 => Some(Weekday::Wed),
    3 => Some(Weekday::Thu),
    4 => Some(Weekday::Fri),
    5 => Some(Weekday::Sat),
    6 => Some(Weekday::Sun),
    _ => None,
  }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
  match weekday {
    Weekday::Mon => "Monday",
    Weekday::Tue => "Tuesday",
    Weekday::Wed => "Wednesday",
    Weekday::Thu => "Thursday",
    Weekday::Fri => "Friday",
    Weekday::Sat => "Saturday",
    Weekday::Sun => "Sunday",
  }
}

/// ---------------------------------------------------------------------------
/// Weekly Schedule
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklySchedule {
  requested: i64,
  slots: &'static [(Weekday, u32)],
}

impl WeeklySchedule {
  /// Schedule for a training frequency. Anything outside 3..=6 falls back to
  /// the 3-day table.
  pub fn for_days_per_week(days_per_week: i64) -> Self {
    let slots = match days_per_week {
      4 => FOUR_DAY,
      5 => FIVE_DAY,
      6 => SIX_DAY,
      _ => THREE_DAY,
    };

    let schedule = Self {
      requested: days_per_week,
      slots,
    };

    if !schedule.is_tailored() {
      // TODO: replace the 3-day fallback with an even spread so 1, 2 and 7 day plans get their own table
      tracing::debug!(days_per_week, "No schedule for this frequency, using 3-day table");
    }

    schedule
  }

  /// Whether the requested frequency has its own table (false means the
  /// 3-day fallback is in use)
  pub fn is_tailored(&self) -> bool {
    (3..=6).contains(&self.requested)
  }

  pub fn days_per_week(&self) -> usize {
    self.slots.len()
  }

  /// Training day label for a weekday, `None` on rest days
  pub fn label_for(&self, weekday: Weekday) -> Option<String> {
    self
      .slots
      .iter()
      .find(|(day, _)| *day == weekday)
      .map(|(_, n)| format!("Day {}", n))
  }

  /// Active weekdays and their labels, Monday first
  pub fn training_days(&self) -> impl Iterator<Item = (Weekday, String)> + '_ {
    self.slots.iter().map(|(day, n)| (*day, format!("Day {}", n)))
  }

  pub fn is_rest_day(&self, weekday: Weekday) -> bool {
    self.label_for(weekday).is_none()
  }
}

/// ---------------------------------------------------------------------------
/// Resolution
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduledWorkout<'a> {
  Training(&'a DailyWorkout),
  RestDay,
}

impl<'a> ScheduledWorkout<'a> {
  pub fn workout(&self) -> Option<&'a DailyWorkout> {
    match self {
      ScheduledWorkout::Training(w) => Some(w),
      ScheduledWorkout::RestDay => None,
    }
  }

  pub fn is_rest_day(&self) -> bool {
    matches!(self, ScheduledWorkout::RestDay)
  }
}

/// Which of the plan's days falls on `weekday`. Also a rest day when the
/// schedule names a day the plan doesn't have.
pub fn workout_for_day(
  plan: &PlanIndex,
  weekday: Weekday,
  days_per_week: i64,
) -> ScheduledWorkout<'_> {
  WeeklySchedule::for_days_per_week(days_per_week)
    .label_for(weekday)
    .and_then(|label| plan.get(&label))
    .map(ScheduledWorkout::Training)
    .unwrap_or(ScheduledWorkout::RestDay)
}

/// ---------------------------------------------------------------------------
/// Today's Workout (response shape)
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutView {
  pub name: String,
  /// Session length in minutes
  pub duration: i64,
  pub focus: Focus,
  pub preview: String,
  pub exercises: Vec<String>,
  /// Whether a completed session is already logged for the day
  pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodaysWorkout {
  /// Weekday name, e.g. "Monday"
  pub day: String,
  pub workout: Option<WorkoutView>,
  pub is_rest_day: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub plan_id: Option<i64>,
}

impl TodaysWorkout {
  /// Resolve the workout for `weekday`. Duration and completion come from
  /// the caller since they live outside the plan text.
  pub fn resolve(
    plan: &PlanIndex,
    weekday: Weekday,
    days_per_week: i64,
    duration_minutes: i64,
    completed: bool,
  ) -> Self {
    let workout = workout_for_day(plan, weekday, days_per_week)
      .workout()
      .map(|w| WorkoutView {
        name: w.name.clone(),
        duration: duration_minutes,
        focus: w.focus,
        preview: w.preview.clone(),
        exercises: w.exercises.clone(),
        completed,
      });

    Self {
      day: weekday_name(weekday).to_string(),
      is_rest_day: workout.is_none(),
      workout,
      plan_id: None,
    }
  }

  pub fn with_plan_id(mut self, plan_id: i64) -> Self {
    self.plan_id = Some(plan_id);
    self
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::plan::parse_daily_workouts;
  use crate::test_utils::SAMPLE_PLAN;
  use chrono::Weekday::Sun;

  fn labels(schedule: &WeeklySchedule) -> Vec<(Weekday, String)> {
    schedule.training_days().collect()
  }

  #[test]
  fn test_three_day_schedule() {
    let schedule = WeeklySchedule::for_days_per_week(3);

    assert_eq!(schedule.label_for(Mon).as_deref(), Some("Day 1"));
    assert_eq!(schedule.label_for(Wed).as_deref(), Some("Day 2"));
    assert_eq!(schedule.label_for(Fri).as_deref(), Some("Day 3"));
    for rest in [Tue, Thu, Sat, Sun] {
      assert!(schedule.is_rest_day(rest), "{:?} should be a rest day", rest);
    }
    assert!(schedule.is_tailored());
  }

  #[test]
  fn test_four_day_schedule() {
    let schedule = WeeklySchedule::for_days_per_week(4);

    assert_eq!(schedule.label_for(Mon).as_deref(), Some("Day 1"));
    assert_eq!(schedule.label_for(Tue).as_deref(), Some("Day 2"));
    assert_eq!(schedule.label_for(Thu).as_deref(), Some("Day 3"));
    assert_eq!(schedule.label_for(Fri).as_deref(), Some("Day 4"));
    assert_eq!(schedule.label_for(Wed), None);
    assert_eq!(schedule.label_for(Sat), None);
    assert_eq!(schedule.label_for(Sun), None);
  }

  #[test]
  fn test_five_and_six_day_schedules_are_consecutive() {
    let five = WeeklySchedule::for_days_per_week(5);
    assert_eq!(five.days_per_week(), 5);
    assert_eq!(five.label_for(Fri).as_deref(), Some("Day 5"));
    assert!(five.is_rest_day(Sat));

    let six = WeeklySchedule::for_days_per_week(6);
    assert_eq!(six.days_per_week(), 6);
    assert_eq!(six.label_for(Sat).as_deref(), Some("Day 6"));
    assert!(six.is_rest_day(Sun));
  }

  #[test]
  fn test_unknown_frequency_falls_back_to_three_days() {
    let three = WeeklySchedule::for_days_per_week(3);

    for n in [-1, 0, 1, 2, 7, 42] {
      let schedule = WeeklySchedule::for_days_per_week(n);
      assert_eq!(labels(&schedule), labels(&three), "days_per_week = {}", n);
      assert!(!schedule.is_tailored());
    }
  }

  #[test]
  fn test_weekday_from_index() {
    assert_eq!(weekday_from_index(0), Some(Mon));
    assert_eq!(weekday_from_index(6), Some(Sun));
    assert_eq!(weekday_from_index(7), None);
  }

  #[test]
  fn test_workout_for_day_monday_and_tuesday() {
    let plan = parse_daily_workouts(SAMPLE_PLAN);

    let monday = workout_for_day(&plan, Mon, 3);
    assert_eq!(monday.workout().map(|w| w.day.as_str()), Some("Day 1"));

    assert!(workout_for_day(&plan, Tue, 3).is_rest_day());
  }

  #[test]
  fn test_missing_day_in_plan_is_rest_day() {
    // Schedule puts Day 3 on Friday but the sample plan only has two days
    let plan = parse_daily_workouts(SAMPLE_PLAN);
    assert_eq!(workout_for_day(&plan, Fri, 3), ScheduledWorkout::RestDay);
  }

  #[test]
  fn test_empty_plan_is_always_rest_day() {
    let plan = PlanIndex::default();
    for index in 0..7 {
      let weekday = weekday_from_index(index).unwrap();
      assert!(workout_for_day(&plan, weekday, 6).is_rest_day());
    }
  }

  #[test]
  fn test_todays_workout_json_shape() {
    let plan = parse_daily_workouts(SAMPLE_PLAN);
    let today = TodaysWorkout::resolve(&plan, Mon, 3, 45, true).with_plan_id(7);
    let json = serde_json::to_value(&today).unwrap();

    assert_eq!(json["day"], "Monday");
    assert_eq!(json["isRestDay"], false);
    assert_eq!(json["planId"], 7);
    assert_eq!(json["workout"]["name"], "Upper Body Strength");
    assert_eq!(json["workout"]["duration"], 45);
    assert_eq!(json["workout"]["focus"], "UpperBody");
    assert_eq!(json["workout"]["completed"], true);
    assert_eq!(json["workout"]["exercises"].as_array().unwrap().len(), 4);
  }

  #[test]
  fn test_todays_workout_rest_day_json() {
    let plan = parse_daily_workouts(SAMPLE_PLAN);
    let today = TodaysWorkout::resolve(&plan, Tue, 3, 60, false);
    let json = serde_json::to_value(&today).unwrap();

    assert_eq!(json["day"], "Tuesday");
    assert!(json["workout"].is_null());
    assert_eq!(json["isRestDay"], true);
    assert!(json.get("planId").is_none());
  }
}
