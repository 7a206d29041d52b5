//! Deterministic training statistics over logged sessions and measurements

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Progress, WorkoutSession};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightPoint {
  pub date: NaiveDate,
  pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingStatistics {
  pub total_workouts: usize,
  pub total_minutes: i64,
  /// Minutes per completed workout, 1 decimal
  pub average_duration: f64,
  /// Oldest first
  pub weight_progress: Vec<WeightPoint>,
  /// Completed workouts per `YYYY-MM`
  pub monthly_workouts: BTreeMap<String, usize>,
}

impl TrainingStatistics {
  /// Only completed sessions count. Sessions without a duration still count
  /// toward the workout total.
  pub fn compute(sessions: &[WorkoutSession], progress: &[Progress]) -> Self {
    let completed: Vec<_> = sessions.iter().filter(|s| s.completed).collect();

    let total_workouts = completed.len();
    let total_minutes: i64 = completed.iter().filter_map(|s| s.duration_minutes).sum();

    let average_duration = if total_workouts > 0 {
      let avg = total_minutes as f64 / total_workouts as f64;
      (avg * 10.0).round() / 10.0
    } else {
      0.0
    };

    let mut weight_progress: Vec<WeightPoint> = progress
      .iter()
      .filter_map(|p| p.weight.map(|weight| WeightPoint { date: p.date, weight }))
      .collect();
    weight_progress.sort_by_key(|p| p.date);

    let mut monthly_workouts = BTreeMap::new();
    for session in &completed {
      *monthly_workouts
        .entry(session.date.format("%Y-%m").to_string())
        .or_insert(0) += 1;
    }

    Self {
      total_workouts,
      total_minutes,
      average_duration,
      weight_progress,
      monthly_workouts,
    }
  }
}
