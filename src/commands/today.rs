use chrono::{Datelike, NaiveDate};

use crate::commands::{goals, plans, sessions};
use crate::db::AppState;
use crate::schedule::TodaysWorkout;

/// Resolve the workout scheduled for `today` from the user's newest active plan
pub async fn todays_workout(
  state: &AppState,
  user_id: i64,
  today: NaiveDate,
) -> Result<TodaysWorkout, String> {
  let plan = plans::active_plan(state, user_id)
    .await?
    .ok_or_else(|| "No active workout plan found".to_string())?;

  let daily_workouts = plan.daily_workouts();
  if daily_workouts.is_empty() {
    tracing::warn!(plan_id = plan.id, "Active plan has no recognizable training days");
  }

  let duration = goals::active_goal(state, user_id)
    .await?
    .map(|g| g.workout_duration)
    .unwrap_or(state.config.default_session_minutes);

  let completed = sessions::completed_on(state, user_id, today).await?;

  let resolved = TodaysWorkout::resolve(
    &daily_workouts,
    today.weekday(),
    plan.days_per_week,
    duration,
    completed,
  )
  .with_plan_id(plan.id);

  tracing::debug!(
    plan_id = plan.id,
    day = %resolved.day,
    rest_day = resolved.is_rest_day,
    "Resolved today's workout"
  );

  Ok(resolved)
}
