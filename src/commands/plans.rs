use chrono::Utc;
use serde::Serialize;

use crate::commands::{goals, progress, users};
use crate::db::AppState;
use crate::llm::ClaudeClient;
use crate::models::{NewWorkoutPlan, WorkoutPlan};
use crate::plan::PlanIndex;
use crate::prompts::{self, PlanContext, PlanRequest};
use crate::schedule::{weekday_name, WeeklySchedule};

const DEFAULT_DURATION_WEEKS: i64 = 8;

/// ---------------------------------------------------------------------------
/// Storage
/// ---------------------------------------------------------------------------

pub async fn save_plan(state: &AppState, user_id: i64, plan: NewWorkoutPlan) -> Result<i64, String> {
  let result = sqlx::query(
    r#"
    INSERT INTO workout_plans (
      user_id, name, description, goal_type, duration_weeks, days_per_week, created_at
    )
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
    "#,
  )
  .bind(user_id)
  .bind(&plan.name)
  .bind(&plan.description)
  .bind(&plan.goal_type)
  .bind(plan.duration_weeks)
  .bind(plan.days_per_week)
  .bind(Utc::now())
  .execute(&state.db)
  .await
  .map_err(|e| format!("Failed to save workout plan: {}", e))?;

  Ok(result.last_insert_rowid())
}

/// All plans, newest first
pub async fn list_plans(state: &AppState, user_id: i64) -> Result<Vec<WorkoutPlan>, String> {
  sqlx::query_as::<_, WorkoutPlan>(
    "SELECT * FROM workout_plans WHERE user_id = ?1 ORDER BY created_at DESC, id DESC",
  )
  .bind(user_id)
  .fetch_all(&state.db)
  .await
  .map_err(|e| format!("Failed to fetch workout plans: {}", e))
}

pub async fn get_plan(state: &AppState, user_id: i64, plan_id: i64) -> Result<WorkoutPlan, String> {
  sqlx::query_as::<_, WorkoutPlan>("SELECT * FROM workout_plans WHERE id = ?1 AND user_id = ?2")
    .bind(plan_id)
    .bind(user_id)
    .fetch_optional(&state.db)
    .await
    .map_err(|e| format!("Failed to fetch workout plan: {}", e))?
    .ok_or_else(|| "Workout plan not found".to_string())
}

/// Newest active plan, if any
pub async fn active_plan(state: &AppState, user_id: i64) -> Result<Option<WorkoutPlan>, String> {
  sqlx::query_as::<_, WorkoutPlan>(
    r#"
    SELECT * FROM workout_plans
    WHERE user_id = ?1 AND is_active = 1
    ORDER BY created_at DESC, id DESC
    LIMIT 1
    "#,
  )
  .bind(user_id)
  .fetch_optional(&state.db)
  .await
  .map_err(|e| format!("Failed to fetch active plan: {}", e))
}

/// Delete a plan together with the sessions logged against it
pub async fn delete_plan(state: &AppState, user_id: i64, plan_id: i64) -> Result<i64, String> {
  let mut tx = state
    .db
    .begin()
    .await
    .map_err(|e| format!("Failed to start transaction: {}", e))?;

  let exists: Option<(i64,)> =
    sqlx::query_as("SELECT id FROM workout_plans WHERE id = ?1 AND user_id = ?2")
      .bind(plan_id)
      .bind(user_id)
      .fetch_optional(&mut *tx)
      .await
      .map_err(|e| format!("Failed to fetch workout plan: {}", e))?;

  if exists.is_none() {
    return Err("Workout plan not found".to_string());
  }

  let sessions = sqlx::query("DELETE FROM workout_sessions WHERE workout_plan_id = ?1 AND user_id = ?2")
    .bind(plan_id)
    .bind(user_id)
    .execute(&mut *tx)
    .await
    .map_err(|e| format!("Failed to delete plan sessions: {}", e))?;

  sqlx::query("DELETE FROM workout_plans WHERE id = ?1")
    .bind(plan_id)
    .execute(&mut *tx)
    .await
    .map_err(|e| format!("Failed to delete workout plan: {}", e))?;

  tx.commit()
    .await
    .map_err(|e| format!("Failed to delete workout plan: {}", e))?;

  tracing::info!(plan_id, sessions = sessions.rows_affected(), "Workout plan deleted");

  Ok(plan_id)
}

/// ---------------------------------------------------------------------------
/// Generation
/// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct GeneratedPlan {
  pub plan_id: i64,
  pub workout_plan: String,
  pub daily_workouts: PlanIndex,
}

/// Ask the LLM for a plan and store it as the user's newest active plan
pub async fn generate_workout_plan(
  state: &AppState,
  user_id: i64,
  request: PlanRequest,
) -> Result<GeneratedPlan, String> {
  let client = ClaudeClient::from_config(&state.config).map_err(|e| e.to_string())?;

  let user = users::find_user(state, user_id).await?;
  let latest = progress::latest_progress(state, user_id).await?;
  let goal = goals::active_goal(state, user_id).await?;

  let ctx = PlanContext::assemble(
    user.as_ref(),
    latest.as_ref(),
    goal.as_ref(),
    &request,
    state.config.units,
  );

  let (text, usage) = client
    .generate_workout_plan(&ctx)
    .await
    .map_err(|e| format!("Failed to generate workout plan: {}", e))?;

  tracing::info!(
    input_tokens = usage.input_tokens,
    output_tokens = usage.output_tokens,
    "Workout plan generated"
  );

  let daily_workouts = crate::plan::parse_daily_workouts(&text);
  if daily_workouts.len() as i64 != ctx.days_per_week {
    tracing::warn!(
      expected = ctx.days_per_week,
      parsed = daily_workouts.len(),
      "Generated plan does not match requested frequency"
    );
  }

  let goal_type = goal.as_ref().map(|g| g.goal_type.clone()).or(request.goal_type.clone());
  let plan = NewWorkoutPlan {
    name: prompts::plan_name(goal.as_ref().map(|g| g.goal_type.as_str())),
    description: text.clone(),
    goal_type: Some(goal_type.unwrap_or_else(|| "general".to_string())),
    duration_weeks: Some(request.duration_weeks.unwrap_or(DEFAULT_DURATION_WEEKS)),
    days_per_week: ctx.days_per_week,
  };

  let plan_id = save_plan(state, user_id, plan).await?;

  Ok(GeneratedPlan {
    plan_id,
    workout_plan: text,
    daily_workouts,
  })
}

/// ---------------------------------------------------------------------------
/// Overview
/// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ScheduledDay {
  pub weekday: &'static str,
  pub day: String,
  /// False when the plan text has no such day
  pub in_plan: bool,
}

#[derive(Debug, Serialize)]
pub struct PlanOverview {
  pub plan_id: i64,
  pub name: String,
  pub days_per_week: i64,
  /// False when `days_per_week` has no table of its own and the 3-day
  /// schedule is used
  pub tailored_schedule: bool,
  pub schedule: Vec<ScheduledDay>,
  pub daily_workouts: PlanIndex,
}

impl PlanOverview {
  pub fn build(plan: &WorkoutPlan) -> Self {
    let daily_workouts = plan.daily_workouts();
    let weekly = WeeklySchedule::for_days_per_week(plan.days_per_week);

    let schedule = weekly
      .training_days()
      .map(|(weekday, day)| ScheduledDay {
        weekday: weekday_name(weekday),
        in_plan: daily_workouts.contains(&day),
        day,
      })
      .collect();

    Self {
      plan_id: plan.id,
      name: plan.name.clone(),
      days_per_week: plan.days_per_week,
      tailored_schedule: weekly.is_tailored(),
      schedule,
      daily_workouts,
    }
  }
}

pub async fn get_plan_overview(
  state: &AppState,
  user_id: i64,
  plan_id: i64,
) -> Result<PlanOverview, String> {
  let plan = get_plan(state, user_id, plan_id).await?;
  Ok(PlanOverview::build(&plan))
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
