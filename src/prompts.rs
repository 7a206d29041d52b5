//! Prompt construction for plan generation and coaching chat
//!
//! The plan prompt pins down the `Day N:` / `•` layout that
//! [`crate::plan::parse_daily_workouts`] reads back.

use crate::models::{Goal, Progress, User};
use crate::units::UnitSystem;

pub const PLAN_SYSTEM_PROMPT: &str = include_str!("prompts/plan_system.txt");
pub const COACH_SYSTEM_PROMPT: &str = include_str!("prompts/coach_system.txt");

/// ---------------------------------------------------------------------------
/// Plan Generation
/// ---------------------------------------------------------------------------

/// Everything the generator needs to know about the client
#[derive(Debug, Clone)]
pub struct PlanContext {
  pub gender: Option<String>,
  pub age: Option<i64>,
  pub height: Option<f64>,
  pub weight: Option<f64>,
  pub fitness_level: Option<String>,
  pub goal_type: String,
  pub days_per_week: i64,
  pub session_minutes: i64,
  pub equipment: Vec<String>,
  pub units: UnitSystem,
}

impl PlanContext {
  /// Goal settings win over request values when a goal is active
  pub fn assemble(
    user: Option<&User>,
    latest: Option<&Progress>,
    goal: Option<&Goal>,
    request: &PlanRequest,
    units: UnitSystem,
  ) -> Self {
    let equipment = match goal {
      Some(g) => g.equipment_available(),
      None if request.equipment.is_empty() => vec!["bodyweight".to_string()],
      None => request.equipment.clone(),
    };

    Self {
      gender: user.and_then(|u| u.gender.clone()),
      age: user.and_then(|u| u.age),
      height: user.and_then(|u| u.height),
      weight: latest.and_then(|p| p.weight),
      fitness_level: user.and_then(|u| u.fitness_level.clone()),
      goal_type: goal
        .map(|g| g.goal_type.clone())
        .or_else(|| request.goal_type.clone())
        .unwrap_or_else(|| "general fitness".to_string()),
      days_per_week: goal
        .map(|g| g.workout_frequency)
        .or(request.frequency)
        .unwrap_or(crate::schedule::DEFAULT_DAYS_PER_WEEK),
      session_minutes: goal
        .map(|g| g.workout_duration)
        .or(request.duration)
        .unwrap_or(60),
      equipment,
      units,
    }
  }
}

/// Caller-supplied fallbacks for when no goal is active
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct PlanRequest {
  pub goal_type: Option<String>,
  pub frequency: Option<i64>,
  pub duration: Option<i64>,
  #[serde(default)]
  pub equipment: Vec<String>,
  pub duration_weeks: Option<i64>,
}

fn or_unknown<T: ToString>(value: Option<T>, fallback: &str) -> String {
  value.map(|v| v.to_string()).unwrap_or_else(|| fallback.to_string())
}

pub fn build_plan_prompt(ctx: &PlanContext) -> String {
  let n = ctx.days_per_week;
  let weight = match ctx.weight {
    Some(w) => format!("{} {}", w, ctx.units.weight_unit()),
    None => "Baseline required".to_string(),
  };

  format!(
    r#"TRAINING PROGRAM SPECIFICATIONS

Client Profile:
• Demographics: {gender}, {age} years, {height} {length_unit}
• Current Weight: {weight}
• Experience Level: {level}
• Primary Objective: {goal}

Program Parameters:
• Training Frequency: {n} sessions per week
• Session Duration: {minutes} minutes
• Available Equipment: {equipment}

CRITICAL: Create exactly {n} distinct workout days (Day 1, Day 2, etc.) with clear daily structure for weekly scheduling.

Required Output Format:

PROGRAM OVERVIEW
[Brief program description and periodization approach]

WEEKLY TRAINING SCHEDULE
[Specify which days of the week correspond to each training day]

DETAILED WORKOUT SESSIONS
Day 1: [Specific Session Name - e.g., "Upper Body Strength Training"]
• [Name] - [Sets] x [Reps] @ [Intensity/Weight ({weight_unit})] | Rest: [Time]
• [Name] - [Sets] x [Reps] @ [Intensity/Weight ({weight_unit})] | Rest: [Time]
[Continue for all exercises - minimum 6 exercises per day]

Day 2: [Specific Session Name - e.g., "Lower Body Power Training"]
• [Name] - [Sets] x [Reps] @ [Intensity/Weight ({weight_unit})] | Rest: [Time]
[Continue for all exercises]

[Repeat format for all {n} training days]

PROGRESSION PROTOCOL
[Specific progression methods and timelines]

PERFORMANCE NOTES
[Technical cues and execution guidelines]"#,
    gender = or_unknown(ctx.gender.as_deref(), "unspecified"),
    age = or_unknown(ctx.age, "unknown"),
    height = or_unknown(ctx.height, "unknown"),
    length_unit = ctx.units.length_unit(),
    weight = weight,
    level = or_unknown(ctx.fitness_level.as_deref(), "unspecified"),
    goal = ctx.goal_type,
    n = n,
    minutes = ctx.session_minutes,
    equipment = ctx.equipment.join(", "),
    weight_unit = ctx.units.weight_unit(),
  )
}

/// "strength" -> "Strength Workout Plan", no goal -> "Custom Workout Plan"
pub fn plan_name(goal_type: Option<&str>) -> String {
  match goal_type {
    Some(goal) if !goal.trim().is_empty() => format!("{} Workout Plan", title_case(goal)),
    _ => "Custom Workout Plan".to_string(),
  }
}

fn title_case(s: &str) -> String {
  s.split_whitespace()
    .map(|word| {
      let mut chars = word.chars();
      match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
      }
    })
    .collect::<Vec<String>>()
    .join(" ")
}

/// ---------------------------------------------------------------------------
/// Coaching Chat
/// ---------------------------------------------------------------------------

/// System prompt for the chat coach, with the client's profile appended
pub fn build_coach_prompt(
  user: Option<&User>,
  latest: Option<&Progress>,
  goal: Option<&Goal>,
  recent_sessions: usize,
  units: UnitSystem,
) -> String {
  let weight = match latest.and_then(|p| p.weight) {
    Some(w) => format!("{} {}", w, units.weight_unit()),
    None => "Baseline assessment pending".to_string(),
  };
  let height = match user.and_then(|u| u.height) {
    Some(h) => format!("{} {}", h, units.length_unit()),
    None => "Height not specified".to_string(),
  };

  format!(
    r#"{system}
Client Profile:
• Individual: {name}
• Demographics: {age}, {height}, {gender}
• Experience Level: {level}
• Current Status: {weight}
• Training Objective: {goal}
• Recent Activity: {recent} training sessions completed"#,
    system = COACH_SYSTEM_PROMPT,
    name = user.map(|u| u.name.as_str()).unwrap_or("Client"),
    age = user
      .and_then(|u| u.age)
      .map(|a| format!("{} years", a))
      .unwrap_or_else(|| "Age not specified".to_string()),
    height = height,
    gender = or_unknown(user.and_then(|u| u.gender.as_deref()), "Gender not specified"),
    level = or_unknown(user.and_then(|u| u.fitness_level.as_deref()), "Assessment required"),
    weight = weight,
    goal = goal.map(|g| g.goal_type.as_str()).unwrap_or("Goals to be established"),
    recent = recent_sessions,
  )
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
