//! workoutbot command-line entry point
//!
//! Every subcommand prints its result as JSON on stdout.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use workoutbot::commands::{
  self, chat, exercises, goals, plans, progress, sessions, statistics, today, users,
};
use workoutbot::db::AppState;
use workoutbot::models::{NewGoal, NewProgress, NewUser, NewWorkoutSession};
use workoutbot::prompts::PlanRequest;

/// Personal training log with LLM-authored workout plans
#[derive(Parser)]
#[command(version, about, name = "workoutbot")]
struct Args {
  /// User to act as
  #[arg(long, global = true, default_value_t = 1)]
  user: i64,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Show the workout scheduled for today (or --date)
  Today {
    /// YYYY-MM-DD
    #[arg(long)]
    date: Option<String>,
  },
  /// Show the parsed days and weekly schedule of a stored plan
  Plan { plan_id: i64 },
  /// List stored plans, newest first
  Plans,
  /// Parse a plan text file without touching the database
  Parse { file: PathBuf },
  /// Generate a new plan with the LLM and store it
  Generate {
    #[arg(long)]
    goal_type: Option<String>,
    /// Sessions per week
    #[arg(long)]
    frequency: Option<i64>,
    /// Minutes per session
    #[arg(long)]
    duration: Option<i64>,
    #[arg(long = "equipment")]
    equipment: Vec<String>,
    #[arg(long)]
    weeks: Option<i64>,
  },
  /// Delete a plan and its sessions
  DeletePlan { plan_id: i64 },
  /// Ask the coach a question
  Chat { message: String },
  /// Log a completed workout
  LogWorkout {
    name: String,
    /// YYYY-MM-DD, defaults to today
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    duration: Option<i64>,
    #[arg(long)]
    calories: Option<i64>,
    #[arg(long)]
    notes: Option<String>,
    #[arg(long)]
    plan_id: Option<i64>,
  },
  /// Recent sessions
  Sessions,
  /// Exercise catalog
  Exercises,
  /// Training statistics
  Stats,
  /// Body mass index from the latest measurement
  Bmi,
  /// Show the user profile
  Profile,
  /// Create a user profile
  AddUser {
    name: String,
    #[arg(long)]
    height: Option<f64>,
    #[arg(long)]
    age: Option<i64>,
    #[arg(long)]
    gender: Option<String>,
    /// beginner, intermediate, advanced
    #[arg(long)]
    level: Option<String>,
  },
  /// Record body measurements
  Measure {
    #[arg(long)]
    weight: Option<f64>,
    #[arg(long)]
    body_fat: Option<f64>,
    #[arg(long)]
    waist: Option<f64>,
    /// YYYY-MM-DD, defaults to today
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    notes: Option<String>,
  },
  /// Measurement history, newest first
  Progress,
  /// Set a training goal
  SetGoal {
    /// bulk, cut, tone, strength, endurance
    goal_type: String,
    #[arg(long)]
    frequency: Option<i64>,
    #[arg(long)]
    duration: Option<i64>,
    #[arg(long)]
    target_weight: Option<f64>,
    #[arg(long)]
    target_date: Option<String>,
    #[arg(long = "equipment")]
    equipment: Vec<String>,
  },
  /// Active goals
  Goals,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
  let json = serde_json::to_string_pretty(value).map_err(|e| format!("Failed to encode output: {}", e))?;
  println!("{}", json);
  Ok(())
}

fn today_or(date: Option<&str>) -> Result<NaiveDate, String> {
  match date {
    Some(d) => commands::parse_date(d),
    None => Ok(Local::now().date_naive()),
  }
}

async fn dispatch(state: &AppState, user: i64, command: Command) -> Result<(), String> {
  match command {
    Command::Today { date } => {
      let date = today_or(date.as_deref())?;
      print_json(&today::todays_workout(state, user, date).await?)
    }
    Command::Plan { plan_id } => print_json(&plans::get_plan_overview(state, user, plan_id).await?),
    Command::Plans => print_json(&plans::list_plans(state, user).await?),
    Command::Parse { file } => parse_file(&file),
    Command::Generate {
      goal_type,
      frequency,
      duration,
      equipment,
      weeks,
    } => {
      let request = PlanRequest {
        goal_type,
        frequency,
        duration,
        equipment,
        duration_weeks: weeks,
      };
      print_json(&plans::generate_workout_plan(state, user, request).await?)
    }
    Command::DeletePlan { plan_id } => print_json(&plans::delete_plan(state, user, plan_id).await?),
    Command::Chat { message } => print_json(&chat::chat(state, user, &message).await?),
    Command::LogWorkout {
      name,
      date,
      duration,
      calories,
      notes,
      plan_id,
    } => {
      let session = NewWorkoutSession {
        workout_plan_id: plan_id,
        date: today_or(date.as_deref())?.to_string(),
        name,
        duration_minutes: duration,
        calories_burned: calories,
        notes,
        completed: true,
      };
      print_json(&sessions::log_past_workout(state, user, session).await?)
    }
    Command::Sessions => print_json(&sessions::list_recent_sessions(state, user).await?),
    Command::Exercises => print_json(&exercises::list_exercises(state).await?),
    Command::Stats => print_json(&statistics::get_statistics(state, user).await?),
    Command::Bmi => print_json(&users::get_bmi(state, user).await?),
    Command::Profile => print_json(&users::get_user(state, user).await?),
    Command::AddUser {
      name,
      height,
      age,
      gender,
      level,
    } => {
      let new_user = NewUser {
        name,
        height,
        age,
        gender,
        fitness_level: level,
      };
      print_json(&users::create_user(state, new_user).await?)
    }
    Command::Measure {
      weight,
      body_fat,
      waist,
      date,
      notes,
    } => {
      let entry = NewProgress {
        date,
        weight,
        body_fat_percentage: body_fat,
        waist,
        notes,
        ..Default::default()
      };
      print_json(&progress::record_progress(state, user, entry).await?)
    }
    Command::Progress => print_json(&progress::list_progress(state, user).await?),
    Command::SetGoal {
      goal_type,
      frequency,
      duration,
      target_weight,
      target_date,
      equipment,
    } => {
      let mut goal = NewGoal::new(goal_type);
      goal.workout_frequency = frequency;
      goal.workout_duration = duration;
      goal.target_weight = target_weight;
      goal.target_date = target_date;
      goal.equipment_available = equipment;
      print_json(&goals::create_goal(state, user, goal).await?)
    }
    Command::Goals => print_json(&goals::list_active_goals(state, user).await?),
  }
}

fn parse_file(file: &Path) -> Result<(), String> {
  let text = std::fs::read_to_string(file)
    .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
  print_json(&workoutbot::parse_daily_workouts(&text))
}

async fn run(args: Args) -> Result<(), String> {
  // Parsing needs neither config nor database
  if let Command::Parse { file } = &args.command {
    return parse_file(file);
  }

  let state = workoutbot::init_state().await.map_err(|e| e.to_string())?;
  let result = dispatch(&state, args.user, args.command).await;
  state.db.close().await;
  result
}

#[tokio::main]
async fn main() -> ExitCode {
  workoutbot::init_tracing();

  match run(Args::parse()).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      tracing::error!("{}", e);
      ExitCode::FAILURE
    }
  }
}
