//! Plan parser for LLM-generated workout plans
//!
//! The generator is prompted with a loose template (`Day N: <name>` headers
//! followed by `•` exercise bullets) but nothing guarantees it sticks to it.
//! This module recovers whatever structure is there and ignores the rest.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Separator between exercises in a day's preview
pub const PREVIEW_SEPARATOR: &str = "<br>";

/// Number of exercises shown in a day's preview
pub const PREVIEW_EXERCISES: usize = 3;

const HEADER_PREFIX: &str = "Day ";
const BULLET: char = '•';

/// ---------------------------------------------------------------------------
/// Focus
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Focus {
  UpperBody,
  LowerBody,
  Cardio,
  Core,
  FullBody,
}

/// Keyword groups, tested in order. First group with a hit wins.
const FOCUS_KEYWORDS: &[(Focus, &[&str])] = &[
  (Focus::UpperBody, &["upper", "chest", "back", "shoulder", "arm"]),
  (Focus::LowerBody, &["lower", "leg", "squat", "deadlift"]),
  (Focus::Cardio, &["cardio", "hiit", "conditioning"]),
  (Focus::Core, &["core", "abs", "plank"]),
];

impl Focus {
  /// Classify a workout by its name (case-insensitive substring match)
  pub fn from_workout_name(name: &str) -> Self {
    let name = name.to_lowercase();
    FOCUS_KEYWORDS
      .iter()
      .find(|(_, words)| words.iter().any(|w| name.contains(w)))
      .map(|(focus, _)| *focus)
      .unwrap_or(Focus::FullBody)
  }

  pub fn label(&self) -> &'static str {
    match self {
      Focus::UpperBody => "Upper Body",
      Focus::LowerBody => "Lower Body",
      Focus::Cardio => "Cardio",
      Focus::Core => "Core",
      Focus::FullBody => "Full Body",
    }
  }
}

impl std::fmt::Display for Focus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}

/// ---------------------------------------------------------------------------
/// Daily Workout
/// ---------------------------------------------------------------------------

/// One training day recovered from a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyWorkout {
  /// Training day label as written in the header, e.g. "Day 1"
  pub day: String,
  pub name: String,
  pub focus: Focus,
  /// Raw exercise lines with the bullet stripped, in plan order
  pub exercises: Vec<String>,
  /// First few exercises, bulleted and joined for display
  pub preview: String,
}

impl DailyWorkout {
  fn open(day: &str, name: &str) -> Self {
    // A bare "Day 1:" header still needs something to show
    let name = if name.is_empty() { day } else { name };

    Self {
      day: day.to_string(),
      name: name.to_string(),
      focus: Focus::from_workout_name(name),
      exercises: Vec::new(),
      preview: String::new(),
    }
  }

  fn with_exercise(mut self, exercise: &str) -> Self {
    self.exercises.push(exercise.to_string());

    if self.exercises.len() <= PREVIEW_EXERCISES {
      if !self.preview.is_empty() {
        self.preview.push_str(PREVIEW_SEPARATOR);
      }
      self.preview.push_str("• ");
      self.preview.push_str(exercise);
    }

    self
  }
}

/// ---------------------------------------------------------------------------
/// Plan Index
/// ---------------------------------------------------------------------------

/// Training days of a plan, keyed by label, in order of appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanIndex {
  days: Vec<DailyWorkout>,
}

impl PlanIndex {
  pub fn get(&self, day: &str) -> Option<&DailyWorkout> {
    self.days.iter().find(|d| d.day == day)
  }

  pub fn contains(&self, day: &str) -> bool {
    self.get(day).is_some()
  }

  pub fn iter(&self) -> impl Iterator<Item = &DailyWorkout> {
    self.days.iter()
  }

  pub fn labels(&self) -> impl Iterator<Item = &str> {
    self.days.iter().map(|d| d.day.as_str())
  }

  pub fn len(&self) -> usize {
    self.days.len()
  }

  pub fn is_empty(&self) -> bool {
    self.days.is_empty()
  }

  /// Seal a finished day. A repeated label replaces the earlier entry but
  /// keeps its original position.
  fn seal(mut self, workout: DailyWorkout) -> Self {
    match self.days.iter_mut().find(|d| d.day == workout.day) {
      Some(existing) => *existing = workout,
      None => self.days.push(workout),
    }
    self
  }
}

impl<'a> IntoIterator for &'a PlanIndex {
  type Item = &'a DailyWorkout;
  type IntoIter = std::slice::Iter<'a, DailyWorkout>;

  fn into_iter(self) -> Self::IntoIter {
    self.days.iter()
  }
}

impl Serialize for PlanIndex {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut map = serializer.serialize_map(Some(self.days.len()))?;
    for day in &self.days {
      map.serialize_entry(&day.day, day)?;
    }
    map.end()
  }
}

/// ---------------------------------------------------------------------------
/// Parsing
/// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
enum PlanLine<'a> {
  Header { day: &'a str, name: &'a str },
  Exercise(&'a str),
  Other,
}

fn classify(line: &str) -> PlanLine<'_> {
  let line = line.trim();

  if line.starts_with(HEADER_PREFIX) {
    if let Some((day, name)) = line.split_once(':') {
      return PlanLine::Header {
        day: day.trim(),
        name: name.trim(),
      };
    }
  }

  match line.strip_prefix(BULLET) {
    Some(rest) => PlanLine::Exercise(rest.trim()),
    None => PlanLine::Other,
  }
}

/// Parse generated plan text into its training days.
///
/// Never fails: text that doesn't follow the template yields an empty index.
pub fn parse_daily_workouts(plan_text: &str) -> PlanIndex {
  let (index, open) = plan_text.lines().map(classify).fold(
    (PlanIndex::default(), None::<DailyWorkout>),
    |(index, open), line| match line {
      PlanLine::Header { day, name } => {
        let index = match open {
          Some(done) => index.seal(done),
          None => index,
        };
        (index, Some(DailyWorkout::open(day, name)))
      }
      // Bullets before the first header have nowhere to go
      PlanLine::Exercise(exercise) => (index, open.map(|d| d.with_exercise(exercise))),
      PlanLine::Other => (index, open),
    },
  );

  let index = match open {
    Some(done) => index.seal(done),
    None => index,
  };

  tracing::debug!(days = index.len(), "Parsed workout plan");
  index
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
