use serde::{Deserialize, Serialize};

/// Measurement system used for stored body measurements and LLM prompts.
/// Height is inches or centimeters, weight is pounds or kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
  #[default]
  Imperial,
  Metric,
}

impl UnitSystem {
  pub fn weight_unit(&self) -> &'static str {
    match self {
      Self::Imperial => "lbs",
      Self::Metric => "kg",
    }
  }

  pub fn length_unit(&self) -> &'static str {
    match self {
      Self::Imperial => "inches",
      Self::Metric => "cm",
    }
  }

  /// Body mass index, rounded to 2 decimals
  pub fn bmi(&self, weight: f64, height: f64) -> Option<f64> {
    if height <= 0.0 || weight <= 0.0 {
      return None;
    }

    let bmi = match self {
      // lbs / in² × 703
      Self::Imperial => weight / (height * height) * 703.0,
      Self::Metric => {
        let meters = height / 100.0;
        weight / (meters * meters)
      }
    };

    Some((bmi * 100.0).round() / 100.0)
  }
}

impl std::fmt::Display for UnitSystem {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Imperial => write!(f, "imperial"),
      Self::Metric => write!(f, "metric"),
    }
  }
}

impl std::str::FromStr for UnitSystem {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "imperial" => Ok(Self::Imperial),
      "metric" => Ok(Self::Metric),
      _ => Err(format!("Unknown unit system: {}", s)),
    }
  }
}
