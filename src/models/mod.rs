pub mod exercise;
pub mod goal;
pub mod plan;
pub mod progress;
pub mod session;
pub mod user;

pub use exercise::Exercise;
pub use goal::{Goal, NewGoal};
pub use plan::{NewWorkoutPlan, WorkoutPlan};
pub use progress::{NewProgress, Progress};
pub use session::{NewWorkoutSession, WorkoutSession};
pub use user::{NewUser, User};
