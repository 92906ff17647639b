mod choices;
mod plan;
mod progress;
mod service;
mod workflow;

// Public API of the quiz session subsystem.
pub use crate::error::SessionError;
pub use choices::build_choices;
pub use plan::{QuizPlan, QuizPlanner};
pub use progress::QuizProgress;
pub use service::{QuizSession, SessionState};
pub use workflow::{DayOverview, QuizLoopService};
