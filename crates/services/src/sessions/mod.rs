mod plan;
mod progress;
mod service;
mod view;

pub use plan::{SessionPlan, DEFAULT_QUESTIONS_PER_SESSION};
pub use progress::SessionProgress;
pub use service::{AnswerOutcome, SessionAnswer, SessionService};
pub use view::QuestionPrompt;
