#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;
pub mod source;

pub use quiz_core::Clock;
pub use sessions as session;

pub use error::{SessionError, SourceError};
pub use sessions::{
    AnswerOutcome, QuestionPrompt, SessionAnswer, SessionPlan, SessionProgress, SessionService,
    DEFAULT_QUESTIONS_PER_SESSION,
};
pub use source::{InMemorySource, JsonFileSource, QuestionSource};
