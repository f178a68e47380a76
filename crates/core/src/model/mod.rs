mod question;
mod session;

pub use question::QuestionRecord;
pub use session::{ScoreTier, SessionSummary, SessionSummaryError};
