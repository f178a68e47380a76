use serde::{Deserialize, Serialize};

//
// ─── QUESTION RECORD ───────────────────────────────────────────────────────────
//

/// A single multiple-choice question as supplied by a question source.
///
/// The wire field names (`q`, `a`, `options`, `explanation`) are fixed by the
/// external data contract; the Rust names spell them out. Records are
/// immutable once loaded.
///
/// `answer` is expected to textually match one entry in `options`. That is a
/// data-quality contract of the source, not something the engine validates.
/// Duplicate strings in `options` are permitted and treated as distinct
/// option slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(rename = "q")]
    pub prompt: String,

    #[serde(rename = "a")]
    pub answer: String,

    pub options: Vec<String>,

    pub explanation: String,
}

impl QuestionRecord {
    /// Returns true when `chosen` matches the correct answer exactly.
    #[must_use]
    pub fn is_correct(&self, chosen: &str) -> bool {
        self.answer == chosen
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
