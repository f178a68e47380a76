/// Presentation-agnostic view of the current question.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings
/// - no localization assumptions
///
/// `options` is a fresh shuffle of the record's options, re-randomized on
/// every request so the displayed ordering never correlates with storage
/// order. The UI renders them as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPrompt {
    /// 1-based position within the session, for "question N of M" displays.
    pub number: usize,
    pub total: usize,

    pub prompt: String,
    pub options: Vec<String>,
}
