use std::fs;
use std::path::{Path, PathBuf};

use quiz_core::model::QuestionRecord;

use crate::error::SourceError;

/// Supplies the ordered collection of question records for a session.
///
/// A source is read-only: `load` has no side effect beyond the read, and the
/// engine receives an owned copy of the records. Retry policy, if any,
/// belongs to the caller.
pub trait QuestionSource {
    /// Load all question records.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` or `SourceError::Parse` when the backing
    /// data cannot be retrieved or decoded, and `SourceError::Empty` when it
    /// decodes to zero records.
    fn load(&self) -> Result<Vec<QuestionRecord>, SourceError>;
}

/// Question source backed by a JSON file containing an array of records.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionSource for JsonFileSource {
    fn load(&self) -> Result<Vec<QuestionRecord>, SourceError> {
        let raw = fs::read_to_string(&self.path)?;
        let records: Vec<QuestionRecord> = serde_json::from_str(&raw)?;
        if records.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(records)
    }
}

/// Canned question source for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<QuestionRecord>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }
}

impl QuestionSource for InMemorySource {
    fn load(&self) -> Result<Vec<QuestionRecord>, SourceError> {
        if self.records.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(prompt: &str, answer: &str) -> QuestionRecord {
        QuestionRecord {
            prompt: prompt.into(),
            answer: answer.into(),
            options: vec![answer.into(), "other".into()],
            explanation: String::new(),
        }
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("quiz-source-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn in_memory_source_returns_records() {
        let source = InMemorySource::new(vec![record("Q1", "A1"), record("Q2", "A2")]);
        let records = source.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].prompt, "Q1");
    }

    #[test]
    fn empty_in_memory_source_is_an_error() {
        let err = InMemorySource::default().load().unwrap_err();
        assert!(matches!(err, SourceError::Empty));
    }

    #[test]
    fn file_source_parses_wire_format() {
        let path = temp_file(
            "ok.json",
            r#"[
                {"q": "Q1", "a": "A1", "options": ["A1", "B1"], "explanation": "E1"},
                {"q": "Q2", "a": "A2", "options": ["A2", "B2"], "explanation": "E2"}
            ]"#,
        );

        let records = JsonFileSource::new(&path).load().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].answer, "A2");
        assert_eq!(records[1].explanation, "E2");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = JsonFileSource::new("/nonexistent/questions.json");
        let err = source.load().unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let path = temp_file("bad.json", "{ not json");
        let err = JsonFileSource::new(&path).load().unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[test]
    fn empty_array_is_distinct_from_parse_failure() {
        let path = temp_file("empty.json", "[]");
        let err = JsonFileSource::new(&path).load().unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, SourceError::Empty));
    }
}
