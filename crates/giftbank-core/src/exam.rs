//! Exam assembly.
//!
//! An [`ExamDraft`] is the explicit working set of an assembly session. It is
//! validated before being written out as a GIFT file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ExamError;
use crate::model::Question;

/// Smallest number of questions an exam may hold.
pub const MIN_QUESTIONS: usize = 15;
/// Largest number of questions an exam may hold.
pub const MAX_QUESTIONS: usize = 20;

/// Extension of GIFT files.
pub const GIFT_EXTENSION: &str = "gift";

/// Questions selected for an exam, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExamDraft {
    questions: Vec<Question>,
}

impl ExamDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.questions.iter().any(|q| q.title == title)
    }

    /// Append a question, rejecting a title that is already selected.
    pub fn add(&mut self, question: Question) -> Result<(), ExamError> {
        if self.contains_title(&question.title) {
            return Err(ExamError::DuplicateTitle(question.title));
        }
        self.questions.push(question);
        Ok(())
    }

    /// Remove the question at a 0-based position.
    pub fn remove(&mut self, index: usize) -> Option<Question> {
        (index < self.questions.len()).then(|| self.questions.remove(index))
    }

    pub fn clear(&mut self) {
        self.questions.clear();
    }

    /// Check the question count, then title uniqueness.
    pub fn validate(&self) -> Result<(), ExamError> {
        let count = self.questions.len();
        if count < MIN_QUESTIONS {
            return Err(ExamError::TooFewQuestions {
                count,
                min: MIN_QUESTIONS,
                max: MAX_QUESTIONS,
            });
        }
        if count > MAX_QUESTIONS {
            return Err(ExamError::TooManyQuestions {
                count,
                min: MIN_QUESTIONS,
                max: MAX_QUESTIONS,
            });
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.title.as_str()) {
                return Err(ExamError::DuplicateTitle(question.title.clone()));
            }
        }
        Ok(())
    }

    /// The exam as GIFT text: every source block, separated by a blank line.
    pub fn to_gift(&self) -> String {
        self.questions
            .iter()
            .map(|q| q.raw_block.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Validate and write the exam to `path`.
    ///
    /// An existing file is only replaced when `overwrite` is set.
    pub fn save(&self, path: &Path, overwrite: bool) -> Result<PathBuf> {
        self.validate()?;
        if path.exists() && !overwrite {
            return Err(ExamError::FileExists(path.to_path_buf()).into());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        std::fs::write(path, self.to_gift())
            .with_context(|| format!("failed to write exam to {}", path.display()))?;

        tracing::info!(path = %path.display(), questions = self.len(), "exam saved");
        Ok(path.to_path_buf())
    }
}

/// Destination of an exam named `name` inside `exams_dir`.
pub fn exam_path(exams_dir: &Path, name: &str) -> Result<PathBuf, ExamError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ExamError::EmptyFileName);
    }
    let file_name = match Path::new(name).extension() {
        Some(ext) if ext == GIFT_EXTENSION => name.to_string(),
        _ => format!("{name}.{GIFT_EXTENSION}"),
    };
    Ok(exams_dir.join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_document, parse_question};

    fn numbered(n: usize) -> Vec<Question> {
        (1..=n)
            .map(|i| parse_question(&format!("::Q{i}::Question {i}? {{\n=yes\n~no\n}}")).unwrap())
            .collect()
    }

    fn draft(n: usize) -> ExamDraft {
        let mut draft = ExamDraft::new();
        for q in numbered(n) {
            draft.add(q).unwrap();
        }
        draft
    }

    #[test]
    fn add_rejects_duplicate_titles() {
        let mut d = draft(2);
        let dup = numbered(1).remove(0);
        assert_eq!(d.add(dup), Err(ExamError::DuplicateTitle("Q1".into())));
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn remove_by_position() {
        let mut d = draft(3);
        let removed = d.remove(1).unwrap();
        assert_eq!(removed.title, "Q2");
        assert!(d.remove(5).is_none());
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn validate_enforces_size_bounds() {
        assert!(matches!(
            draft(14).validate(),
            Err(ExamError::TooFewQuestions { count: 14, .. })
        ));
        assert!(draft(15).validate().is_ok());
        assert!(draft(20).validate().is_ok());
        assert!(matches!(
            draft(21).validate(),
            Err(ExamError::TooManyQuestions { count: 21, .. })
        ));
    }

    #[test]
    fn validate_detects_duplicates_from_staging() {
        let mut questions = numbered(15);
        questions[3] = questions[0].clone();
        let json = serde_json::to_string(&questions).unwrap();
        let d: ExamDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(d.validate(), Err(ExamError::DuplicateTitle("Q1".into())));
    }

    #[test]
    fn gift_round_trip_preserves_titles_and_kinds() {
        let source = "::A::Pick {\n=1\n~2\n}\n::B::Sky is blue {TRUE}\n::C::Match {\n=a -> b\n=c -> d\n}\n::D::The [cat] sat\n::E::Answer {#7}\n::F::Discuss.";
        let mut d = ExamDraft::new();
        for q in parse_document(source).into_iter().rev() {
            d.add(q).unwrap();
        }

        let reparsed = parse_document(&d.to_gift());
        let before: Vec<_> = d.questions().iter().map(|q| (&q.title, q.kind)).collect();
        let after: Vec<_> = reparsed.iter().map(|q| (&q.title, q.kind)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn save_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exams").join("final.gift");
        let d = draft(15);

        d.save(&path, false).unwrap();
        assert!(path.exists());

        let err = d.save(&path, false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExamError>(),
            Some(ExamError::FileExists(_))
        ));
        d.save(&path, true).unwrap();
    }

    #[test]
    fn save_validates_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.gift");
        assert!(draft(3).save(&path, false).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn exam_path_appends_extension() {
        let dir = Path::new("exams");
        assert_eq!(exam_path(dir, "midterm").unwrap(), dir.join("midterm.gift"));
        assert_eq!(exam_path(dir, "final.gift").unwrap(), dir.join("final.gift"));
        assert_eq!(exam_path(dir, "   "), Err(ExamError::EmptyFileName));
    }
}
