//! Domain error types.
//!
//! Parsing and grading never fail; these errors cover exam assembly and the
//! contact form, where the user is asked to correct the input.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons an exam draft cannot be saved.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExamError {
    /// Fewer questions than the minimum.
    #[error("the exam must contain between {min} and {max} questions, it currently has {count}")]
    TooFewQuestions { count: usize, min: usize, max: usize },

    /// More questions than the maximum.
    #[error("the exam must contain between {min} and {max} questions, it currently has {count}")]
    TooManyQuestions { count: usize, min: usize, max: usize },

    /// Two questions share a title.
    #[error("question '{0}' is already part of the exam")]
    DuplicateTitle(String),

    /// The exam file name is empty.
    #[error("the exam file name cannot be empty")]
    EmptyFileName,

    /// The destination exists and overwriting was not allowed.
    #[error("file already exists: {}", .0.display())]
    FileExists(PathBuf),
}

impl ExamError {
    /// Returns `true` if removing or adding questions can fix this error.
    pub fn is_selection_problem(&self) -> bool {
        matches!(
            self,
            ExamError::TooFewQuestions { .. }
                | ExamError::TooManyQuestions { .. }
                | ExamError::DuplicateTitle(_)
        )
    }
}

/// A contact form value rejected by its validator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("invalid {field}: {hint}")]
    Invalid {
        field: &'static str,
        hint: &'static str,
    },
}
