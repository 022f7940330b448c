//! giftbank-core: GIFT question parsing, grading and exam profiles.
//!
//! This crate holds the question model, the markup parser with its kind
//! inference, the grader, profile statistics and the exam assembly context
//! that the `giftbank` binary builds on.

mod patterns;

pub mod answers;
pub mod config;
pub mod contact;
pub mod error;
pub mod exam;
pub mod grading;
pub mod inference;
pub mod loader;
pub mod model;
pub mod parser;
pub mod profile;
pub mod staging;
pub mod tokenizer;

pub use error::{ExamError, FieldError};
pub use exam::{ExamDraft, MAX_QUESTIONS, MIN_QUESTIONS};
pub use grading::{correct_answer_display, validate, Outcome, Scorecard};
pub use model::{AnswerItem, Answers, Blank, MatchPair, Question, QuestionKind};
pub use parser::{parse_document, parse_question};
pub use profile::{analyze, compare, Profile};
