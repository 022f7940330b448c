//! Answer validation and scoring.
//!
//! Grading is a pure function of a question and the raw response; malformed
//! responses are simply incorrect.

use serde::{Deserialize, Serialize};

use crate::model::{Question, QuestionKind};

/// Shown when a question has no usable answer data.
pub const UNKNOWN_ANSWER: &str = "unknown answer";

/// Shown as the correct answer of an open-ended question.
pub const OPEN_ENDED_ANSWER: &str = "no predefined answer (open question)";

/// Shown as the correct answer of an unsupported question.
pub const UNSUPPORTED_ANSWER: &str = "unsupported question kind";

/// Decide whether `response` is a correct answer to `question`.
pub fn validate(question: &Question, response: &str) -> bool {
    let response = response.trim();

    match question.kind {
        QuestionKind::MultipleChoice => response
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| question.answers.choices().get(idx))
            .is_some_and(|item| item.is_correct),

        QuestionKind::TrueFalse => {
            let chosen = match response {
                "1" => "TRUE",
                "2" => "FALSE",
                _ => return false,
            };
            true_false_literal(question).is_some_and(|lit| lit.eq_ignore_ascii_case(chosen))
        }

        QuestionKind::Matching => {
            let pairs = question.answers.pairs();
            let submitted: Vec<&str> = response.split(';').map(str::trim).collect();
            submitted.len() == pairs.len()
                && pairs
                    .iter()
                    .zip(&submitted)
                    .all(|(pair, given)| pair.right == *given)
        }

        QuestionKind::MissingWord => {
            let blanks = question.answers.blanks();
            let submitted: Vec<String> = response
                .split(';')
                .map(|word| word.trim().to_lowercase())
                .collect();
            submitted.len() == blanks.len()
                && blanks
                    .iter()
                    .zip(&submitted)
                    .all(|(blank, given)| blank.text.to_lowercase() == *given)
        }

        QuestionKind::Numeric => numeric_literal(question).is_some_and(|lit| lit == response),

        QuestionKind::OpenEnded => !response.is_empty(),

        QuestionKind::Unsupported => false,
    }
}

/// The `TRUE`/`FALSE` literal held by the first answer item.
fn true_false_literal(question: &Question) -> Option<&str> {
    question
        .answers
        .choices()
        .first()
        .map(|item| item.display_text())
        .filter(|lit| !lit.is_empty())
}

/// The expected numeric literal, without its `#` marker.
fn numeric_literal(question: &Question) -> Option<&str> {
    question
        .answers
        .choices()
        .first()
        .map(|item| item.text.trim_start_matches('#').trim())
        .filter(|lit| !lit.is_empty())
}

/// Render the canonical correct answer of a question for display.
pub fn correct_answer_display(question: &Question) -> String {
    let rendered = match question.kind {
        QuestionKind::MultipleChoice => question
            .answers
            .choices()
            .iter()
            .filter(|item| item.is_correct)
            .map(|item| item.display_text())
            .collect::<Vec<_>>()
            .join(", "),
        QuestionKind::TrueFalse => true_false_literal(question)
            .map(str::to_uppercase)
            .unwrap_or_default(),
        QuestionKind::Matching => question
            .answers
            .pairs()
            .iter()
            .map(|pair| format!("{} -> {}", pair.left, pair.right))
            .collect::<Vec<_>>()
            .join(", "),
        QuestionKind::MissingWord => question
            .answers
            .blanks()
            .iter()
            .map(|blank| blank.text.as_str())
            .collect::<Vec<_>>()
            .join("; "),
        QuestionKind::Numeric => numeric_literal(question).unwrap_or_default().to_string(),
        QuestionKind::OpenEnded => return OPEN_ENDED_ANSWER.to_string(),
        QuestionKind::Unsupported => return UNSUPPORTED_ANSWER.to_string(),
    };

    if rendered.trim().is_empty() {
        UNKNOWN_ANSWER.to_string()
    } else {
        rendered
    }
}

/// How one question of an exam sitting went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Correct,
    Incorrect,
    /// An open-ended question that received an answer.
    Ungraded,
    /// No answer given; counts as incorrect.
    Skipped,
}

impl Outcome {
    /// Grade a response. An empty response is [`Outcome::Skipped`].
    pub fn grade(question: &Question, response: &str) -> Self {
        if response.trim().is_empty() {
            Outcome::Skipped
        } else if question.kind == QuestionKind::OpenEnded {
            Outcome::Ungraded
        } else if validate(question, response) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        }
    }
}

/// Running tally of an exam sitting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scorecard {
    outcomes: Vec<Outcome>,
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn correct(&self) -> usize {
        self.count(|o| o == Outcome::Correct)
    }

    /// Incorrect and skipped answers.
    pub fn incorrect(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Incorrect | Outcome::Skipped))
    }

    pub fn ungraded(&self) -> usize {
        self.count(|o| o == Outcome::Ungraded)
    }

    /// Correct answers as a percentage of all questions.
    pub fn score_percent(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.correct() as f64 / self.total() as f64 * 100.0
    }

    fn count(&self, pred: impl Fn(Outcome) -> bool) -> usize {
        self.outcomes.iter().copied().filter(|&o| pred(o)).count()
    }
}
