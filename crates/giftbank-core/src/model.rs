//! Core data model types for giftbank.
//!
//! A [`Question`] is the parsed form of one GIFT block. Questions are built by
//! the parser and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of a question, inferred from its answer spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    Matching,
    MissingWord,
    Numeric,
    OpenEnded,
    /// The answer spec matched no inference rule.
    Unsupported,
}

impl QuestionKind {
    /// The recognized kinds, in their natural order.
    pub const ALL: [QuestionKind; 6] = [
        QuestionKind::MultipleChoice,
        QuestionKind::TrueFalse,
        QuestionKind::Matching,
        QuestionKind::MissingWord,
        QuestionKind::Numeric,
        QuestionKind::OpenEnded,
    ];

    /// Human-readable label used in comparison messages.
    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple choice",
            QuestionKind::TrueFalse => "true/false",
            QuestionKind::Matching => "matching",
            QuestionKind::MissingWord => "missing word",
            QuestionKind::Numeric => "numeric",
            QuestionKind::OpenEnded => "open-ended",
            QuestionKind::Unsupported => "unsupported",
        }
    }

    /// Returns `false` only for [`QuestionKind::Unsupported`].
    pub fn is_supported(self) -> bool {
        self != QuestionKind::Unsupported
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::MultipleChoice => write!(f, "multiple-choice"),
            QuestionKind::TrueFalse => write!(f, "true-false"),
            QuestionKind::Matching => write!(f, "matching"),
            QuestionKind::MissingWord => write!(f, "missing-word"),
            QuestionKind::Numeric => write!(f, "numeric"),
            QuestionKind::OpenEnded => write!(f, "open-ended"),
            QuestionKind::Unsupported => write!(f, "unsupported"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "multiple choice" | "multiplechoice" | "mc" | "choix multiple" => {
                Ok(QuestionKind::MultipleChoice)
            }
            "true false" | "truefalse" | "true/false" | "tf" | "vrai/faux" | "vrai faux" => {
                Ok(QuestionKind::TrueFalse)
            }
            "matching" | "correspondance" => Ok(QuestionKind::Matching),
            "missing word" | "missingword" | "mot manquant" => Ok(QuestionKind::MissingWord),
            "numeric" | "numerique" | "numérique" => Ok(QuestionKind::Numeric),
            "open ended" | "openended" | "open" | "essay" | "question ouverte" => {
                Ok(QuestionKind::OpenEnded)
            }
            "unsupported" => Ok(QuestionKind::Unsupported),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// One choice of a multiple-choice, true/false or numeric question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerItem {
    /// Item text with its `=`/`~` marker removed. May carry a `#feedback` suffix.
    pub text: String,
    /// Whether the line carried the `=` marker.
    pub is_correct: bool,
}

impl AnswerItem {
    /// The text shown to a test-taker, without any `#` feedback suffix.
    pub fn display_text(&self) -> &str {
        self.text.split('#').next().unwrap_or_default().trim()
    }
}

/// One `left -> right` association of a matching question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPair {
    pub left: String,
    pub right: String,
}

/// One `[word]` blank of a missing-word question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blank {
    pub text: String,
}

/// The parsed answer spec. Its shape follows the question kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "shape", content = "items", rename_all = "snake_case")]
pub enum Answers {
    /// Multiple choice, true/false and numeric questions.
    Choices(Vec<AnswerItem>),
    /// Matching questions, in the order the left-hand items are shown.
    Pairs(Vec<MatchPair>),
    /// Missing-word questions, in order of appearance in the prompt.
    Blanks(Vec<Blank>),
    /// Open-ended and unsupported questions.
    #[default]
    None,
}

impl Answers {
    /// Number of items, pairs or blanks.
    pub fn len(&self) -> usize {
        match self {
            Answers::Choices(items) => items.len(),
            Answers::Pairs(pairs) => pairs.len(),
            Answers::Blanks(blanks) => blanks.len(),
            Answers::None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn choices(&self) -> &[AnswerItem] {
        match self {
            Answers::Choices(items) => items,
            _ => &[],
        }
    }

    pub fn pairs(&self) -> &[MatchPair] {
        match self {
            Answers::Pairs(pairs) => pairs,
            _ => &[],
        }
    }

    pub fn blanks(&self) -> &[Blank] {
        match self {
            Answers::Blanks(blanks) => blanks,
            _ => &[],
        }
    }
}

/// A parsed question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Title between the `::` markers.
    pub title: String,
    /// Question statement. Missing-word prompts keep their `[word]` blanks.
    pub prompt: String,
    /// Inferred kind.
    pub kind: QuestionKind,
    /// Parsed answer spec.
    #[serde(default)]
    pub answers: Answers,
    /// The trimmed source block, kept verbatim for re-serialization.
    pub raw_block: String,
}
