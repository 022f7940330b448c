//! Question kind inference.
//!
//! Rules are tried in a fixed order and the first match wins. The order
//! matters: a matching spec also contains `=`, and a true/false spec may too.

use crate::answers::blank_pattern;
use crate::model::QuestionKind;
use crate::patterns::regex;

/// Classify a block from its raw answer spec (the text between the outer
/// braces) and its prompt.
pub fn infer_kind(answer_spec: &str, prompt: &str) -> QuestionKind {
    let spec = answer_spec.trim();

    if spec.is_empty() {
        return if blank_pattern().is_match(prompt) {
            QuestionKind::MissingWord
        } else {
            QuestionKind::OpenEnded
        };
    }

    if regex!(r"=[^\n]*->").is_match(spec) {
        return QuestionKind::Matching;
    }

    if spec.contains("TRUE") || spec.contains("FALSE") {
        return QuestionKind::TrueFalse;
    }

    if spec.contains('=') {
        return QuestionKind::MultipleChoice;
    }

    if regex!(r"^#\s*-?\d+(?:\.\d+)?$").is_match(spec) {
        return QuestionKind::Numeric;
    }

    QuestionKind::Unsupported
}
