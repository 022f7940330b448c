//! GIFT question parser.
//!
//! Turns one `::title::prompt{answers}` block into a typed [`Question`], and
//! whole documents into question lists.

use crate::answers::{parse_blanks, parse_choices, parse_pairs};
use crate::inference::infer_kind;
use crate::model::{Answers, Question, QuestionKind};
use crate::patterns::regex;
use crate::tokenizer::split_blocks;

/// Parse a single block. Returns `None` when no title/prompt can be found.
pub fn parse_question(block: &str) -> Option<Question> {
    let block = block.trim();
    let text = strip_comments(block);
    let caps = regex!(r"::(.*?)::([^{}]+)(\s*\{[\s\S]*\})?").captures(&text)?;

    let title = caps[1].trim().to_string();
    let prompt = caps[2].trim().to_string();
    let answer_spec = caps
        .get(3)
        .map(|m| outer_brace_content(m.as_str()))
        .unwrap_or_default();

    let kind = infer_kind(answer_spec, &prompt);
    let answers = match kind {
        QuestionKind::Matching => Answers::Pairs(parse_pairs(answer_spec)),
        QuestionKind::MultipleChoice | QuestionKind::TrueFalse | QuestionKind::Numeric => {
            Answers::Choices(parse_choices(answer_spec))
        }
        QuestionKind::MissingWord => Answers::Blanks(parse_blanks(&prompt)),
        QuestionKind::OpenEnded | QuestionKind::Unsupported => Answers::None,
    };

    Some(Question {
        title,
        prompt,
        kind,
        answers,
        raw_block: block.to_string(),
    })
}

/// The block without its `//` comment lines.
fn strip_comments(block: &str) -> String {
    block
        .lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text between the first `{` and the last `}`, trimmed.
fn outer_brace_content(section: &str) -> &str {
    let start = section.find('{').map(|i| i + 1).unwrap_or(0);
    let end = section.rfind('}').unwrap_or(section.len());
    if start <= end {
        section[start..end].trim()
    } else {
        ""
    }
}

/// Parse every well-formed block of a document, in order.
pub fn parse_document(text: &str) -> Vec<Question> {
    inspect_document(text).questions
}

/// Result of parsing a document with diagnostics.
#[derive(Debug, Clone, Default)]
pub struct DocumentReport {
    /// Successfully parsed questions, in document order.
    pub questions: Vec<Question>,
    /// 1-based numbers of blocks that could not be parsed.
    pub malformed_blocks: Vec<usize>,
}

impl DocumentReport {
    /// Questions whose answer spec matched no inference rule.
    pub fn unsupported(&self) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(|q| !q.kind.is_supported())
    }
}

/// Parse a document, keeping track of the blocks that were dropped.
pub fn inspect_document(text: &str) -> DocumentReport {
    let mut report = DocumentReport::default();

    for (idx, block) in split_blocks(text).enumerate() {
        match parse_question(block) {
            Some(question) => report.questions.push(question),
            None if is_comment(block) => {}
            None => {
                tracing::debug!(block = idx + 1, "skipping malformed block");
                report.malformed_blocks.push(idx + 1);
            }
        }
    }

    report
}

/// A block made only of `//` comment lines.
fn is_comment(block: &str) -> bool {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .all(|line| line.starts_with("//"))
}
