//! Per-kind answer spec parsers.

use regex::Regex;

use crate::model::{AnswerItem, Blank, MatchPair};
use crate::patterns::regex;

/// Placeholder shown in place of each `[word]` blank.
pub const BLANK_PLACEHOLDER: &str = "____";

/// A `[word]` blank: brackets around at least one non-space character, with
/// no bracket inside. `[]` and `[  ]` are plain text.
pub(crate) fn blank_pattern() -> &'static Regex {
    regex!(r"\[([^\[\]]*[^\[\]\s][^\[\]]*)\]")
}

fn strip_braces(spec: &str) -> String {
    spec.replace(['{', '}'], "")
}

/// Parse `=correct` / `~distractor` lines (multiple choice, true/false, numeric).
///
/// Blank lines are skipped; item order is preserved since it defines the
/// 1-based choice numbers shown to the user.
pub fn parse_choices(spec: &str) -> Vec<AnswerItem> {
    strip_braces(spec)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let is_correct = line.starts_with('=');
            let text = line
                .strip_prefix('=')
                .or_else(|| line.strip_prefix('~'))
                .unwrap_or(line)
                .trim()
                .to_string();
            AnswerItem { text, is_correct }
        })
        .collect()
}

/// Parse `=left -> right #comment` lines of a matching question.
pub fn parse_pairs(spec: &str) -> Vec<MatchPair> {
    let re = regex!(r"^\s*=\s*(.*?)\s*->\s*(.*?)\s*(?:#.*)?$");
    strip_braces(spec)
        .lines()
        .filter_map(|line| {
            let caps = re.captures(line)?;
            Some(MatchPair {
                left: caps[1].trim().to_string(),
                right: caps[2].trim().to_string(),
            })
        })
        .collect()
}

/// Collect every `[word]` blank of a prompt, left to right.
pub fn parse_blanks(prompt: &str) -> Vec<Blank> {
    blank_pattern()
        .captures_iter(prompt)
        .map(|caps| Blank {
            text: caps[1].trim().to_string(),
        })
        .collect()
}

/// Hide every blank of a missing-word prompt behind [`BLANK_PLACEHOLDER`].
pub fn mask_blanks(prompt: &str) -> String {
    blank_pattern()
        .replace_all(prompt, BLANK_PLACEHOLDER)
        .into_owned()
}
