//! Exam profiles: per-kind question counts and their comparison.

use serde::{Deserialize, Serialize};

use crate::model::{Question, QuestionKind};

/// Number of questions of each recognized kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub multiple_choice: usize,
    pub true_false: usize,
    pub matching: usize,
    pub missing_word: usize,
    pub numeric: usize,
    pub open_ended: usize,
}

impl Profile {
    /// Count for a kind. Unsupported questions are never counted.
    pub fn get(&self, kind: QuestionKind) -> usize {
        match kind {
            QuestionKind::MultipleChoice => self.multiple_choice,
            QuestionKind::TrueFalse => self.true_false,
            QuestionKind::Matching => self.matching,
            QuestionKind::MissingWord => self.missing_word,
            QuestionKind::Numeric => self.numeric,
            QuestionKind::OpenEnded => self.open_ended,
            QuestionKind::Unsupported => 0,
        }
    }

    fn slot(&mut self, kind: QuestionKind) -> Option<&mut usize> {
        match kind {
            QuestionKind::MultipleChoice => Some(&mut self.multiple_choice),
            QuestionKind::TrueFalse => Some(&mut self.true_false),
            QuestionKind::Matching => Some(&mut self.matching),
            QuestionKind::MissingWord => Some(&mut self.missing_word),
            QuestionKind::Numeric => Some(&mut self.numeric),
            QuestionKind::OpenEnded => Some(&mut self.open_ended),
            QuestionKind::Unsupported => None,
        }
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.iter().map(|(_, count)| count).sum()
    }

    /// `(kind, count)` pairs in natural kind order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionKind, usize)> + '_ {
        QuestionKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Largest single count (0 for an empty profile).
    pub fn max_count(&self) -> usize {
        self.iter().map(|(_, count)| count).max().unwrap_or(0)
    }

    /// Percentage of `population` made up by `kind`.
    ///
    /// `population` is the number of questions loaded, unsupported ones
    /// included, so shares may add up to less than 100.
    pub fn share(&self, kind: QuestionKind, population: usize) -> f64 {
        if population == 0 {
            return 0.0;
        }
        self.get(kind) as f64 / population as f64 * 100.0
    }

    /// Compare this profile against a reference, one line per kind.
    pub fn compare(&self, reference: &Profile) -> Vec<String> {
        compare(self, reference)
    }
}

/// Count the questions of each recognized kind.
pub fn analyze<'a>(questions: impl IntoIterator<Item = &'a Question>) -> Profile {
    let mut profile = Profile::default();
    for question in questions {
        if let Some(count) = profile.slot(question.kind) {
            *count += 1;
        }
    }
    profile
}

/// Describe how `exam` differs from `reference`, one line per kind in
/// natural order.
pub fn compare(exam: &Profile, reference: &Profile) -> Vec<String> {
    QuestionKind::ALL
        .iter()
        .map(|&kind| {
            let diff = exam.get(kind) as i64 - reference.get(kind) as i64;
            let label = kind.label();
            if diff == 0 {
                format!("Same number of {label} questions.")
            } else {
                let direction = if diff > 0 { "more" } else { "fewer" };
                format!(
                    "The selected exam has {} {direction} {label} questions than the reference.",
                    diff.abs()
                )
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    fn profile(counts: [usize; 6]) -> Profile {
        Profile {
            multiple_choice: counts[0],
            true_false: counts[1],
            matching: counts[2],
            missing_word: counts[3],
            numeric: counts[4],
            open_ended: counts[5],
        }
    }

    #[test]
    fn analyze_counts_each_kind() {
        let questions = parse_document(
            "::A::a{\n=1\n~2\n}\n::B::b{\n=1\n~2\n}\n::C::c{TRUE}\n::D::[x] y\n::E::e{#1}\n::F::f",
        );
        let p = analyze(&questions);
        assert_eq!(p, profile([2, 1, 0, 1, 1, 1]));
        assert_eq!(p.total(), questions.len());
    }

    #[test]
    fn analyze_ignores_unsupported() {
        let questions = parse_document("::A::a{\n=1\n}\n::B::b{weird}\n::C::c{weird too}");
        let p = analyze(&questions);
        assert_eq!(p.total(), 1);
        assert_eq!(questions.len(), 3);

        // Shares use the pre-filter population, so they do not reach 100%.
        let sum: f64 = QuestionKind::ALL
            .iter()
            .map(|&k| p.share(k, questions.len()))
            .sum();
        assert!((sum - 100.0 / 3.0).abs() < 1e-9, "got {sum}");
    }

    #[test]
    fn compare_identical_profiles() {
        let p = profile([5, 3, 2, 4, 1, 0]);
        let lines = compare(&p, &p);
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| l.starts_with("Same number of")));
    }

    #[test]
    fn compare_reports_signed_differences() {
        let exam = profile([5, 3, 2, 4, 1, 0]);
        let reference = profile([3, 4, 2, 5, 2, 1]);
        let lines = exam.compare(&reference);
        assert_eq!(
            lines[0],
            "The selected exam has 2 more multiple choice questions than the reference."
        );
        assert_eq!(
            lines[1],
            "The selected exam has 1 fewer true/false questions than the reference."
        );
        assert_eq!(lines[2], "Same number of matching questions.");
        assert!(lines[5].contains("1 fewer open-ended"));
    }

    #[test]
    fn share_of_empty_population_is_zero() {
        assert_eq!(Profile::default().share(QuestionKind::Numeric, 0), 0.0);
        assert_eq!(Profile::default().max_count(), 0);
    }
}
