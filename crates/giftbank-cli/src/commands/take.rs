//! The `giftbank take` command.

use std::io::{BufRead, Write};

use anyhow::Result;

use giftbank_core::answers::mask_blanks;
use giftbank_core::config::GiftbankConfig;
use giftbank_core::{correct_answer_display, Outcome, Question, QuestionKind, Scorecard};

use super::{exam_name, load_exam};
use crate::prompt::Prompter;

pub fn execute(config: &GiftbankConfig, exam: &str) -> Result<()> {
    let (path, questions) = load_exam(config, exam)?;
    if questions.is_empty() {
        anyhow::bail!("exam '{}' contains no questions", exam_name(&path));
    }

    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout().lock());

    prompter.say(format!(
        "Exam '{}': {} question(s).",
        exam_name(&path),
        questions.len()
    ))?;
    let card = sit(&questions, &mut prompter)?;
    print_scorecard(&card, &mut prompter)
}

/// Ask every question in order and grade the responses.
///
/// End of input skips the remaining questions.
pub fn sit<R: BufRead, W: Write>(
    questions: &[Question],
    p: &mut Prompter<R, W>,
) -> Result<Scorecard> {
    let mut card = Scorecard::new();
    let total = questions.len();

    for (idx, question) in questions.iter().enumerate() {
        p.say("")?;
        p.say(format!("Question {}/{total}: {}", idx + 1, question.title))?;
        present(question, p)?;

        let Some(response) = read_response(p)? else {
            for _ in idx..total {
                card.record(Outcome::Skipped);
            }
            p.say("\nNo more input, remaining questions skipped.")?;
            break;
        };

        let outcome = Outcome::grade(question, &response);
        card.record(outcome);

        match outcome {
            Outcome::Correct => p.say("Correct!")?,
            Outcome::Incorrect => p.say(format!(
                "Incorrect. Correct answer: {}",
                correct_answer_display(question)
            ))?,
            Outcome::Skipped => p.say(format!(
                "Skipped. Correct answer: {}",
                correct_answer_display(question)
            ))?,
            Outcome::Ungraded => p.say("Answer recorded (open question, not graded).")?,
        }
    }

    Ok(card)
}

/// Read an answer. An empty answer must be confirmed; `no` asks again.
fn read_response<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<Option<String>> {
    loop {
        let Some(response) = p.ask("Your answer: ")? else {
            return Ok(None);
        };
        if !response.trim().is_empty() {
            return Ok(Some(response));
        }

        match p.ask("You did not answer. Leave this question unanswered? (yes/no): ")? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("no") => continue,
            Some(_) => return Ok(Some(String::new())),
            None => return Ok(None),
        }
    }
}

fn present<R: BufRead, W: Write>(question: &Question, p: &mut Prompter<R, W>) -> Result<()> {
    match question.kind {
        QuestionKind::MultipleChoice => {
            p.say(&question.prompt)?;
            for (n, item) in question.answers.choices().iter().enumerate() {
                p.say(format!("  {}. {}", n + 1, item.display_text()))?;
            }
            p.say("(enter the number of your choice)")
        }
        QuestionKind::TrueFalse => {
            p.say(&question.prompt)?;
            p.say("  1. TRUE")?;
            p.say("  2. FALSE")
        }
        QuestionKind::Matching => {
            p.say(&question.prompt)?;
            let pairs = question.answers.pairs();
            for (n, pair) in pairs.iter().enumerate() {
                p.say(format!("  {}. {}", n + 1, pair.left))?;
            }
            let mut options: Vec<&str> = pairs.iter().map(|pair| pair.right.as_str()).collect();
            options.sort_unstable();
            p.say(format!("Options: {}", options.join(", ")))?;
            p.say("(enter the matches in order, separated by ';')")
        }
        QuestionKind::MissingWord => {
            p.say(mask_blanks(&question.prompt))?;
            p.say("(fill the blanks in order, separated by ';')")
        }
        QuestionKind::Numeric => {
            p.say(&question.prompt)?;
            p.say("(enter a number)")
        }
        QuestionKind::OpenEnded => p.say(&question.prompt),
        QuestionKind::Unsupported => {
            p.say(&question.prompt)?;
            p.say("(this question kind is not supported and cannot be answered correctly)")
        }
    }
}

fn print_scorecard<R: BufRead, W: Write>(card: &Scorecard, p: &mut Prompter<R, W>) -> Result<()> {
    p.say("")?;
    p.say(format!(
        "Score: {}/{} ({:.1}%)",
        card.correct(),
        card.total(),
        card.score_percent()
    ))?;
    p.say(format!("  correct:   {}", card.correct()))?;
    p.say(format!("  incorrect: {}", card.incorrect()))?;
    if card.ungraded() > 0 {
        p.say(format!("  ungraded:  {} (open questions)", card.ungraded()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftbank_core::parse_document;
    use std::io::Cursor;

    const EXAM: &str = "\
::Capital::What is the capital of France? {
=Paris
~Lyon
}

::Sky::The sky is blue. {TRUE}

::Answer::What is six times seven? {#42}

::Essay::Describe your favourite city.
";

    fn sit_with(input: &str) -> (Scorecard, String) {
        let questions = parse_document(EXAM);
        let mut p = Prompter::new(Cursor::new(input.to_string()), Vec::new());
        let card = sit(&questions, &mut p).unwrap();
        (card, String::from_utf8(p.into_output()).unwrap())
    }

    #[test]
    fn grades_each_kind() {
        let (card, out) = sit_with("1\n2\n42.0\nParis is lovely\n");

        assert_eq!(
            card.outcomes(),
            &[
                Outcome::Correct,
                Outcome::Incorrect,
                Outcome::Incorrect,
                Outcome::Ungraded
            ]
        );
        assert!(out.contains("  1. Paris"));
        assert!(out.contains("  2. FALSE"));
        assert!(out.contains("Incorrect. Correct answer: TRUE"));
        assert!(out.contains("Incorrect. Correct answer: 42"));
        assert_eq!(card.score_percent(), 25.0);
    }

    #[test]
    fn empty_answer_needs_confirmation() {
        let (card, out) = sit_with("\nno\n1\n\nyes\n42\nsure\n");

        assert_eq!(
            card.outcomes(),
            &[
                Outcome::Correct,
                Outcome::Skipped,
                Outcome::Correct,
                Outcome::Ungraded
            ]
        );
        assert!(out.contains("Leave this question unanswered?"));
        assert!(out.contains("Skipped. Correct answer: TRUE"));
    }

    #[test]
    fn end_of_input_skips_the_rest() {
        let (card, out) = sit_with("1\n");

        assert_eq!(card.total(), 4);
        assert_eq!(card.correct(), 1);
        assert_eq!(card.incorrect(), 3);
        assert!(out.contains("remaining questions skipped"));
    }

    #[test]
    fn missing_word_prompt_is_masked() {
        let questions = parse_document("::Gap::The [cat] sat on the [mat].");
        let mut p = Prompter::new(Cursor::new("Cat; mat\n"), Vec::new());
        let card = sit(&questions, &mut p).unwrap();
        let out = String::from_utf8(p.into_output()).unwrap();

        assert!(out.contains("The ____ sat on the ____."));
        assert_eq!(card.correct(), 1);
    }

    #[test]
    fn scorecard_summary() {
        let mut card = Scorecard::new();
        card.record(Outcome::Correct);
        card.record(Outcome::Ungraded);
        let mut p = Prompter::new(Cursor::new(""), Vec::new());
        print_scorecard(&card, &mut p).unwrap();
        let out = String::from_utf8(p.into_output()).unwrap();

        assert!(out.contains("Score: 1/2 (50.0%)"));
        assert!(out.contains("ungraded:  1"));
    }
}
