//! The `giftbank list`, `search` and `show` commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use giftbank_core::config::GiftbankConfig;
use giftbank_core::{Question, QuestionKind};

use super::load_bank;

pub fn list(config: &GiftbankConfig, bank: Option<PathBuf>) -> Result<()> {
    let questions = load_bank(config, bank)?;
    print_questions(questions.iter().enumerate());
    Ok(())
}

pub fn search(
    config: &GiftbankConfig,
    bank: Option<PathBuf>,
    keyword: Option<String>,
    kind: Option<String>,
) -> Result<()> {
    let questions = load_bank(config, bank)?;

    let matches: Vec<(usize, &Question)> = match (keyword, kind) {
        (_, Some(kind)) => {
            let kind: QuestionKind = kind.parse().map_err(anyhow::Error::msg)?;
            filter_by_kind(&questions, kind).collect()
        }
        (Some(keyword), None) => filter_by_keyword(&questions, &keyword).collect(),
        (None, None) => anyhow::bail!("either --keyword or --kind is required"),
    };

    if matches.is_empty() {
        println!("No matching questions.");
    } else {
        print_questions(matches.into_iter());
    }
    Ok(())
}

pub fn show(config: &GiftbankConfig, bank: Option<PathBuf>, title: &str) -> Result<()> {
    let questions = load_bank(config, bank)?;
    let question = questions
        .iter()
        .find(|q| q.title == title)
        .with_context(|| format!("no question titled '{title}'"))?;

    println!("{}", question.raw_block);
    Ok(())
}

/// Questions whose text contains `keyword`, ignoring case.
pub fn filter_by_keyword<'a>(
    questions: &'a [Question],
    keyword: &str,
) -> impl Iterator<Item = (usize, &'a Question)> {
    let keyword = keyword.to_lowercase();
    questions
        .iter()
        .enumerate()
        .filter(move |(_, q)| q.prompt.to_lowercase().contains(&keyword))
}

pub fn filter_by_kind(
    questions: &[Question],
    kind: QuestionKind,
) -> impl Iterator<Item = (usize, &Question)> {
    questions
        .iter()
        .enumerate()
        .filter(move |(_, q)| q.kind == kind)
}

fn print_questions<'a>(rows: impl Iterator<Item = (usize, &'a Question)>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Title", "Kind"]);

    let mut count = 0;
    for (idx, question) in rows {
        table.add_row(vec![
            (idx + 1).to_string(),
            question.title.clone(),
            question.kind.to_string(),
        ]);
        count += 1;
    }

    println!("{table}");
    println!("{count} question(s)");
}
