//! The `giftbank exams` command.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};

use giftbank_core::config::GiftbankConfig;
use giftbank_core::loader::list_exams;

pub fn execute(config: &GiftbankConfig) -> Result<()> {
    let exams = list_exams(&config.exams_dir)?;

    if exams.is_empty() {
        println!(
            "No exams found in {}. Run `giftbank assemble` to create one.",
            config.exams_dir.display()
        );
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Exam", "Questions", "Path"]);
    for exam in &exams {
        table.add_row(vec![
            exam.name.clone(),
            exam.questions.len().to_string(),
            exam.path.display().to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}
