//! The `giftbank profile` command.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};

use giftbank_core::config::GiftbankConfig;
use giftbank_core::profile::analyze;
use giftbank_report::render_histogram;

use super::{exam_name, load_exam};

pub fn execute(config: &GiftbankConfig, exam: &str, format: &str) -> Result<()> {
    let (path, questions) = load_exam(config, exam)?;
    if questions.is_empty() {
        anyhow::bail!("{} is empty or malformed", path.display());
    }

    let profile = analyze(&questions);
    let total = questions.len();

    match format {
        "json" => {
            let json = serde_json::json!({
                "exam": exam_name(&path),
                "total": total,
                "profile": profile,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            println!("Exam: {}", exam_name(&path));
            println!("Total questions: {total}");
            if profile.total() < total {
                println!("Unsupported questions: {}", total - profile.total());
            }

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_header(vec!["Kind", "Count", "Share"]);
            for (kind, count) in profile.iter() {
                table.add_row(vec![
                    kind.label().to_string(),
                    count.to_string(),
                    format!("{:.1}%", profile.share(kind, total)),
                ]);
            }
            println!("{table}");

            println!("\n{}", render_histogram(&profile));
        }
    }

    Ok(())
}
