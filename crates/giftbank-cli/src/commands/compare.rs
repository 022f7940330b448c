//! The `giftbank compare` command.

use std::path::PathBuf;

use anyhow::Result;

use giftbank_core::config::GiftbankConfig;
use giftbank_core::loader::load_lenient;
use giftbank_core::profile::{analyze, compare};
use giftbank_core::Question;
use giftbank_report::write_comparison_html;

use super::{exam_name, load_exam};

pub fn execute(
    config: &GiftbankConfig,
    exam: &str,
    references: Vec<PathBuf>,
    chart: Option<PathBuf>,
    format: &str,
) -> Result<()> {
    if references.len() > config.max_references {
        anyhow::bail!(
            "at most {} reference files can be compared, got {}",
            config.max_references,
            references.len()
        );
    }

    let (exam_path, exam_questions) = load_exam(config, exam)?;

    let mut reference_questions: Vec<Question> = Vec::new();
    for path in &references {
        if !path.exists() {
            eprintln!("Warning: reference file '{}' does not exist.", path.display());
            continue;
        }
        reference_questions.extend(load_lenient(path));
    }
    if reference_questions.is_empty() {
        anyhow::bail!("no reference question loaded, check the reference files");
    }

    let name = exam_name(&exam_path);
    let exam_profile = analyze(&exam_questions);
    let reference_profile = analyze(&reference_questions);
    let lines = compare(&exam_profile, &reference_profile);

    let chart_path = chart.unwrap_or_else(|| config.chart_file.clone());
    write_comparison_html(&name, &exam_profile, &reference_profile, &chart_path)?;

    match format {
        "json" => {
            let json = serde_json::json!({
                "exam": name,
                "exam_profile": exam_profile,
                "reference_profile": reference_profile,
                "comparison": lines,
                "chart": chart_path,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            println!("Comparison report for '{name}':");
            for line in &lines {
                println!("  {line}");
            }
            println!("\nChart written to {}", chart_path.display());
        }
    }

    Ok(())
}
