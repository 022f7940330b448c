//! The `giftbank validate` command.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use giftbank_core::exam::GIFT_EXTENSION;
use giftbank_core::parser::inspect_document;

pub fn execute(path: &Path) -> Result<()> {
    let files = gift_files(path)?;
    if files.is_empty() {
        anyhow::bail!("no .{GIFT_EXTENSION} file found in {}", path.display());
    }

    let mut total_warnings = 0;

    for file in &files {
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let report = inspect_document(&content);
        println!(
            "{}: {} question(s)",
            file.display(),
            report.questions.len()
        );

        let mut warnings = Vec::new();
        for block in &report.malformed_blocks {
            warnings.push(format!("block {block} is malformed"));
        }
        for question in report.unsupported() {
            warnings.push(format!("[{}] unsupported question kind", question.title));
        }
        let mut seen = HashSet::new();
        for question in &report.questions {
            if !seen.insert(question.title.as_str()) {
                warnings.push(format!("[{}] duplicate title", question.title));
            }
        }

        for w in &warnings {
            println!("  WARNING: {w}");
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All question files valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}

fn gift_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        anyhow::bail!("no such file or directory: {}", path.display());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(path)
        .with_context(|| format!("failed to read directory {}", path.display()))?
    {
        let entry = entry?.path();
        if entry.is_dir() {
            files.extend(gift_files(&entry)?);
        } else if entry.extension().is_some_and(|ext| ext == GIFT_EXTENSION) {
            files.push(entry);
        }
    }
    files.sort();
    Ok(files)
}
