pub mod assemble;
pub mod bank;
pub mod compare;
pub mod contact;
pub mod exams;
pub mod init;
pub mod profile;
pub mod take;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use giftbank_core::config::GiftbankConfig;
use giftbank_core::exam::GIFT_EXTENSION;
use giftbank_core::Question;

/// Load the question bank, from `--bank` or the configured directory.
pub fn load_bank(config: &GiftbankConfig, bank: Option<PathBuf>) -> Result<Vec<Question>> {
    let path = bank.unwrap_or_else(|| config.questions_dir.clone());
    let questions = giftbank_core::loader::load_path(&path)
        .with_context(|| format!("failed to load question bank {}", path.display()))?;
    tracing::debug!(path = %path.display(), questions = questions.len(), "question bank loaded");
    Ok(questions)
}

/// Turn an exam argument into a file path.
///
/// An existing path is used as is; otherwise the argument names an exam in
/// `exams_dir`, with or without its extension.
pub fn resolve_exam(config: &GiftbankConfig, exam: &str) -> PathBuf {
    let direct = Path::new(exam);
    if direct.exists() {
        return direct.to_path_buf();
    }

    let file = if direct.extension().is_some_and(|ext| ext == GIFT_EXTENSION) {
        exam.to_string()
    } else {
        format!("{exam}.{GIFT_EXTENSION}")
    };
    config.exams_dir.join(file)
}

/// Load the questions of an exam.
pub fn load_exam(config: &GiftbankConfig, exam: &str) -> Result<(PathBuf, Vec<Question>)> {
    let path = resolve_exam(config, exam);
    let questions = giftbank_core::loader::load_file(&path)
        .with_context(|| format!("failed to load exam '{exam}'"))?;
    Ok((path, questions))
}

/// Display name of an exam file.
pub fn exam_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
