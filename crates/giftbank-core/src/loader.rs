//! Loads question banks and exams from `.gift` files and directories.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::exam::GIFT_EXTENSION;
use crate::model::Question;
use crate::parser::parse_document;

fn is_gift_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == GIFT_EXTENSION)
}

/// Parse a single `.gift` file.
pub fn load_file(path: &Path) -> Result<Vec<Question>> {
    if !is_gift_file(path) {
        anyhow::bail!("not a .{GIFT_EXTENSION} file: {}", path.display());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question file: {}", path.display()))?;

    let questions = parse_document(&content);
    tracing::debug!(path = %path.display(), questions = questions.len(), "loaded question file");
    Ok(questions)
}

/// Every `.gift` file below `dir`, sorted by path.
fn gift_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(gift_files(&path)?);
        } else if is_gift_file(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Recursively load the questions of every `.gift` file in a directory.
///
/// Files that cannot be read are skipped with a warning.
pub fn load_directory(dir: &Path) -> Result<Vec<Question>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut questions = Vec::new();
    for path in gift_files(dir)? {
        match load_file(&path) {
            Ok(mut qs) => questions.append(&mut qs),
            Err(e) => tracing::warn!("skipping {}: {:#}", path.display(), e),
        }
    }
    Ok(questions)
}

/// Load a file or a directory, whichever `path` is.
pub fn load_path(path: &Path) -> Result<Vec<Question>> {
    if path.is_dir() {
        load_directory(path)
    } else {
        load_file(path)
    }
}

/// Like [`load_path`], but failures become an empty collection.
pub fn load_lenient(path: &Path) -> Vec<Question> {
    load_path(path).unwrap_or_else(|e| {
        tracing::warn!("could not load questions from {}: {:#}", path.display(), e);
        Vec::new()
    })
}

/// A saved exam.
#[derive(Debug, Clone, Serialize)]
pub struct NamedExam {
    /// File stem, e.g. `midterm` for `midterm.gift`.
    pub name: String,
    pub path: PathBuf,
    pub questions: Vec<Question>,
}

/// List the exams saved in `dir`, sorted by name.
pub fn list_exams(dir: &Path) -> Result<Vec<NamedExam>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut exams = Vec::new();
    for path in gift_files(dir)? {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        match load_file(&path) {
            Ok(questions) => exams.push(NamedExam {
                name,
                path,
                questions,
            }),
            Err(e) => tracing::warn!("skipping exam {}: {:#}", path.display(), e),
        }
    }

    exams.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(exams)
}
