//! Staging store for the exam being assembled.
//!
//! The draft is rewritten after every change so an interrupted session leaves
//! its selection on disk. A new session starts by clearing the store.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::Question;

/// Where the in-progress exam is kept between mutations.
pub trait StagingStore {
    /// Load the staged questions. A store that was never written is empty.
    fn load(&self) -> Result<Vec<Question>>;

    /// Replace the staged questions.
    fn save(&self, questions: &[Question]) -> Result<()>;

    /// Drop the staged questions.
    fn clear(&self) -> Result<()>;
}

/// Staging store backed by a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonStagingFile {
    path: PathBuf,
}

impl JsonStagingFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StagingStore for JsonStagingFile {
    fn load(&self) -> Result<Vec<Question>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read staging file {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse staging file {}", self.path.display()))
    }

    fn save(&self, questions: &[Question]) -> Result<()> {
        let json =
            serde_json::to_string_pretty(questions).context("failed to serialize staged exam")?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write staging file {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), staged = questions.len(), "staging saved");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).with_context(|| {
                format!("failed to remove staging file {}", self.path.display())
            })?;
            tracing::debug!(path = %self.path.display(), "staging cleared");
        }
        Ok(())
    }
}

/// In-memory staging store.
#[derive(Debug, Default)]
pub struct MemoryStaging {
    questions: RefCell<Vec<Question>>,
}

impl MemoryStaging {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StagingStore for MemoryStaging {
    fn load(&self) -> Result<Vec<Question>> {
        Ok(self.questions.borrow().clone())
    }

    fn save(&self, questions: &[Question]) -> Result<()> {
        *self.questions.borrow_mut() = questions.to_vec();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.questions.borrow_mut().clear();
        Ok(())
    }
}
