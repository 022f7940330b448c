//! giftbank configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the configuration file looked up in the current directory.
pub const CONFIG_FILE: &str = "giftbank.toml";

/// Top-level giftbank configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftbankConfig {
    /// Question bank file or directory.
    #[serde(default = "default_questions_dir")]
    pub questions_dir: PathBuf,
    /// Where assembled exams are saved.
    #[serde(default = "default_exams_dir")]
    pub exams_dir: PathBuf,
    /// JSON file holding the exam being assembled.
    #[serde(default = "default_staging_file")]
    pub staging_file: PathBuf,
    /// Default output of the profile comparison chart.
    #[serde(default = "default_chart_file")]
    pub chart_file: PathBuf,
    /// Max number of reference files in a profile comparison.
    #[serde(default = "default_max_references")]
    pub max_references: usize,
}

fn default_questions_dir() -> PathBuf {
    PathBuf::from("./questions")
}
fn default_exams_dir() -> PathBuf {
    PathBuf::from("./exams")
}
fn default_staging_file() -> PathBuf {
    PathBuf::from("./temp_exam.json")
}
fn default_chart_file() -> PathBuf {
    PathBuf::from("./profile_comparison.html")
}
fn default_max_references() -> usize {
    3
}

impl Default for GiftbankConfig {
    fn default() -> Self {
        Self {
            questions_dir: default_questions_dir(),
            exams_dir: default_exams_dir(),
            staging_file: default_staging_file(),
            chart_file: default_chart_file(),
            max_references: default_max_references(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `giftbank.toml` in the current directory
/// 2. `~/.config/giftbank/config.toml`
///
/// Environment variable overrides: `GIFTBANK_QUESTIONS_DIR`,
/// `GIFTBANK_EXAMS_DIR`, `GIFTBANK_STAGING_FILE`.
pub fn load_config_from(path: Option<&Path>) -> Result<GiftbankConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(CONFIG_FILE);
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|home| home.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<GiftbankConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GiftbankConfig::default(),
    };

    apply_env_overrides(&mut config);
    anyhow::ensure!(
        config.max_references >= 1,
        "max_references must be at least 1"
    );
    Ok(config)
}

fn apply_env_overrides(config: &mut GiftbankConfig) {
    if let Ok(dir) = std::env::var("GIFTBANK_QUESTIONS_DIR") {
        config.questions_dir = PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("GIFTBANK_EXAMS_DIR") {
        config.exams_dir = PathBuf::from(dir);
    }
    if let Ok(file) = std::env::var("GIFTBANK_STAGING_FILE") {
        config.staging_file = PathBuf::from(file);
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("giftbank"))
}
