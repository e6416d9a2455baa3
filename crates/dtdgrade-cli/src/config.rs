//! Grader configuration file support.
//!
//! Defaults live in `dtdgrade.toml`; command-line flags override file
//! values, file values override built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use dtdgrade_core::model::{default_num_exercises, SubmissionLayout};

/// Top-level dtdgrade configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraderConfig {
    /// Exercises per student.
    #[serde(default = "default_num_exercises")]
    pub num_exos: u32,
    /// How submissions are stored in the homework directory.
    #[serde(default = "default_layout")]
    pub layout: SubmissionLayout,
    /// Output directory for grade sheets.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_layout() -> SubmissionLayout {
    SubmissionLayout::Auto
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./evaluation")
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            num_exos: default_num_exercises(),
            layout: default_layout(),
            output_dir: default_output_dir(),
        }
    }
}

/// Load config from an explicit path, or `dtdgrade.toml` in the working
/// directory when present, or the built-in defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<GraderConfig> {
    let config_path = match path {
        Some(p) => {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                anyhow::bail!("config file not found: {}", p.display());
            }
        }
        None => {
            let local = PathBuf::from("dtdgrade.toml");
            local.exists().then_some(local)
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<GraderConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(GraderConfig::default()),
    }
}
