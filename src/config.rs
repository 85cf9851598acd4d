use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::types::DbResult;

pub const CONFIG_FILE: &str = "minisql.json";

/// Settings of the interactive shell, stored as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub prompt: String,
    pub history_file: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directives, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: String::from("minisql> "),
            history_file: None,
            log_filter: String::from("warn"),
        }
    }
}

impl ShellConfig {
    pub fn load_config(path: &Path) -> DbResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults
    pub fn load_or_default(path: &Path) -> DbResult<Self> {
        if path.exists() {
            Self::load_config(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_config(&self, path: &Path) -> DbResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
