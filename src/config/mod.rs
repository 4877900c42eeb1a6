use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use fs_err as fs;
use serde::{Deserialize, Serialize};

use crate::cli::Args;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: String,
    pub api_base: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub strict: bool,
    pub copied_feedback_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".into(),
            api_base: "https://generativelanguage.googleapis.com/v1beta".into(),
            api_key_env: "API_KEY".into(),
            strict: false,
            copied_feedback_ms: 2000,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Defaults, then the optional config file, then CLI flags.
    pub fn resolve(args: &Args) -> Result<Self> {
        let mut cfg = match &args.config {
            Some(p) => Self::from_file(Path::new(p))?,
            None => Self::default(),
        };
        if let Some(m) = &args.model {
            cfg.model = m.clone();
        }
        if let Some(b) = &args.api_base {
            cfg.api_base = b.clone();
        }
        if let Some(e) = &args.api_key_env {
            cfg.api_key_env = e.clone();
        }
        if args.strict {
            cfg.strict = true;
        }
        Ok(cfg)
    }

    pub fn copied_feedback(&self) -> Duration {
        Duration::from_millis(self.copied_feedback_ms)
    }
}
