// File: src/config.rs
use crate::core::types::TemplateId;
use crate::error::{GrammarError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "grammar_trainer.json";
pub const CONFIG_ENV_VAR: &str = "GRAMMAR_TRAINER_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// How long a selection stays highlighted.
    pub highlight_clear_ms: u64,
    /// Where the score ledger is saved. `None` keeps scores in memory only.
    pub ledger_path: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins if set.
    pub log_filter: String,
    pub default_template: TemplateId,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            highlight_clear_ms: 1500,
            ledger_path: None,
            log_filter: "info".to_string(),
            default_template: TemplateId::Existential,
        }
    }
}

impl TrainerConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| GrammarError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: TrainerConfig =
            serde_json::from_str(raw).map_err(|e| GrammarError::Config(e.to_string()))?;
        if config.highlight_clear_ms == 0 {
            return Err(GrammarError::Config("highlight_clear_ms must be positive".into()));
        }
        Ok(config)
    }

    /// `$GRAMMAR_TRAINER_CONFIG`, else `./grammar_trainer.json`, else defaults.
    pub fn discover() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn highlight_delay(&self) -> Duration {
        Duration::from_millis(self.highlight_clear_ms)
    }
}

/// Shared by both binaries. Logs go to stderr so stdout stays usable as a
/// protocol channel.
pub fn init_tracing(config: &TrainerConfig) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = TrainerConfig::from_json(r#"{"default_template":"possessive"}"#).unwrap();
        assert_eq!(config.default_template, TemplateId::Possessive);
        assert_eq!(config.highlight_clear_ms, 1500);
        assert!(config.ledger_path.is_none());
    }

    #[test]
    fn zero_delay_is_rejected() {
        assert!(matches!(
            TrainerConfig::from_json(r#"{"highlight_clear_ms":0}"#),
            Err(GrammarError::Config(_))
        ));
    }

    #[test]
    fn bad_json_is_a_config_error() {
        assert!(matches!(TrainerConfig::from_json("{"), Err(GrammarError::Config(_))));
    }

    #[test]
    fn unreadable_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(TrainerConfig::from_file(&missing), Err(GrammarError::Config(_))));
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        std::fs::write(&path, r#"{"ledger_path":"scores.bin","highlight_clear_ms":250}"#).unwrap();
        let config = TrainerConfig::from_file(&path).unwrap();
        assert_eq!(config.ledger_path, Some(PathBuf::from("scores.bin")));
        assert_eq!(config.highlight_delay(), Duration::from_millis(250));
    }
}
