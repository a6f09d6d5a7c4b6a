//! Configuration loader with multi-source merging

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Backend-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the support backend; the ask endpoint lives at
    /// `{base_url}/ask`.
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/api".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// REPL-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show a spinner while a dispatch is outstanding
    pub show_progress: bool,
    /// Path to the readline history file
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Transcript-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Path to a JSONL transcript file; unset disables transcript logging
    pub path: Option<String>,
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend settings
    pub backend: BackendConfig,
    /// REPL settings
    pub repl: ReplConfig,
    /// Transcript settings
    pub transcript: TranscriptConfig,
}

/// Configuration loader that merges multiple sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./helpdesk.toml` or `./.helpdesk.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/helpdesk-pilot/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<AppConfig, figment::Error> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            figment = figment.merge(Toml::file(&global_path));
        }

        for filename in &["helpdesk.toml", ".helpdesk.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract()
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> AppConfig {
        AppConfig::default()
    }

    /// Get the global config file path, if it exists
    pub fn global_config_path() -> Option<PathBuf> {
        let path = dirs::config_dir()?.join("helpdesk-pilot").join("config.toml");
        path.exists().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.backend.timeout_seconds, 30);
        assert!(config.repl.show_progress);
        assert!(config.repl.history_file.is_none());
        assert!(config.transcript.path.is_none());
    }

    #[test]
    fn test_partial_toml_overrides_defaults() {
        let config: AppConfig = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::string(
                r#"
                [backend]
                base_url = "https://support.example.com/api"
                "#,
            ))
            .extract()
            .unwrap();

        assert_eq!(config.backend.base_url, "https://support.example.com/api");
        // Untouched sections keep their defaults
        assert_eq!(config.backend.timeout_seconds, 30);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_explicit_file_wins_over_project_file() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("helpdesk.toml");
        let explicit = dir.path().join("override.toml");
        std::fs::write(&project, "[backend]\ntimeout_seconds = 10\n").unwrap();
        std::fs::write(&explicit, "[backend]\ntimeout_seconds = 5\n").unwrap();

        let config: AppConfig = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(&project))
            .merge(Toml::file(&explicit))
            .extract()
            .unwrap();

        assert_eq!(config.backend.timeout_seconds, 5);
    }

    #[test]
    fn test_transcript_section() {
        let config: AppConfig = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::string(
                r#"
                [transcript]
                path = "transcripts/session.jsonl"
                "#,
            ))
            .extract()
            .unwrap();

        assert_eq!(
            config.transcript.path.as_deref(),
            Some("transcripts/session.jsonl")
        );
    }
}
