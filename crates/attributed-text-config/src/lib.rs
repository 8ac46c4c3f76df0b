use std::path::{Path, PathBuf};
use std::time::Duration;

use attributed_text_engine::{
    EditorSettings, LabelSettings, MarkerConfig, ModelRegistry, ScannerError, SnapPolicy,
    StyleSet, TokenScanner,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to read model registry at {registry_path}: {source}")]
    RegistryReadError {
        registry_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse model registry at {registry_path}: {source}")]
    RegistryParseError {
        registry_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid token marker: {0}")]
    Marker(#[from] ScannerError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub caret_snap: SnapPolicy,
    pub feedback_delay_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Model registry used by the command-line host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_path: Option<PathBuf>,
    pub marker: MarkerConfig,
    pub styles: StyleSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            caret_snap: SnapPolicy::default(),
            feedback_delay_ms: 200,
            placeholder: None,
            registry_path: None,
            marker: MarkerConfig::default(),
            styles: StyleSet::default(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the registry path
        config.registry_path = config
            .registry_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/attributed-text");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }

    pub fn scanner(&self) -> Result<TokenScanner, ConfigError> {
        Ok(TokenScanner::new(self.marker.clone())?)
    }

    pub fn editor_settings(&self) -> Result<EditorSettings, ConfigError> {
        Ok(EditorSettings {
            scanner: self.scanner()?,
            styles: self.styles.clone(),
            snap: self.caret_snap,
            placeholder: self.placeholder.clone(),
        })
    }

    pub fn label_settings(&self) -> Result<LabelSettings, ConfigError> {
        Ok(LabelSettings {
            scanner: self.scanner()?,
            styles: self.styles.clone(),
            feedback_delay: self.feedback_delay(),
        })
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

/// Reads a model registry: a TOML file of `[[models]]` tables.
///
/// ```toml
/// [[models]]
/// token = "#\u200Buser:1\u200B"
/// symbol = "@"
/// text = "Alice"
/// image = { id = "avatar-1", width = 24, height = 24 }
/// ```
pub fn load_registry<P: AsRef<Path>>(registry_path: P) -> Result<ModelRegistry, ConfigError> {
    let registry_path = registry_path.as_ref();
    let content = std::fs::read_to_string(registry_path).map_err(|source| {
        ConfigError::RegistryReadError {
            registry_path: registry_path.to_path_buf(),
            source,
        }
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::RegistryParseError {
        registry_path: registry_path.to_path_buf(),
        source,
    })
}
