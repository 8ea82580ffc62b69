use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory that relative script paths are resolved against
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// Fallback tracing filter when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Whether `save` may replace an existing file
    #[serde(default = "default_overwrite")]
    pub overwrite: bool,
}

fn default_log_filter() -> String {
    "pixmanip=info".to_string()
}

fn default_overwrite() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from the file named by `CONFIG_FILE`, if set.
    pub fn from_env() -> Self {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load(Path::new(&path)),
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a YAML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        base_dir = ?config.base_dir,
                        overwrite = config.overwrite,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve a script path against `base_dir`. Absolute paths pass through.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            log_filter: default_log_filter(),
            overwrite: default_overwrite(),
        }
    }
}
