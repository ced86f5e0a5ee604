// src/config.rs

use crate::error::ConfigError;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ruta a un YAML de configuración
pub const CONFIG_ENV: &str = "DOKKAI_CONFIG";
/// Ruta a un banco de pasajes externo; tiene prioridad sobre `content_path`
pub const CONTENT_ENV: &str = "DOKKAI_CONTENT";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub content_path: Option<PathBuf>,
    /// Fuente con glifos japoneses; si falta se prueban rutas del sistema
    pub cjk_font: Option<PathBuf>,
    pub dark_mode: bool,
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            cjk_font: None,
            dark_mode: false,
            window_title: "DokkaiGo".to_owned(),
        }
    }
}

impl AppConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Configuración efectiva: archivo de `DOKKAI_CONFIG` (si hay) y luego `DOKKAI_CONTENT`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let content_path = std::env::var_os(CONTENT_ENV).map(PathBuf::from);
        Self::resolve(config_path.as_deref(), content_path)
    }

    fn resolve(
        config_path: Option<&Path>,
        content_override: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => {
                info!("configuración desde {}", path.display());
                Self::from_path(path)?
            }
            None => Self::default(),
        };
        if let Some(path) = content_override {
            config.content_path = Some(path);
        }
        Ok(config)
    }
}
