// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Fallos al cargar o validar el banco de pasajes.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no se pudo leer {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML de pasajes inválido: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("id de pasaje duplicado: {0}")]
    DuplicatePassageId(String),
    #[error("pasaje {passage}: clave de opción duplicada '{key}'")]
    DuplicateOptionKey { passage: String, key: char },
    #[error("pasaje {passage}: la respuesta correcta '{key}' no está entre las opciones")]
    MissingCorrectAnswer { passage: String, key: char },
    #[error("pasaje {0}: no tiene opciones de respuesta")]
    EmptyOptions(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no se pudo leer la configuración {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("configuración inválida: {0}")]
    Parse(#[from] serde_yaml::Error),
}
