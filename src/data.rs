// src/data.rs

use crate::error::ContentError;
use crate::model::{Level, PassageRecord};
use log::{debug, error, info, warn};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

/// YAML embebido con los pasajes de fábrica
const EMBEDDED_PASSAGES: &str = include_str!("data/passages.yaml");

/// Fuente de pasajes de solo lectura.
///
/// Debe ser total: un nivel sin contenido devuelve una secuencia vacía, nunca un error.
pub trait ContentSource {
    fn get_passages(&self, level: Level) -> Arc<[PassageRecord]>;
}

/// Pasajes agrupados por nivel, en el orden en que fueron escritos.
#[derive(Debug, Clone, Default)]
pub struct PassageCollection {
    by_level: HashMap<Level, Arc<[PassageRecord]>>,
}

impl PassageCollection {
    /// Construye y valida la colección a partir de secuencias por nivel
    pub fn from_levels(
        levels: impl IntoIterator<Item = (Level, Vec<PassageRecord>)>,
    ) -> Result<Self, ContentError> {
        let mut by_level: HashMap<Level, Arc<[PassageRecord]>> = HashMap::new();
        let mut seen_ids = HashSet::new();

        for (level, passages) in levels {
            for p in &passages {
                validate_passage(p)?;
                if !seen_ids.insert(p.id.clone()) {
                    return Err(ContentError::DuplicatePassageId(p.id.clone()));
                }
            }
            debug!("nivel {level}: {} pasajes", passages.len());
            by_level.insert(level, Arc::from(passages));
        }

        Ok(Self { by_level })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ContentError> {
        let raw: BTreeMap<Level, Vec<PassageRecord>> = serde_yaml::from_str(yaml)?;
        Self::from_levels(raw)
    }

    /// Carga el banco de pasajes desde el YAML embebido
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_yaml_str(EMBEDDED_PASSAGES)
    }

    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let collection = Self::from_yaml_str(&yaml)?;
        info!("pasajes cargados desde {}", path.display());
        Ok(collection)
    }

    /// Banco externo si hay ruta, si no el embebido.
    /// Un banco inválido no impide arrancar: se cae al embebido y, en último caso, a uno vacío.
    pub fn load_or_embedded(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match Self::from_path(path) {
                Ok(collection) => return collection,
                Err(e) => warn!("{e}; se usan los pasajes embebidos"),
            }
        }
        Self::embedded().unwrap_or_else(|e| {
            error!("pasajes embebidos inválidos: {e}");
            Self::default()
        })
    }

    /// Pasajes del nivel, o secuencia vacía si el nivel no tiene contenido
    pub fn resolve(&self, level: Level) -> Arc<[PassageRecord]> {
        self.by_level
            .get(&level)
            .cloned()
            .unwrap_or_else(|| Arc::from(Vec::new()))
    }

    /// Igual que [`resolve`](Self::resolve) pero con el código textual del nivel ("N5", ...).
    /// Un código desconocido también da una secuencia vacía.
    pub fn resolve_code(&self, code: &str) -> Arc<[PassageRecord]> {
        match code.parse::<Level>() {
            Ok(level) => self.resolve(level),
            Err(_) => Arc::from(Vec::new()),
        }
    }

    pub fn passage_count(&self, level: Level) -> usize {
        self.by_level.get(&level).map_or(0, |p| p.len())
    }

    pub fn total_passages(&self) -> usize {
        self.by_level.values().map(|p| p.len()).sum()
    }
}

impl ContentSource for PassageCollection {
    fn get_passages(&self, level: Level) -> Arc<[PassageRecord]> {
        self.resolve(level)
    }
}

fn validate_passage(p: &PassageRecord) -> Result<(), ContentError> {
    if p.answer_options.is_empty() {
        return Err(ContentError::EmptyOptions(p.id.clone()));
    }
    let mut keys = HashSet::new();
    for option in &p.answer_options {
        if !keys.insert(option.key) {
            return Err(ContentError::DuplicateOptionKey {
                passage: p.id.clone(),
                key: option.key,
            });
        }
    }
    if !keys.contains(&p.correct_answer_key) {
        return Err(ContentError::MissingCorrectAnswer {
            passage: p.id.clone(),
            key: p.correct_answer_key,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TWO_LEVELS: &str = r#"
N5:
  - id: a
    original_text: "テキスト"
    translated_text: "text"
    question: "Q?"
    answer_options:
      - { key: A, text: "one" }
      - { key: B, text: "two" }
    correct_answer_key: A
    explanation: "because"
N4: []
"#;

    #[test]
    fn embedded_bank_has_two_n5_passages_in_order() {
        let bank = PassageCollection::embedded().expect("embedded YAML must parse");
        let n5 = bank.resolve(Level::N5);
        assert_eq!(n5.len(), 2);
        assert_eq!(n5[0].id, "N5-1");
        assert_eq!(n5[1].id, "N5-2");
        assert_eq!(n5[0].correct_answer_key, 'B');
    }

    #[test]
    fn every_embedded_passage_has_its_correct_key_among_options() {
        let bank = PassageCollection::embedded().unwrap();
        for level in Level::ALL {
            for p in bank.resolve(level).iter() {
                assert!(p.has_option(p.correct_answer_key), "{}", p.id);
            }
        }
    }

    #[test]
    fn missing_or_empty_levels_resolve_to_empty() {
        let bank = PassageCollection::from_yaml_str(TWO_LEVELS).unwrap();
        assert!(bank.resolve(Level::N4).is_empty());
        assert!(bank.resolve(Level::N1).is_empty());
        assert!(bank.resolve_code("N9").is_empty());
        assert!(bank.resolve_code("").is_empty());
        assert_eq!(bank.resolve_code("n5").len(), 1);
        assert_eq!(PassageCollection::default().total_passages(), 0);
    }

    #[test]
    fn rejects_correct_key_outside_options() {
        let yaml = TWO_LEVELS.replace("correct_answer_key: A", "correct_answer_key: C");
        let err = PassageCollection::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingCorrectAnswer { key: 'C', .. }
        ));
    }

    #[test]
    fn rejects_duplicate_option_keys() {
        let yaml = TWO_LEVELS.replace("key: B", "key: A");
        let err = PassageCollection::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateOptionKey { key: 'A', .. }));
    }

    #[test]
    fn rejects_duplicate_ids_across_levels() {
        let p = PassageCollection::from_yaml_str(TWO_LEVELS)
            .unwrap()
            .resolve(Level::N5)[0]
            .clone();
        let err = PassageCollection::from_levels([
            (Level::N5, vec![p.clone()]),
            (Level::N3, vec![p]),
        ])
        .unwrap_err();
        assert!(matches!(err, ContentError::DuplicatePassageId(id) if id == "a"));
    }

    #[test]
    fn rejects_passage_without_options() {
        let mut p = PassageCollection::from_yaml_str(TWO_LEVELS)
            .unwrap()
            .resolve(Level::N5)[0]
            .clone();
        p.answer_options.clear();
        let err = PassageCollection::from_levels([(Level::N5, vec![p])]).unwrap_err();
        assert!(matches!(err, ContentError::EmptyOptions(_)));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = PassageCollection::from_yaml_str("N5: [ {id: 1").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn loads_external_bank_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("passages.yaml");
        std::fs::write(&path, TWO_LEVELS).unwrap();

        let bank = PassageCollection::from_path(&path).unwrap();
        let n5 = bank.resolve(Level::N5);
        assert_eq!(n5.len(), 1);
        assert_eq!(n5[0].id, "a");
        assert_eq!(n5[0].option_text('B'), Some("two"));
        assert!(bank.resolve(Level::N4).is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.yaml");
        let err = PassageCollection::from_path(&path).unwrap_err();
        assert!(matches!(err, ContentError::Io { path: p, .. } if p == path));
    }

    #[test]
    fn external_bank_wins_when_valid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("passages.yaml");
        std::fs::write(&path, TWO_LEVELS).unwrap();

        let bank = PassageCollection::load_or_embedded(Some(&path));
        assert_eq!(bank.total_passages(), 1);
        assert_eq!(bank.resolve(Level::N5)[0].id, "a");
    }

    #[test]
    fn invalid_or_missing_external_bank_falls_back_to_embedded() {
        let temp_dir = TempDir::new().unwrap();
        let broken = temp_dir.path().join("broken.yaml");
        std::fs::write(&broken, "N5: [ {id: 1").unwrap();
        let missing = temp_dir.path().join("missing.yaml");

        for path in [Some(broken.as_path()), Some(missing.as_path()), None] {
            let bank = PassageCollection::load_or_embedded(path);
            let n5 = bank.resolve(Level::N5);
            assert_eq!(n5.len(), 2);
            assert_eq!(n5[0].id, "N5-1");
        }
    }
}
