use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Niveles JLPT, del más fácil al más difícil.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Level {
    N5,
    N4,
    N3,
    N2,
    N1,
}

impl Level {
    /// Orden en el que se muestran en el selector de nivel
    pub const ALL: [Level; 5] = [Level::N5, Level::N4, Level::N3, Level::N2, Level::N1];

    pub fn code(self) -> &'static str {
        match self {
            Level::N5 => "N5",
            Level::N4 => "N4",
            Level::N3 => "N3",
            Level::N2 => "N2",
            Level::N1 => "N1",
        }
    }

    pub fn label(self) -> String {
        format!("JLPT {}", self.code())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("nivel JLPT desconocido `{0}`")]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLevel(s.to_owned()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub key: char,
    pub text: String,
}

/// Un pasaje de lectura con su pregunta de opción múltiple.
///
/// Se crea al cargar el banco de pasajes y nunca se modifica después.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PassageRecord {
    pub id: String,
    pub original_text: String,
    pub translated_text: String,
    pub question: String,
    pub answer_options: Vec<AnswerOption>,
    pub correct_answer_key: char,
    pub explanation: String,
}

impl PassageRecord {
    pub fn has_option(&self, key: char) -> bool {
        self.answer_options.iter().any(|o| o.key == key)
    }

    pub fn option_text(&self, key: char) -> Option<&str> {
        self.answer_options
            .iter()
            .find(|o| o.key == key)
            .map(|o| o.text.as_str())
    }

    pub fn correct_answer_text(&self) -> Option<&str> {
        self.option_text(self.correct_answer_key)
    }

    pub fn is_correct(&self, key: char) -> bool {
        key == self.correct_answer_key
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    LevelSelect,
    Dokkai,
}
