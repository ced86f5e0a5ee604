// src/view_models.rs

use crate::model::{Level, PassageRecord};

/// Estado de un pasaje dentro de la sesión
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassagePhase {
    Fresh,
    Answered,
    SubmittedCorrect,
    SubmittedIncorrect,
}

impl PassagePhase {
    pub fn is_submitted(self) -> bool {
        matches!(self, PassagePhase::SubmittedCorrect | PassagePhase::SubmittedIncorrect)
    }
}

/// Cómo debe pintarse cada opción
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Selected,
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub key: char,
    pub text: String,
    pub selected: bool,
    pub mark: OptionMark,
}

impl OptionView {
    pub fn label(&self) -> String {
        format!("{}. {}", self.key, self.text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassageView {
    pub index: usize,
    pub total: usize,
    pub passage: PassageRecord,
    pub phase: PassagePhase,
    pub selected_key: Option<char>,
    pub is_submitted: bool,
    /// `None` hasta que se envía la respuesta
    pub is_correct: Option<bool>,
    pub explanation_visible: bool,
    pub translation_visible: bool,
    pub options: Vec<OptionView>,
    pub can_select: bool,
    pub can_submit: bool,
    pub can_translate: bool,
    pub can_go_next: bool,
    pub can_go_previous: bool,
}

impl PassageView {
    pub fn position_label(&self) -> String {
        format!("Passage {} / {}", self.index + 1, self.total)
    }

    pub fn mark_of(&self, key: char) -> Option<OptionMark> {
        self.options.iter().find(|o| o.key == key).map(|o| o.mark)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionDisplay {
    /// El nivel no tiene pasajes
    NoContent,
    Passage(PassageView),
}

/// Foto de solo lectura de una `QuizSession` para la capa de UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub level: Level,
    pub display: SessionDisplay,
}

impl SessionSnapshot {
    pub fn passage(&self) -> Option<&PassageView> {
        match &self.display {
            SessionDisplay::Passage(view) => Some(view),
            SessionDisplay::NoContent => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.display, SessionDisplay::NoContent)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelInfo {
    pub level: Level,
    pub passage_count: usize,
    pub available: bool,
}

impl LevelInfo {
    pub fn label(&self) -> String {
        if self.available {
            format!("{} ({} passages)", self.level.label(), self.passage_count)
        } else {
            format!("{} (coming soon)", self.level.label())
        }
    }
}
