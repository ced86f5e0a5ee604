// src/session.rs

use crate::data::ContentSource;
use crate::model::{Level, PassageRecord};
use crate::view_models::{
    OptionMark, OptionView, PassagePhase, PassageView, SessionDisplay, SessionSnapshot,
};
use log::{debug, info, warn};
use std::fmt;
use std::sync::Arc;

/// Condiciones que la sesión comunica a la UI. No son errores: el estado queda intacto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    NoAnswerSelected,
    AlreadySubmitted,
    EndOfContent,
    StartOfContent,
    NoContentForLevel,
    UnknownOption(char),
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::NoAnswerSelected => f.write_str("no answer selected"),
            Signal::AlreadySubmitted => f.write_str("answer already submitted"),
            Signal::EndOfContent => f.write_str("already at the last passage"),
            Signal::StartOfContent => f.write_str("already at the first passage"),
            Signal::NoContentForLevel => f.write_str("no passages for this level"),
            Signal::UnknownOption(key) => write!(f, "option '{key}' does not exist"),
        }
    }
}

/// Resultado de cada transición: la foto actualizada y, si la hubo, la condición señalada.
#[derive(Clone, Debug)]
pub struct Transition {
    pub snapshot: SessionSnapshot,
    pub signal: Option<Signal>,
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        self.signal.is_none()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct PassageProgress {
    selected: Option<char>,
    // Some(acierto) una vez enviada
    verdict: Option<bool>,
    translation_visible: bool,
}

impl PassageProgress {
    fn phase(&self) -> PassagePhase {
        match (self.selected, self.verdict) {
            (_, Some(true)) => PassagePhase::SubmittedCorrect,
            (_, Some(false)) => PassagePhase::SubmittedIncorrect,
            (Some(_), None) => PassagePhase::Answered,
            (None, None) => PassagePhase::Fresh,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    Empty,
    At {
        index: usize,
        progress: PassageProgress,
    },
}

/// Sesión de lectura de un nivel: un pasaje a la vez, con selección, envío,
/// traducción y navegación anterior/siguiente.
///
/// Toda la información por pasaje vuelve a `Fresh` cada vez que cambia el índice.
#[derive(Clone, Debug)]
pub struct QuizSession {
    level: Level,
    passages: Arc<[PassageRecord]>,
    cursor: Cursor,
}

impl QuizSession {
    pub fn new(level: Level, passages: Arc<[PassageRecord]>) -> Self {
        let cursor = if passages.is_empty() {
            Cursor::Empty
        } else {
            Cursor::At {
                index: 0,
                progress: PassageProgress::default(),
            }
        };
        info!("sesión {level}: {} pasajes", passages.len());
        Self {
            level,
            passages,
            cursor,
        }
    }

    /// Resuelve los pasajes del nivel en la fuente y abre la sesión
    pub fn start(level: Level, source: &impl ContentSource) -> Self {
        Self::new(level, source.get_passages(level))
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn passages(&self) -> &[PassageRecord] {
        &self.passages
    }

    pub fn is_empty(&self) -> bool {
        self.cursor == Cursor::Empty
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.cursor {
            Cursor::At { index, .. } => Some(index),
            Cursor::Empty => None,
        }
    }

    pub fn current_passage(&self) -> Option<&PassageRecord> {
        self.current_index().and_then(|i| self.passages.get(i))
    }

    fn progress(&self) -> Option<&PassageProgress> {
        match &self.cursor {
            Cursor::At { progress, .. } => Some(progress),
            Cursor::Empty => None,
        }
    }

    pub fn phase(&self) -> Option<PassagePhase> {
        self.progress().map(PassageProgress::phase)
    }

    pub fn selected_answer_key(&self) -> Option<char> {
        self.progress().and_then(|p| p.selected)
    }

    pub fn is_submitted(&self) -> bool {
        self.phase().is_some_and(PassagePhase::is_submitted)
    }

    /// La explicación solo se muestra tras un envío incorrecto
    pub fn is_explanation_visible(&self) -> bool {
        self.progress().is_some_and(|p| p.verdict == Some(false))
    }

    pub fn is_translation_visible(&self) -> bool {
        self.progress().is_some_and(|p| p.translation_visible)
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index()
            .is_some_and(|i| i + 1 < self.passages.len())
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index().is_some_and(|i| i > 0)
    }

    // ---------------------------------------------------------------
    // Transiciones
    // ---------------------------------------------------------------

    pub fn select_answer(&mut self, key: char) -> Transition {
        let passages = &self.passages;
        let signal = match &mut self.cursor {
            Cursor::Empty => Some(Signal::NoContentForLevel),
            Cursor::At { progress, .. } if progress.verdict.is_some() => {
                Some(Signal::AlreadySubmitted)
            }
            Cursor::At { index, .. } if !passages[*index].has_option(key) => {
                warn!("opción '{key}' inexistente en {}", passages[*index].id);
                Some(Signal::UnknownOption(key))
            }
            Cursor::At { progress, .. } => {
                progress.selected = Some(key);
                None
            }
        };
        self.finish("select_answer", signal)
    }

    pub fn submit(&mut self) -> Transition {
        let signal = match &mut self.cursor {
            Cursor::Empty => Some(Signal::NoContentForLevel),
            Cursor::At { progress, .. } if progress.verdict.is_some() => {
                Some(Signal::AlreadySubmitted)
            }
            Cursor::At { index, progress } => match progress.selected {
                None => Some(Signal::NoAnswerSelected),
                Some(key) => {
                    let correct = self.passages[*index].is_correct(key);
                    progress.verdict = Some(correct);
                    info!(
                        "{}: respuesta '{key}' {}",
                        self.passages[*index].id,
                        if correct { "correcta" } else { "incorrecta" }
                    );
                    None
                }
            },
        };
        self.finish("submit", signal)
    }

    /// Muestra la traducción del pasaje actual. Repetirla no hace nada.
    pub fn reveal_translation(&mut self) -> Transition {
        let signal = match &mut self.cursor {
            Cursor::Empty => Some(Signal::NoContentForLevel),
            Cursor::At { progress, .. } => {
                progress.translation_visible = true;
                None
            }
        };
        self.finish("reveal_translation", signal)
    }

    pub fn go_to_next(&mut self) -> Transition {
        let len = self.passages.len();
        let signal = match &mut self.cursor {
            Cursor::Empty => Some(Signal::NoContentForLevel),
            Cursor::At { index, .. } if *index + 1 >= len => Some(Signal::EndOfContent),
            Cursor::At { index, progress } => {
                *index += 1;
                *progress = PassageProgress::default();
                None
            }
        };
        self.finish("go_to_next", signal)
    }

    pub fn go_to_previous(&mut self) -> Transition {
        let signal = match &mut self.cursor {
            Cursor::Empty => Some(Signal::NoContentForLevel),
            Cursor::At { index: 0, .. } => Some(Signal::StartOfContent),
            Cursor::At { index, progress } => {
                *index -= 1;
                *progress = PassageProgress::default();
                None
            }
        };
        self.finish("go_to_previous", signal)
    }

    fn finish(&self, action: &str, signal: Option<Signal>) -> Transition {
        match signal {
            Some(s) => debug!("{action}: {s}"),
            None => debug!("{action}: {:?} @ {:?}", self.phase(), self.current_index()),
        }
        Transition {
            snapshot: self.snapshot(),
            signal,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let display = match self.cursor {
            Cursor::Empty => SessionDisplay::NoContent,
            Cursor::At { index, progress } => {
                SessionDisplay::Passage(self.passage_view(index, &progress))
            }
        };
        SessionSnapshot {
            level: self.level,
            display,
        }
    }

    fn passage_view(&self, index: usize, progress: &PassageProgress) -> PassageView {
        let passage = &self.passages[index];
        let phase = progress.phase();
        let submitted = phase.is_submitted();

        let options = passage
            .answer_options
            .iter()
            .map(|o| {
                let selected = progress.selected == Some(o.key);
                let mark = if submitted && passage.is_correct(o.key) {
                    OptionMark::Correct
                } else if submitted && selected {
                    OptionMark::Incorrect
                } else if selected {
                    OptionMark::Selected
                } else {
                    OptionMark::Neutral
                };
                OptionView {
                    key: o.key,
                    text: o.text.clone(),
                    selected,
                    mark,
                }
            })
            .collect();

        PassageView {
            index,
            total: self.passages.len(),
            passage: passage.clone(),
            phase,
            selected_key: progress.selected,
            is_submitted: submitted,
            is_correct: progress.verdict,
            explanation_visible: progress.verdict == Some(false),
            translation_visible: progress.translation_visible,
            options,
            can_select: !submitted,
            can_submit: progress.selected.is_some() && !submitted,
            can_translate: !progress.translation_visible,
            can_go_next: self.can_go_next(),
            can_go_previous: self.can_go_previous(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PassageCollection;
    use crate::model::AnswerOption;

    fn passage(id: &str, correct: char) -> PassageRecord {
        PassageRecord {
            id: id.to_owned(),
            original_text: format!("{id} 本文"),
            translated_text: format!("{id} translation"),
            question: "Q.".to_owned(),
            answer_options: ['A', 'B', 'C', 'D']
                .into_iter()
                .map(|key| AnswerOption {
                    key,
                    text: key.to_string(),
                })
                .collect(),
            correct_answer_key: correct,
            explanation: "why".to_owned(),
        }
    }

    fn session_of(n: usize) -> QuizSession {
        let passages: Vec<_> = (0..n).map(|i| passage(&format!("p{i}"), 'B')).collect();
        QuizSession::new(Level::N5, Arc::from(passages))
    }

    fn assert_fresh(s: &QuizSession) {
        assert_eq!(s.phase(), Some(PassagePhase::Fresh));
        assert_eq!(s.selected_answer_key(), None);
        assert!(!s.is_submitted());
        assert!(!s.is_explanation_visible());
        assert!(!s.is_translation_visible());
    }

    #[test]
    fn starts_fresh_at_first_passage() {
        let s = session_of(3);
        assert_eq!(s.current_index(), Some(0));
        assert_fresh(&s);
        assert!(s.can_go_next());
        assert!(!s.can_go_previous());
    }

    #[test]
    fn reselecting_keeps_only_last_key() {
        let mut s = session_of(1);
        assert!(s.select_answer('A').is_applied());
        let t = s.select_answer('C');
        assert!(t.is_applied());
        assert_eq!(s.selected_answer_key(), Some('C'));
        assert_eq!(s.phase(), Some(PassagePhase::Answered));
        assert!(!s.is_explanation_visible());
        let view = t.snapshot.passage().cloned().unwrap();
        assert_eq!(view.mark_of('C'), Some(OptionMark::Selected));
        assert_eq!(view.mark_of('A'), Some(OptionMark::Neutral));
    }

    #[test]
    fn correct_submission_hides_explanation() {
        let mut s = session_of(1);
        s.select_answer('B');
        let t = s.submit();
        assert!(t.is_applied());
        assert!(s.is_submitted());
        assert!(!s.is_explanation_visible());
        assert_eq!(s.phase(), Some(PassagePhase::SubmittedCorrect));
        let view = t.snapshot.passage().cloned().unwrap();
        assert_eq!(view.is_correct, Some(true));
        assert_eq!(view.mark_of('B'), Some(OptionMark::Correct));
        assert!(!view.can_submit);
        assert!(!view.can_select);
    }

    #[test]
    fn incorrect_submission_shows_explanation_and_marks_options() {
        let mut s = session_of(1);
        s.select_answer('A');
        let t = s.submit();
        assert!(s.is_submitted());
        assert!(s.is_explanation_visible());
        assert_eq!(s.phase(), Some(PassagePhase::SubmittedIncorrect));
        let view = t.snapshot.passage().cloned().unwrap();
        assert_eq!(view.mark_of('A'), Some(OptionMark::Incorrect));
        assert_eq!(view.mark_of('B'), Some(OptionMark::Correct));
        assert_eq!(view.mark_of('C'), Some(OptionMark::Neutral));
        assert!(view.explanation_visible);
    }

    #[test]
    fn submitted_flag_follows_phase() {
        let mut s = session_of(1);
        let fresh = s.snapshot().passage().cloned().unwrap();
        assert!(!fresh.phase.is_submitted());
        assert!(!fresh.is_submitted);

        let answered = s.select_answer('C').snapshot.passage().cloned().unwrap();
        assert_eq!(answered.phase, PassagePhase::Answered);
        assert!(!answered.is_submitted);
        assert!(answered.can_submit);

        let done = s.submit().snapshot.passage().cloned().unwrap();
        assert!(done.phase.is_submitted());
        assert!(done.is_submitted);
        assert_eq!(s.is_submitted(), done.phase.is_submitted());
    }

    #[test]
    fn submit_without_selection_signals_and_stays_fresh() {
        let mut s = session_of(1);
        let t = s.submit();
        assert_eq!(t.signal, Some(Signal::NoAnswerSelected));
        assert_fresh(&s);
    }

    #[test]
    fn submitted_passage_rejects_further_changes() {
        let mut s = session_of(1);
        s.select_answer('A');
        s.submit();
        assert_eq!(s.select_answer('B').signal, Some(Signal::AlreadySubmitted));
        assert_eq!(s.submit().signal, Some(Signal::AlreadySubmitted));
        assert_eq!(s.selected_answer_key(), Some('A'));
        assert_eq!(s.phase(), Some(PassagePhase::SubmittedIncorrect));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut s = session_of(1);
        s.select_answer('A');
        assert_eq!(s.select_answer('Z').signal, Some(Signal::UnknownOption('Z')));
        assert_eq!(s.selected_answer_key(), Some('A'));
    }

    #[test]
    fn translation_is_one_shot_and_allowed_after_submit() {
        let mut s = session_of(1);
        s.select_answer('B');
        s.submit();
        let t = s.reveal_translation();
        assert!(t.is_applied());
        assert!(s.is_translation_visible());
        assert!(!t.snapshot.passage().unwrap().can_translate);
        assert!(s.reveal_translation().is_applied());
        assert!(s.is_translation_visible());
    }

    #[test]
    fn next_then_previous_returns_and_resets() {
        let mut s = session_of(3);
        s.reveal_translation();
        s.select_answer('A');
        s.submit();

        assert!(s.go_to_next().is_applied());
        assert_eq!(s.current_index(), Some(1));
        assert_fresh(&s);

        s.select_answer('C');
        assert!(s.go_to_previous().is_applied());
        assert_eq!(s.current_index(), Some(0));
        assert_fresh(&s);
    }

    #[test]
    fn navigation_stops_at_bounds() {
        let mut s = session_of(2);
        assert_eq!(s.go_to_previous().signal, Some(Signal::StartOfContent));
        assert_eq!(s.current_index(), Some(0));

        s.go_to_next();
        s.select_answer('D');
        let t = s.go_to_next();
        assert_eq!(t.signal, Some(Signal::EndOfContent));
        assert_eq!(s.current_index(), Some(1));
        // el estado del pasaje no se pierde
        assert_eq!(s.selected_answer_key(), Some('D'));
        assert!(!t.snapshot.passage().unwrap().can_go_next);
    }

    #[test]
    fn single_passage_cannot_move() {
        let mut s = session_of(1);
        assert_eq!(s.go_to_next().signal, Some(Signal::EndOfContent));
        assert_eq!(s.go_to_previous().signal, Some(Signal::StartOfContent));
    }

    #[test]
    fn empty_session_signals_no_content_everywhere() {
        let mut s = session_of(0);
        assert!(s.is_empty());
        assert_eq!(s.current_index(), None);
        assert_eq!(s.phase(), None);
        assert!(s.snapshot().is_empty());
        for t in [
            s.go_to_next(),
            s.go_to_previous(),
            s.select_answer('A'),
            s.submit(),
            s.reveal_translation(),
        ] {
            assert_eq!(t.signal, Some(Signal::NoContentForLevel));
        }
        assert!(!s.can_go_next());
        assert!(!s.can_go_previous());
    }

    #[test]
    fn n5_walkthrough_with_embedded_bank() {
        let bank = PassageCollection::embedded().unwrap();
        let mut s = QuizSession::start(Level::N5, &bank);
        assert_eq!(s.passages().len(), 2);
        assert_fresh(&s);

        s.select_answer('A');
        assert_eq!(s.phase(), Some(PassagePhase::Answered));
        assert_eq!(s.selected_answer_key(), Some('A'));

        s.submit();
        assert_eq!(s.phase(), Some(PassagePhase::SubmittedIncorrect));
        assert!(s.is_explanation_visible());

        let t = s.go_to_next();
        assert!(t.is_applied());
        assert_eq!(s.current_index(), Some(1));
        assert_fresh(&s);
        assert_eq!(t.snapshot.passage().unwrap().passage.id, "N5-2");
    }

    #[test]
    fn n4_has_no_content() {
        let bank = PassageCollection::embedded().unwrap();
        assert!(bank.resolve(Level::N4).is_empty());
        let mut s = QuizSession::start(Level::N4, &bank);
        assert_eq!(s.snapshot().display, SessionDisplay::NoContent);
        assert_eq!(s.go_to_next().signal, Some(Signal::NoContentForLevel));
        assert_eq!(s.current_index(), None);
    }
}
