use super::*;
use crate::session::Transition;
use log::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Info,
    Success,
    Warning,
}

/// Aviso modal para la UI (el equivalente a un `Alert`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub tone: NoticeTone,
}

impl Notice {
    fn new(tone: NoticeTone, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            tone,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Facebook,
    Apple,
}

impl SocialProvider {
    pub const ALL: [SocialProvider; 3] = [
        SocialProvider::Google,
        SocialProvider::Facebook,
        SocialProvider::Apple,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::Facebook => "Facebook",
            SocialProvider::Apple => "Apple ID",
        }
    }

    pub fn button_label(self) -> String {
        format!("Login with {}", self.display_name())
    }
}

impl DokkaiApp {
    // ---------------------------------------------------------------
    // Login (sin autenticación real todavía)
    // ---------------------------------------------------------------

    pub fn login(&mut self) {
        info!("login pulsado (sin autenticación)");
        self.notice = Some(Notice::new(
            NoticeTone::Info,
            "Login Button Pressed",
            "Login functionality will be added here.",
        ));
        self.navigate(Route::LevelSelect);
    }

    pub fn sign_up(&mut self) {
        self.notice = Some(Notice::new(
            NoticeTone::Info,
            "Signup Button Pressed",
            "Signup functionality will be added here.",
        ));
    }

    pub fn social_login(&mut self, provider: SocialProvider) {
        let name = provider.display_name();
        self.notice = Some(Notice::new(
            NoticeTone::Info,
            format!("{name} Login"),
            format!("{name} login functionality will be added here."),
        ));
    }

    // ---------------------------------------------------------------
    // Selección de nivel
    // ---------------------------------------------------------------

    pub fn select_level(&mut self, level: Level) {
        self.notice = None;
        self.navigate(Route::Dokkai { level });
    }

    // ---------------------------------------------------------------
    // Pantalla de lectura
    // ---------------------------------------------------------------

    pub fn choose_answer(&mut self, key: char) {
        let t = self.session.as_mut().map(|s| s.select_answer(key));
        self.apply(t);
    }

    pub fn submit_answer(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let t = session.submit();
        if t.signal.is_none() {
            self.notice = t.snapshot.passage().map(|view| {
                if view.is_correct == Some(true) {
                    Notice::new(NoticeTone::Success, "Correct!", "Your answer is correct!")
                } else {
                    let key = view.selected_key.map(String::from).unwrap_or_default();
                    Notice::new(
                        NoticeTone::Warning,
                        "Incorrect",
                        format!("Your answer \"{key}\" is incorrect."),
                    )
                }
            });
        }
        self.apply(Some(t));
    }

    pub fn translate(&mut self) {
        let t = self.session.as_mut().map(|s| s.reveal_translation());
        self.apply(t);
    }

    pub fn next_passage(&mut self) {
        let t = self.session.as_mut().map(|s| s.go_to_next());
        self.apply_move(t);
    }

    pub fn previous_passage(&mut self) {
        let t = self.session.as_mut().map(|s| s.go_to_previous());
        self.apply_move(t);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn apply_move(&mut self, t: Option<Transition>) {
        // al cambiar de pasaje el aviso anterior ya no aplica
        if t.as_ref().is_some_and(Transition::is_applied) {
            self.notice = None;
        }
        self.apply(t);
    }

    fn apply(&mut self, t: Option<Transition>) {
        let Some(t) = t else {
            debug!("acción ignorada: no hay sesión activa");
            return;
        };
        self.last_signal = t.signal;
        if let Some(signal) = t.signal {
            if let Some(notice) = self.notice_for(signal) {
                self.notice = Some(notice);
            }
        }
    }

    fn notice_for(&self, signal: Signal) -> Option<Notice> {
        let level = self
            .active_level()
            .map(Level::label)
            .unwrap_or_default();
        match signal {
            Signal::NoAnswerSelected => Some(Notice::new(
                NoticeTone::Warning,
                "Submission Failed",
                "Please select an answer before submitting.",
            )),
            Signal::EndOfContent => Some(Notice::new(
                NoticeTone::Info,
                "End of Content",
                format!("You have reached the last passage for {level}."),
            )),
            Signal::StartOfContent => Some(Notice::new(
                NoticeTone::Info,
                "Start of Content",
                "This is the first passage.",
            )),
            Signal::NoContentForLevel => Some(Notice::new(
                NoticeTone::Info,
                "No Content",
                format!("Dokkai for {level} is not yet available."),
            )),
            // se ignoran en silencio
            Signal::AlreadySubmitted | Signal::UnknownOption(_) => None,
        }
    }
}
