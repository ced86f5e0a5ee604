use crate::config::AppConfig;
use crate::data::PassageCollection;
use crate::model::{Level, Screen};
use crate::session::{QuizSession, Signal};
use serde::{Deserialize, Serialize};

// Submódulos
pub mod actions;
pub mod navigation;
pub mod view_models;

pub use actions::{Notice, NoticeTone, SocialProvider};
pub use navigation::Route;

// Re-export de view models
pub use crate::view_models::{LevelInfo, SessionSnapshot};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Preferencias de interfaz que se guardan entre ejecuciones.
/// Los resultados del quiz nunca se guardan.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub dark_mode: bool,
}

pub struct DokkaiApp {
    pub collection: PassageCollection,
    pub config: AppConfig,
    pub prefs: UiPrefs,
    /// Pila de rutas; la primera es siempre `Login`
    pub history: Vec<Route>,
    /// Solo existe mientras la ruta actual es `Dokkai`
    pub session: Option<QuizSession>,
    pub login_form: LoginForm,
    pub notice: Option<Notice>,
    pub last_signal: Option<Signal>,
}

impl DokkaiApp {
    pub fn new(collection: PassageCollection, config: AppConfig) -> Self {
        let prefs = UiPrefs {
            dark_mode: config.dark_mode,
        };
        Self {
            collection,
            config,
            prefs,
            history: vec![Route::Login],
            session: None,
            login_form: LoginForm::default(),
            notice: None,
            last_signal: None,
        }
    }

    pub fn with_prefs(mut self, prefs: UiPrefs) -> Self {
        self.prefs = prefs;
        self
    }

    pub fn current_route(&self) -> &Route {
        // la pila nunca queda vacía
        self.history.last().unwrap_or(&Route::Login)
    }

    pub fn screen(&self) -> Screen {
        self.current_route().screen()
    }

    pub fn active_level(&self) -> Option<Level> {
        self.session.as_ref().map(QuizSession::level)
    }
}
