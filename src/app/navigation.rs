use super::*;
use log::info;

/// Rutas de la app con sus parámetros
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    LevelSelect,
    Dokkai { level: Level },
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::LevelSelect => "LevelSelect",
            Route::Dokkai { .. } => "Dokkai",
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Route::Dokkai { level } => vec![("level", level.to_string())],
            _ => Vec::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        match self {
            Route::Login => Screen::Login,
            Route::LevelSelect => Screen::LevelSelect,
            Route::Dokkai { .. } => Screen::Dokkai,
        }
    }

    /// Título de la cabecera
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "DokkaiGo",
            Route::LevelSelect => "Select Level",
            Route::Dokkai { .. } => "Dokkai(読解)",
        }
    }

    pub fn header_shown(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl DokkaiApp {
    /// Apila una ruta. Entrar en `Dokkai` abre una sesión nueva para su nivel.
    pub fn navigate(&mut self, route: Route) {
        info!("navegar a {} {:?}", route.name(), route.params());
        self.history.push(route);
        self.enter_current_route();
    }

    /// Desapila la ruta actual. Devuelve `false` si ya estamos en la raíz.
    pub fn go_back(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        if let Some(left) = self.history.pop() {
            info!("salir de {}", left.name());
        }
        self.enter_current_route();
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    pub fn title(&self) -> &'static str {
        self.current_route().title()
    }

    fn enter_current_route(&mut self) {
        // la sesión anterior se descarta siempre
        self.session = match self.current_route() {
            Route::Dokkai { level } => Some(QuizSession::start(*level, &self.collection)),
            _ => None,
        };
        self.last_signal = None;
    }
}
