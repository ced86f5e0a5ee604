use super::*;

impl DokkaiApp {
    pub fn level_infos(&self) -> Vec<LevelInfo> {
        Level::ALL
            .into_iter()
            .map(|level| {
                let passage_count = self.collection.passage_count(level);
                LevelInfo {
                    level,
                    passage_count,
                    available: passage_count > 0,
                }
            })
            .collect()
    }

    /// Foto de la sesión activa, si estamos en la pantalla de lectura
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.session.as_ref().map(QuizSession::snapshot)
    }
}
