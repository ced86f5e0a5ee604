mod fonts;
mod helpers;
pub mod layout;
pub mod views;

use crate::app::DokkaiApp;
use crate::model::Screen;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, notice_window, top_panel};

pub use fonts::install_cjk_font;

impl App for DokkaiApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Cabecera solo fuera del login (como un stack navigator con header)
        if self.current_route().header_shown() {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        match self.screen() {
            Screen::Login => views::login::ui_login(self, ctx),
            Screen::LevelSelect => views::level_select::ui_level_select(self, ctx),
            Screen::Dokkai => views::dokkai::ui_dokkai(self, ctx),
        }

        if self.notice.is_some() {
            notice_window(self, ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
