use crate::app::{DokkaiApp, LevelInfo};
use crate::ui::helpers::big_list_button;
use egui::{Align, CentralPanel, Context};

pub fn ui_level_select(app: &mut DokkaiApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let button_w = 250.0;
        let button_h = 44.0;

        let infos: Vec<LevelInfo> = app.level_infos();

        let estimated_h = 80.0 + (button_h + 15.0) * infos.len() as f32;
        let vs = ((ui.available_height() - estimated_h) / 2.0).max(0.0);
        ui.add_space(vs);

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("Select JLPT Level");
            ui.add_space(30.0);

            for info in &infos {
                // los niveles sin pasajes también se abren: muestran el estado vacío
                if big_list_button(ui, info.label(), button_w, button_h) {
                    app.select_level(info.level);
                    return;
                }
                ui.add_space(15.0);
            }
        });
    });
}
