use crate::app::DokkaiApp;
use crate::ui::helpers::option_button;
use crate::ui::layout::two_button_row;
use crate::view_models::{PassageView, SessionDisplay};
use egui::{Button, CentralPanel, Color32, Context, RichText, ScrollArea, Ui};

pub fn ui_dokkai(app: &mut DokkaiApp, ctx: &Context) {
    // Sin sesión no hay nada que pintar (no debería ocurrir en esta ruta)
    let Some(snapshot) = app.snapshot() else {
        return;
    };

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        match &snapshot.display {
            SessionDisplay::NoContent => ui_no_content(ui, &snapshot.level.label()),
            SessionDisplay::Passage(view) => ui_passage(app, ui, view, panel_width),
        }
    });
}

fn ui_no_content(ui: &mut Ui, level_label: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.heading("No passages yet");
        ui.add_space(10.0);
        ui.label(format!("Dokkai for {level_label} is not yet available."));
    });
}

fn ui_passage(app: &mut DokkaiApp, ui: &mut Ui, view: &PassageView, panel_width: f32) {
    let passage = &view.passage;
    let buttons_h = 64.0;

    ui.vertical_centered(|ui| {
        ui.set_width(panel_width);
        ui.label(RichText::new(view.position_label()).small());

        // Texto + opciones con scroll; los botones quedan fijos abajo
        ScrollArea::vertical()
            .max_height((ui.available_height() - buttons_h).max(120.0))
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.label(RichText::new(&passage.original_text).size(18.0));

                if view.translation_visible {
                    ui.add_space(20.0);
                    ui.separator();
                    ui.label(
                        RichText::new("Translation:")
                            .strong()
                            .color(Color32::from_rgb(0x00, 0x7B, 0xFF)),
                    );
                    ui.label(RichText::new(&passage.translated_text).italics());
                }

                ui.add_space(20.0);
                ui.separator();
                ui.label(RichText::new(&passage.question).strong().size(18.0));
                ui.add_space(10.0);
                ui.label(RichText::new("Choose your answer:").strong());
                ui.add_space(10.0);

                for option in &view.options {
                    if option_button(ui, option, panel_width, view.can_select) {
                        app.choose_answer(option.key);
                    }
                    ui.add_space(8.0);
                }

                if view.explanation_visible {
                    ui.add_space(20.0);
                    egui::Frame::default()
                        .fill(Color32::from_rgb(0xff, 0xf9, 0xc4))
                        .inner_margin(egui::Margin::symmetric(16, 16))
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new("Explanation:")
                                    .strong()
                                    .color(Color32::from_rgb(0xfb, 0xc0, 0x2d)),
                            );
                            ui.label(RichText::new(&passage.explanation).color(Color32::DARK_GRAY));
                            if let Some(text) = passage.correct_answer_text() {
                                ui.label(
                                    RichText::new(format!(
                                        "Correct Answer: {}. {text}",
                                        passage.correct_answer_key
                                    ))
                                    .strong()
                                    .color(Color32::from_rgb(0x1b, 0x5e, 0x20)),
                                );
                            }
                        });
                }
            });

        ui.add_space(8.0);
        let translate = Button::new(RichText::new("Translate").strong().color(Color32::WHITE))
            .fill(Color32::from_rgb(0x00, 0x7B, 0xFF));
        let submit_fill = if view.can_submit {
            Color32::from_rgb(0x28, 0xA7, 0x45)
        } else {
            Color32::from_rgb(0xA9, 0xA9, 0xA9)
        };
        let submit = Button::new(RichText::new("Submit").strong().color(Color32::WHITE))
            .fill(submit_fill);

        let (clicked_translate, clicked_submit) = two_button_row(
            ui,
            panel_width,
            translate,
            view.can_translate,
            submit,
            view.can_submit,
        );
        if clicked_translate {
            app.translate();
        }
        if clicked_submit {
            app.submit_answer();
        }
    });
}
