use crate::app::{DokkaiApp, NoticeTone};
use crate::model::Screen;
use egui::{Align, Align2, Button, Color32, Context, RichText, Ui, Visuals};

pub fn top_panel(app: &mut DokkaiApp, ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if app.can_go_back() && ui.button("⬅ Back").clicked() {
                app.go_back();
            }

            ui.heading(app.title());

            // NEXT / PREV a la derecha solo en la pantalla de lectura
            if app.screen() == Screen::Dokkai {
                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    let snap = app.snapshot();
                    let view = snap.as_ref().and_then(|s| s.passage());
                    let can_next = view.is_some_and(|v| v.can_go_next);
                    let can_prev = view.is_some_and(|v| v.can_go_previous);

                    let next = ui.add(Button::new(
                        RichText::new("NEXT").strong().color(link_color(can_next)),
                    ));
                    let prev = ui.add(Button::new(
                        RichText::new("PREV").strong().color(link_color(can_prev)),
                    ));
                    if next.clicked() {
                        app.next_passage();
                    }
                    if prev.clicked() {
                        app.previous_passage();
                    }
                });
            }
        });
    });
}

fn link_color(enabled: bool) -> Color32 {
    if enabled {
        Color32::from_rgb(0x00, 0x7B, 0xFF)
    } else {
        Color32::GRAY
    }
}

pub fn bottom_panel(app: &mut DokkaiApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                app.prefs.dark_mode = true;
            }
            if ui.button("☀ Light mode").clicked() {
                app.prefs.dark_mode = false;
            }
        });
    });

    ctx.set_visuals(if app.prefs.dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    });
}

/// Ventana modal con el aviso pendiente; se cierra con OK.
pub fn notice_window(app: &mut DokkaiApp, ctx: &Context) {
    let Some(notice) = app.notice.clone() else {
        return;
    };
    let color = match notice.tone {
        NoticeTone::Info => ctx.style().visuals.text_color(),
        NoticeTone::Success => Color32::from_rgb(0x1b, 0x5e, 0x20),
        NoticeTone::Warning => Color32::from_rgb(0xb7, 0x1c, 0x1c),
    };

    egui::Window::new(RichText::new(&notice.title).color(color).strong())
        .id(egui::Id::new("notice_window"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(&notice.body);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                app.dismiss_notice();
            }
        });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: Button<'_>,
    left_enabled: bool,
    right: Button<'_>,
    right_enabled: bool,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_enabled_ui(left_enabled, |ui| ui.add_sized([btn_w, 40.0], left))
            .inner
            .clicked();
        clicked_right = ui
            .add_enabled_ui(right_enabled, |ui| ui.add_sized([btn_w, 40.0], right))
            .inner
            .clicked();
    });
    (clicked_left, clicked_right)
}
