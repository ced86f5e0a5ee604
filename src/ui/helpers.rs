// src/ui/helpers.rs
use crate::view_models::{OptionMark, OptionView};
use egui::{Button, Color32, RichText, Stroke, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32) -> bool {
    ui.add(Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

fn mark_colors(mark: OptionMark) -> Option<(Color32, Color32, Color32)> {
    // (borde, fondo, texto)
    match mark {
        OptionMark::Neutral => None,
        OptionMark::Selected => Some((
            Color32::from_rgb(0x00, 0x7B, 0xFF),
            Color32::from_rgb(0xe3, 0xf2, 0xfd),
            Color32::from_rgb(0x00, 0x7B, 0xFF),
        )),
        OptionMark::Correct => Some((
            Color32::from_rgb(0x4C, 0xAF, 0x50),
            Color32::from_rgb(0xe8, 0xf5, 0xe9),
            Color32::from_rgb(0x1b, 0x5e, 0x20),
        )),
        OptionMark::Incorrect => Some((
            Color32::from_rgb(0xF4, 0x43, 0x36),
            Color32::from_rgb(0xff, 0xeb, 0xee),
            Color32::from_rgb(0xb7, 0x1c, 0x1c),
        )),
    }
}

/// Botón de opción a ancho completo, coloreado según su marca.
/// Devuelve `true` si se pulsó.
pub fn option_button(ui: &mut Ui, option: &OptionView, width: f32, enabled: bool) -> bool {
    let mut text = RichText::new(option.label()).size(17.0);
    let button = match mark_colors(option.mark) {
        Some((border, fill, fg)) => {
            text = text.strong().color(fg);
            Button::new(text)
                .fill(fill)
                .stroke(Stroke::new(2.0, border))
        }
        None => Button::new(text),
    };
    ui.add_enabled(enabled, button.min_size(Vec2::new(width, 44.0)))
        .clicked()
}
