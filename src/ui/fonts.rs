// src/ui/fonts.rs
// Las fuentes por defecto de egui no traen kana ni kanji.

use egui::{Context, FontData, FontDefinitions, FontFamily};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const SYSTEM_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
];

fn find_font(preferred: Option<&Path>) -> Option<PathBuf> {
    preferred
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_CANDIDATES.iter().map(PathBuf::from))
        .find(|p| p.is_file())
}

/// Añade una fuente CJK como respaldo de las familias proporcional y monoespaciada.
/// Devuelve `false` si no se encontró ninguna.
pub fn install_cjk_font(ctx: &Context, preferred: Option<&Path>) -> bool {
    let Some(path) = find_font(preferred) else {
        warn!("sin fuente CJK: el texto japonés no se verá bien");
        return false;
    };
    let bytes = match std::fs::read(&path) {
        Ok(b) => b,
        Err(e) => {
            warn!("no se pudo leer {}: {e}", path.display());
            return false;
        }
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".to_owned(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push("cjk".to_owned());
    }
    ctx.set_fonts(fonts);
    info!("fuente CJK: {}", path.display());
    true
}
