use dokkai_go::app::{DokkaiApp, UiPrefs};
use dokkai_go::config::AppConfig;
use dokkai_go::data::PassageCollection;
use dokkai_go::ui::install_cjk_font;
use log::{info, warn};

fn load_config() -> AppConfig {
    AppConfig::load().unwrap_or_else(|e| {
        warn!("{e}; usando configuración por defecto");
        AppConfig::default()
    })
}

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = load_config();
    let collection = PassageCollection::load_or_embedded(config.content_path.as_deref());
    info!("{} pasajes disponibles", collection.total_passages());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size([480.0, 820.0]),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            install_cjk_font(&cc.egui_ctx, config.cjk_font.as_deref());
            let prefs: Option<UiPrefs> = cc
                .storage
                .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));
            let mut app = DokkaiApp::new(collection, config);
            if let Some(prefs) = prefs {
                app = app.with_prefs(prefs);
            }
            Ok(Box::new(app))
        }),
    )
}
