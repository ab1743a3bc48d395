#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use cyber_academy::AcademyApp;
use cyber_academy::constants::APP_TITLE;
use cyber_academy::data::read_catalog_embedded;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let catalog = match read_catalog_embedded() {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("Catálogo inválido: {err}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(AcademyApp::from_creation_context(cc, catalog)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    wasm_bindgen_futures::spawn_local(async {
        let catalog = match read_catalog_embedded() {
            Ok(catalog) => catalog,
            Err(err) => {
                log::error!("Catálogo inválido: {err}");
                return;
            }
        };

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No hay documento web");
            return;
        };
        let canvas = match document
            .get_element_by_id("the_canvas_id")
            .map(|el| el.dyn_into::<web_sys::HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            _ => {
                log::error!("No se encontró el canvas 'the_canvas_id'");
                return;
            }
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(Box::new(AcademyApp::from_creation_context(cc, catalog)))),
            )
            .await;
        if let Err(err) = result {
            log::error!("No se pudo arrancar la app: {err:?}");
        }
    });
}
