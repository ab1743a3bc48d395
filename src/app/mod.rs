use crate::catalog::Catalog;
use crate::interactives::ActiveGame;
use crate::model::AppState;
use crate::player::LessonPlayer;
use crate::progress::level::LevelCurve;
use crate::progress::{ProgressStore, storage};
use eframe::egui;
use egui_commonmark::CommonMarkCache;
use log::info;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{LessonRow, TierInfo, TopicInfo};

/// Contenedor de la aplicación. Todo el estado vive aquí y se inyecta
/// en las vistas; no hay globales.
pub struct AcademyApp {
    pub catalog: Catalog,
    pub store: ProgressStore,
    pub state: AppState,
    pub player: Option<LessonPlayer>,
    pub active_game: Option<ActiveGame>,
    pub message: String,
    pub confirm_reset: bool,
    pub profile_open: bool,
    pub cm_cache: CommonMarkCache,
    /// Instante (reloj de egui) en que se mostró la XP reciente.
    pub xp_notice_since: Option<f64>,
    /// Instante en que se detectó el nivel máximo sin modal visto.
    pub completion_modal_since: Option<f64>,
}

impl AcademyApp {
    pub fn new(catalog: Catalog, store: ProgressStore) -> Self {
        Self {
            catalog,
            store,
            state: AppState::Library,
            player: None,
            active_game: None,
            message: String::new(),
            confirm_reset: false,
            profile_open: false,
            cm_cache: CommonMarkCache::default(),
            xp_notice_since: None,
            completion_modal_since: None,
        }
    }

    /// Arranque real: recupera el progreso guardado (si lo hay) y lo ajusta
    /// a la curva del catálogo actual.
    pub fn from_creation_context(cc: &eframe::CreationContext<'_>, catalog: Catalog) -> Self {
        let saved = storage::load_state(cc.storage);
        let curve = LevelCurve::new(catalog.total_lessons());
        let store = ProgressStore::from_state(curve, saved);
        info!(
            "Progreso cargado: {} lecciones completadas, {} XP, nivel {}",
            store.completed_lessons().len(),
            store.xp(),
            store.level()
        );

        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::new(catalog, store)
    }
}
