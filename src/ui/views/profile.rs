use crate::app::AcademyApp;
use crate::constants::XP_PER_LEVEL;
use crate::ui::layout::percent_bar;
use eframe::egui::{self, RichText};

/// Ventana de perfil: nivel, XP y el botón de borrar progreso.
pub fn ui_profile(app: &mut AcademyApp, ctx: &egui::Context) {
    let mut open = app.profile_open;
    let mut wants_reset = false;
    let (done, total) = app.course_counts();

    egui::Window::new("👤 Perfil")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            let max_level = app.store.curve().max_level();
            ui.label(RichText::new(format!("Nivel {} de {max_level}", app.store.level())).heading());
            if app.store.is_max_level() {
                ui.label(RichText::new("🏆 Nivel máximo alcanzado").strong());
                percent_bar(ui, 100.0, format!("{} XP", app.store.xp()));
            } else {
                let into_level = app.store.xp() % XP_PER_LEVEL;
                percent_bar(
                    ui,
                    app.store.level_progress() as f32,
                    format!("{into_level} / {XP_PER_LEVEL} XP"),
                );
            }
            ui.label(format!("{done} de {total} lecciones completadas"));
            ui.add_space(12.0);
            ui.separator();
            if ui.button("🔄 Borrar progreso").clicked() {
                wants_reset = true;
            }
        });

    app.profile_open = open;
    if wants_reset {
        app.request_reset();
    }
}

/// Modal de fin de curso. Aparece con retraso y solo una vez por progreso.
pub fn ui_completion_modal(app: &mut AcademyApp, ctx: &egui::Context, now: f64) {
    if !app.completion_modal_visible(now) {
        return;
    }
    egui::Window::new("🎓 ¡Curso completado!")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(format!(
                    "Has terminado todas las lecciones y llegado al nivel {}.",
                    app.store.level()
                ));
                ui.label("Ya sabes defenderte en el mundo digital. ¡Enhorabuena!");
                ui.add_space(12.0);
                if ui.button("¡Genial!").clicked() {
                    app.acknowledge_completion_modal();
                }
            });
        });
}
