use crate::app::AcademyApp;
use crate::model::AppState;
use egui::{Button, CentralPanel, Context, Frame, ProgressBar, RichText, Ui, Visuals};

pub fn top_panel(app: &mut AcademyApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new(format!("🛡 {}", crate::constants::APP_TITLE)).strong());
            ui.separator();

            let in_library = matches!(app.state, AppState::Library);
            if ui.add_enabled(!in_library, Button::new("📚 Biblioteca")).clicked() {
                app.open_library();
            }
            let in_tree = matches!(app.state, AppState::SkillTree);
            if ui.add_enabled(!in_tree, Button::new("🌳 Árbol de habilidades")).clicked() {
                app.open_skill_tree();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let badge = format!("Nivel {} · {} XP", app.store.level(), app.store.xp());
                if ui.button(badge).on_hover_text("Ver perfil").clicked() {
                    app.profile_open = true;
                }
                if let Some(gain) = app.xp_notice() {
                    ui.label(
                        RichText::new(format!("+{gain} XP"))
                            .strong()
                            .color(egui::Color32::from_rgb(250, 204, 21)),
                    );
                }
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel con un ancho de contenido máximo, centrado en horizontal.
pub fn simple_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let w = ui.available_width().min(max_width);
        let side = ((ui.available_width() - w) / 2.0).max(0.0);
        ui.horizontal_top(|ui| {
            ui.add_space(side);
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(w);
                    ui.vertical(|ui| inner(ui));
                });
        });
    });
}

/// Barra de progreso con texto, de 0 a 100.
pub fn percent_bar(ui: &mut Ui, percent: f32, text: impl Into<String>) {
    let fraction = (percent / 100.0).clamp(0.0, 1.0);
    ui.add(ProgressBar::new(fraction).text(text.into()));
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        let size = egui::vec2(btn_w, 36.0);
        clicked_left = ui
            .add_enabled(left.1, Button::new(left.0).min_size(size))
            .clicked();
        clicked_right = ui
            .add_enabled(right.1, Button::new(right.0).min_size(size))
            .clicked();
    });
    (clicked_left, clicked_right)
}
