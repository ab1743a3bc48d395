use crate::app::AcademyApp;
use crate::interactives::InteractiveVariant;
use crate::model::Slide;
use crate::ui::layout::{percent_bar, simple_panel, two_button_row};
use crate::ui::views::interactive::ui_interactive;
use eframe::egui::{self, RichText};
use egui_commonmark::CommonMarkViewer;

pub fn ui_lesson(app: &mut AcademyApp, ctx: &egui::Context) {
    let Some(player) = app.player.as_ref() else {
        app.open_library();
        return;
    };
    let title = app
        .current_lesson()
        .map(|l| l.title.clone())
        .unwrap_or_default();
    let percent = player.progress_percent();
    let index = player.current_index();
    let len = player.len();
    let can_go_previous = player.can_go_previous();
    let slide = player.current_slide().cloned();

    simple_panel(ctx, 720.0, |ui| {
        ui.horizontal(|ui| {
            if ui.button("✖ Cerrar").clicked() {
                app.close_lesson();
            }
            ui.heading(&title);
        });
        if len > 0 {
            percent_bar(ui, percent, format!("{} / {}", index + 1, len));
        }
        ui.add_space(12.0);

        let Some(slide) = slide else {
            ui_not_ready(app, ui);
            return;
        };

        ui.label(RichText::new(slide.title()).heading().strong());
        ui.add_space(8.0);

        let width = ui.available_width();
        match &slide {
            Slide::Interactive { variant, .. } => {
                ui.label(slide.display_content());
                ui.add_space(8.0);
                if InteractiveVariant::from_key(variant).is_some() {
                    ui_interactive(app, ui, can_go_previous);
                } else {
                    ui_unknown_variant(app, ui, variant, can_go_previous);
                }
            }
            Slide::Outtro { .. } => {
                CommonMarkViewer::new().show(ui, &mut app.cm_cache, &slide.display_content());
                ui.add_space(16.0);
                let (back, finish) =
                    two_button_row(ui, width, ("⬅ Atrás", can_go_previous), ("Volver al tema ✔", true));
                if back {
                    app.previous_slide();
                }
                if finish {
                    app.close_lesson();
                }
            }
            _ => {
                if let Slide::Fact { icon: Some(icon), .. } = &slide {
                    ui.label(RichText::new(icon).size(28.0));
                }
                egui::ScrollArea::vertical()
                    .max_height(360.0)
                    .show(ui, |ui| {
                        CommonMarkViewer::new().show(ui, &mut app.cm_cache, &slide.display_content());
                    });
                ui.add_space(16.0);
                let (back, next) =
                    two_button_row(ui, width, ("⬅ Atrás", can_go_previous), ("Siguiente ➡", true));
                if back {
                    app.previous_slide();
                }
                if next {
                    app.next_slide();
                }
            }
        }
    });
}

fn ui_not_ready(app: &mut AcademyApp, ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("🚧 Contenido en preparación").heading());
        ui.label("Esta lección todavía no tiene diapositivas.");
        ui.add_space(12.0);
        if ui.button("⬅ Volver al tema").clicked() {
            app.close_lesson();
        }
    });
}

fn ui_unknown_variant(app: &mut AcademyApp, ui: &mut egui::Ui, variant: &str, can_go_previous: bool) {
    ui.group(|ui| {
        ui.label(RichText::new(format!("⚠ Variante interactiva desconocida: {variant}")).strong());
        ui.label("Este ejercicio aún no está disponible. Puedes saltarlo sin obtener el crédito del ejercicio.");
    });
    ui.add_space(12.0);
    let width = ui.available_width();
    let (back, skip) = two_button_row(ui, width, ("⬅ Atrás", can_go_previous), ("Saltar ⏭", true));
    if back {
        app.previous_slide();
    }
    if skip {
        app.skip_unknown_variant();
    }
}
