use crate::app::AcademyApp;
use crate::ui::helpers::{big_list_button, message_line};
use crate::ui::layout::{percent_bar, simple_panel};
use eframe::egui;

pub fn ui_library(app: &mut AcademyApp, ctx: &egui::Context) {
    simple_panel(ctx, 680.0, |ui| {
        ui.heading("📚 Biblioteca");
        ui.label("Elige un tema y empieza por la primera lección.");

        let (done, total) = app.course_counts();
        percent_bar(
            ui,
            if total == 0 { 0.0 } else { 100.0 * done as f32 / total as f32 },
            format!("{done} de {total} lecciones"),
        );

        if let Some(topic) = app.recommended_topic() {
            let id = topic.id.clone();
            let label = format!("▶ Continuar con «{}»", topic.title);
            ui.add_space(8.0);
            if ui.button(label).clicked() {
                app.open_topic(&id);
            }
        }
        message_line(ui, &app.message);
        ui.add_space(12.0);

        let mut open: Option<String> = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            let width = ui.available_width();
            for info in app.topic_infos() {
                ui.group(|ui| {
                    ui.set_width(width - 12.0);
                    ui.horizontal(|ui| {
                        if big_list_button(ui, info.label(), 260.0, 32.0, true) {
                            open = Some(info.id.clone());
                        }
                        ui.label(egui::RichText::new(info.difficulty.label()).small());
                    });
                    ui.label(&info.description);
                    if info.lesson_count > 0 {
                        percent_bar(ui, info.progress as f32, format!("{}%", info.progress));
                    } else {
                        ui.label(egui::RichText::new("Contenido en preparación").weak());
                    }
                });
                ui.add_space(6.0);
            }
        });

        if let Some(id) = open {
            app.open_topic(&id);
        }
    });
}
