use crate::app::AcademyApp;
use crate::ui::helpers::{big_list_button, message_line};
use crate::ui::layout::{percent_bar, simple_panel};
use eframe::egui;

pub fn ui_topic(app: &mut AcademyApp, ctx: &egui::Context, topic_id: &str) {
    let Some(topic) = app.catalog.topic(topic_id).cloned() else {
        app.open_library();
        return;
    };
    let rows = app.lesson_rows(topic_id);
    let progress = app.store.topic_progress(&app.catalog, topic_id);

    simple_panel(ctx, 640.0, |ui| {
        if ui.button("⬅ Biblioteca").clicked() {
            app.open_library();
            return;
        }
        ui.add_space(6.0);
        ui.heading(format!("{} {}", topic.icon, topic.title));
        ui.label(&topic.description);
        percent_bar(ui, progress as f32, format!("{progress}% completado"));
        message_line(ui, &app.message);
        ui.add_space(12.0);

        if rows.is_empty() {
            ui.label("🚧 Todavía no hay lecciones en este tema. ¡Vuelve pronto!");
            return;
        }

        let mut open: Option<String> = None;
        for row in &rows {
            ui.group(|ui| {
                let clicked = big_list_button(ui, row.label(), 320.0, 32.0, row.unlocked);
                if clicked {
                    open = Some(row.id.clone());
                }
                ui.label(format!("⏱ {}  ·  {}", row.duration, row.description));
            });
            ui.add_space(4.0);
        }

        if let Some(lesson_id) = open {
            app.open_lesson(&topic.id, &lesson_id);
        }
    });
}
