use crate::app::AcademyApp;
use crate::gating::NodeStatus;
use crate::ui::helpers::status_color;
use crate::ui::layout::simple_panel;
use eframe::egui::{self, RichText};

pub fn ui_skill_tree(app: &mut AcademyApp, ctx: &egui::Context) {
    let tiers = app.tier_infos();

    simple_panel(ctx, 640.0, |ui| {
        ui.heading("🌳 Árbol de habilidades");
        ui.label("Completa una lección de un nivel para abrir el siguiente.");
        ui.add_space(12.0);

        let mut open: Option<String> = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            for tier in &tiers {
                ui.label(RichText::new(tier.label()).heading());
                ui.horizontal_wrapped(|ui| {
                    for node in &tier.nodes {
                        let mut text = RichText::new(node.label()).color(status_color(node.status));
                        if tier.recommended.as_deref() == Some(node.topic_id.as_str()) {
                            text = text.strong();
                        }
                        let enabled = node.status != NodeStatus::Locked;
                        let resp = ui.add_enabled(
                            enabled,
                            egui::Button::new(text).min_size(egui::vec2(180.0, 48.0)),
                        );
                        if resp.clicked() {
                            open = Some(node.topic_id.clone());
                        }
                    }
                });
                if !tier.unlocked {
                    ui.label(RichText::new("Completa una lección del nivel anterior").weak());
                }
                ui.add_space(16.0);
            }
        });

        if let Some(id) = open {
            app.open_topic(&id);
        }
    });
}
