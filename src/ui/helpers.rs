// src/ui/helpers.rs
use crate::gating::NodeStatus;
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

pub fn status_color(status: NodeStatus) -> Color32 {
    match status {
        NodeStatus::Completed => Color32::from_rgb(52, 211, 153),
        NodeStatus::Active => Color32::from_rgb(96, 165, 250),
        NodeStatus::Locked => Color32::GRAY,
    }
}

/// Mensaje de estado de la app (errores de navegación, subidas de nivel…).
pub fn message_line(ui: &mut Ui, message: &str) {
    if !message.is_empty() {
        ui.add_space(6.0);
        ui.label(RichText::new(message).italics());
    }
}

/// Caja de aviso coloreada para el resultado de un mini-juego.
pub fn feedback_box(ui: &mut Ui, ok: bool, text: &str) {
    let color = if ok {
        Color32::from_rgb(52, 211, 153)
    } else {
        Color32::from_rgb(248, 113, 113)
    };
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, color))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(color));
        });
}
