use super::*;

impl AcademyApp {
    pub fn request_reset(&mut self) {
        self.confirm_reset = true;
    }

    pub fn cancel_reset(&mut self) {
        self.confirm_reset = false;
    }

    /// Borra el progreso y deja la app como recién instalada.
    pub fn reset_progress(&mut self) {
        self.store.reset_progress();
        if let Some(player) = self.player.take() {
            player.close();
        }
        self.active_game = None;
        self.state = AppState::Library;
        self.confirm_reset = false;
        self.profile_open = false;
        self.xp_notice_since = None;
        self.completion_modal_since = None;
        self.message = "Progreso borrado. ¡A empezar de nuevo!".into();
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar reinicio")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres borrar todo tu progreso? ¡Esta acción no se puede deshacer!");
                ui.horizontal(|ui| {
                    if ui.button("Sí, borrar").clicked() {
                        self.reset_progress();
                    }
                    if ui.button("No").clicked() {
                        self.cancel_reset();
                    }
                });
            });
    }
}
