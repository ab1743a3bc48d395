use super::*;
use crate::constants::{COMPLETION_MODAL_DELAY_SECONDS, XP_NOTICE_SECONDS};
use crate::interactives::MiniGame;
use eframe::Storage;

impl AcademyApp {
    /// Guarda el blob si hubo mutaciones desde el último guardado.
    pub fn persist_to(&mut self, target: &mut dyn Storage) -> bool {
        if !self.store.take_dirty() {
            return false;
        }
        storage::save_state(target, self.store.state());
        true
    }

    /// Temporizadores de la UI, con el reloj de egui (segundos).
    pub fn tick(&mut self, now: f64) {
        self.tick_xp_notice(now);
        self.tick_completion_modal(now);

        match self.active_game.as_mut().map(|g| &mut g.game) {
            Some(MiniGame::ChatSimulation(chat)) => chat.tick(now),
            Some(MiniGame::TotpSimulator(totp)) => totp.tick(now),
            _ => {}
        }
    }

    fn tick_xp_notice(&mut self, now: f64) {
        if self.store.recent_xp_gain() == 0 {
            self.xp_notice_since = None;
            return;
        }
        let since = *self.xp_notice_since.get_or_insert(now);
        if now - since >= XP_NOTICE_SECONDS {
            self.store.clear_recent_xp_gain();
            self.xp_notice_since = None;
        }
    }

    fn tick_completion_modal(&mut self, now: f64) {
        if self.store.should_show_completion_modal() {
            self.completion_modal_since.get_or_insert(now);
        } else {
            self.completion_modal_since = None;
        }
    }

    pub fn xp_notice(&self) -> Option<u32> {
        let gain = self.store.recent_xp_gain();
        (gain > 0).then_some(gain)
    }

    pub fn completion_modal_visible(&self, now: f64) -> bool {
        self.completion_modal_since
            .is_some_and(|since| now - since >= COMPLETION_MODAL_DELAY_SECONDS)
    }

    pub fn acknowledge_completion_modal(&mut self) {
        self.store.mark_completion_modal_seen();
        self.completion_modal_since = None;
    }

    /// Hay algo con cuenta atrás en pantalla: egui debe repintar aunque no haya eventos.
    pub fn needs_timer_repaint(&self) -> bool {
        self.xp_notice_since.is_some()
            || self.completion_modal_since.is_some()
            || matches!(
                self.active_game.as_ref().map(|g| &g.game),
                Some(MiniGame::ChatSimulation(_) | MiniGame::TotpSimulator(_))
            )
    }
}
