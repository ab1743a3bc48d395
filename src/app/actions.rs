use super::*;
use crate::interactives::{InteractiveVariant, MiniGame};
use crate::model::Slide;
use crate::player::{NavResult, PlayerEffect};
use log::debug;

impl AcademyApp {
    pub fn next_slide(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        let result = player.next();
        self.finish_transition(result);
    }

    pub fn previous_slide(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        if let Err(refusal) = player.previous() {
            debug!("Atrás rechazado: {refusal:?}");
        }
        self.sync_active_game();
    }

    /// `onComplete` del mini-juego montado. Solo avanza si el juego está
    /// resuelto y no había avisado ya en este montaje.
    pub fn complete_interactive(&mut self) -> bool {
        // El latch no se gasta si el reproductor no va a avanzar
        if !self
            .player
            .as_ref()
            .is_some_and(LessonPlayer::can_complete_interactive)
        {
            debug!("onComplete sin diapositiva a la que avanzar");
            return false;
        }
        let fired = self
            .active_game
            .as_mut()
            .is_some_and(|game| game.try_complete());
        if !fired {
            return false;
        }
        let Some(player) = self.player.as_mut() else {
            return false;
        };
        let result = player.complete_interactive();
        let advanced = result.is_ok();
        self.finish_transition(result);
        advanced
    }

    /// Botón "Saltar" de una variante desconocida.
    pub fn skip_unknown_variant(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        let result = player.skip_unknown_variant();
        self.finish_transition(result);
    }

    /// El alumno rehace a propósito la tarea de la diapositiva actual.
    pub fn restart_active_game(&mut self) {
        let Some(game) = self.build_game_for_current_slide() else {
            return;
        };
        if let Some(active) = self.active_game.as_mut() {
            active.restart(game);
        }
    }

    fn finish_transition(&mut self, result: NavResult) {
        match result {
            Ok(effect) => self.apply_effect(effect),
            Err(refusal) => debug!("Transición rechazada: {refusal:?}"),
        }
        self.sync_active_game();
    }

    pub(crate) fn apply_effect(&mut self, effect: Option<PlayerEffect>) {
        let Some(PlayerEffect::CompleteLesson { topic_id, lesson_id }) = effect else {
            return;
        };
        if let Some(gain) = self.store.complete_lesson(&lesson_id) {
            // nueva notificación: el temporizador empieza de cero
            self.xp_notice_since = None;
            self.message = if gain.leveled_up {
                format!("🎉 ¡Nivel {}!", self.store.level())
            } else {
                String::new()
            };
            debug!("Tema '{topic_id}' al {}%", self.store.topic_progress(&self.catalog, &topic_id));
        }
    }

    /// Monta (o desmonta) el mini-juego de la diapositiva actual.
    pub(crate) fn sync_active_game(&mut self) {
        let Some(index) = self.player.as_ref().map(|p| p.current_index()) else {
            self.active_game = None;
            return;
        };
        if self
            .active_game
            .as_ref()
            .is_some_and(|g| g.slide_index == index)
        {
            return;
        }
        self.active_game = self.build_game_for_current_slide().map(|game| {
            let already = self
                .player
                .as_ref()
                .is_some_and(|p| p.is_interactive_completed(index));
            ActiveGame::mount(index, game, already)
        });
    }

    fn build_game_for_current_slide(&self) -> Option<MiniGame> {
        match self.player.as_ref()?.current_slide()? {
            Slide::Interactive {
                variant,
                data,
                labels,
                ..
            } => {
                let variant = InteractiveVariant::from_key(variant)?;
                Some(MiniGame::new(variant, data.as_ref(), labels.as_ref()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use super::*;

    fn solve_crypto(app: &mut AcademyApp) {
        if let Some(ActiveGame {
            game: MiniGame::CryptoScanner(scanner),
            ..
        }) = app.active_game.as_mut()
        {
            let real = scanner.tokens().iter().find(|t| t.is_real).unwrap().id;
            scanner.select(real);
        }
    }

    #[test]
    fn full_lesson_awards_xp_once() {
        let mut app = app();
        app.open_lesson("hygiene", "h1");
        assert!(app.active_game.is_none());

        app.next_slide();
        assert!(app.active_game.is_some());

        // "siguiente" a secas no pasa de la interactiva
        app.next_slide();
        assert_eq!(app.player.as_ref().unwrap().current_index(), 1);
        assert!(!app.complete_interactive());

        solve_crypto(&mut app);
        assert!(app.complete_interactive());
        assert_eq!(app.store.xp(), 50);
        assert_eq!(app.store.recent_xp_gain(), 50);
        assert!(app.store.is_lesson_completed("h1"));
        assert!(app.active_game.is_none());

        // repetir la lección no da más XP
        app.close_lesson();
        app.open_lesson("hygiene", "h1");
        app.next_slide();
        solve_crypto(&mut app);
        app.complete_interactive();
        assert_eq!(app.store.xp(), 50);
    }

    #[test]
    fn going_back_shows_game_as_completed() {
        let mut app = app();
        app.open_lesson("hygiene", "h1");
        app.next_slide();
        solve_crypto(&mut app);
        app.complete_interactive();
        app.previous_slide();
        let active = app.active_game.as_ref().unwrap();
        assert!(active.already_completed);
        assert!(active.can_complete());
    }

    #[test]
    fn skipping_unknown_variant_still_reaches_outtro() {
        let mut app = app();
        app.store.complete_lesson("h1");
        app.open_lesson("wifi", "w1");
        assert!(app.active_game.is_none());
        assert!(!app.complete_interactive());

        app.skip_unknown_variant();
        assert!(app.store.is_lesson_completed("w1"));
        assert!(!app.player.as_ref().unwrap().is_interactive_completed(0));
    }

    #[test]
    fn trailing_interactive_keeps_the_latch_armed() {
        let yaml = r#"
topics:
  - { id: hygiene, title: Higiene, difficulty: easy }
lessons:
  hygiene:
    - id: h1
      title: Sin cierre
      slides:
        - { id: s1, type: intro, title: Hola, content: Uno }
        - { id: s2, type: interactive, title: Cripto, variant: crypto-scanner }
"#;
        let catalog = Catalog::from_yaml(yaml).unwrap();
        let store = ProgressStore::for_catalog(&catalog);
        let mut app = AcademyApp::new(catalog, store);
        app.open_lesson("hygiene", "h1");
        app.next_slide();
        solve_crypto(&mut app);

        assert!(app.active_game.as_ref().unwrap().can_complete());
        assert!(!app.complete_interactive());
        assert!(app.active_game.as_ref().unwrap().can_complete());
        assert_eq!(app.player.as_ref().unwrap().current_index(), 1);
        assert!(!app.store.is_lesson_completed("h1"));
    }

    #[test]
    fn restart_rearms_the_latch() {
        let mut app = app();
        app.open_lesson("hygiene", "h1");
        app.next_slide();
        solve_crypto(&mut app);
        app.restart_active_game();
        assert!(!app.active_game.as_ref().unwrap().can_complete());
    }
}
