use super::*;
use crate::gating::is_lesson_unlocked;
use crate::player::NavRefusal;
use log::{debug, warn};

impl AcademyApp {
    pub fn open_library(&mut self) {
        self.leave_lesson();
        self.state = AppState::Library;
    }

    pub fn open_skill_tree(&mut self) {
        self.leave_lesson();
        self.state = AppState::SkillTree;
    }

    pub fn open_topic(&mut self, topic_id: &str) -> bool {
        if self.catalog.topic(topic_id).is_none() {
            self.redirect_missing(&format!("No existe el tema '{topic_id}'"));
            return false;
        }
        self.leave_lesson();
        self.message.clear();
        self.state = AppState::Topic(topic_id.to_string());
        true
    }

    /// Abre una lección y entra en su primera diapositiva. Si la lección no
    /// existe se vuelve a la biblioteca; si está bloqueada no se mueve nada.
    pub fn open_lesson(&mut self, topic_id: &str, lesson_id: &str) -> bool {
        let Some(lesson) = self.catalog.lesson(topic_id, lesson_id) else {
            self.redirect_missing(&format!(
                "No existe la lección '{lesson_id}' en el tema '{topic_id}'"
            ));
            return false;
        };

        let index = self
            .catalog
            .lessons_for(topic_id)
            .iter()
            .position(|l| l.id == lesson_id)
            .unwrap_or(0);
        if !is_lesson_unlocked(&self.catalog, &self.store, topic_id, index) {
            self.message = "🔒 Completa antes la lección anterior".into();
            return false;
        }

        let mut player = LessonPlayer::new(topic_id, lesson);
        let entered = player.enter();
        self.leave_lesson();
        self.player = Some(player);
        self.message.clear();
        self.state = AppState::Lesson;

        match entered {
            Ok(effect) => self.apply_effect(effect),
            Err(NavRefusal::EmptyLesson) => {
                debug!("Lección '{lesson_id}' sin diapositivas: se muestra el aviso");
            }
            Err(other) => debug!("Entrada rechazada: {other:?}"),
        }
        self.sync_active_game();
        true
    }

    /// Cierra la lección sin completarla y vuelve a su tema.
    pub fn close_lesson(&mut self) {
        let topic_id = self.player.as_ref().map(|p| p.topic_id().to_string());
        self.leave_lesson();
        self.state = match topic_id {
            Some(id) => AppState::Topic(id),
            None => AppState::Library,
        };
    }

    fn leave_lesson(&mut self) {
        if let Some(player) = self.player.take() {
            player.close();
        }
        self.active_game = None;
    }

    /// Contenido inexistente: aviso y vuelta a un sitio seguro.
    fn redirect_missing(&mut self, what: &str) {
        warn!("{what}; redirigiendo a la biblioteca");
        self.leave_lesson();
        self.message = format!("⚠ {what}");
        self.state = AppState::Library;
    }
}
