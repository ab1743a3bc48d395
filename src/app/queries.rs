use super::*;
use crate::gating;
use crate::model::{Lesson, Slide, Topic};

impl AcademyApp {
    pub fn current_topic_id(&self) -> Option<&str> {
        match &self.state {
            AppState::Topic(id) => Some(id),
            AppState::Lesson => self.player.as_ref().map(|p| p.topic_id()),
            _ => None,
        }
    }

    pub fn current_topic(&self) -> Option<&Topic> {
        self.catalog.topic(self.current_topic_id()?)
    }

    pub fn current_lesson(&self) -> Option<&Lesson> {
        let player = self.player.as_ref()?;
        self.catalog.lesson(player.topic_id(), player.lesson_id())
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.player.as_ref()?.current_slide()
    }

    pub fn recommended_topic(&self) -> Option<&Topic> {
        gating::next_recommended_topic(&self.catalog, &self.store)
    }

    /// Lecciones completadas sobre el total del catálogo.
    pub fn course_counts(&self) -> (usize, usize) {
        let total = self.catalog.total_lessons();
        let done = self
            .store
            .completed_lessons()
            .iter()
            .filter(|id| self.catalog.topic_of_lesson(id).is_some())
            .count();
        (done, total)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;

    #[test]
    fn current_topic_follows_state() {
        let mut app = app();
        assert_eq!(app.current_topic_id(), None);
        app.open_topic("wifi");
        assert_eq!(app.current_topic().unwrap().title, "WiFi");
        app.open_lesson("hygiene", "h1");
        assert_eq!(app.current_topic_id(), Some("hygiene"));
        assert_eq!(app.current_lesson().unwrap().id, "h1");
        assert_eq!(app.current_slide().unwrap().id(), "s1");
    }

    #[test]
    fn course_counts_ignore_stale_ids() {
        let mut app = app();
        app.store.complete_lesson("h1");
        app.store.complete_lesson("borrada");
        assert_eq!(app.course_counts(), (1, 3));
        assert_eq!(app.recommended_topic().unwrap().id, "hygiene");
    }
}
