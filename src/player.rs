//! Reproductor de lecciones: un cursor lineal sobre las diapositivas.
//!
//! Las transiciones devuelven efectos explícitos en vez de tocar el progreso
//! directamente. La única consecuencia hacia fuera es
//! [`PlayerEffect::CompleteLesson`], que sale al entrar en el cierre.

use crate::model::{Lesson, Slide, SlideKind};
use log::debug;
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerEffect {
    CompleteLesson { topic_id: String, lesson_id: String },
}

/// Motivo por el que una transición no se aplica. El estado queda intacto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavRefusal {
    EmptyLesson,
    AtFirstSlide,
    AtLastSlide,
    /// "Siguiente" a secas sobre una interactiva: decide el mini-juego.
    InteractivePending,
    NotInteractive,
}

pub type NavResult = Result<Option<PlayerEffect>, NavRefusal>;

#[derive(Clone, Debug)]
pub struct LessonPlayer {
    topic_id: String,
    lesson_id: String,
    slides: Vec<Slide>,
    current: usize,
    completed_interactives: BTreeSet<usize>,
    completion_emitted: bool,
}

impl LessonPlayer {
    pub fn new(topic_id: &str, lesson: &Lesson) -> Self {
        Self {
            topic_id: topic_id.to_string(),
            lesson_id: lesson.id.clone(),
            slides: lesson.slides.clone(),
            current: 0,
            completed_interactives: BTreeSet::new(),
            completion_emitted: false,
        }
    }

    pub fn topic_id(&self) -> &str {
        &self.topic_id
    }

    pub fn lesson_id(&self) -> &str {
        &self.lesson_id
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    pub fn current_kind(&self) -> Option<SlideKind> {
        self.current_slide().map(Slide::kind)
    }

    fn is_last(&self) -> bool {
        self.current + 1 >= self.slides.len()
    }

    pub fn can_go_previous(&self) -> bool {
        !self.is_empty() && self.current > 0
    }

    /// Solo para pintar: una interactiva ya superada se muestra como hecha.
    pub fn is_interactive_completed(&self, index: usize) -> bool {
        self.completed_interactives.contains(&index)
    }

    pub fn progress_percent(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f32 / self.slides.len() as f32 * 100.0
    }

    /// Primer render de la lección. Una lección de una sola diapositiva de
    /// cierre se completa aquí mismo.
    pub fn enter(&mut self) -> NavResult {
        if self.is_empty() {
            return Err(NavRefusal::EmptyLesson);
        }
        Ok(self.on_enter())
    }

    pub fn next(&mut self) -> NavResult {
        if self.is_empty() {
            return Err(NavRefusal::EmptyLesson);
        }
        if self.is_last() {
            return Err(NavRefusal::AtLastSlide);
        }
        if self.current_kind() == Some(SlideKind::Interactive) {
            return Err(NavRefusal::InteractivePending);
        }
        self.current += 1;
        Ok(self.on_enter())
    }

    pub fn previous(&mut self) -> Result<(), NavRefusal> {
        if self.is_empty() {
            return Err(NavRefusal::EmptyLesson);
        }
        if self.current == 0 {
            return Err(NavRefusal::AtFirstSlide);
        }
        self.current -= 1;
        debug!(
            "Lección '{}': atrás a la diapositiva {}",
            self.lesson_id, self.current
        );
        Ok(())
    }

    /// `onComplete` del mini-juego: se apunta la interactiva y se avanza.
    pub fn complete_interactive(&mut self) -> NavResult {
        self.check_interactive()?;
        self.completed_interactives.insert(self.current);
        self.current += 1;
        Ok(self.on_enter())
    }

    /// Salida manual de una variante desconocida. Avanza sin apuntar la
    /// interactiva como superada.
    pub fn skip_unknown_variant(&mut self) -> NavResult {
        self.check_interactive()?;
        log::warn!(
            "Lección '{}': se salta la interactiva {} sin completarla",
            self.lesson_id,
            self.current
        );
        self.current += 1;
        Ok(self.on_enter())
    }

    /// La interactiva actual puede avanzar con su `onComplete`.
    pub fn can_complete_interactive(&self) -> bool {
        self.check_interactive().is_ok()
    }

    fn check_interactive(&self) -> Result<(), NavRefusal> {
        match self.current_kind() {
            None => Err(NavRefusal::EmptyLesson),
            Some(SlideKind::Interactive) if self.is_last() => Err(NavRefusal::AtLastSlide),
            Some(SlideKind::Interactive) => Ok(()),
            Some(_) => Err(NavRefusal::NotInteractive),
        }
    }

    fn on_enter(&mut self) -> Option<PlayerEffect> {
        let kind = self.current_kind()?;
        debug!(
            "Lección '{}': diapositiva {}/{} ({kind:?})",
            self.lesson_id,
            self.current + 1,
            self.slides.len()
        );
        if kind != SlideKind::Outtro || self.completion_emitted {
            return None;
        }
        self.completion_emitted = true;
        Some(PlayerEffect::CompleteLesson {
            topic_id: self.topic_id.clone(),
            lesson_id: self.lesson_id.clone(),
        })
    }

    /// Cerrar no completa nada, esté donde esté el cursor.
    pub fn close(self) {
        debug!(
            "Lección '{}' cerrada en la diapositiva {}",
            self.lesson_id, self.current
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(id: &str, kind: &str) -> Slide {
        let yaml = match kind {
            "interactive" => format!(
                "{{ id: {id}, type: interactive, title: T, variant: term-sorter, description: D }}"
            ),
            other => format!("{{ id: {id}, type: {other}, title: T, content: C }}"),
        };
        serde_yaml::from_str(&yaml).unwrap()
    }

    fn lesson(kinds: &[&str]) -> Lesson {
        Lesson {
            id: "l1".into(),
            title: "Lección".into(),
            description: String::new(),
            duration: "5 min".into(),
            slides: kinds
                .iter()
                .enumerate()
                .map(|(i, k)| slide(&format!("s{i}"), k))
                .collect(),
        }
    }

    fn complete_effect() -> PlayerEffect {
        PlayerEffect::CompleteLesson {
            topic_id: "t1".into(),
            lesson_id: "l1".into(),
        }
    }

    #[test]
    fn walks_to_outtro_and_completes_once() {
        let mut p = LessonPlayer::new("t1", &lesson(&["intro", "theory", "outtro"]));
        assert_eq!(p.enter(), Ok(None));
        assert_eq!(p.next(), Ok(None));
        assert_eq!(p.next(), Ok(Some(complete_effect())));
        assert_eq!(p.next(), Err(NavRefusal::AtLastSlide));

        // volver y entrar otra vez no repite el efecto
        assert_eq!(p.previous(), Ok(()));
        assert_eq!(p.next(), Ok(None));
        assert_eq!(p.current_index(), 2);
    }

    #[test]
    fn previous_is_refused_at_start() {
        let mut p = LessonPlayer::new("t1", &lesson(&["intro", "outtro"]));
        assert!(!p.can_go_previous());
        assert_eq!(p.previous(), Err(NavRefusal::AtFirstSlide));
        assert_eq!(p.current_index(), 0);
    }

    #[test]
    fn interactive_gates_bare_next() {
        let mut p = LessonPlayer::new("t1", &lesson(&["intro", "interactive", "outtro"]));
        p.next().unwrap();
        assert_eq!(p.next(), Err(NavRefusal::InteractivePending));
        assert_eq!(p.current_index(), 1);

        assert_eq!(p.complete_interactive(), Ok(Some(complete_effect())));
        assert!(p.is_interactive_completed(1));

        // ya superada, pero sigue sin aceptar "siguiente" a secas
        p.previous().unwrap();
        assert_eq!(p.next(), Err(NavRefusal::InteractivePending));
    }

    #[test]
    fn complete_interactive_needs_an_interactive() {
        let mut p = LessonPlayer::new("t1", &lesson(&["intro", "outtro"]));
        assert_eq!(p.complete_interactive(), Err(NavRefusal::NotInteractive));
        assert_eq!(p.skip_unknown_variant(), Err(NavRefusal::NotInteractive));
    }

    #[test]
    fn skip_does_not_record_completion() {
        let mut p = LessonPlayer::new("t1", &lesson(&["interactive", "outtro"]));
        assert_eq!(p.skip_unknown_variant(), Ok(Some(complete_effect())));
        assert!(!p.is_interactive_completed(0));
    }

    #[test]
    fn empty_lesson_refuses_everything() {
        let mut p = LessonPlayer::new("t1", &lesson(&[]));
        assert!(p.is_empty());
        assert_eq!(p.enter(), Err(NavRefusal::EmptyLesson));
        assert_eq!(p.next(), Err(NavRefusal::EmptyLesson));
        assert_eq!(p.previous(), Err(NavRefusal::EmptyLesson));
        assert_eq!(p.complete_interactive(), Err(NavRefusal::EmptyLesson));
        assert_eq!(p.progress_percent(), 0.0);
    }

    #[test]
    fn single_outtro_completes_on_enter() {
        let mut p = LessonPlayer::new("t1", &lesson(&["outtro"]));
        assert_eq!(p.enter(), Ok(Some(complete_effect())));
        assert_eq!(p.enter(), Ok(None));
    }

    #[test]
    fn trailing_interactive_cannot_advance() {
        let mut p = LessonPlayer::new("t1", &lesson(&["intro", "interactive"]));
        assert!(!p.can_complete_interactive());
        p.next().unwrap();
        assert!(!p.can_complete_interactive());
        assert_eq!(p.complete_interactive(), Err(NavRefusal::AtLastSlide));
        assert!(!p.is_interactive_completed(1));
    }

    #[test]
    fn progress_bar_counts_current_slide() {
        let mut p = LessonPlayer::new("t1", &lesson(&["intro", "theory", "fact", "outtro"]));
        assert_eq!(p.progress_percent(), 25.0);
        p.next().unwrap();
        assert_eq!(p.progress_percent(), 50.0);
    }

    #[test]
    fn closing_mid_lesson_emits_nothing() {
        let mut p = LessonPlayer::new("t1", &lesson(&["intro", "outtro"]));
        p.enter().unwrap();
        p.close();
    }
}
