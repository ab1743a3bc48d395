//! Progreso del alumno: XP, nivel y lecciones completadas.
//!
//! `ProgressStore` es la única fuente de verdad. Se construye a partir del
//! catálogo (que fija el techo de XP) y se inyecta en la app; no hay estado
//! global. Nivel y porcentaje se recalculan siempre desde `xp`.

pub mod level;
pub mod storage;

use crate::catalog::Catalog;
use crate::constants::XP_PER_LESSON;
use level::{LevelCurve, LevelState};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Campos que se persisten (y nada más).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressState {
    /// Heredado de versiones anteriores; siempre vacío.
    pub topic_progress: BTreeMap<String, u32>,
    pub completed_lessons: BTreeSet<String>,
    pub xp: u32,
    pub level: u32,
    pub level_progress: f64,
    pub is_max_level: bool,
    pub has_seen_completion_modal: bool,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            topic_progress: BTreeMap::new(),
            completed_lessons: BTreeSet::new(),
            xp: 0,
            level: 1,
            level_progress: 0.0,
            is_max_level: false,
            has_seen_completion_modal: false,
        }
    }
}

/// Resultado de una concesión de XP, para la notificación.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XpGain {
    pub amount: u32,
    pub leveled_up: bool,
}

#[derive(Clone, Debug)]
pub struct ProgressStore {
    curve: LevelCurve,
    state: ProgressState,
    recent_xp_gain: u32, // transitorio, no se persiste
    dirty: bool,
}

impl ProgressStore {
    pub fn new(curve: LevelCurve) -> Self {
        Self::from_state(curve, ProgressState::default())
    }

    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(LevelCurve::new(catalog.total_lessons()))
    }

    /// Restaura un estado guardado. Los campos derivados se recalculan desde `xp`
    /// con la curva actual, así que un blob antiguo o manipulado queda coherente.
    pub fn from_state(curve: LevelCurve, mut state: ProgressState) -> Self {
        state.topic_progress.clear();
        let derived = curve.evaluate(u64::from(state.xp));
        apply_level(&mut state, derived);
        Self {
            curve,
            state,
            recent_xp_gain: 0,
            dirty: false,
        }
    }

    pub fn curve(&self) -> LevelCurve {
        self.curve
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn xp(&self) -> u32 {
        self.state.xp
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn level_progress(&self) -> f64 {
        self.state.level_progress
    }

    pub fn is_max_level(&self) -> bool {
        self.state.is_max_level
    }

    pub fn has_seen_completion_modal(&self) -> bool {
        self.state.has_seen_completion_modal
    }

    pub fn recent_xp_gain(&self) -> u32 {
        self.recent_xp_gain
    }

    pub fn completed_lessons(&self) -> &BTreeSet<String> {
        &self.state.completed_lessons
    }

    pub fn is_lesson_completed(&self, lesson_id: &str) -> bool {
        self.state.completed_lessons.contains(lesson_id)
    }

    /// Marca una lección como completada y concede la XP. Idempotente:
    /// si ya estaba completada devuelve `None` y no toca nada.
    pub fn complete_lesson(&mut self, lesson_id: &str) -> Option<XpGain> {
        if self.state.completed_lessons.contains(lesson_id) {
            debug!("Lección '{lesson_id}' ya completada, sin XP");
            return None;
        }
        self.state.completed_lessons.insert(lesson_id.to_string());
        let gain = self.apply_xp(XP_PER_LESSON);
        info!(
            "Lección '{}' completada: +{} XP (total {}, nivel {})",
            lesson_id, gain.amount, self.state.xp, self.state.level
        );
        Some(gain)
    }

    /// XP genérica, sin tocar las lecciones completadas.
    pub fn add_xp(&mut self, amount: u32) -> XpGain {
        let gain = self.apply_xp(amount);
        debug!("+{} XP (total {})", gain.amount, self.state.xp);
        gain
    }

    fn apply_xp(&mut self, amount: u32) -> XpGain {
        let before = self.state.clone();
        let next = self
            .curve
            .evaluate(u64::from(before.xp) + u64::from(amount));
        apply_level(&mut self.state, next);

        let gain = XpGain {
            amount: self.state.xp - before.xp,
            leveled_up: self.state.level > before.level,
        };
        if gain.leveled_up {
            info!("¡Subida de nivel! {} -> {}", before.level, self.state.level);
        }
        self.recent_xp_gain = gain.amount;
        self.dirty = true;
        gain
    }

    pub fn clear_recent_xp_gain(&mut self) {
        self.recent_xp_gain = 0;
    }

    /// Borra todo el progreso. Irreversible; la UI lo protege con confirmación.
    pub fn reset_progress(&mut self) {
        info!("Progreso reiniciado");
        self.state = ProgressState::default();
        apply_level(&mut self.state, self.curve.evaluate(0));
        self.recent_xp_gain = 0;
        self.dirty = true;
    }

    pub fn mark_completion_modal_seen(&mut self) {
        if !self.state.has_seen_completion_modal {
            self.state.has_seen_completion_modal = true;
            self.dirty = true;
        }
    }

    pub fn should_show_completion_modal(&self) -> bool {
        self.state.is_max_level && !self.state.has_seen_completion_modal
    }

    /// Porcentaje (0..=100) de lecciones completadas del tema.
    /// Solo llega a 100 cuando están todas.
    pub fn topic_progress(&self, catalog: &Catalog, topic_id: &str) -> u32 {
        let lessons = catalog.lessons_for(topic_id);
        if lessons.is_empty() {
            return 0;
        }
        let done = lessons
            .iter()
            .filter(|l| self.is_lesson_completed(&l.id))
            .count();
        let percent = (100.0 * done as f64 / lessons.len() as f64).round() as u32;
        if done < lessons.len() {
            percent.min(99)
        } else {
            100
        }
    }

    pub fn is_topic_started(&self, catalog: &Catalog, topic_id: &str) -> bool {
        catalog
            .lessons_for(topic_id)
            .iter()
            .any(|l| self.is_lesson_completed(&l.id))
    }

    /// Devuelve `true` una sola vez tras cada mutación pendiente de guardar.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

fn apply_level(state: &mut ProgressState, derived: LevelState) {
    state.xp = derived.xp;
    state.level = derived.level;
    state.level_progress = derived.level_progress;
    state.is_max_level = derived.is_max_level;
}
