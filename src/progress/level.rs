use crate::constants::{XP_PER_LESSON, XP_PER_LEVEL};

/// Curva de niveles: 100 XP por nivel, con techo fijado por el volumen de contenido.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelCurve {
    total_lessons: u32,
}

/// Estado derivado de la XP. Nunca se guarda por separado de `xp`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelState {
    pub xp: u32,
    pub level: u32,
    pub level_progress: f64, // 0..=100
    pub is_max_level: bool,
}

impl LevelCurve {
    pub fn new(total_lessons: usize) -> Self {
        Self {
            total_lessons: u32::try_from(total_lessons).unwrap_or(u32::MAX / XP_PER_LESSON),
        }
    }

    pub fn total_lessons(&self) -> u32 {
        self.total_lessons
    }

    pub fn max_xp(&self) -> u32 {
        self.total_lessons.saturating_mul(XP_PER_LESSON)
    }

    pub fn max_level(&self) -> u32 {
        self.max_xp() / XP_PER_LEVEL + 1
    }

    pub fn clamp_xp(&self, xp: u64) -> u32 {
        xp.min(u64::from(self.max_xp())) as u32
    }

    pub fn evaluate(&self, xp: u64) -> LevelState {
        let xp = self.clamp_xp(xp);
        let max_xp = self.max_xp();
        let level = (xp / XP_PER_LEVEL + 1).min(self.max_level());
        let is_max_level = xp >= max_xp;

        let level_progress = if is_max_level {
            100.0
        } else {
            let xp_for_current_level = (level - 1) * XP_PER_LEVEL;
            f64::from(xp - xp_for_current_level) / f64::from(XP_PER_LEVEL) * 100.0
        };

        LevelState {
            xp,
            level,
            level_progress,
            is_max_level,
        }
    }
}
