// src/view_models.rs

use crate::gating::NodeStatus;
use crate::model::Difficulty;

#[derive(Clone, Debug)]
pub struct TopicInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub difficulty: Difficulty,
    pub lesson_count: usize,
    pub progress: u32, // 0..=100
    pub started: bool,
}

#[derive(Clone, Debug)]
pub struct LessonRow {
    pub index: usize,
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub unlocked: bool,
    pub completed: bool,
}

#[derive(Clone, Debug)]
pub struct TierNodeInfo {
    pub topic_id: String,
    pub title: String,
    pub icon: String,
    pub status: NodeStatus,
    pub progress: u32,
}

#[derive(Clone, Debug)]
pub struct TierInfo {
    pub difficulty: Difficulty,
    pub unlocked: bool,
    pub nodes: Vec<TierNodeInfo>,
    pub recommended: Option<String>, // tema sugerido dentro de este nivel
}

impl TopicInfo {
    pub fn label(&self) -> String {
        if self.lesson_count == 0 {
            format!("{} {} 🚧", self.icon, self.title)
        } else if self.progress == 100 {
            format!("{} {} ✅", self.icon, self.title)
        } else if self.started {
            format!("{} {} ({}%)", self.icon, self.title, self.progress)
        } else {
            format!("{} {}", self.icon, self.title)
        }
    }
}

impl LessonRow {
    pub fn label(&self) -> String {
        let n = self.index + 1;
        if self.completed {
            format!("{n}. {} ✅", self.title)
        } else if self.unlocked {
            format!("{n}. {} 🔓", self.title)
        } else {
            format!("{n}. {} 🔒", self.title)
        }
    }
}

impl TierNodeInfo {
    pub fn label(&self) -> String {
        match self.status {
            NodeStatus::Completed => format!("{} {} ✅", self.icon, self.title),
            NodeStatus::Active => format!("{} {} ({}%)", self.icon, self.title, self.progress),
            NodeStatus::Locked => format!("{} {} 🔒", self.icon, self.title),
        }
    }
}

impl TierInfo {
    pub fn label(&self) -> String {
        let lock = if self.unlocked { "🔓" } else { "🔒" };
        format!("{} {lock}", self.difficulty.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_reflect_state() {
        let mut row = LessonRow {
            index: 1,
            id: "l2".into(),
            title: "Wi-Fi".into(),
            description: String::new(),
            duration: "3 min".into(),
            unlocked: false,
            completed: false,
        };
        assert_eq!(row.label(), "2. Wi-Fi 🔒");
        row.unlocked = true;
        assert_eq!(row.label(), "2. Wi-Fi 🔓");
        row.completed = true;
        assert_eq!(row.label(), "2. Wi-Fi ✅");

        let tier = TierInfo {
            difficulty: Difficulty::Medium,
            unlocked: false,
            nodes: vec![],
            recommended: None,
        };
        assert_eq!(tier.label(), "Nivel intermedio 🔒");
    }

    #[test]
    fn empty_topic_is_marked_under_construction() {
        let info = TopicInfo {
            id: "fp".into(),
            title: "Huella".into(),
            description: String::new(),
            icon: "👣".into(),
            difficulty: Difficulty::Hard,
            lesson_count: 0,
            progress: 0,
            started: false,
        };
        assert!(info.label().ends_with("🚧"));
    }
}
