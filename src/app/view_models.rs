use super::*;
use crate::gating::{self, tier_views};
use crate::view_models::TierNodeInfo;

impl AcademyApp {
    pub fn topic_infos(&self) -> Vec<TopicInfo> {
        self.catalog
            .topics()
            .iter()
            .map(|t| TopicInfo {
                id: t.id.clone(),
                title: t.title.clone(),
                description: t.description.clone(),
                icon: t.icon.clone(),
                difficulty: t.difficulty,
                lesson_count: self.catalog.lessons_for(&t.id).len(),
                progress: self.store.topic_progress(&self.catalog, &t.id),
                started: self.store.is_topic_started(&self.catalog, &t.id),
            })
            .collect()
    }

    pub fn lesson_rows(&self, topic_id: &str) -> Vec<LessonRow> {
        self.catalog
            .lessons_for(topic_id)
            .iter()
            .enumerate()
            .map(|(index, lesson)| LessonRow {
                index,
                id: lesson.id.clone(),
                title: lesson.title.clone(),
                description: lesson.description.clone(),
                duration: lesson.duration.clone(),
                unlocked: gating::is_lesson_unlocked(&self.catalog, &self.store, topic_id, index),
                completed: self.store.is_lesson_completed(&lesson.id),
            })
            .collect()
    }

    pub fn tier_infos(&self) -> Vec<TierInfo> {
        let recommended = self.recommended_topic().map(|t| t.id.clone());
        tier_views(&self.catalog, &self.store)
            .into_iter()
            .map(|tier| {
                let nodes: Vec<TierNodeInfo> = tier
                    .nodes
                    .iter()
                    .map(|n| TierNodeInfo {
                        topic_id: n.topic.id.clone(),
                        title: n.topic.title.clone(),
                        icon: n.topic.icon.clone(),
                        status: n.status,
                        progress: n.progress,
                    })
                    .collect();
                let recommended = recommended
                    .clone()
                    .filter(|id| nodes.iter().any(|n| &n.topic_id == id));
                TierInfo {
                    difficulty: tier.difficulty,
                    unlocked: tier.unlocked,
                    nodes,
                    recommended,
                }
            })
            .collect()
    }
}
