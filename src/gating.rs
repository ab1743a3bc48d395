//! Desbloqueo del árbol de habilidades.
//!
//! El primer nivel siempre está abierto; el nivel N se abre en cuanto un
//! tema del nivel N-1 tiene al menos una lección completada.

use crate::catalog::Catalog;
use crate::model::{Difficulty, Topic};
use crate::progress::ProgressStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeStatus {
    Locked,
    Active,
    Completed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TopicNode<'a> {
    pub topic: &'a Topic,
    pub status: NodeStatus,
    pub progress: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TierView<'a> {
    pub difficulty: Difficulty,
    pub unlocked: bool,
    pub nodes: Vec<TopicNode<'a>>,
}

pub fn tier_views<'a>(catalog: &'a Catalog, store: &ProgressStore) -> Vec<TierView<'a>> {
    let mut views = Vec::new();
    let mut previous_started = true;

    for (difficulty, topics) in catalog.tiers() {
        let unlocked = previous_started;
        let nodes: Vec<TopicNode<'a>> = topics
            .iter()
            .copied()
            .map(|topic| {
                let progress = store.topic_progress(catalog, &topic.id);
                let status = if progress == 100 {
                    NodeStatus::Completed
                } else if unlocked {
                    NodeStatus::Active
                } else {
                    NodeStatus::Locked
                };
                TopicNode {
                    topic,
                    status,
                    progress,
                }
            })
            .collect();

        previous_started = topics
            .iter()
            .any(|t| store.is_topic_started(catalog, &t.id));
        views.push(TierView {
            difficulty,
            unlocked,
            nodes,
        });
    }
    views
}

pub fn is_tier_unlocked(catalog: &Catalog, store: &ProgressStore, difficulty: Difficulty) -> bool {
    tier_views(catalog, store)
        .iter()
        .find(|tier| tier.difficulty == difficulty)
        .is_some_and(|tier| tier.unlocked)
}

/// Primer tema sin terminar dentro de los niveles abiertos.
pub fn next_recommended_topic<'a>(catalog: &'a Catalog, store: &ProgressStore) -> Option<&'a Topic> {
    tier_views(catalog, store)
        .into_iter()
        .take_while(|tier| tier.unlocked)
        .flat_map(|tier| tier.nodes)
        .find(|node| node.progress < 100)
        .map(|node| node.topic)
}

/// Dentro de un tema las lecciones van en orden: la primera siempre está
/// abierta y cada una exige la anterior.
pub fn is_lesson_unlocked(
    catalog: &Catalog,
    store: &ProgressStore,
    topic_id: &str,
    index: usize,
) -> bool {
    if index == 0 {
        return true;
    }
    catalog
        .lessons_for(topic_id)
        .get(index - 1)
        .is_some_and(|prev| store.is_lesson_completed(&prev.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
topics:
  - { id: basics, title: Básico, difficulty: easy }
  - { id: hygiene, title: Higiene, difficulty: easy }
  - { id: wifi, title: WiFi, difficulty: medium }
  - { id: crypto, title: Cripto, difficulty: hard }
lessons:
  basics:
    - { id: b1, title: B1, slides: [] }
    - { id: b2, title: B2, slides: [] }
  hygiene:
    - { id: h1, title: H1, slides: [] }
  wifi:
    - { id: w1, title: W1, slides: [] }
  crypto:
    - { id: c1, title: C1, slides: [] }
"#;

    fn setup() -> (Catalog, ProgressStore) {
        let catalog = Catalog::from_yaml(CATALOG).unwrap();
        let store = ProgressStore::for_catalog(&catalog);
        (catalog, store)
    }

    fn statuses(views: &[TierView]) -> Vec<(bool, Vec<NodeStatus>)> {
        views
            .iter()
            .map(|t| (t.unlocked, t.nodes.iter().map(|n| n.status).collect()))
            .collect()
    }

    #[test]
    fn only_first_tier_open_at_start() {
        let (catalog, store) = setup();
        let views = tier_views(&catalog, &store);
        assert_eq!(
            statuses(&views),
            vec![
                (true, vec![NodeStatus::Active, NodeStatus::Active]),
                (false, vec![NodeStatus::Locked]),
                (false, vec![NodeStatus::Locked]),
            ]
        );
    }

    #[test]
    fn one_lesson_opens_the_next_tier() {
        let (catalog, mut store) = setup();
        store.complete_lesson("b1");
        let views = tier_views(&catalog, &store);
        assert!(views[1].unlocked);
        assert!(!views[2].unlocked);
        assert_eq!(views[0].nodes[0].progress, 50);
        assert!(is_tier_unlocked(&catalog, &store, Difficulty::Medium));
        assert!(!is_tier_unlocked(&catalog, &store, Difficulty::Hard));
    }

    #[test]
    fn finished_topic_shows_completed() {
        let (catalog, mut store) = setup();
        store.complete_lesson("h1");
        let views = tier_views(&catalog, &store);
        assert_eq!(views[0].nodes[1].status, NodeStatus::Completed);
        assert_eq!(views[0].nodes[0].status, NodeStatus::Active);
    }

    #[test]
    fn completed_topic_in_locked_tier_is_still_completed() {
        let (catalog, mut store) = setup();
        store.complete_lesson("c1");
        let views = tier_views(&catalog, &store);
        assert!(!views[2].unlocked);
        assert_eq!(views[2].nodes[0].status, NodeStatus::Completed);
    }

    #[test]
    fn recommendation_follows_unlocked_tiers() {
        let (catalog, mut store) = setup();
        assert_eq!(next_recommended_topic(&catalog, &store).unwrap().id, "basics");
        store.complete_lesson("b1");
        store.complete_lesson("b2");
        assert_eq!(next_recommended_topic(&catalog, &store).unwrap().id, "hygiene");
        store.complete_lesson("h1");
        assert_eq!(next_recommended_topic(&catalog, &store).unwrap().id, "wifi");
        store.complete_lesson("w1");
        assert_eq!(next_recommended_topic(&catalog, &store).unwrap().id, "crypto");
        store.complete_lesson("c1");
        assert_eq!(next_recommended_topic(&catalog, &store), None);
    }

    #[test]
    fn lessons_unlock_in_order() {
        let (catalog, mut store) = setup();
        assert!(is_lesson_unlocked(&catalog, &store, "basics", 0));
        assert!(!is_lesson_unlocked(&catalog, &store, "basics", 1));
        store.complete_lesson("b1");
        assert!(is_lesson_unlocked(&catalog, &store, "basics", 1));
        assert!(!is_lesson_unlocked(&catalog, &store, "basics", 5));
    }
}
