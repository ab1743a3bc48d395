use cyber_academy::AcademyApp;
use cyber_academy::catalog::{Catalog, CatalogError};
use cyber_academy::gating::{self, NodeStatus};
use cyber_academy::interactives::MiniGame;
use cyber_academy::model::{AppState, Difficulty, Slide};
use cyber_academy::player::{LessonPlayer, NavRefusal, PlayerEffect};
use cyber_academy::progress::{ProgressStore, storage};
use std::collections::HashMap;

const TWO_TIERS: &str = r#"
topics:
  - { id: a, title: Tema A, difficulty: easy }
  - { id: b, title: Tema B, difficulty: medium }
lessons:
  a:
    - id: a1
      title: Primera
      slides:
        - { id: s1, type: intro, title: Hola, content: "  Line one.\n\n  Line two.  \n" }
        - { id: s2, type: interactive, title: Token, variant: crypto-scanner }
        - { id: s3, type: outtro, title: Fin, content: "¡Hecho!" }
  b:
    - id: b1
      title: Única
      slides:
        - { id: s1, type: outtro, title: Fin, content: Listo }
"#;

#[derive(Default)]
struct MapStorage(HashMap<String, String>);

impl eframe::Storage for MapStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.0.insert(key.to_string(), value);
    }

    fn flush(&mut self) {}
}

fn new_app() -> AcademyApp {
    let catalog = Catalog::from_yaml(TWO_TIERS).unwrap();
    let store = ProgressStore::for_catalog(&catalog);
    AcademyApp::new(catalog, store)
}

fn solve_crypto(app: &mut AcademyApp) {
    let Some(MiniGame::CryptoScanner(scanner)) = app.active_game.as_mut().map(|g| &mut g.game)
    else {
        panic!("se esperaba el escáner de tokens");
    };
    let real = scanner.tokens().iter().find(|t| t.is_real).unwrap().id;
    assert_eq!(scanner.select(real), Some(true));
}

#[test]
fn two_topic_course_reaches_the_ceiling() {
    let mut app = new_app();
    assert!(!gating::is_tier_unlocked(&app.catalog, &app.store, Difficulty::Medium));

    assert!(app.open_lesson("a", "a1"));
    app.next_slide();
    // Un "siguiente" a secas no salta la interactiva.
    app.next_slide();
    assert_eq!(app.player.as_ref().unwrap().current_index(), 1);
    assert!(!app.complete_interactive());

    solve_crypto(&mut app);
    assert!(app.complete_interactive());

    assert_eq!(app.store.xp(), 50);
    assert_eq!(app.store.level(), 1);
    assert_eq!(app.store.level_progress(), 50.0);
    assert!(!app.store.is_max_level());
    assert_eq!(app.store.topic_progress(&app.catalog, "a"), 100);
    assert!(!app.store.is_topic_started(&app.catalog, "b"));
    assert!(gating::is_tier_unlocked(&app.catalog, &app.store, Difficulty::Medium));

    app.close_lesson();
    assert!(matches!(app.state, AppState::Topic(ref id) if id == "a"));

    // Lección de una sola diapositiva: se completa al entrar.
    assert!(app.open_lesson("b", "b1"));
    assert_eq!(app.store.xp(), 100);
    assert_eq!(app.store.level(), 2);
    assert_eq!(app.store.level_progress(), 100.0);
    assert!(app.store.is_max_level());

    let tiers = gating::tier_views(&app.catalog, &app.store);
    assert!(tiers.iter().flat_map(|t| &t.nodes).all(|n| n.status == NodeStatus::Completed));
}

#[test]
fn completion_modal_shows_once_after_the_delay() {
    let mut app = new_app();
    app.store.complete_lesson("a1");
    app.store.complete_lesson("b1");

    app.tick(10.0);
    assert!(!app.completion_modal_visible(10.5));
    assert!(app.completion_modal_visible(11.0));

    app.acknowledge_completion_modal();
    app.tick(12.0);
    assert!(!app.completion_modal_visible(20.0));
}

#[test]
fn progress_survives_a_restart() {
    let mut app = new_app();
    let mut mem = MapStorage::default();
    app.store.complete_lesson("a1");
    assert!(app.persist_to(&mut mem));
    assert!(!app.persist_to(&mut mem));

    let json = mem.0.get("digital-literacy-storage").unwrap();
    assert!(json.contains("\"completedLessons\":[\"a1\"]"));
    assert!(json.contains("\"hasSeenCompletionModal\":false"));

    let restored = storage::load_state(Some(&mem as &dyn eframe::Storage));
    let catalog = Catalog::from_yaml(TWO_TIERS).unwrap();
    let store = ProgressStore::from_state(app.store.curve(), restored);
    assert_eq!(store.xp(), 50);
    assert!(store.is_topic_started(&catalog, "a"));
}

#[test]
fn content_is_normalized_for_display() {
    let app = new_app();
    let lesson = app.catalog.lesson("a", "a1").unwrap();
    let Slide::Intro { .. } = &lesson.slides[0] else {
        panic!("la primera diapositiva es una intro");
    };
    assert_eq!(lesson.slides[0].display_content(), "Line one.\n\nLine two.");
}

#[test]
fn player_refuses_to_leave_its_bounds() {
    let app = new_app();
    let lesson = app.catalog.lesson("a", "a1").unwrap();
    let mut player = LessonPlayer::new("a", lesson);

    assert_eq!(player.enter(), Ok(None));
    assert_eq!(player.previous(), Err(NavRefusal::AtFirstSlide));
    assert_eq!(player.next(), Ok(None));
    assert_eq!(player.next(), Err(NavRefusal::InteractivePending));

    let effect = player.complete_interactive().unwrap();
    assert_eq!(
        effect,
        Some(PlayerEffect::CompleteLesson {
            topic_id: "a".into(),
            lesson_id: "a1".into(),
        })
    );
    assert_eq!(player.next(), Err(NavRefusal::AtLastSlide));

    // Volver atrás y regresar no vuelve a emitir la compleción.
    player.previous().unwrap();
    assert_eq!(player.complete_interactive(), Ok(None));
}

#[test]
fn catalog_rejects_ambiguous_content() {
    let duplicate = r#"
topics:
  - { id: a, title: A, difficulty: easy }
  - { id: b, title: B, difficulty: easy }
lessons:
  a: [{ id: lesson-1, title: Uno }]
  b: [{ id: lesson-1, title: Otra }]
"#;
    assert!(matches!(
        Catalog::from_yaml(duplicate),
        Err(CatalogError::DuplicateLesson { .. })
    ));

    let misplaced = r#"
topics:
  - { id: a, title: A, difficulty: easy }
lessons:
  a:
    - id: a1
      title: Uno
      slides:
        - { id: s1, type: outtro, title: Fin }
        - { id: s2, type: intro, title: Hola }
"#;
    assert!(matches!(
        Catalog::from_yaml(misplaced),
        Err(CatalogError::OuttroNotLast { index: 0, .. })
    ));

    let orphan = r#"
topics:
  - { id: a, title: A, difficulty: easy }
lessons:
  z: [{ id: z1, title: Nada }]
"#;
    assert!(matches!(Catalog::from_yaml(orphan), Err(CatalogError::UnknownTopic(_))));
}

#[test]
fn reset_from_the_app_returns_to_a_fresh_library() {
    let mut app = new_app();
    app.open_lesson("b", "b1");
    assert_eq!(app.store.xp(), 50);

    app.request_reset();
    app.reset_progress();
    assert_eq!(app.store.xp(), 0);
    assert!(app.store.completed_lessons().is_empty());
    assert!(app.player.is_none());
    assert!(matches!(app.state, AppState::Library));
    assert!(!gating::is_tier_unlocked(&app.catalog, &app.store, Difficulty::Medium));
}
