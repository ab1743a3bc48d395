//! Catálogo de contenido: temas → lecciones → diapositivas.
//!
//! Se carga una vez al arrancar y no se modifica nunca. Toda la validación
//! se hace aquí, de modo que el resto de la app puede fiarse de los ids.

use crate::interactives::InteractiveVariant;
use crate::model::{Difficulty, Lesson, Slide, SlideKind, Topic};
use log::{debug, warn};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no se pudo parsear el catálogo: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("tema duplicado: {0}")]
    DuplicateTopic(String),
    #[error("lección duplicada '{lesson_id}' (temas '{first_topic}' y '{second_topic}')")]
    DuplicateLesson {
        lesson_id: String,
        first_topic: String,
        second_topic: String,
    },
    #[error("hay lecciones para un tema inexistente: {0}")]
    UnknownTopic(String),
    #[error("diapositiva duplicada '{slide_id}' en la lección '{lesson_id}'")]
    DuplicateSlide { lesson_id: String, slide_id: String },
    #[error("la lección '{lesson_id}' tiene un cierre en la posición {index} que no es la última")]
    OuttroNotLast { lesson_id: String, index: usize },
}

/// Formato en disco: lista de temas + lecciones agrupadas por id de tema.
#[derive(Deserialize)]
struct RawCatalog {
    topics: Vec<Topic>,
    #[serde(default)]
    lessons: BTreeMap<String, Vec<Lesson>>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    topics: Vec<Topic>,
    lessons: HashMap<String, Vec<Lesson>>,
    lesson_topic: HashMap<String, String>, // lección -> tema
}

impl Catalog {
    pub fn from_yaml(text: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_yaml::from_str(text)?;
        Self::new(raw.topics, raw.lessons.into_iter().collect())
    }

    /// Construye y valida el catálogo. Falla en cuanto encuentra un id ambiguo.
    pub fn new(
        topics: Vec<Topic>,
        lessons: HashMap<String, Vec<Lesson>>,
    ) -> Result<Self, CatalogError> {
        let mut topic_ids = HashSet::new();
        for topic in &topics {
            if !topic_ids.insert(topic.id.as_str()) {
                return Err(CatalogError::DuplicateTopic(topic.id.clone()));
            }
        }

        // Orden estable para que el error de duplicado sea reproducible
        let mut keys: Vec<&String> = lessons.keys().collect();
        keys.sort();

        let mut lesson_topic: HashMap<String, String> = HashMap::new();
        for topic_id in keys {
            if !topic_ids.contains(topic_id.as_str()) {
                return Err(CatalogError::UnknownTopic(topic_id.clone()));
            }
            for lesson in &lessons[topic_id] {
                if let Some(first) = lesson_topic.get(&lesson.id) {
                    return Err(CatalogError::DuplicateLesson {
                        lesson_id: lesson.id.clone(),
                        first_topic: first.clone(),
                        second_topic: topic_id.clone(),
                    });
                }
                validate_slides(lesson)?;
                lesson_topic.insert(lesson.id.clone(), topic_id.clone());
            }
        }

        debug!(
            "Catálogo cargado: {} temas, {} lecciones",
            topics.len(),
            lesson_topic.len()
        );

        Ok(Self {
            topics,
            lessons,
            lesson_topic,
        })
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn topic(&self, topic_id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == topic_id)
    }

    /// Lecciones de un tema, en orden. Vacío si el tema no tiene contenido aún.
    pub fn lessons_for(&self, topic_id: &str) -> &[Lesson] {
        self.lessons
            .get(topic_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn lesson(&self, topic_id: &str, lesson_id: &str) -> Option<&Lesson> {
        self.lessons_for(topic_id).iter().find(|l| l.id == lesson_id)
    }

    pub fn topic_of_lesson(&self, lesson_id: &str) -> Option<&str> {
        self.lesson_topic.get(lesson_id).map(String::as_str)
    }

    pub fn total_lessons(&self) -> usize {
        self.lesson_topic.len()
    }

    /// Grupos de temas por dificultad (fácil → difícil), omitiendo los vacíos.
    pub fn tiers(&self) -> Vec<(Difficulty, Vec<&Topic>)> {
        Difficulty::ORDER
            .iter()
            .map(|d| {
                let topics: Vec<&Topic> =
                    self.topics.iter().filter(|t| t.difficulty == *d).collect();
                (*d, topics)
            })
            .filter(|(_, topics)| !topics.is_empty())
            .collect()
    }
}

fn validate_slides(lesson: &Lesson) -> Result<(), CatalogError> {
    let mut slide_ids = HashSet::new();
    let last = lesson.slides.len().saturating_sub(1);

    for (index, slide) in lesson.slides.iter().enumerate() {
        if !slide_ids.insert(slide.id()) {
            return Err(CatalogError::DuplicateSlide {
                lesson_id: lesson.id.clone(),
                slide_id: slide.id().to_string(),
            });
        }
        if slide.kind() == SlideKind::Outtro && index != last {
            return Err(CatalogError::OuttroNotLast {
                lesson_id: lesson.id.clone(),
                index,
            });
        }
        if let Slide::Interactive { variant, .. } = slide {
            if InteractiveVariant::from_key(variant).is_none() {
                warn!(
                    "Lección '{}': variante interactiva desconocida '{}' en '{}'",
                    lesson.id,
                    variant,
                    slide.id()
                );
            }
        }
    }
    Ok(())
}
