use crate::content_utils::normalize_content;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Orden de los niveles del árbol de habilidades.
    pub const ORDER: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Nivel básico",
            Difficulty::Medium => "Nivel intermedio",
            Difficulty::Hard => "Nivel avanzado",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Topic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub difficulty: Difficulty,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String, // texto para mostrar, p.ej. "5 min"
    #[serde(default)]
    pub slides: Vec<Slide>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Slide {
    Intro {
        id: String,
        title: String,
        #[serde(default)]
        content: String,
    },
    Theory {
        id: String,
        title: String,
        #[serde(default)]
        content: String,
    },
    Fact {
        id: String,
        title: String,
        #[serde(default)]
        content: String,
        #[serde(default)]
        icon: Option<String>,
    },
    Interactive {
        id: String,
        title: String,
        variant: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        data: Option<serde_yaml::Value>,
        #[serde(default)]
        labels: Option<BTreeMap<String, String>>,
    },
    Outtro {
        id: String,
        title: String,
        #[serde(default)]
        content: String,
    },
}

/// Tipo de diapositiva sin payload, lo único que necesita el reproductor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlideKind {
    Intro,
    Theory,
    Fact,
    Interactive,
    Outtro,
}

impl Slide {
    pub fn id(&self) -> &str {
        match self {
            Slide::Intro { id, .. }
            | Slide::Theory { id, .. }
            | Slide::Fact { id, .. }
            | Slide::Interactive { id, .. }
            | Slide::Outtro { id, .. } => id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Slide::Intro { title, .. }
            | Slide::Theory { title, .. }
            | Slide::Fact { title, .. }
            | Slide::Interactive { title, .. }
            | Slide::Outtro { title, .. } => title,
        }
    }

    pub fn kind(&self) -> SlideKind {
        match self {
            Slide::Intro { .. } => SlideKind::Intro,
            Slide::Theory { .. } => SlideKind::Theory,
            Slide::Fact { .. } => SlideKind::Fact,
            Slide::Interactive { .. } => SlideKind::Interactive,
            Slide::Outtro { .. } => SlideKind::Outtro,
        }
    }

    /// Texto listo para el visor markdown.
    ///
    /// Intro/teoría/dato se normalizan línea a línea; el cierre se muestra tal cual.
    /// Las interactivas devuelven su descripción.
    pub fn display_content(&self) -> String {
        match self {
            Slide::Intro { content, .. }
            | Slide::Theory { content, .. }
            | Slide::Fact { content, .. } => normalize_content(content),
            Slide::Interactive { description, .. } => description.clone(),
            Slide::Outtro { content, .. } => content.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Library,
    SkillTree,
    Topic(String),
    Lesson,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Library
    }
}
