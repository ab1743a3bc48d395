// src/progress/storage.rs
//
// Blob JSON del progreso en el almacenamiento clave-valor de eframe
// (localStorage en la web, fichero en escritorio).

use super::ProgressState;
use crate::constants::STORAGE_KEY;
use eframe::Storage;
use log::{debug, warn};

/// Lee el progreso guardado. Si no hay blob o está corrupto, estado inicial.
pub fn load_state(storage: Option<&dyn Storage>) -> ProgressState {
    let Some(storage) = storage else {
        warn!("Sin almacenamiento persistente: el progreso vivirá solo en esta sesión");
        return ProgressState::default();
    };

    match storage.get_string(STORAGE_KEY) {
        None => {
            debug!("No hay progreso guardado en '{STORAGE_KEY}'");
            ProgressState::default()
        }
        Some(json) => parse_state(&json),
    }
}

pub fn parse_state(json: &str) -> ProgressState {
    serde_json::from_str(json).unwrap_or_else(|e| {
        warn!("Progreso guardado ilegible ({e}), se empieza de cero");
        ProgressState::default()
    })
}

pub fn save_state(storage: &mut dyn Storage, state: &ProgressState) {
    match serde_json::to_string(state) {
        Ok(json) => {
            storage.set_string(STORAGE_KEY, json);
            storage.flush();
            debug!("Progreso guardado (xp={}, nivel={})", state.xp, state.level);
        }
        Err(e) => warn!("No se pudo serializar el progreso: {e}"),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    pub(crate) struct MemoryStorage {
        values: HashMap<String, String>,
        flushes: usize,
    }

    impl Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_string(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn round_trip_through_storage() {
        let mut storage = MemoryStorage::default();
        let mut state = ProgressState::default();
        state.xp = 150;
        state.completed_lessons.insert("ch-lesson-1".into());

        save_state(&mut storage, &state);
        assert_eq!(storage.flushes, 1);
        assert_eq!(load_state(Some(&storage)), state);
    }

    #[test]
    fn blob_uses_camel_case_and_no_transient_fields() {
        let mut storage = MemoryStorage::default();
        save_state(&mut storage, &ProgressState::default());
        let json = storage.get_string(STORAGE_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object().unwrap();

        for key in [
            "topicProgress",
            "completedLessons",
            "xp",
            "level",
            "levelProgress",
            "isMaxLevel",
            "hasSeenCompletionModal",
        ] {
            assert!(obj.contains_key(key), "falta {key}");
        }
        assert_eq!(obj.len(), 7);
        assert!(!obj.contains_key("recentXpGain"));
    }

    #[test]
    fn missing_or_malformed_blob_gives_defaults() {
        let storage = MemoryStorage::default();
        assert_eq!(load_state(Some(&storage)), ProgressState::default());
        assert_eq!(load_state(None), ProgressState::default());
        assert_eq!(parse_state("{not json"), ProgressState::default());
        assert_eq!(parse_state("[1,2,3]"), ProgressState::default());
    }

    #[test]
    fn partial_blob_fills_defaults_and_dedups() {
        let state = parse_state(r#"{"xp":50,"completedLessons":["a","a","b"]}"#);
        assert_eq!(state.xp, 50);
        assert_eq!(state.level, 1);
        assert_eq!(state.completed_lessons.len(), 2);
        assert!(!state.has_seen_completion_modal);
    }
}
