pub mod app;
pub mod catalog;
pub mod constants;
pub mod content_utils;
pub mod data;
pub mod gating;
pub mod interactives;
pub mod model;
pub mod player;
pub mod progress;
pub mod ui;
pub mod view_models;

pub use app::AcademyApp;
