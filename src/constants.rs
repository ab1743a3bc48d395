// src/constants.rs

// --- Gamificación ---
pub const XP_PER_LESSON: u32 = 50;
pub const XP_PER_LEVEL: u32 = 100;

// --- Persistencia ---
/// Clave del blob de progreso en el almacenamiento clave-valor (localStorage en web).
pub const STORAGE_KEY: &str = "digital-literacy-storage";

// --- Tiempos de UI (segundos) ---
pub const XP_NOTICE_SECONDS: f64 = 3.0;
pub const COMPLETION_MODAL_DELAY_SECONDS: f64 = 1.0;

// --- Mini-juegos ---
pub const TOTP_PERIOD_SECONDS: u32 = 30;
pub const TOTP_CODE_LEN: usize = 6;
pub const PASSWORD_MAX_SCORE: u32 = 100;

// --- Ventana ---
pub const APP_TITLE: &str = "Cyber Academy";
