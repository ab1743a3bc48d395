use crate::constants::PASSWORD_MAX_SCORE;

const SPECIAL_CHARS: &str = "!@#$%^&*";

#[derive(Clone, Debug, Default)]
pub struct PasswordBuilder {
    password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthBand {
    Weak,   // <= 30
    Medium, // <= 80
    Strong,
}

impl PasswordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Acceso directo para `TextEdit`.
    pub fn password_mut(&mut self) -> &mut String {
        &mut self.password
    }

    pub fn set_password(&mut self, value: &str) {
        self.password = value.to_string();
    }

    pub fn strength(&self) -> u32 {
        strength(&self.password)
    }

    pub fn band(&self) -> StrengthBand {
        match self.strength() {
            0..=30 => StrengthBand::Weak,
            31..=80 => StrengthBand::Medium,
            _ => StrengthBand::Strong,
        }
    }

    pub fn meets_length_hint(&self) -> bool {
        self.password.chars().count() > 20 || word_groups(&self.password) >= 3
    }

    pub fn has_uppercase(&self) -> bool {
        self.password.chars().any(|c| c.is_ascii_uppercase())
    }

    pub fn has_special(&self) -> bool {
        self.password.chars().any(|c| SPECIAL_CHARS.contains(c))
    }

    pub fn is_solved(&self) -> bool {
        self.strength() == PASSWORD_MAX_SCORE
    }
}

/// Puntuación 0..=100: tramos de longitud, mayúscula, dígito, símbolo
/// y bonus de frase de paso (3+ palabras separadas por no-letras).
pub fn strength(pwd: &str) -> u32 {
    let len = pwd.chars().count();
    let mut score = 0;

    if len > 0 {
        score += 5;
    }
    if len >= 8 {
        score += 10;
    }
    if len >= 12 {
        score += 20;
    }
    if len >= 20 {
        score += 40;
    }

    if pwd.chars().any(|c| c.is_ascii_uppercase()) {
        score += 10;
    }
    if pwd.chars().any(|c| c.is_ascii_digit()) {
        score += 10;
    }
    if pwd.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        score += 10;
    }

    if word_groups(pwd) >= 3 && len > 15 {
        score += 30;
    }

    score.min(PASSWORD_MAX_SCORE)
}

/// Cuántas veces aparece "letras seguidas de algo que no es letra".
fn word_groups(pwd: &str) -> usize {
    let mut groups = 0;
    let mut in_word = false;
    for c in pwd.chars() {
        if c.is_ascii_alphabetic() {
            in_word = true;
        } else if in_word {
            groups += 1;
            in_word = false;
        }
    }
    groups
}
