use crate::constants::{TOTP_CODE_LEN, TOTP_PERIOD_SECONDS};
use crate::content_utils::digits_only;
use rand::Rng;

/// Autenticador de juguete: un código de 6 dígitos que caduca cada 30 s.
/// El tiempo lo marca quien llama (`ctx.input(|i| i.time)` en la UI).
#[derive(Clone, Debug)]
pub struct TotpSimulator {
    code: String,
    input: String,
    period_start: Option<f64>,
    error: Option<String>,
    solved: bool,
}

fn generate_code() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}

impl TotpSimulator {
    pub fn new() -> Self {
        Self::with_code(generate_code())
    }

    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            input: String::new(),
            period_start: None,
            error: None,
            solved: false,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// "123 456", como lo muestra la app del móvil.
    pub fn display_code(&self) -> String {
        let split = self.code.len().min(3);
        format!("{} {}", &self.code[..split], &self.code[split..])
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Rota el código al vencer cada periodo. Parado una vez resuelto.
    pub fn tick(&mut self, now: f64) {
        if self.solved {
            return;
        }
        let period = f64::from(TOTP_PERIOD_SECONDS);
        let start = *self.period_start.get_or_insert(now);
        if now - start >= period {
            let elapsed_periods = ((now - start) / period).floor();
            self.period_start = Some(start + elapsed_periods * period);
            self.code = generate_code();
            log::debug!("Código TOTP caducado, se genera otro");
        }
    }

    pub fn seconds_left(&self, now: f64) -> u32 {
        let period = f64::from(TOTP_PERIOD_SECONDS);
        let Some(start) = self.period_start else {
            return TOTP_PERIOD_SECONDS;
        };
        let left = (period - (now - start)).ceil().clamp(0.0, period);
        left as u32
    }

    /// Filtra la entrada a dígitos y la comprueba al llegar a 6.
    pub fn set_input(&mut self, raw: &str) {
        if self.solved {
            return;
        }
        self.input = digits_only(raw, TOTP_CODE_LEN);
        self.error = None;
        if self.input.len() == TOTP_CODE_LEN {
            if self.input == self.code {
                self.solved = true;
            } else {
                self.error =
                    Some("¡Código incorrecto! ¿Quizá ya se había renovado?".to_string());
            }
        }
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }
}

impl Default for TotpSimulator {
    fn default() -> Self {
        Self::new()
    }
}
