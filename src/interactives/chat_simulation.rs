use serde::Deserialize;

/// Segundos que "escribe" el interlocutor antes de revelar el desenlace.
pub const REPLY_DELAY_SECONDS: f64 = 1.5;

pub const SENDER_ME: &str = "me";
pub const SENDER_SYSTEM: &str = "System";

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub sender: String,
    pub text: String,
}

impl ChatMessage {
    fn new(sender: &str, text: &str) -> Self {
        Self {
            sender: sender.to_string(),
            text: text.to_string(),
        }
    }

    pub fn is_mine(&self) -> bool {
        self.sender == SENDER_ME
    }

    pub fn is_system(&self) -> bool {
        self.sender == SENDER_SYSTEM
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatOption {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
    /// Markdown mostrado en la ventana de explicación.
    #[serde(default)]
    pub explanation: String,
    pub consequence: Option<String>,
    pub reward: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ChatHeader {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ChatScenario {
    pub messages: Vec<ChatMessage>,
    pub options: Vec<ChatOption>,
    pub header: ChatHeader,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatOutcome {
    Safe,
    Hacked,
}

#[derive(Clone, Debug)]
pub struct ChatSimulation {
    scenario: ChatScenario,
    transcript: Vec<ChatMessage>,
    selected: Option<usize>,
    typing_since: Option<f64>,
    outcome: Option<ChatOutcome>,
    pub show_explanation: bool,
}

impl ChatSimulation {
    pub fn new(scenario: Option<ChatScenario>) -> Self {
        let scenario = scenario
            .filter(|s| !s.options.is_empty())
            .unwrap_or_else(default_scenario);
        Self {
            transcript: scenario.messages.clone(),
            scenario,
            selected: None,
            typing_since: None,
            outcome: None,
            show_explanation: false,
        }
    }

    pub fn header(&self) -> &ChatHeader {
        &self.scenario.header
    }

    pub fn options(&self) -> &[ChatOption] {
        &self.scenario.options
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn selected_option(&self) -> Option<&ChatOption> {
        self.selected.and_then(|i| self.scenario.options.get(i))
    }

    pub fn is_typing(&self) -> bool {
        self.typing_since.is_some()
    }

    pub fn outcome(&self) -> Option<ChatOutcome> {
        self.outcome
    }

    /// Solo se puede elegir mientras el diálogo sigue abierto.
    pub fn can_choose(&self) -> bool {
        self.outcome.is_none() && self.typing_since.is_none()
    }

    pub fn choose(&mut self, index: usize, now: f64) -> bool {
        if !self.can_choose() {
            return false;
        }
        let Some(option) = self.scenario.options.get(index) else {
            return false;
        };
        self.transcript.push(ChatMessage::new(SENDER_ME, &option.text));
        self.selected = Some(index);
        self.typing_since = Some(now);
        true
    }

    /// Resuelve la respuesta pendiente cuando pasa el retardo de escritura.
    pub fn tick(&mut self, now: f64) {
        let Some(since) = self.typing_since else {
            return;
        };
        if now - since < REPLY_DELAY_SECONDS {
            return;
        }
        self.typing_since = None;
        let Some(option) = self.selected_option().cloned() else {
            return;
        };

        let (outcome, text) = if option.is_correct {
            (
                ChatOutcome::Safe,
                option
                    .reward
                    .unwrap_or_else(|| "✅ ¡Amenaza evitada!".to_string()),
            )
        } else {
            (
                ChatOutcome::Hacked,
                option
                    .consequence
                    .unwrap_or_else(|| "❌ Has caído en la estafa".to_string()),
            )
        };
        self.transcript.push(ChatMessage::new(SENDER_SYSTEM, &text));
        self.outcome = Some(outcome);
        self.show_explanation = true;
    }

    /// Vuelve al principio del diálogo tras una mala elección.
    pub fn retry(&mut self) {
        self.transcript = self.scenario.messages.clone();
        self.selected = None;
        self.typing_since = None;
        self.outcome = None;
        self.show_explanation = false;
    }

    pub fn is_solved(&self) -> bool {
        self.outcome == Some(ChatOutcome::Safe)
    }
}

fn default_scenario() -> ChatScenario {
    let option = |text: &str, is_correct: bool, explanation: &str, after: &str| ChatOption {
        text: text.to_string(),
        is_correct,
        explanation: explanation.to_string(),
        consequence: (!is_correct).then(|| after.to_string()),
        reward: is_correct.then(|| after.to_string()),
    };

    ChatScenario {
        messages: vec![
            ChatMessage::new(
                "Hacienda",
                "Buenos días. Consta una deuda tributaria pendiente de 854,70 €.",
            ),
            ChatMessage::new(
                "Hacienda",
                "Debe abonarla en 48 horas o se aplicará un recargo del 12% diario. \
                 Pague aquí: agenciatributaria-pagos.com/deuda/9847",
            ),
        ],
        options: vec![
            option(
                "Pago ahora mismo",
                false,
                "❌ **¡Es phishing!**\n\n\
                 🚩 Hacienda no escribe por mensajería\n\n\
                 🚩 Dominio falso (`agenciatributaria-pagos.com`)\n\n\
                 🚩 Urgencia y amenazas artificiales",
                "Has introducido los datos de tu tarjeta. El dinero ha desaparecido 😔",
            ),
            option(
                "Lo compruebo en la sede electrónica oficial",
                true,
                "✅ **¡Exacto!**\n\n\
                 ✓ Las deudas reales aparecen en tu área personal\n\n\
                 ✓ El enlace de pago era sospechoso\n\n\
                 **Recuerda:** verifica siempre por canales oficiales.",
                "✅ ¡No has caído en la trampa!",
            ),
            option(
                "Pregunto al bot @hacienda_ayuda_bot",
                false,
                "⚠️ **¡Cuidado!**\n\n\
                 🚩 Ese bot no existe: los estafadores crean bots con nombres parecidos\n\n\
                 ✓ Entra en la web oficial o llama al teléfono de atención",
                "Has contado tu situación a un bot falso de los estafadores",
            ),
        ],
        header: ChatHeader {
            title: "Hacienda".to_string(),
            subtitle: "últ. vez hace poco".to_string(),
            verified: false,
        },
    }
}
