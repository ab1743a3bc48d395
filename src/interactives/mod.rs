//! Mini-juegos de las diapositivas interactivas.
//!
//! El registro es cerrado: cada clave de `variant` del catálogo corresponde a
//! una variante de [`InteractiveVariant`]; cualquier otra clave no se resuelve
//! y la lección muestra el aviso de "variante desconocida".

pub mod chat_simulation;
pub mod crypto_scanner;
pub mod password_builder;
pub mod term_sorter;
pub mod totp_simulator;
pub mod wifi_simulator;

use chat_simulation::ChatSimulation;
use crypto_scanner::CryptoScanner;
use log::{debug, warn};
use password_builder::PasswordBuilder;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use term_sorter::TermSorter;
use totp_simulator::TotpSimulator;
use wifi_simulator::WifiSimulator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractiveVariant {
    PasswordBuilder,
    TermSorter,
    ChatSimulation,
    WifiSimulator,
    CryptoScanner,
    TotpSimulator,
}

impl InteractiveVariant {
    pub const ALL: [InteractiveVariant; 6] = [
        InteractiveVariant::PasswordBuilder,
        InteractiveVariant::TermSorter,
        InteractiveVariant::ChatSimulation,
        InteractiveVariant::WifiSimulator,
        InteractiveVariant::CryptoScanner,
        InteractiveVariant::TotpSimulator,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            InteractiveVariant::PasswordBuilder => "password-builder",
            InteractiveVariant::TermSorter => "term-sorter",
            InteractiveVariant::ChatSimulation => "chat-simulation",
            InteractiveVariant::WifiSimulator => "wifi-simulator",
            InteractiveVariant::CryptoScanner => "crypto-scanner",
            InteractiveVariant::TotpSimulator => "totp-simulator",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key)
    }
}

/// Garantiza que `onComplete` se señala como mucho una vez por montaje,
/// y solo cuando la condición de éxito se cumple.
#[derive(Clone, Debug, Default)]
pub struct CompletionLatch {
    fired: bool,
}

impl CompletionLatch {
    pub fn fire(&mut self, solved: bool) -> bool {
        if solved && !self.fired {
            self.fired = true;
            true
        } else {
            false
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Solo cuando el alumno rehace la tarea a propósito.
    pub fn reset(&mut self) {
        self.fired = false;
    }
}

#[derive(Clone, Debug)]
pub enum MiniGame {
    PasswordBuilder(PasswordBuilder),
    TermSorter(TermSorter),
    ChatSimulation(ChatSimulation),
    WifiSimulator(WifiSimulator),
    CryptoScanner(CryptoScanner),
    TotpSimulator(TotpSimulator),
}

impl MiniGame {
    pub fn new(
        variant: InteractiveVariant,
        data: Option<&serde_yaml::Value>,
        labels: Option<&BTreeMap<String, String>>,
    ) -> Self {
        match variant {
            InteractiveVariant::PasswordBuilder => MiniGame::PasswordBuilder(PasswordBuilder::new()),
            InteractiveVariant::TermSorter => {
                MiniGame::TermSorter(TermSorter::new(parse_data(variant, data), labels))
            }
            InteractiveVariant::ChatSimulation => {
                MiniGame::ChatSimulation(ChatSimulation::new(parse_data(variant, data)))
            }
            InteractiveVariant::WifiSimulator => {
                MiniGame::WifiSimulator(WifiSimulator::new(parse_data(variant, data)))
            }
            InteractiveVariant::CryptoScanner => {
                MiniGame::CryptoScanner(CryptoScanner::new(parse_data(variant, data)))
            }
            InteractiveVariant::TotpSimulator => MiniGame::TotpSimulator(TotpSimulator::new()),
        }
    }

    pub fn variant(&self) -> InteractiveVariant {
        match self {
            MiniGame::PasswordBuilder(_) => InteractiveVariant::PasswordBuilder,
            MiniGame::TermSorter(_) => InteractiveVariant::TermSorter,
            MiniGame::ChatSimulation(_) => InteractiveVariant::ChatSimulation,
            MiniGame::WifiSimulator(_) => InteractiveVariant::WifiSimulator,
            MiniGame::CryptoScanner(_) => InteractiveVariant::CryptoScanner,
            MiniGame::TotpSimulator(_) => InteractiveVariant::TotpSimulator,
        }
    }

    pub fn is_solved(&self) -> bool {
        match self {
            MiniGame::PasswordBuilder(g) => g.is_solved(),
            MiniGame::TermSorter(g) => g.is_solved(),
            MiniGame::ChatSimulation(g) => g.is_solved(),
            MiniGame::WifiSimulator(g) => g.is_solved(),
            MiniGame::CryptoScanner(g) => g.is_solved(),
            MiniGame::TotpSimulator(g) => g.is_solved(),
        }
    }
}

/// Mini-juego montado en la diapositiva actual.
#[derive(Clone, Debug)]
pub struct ActiveGame {
    pub slide_index: usize,
    pub game: MiniGame,
    /// La diapositiva ya se superó en esta visita (el alumno ha vuelto atrás).
    pub already_completed: bool,
    latch: CompletionLatch,
}

impl ActiveGame {
    pub fn mount(slide_index: usize, game: MiniGame, already_completed: bool) -> Self {
        debug!(
            "Montando '{}' en la diapositiva {} (ya completada: {})",
            game.variant().key(),
            slide_index,
            already_completed
        );
        Self {
            slide_index,
            game,
            already_completed,
            latch: CompletionLatch::default(),
        }
    }

    pub fn can_complete(&self) -> bool {
        !self.latch.has_fired() && (self.already_completed || self.game.is_solved())
    }

    /// `true` la primera vez que se pide con la tarea resuelta.
    pub fn try_complete(&mut self) -> bool {
        let solved = self.already_completed || self.game.is_solved();
        self.latch.fire(solved)
    }

    pub fn restart(&mut self, game: MiniGame) {
        self.game = game;
        self.already_completed = false;
        self.latch.reset();
    }
}

/// Payload opaco de la diapositiva → datos del juego. Si falta o no encaja,
/// el juego usa su escenario por defecto.
fn parse_data<T: DeserializeOwned>(
    variant: InteractiveVariant,
    data: Option<&serde_yaml::Value>,
) -> Option<T> {
    let value = data?;
    match serde_yaml::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(
                "Datos no válidos para '{}' ({e}); se usa el escenario por defecto",
                variant.key()
            );
            None
        }
    }
}
