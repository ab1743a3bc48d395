use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: u32,
    pub symbol: String,
    pub name: String,
    pub address: String,
    pub holders: String,
    pub is_real: bool,
}

#[derive(Clone, Debug)]
pub struct CryptoScanner {
    tokens: Vec<Token>,
    selected: Option<u32>,
    found_real: bool,
}

impl CryptoScanner {
    pub fn new(tokens: Option<Vec<Token>>) -> Self {
        Self {
            tokens: tokens
                .filter(|t| t.iter().any(|t| t.is_real))
                .unwrap_or_else(default_tokens),
            selected: None,
            found_real: false,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn selected(&self) -> Option<&Token> {
        let id = self.selected?;
        self.tokens.iter().find(|t| t.id == id)
    }

    /// Devuelve si el token elegido es el auténtico.
    pub fn select(&mut self, token_id: u32) -> Option<bool> {
        let is_real = self.tokens.iter().find(|t| t.id == token_id)?.is_real;
        self.selected = Some(token_id);
        self.found_real |= is_real;
        Some(is_real)
    }

    pub fn picked_scam(&self) -> bool {
        self.selected().is_some_and(|t| !t.is_real)
    }

    pub fn is_solved(&self) -> bool {
        self.found_real
    }
}

fn default_tokens() -> Vec<Token> {
    vec![
        Token {
            id: 1,
            symbol: "USDT".into(),
            name: "Tether USD".into(),
            address: "0xdAC17F958D2ee523a2206206994597C13D831ec7".into(),
            holders: "5.000.000+".into(),
            is_real: true,
        },
        Token {
            id: 2,
            symbol: "USDT".into(),
            name: "Tether USD (Promo)".into(),
            address: "0xFaKe...8821".into(),
            holders: "124".into(),
            is_real: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picking_the_scam_is_not_a_solution() {
        let mut scanner = CryptoScanner::new(None);
        assert_eq!(scanner.select(2), Some(false));
        assert!(scanner.picked_scam());
        assert!(!scanner.is_solved());
    }

    #[test]
    fn real_token_solves_and_sticks() {
        let mut scanner = CryptoScanner::new(None);
        assert_eq!(scanner.select(1), Some(true));
        scanner.select(2);
        assert!(scanner.is_solved());
        assert_eq!(scanner.select(42), None);
    }

    #[test]
    fn payload_without_real_token_uses_default() {
        let yaml = "- { id: 1, symbol: X, name: X, address: '0x0', holders: '1', isReal: false }";
        let tokens: Vec<Token> = serde_yaml::from_str(yaml).unwrap();
        let scanner = CryptoScanner::new(Some(tokens));
        assert_eq!(scanner.tokens().len(), 2);
    }
}
