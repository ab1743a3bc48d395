use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    Trap,
    Safe,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Network {
    pub id: u32,
    pub ssid: String,
    pub secured: bool,
    #[serde(rename = "type")]
    pub kind: NetworkKind,
    pub bssid: String,
    pub security: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WifiFeedback {
    /// Conectado con VPN.
    Success,
    /// Red con contraseña pero sin VPN. Aceptable.
    Warning,
    /// Red trampa sin VPN.
    Error,
}

#[derive(Clone, Debug)]
pub struct WifiSimulator {
    networks: Vec<Network>,
    pub vpn_enabled: bool,
    pub scan_mode: bool,
    selected: Option<u32>,
    feedback: Option<WifiFeedback>,
}

impl WifiSimulator {
    pub fn new(networks: Option<Vec<Network>>) -> Self {
        Self {
            networks: networks
                .filter(|n| !n.is_empty())
                .unwrap_or_else(default_networks),
            vpn_enabled: false,
            scan_mode: false,
            selected: None,
            feedback: None,
        }
    }

    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn feedback(&self) -> Option<WifiFeedback> {
        self.feedback
    }

    pub fn toggle_vpn(&mut self) {
        self.vpn_enabled = !self.vpn_enabled;
    }

    pub fn toggle_scan(&mut self) {
        self.scan_mode = !self.scan_mode;
    }

    pub fn connect(&mut self, network_id: u32) -> Option<WifiFeedback> {
        let network = self.networks.iter().find(|n| n.id == network_id)?;
        let feedback = if self.vpn_enabled {
            WifiFeedback::Success
        } else if network.kind == NetworkKind::Trap {
            WifiFeedback::Error
        } else {
            WifiFeedback::Warning
        };
        self.selected = Some(network_id);
        self.feedback = Some(feedback);
        Some(feedback)
    }

    /// Cierra el aviso de red trampa para volver a intentarlo.
    pub fn dismiss_error(&mut self) {
        if self.feedback == Some(WifiFeedback::Error) {
            self.feedback = None;
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(
            self.feedback,
            Some(WifiFeedback::Success | WifiFeedback::Warning)
        )
    }
}

fn default_networks() -> Vec<Network> {
    [
        (1, "Cafe_Verano_Gratis", false, NetworkKind::Trap, "02:00:00:00:01", "OPEN"),
        (2, "Cafe_Verano_Oficial", true, NetworkKind::Safe, "AA:BB:CC:DD:EE", "WPA2"),
        (3, "WiFi_Rapida_Gratis", true, NetworkKind::Safe, "11:22:33:44:55", "WPA2"),
        // gemelo malvado
        (4, "WiFi_Rapida_Gratis", false, NetworkKind::Trap, "DE:AD:BE:EF:00", "OPEN"),
    ]
    .into_iter()
    .map(|(id, ssid, secured, kind, bssid, security)| Network {
        id,
        ssid: ssid.to_string(),
        secured,
        kind,
        bssid: bssid.to_string(),
        security: security.to_string(),
    })
    .collect()
}
