// src/core/endless_config/endless_config_network.rs

use serde::{Serialize, Deserialize};

/// Anzeigenamen des Heimnetzes und der Vergleichs-Chain.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    pub network_name: String,
    pub native_symbol: String,
    pub comparison_network_name: String,
    pub comparison_symbol: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            network_name: "Endless".to_string(),
            native_symbol: "EDS".to_string(),
            comparison_network_name: "Ethereum".to_string(),
            comparison_symbol: "ETH".to_string(),
        }
    }
}
