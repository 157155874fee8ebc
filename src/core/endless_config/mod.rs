// src/core/endless_config/mod.rs

use serde::{Serialize, Deserialize};
use std::fmt;
use std::fs;
use std::path::Path;
use log::info;
use crate::core::error::EstimatorError;

pub mod endless_config_prices;
pub mod endless_config_network;

pub use endless_config_prices::*;
pub use endless_config_network::*;

/// Grundlegende Konfiguration des Gas-Estimators. Nach dem Laden unveränderlich.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct EstimatorConfig {
    pub price_config: PriceConfig,
    pub network_config: NetworkConfig,
}

impl EstimatorConfig {
    /// Defaults plus Overrides aus `.env` (falls vorhanden) und der Prozessumgebung.
    pub fn from_env() -> Result<Self, EstimatorError> {
        Self::default().apply_env()
    }

    /// Liest Overrides aus einer dotenv-Datei, ohne die Prozessumgebung zu verändern.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self, EstimatorError> {
        let vars = dotenv::from_path_iter(path.as_ref())?
            .collect::<Result<Vec<(String, String)>, dotenv::Error>>()?;
        let price_config = PriceConfig::default().with_overrides(vars)?;
        info!("Loaded price overrides from {}", path.as_ref().display());
        Ok(EstimatorConfig { price_config, network_config: NetworkConfig::default() })
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, EstimatorError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let config: EstimatorConfig = serde_json::from_str(&raw)?;
        config.price_config.validate()?;
        info!("Loaded estimator config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn apply_env(mut self) -> Result<Self, EstimatorError> {
        if let Ok(path) = dotenv::dotenv() {
            info!("Loaded environment from {}", path.display());
        }
        self.price_config = self.price_config.with_overrides(std::env::vars())?;
        Ok(self)
    }
}

impl fmt::Display for EstimatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prices: {:?}, Network: {:?}", self.price_config, self.network_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = EstimatorConfig::default();
        assert_eq!(config.price_config.native_gas_price, 0.000001);
        assert_eq!(config.price_config.native_usd_price, 0.0847);
        assert_eq!(config.price_config.comparison_usd_price, 3245.67);
        assert_eq!(config.price_config.comparison_gas_price_gwei, 25.0);
        assert_eq!(config.network_config.native_symbol, "EDS");
    }

    #[test]
    fn test_partial_json_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "price_config": {{ "comparison_gas_price_gwei": 40.0 }} }}"#).unwrap();
        let config = EstimatorConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.price_config.comparison_gas_price_gwei, 40.0);
        assert_eq!(config.price_config.native_usd_price, 0.0847);
        assert_eq!(config.network_config, NetworkConfig::default());
    }

    #[test]
    fn test_env_file_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ENDLESS_NATIVE_USD_PRICE=0.25").unwrap();
        writeln!(file, "UNRELATED=1").unwrap();
        let config = EstimatorConfig::from_env_file(file.path()).unwrap();
        assert_eq!(config.price_config.native_usd_price, 0.25);
        assert_eq!(config.price_config.native_gas_price, 0.000001);
    }

    #[test]
    fn test_missing_json_file() {
        let result = EstimatorConfig::from_json_file("/definitely/not/here.json");
        assert!(matches!(result, Err(EstimatorError::Io(_))));
    }
}
