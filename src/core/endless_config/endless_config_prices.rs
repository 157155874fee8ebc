// src/core/endless_config/endless_config_prices.rs

use serde::{Serialize, Deserialize};
use log::debug;
use crate::core::error::EstimatorError;

pub const ENV_NATIVE_GAS_PRICE: &str = "ENDLESS_NATIVE_GAS_PRICE";
pub const ENV_NATIVE_USD_PRICE: &str = "ENDLESS_NATIVE_USD_PRICE";
pub const ENV_COMPARISON_USD_PRICE: &str = "ENDLESS_COMPARISON_USD_PRICE";
pub const ENV_COMPARISON_GAS_PRICE_GWEI: &str = "ENDLESS_COMPARISON_GAS_PRICE_GWEI";

/// Gwei pro ETH.
pub const GWEI_PER_ETH: f64 = 1e9;

/// Feste Preiskonstanten für die Kostenumrechnung (keine Live-Oracle-Daten).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PriceConfig {
    pub native_gas_price: f64, // EDS pro Gas-Einheit
    pub native_usd_price: f64, // USD pro EDS
    pub comparison_usd_price: f64, // USD pro ETH
    pub comparison_gas_price_gwei: f64, // Durchschnittlicher Ethereum-Gaspreis
}

impl Default for PriceConfig {
    fn default() -> Self {
        PriceConfig {
            native_gas_price: 0.000001,
            native_usd_price: 0.0847,
            comparison_usd_price: 3245.67,
            comparison_gas_price_gwei: 25.0,
        }
    }
}

impl PriceConfig {
    /// Übernimmt bekannte `ENDLESS_*`-Schlüssel, alle anderen werden ignoriert.
    pub fn with_overrides<I, K, V>(mut self, vars: I) -> Result<Self, EstimatorError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let slot = match key.as_ref() {
                ENV_NATIVE_GAS_PRICE => &mut self.native_gas_price,
                ENV_NATIVE_USD_PRICE => &mut self.native_usd_price,
                ENV_COMPARISON_USD_PRICE => &mut self.comparison_usd_price,
                ENV_COMPARISON_GAS_PRICE_GWEI => &mut self.comparison_gas_price_gwei,
                _ => continue,
            };
            let parsed: f64 = value.as_ref().trim().parse().map_err(|e| {
                EstimatorError::Config(format!("{}={:?}: {}", key.as_ref(), value.as_ref(), e))
            })?;
            debug!("Price override {}={}", key.as_ref(), parsed);
            *slot = parsed;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), EstimatorError> {
        let fields = [
            ("native_gas_price", self.native_gas_price),
            ("native_usd_price", self.native_usd_price),
            ("comparison_usd_price", self.comparison_usd_price),
            ("comparison_gas_price_gwei", self.comparison_gas_price_gwei),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(EstimatorError::Config(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }
        debug!(
            "Prices: {} EDS/gas, ${} per EDS, {} gwei, ${} per ETH",
            self.native_gas_price, self.native_usd_price, self.comparison_gas_price_gwei, self.comparison_usd_price
        );
        Ok(())
    }
}
