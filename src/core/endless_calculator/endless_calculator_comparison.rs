// src/core/endless_calculator/endless_calculator_comparison.rs

use crate::core::endless_config::{PriceConfig, GWEI_PER_ETH};
use crate::core::endless_types::ComparisonCost;

pub fn compute_comparison_cost(comparison_gas_units: u64) -> ComparisonCost {
    compute_comparison_cost_with(comparison_gas_units, &PriceConfig::default())
}

/// Linear im Gas; unabhängig von Benutzereingaben.
pub fn compute_comparison_cost_with(comparison_gas_units: u64, prices: &PriceConfig) -> ComparisonCost {
    let native_cost = comparison_gas_units as f64 * prices.comparison_gas_price_gwei / GWEI_PER_ETH;
    let usd_cost = native_cost * prices.comparison_usd_price;
    log::debug!("Comparison cost: {} gas units, {} ETH, ${}", comparison_gas_units, native_cost, usd_cost);
    ComparisonCost { gas_units: comparison_gas_units, native_cost, usd_cost }
}
