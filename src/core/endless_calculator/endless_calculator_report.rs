// src/core/endless_calculator/endless_calculator_report.rs

use super::{compute_comparison_cost_with, compute_native_cost_with, SuppliedValues};
use crate::core::endless_catalog::{ComplexityMultipliers, COMPLEXITY_MULTIPLIERS};
use crate::core::endless_config::EstimatorConfig;
use crate::core::endless_types::{ActionDescriptor, ComparisonCost, CostReport, NativeCost, Savings};

/// Ersparnis gegenüber der Vergleichs-Chain. Prozentwert nur bei Vergleichskosten > 0.
pub fn compute_savings(native: &NativeCost, comparison: &ComparisonCost) -> Savings {
    let usd = comparison.usd_cost - native.usd_cost;
    let percent = if comparison.usd_cost != 0.0 {
        Some(usd / comparison.usd_cost * 100.0).filter(|p| p.is_finite())
    } else {
        None
    };
    Savings { usd, percent }
}

pub fn estimate_action(descriptor: &ActionDescriptor, supplied: &SuppliedValues, config: &EstimatorConfig) -> CostReport {
    estimate_action_with(descriptor, supplied, config, &COMPLEXITY_MULTIPLIERS)
}

pub fn estimate_action_with(
    descriptor: &ActionDescriptor,
    supplied: &SuppliedValues,
    config: &EstimatorConfig,
    multipliers: &ComplexityMultipliers,
) -> CostReport {
    let native = compute_native_cost_with(descriptor, supplied, &config.price_config, multipliers);
    let comparison = compute_comparison_cost_with(descriptor.eth_equivalent_gas, &config.price_config);
    let savings = compute_savings(&native, &comparison);
    CostReport {
        action_id: descriptor.id.clone(),
        action_name: descriptor.name.clone(),
        native_symbol: config.network_config.native_symbol.clone(),
        comparison_symbol: config.network_config.comparison_symbol.clone(),
        native,
        comparison,
        savings,
    }
}
