// src/core/endless_calculator/endless_calculator_native.rs

use std::collections::HashMap;
use crate::core::endless_catalog::{ComplexityMultipliers, COMPLEXITY_MULTIPLIERS};
use crate::core::endless_config::PriceConfig;
use crate::core::endless_types::{ActionDescriptor, NativeCost};

/// Feld-ID -> roher Eingabewert aus der Oberfläche.
pub type SuppliedValues = HashMap<String, String>;

/// Skalierung des variablen Gas-Anteils pro gefülltem, gas-relevantem Feld.
pub const VARIABLE_GAS_SCALE: f64 = 100.0;

/// Kosten mit eingebauter Multiplikator-Tabelle und Standardpreisen.
pub fn compute_native_cost(descriptor: &ActionDescriptor, supplied: &SuppliedValues) -> NativeCost {
    compute_native_cost_with(descriptor, supplied, &PriceConfig::default(), &COMPLEXITY_MULTIPLIERS)
}

/// Total: fehlende oder leere Werte zählen schlicht nicht, unbekannte Werte mit Multiplikator 1.
pub fn compute_native_cost_with(
    descriptor: &ActionDescriptor,
    supplied: &SuppliedValues,
    prices: &PriceConfig,
    multipliers: &ComplexityMultipliers,
) -> NativeCost {
    let variable_gas = descriptor.variable_gas_or_zero() as f64;
    let mut gas_units = descriptor.base_gas as f64;

    for input in descriptor.gas_affecting_inputs() {
        let value = match supplied.get(&input.id) {
            Some(value) if !value.is_empty() => value,
            _ => continue,
        };
        let multiplier = multipliers.multiplier_for(value);
        gas_units += variable_gas * multiplier * VARIABLE_GAS_SCALE;
        log::trace!("{}.{}={} -> multiplier {}", descriptor.id, input.id, value, multiplier);
    }

    let native_cost = gas_units * prices.native_gas_price;
    let usd_cost = native_cost * prices.native_usd_price;

    log::debug!(
        "Native cost for {}: {} gas units, {} EDS, ${}",
        descriptor.id, gas_units, native_cost, usd_cost
    );
    NativeCost { gas_units, native_cost, usd_cost }
}
