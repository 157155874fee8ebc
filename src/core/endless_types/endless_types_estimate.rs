// src/core/endless_types/endless_types_estimate.rs

use serde::{Serialize, Deserialize};
use std::fmt;

/// Ergebnis auf dem Endless-Netz: Gas-Einheiten, Kosten in EDS und USD.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct NativeCost {
    pub gas_units: f64,
    pub native_cost: f64,
    pub usd_cost: f64,
}

/// Ergebnis auf der Vergleichs-Chain (Ethereum).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ComparisonCost {
    pub gas_units: u64,
    pub native_cost: f64,
    pub usd_cost: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Savings {
    pub usd: f64,
    /// `None`, wenn die Vergleichskosten 0 sind.
    pub percent: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CostReport {
    pub action_id: String,
    pub action_name: String,
    pub native_symbol: String,
    pub comparison_symbol: String,
    pub native: NativeCost,
    pub comparison: ComparisonCost,
    pub savings: Savings,
}

impl fmt::Display for CostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.action_name, self.action_id)?;
        writeln!(
            f,
            "  {:<10} gas units: {:>12} | {:.6} {} | ${:.6}",
            self.native_symbol,
            format_gas_units(self.native.gas_units),
            self.native.native_cost,
            self.native_symbol,
            self.native.usd_cost
        )?;
        writeln!(
            f,
            "  {:<10} gas units: {:>12} | {:.6} {} | ${:.4}",
            self.comparison_symbol,
            format_gas_units(self.comparison.gas_units as f64),
            self.comparison.native_cost,
            self.comparison_symbol,
            self.comparison.usd_cost
        )?;
        match self.savings.percent {
            Some(percent) => write!(f, "  savings: ${:.4} ({:.1}%)", self.savings.usd, percent),
            None => write!(f, "  savings: ${:.4} (n/a)", self.savings.usd),
        }
    }
}

/// Tausendertrennzeichen, bis zu drei Nachkommastellen.
pub fn format_gas_units(gas_units: f64) -> String {
    let rounded = (gas_units * 1000.0).round() / 1000.0;
    let whole = rounded.trunc() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let fraction = rounded.fract();
    if fraction > 0.0 {
        let decimals = format!("{:.3}", fraction);
        grouped.push_str(decimals.trim_start_matches('0').trim_end_matches('0'));
    }
    grouped
}
