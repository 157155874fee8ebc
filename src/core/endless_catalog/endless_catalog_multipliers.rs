// src/core/endless_catalog/endless_catalog_multipliers.rs

use serde::Serialize;
use std::collections::BTreeMap;
use once_cell::sync::Lazy;
use log::debug;
use crate::core::error::EstimatorError;

/// Globale, flache Multiplikator-Tabelle. Schlüssel sind nicht pro Aktion getrennt:
/// gleiche Optionswerte in verschiedenen Aktionen teilen sich denselben Multiplikator.
pub static COMPLEXITY_MULTIPLIERS: Lazy<ComplexityMultipliers> = Lazy::new(ComplexityMultipliers::builtin);

pub const DEFAULT_MULTIPLIER: f64 = 1.0;

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct ComplexityMultipliers {
    entries: BTreeMap<String, f64>,
}

impl ComplexityMultipliers {
    pub fn new() -> Self {
        Self::default()
    }

    fn builtin() -> Self {
        let entries = [
            ("simple", 1.0),
            ("moderate", 1.5),
            ("complex", 2.5),
            ("small", 1.0),
            ("medium", 2.0),
            ("large", 3.5),
            ("none", 1.0),
            ("minimal", 1.0),
            ("standard", 1.5),
            ("full", 2.0),
            ("parameter", 1.0),
            ("upgrade", 1.8),
            ("treasury", 1.5),
        ];
        ComplexityMultipliers {
            entries: entries.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    pub fn insert(&mut self, key: &str, value: f64) -> Result<(), EstimatorError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(EstimatorError::InvalidMultiplier { key: key.to_string(), value });
        }
        if let Some(previous) = self.entries.insert(key.to_string(), value) {
            debug!("Multiplier '{}' replaced: {} -> {}", key, previous, value);
        }
        Ok(())
    }

    /// Unbekannte Schlüssel ergeben 1.
    #[inline]
    pub fn multiplier_for(&self, key: &str) -> f64 {
        self.entries.get(key).copied().unwrap_or(DEFAULT_MULTIPLIER)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn from_json_str(raw: &str) -> Result<Self, EstimatorError> {
        let parsed: BTreeMap<String, f64> = serde_json::from_str(raw)?;
        let mut table = Self::new();
        for (key, value) in parsed {
            table.insert(&key, value)?;
        }
        Ok(table)
    }
}
