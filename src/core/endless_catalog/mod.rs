// src/core/endless_catalog/mod.rs

use serde::{Serialize, Deserialize};
use std::fs;
use std::path::Path;
use once_cell::sync::Lazy;
use log::info;
use crate::core::endless_types::{ActionCategory, ActionDescriptor};
use crate::core::error::EstimatorError;

pub mod endless_catalog_actions;
pub mod endless_catalog_multipliers;
pub mod endless_catalog_audit;

pub use endless_catalog_actions::builtin_actions;
pub use endless_catalog_multipliers::{ComplexityMultipliers, COMPLEXITY_MULTIPLIERS, DEFAULT_MULTIPLIER};
pub use endless_catalog_audit::{audit_catalog, CatalogAudit, CatalogIssue, IssueSeverity};

/// Eingebauter Katalog, einmalig beim ersten Zugriff aufgebaut und danach unveränderlich.
pub static ACTION_CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::new(builtin_actions()));

/// Geordnete Liste von Aktionen. Beim Laden findet keine Validierung statt (siehe `audit_catalog`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Catalog {
    actions: Vec<ActionDescriptor>,
}

impl Catalog {
    pub fn new(actions: Vec<ActionDescriptor>) -> Self {
        Catalog { actions }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionDescriptor> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Erster Treffer bei doppelten IDs.
    pub fn get(&self, id: &str) -> Option<&ActionDescriptor> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&ActionDescriptor, EstimatorError> {
        self.get(id).ok_or_else(|| EstimatorError::UnknownAction(id.to_string()))
    }

    pub fn by_category(&self, category: ActionCategory) -> impl Iterator<Item = &ActionDescriptor> {
        self.actions.iter().filter(move |a| a.category == category)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, EstimatorError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        info!("Loaded catalog with {} actions", catalog.len());
        Ok(catalog)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, EstimatorError> {
        let raw = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    pub fn to_json_pretty(&self) -> Result<String, EstimatorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        assert_eq!(ACTION_CATALOG.len(), 8);
        let send = ACTION_CATALOG.get("send-eds").unwrap();
        assert_eq!(send.base_gas, 21_000);
        assert_eq!(send.variable_gas, None);
        assert_eq!(send.eth_equivalent_gas, 21_000);

        let deploy = ACTION_CATALOG.get("deploy-contract").unwrap();
        assert_eq!(deploy.variable_gas, Some(1_000));
        assert_eq!(deploy.input("hasConstructor").and_then(|i| i.gas_multiplier), Some(0.5));
    }

    #[test]
    fn test_lookup() {
        assert!(ACTION_CATALOG.get("warp-drive").is_none());
        assert!(matches!(
            ACTION_CATALOG.require("warp-drive"),
            Err(EstimatorError::UnknownAction(_))
        ));
        let defi: Vec<_> = ACTION_CATALOG.by_category(ActionCategory::Defi).map(|a| a.id.as_str()).collect();
        assert_eq!(defi, vec!["stake-eds", "swap-tokens"]);
    }

    #[test]
    fn test_catalog_json_round_trip() {
        let json = ACTION_CATALOG.to_json_pretty().unwrap();
        assert!(json.contains("\"ethEquivalentGas\": 800000"));
        let parsed = Catalog::from_json_str(&json).unwrap();
        assert_eq!(&parsed, &*ACTION_CATALOG);
    }

    #[test]
    fn test_malformed_select_loads_without_validation() {
        let raw = r#"[{
            "id": "broken", "name": "Broken", "description": "", "category": "nft",
            "baseGas": 1000, "ethEquivalentGas": 2000,
            "inputs": [{ "id": "size", "label": "Size", "type": "select", "required": true }]
        }]"#;
        let catalog = Catalog::from_json_str(raw).unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
