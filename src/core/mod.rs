// src/core/mod.rs
pub mod endless_config;
pub mod endless_types;
pub mod endless_catalog;
pub mod endless_calculator;
pub mod error;
pub mod testutils;

pub use endless_config::{EstimatorConfig, PriceConfig, NetworkConfig};
pub use endless_types::{ActionCategory, ActionDescriptor, InputFieldDescriptor, InputType, SelectOption};
pub use endless_types::{NativeCost, ComparisonCost, Savings, CostReport};
pub use endless_catalog::{Catalog, ComplexityMultipliers, ACTION_CATALOG, COMPLEXITY_MULTIPLIERS, audit_catalog, CatalogAudit, CatalogIssue};
pub use endless_calculator::{
    compute_native_cost, compute_native_cost_with, compute_comparison_cost, compute_comparison_cost_with,
    compute_savings, estimate_action, estimate_action_with, SuppliedValues,
};
pub use error::EstimatorError;

/// Lädt die Konfiguration aus der Umgebung und baut den Katalog auf.
pub fn initialize_core() -> Result<EstimatorConfig, EstimatorError> {
    let config = EstimatorConfig::from_env()?;
    log::info!(
        "Estimator core initialized: {} actions, {} multipliers, config: {}",
        ACTION_CATALOG.len(),
        COMPLEXITY_MULTIPLIERS.len(),
        config
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let _ = env_logger::builder().is_test(true).try_init();
        let config = EstimatorConfig::default();
        assert_eq!(config.price_config.native_gas_price, 0.000001);
        assert_eq!(config.network_config.comparison_symbol, "ETH");
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_sync<T: Send + Sync>(_: &T) {}
        assert_sync(&*ACTION_CATALOG);
        assert_sync(&*COMPLEXITY_MULTIPLIERS);
        assert_sync(&EstimatorConfig::default());
    }
}
