// src/cmds/mod.rs
pub mod list;
pub mod estimate;
pub mod multipliers;
pub mod export;
pub mod lint;

use std::path::PathBuf;
use clap::Args;
use endless_gas_estimator::core::{initialize_core, Catalog, ComplexityMultipliers, EstimatorConfig, EstimatorError};
use endless_gas_estimator::{ACTION_CATALOG, COMPLEXITY_MULTIPLIERS};

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// JSON config with prices and network names; ENDLESS_* variables override it.
    #[clap(long, global = true, env = "ENDLESS_ESTIMATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Load the action catalog from a JSON file instead of the built-in one.
    #[clap(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Load the complexity multiplier table from a JSON object.
    #[clap(long, global = true)]
    pub multipliers: Option<PathBuf>,
}

pub struct Context {
    pub config: EstimatorConfig,
    pub catalog: Catalog,
    pub multipliers: ComplexityMultipliers,
}

impl Context {
    pub fn load(opts: &GlobalOpts) -> Result<Self, EstimatorError> {
        let config = match &opts.config {
            Some(path) => EstimatorConfig::from_json_file(path)?.apply_env()?,
            None => initialize_core()?,
        };
        let catalog = match &opts.catalog {
            Some(path) => Catalog::from_json_file(path)?,
            None => ACTION_CATALOG.clone(),
        };
        let multipliers = match &opts.multipliers {
            Some(path) => ComplexityMultipliers::from_json_str(&std::fs::read_to_string(path)?)?,
            None => COMPLEXITY_MULTIPLIERS.clone(),
        };
        Ok(Context { config, catalog, multipliers })
    }
}
