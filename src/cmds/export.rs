// src/cmds/export.rs
use chrono::Local;
use clap::Parser;
use serde::Serialize;
use endless_gas_estimator::core::{Catalog, ComplexityMultipliers, EstimatorError, NetworkConfig, PriceConfig};
use super::Context;

#[derive(Debug, Parser)]
pub struct Opts {
    /// Single-line JSON instead of pretty-printed.
    #[clap(long)]
    compact: bool,
}

/// Referenzdokument: Katalog, Tabelle und Preise in einem Objekt.
#[derive(Serialize)]
struct ExportDocument<'a> {
    generated_at: String,
    network: &'a NetworkConfig,
    prices: &'a PriceConfig,
    actions: &'a Catalog,
    multipliers: &'a ComplexityMultipliers,
}

pub fn run(ctx: &Context, opts: &Opts) -> Result<(), EstimatorError> {
    let document = ExportDocument {
        generated_at: Local::now().to_rfc3339(),
        network: &ctx.config.network_config,
        prices: &ctx.config.price_config,
        actions: &ctx.catalog,
        multipliers: &ctx.multipliers,
    };
    let json = if opts.compact {
        serde_json::to_string(&document)?
    } else {
        serde_json::to_string_pretty(&document)?
    };
    println!("{}", json);
    Ok(())
}
