// src/cmds/list.rs
use clap::Parser;
use endless_gas_estimator::core::{ActionCategory, EstimatorError};
use endless_gas_estimator::core::endless_types::format_gas_units;
use super::Context;

#[derive(Debug, Parser)]
pub struct Opts {
    /// Only show actions of this category (transfer, contract, nft, defi, governance).
    #[clap(long)]
    category: Option<ActionCategory>,
}

pub fn run(ctx: &Context, opts: &Opts) -> Result<(), EstimatorError> {
    for category in ActionCategory::ALL {
        if opts.category.is_some_and(|c| c != category) {
            continue;
        }
        let actions: Vec<_> = ctx.catalog.by_category(category).collect();
        if actions.is_empty() {
            continue;
        }
        println!("{} - {}", category, category.description());
        for action in actions {
            println!(
                "  {:<18} {:<30} base {:>9}  variable {:>6}  {} {:>9}",
                action.id,
                action.name,
                format_gas_units(action.base_gas as f64),
                action.variable_gas_or_zero(),
                ctx.config.network_config.comparison_symbol,
                format_gas_units(action.eth_equivalent_gas as f64),
            );
        }
    }
    Ok(())
}
