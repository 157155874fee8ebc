// src/cmds/lint.rs
use clap::Parser;
use endless_gas_estimator::core::{audit_catalog, EstimatorError};
use super::Context;

#[derive(Debug, Parser)]
pub struct Opts {
    /// Also fail when the audit only reports warnings.
    #[clap(long)]
    strict: bool,
}

pub fn run(ctx: &Context, opts: &Opts) -> Result<(), EstimatorError> {
    let audit = audit_catalog(&ctx.catalog, &ctx.multipliers);
    for issue in audit.errors() {
        println!("error: {}", issue);
    }
    for issue in audit.warnings() {
        println!("warning: {}", issue);
    }

    let errors = audit.errors().count();
    let warnings = audit.warnings().count();
    println!("{} actions checked: {} errors, {} warnings", ctx.catalog.len(), errors, warnings);

    if errors > 0 || (opts.strict && warnings > 0) {
        return Err(EstimatorError::Config(format!("catalog audit failed: {} errors, {} warnings", errors, warnings)));
    }
    Ok(())
}
