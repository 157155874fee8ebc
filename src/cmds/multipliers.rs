// src/cmds/multipliers.rs
use clap::Parser;
use endless_gas_estimator::core::EstimatorError;
use super::Context;

#[derive(Debug, Parser)]
pub struct Opts {}

pub fn run(ctx: &Context, _opts: &Opts) -> Result<(), EstimatorError> {
    println!("Complexity multipliers (unknown keys use 1.0):");
    for (key, value) in ctx.multipliers.iter() {
        println!("  {:<12} x{}", key, value);
    }
    Ok(())
}
