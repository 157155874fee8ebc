// src/cmds/estimate.rs
use clap::Parser;
use endless_gas_estimator::core::{estimate_action_with, EstimatorError, SuppliedValues};
use super::Context;

#[derive(Debug, Parser)]
pub struct Opts {
    /// Action id, e.g. `call-contract`.
    action: String,

    /// Input value as `field=value`; may be repeated.
    #[clap(long = "set", short = 's', value_parser = parse_key_val)]
    values: Vec<(String, String)>,

    /// Print the report as JSON.
    #[clap(long)]
    json: bool,
}

fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected field=value, got '{}'", raw))?;
    if key.is_empty() {
        return Err(format!("missing field name in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

pub fn run(ctx: &Context, opts: &Opts) -> Result<(), EstimatorError> {
    let action = ctx.catalog.require(&opts.action)?;
    let supplied: SuppliedValues = opts.values.iter().cloned().collect();
    for key in supplied.keys() {
        if action.input(key).is_none() {
            log::warn!("Action {} has no input '{}', ignoring it", action.id, key);
        }
    }

    let report = estimate_action_with(action, &supplied, &ctx.config, &ctx.multipliers);
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(parse_key_val("complexity=moderate").unwrap(), ("complexity".into(), "moderate".into()));
        assert_eq!(parse_key_val("amount=").unwrap(), ("amount".into(), String::new()));
        assert!(parse_key_val("complexity").is_err());
        assert!(parse_key_val("=x").is_err());
    }
}
