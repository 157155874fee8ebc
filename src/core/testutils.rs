// src/core/testutils.rs
use crate::core::endless_calculator::SuppliedValues;
use crate::core::endless_catalog::ComplexityMultipliers;
use crate::core::endless_types::{ActionCategory, ActionDescriptor, CostReport, InputFieldDescriptor, InputType};
use rand::Rng;
use rand::seq::SliceRandom;

pub fn supplied_values(pairs: &[(&str, &str)]) -> SuppliedValues {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// Aktion mit je einem gas-relevanten Select-Feld pro ID (ohne Optionsliste).
pub fn descriptor_with_gas_fields(base_gas: u64, variable_gas: Option<u64>, field_ids: &[&str]) -> ActionDescriptor {
    let mut action = ActionDescriptor::new("test-action", "Test Action", "", ActionCategory::Contract, base_gas, base_gas);
    action.variable_gas = variable_gas;
    for id in field_ids {
        action = action.with_input(InputFieldDescriptor::new(id, id, InputType::Select, true).affecting_gas(1.0));
    }
    action
}

pub fn random_descriptor<R: Rng>(rng: &mut R, multipliers: &ComplexityMultipliers) -> ActionDescriptor {
    let keys: Vec<&str> = multipliers.iter().map(|(k, _)| k).collect();
    let variable_gas = if rng.gen_bool(0.8) { Some(rng.gen_range(0..5_000)) } else { None };
    let mut action = ActionDescriptor::new(
        "random-action",
        "Random Action",
        "",
        ActionCategory::ALL[rng.gen_range(0..ActionCategory::ALL.len())],
        rng.gen_range(0..1_000_000),
        rng.gen_range(0..1_000_000),
    );
    action.variable_gas = variable_gas;
    for i in 0..rng.gen_range(0..6) {
        let id = format!("field{}", i);
        let mut input = InputFieldDescriptor::new(&id, &id, InputType::Select, rng.gen_bool(0.5));
        let options: Vec<(&str, &str)> = keys.choose_multiple(rng, 3).map(|k| (*k, *k)).collect();
        input = input.with_options(&options);
        if rng.gen_bool(0.6) {
            input = input.affecting_gas(1.0);
        }
        action = action.with_input(input);
    }
    action
}

/// Pro Feld zufällig: fehlend, leer, gültige Option oder unbekannter Schlüssel.
pub fn random_supplied_values<R: Rng>(rng: &mut R, descriptor: &ActionDescriptor) -> SuppliedValues {
    let mut values = SuppliedValues::new();
    for input in &descriptor.inputs {
        match rng.gen_range(0..4) {
            0 => {}
            1 => {
                values.insert(input.id.clone(), String::new());
            }
            2 => {
                let options: Vec<&str> = input.option_values().collect();
                if let Some(value) = options.choose(rng) {
                    values.insert(input.id.clone(), value.to_string());
                }
            }
            _ => {
                values.insert(input.id.clone(), format!("unknown-{}", rng.gen::<u32>()));
            }
        }
    }
    values
}

pub fn print_report_overview(reports: &[CostReport]) {
    println!("Anzahl Schätzungen: {}", reports.len());
    for report in reports {
        println!("{}", report);
    }
}
