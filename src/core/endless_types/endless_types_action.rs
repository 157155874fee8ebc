// src/core/endless_types/endless_types_action.rs

use serde::{Serialize, Deserialize};
use std::fmt;
use super::{ActionCategory, InputFieldDescriptor};

/// Katalogeintrag: eine vordefinierte Aktion mit Basis- und variablem Gas.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ActionCategory,
    pub base_gas: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_gas: Option<u64>,
    #[serde(default)]
    pub inputs: Vec<InputFieldDescriptor>,
    pub eth_equivalent_gas: u64,
}

impl ActionDescriptor {
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        category: ActionCategory,
        base_gas: u64,
        eth_equivalent_gas: u64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category,
            base_gas,
            variable_gas: None,
            inputs: Vec::new(),
            eth_equivalent_gas,
        }
    }

    pub fn with_variable_gas(mut self, variable_gas: u64) -> Self {
        self.variable_gas = Some(variable_gas);
        self
    }

    pub fn with_input(mut self, input: InputFieldDescriptor) -> Self {
        self.inputs.push(input);
        self
    }

    #[inline]
    pub fn variable_gas_or_zero(&self) -> u64 {
        self.variable_gas.unwrap_or(0)
    }

    pub fn input(&self, id: &str) -> Option<&InputFieldDescriptor> {
        self.inputs.iter().find(|i| i.id == id)
    }

    pub fn gas_affecting_inputs(&self) -> impl Iterator<Item = &InputFieldDescriptor> {
        self.inputs.iter().filter(|i| i.affects_gas)
    }
}

impl fmt::Display for ActionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] base_gas={} variable_gas={} eth_gas={}",
            self.id,
            self.category,
            self.base_gas,
            self.variable_gas_or_zero(),
            self.eth_equivalent_gas
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::endless_types::InputType;

    #[test]
    fn test_variable_gas_defaults_to_zero() {
        let action = ActionDescriptor::new("send-eds", "Send", "", ActionCategory::Transfer, 21_000, 21_000);
        assert_eq!(action.variable_gas_or_zero(), 0);
        assert_eq!(action.gas_affecting_inputs().count(), 0);
    }

    #[test]
    fn test_camel_case_round_trip_fields() {
        let action = ActionDescriptor::new("x", "X", "", ActionCategory::Nft, 10, 20)
            .with_variable_gas(5)
            .with_input(InputFieldDescriptor::new("size", "Size", InputType::Select, true).affecting_gas(1.0));
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["baseGas"], 10);
        assert_eq!(json["variableGas"], 5);
        assert_eq!(json["ethEquivalentGas"], 20);
        let back: ActionDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back.input("size").map(|i| i.affects_gas), Some(true));
    }
}
