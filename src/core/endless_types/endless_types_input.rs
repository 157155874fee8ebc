// src/core/endless_types/endless_types_input.rs

use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Number,
    Text,
    Address,
    Select,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Eingabefeld einer Aktion. Nur `affects_gas` fließt in die Berechnung ein.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InputFieldDescriptor {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub input_type: InputType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    #[serde(default)]
    pub affects_gas: bool,
    /// Wird mitgeführt, aber von der Berechnung nicht gelesen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_multiplier: Option<f64>,
}

impl InputFieldDescriptor {
    pub fn new(id: &str, label: &str, input_type: InputType, required: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            input_type,
            placeholder: None,
            required,
            options: None,
            affects_gas: false,
            gas_multiplier: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn with_options(mut self, options: &[(&str, &str)]) -> Self {
        self.options = Some(
            options
                .iter()
                .map(|(value, label)| SelectOption { value: value.to_string(), label: label.to_string() })
                .collect(),
        );
        self
    }

    pub fn affecting_gas(mut self, gas_multiplier: f64) -> Self {
        self.affects_gas = true;
        self.gas_multiplier = Some(gas_multiplier);
        self
    }

    pub fn option_values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().flatten().map(|o| o.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_json_shape() {
        let field = InputFieldDescriptor::new("complexity", "Function Complexity", InputType::Select, true)
            .with_options(&[("simple", "Simple")])
            .affecting_gas(1.0);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "select");
        assert_eq!(json["affectsGas"], true);
        assert_eq!(json["gasMultiplier"], 1.0);
        assert!(json.get("placeholder").is_none());
    }

    #[test]
    fn test_affects_gas_defaults_false() {
        let field: InputFieldDescriptor = serde_json::from_str(
            r#"{ "id": "amount", "label": "Amount", "type": "number", "required": true }"#,
        )
        .unwrap();
        assert!(!field.affects_gas);
        assert_eq!(field.option_values().count(), 0);
    }
}
