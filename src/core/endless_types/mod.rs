// src/core/endless_types/mod.rs
pub mod endless_types_category;
pub mod endless_types_input;
pub mod endless_types_action;
pub mod endless_types_estimate;

pub use endless_types_category::ActionCategory;
pub use endless_types_input::{InputFieldDescriptor, InputType, SelectOption};
pub use endless_types_action::ActionDescriptor;
pub use endless_types_estimate::{NativeCost, ComparisonCost, Savings, CostReport, format_gas_units};
