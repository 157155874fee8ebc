// src/lib.rs

pub mod core;

pub use crate::core::{
    initialize_core,
    ActionCategory,
    ActionDescriptor,
    InputFieldDescriptor,
    InputType,
    Catalog,
    ComplexityMultipliers,
    ACTION_CATALOG,
    COMPLEXITY_MULTIPLIERS,
    EstimatorConfig,
    EstimatorError,
    SuppliedValues,
    compute_native_cost,
    compute_comparison_cost,
    compute_savings,
    estimate_action,
};
