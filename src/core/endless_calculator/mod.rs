// src/core/endless_calculator/mod.rs
pub mod endless_calculator_native;
pub mod endless_calculator_comparison;
pub mod endless_calculator_report;

pub use endless_calculator_native::*;
pub use endless_calculator_comparison::*;
pub use endless_calculator_report::*;
