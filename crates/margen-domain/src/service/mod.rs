//! Domain services

pub mod cashflow;
pub mod comparison;
pub mod margin_engine;
pub mod rotation;
pub mod sensitivity;

pub use comparison::{compare_crops, generate_comparison_report, CropMargin};
pub use margin_engine::compute_margin;
pub use rotation::{summarize_rotation, RotationSummary};
pub use sensitivity::{elasticity, scenario_table, SensitivityScenario};
