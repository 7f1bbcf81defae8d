//! Embedded reference data

pub mod cashflow;
pub mod crops;
pub mod tariff;

pub use cashflow::profile_for_crop;
pub use crops::{crop_presets, get_crop_preset};
pub use tariff::reference_tariff_table;
