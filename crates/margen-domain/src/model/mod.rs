//! Domain model types

pub mod crop;
pub mod margin;
pub mod rent;
pub mod tariff;

pub use crop::{CropInputs, DirectCosts};
pub use margin::{MarginBreakdown, MarginResult};
pub use rent::RentTerms;
pub use tariff::{FreightTable, FreightTerms, TariffPoint};
