//! Domain layer for margen-calc
//!
//! Pure calculation services over agronomic and cost inputs. Nothing in
//! this crate performs I/O; tables and inputs are supplied by the caller.

pub mod model;
pub mod service;

pub use model::{
    CropInputs, DirectCosts, FreightTable, FreightTerms, MarginBreakdown, MarginResult,
    RentTerms, TariffPoint,
};
