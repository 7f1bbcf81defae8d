//! Land rent terms

use margen_types::{Error, Result};
use serde::{Deserialize, Serialize};

/// How the land rent for a crop is agreed.
///
/// Argentine leases are quoted either as a flat USD figure per hectare
/// or as a quantity of a reference commodity (usually soybean) valued
/// at its current price. Both variants resolve to USD per hectare
/// before the margin engine runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RentTerms {
    Flat { usd_per_ha: f64 },
    Commodity {
        quantity_ton_per_ha: f64,
        price_per_ton: f64,
    },
}

impl RentTerms {
    /// Rent per hectare in USD, before occupancy and leased-area scaling.
    pub fn resolve(&self) -> Result<f64> {
        match *self {
            RentTerms::Flat { usd_per_ha } => {
                if usd_per_ha < 0.0 {
                    return Err(Error::InvalidInput(format!(
                        "rent must be non-negative, got {usd_per_ha}"
                    )));
                }
                Ok(usd_per_ha)
            }
            RentTerms::Commodity {
                quantity_ton_per_ha,
                price_per_ton,
            } => {
                if quantity_ton_per_ha < 0.0 || price_per_ton < 0.0 {
                    return Err(Error::InvalidInput(format!(
                        "commodity rent terms must be non-negative, got {quantity_ton_per_ha} t/ha at {price_per_ton} USD/t"
                    )));
                }
                Ok(quantity_ton_per_ha * price_per_ton)
            }
        }
    }
}

impl Default for RentTerms {
    fn default() -> Self {
        RentTerms::Flat { usd_per_ha: 0.0 }
    }
}
