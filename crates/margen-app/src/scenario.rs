//! Scenario files (TOML)
//!
//! A scenario file describes one crop with freight and rent still in
//! their declared terms; resolution against the tariff table and the
//! configured exchange rate happens here, before the engine runs.

use std::path::Path;

use margen_domain::model::{CropInputs, DirectCosts, FreightTable, FreightTerms, RentTerms};
use margen_types::{ConfigError, Error, Result};
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// One crop scenario as declared in a TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub area_ha: f64,
    pub yield_ton_per_ha: f64,
    pub price_per_ton: f64,
    #[serde(default)]
    pub direct_costs: DirectCosts,
    #[serde(default)]
    pub marketing_cost_per_ha: f64,
    #[serde(default)]
    pub gross_receipts_tax_pct: f64,
    #[serde(default)]
    pub overhead_per_ha: f64,
    #[serde(default)]
    pub harvest_cost_per_ha: f64,
    #[serde(default = "default_freight")]
    pub freight: FreightTerms,
    #[serde(default)]
    pub rent: RentTerms,
    #[serde(default = "default_occupancy")]
    pub occupancy_factor: f64,
    #[serde(default)]
    pub leased_area_fraction: f64,
    /// Overrides the configured exchange rate when present
    #[serde(default)]
    pub exchange_rate: Option<f64>,
}

fn default_freight() -> FreightTerms {
    FreightTerms::ManualUsd { usd_per_ton: 0.0 }
}

fn default_occupancy() -> f64 {
    1.0
}

impl Scenario {
    /// Load a scenario from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(format!(
                "Scenario file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let scenario: Scenario = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(scenario)
    }

    /// Collapse freight terms into USD/ton and produce engine inputs
    pub fn resolve(&self, table: &FreightTable, config: &Config) -> Result<CropInputs> {
        let rate = self.exchange_rate.unwrap_or(config.exchange_rate);
        let freight_per_ton = self.freight.resolve(table, rate)?;
        Ok(CropInputs {
            name: self.name.clone(),
            area_ha: self.area_ha,
            yield_ton_per_ha: self.yield_ton_per_ha,
            price_per_ton: self.price_per_ton,
            direct_costs: self.direct_costs,
            marketing_cost_per_ha: self.marketing_cost_per_ha,
            gross_receipts_tax_pct: self.gross_receipts_tax_pct,
            overhead_per_ha: self.overhead_per_ha,
            harvest_cost_per_ha: self.harvest_cost_per_ha,
            freight_per_ton,
            rent: self.rent.clone(),
            occupancy_factor: self.occupancy_factor,
            leased_area_fraction: self.leased_area_fraction,
        })
    }
}
