//! Per-crop agronomic and cost inputs

use margen_types::{Error, Result};
use serde::{Deserialize, Serialize};

use super::rent::RentTerms;

/// Direct costs per hectare (USD/ha), the six categories of a standard
/// Argentine margin sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectCosts {
    #[serde(default)]
    pub tillage: f64,
    /// Seed, inoculant and treatment
    #[serde(default)]
    pub seed: f64,
    #[serde(default)]
    pub herbicide: f64,
    #[serde(default)]
    pub fungicide: f64,
    #[serde(default)]
    pub insecticide: f64,
    #[serde(default)]
    pub fertilizer: f64,
}

impl DirectCosts {
    pub fn total(&self) -> f64 {
        self.tillage + self.seed + self.herbicide + self.fungicide + self.insecticide
            + self.fertilizer
    }

    fn validate(&self) -> Result<()> {
        let categories = [
            ("tillage", self.tillage),
            ("seed", self.seed),
            ("herbicide", self.herbicide),
            ("fungicide", self.fungicide),
            ("insecticide", self.insecticide),
            ("fertilizer", self.fertilizer),
        ];
        for (name, value) in categories {
            if value < 0.0 {
                return Err(Error::InvalidInput(format!(
                    "{name} cost must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Complete input record for one crop / scenario.
///
/// Freight and rent arrive already resolved to numbers; the tagged
/// `FreightTerms` / `RentTerms` variants are collapsed at the
/// application boundary, not inside the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropInputs {
    pub name: String,
    /// Superficie (ha)
    pub area_ha: f64,
    /// Rendimiento (t/ha)
    pub yield_ton_per_ha: f64,
    /// Precio (USD/t)
    pub price_per_ton: f64,
    #[serde(default)]
    pub direct_costs: DirectCosts,
    /// Gastos de comercialización (USD/ha)
    #[serde(default)]
    pub marketing_cost_per_ha: f64,
    /// IIBB, gross receipts tax (%)
    #[serde(default)]
    pub gross_receipts_tax_pct: f64,
    /// Estructura (USD/ha)
    #[serde(default)]
    pub overhead_per_ha: f64,
    /// Cosecha (USD/ha)
    #[serde(default)]
    pub harvest_cost_per_ha: f64,
    /// Flete (USD/t) - scales with harvested tonnage, not area
    #[serde(default)]
    pub freight_per_ton: f64,
    #[serde(default)]
    pub rent: RentTerms,
    /// 1.0 for a full-season crop, 0.5 typical for a second crop
    #[serde(default = "default_occupancy")]
    pub occupancy_factor: f64,
    /// Share of the crop's area that is leased and bears rent
    #[serde(default)]
    pub leased_area_fraction: f64,
}

fn default_occupancy() -> f64 {
    1.0
}

impl CropInputs {
    /// Reject out-of-range values before any computation runs.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("area", self.area_ha),
            ("yield", self.yield_ton_per_ha),
            ("price", self.price_per_ton),
            ("marketing cost", self.marketing_cost_per_ha),
            ("gross receipts tax", self.gross_receipts_tax_pct),
            ("overhead", self.overhead_per_ha),
            ("harvest cost", self.harvest_cost_per_ha),
            ("freight per ton", self.freight_per_ton),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(Error::InvalidInput(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        self.direct_costs.validate()?;
        self.rent.resolve()?;
        if !(self.occupancy_factor > 0.0 && self.occupancy_factor <= 1.0) {
            return Err(Error::InvalidInput(format!(
                "occupancy factor must be in (0, 1], got {}",
                self.occupancy_factor
            )));
        }
        if !(0.0..=1.0).contains(&self.leased_area_fraction) {
            return Err(Error::InvalidInput(format!(
                "leased area fraction must be in [0, 1], got {}",
                self.leased_area_fraction
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_crop() -> CropInputs {
        CropInputs {
            name: "Soja 1ra".to_string(),
            area_ha: 100.0,
            yield_ton_per_ha: 3.2,
            price_per_ton: 290.0,
            direct_costs: DirectCosts {
                tillage: 80.0,
                seed: 60.0,
                herbicide: 50.0,
                fungicide: 10.0,
                insecticide: 10.0,
                fertilizer: 30.0,
            },
            marketing_cost_per_ha: 200.0,
            gross_receipts_tax_pct: 3.5,
            overhead_per_ha: 50.0,
            harvest_cost_per_ha: 90.0,
            freight_per_ton: 0.0,
            rent: RentTerms::Flat { usd_per_ha: 160.0 },
            occupancy_factor: 1.0,
            leased_area_fraction: 1.0,
        }
    }

    #[test]
    fn test_direct_costs_total() {
        let crop = base_crop();
        assert!((crop.direct_costs.total() - 240.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_valid_inputs_pass() {
        assert!(base_crop().validate().is_ok());
    }

    #[test]
    fn test_negative_yield_rejected() {
        let mut crop = base_crop();
        crop.yield_ton_per_ha = -1.0;
        assert!(crop.validate().is_err());
    }

    #[test]
    fn test_negative_direct_cost_rejected() {
        let mut crop = base_crop();
        crop.direct_costs.herbicide = -5.0;
        assert!(crop.validate().is_err());
    }

    #[test]
    fn test_occupancy_zero_rejected() {
        let mut crop = base_crop();
        crop.occupancy_factor = 0.0;
        assert!(crop.validate().is_err());
    }

    #[test]
    fn test_leased_fraction_above_one_rejected() {
        let mut crop = base_crop();
        crop.leased_area_fraction = 1.2;
        assert!(crop.validate().is_err());
    }
}
