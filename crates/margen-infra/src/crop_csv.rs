//! CSV loader for crop comparison data
//!
//! One row per crop, headers required. Rent arrives as a flat USD/ha
//! column; commodity-denominated leases are a scenario-file concern.

use margen_domain::model::{CropInputs, DirectCosts, RentTerms};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CropRow {
    name: String,
    area_ha: f64,
    yield_ton_per_ha: f64,
    price_per_ton: f64,
    #[serde(default)]
    tillage: f64,
    #[serde(default)]
    seed: f64,
    #[serde(default)]
    herbicide: f64,
    #[serde(default)]
    fungicide: f64,
    #[serde(default)]
    insecticide: f64,
    #[serde(default)]
    fertilizer: f64,
    #[serde(default)]
    marketing_cost_per_ha: f64,
    #[serde(default)]
    gross_receipts_tax_pct: f64,
    #[serde(default)]
    overhead_per_ha: f64,
    #[serde(default)]
    harvest_cost_per_ha: f64,
    #[serde(default)]
    freight_per_ton: f64,
    #[serde(default)]
    rent_usd_per_ha: f64,
    #[serde(default = "default_occupancy")]
    occupancy_factor: f64,
    #[serde(default)]
    leased_area_fraction: f64,
}

fn default_occupancy() -> f64 {
    1.0
}

impl From<CropRow> for CropInputs {
    fn from(row: CropRow) -> Self {
        CropInputs {
            name: row.name,
            area_ha: row.area_ha,
            yield_ton_per_ha: row.yield_ton_per_ha,
            price_per_ton: row.price_per_ton,
            direct_costs: DirectCosts {
                tillage: row.tillage,
                seed: row.seed,
                herbicide: row.herbicide,
                fungicide: row.fungicide,
                insecticide: row.insecticide,
                fertilizer: row.fertilizer,
            },
            marketing_cost_per_ha: row.marketing_cost_per_ha,
            gross_receipts_tax_pct: row.gross_receipts_tax_pct,
            overhead_per_ha: row.overhead_per_ha,
            harvest_cost_per_ha: row.harvest_cost_per_ha,
            freight_per_ton: row.freight_per_ton,
            rent: RentTerms::Flat {
                usd_per_ha: row.rent_usd_per_ha,
            },
            occupancy_factor: row.occupancy_factor,
            leased_area_fraction: row.leased_area_fraction,
        }
    }
}

/// Load crop inputs from a CSV file, one row per crop
pub fn load_crops_from_csv(path: &std::path::Path) -> Result<Vec<CropInputs>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| format!("Failed to read CSV file: {}", e))?;

    let mut crops = Vec::new();
    for record in reader.deserialize() {
        let row: CropRow = record.map_err(|e| format!("Invalid crop row: {}", e))?;
        crops.push(row.into());
    }
    if crops.is_empty() {
        return Err("CSV file has no crop rows".to_string());
    }
    Ok(crops)
}
