//! Built-in crop presets
//!
//! The six crops of a typical Pampas campaign with working figures
//! (USD, per hectare). Useful as a starting point; real campaigns come
//! from scenario files or CSV.

use std::sync::LazyLock;

use margen_domain::model::{CropInputs, DirectCosts, RentTerms};

static CROP_PRESETS: LazyLock<Vec<CropInputs>> = LazyLock::new(|| {
    vec![
        CropInputs {
            name: "Soja 1ra".to_string(),
            area_ha: 1199.0,
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
            marketing_cost_per_ha: 70.0,
            gross_receipts_tax_pct: 3.5,
            overhead_per_ha: 50.0,
            harvest_cost_per_ha: 90.0,
            freight_per_ton: 18.0,
            rent: RentTerms::Flat { usd_per_ha: 160.0 },
            occupancy_factor: 1.0,
            leased_area_fraction: 0.5,
        },
        CropInputs {
            name: "Maíz".to_string(),
            area_ha: 1015.0,
            yield_ton_per_ha: 7.7,
            price_per_ton: 168.0,
            direct_costs: DirectCosts {
                tillage: 85.0,
                seed: 140.0,
                herbicide: 55.0,
                fungicide: 12.0,
                insecticide: 14.0,
                fertilizer: 150.0,
            },
            marketing_cost_per_ha: 95.0,
            gross_receipts_tax_pct: 3.5,
            overhead_per_ha: 50.0,
            harvest_cost_per_ha: 110.0,
            freight_per_ton: 18.0,
            rent: RentTerms::Flat { usd_per_ha: 160.0 },
            occupancy_factor: 1.0,
            leased_area_fraction: 0.5,
        },
        CropInputs {
            name: "Trigo".to_string(),
            area_ha: 346.0,
            yield_ton_per_ha: 3.6,
            price_per_ton: 198.0,
            direct_costs: DirectCosts {
                tillage: 60.0,
                seed: 55.0,
                herbicide: 35.0,
                fungicide: 25.0,
                insecticide: 7.0,
                fertilizer: 130.0,
            },
            marketing_cost_per_ha: 55.0,
            gross_receipts_tax_pct: 3.5,
            overhead_per_ha: 50.0,
            harvest_cost_per_ha: 80.0,
            freight_per_ton: 16.0,
            rent: RentTerms::Flat { usd_per_ha: 160.0 },
            occupancy_factor: 0.5,
            leased_area_fraction: 0.5,
        },
        CropInputs {
            name: "Soja 2da".to_string(),
            area_ha: 309.0,
            yield_ton_per_ha: 2.1,
            price_per_ton: 290.0,
            direct_costs: DirectCosts {
                tillage: 45.0,
                seed: 55.0,
                herbicide: 45.0,
                fungicide: 8.0,
                insecticide: 12.0,
                fertilizer: 15.0,
            },
            marketing_cost_per_ha: 50.0,
            gross_receipts_tax_pct: 3.5,
            overhead_per_ha: 50.0,
            harvest_cost_per_ha: 75.0,
            freight_per_ton: 18.0,
            rent: RentTerms::Flat { usd_per_ha: 0.0 },
            occupancy_factor: 0.5,
            leased_area_fraction: 0.5,
        },
        CropInputs {
            name: "Maíz 2da".to_string(),
            area_ha: 37.0,
            yield_ton_per_ha: 6.5,
            price_per_ton: 168.0,
            direct_costs: DirectCosts {
                tillage: 50.0,
                seed: 120.0,
                herbicide: 45.0,
                fungicide: 10.0,
                insecticide: 14.0,
                fertilizer: 110.0,
            },
            marketing_cost_per_ha: 80.0,
            gross_receipts_tax_pct: 3.5,
            overhead_per_ha: 50.0,
            harvest_cost_per_ha: 100.0,
            freight_per_ton: 18.0,
            rent: RentTerms::Flat { usd_per_ha: 0.0 },
            occupancy_factor: 0.5,
            leased_area_fraction: 0.5,
        },
        CropInputs {
            name: "Girasol".to_string(),
            area_ha: 101.0,
            yield_ton_per_ha: 2.4,
            price_per_ton: 293.0,
            direct_costs: DirectCosts {
                tillage: 70.0,
                seed: 75.0,
                herbicide: 45.0,
                fungicide: 8.0,
                insecticide: 10.0,
                fertilizer: 78.0,
            },
            marketing_cost_per_ha: 60.0,
            gross_receipts_tax_pct: 3.5,
            overhead_per_ha: 50.0,
            harvest_cost_per_ha: 85.0,
            freight_per_ton: 17.0,
            rent: RentTerms::Flat { usd_per_ha: 160.0 },
            occupancy_factor: 1.0,
            leased_area_fraction: 0.5,
        },
    ]
});

/// All built-in crop presets
pub fn crop_presets() -> &'static [CropInputs] {
    &CROP_PRESETS
}

/// Look up a preset by name, case-insensitive
pub fn get_crop_preset(name: &str) -> Option<&'static CropInputs> {
    let wanted = name.trim().to_lowercase();
    CROP_PRESETS
        .iter()
        .find(|c| c.name.to_lowercase() == wanted)
}
