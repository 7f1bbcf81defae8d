//! Crop rotation accounting
//!
//! Double-cropped lots are planted twice in a campaign (wheat then
//! second soybean, for example), so planted area exceeds physical area.
//! Each crop's occupancy factor says what share of a full season it
//! holds the land; summing occupancy-weighted areas recovers the
//! physical surface under the rotation.

use margen_types::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::model::CropInputs;
use crate::service::margin_engine::compute_margin;

/// Area and margin aggregates for a set of crops grown in one campaign
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationSummary {
    /// Sum of planted areas, double-cropped lots counted twice
    pub planted_area_ha: f64,
    /// Occupancy-weighted surface actually tied up
    pub physical_area_ha: f64,
    /// planted / physical; above 1.0 means double cropping
    pub cropping_intensity: f64,
    pub gross_income_total: f64,
    pub direct_margin_total: f64,
    pub direct_margin_per_physical_ha: f64,
}

/// Aggregate a campaign's crops into a rotation summary.
pub fn summarize_rotation(crops: &[CropInputs]) -> Result<RotationSummary> {
    if crops.is_empty() {
        return Err(Error::InvalidInput(
            "rotation requires at least one crop".to_string(),
        ));
    }

    let mut planted = 0.0;
    let mut physical = 0.0;
    let mut gross_income = 0.0;
    let mut direct_margin = 0.0;
    for crop in crops {
        let result = compute_margin(crop)?;
        planted += crop.area_ha;
        physical += crop.area_ha * crop.occupancy_factor;
        gross_income += result.totals.gross_income;
        direct_margin += result.totals.direct_margin;
    }

    let cropping_intensity = if physical > 0.0 { planted / physical } else { 0.0 };
    let direct_margin_per_physical_ha = if physical > 0.0 {
        direct_margin / physical
    } else {
        0.0
    };

    Ok(RotationSummary {
        planted_area_ha: planted,
        physical_area_ha: physical,
        cropping_intensity,
        gross_income_total: gross_income,
        direct_margin_total: direct_margin,
        direct_margin_per_physical_ha,
    })
}
