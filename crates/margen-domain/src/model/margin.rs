//! Margin waterfall result types

use margen_types::MarginGrade;
use serde::{Deserialize, Serialize};

/// One full margin waterfall, either per hectare or totalled over the
/// crop's area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarginBreakdown {
    pub gross_income: f64,
    pub marketing_cost: f64,
    pub tax: f64,
    pub net_income: f64,
    pub direct_costs: f64,
    pub overhead: f64,
    pub harvest_cost: f64,
    pub freight_cost: f64,
    pub gross_margin: f64,
    /// Rent already scaled by occupancy and leased-area fraction
    pub rent_charge: f64,
    pub direct_margin: f64,
    pub total_cost_base: f64,
}

impl MarginBreakdown {
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            gross_income: self.gross_income * factor,
            marketing_cost: self.marketing_cost * factor,
            tax: self.tax * factor,
            net_income: self.net_income * factor,
            direct_costs: self.direct_costs * factor,
            overhead: self.overhead * factor,
            harvest_cost: self.harvest_cost * factor,
            freight_cost: self.freight_cost * factor,
            gross_margin: self.gross_margin * factor,
            rent_charge: self.rent_charge * factor,
            direct_margin: self.direct_margin * factor,
            total_cost_base: self.total_cost_base * factor,
        }
    }
}

/// Computed margin snapshot for one crop. Recomputed from scratch
/// whenever any input changes; never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginResult {
    pub per_ha: MarginBreakdown,
    pub totals: MarginBreakdown,
    pub return_on_cost_pct: f64,
}

impl MarginResult {
    pub fn grade(&self) -> MarginGrade {
        MarginGrade::from_return_on_cost(self.return_on_cost_pct)
    }
}
