//! Margin waterfall computation

use margen_types::Result;

use crate::model::{CropInputs, MarginBreakdown, MarginResult};

/// Compute the full margin waterfall for one crop.
///
/// The waterfall follows the standard margin sheet: gross income, net
/// income after marketing and gross receipts tax, gross margin after
/// direct costs, overhead, harvest and freight, direct margin after the
/// rent charge. Freight scales with harvested tonnage (USD/t × t/ha),
/// never with area. Rent is scaled by the occupancy factor and blended
/// over the whole area by the leased-area fraction.
pub fn compute_margin(inputs: &CropInputs) -> Result<MarginResult> {
    inputs.validate()?;

    let gross_income = inputs.yield_ton_per_ha * inputs.price_per_ton;
    let direct_costs = inputs.direct_costs.total();
    let tax = if inputs.gross_receipts_tax_pct > 0.0 {
        gross_income * inputs.gross_receipts_tax_pct / 100.0
    } else {
        0.0
    };
    let net_income = gross_income - inputs.marketing_cost_per_ha - tax;
    let freight_cost = inputs.yield_ton_per_ha * inputs.freight_per_ton;
    let gross_margin = net_income
        - direct_costs
        - inputs.overhead_per_ha
        - inputs.harvest_cost_per_ha
        - freight_cost;

    let rent_per_ha = inputs.rent.resolve()?;
    let effective_rent = rent_per_ha * inputs.occupancy_factor;
    let rent_charge = effective_rent * inputs.leased_area_fraction;
    let direct_margin = gross_margin - rent_charge;

    let total_cost_base = direct_costs
        + inputs.marketing_cost_per_ha
        + inputs.overhead_per_ha
        + inputs.harvest_cost_per_ha
        + freight_cost
        + rent_charge;
    let return_on_cost_pct = if total_cost_base > 0.0 {
        direct_margin / total_cost_base * 100.0
    } else {
        0.0
    };

    let per_ha = MarginBreakdown {
        gross_income,
        marketing_cost: inputs.marketing_cost_per_ha,
        tax,
        net_income,
        direct_costs,
        overhead: inputs.overhead_per_ha,
        harvest_cost: inputs.harvest_cost_per_ha,
        freight_cost,
        gross_margin,
        rent_charge,
        direct_margin,
        total_cost_base,
    };

    Ok(MarginResult {
        per_ha,
        totals: per_ha.scaled(inputs.area_ha),
        return_on_cost_pct,
    })
}
