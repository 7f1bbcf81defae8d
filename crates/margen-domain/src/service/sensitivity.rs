//! Sensitivity and elasticity of the direct margin

use margen_types::{Dimension, Error, Result};
use serde::{Deserialize, Serialize};

use crate::model::CropInputs;
use crate::service::margin_engine::compute_margin;

/// One perturbed projection; disposable, never persisted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityScenario {
    pub variable: Dimension,
    pub variation_pct: f64,
    pub direct_margin_per_ha: f64,
}

fn perturbed(base: &CropInputs, dimension: Dimension, factor: f64) -> CropInputs {
    let mut crop = base.clone();
    match dimension {
        Dimension::Yield => crop.yield_ton_per_ha *= factor,
        Dimension::Freight => crop.freight_per_ton *= factor,
    }
    crop
}

/// Finite-difference elasticity of the direct margin with respect to
/// yield or freight tariff.
///
/// Perturbs the chosen dimension by ±`delta_pct`, recomputes both
/// margins and divides the central difference by the base margin.
/// Freight elasticity is reported as an absolute value so "higher"
/// always reads as "more sensitive". A zero base margin makes the
/// ratio undefined: the sentinel is `f64::NAN`, to be displayed as
/// "N/A", never coerced to zero.
pub fn elasticity(base: &CropInputs, dimension: Dimension, delta_pct: f64) -> Result<f64> {
    if delta_pct <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "perturbation must be a positive percentage, got {delta_pct}"
        )));
    }
    let base_margin = compute_margin(base)?.per_ha.direct_margin;
    if base_margin == 0.0 {
        return Ok(f64::NAN);
    }

    let delta = delta_pct / 100.0;
    let low = compute_margin(&perturbed(base, dimension, 1.0 - delta))?;
    let high = compute_margin(&perturbed(base, dimension, 1.0 + delta))?;
    let value = (high.per_ha.direct_margin - low.per_ha.direct_margin)
        / base_margin
        / (2.0 * delta);

    Ok(match dimension {
        Dimension::Yield => value,
        Dimension::Freight => value.abs(),
    })
}

/// Direct margin under each of the given percentage variations.
pub fn scenario_table(
    base: &CropInputs,
    dimension: Dimension,
    variations_pct: &[f64],
) -> Result<Vec<SensitivityScenario>> {
    let mut scenarios = Vec::with_capacity(variations_pct.len());
    for &variation_pct in variations_pct {
        let factor = 1.0 + variation_pct / 100.0;
        if factor < 0.0 {
            return Err(Error::InvalidInput(format!(
                "variation of {variation_pct}% would make the input negative"
            )));
        }
        let result = compute_margin(&perturbed(base, dimension, factor))?;
        scenarios.push(SensitivityScenario {
            variable: dimension,
            variation_pct,
            direct_margin_per_ha: result.per_ha.direct_margin,
        });
    }
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DirectCosts, RentTerms};

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
                fertilizer: 69.0,
            },
            marketing_cost_per_ha: 0.0,
            gross_receipts_tax_pct: 0.0,
            overhead_per_ha: 0.0,
            harvest_cost_per_ha: 0.0,
            freight_per_ton: 20.0,
            rent: RentTerms::Flat { usd_per_ha: 0.0 },
            occupancy_factor: 1.0,
            leased_area_fraction: 0.0,
        }
    }

    #[test]
    fn test_yield_elasticity_of_linear_margin() {
        // margin(y) = y * (price - freight) - costs, so the elasticity
        // equals y * (price - freight) / margin regardless of delta
        let crop = base_crop();
        let margin = compute_margin(&crop).unwrap().per_ha.direct_margin;
        let expected = 3.2 * (290.0 - 20.0) / margin;
        for delta in [5.0, 10.0, 20.0] {
            let e = elasticity(&crop, Dimension::Yield, delta).unwrap();
            assert!((e - expected).abs() < 1e-9, "delta {delta}: {e}");
        }
    }

    #[test]
    fn test_freight_elasticity_non_negative() {
        let crop = base_crop();
        let e = elasticity(&crop, Dimension::Freight, 10.0).unwrap();
        assert!(e >= 0.0);

        // still non-negative in a degenerate configuration where the
        // margin itself is negative
        let mut losing = base_crop();
        losing.freight_per_ton = 300.0;
        let e = elasticity(&losing, Dimension::Freight, 10.0).unwrap();
        assert!(e >= 0.0);
    }

    #[test]
    fn test_zero_base_margin_is_nan_sentinel() {
        let mut crop = base_crop();
        // costs exactly consume the income: 3.2 * 290 - 64 = 864
        crop.direct_costs = DirectCosts {
            tillage: 864.0,
            ..Default::default()
        };
        let e = elasticity(&crop, Dimension::Yield, 10.0).unwrap();
        assert!(e.is_nan());
    }

    #[test]
    fn test_non_positive_delta_rejected() {
        let crop = base_crop();
        assert!(elasticity(&crop, Dimension::Yield, 0.0).is_err());
        assert!(elasticity(&crop, Dimension::Yield, -10.0).is_err());
    }

    #[test]
    fn test_scenario_table_brackets_base() {
        let crop = base_crop();
        let base_margin = compute_margin(&crop).unwrap().per_ha.direct_margin;
        let table =
            scenario_table(&crop, Dimension::Yield, &[-20.0, -10.0, 0.0, 10.0, 20.0]).unwrap();
        assert_eq!(table.len(), 5);
        assert!((table[2].direct_margin_per_ha - base_margin).abs() < 1e-9);
        // higher yield, higher margin
        assert!(table[4].direct_margin_per_ha > table[0].direct_margin_per_ha);
    }

    #[test]
    fn test_freight_scenarios_fall_as_tariff_rises() {
        let crop = base_crop();
        let table = scenario_table(&crop, Dimension::Freight, &[-20.0, 0.0, 20.0]).unwrap();
        assert!(table[0].direct_margin_per_ha > table[2].direct_margin_per_ha);
    }

    #[test]
    fn test_variation_below_minus_100_rejected() {
        let crop = base_crop();
        assert!(scenario_table(&crop, Dimension::Yield, &[-120.0]).is_err());
    }
}
