//! Multi-crop margin comparison

use margen_types::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::model::{CropInputs, MarginResult};
use crate::service::margin_engine::compute_margin;

/// One crop with its computed margin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropMargin {
    pub inputs: CropInputs,
    pub result: MarginResult,
}

impl CropMargin {
    pub fn name(&self) -> &str {
        &self.inputs.name
    }
}

/// Compute margins for every crop in the set, keeping input order.
pub fn compare_crops(crops: &[CropInputs]) -> Result<Vec<CropMargin>> {
    if crops.is_empty() {
        return Err(Error::InvalidInput(
            "comparison requires at least one crop".to_string(),
        ));
    }
    crops
        .iter()
        .map(|inputs| {
            let result = compute_margin(inputs)?;
            Ok(CropMargin {
                inputs: inputs.clone(),
                result,
            })
        })
        .collect()
}

/// Render the side-by-side comparison table.
pub fn generate_comparison_report(margins: &[CropMargin]) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("       Comparativa de Márgenes por Cultivo\n");
    report.push_str("       Crop Margin Comparison\n");
    report.push_str("==================================================\n\n");

    let planted: f64 = margins.iter().map(|m| m.inputs.area_ha).sum();
    let best = margins.iter().max_by(|a, b| {
        a.result
            .per_ha
            .direct_margin
            .partial_cmp(&b.result.per_ha.direct_margin)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    report.push_str("Resumen / Summary:\n");
    report.push_str(&format!(
        "  Cultivos / Crops:                {}\n",
        margins.len()
    ));
    report.push_str(&format!(
        "  Superficie sembrada / Planted:   {:.0} ha\n",
        planted
    ));
    if let Some(best) = best {
        report.push_str(&format!(
            "  Mejor margen / Best margin:      {} ({:.0} USD/ha)\n",
            best.name(),
            best.result.per_ha.direct_margin
        ));
    }
    report.push('\n');

    let width = 12;
    report.push_str(&format!("{:<32}", "Variable"));
    for m in margins {
        report.push_str(&format!(" {:>width$}", truncate_str(m.name(), width)));
    }
    report.push('\n');
    report.push_str("-".repeat(32 + (width + 1) * margins.len()).as_str());
    report.push('\n');

    let rows: [(&str, fn(&CropMargin) -> f64); 8] = [
        ("Superficie (ha)", |m| m.inputs.area_ha),
        ("Rendimiento (t/ha)", |m| m.inputs.yield_ton_per_ha),
        ("Precio (USD/t)", |m| m.inputs.price_per_ton),
        ("Ingreso Bruto (USD/ha)", |m| m.result.per_ha.gross_income),
        ("Costos Directos (USD/ha)", |m| m.result.per_ha.direct_costs),
        ("Margen Bruto (USD/ha)", |m| m.result.per_ha.gross_margin),
        ("Margen Directo (USD/ha)", |m| m.result.per_ha.direct_margin),
        ("Retorno s/ costos (%)", |m| m.result.return_on_cost_pct),
    ];
    for (label, value) in rows {
        report.push_str(&format!("{:<32}", label));
        for m in margins {
            report.push_str(&format!(" {:>width$.1}", value(m)));
        }
        report.push('\n');
    }

    report.push('\n');
    report.push_str("Calificación / Grade:\n");
    for m in margins {
        report.push_str(&format!(
            "  {:<14} {} / {}\n",
            m.name(),
            m.result.grade().label(),
            m.result.grade().label_en()
        ));
    }
    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DirectCosts, RentTerms};

    fn crop(name: &str, yield_t: f64, price: f64) -> CropInputs {
        CropInputs {
            name: name.to_string(),
            area_ha: 100.0,
            yield_ton_per_ha: yield_t,
            price_per_ton: price,
            direct_costs: DirectCosts {
                tillage: 150.0,
                ..Default::default()
            },
            marketing_cost_per_ha: 0.0,
            gross_receipts_tax_pct: 0.0,
            overhead_per_ha: 0.0,
            harvest_cost_per_ha: 0.0,
            freight_per_ton: 0.0,
            rent: RentTerms::Flat { usd_per_ha: 0.0 },
            occupancy_factor: 1.0,
            leased_area_fraction: 0.0,
        }
    }

    #[test]
    fn test_comparison_keeps_input_order() {
        let crops = [crop("Soja 1ra", 3.2, 290.0), crop("Maíz", 7.7, 168.0)];
        let margins = compare_crops(&crops).unwrap();
        assert_eq!(margins.len(), 2);
        assert_eq!(margins[0].name(), "Soja 1ra");
        assert_eq!(margins[1].name(), "Maíz");
    }

    #[test]
    fn test_empty_comparison_rejected() {
        assert!(compare_crops(&[]).is_err());
    }

    #[test]
    fn test_report_names_best_margin() {
        let crops = [crop("Soja 1ra", 3.2, 290.0), crop("Maíz", 7.7, 168.0)];
        let margins = compare_crops(&crops).unwrap();
        let report = generate_comparison_report(&margins);
        // maize grosses 1293.6 vs soy 928 on equal costs
        assert!(report.contains("Mejor margen / Best margin:      Maíz"));
        assert!(report.contains("Margen Directo (USD/ha)"));
    }
}
