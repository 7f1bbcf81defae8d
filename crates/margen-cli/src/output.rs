//! Output formatting module

use margen_domain::model::{CropInputs, MarginResult};
use margen_domain::service::cashflow::MonthlyFlow;
use margen_domain::service::{RotationSummary, SensitivityScenario};
use margen_types::{OutputFormat, Result};
use serde::Serialize;

#[derive(Serialize)]
struct MarginReport<'a> {
    inputs: &'a CropInputs,
    result: &'a MarginResult,
}

pub fn output_margin(
    output_format: OutputFormat,
    inputs: &CropInputs,
    result: &MarginResult,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&MarginReport { inputs, result })?;
        println!("{}", content);
        return Ok(());
    }

    let per_ha = &result.per_ha;
    let totals = &result.totals;

    println!("\nMargen por Cultivo / Crop Margin: {}", inputs.name);
    println!("==================================================");

    println!("\nProducción / Production");
    println!("  {:<34} {:>12.1}", "Superficie (ha)", inputs.area_ha);
    println!(
        "  {:<34} {:>12.2}",
        "Rendimiento (t/ha)", inputs.yield_ton_per_ha
    );
    println!("  {:<34} {:>12.2}", "Precio (USD/t)", inputs.price_per_ton);
    println!(
        "  {:<34} {:>12.2} {:>14.0}",
        "Ingreso Bruto (USD/ha | USD)", per_ha.gross_income, totals.gross_income
    );

    println!("\nCostos Directos / Direct Costs (USD/ha)");
    println!("  {:<34} {:>12.2}", "Labranza", inputs.direct_costs.tillage);
    println!(
        "  {:<34} {:>12.2}",
        "Semilla, inoc. y trat.", inputs.direct_costs.seed
    );
    println!(
        "  {:<34} {:>12.2}",
        "Herbicidas", inputs.direct_costs.herbicide
    );
    println!(
        "  {:<34} {:>12.2}",
        "Fungicidas", inputs.direct_costs.fungicide
    );
    println!(
        "  {:<34} {:>12.2}",
        "Insecticidas", inputs.direct_costs.insecticide
    );
    println!(
        "  {:<34} {:>12.2}",
        "Fertilizantes", inputs.direct_costs.fertilizer
    );
    println!(
        "  {:<34} {:>12.2} {:>14.0}",
        "Total costos directos", per_ha.direct_costs, totals.direct_costs
    );

    println!("\nMargen Bruto / Gross Margin (USD/ha)");
    println!(
        "  {:<34} {:>12.2}",
        "Gastos de comercialización", per_ha.marketing_cost
    );
    println!(
        "  {:<34} {:>12.2}",
        format!("IIBB {}%", inputs.gross_receipts_tax_pct),
        per_ha.tax
    );
    println!("  {:<34} {:>12.2}", "Ingreso Neto", per_ha.net_income);
    println!("  {:<34} {:>12.2}", "Estructura", per_ha.overhead);
    println!("  {:<34} {:>12.2}", "Cosecha", per_ha.harvest_cost);
    println!(
        "  {:<34} {:>12.2}",
        format!("Flete ({:.2} USD/t)", inputs.freight_per_ton),
        per_ha.freight_cost
    );
    println!(
        "  {:<34} {:>12.2} {:>14.0}",
        "Margen Bruto", per_ha.gross_margin, totals.gross_margin
    );

    println!("\nMargen Directo / Direct Margin (USD/ha)");
    println!("  {:<34} {:>12.2}", "Arrendamiento", per_ha.rent_charge);
    println!(
        "  {:<34} {:>12.2} {:>14.0}",
        "Margen Directo", per_ha.direct_margin, totals.direct_margin
    );
    println!(
        "  {:<34} {:>11.1}%",
        "Retorno s/ costos", result.return_on_cost_pct
    );
    println!(
        "  {:<34} {} / {}",
        "Calificación",
        result.grade().label(),
        result.grade().label_en()
    );

    Ok(())
}

pub fn output_sensitivity(
    output_format: OutputFormat,
    scenarios: &[SensitivityScenario],
    elasticity: f64,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        #[derive(Serialize)]
        struct SensitivityReport<'a> {
            scenarios: &'a [SensitivityScenario],
            elasticity: Option<f64>,
        }
        // NaN is not representable in JSON; undefined elasticity is null
        let report = SensitivityReport {
            scenarios,
            elasticity: if elasticity.is_nan() {
                None
            } else {
                Some(elasticity)
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\nAnálisis de Sensibilidad / Sensitivity Analysis");
    println!("==================================================");
    println!("{:>12} {:>24}", "Variación", "Margen Directo (USD/ha)");
    for s in scenarios {
        println!("{:>+11.1}% {:>24.2}", s.variation_pct, s.direct_margin_per_ha);
    }
    if elasticity.is_nan() {
        println!("\nElasticidad / Elasticity:  N/A (margen base cero)");
    } else {
        println!("\nElasticidad / Elasticity:  {:.3}", elasticity);
    }

    Ok(())
}

pub fn output_rotation(output_format: OutputFormat, summary: &RotationSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!("\nRotación de Cultivos / Crop Rotation");
    println!("==================================================");
    println!(
        "  {:<36} {:>12.1}",
        "Superficie sembrada (ha)", summary.planted_area_ha
    );
    println!(
        "  {:<36} {:>12.1}",
        "Superficie física (ha)", summary.physical_area_ha
    );
    println!(
        "  {:<36} {:>12.2}",
        "Intensidad de rotación", summary.cropping_intensity
    );
    println!(
        "  {:<36} {:>12.0}",
        "Ingreso Bruto total (USD)", summary.gross_income_total
    );
    println!(
        "  {:<36} {:>12.0}",
        "Margen Directo total (USD)", summary.direct_margin_total
    );
    println!(
        "  {:<36} {:>12.2}",
        "Margen Directo (USD/ha física)", summary.direct_margin_per_physical_ha
    );

    Ok(())
}

pub fn output_cashflow(output_format: OutputFormat, flows: &[MonthlyFlow]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(flows)?);
        return Ok(());
    }

    println!("\nFlujo de Caja de Campaña / Campaign Cash Flow (USD)");
    println!("==================================================");
    println!(
        "{:<12} {:>12} {:>12} {:>12} {:>12}",
        "Mes", "Ingresos", "Egresos", "Neto", "Acumulado"
    );
    for flow in flows {
        println!(
            "{:<12} {:>12.0} {:>12.0} {:>+12.0} {:>+12.0}",
            flow.month, flow.income, flow.outlay, flow.net, flow.cumulative
        );
    }

    Ok(())
}
