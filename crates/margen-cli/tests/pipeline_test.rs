//! Integration tests for the margin pipeline
//!
//! Exercises the full path a command takes: scenario file or CSV in,
//! tariff resolution, margin computation, comparison and export out.

use std::io::Write;

use margen_app::config::Config;
use margen_app::constants::{
    crop_presets, profile_for_crop, reference_tariff_table,
};
use margen_app::export::export_comparison_to_excel;
use margen_app::scenario::Scenario;
use margen_domain::service::{
    cashflow, compare_crops, compute_margin, elasticity, generate_comparison_report,
    summarize_rotation,
};
use margen_infra::crop_csv::load_crops_from_csv;
use margen_infra::tariff_csv::load_tariff_table_from_csv;
use margen_types::Dimension;

const SCENARIO_TOML: &str = r#"
name = "Soja 1ra"
area_ha = 1199.0
yield_ton_per_ha = 3.2
price_per_ton = 290.0
marketing_cost_per_ha = 70.0
gross_receipts_tax_pct = 3.5
overhead_per_ha = 50.0
harvest_cost_per_ha = 90.0
leased_area_fraction = 0.5

[direct_costs]
tillage = 80.0
seed = 60.0
herbicide = 50.0
fungicide = 10.0
insecticide = 10.0
fertilizer = 30.0

[freight]
mode = "table"
distance_km = 97.0

[rent]
mode = "flat"
usd_per_ha = 160.0
"#;

#[test]
fn test_scenario_file_to_margin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("soja.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{}", SCENARIO_TOML).unwrap();
    drop(file);

    let config = Config {
        exchange_rate: 1000.0,
        ..Default::default()
    };
    let scenario = Scenario::load(&path).unwrap();
    let crop = scenario.resolve(reference_tariff_table(), &config).unwrap();

    // interpolated 97 km tariff: 20469.4 ARS/t -> 20.4694 USD/t
    assert!((crop.freight_per_ton - 20.4694).abs() < 1e-4);

    let result = compute_margin(&crop).unwrap();
    assert!((result.per_ha.gross_income - 928.0).abs() < 0.01);
    assert!((result.per_ha.rent_charge - 80.0).abs() < 0.01);
    // identity: direct margin = gross margin - rent charge
    assert!(
        (result.per_ha.direct_margin
            - (result.per_ha.gross_margin - result.per_ha.rent_charge))
            .abs()
            < 1e-9
    );
    // totals scale by the full area
    assert!(
        (result.totals.direct_margin - result.per_ha.direct_margin * 1199.0).abs() < 0.01
    );
}

#[test]
fn test_custom_tariff_table_overrides_reference() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tarifas.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "distancia_km,tarifa_por_tn").unwrap();
    writeln!(file, "50,10000").unwrap();
    writeln!(file, "150,30000").unwrap();
    drop(file);

    let table = load_tariff_table_from_csv(&path).unwrap();
    let tariff = table.lookup(100.0, 0.0).unwrap();
    assert!((tariff - 20000.0).abs() < 0.01);
}

#[test]
fn test_preset_comparison_and_report() {
    let crops = crop_presets().to_vec();
    let margins = compare_crops(&crops).unwrap();
    assert_eq!(margins.len(), 6);

    let report = generate_comparison_report(&margins);
    assert!(report.contains("Comparativa de Márgenes por Cultivo"));
    for crop in &crops {
        assert!(report.contains(&crop.name), "report misses {}", crop.name);
    }
}

#[test]
fn test_csv_crops_through_rotation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cultivos.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "name,area_ha,yield_ton_per_ha,price_per_ton,tillage,occupancy_factor"
    )
    .unwrap();
    writeln!(file, "Trigo,200,3.6,198,150,0.5").unwrap();
    writeln!(file, "Soja 2da,200,2.1,290,120,0.5").unwrap();
    drop(file);

    let crops = load_crops_from_csv(&path).unwrap();
    let summary = summarize_rotation(&crops).unwrap();
    assert!((summary.planted_area_ha - 400.0).abs() < f64::EPSILON);
    assert!((summary.physical_area_ha - 200.0).abs() < f64::EPSILON);
    assert!((summary.cropping_intensity - 2.0).abs() < 1e-9);
}

#[test]
fn test_preset_sensitivity_and_cashflow() {
    let soy = crop_presets()[0].clone();

    let e = elasticity(&soy, Dimension::Yield, 10.0).unwrap();
    assert!(e.is_finite());
    let e_freight = elasticity(&soy, Dimension::Freight, 10.0).unwrap();
    assert!(e_freight >= 0.0);

    let result = compute_margin(&soy).unwrap();
    let flows = cashflow::project(&result, &profile_for_crop(&soy.name)).unwrap();
    assert_eq!(flows.len(), 12);
    let net_sum: f64 = flows.iter().map(|f| f.net).sum();
    assert!((net_sum - result.totals.direct_margin).abs() < 0.01);
}

#[test]
fn test_export_comparison_workbook() {
    let margins = compare_crops(crop_presets()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("margenes.xlsx");
    export_comparison_to_excel(&margins, &path).unwrap();
    assert!(path.exists());
}
