//! Command handlers

use std::path::PathBuf;

use margen_app::config::Config;
use margen_app::constants::{
    crop_presets, get_crop_preset, profile_for_crop, reference_tariff_table,
};
use margen_app::export::export_comparison_to_excel;
use margen_app::scenario::Scenario;
use margen_domain::model::{CropInputs, FreightTable};
use margen_domain::service::{
    cashflow, compare_crops, compute_margin, elasticity, generate_comparison_report,
    scenario_table, summarize_rotation,
};
use margen_infra::crop_csv::load_crops_from_csv;
use margen_infra::tariff_csv::load_tariff_table_from_csv;
use margen_types::{Dimension, Error, OutputFormat, Result};
use serde::Serialize;

use crate::cli::{Cli, Commands};
use crate::output::{output_cashflow, output_margin, output_rotation, output_sensitivity};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(format) = cli.format {
        config.output_format = format;
    }

    match cli.command {
        Commands::Margin { scenario, preset } => {
            cmd_margin(&config, cli.verbose, scenario, preset)
        }
        Commands::Freight {
            distance_km,
            surcharge,
            road_surcharge,
            table,
            usd,
        } => cmd_freight(
            &config,
            cli.verbose,
            distance_km,
            surcharge,
            road_surcharge,
            table,
            usd,
        ),
        Commands::Compare {
            csv,
            presets,
            export,
        } => cmd_compare(&config, csv, presets, export),
        Commands::Sensitivity {
            scenario,
            preset,
            dimension,
            delta,
            range,
            step,
        } => cmd_sensitivity(
            &config, cli.verbose, scenario, preset, dimension, delta, range, step,
        ),
        Commands::Rotation { csv, presets } => cmd_rotation(&config, csv, presets),
        Commands::Cashflow { scenario, preset } => {
            cmd_cashflow(&config, cli.verbose, scenario, preset)
        }
        Commands::Config {
            show,
            init,
            set_exchange_rate,
            set_surcharge,
        } => cmd_config(config, show, init, set_exchange_rate, set_surcharge),
    }
}

/// Tariff table from the explicit path, the configured path, or the
/// embedded reference data
fn load_tariff_table(
    config: &Config,
    verbose: bool,
    override_path: Option<&PathBuf>,
) -> Result<FreightTable> {
    let path = override_path.or(config.tariff_table_path.as_ref());
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::FileNotFound(format!(
                    "Tariff table not found: {}",
                    path.display()
                )));
            }
            println!("Loading tariff table from: {}", path.display());
            load_tariff_table_from_csv(path).map_err(Error::CsvLoader)
        }
        None => {
            if verbose {
                println!("Using embedded reference tariff table");
            }
            Ok(reference_tariff_table().clone())
        }
    }
}

/// One crop from a scenario file or a built-in preset
fn resolve_crop(
    config: &Config,
    verbose: bool,
    scenario: Option<PathBuf>,
    preset: Option<String>,
) -> Result<CropInputs> {
    if let Some(path) = scenario {
        let table = load_tariff_table(config, verbose, None)?;
        let scenario = Scenario::load(&path)?;
        return scenario.resolve(&table, config);
    }
    if let Some(name) = preset {
        return get_crop_preset(&name).cloned().ok_or_else(|| {
            let known: Vec<&str> = crop_presets().iter().map(|c| c.name.as_str()).collect();
            Error::InvalidInput(format!(
                "unknown preset \"{}\" (available: {})",
                name,
                known.join(", ")
            ))
        });
    }
    Err(Error::InvalidInput(
        "provide --scenario <file> or --preset <name>".to_string(),
    ))
}

/// Crops for the multi-crop commands: CSV file or built-in presets
fn resolve_crop_set(csv: Option<PathBuf>, presets: bool) -> Result<Vec<CropInputs>> {
    match csv {
        Some(path) => {
            if !path.exists() {
                return Err(Error::FileNotFound(format!(
                    "Crop CSV not found: {}",
                    path.display()
                )));
            }
            println!("Loading crops from: {}", path.display());
            let crops = load_crops_from_csv(&path).map_err(Error::CsvLoader)?;
            println!("  Loaded {} crops", crops.len());
            Ok(crops)
        }
        None => {
            if !presets {
                println!("No CSV given, using built-in presets");
            }
            Ok(crop_presets().to_vec())
        }
    }
}

/// Compute and print one crop's margin waterfall
fn cmd_margin(
    config: &Config,
    verbose: bool,
    scenario: Option<PathBuf>,
    preset: Option<String>,
) -> Result<()> {
    let crop = resolve_crop(config, verbose, scenario, preset)?;
    let result = compute_margin(&crop)?;
    output_margin(config.output_format, &crop, &result)
}

#[derive(Serialize)]
struct FreightQuote {
    distance_km: f64,
    surcharge_pct: f64,
    tariff_per_ton: f64,
    currency: &'static str,
}

/// Look up a freight tariff
fn cmd_freight(
    config: &Config,
    verbose: bool,
    distance_km: f64,
    surcharge: Option<f64>,
    road_surcharge: Option<f64>,
    table_path: Option<PathBuf>,
    usd: bool,
) -> Result<()> {
    let table = load_tariff_table(config, verbose, table_path.as_ref())?;

    // crop-type and road surcharges add up before the single application
    let surcharge_pct =
        surcharge.unwrap_or(config.default_surcharge_pct) + road_surcharge.unwrap_or(0.0);
    let local = table.lookup(distance_km, surcharge_pct)?;

    let quote = if usd {
        if config.exchange_rate <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "configured exchange rate must be positive, got {}",
                config.exchange_rate
            )));
        }
        FreightQuote {
            distance_km,
            surcharge_pct,
            tariff_per_ton: local / config.exchange_rate,
            currency: "USD",
        }
    } else {
        FreightQuote {
            distance_km,
            surcharge_pct,
            tariff_per_ton: local,
            currency: "ARS",
        }
    };

    if config.output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        println!("\nTarifa de Flete / Freight Tariff");
        println!("================================");
        println!("Distancia:       {:.1} km", quote.distance_km);
        if quote.surcharge_pct != 0.0 {
            println!("Adicionales:     {:+.1}%", quote.surcharge_pct);
        }
        println!(
            "Tarifa:          {:.2} {}/t",
            quote.tariff_per_ton, quote.currency
        );
    }

    Ok(())
}

/// Side-by-side margin comparison
fn cmd_compare(
    config: &Config,
    csv: Option<PathBuf>,
    presets: bool,
    export: Option<PathBuf>,
) -> Result<()> {
    let crops = resolve_crop_set(csv, presets)?;
    let margins = compare_crops(&crops)?;

    match config.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&margins)?);
        }
        OutputFormat::Table => {
            println!("{}", generate_comparison_report(&margins));
        }
    }

    if let Some(path) = export {
        export_comparison_to_excel(&margins, &path)?;
        println!("Exported comparison to: {}", path.display());
    }

    Ok(())
}

/// Sensitivity table plus elasticity
#[allow(clippy::too_many_arguments)]
fn cmd_sensitivity(
    config: &Config,
    verbose: bool,
    scenario: Option<PathBuf>,
    preset: Option<String>,
    dimension: Dimension,
    delta: f64,
    range: f64,
    step: f64,
) -> Result<()> {
    if range <= 0.0 || step <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "range and step must be positive, got range {range} step {step}"
        )));
    }

    let crop = resolve_crop(config, verbose, scenario, preset)?;

    let mut variations = Vec::new();
    let mut v = -range;
    while v <= range + 1e-9 {
        variations.push(v);
        v += step;
    }

    let scenarios = scenario_table(&crop, dimension, &variations)?;
    let e = elasticity(&crop, dimension, delta)?;
    output_sensitivity(config.output_format, &scenarios, e)
}

/// Rotation summary over a crop set
fn cmd_rotation(config: &Config, csv: Option<PathBuf>, presets: bool) -> Result<()> {
    let crops = resolve_crop_set(csv, presets)?;
    let summary = summarize_rotation(&crops)?;
    output_rotation(config.output_format, &summary)
}

/// Campaign cash-flow projection for one crop
fn cmd_cashflow(
    config: &Config,
    verbose: bool,
    scenario: Option<PathBuf>,
    preset: Option<String>,
) -> Result<()> {
    let crop = resolve_crop(config, verbose, scenario, preset)?;
    let result = compute_margin(&crop)?;
    let profile = profile_for_crop(&crop.name);
    let flows = cashflow::project(&result, &profile)?;
    output_cashflow(config.output_format, &flows)
}

/// Show or modify the stored configuration
fn cmd_config(
    mut config: Config,
    show: bool,
    init: bool,
    set_exchange_rate: Option<f64>,
    set_surcharge: Option<f64>,
) -> Result<()> {
    if init {
        let config = Config::default();
        config.save()?;
        println!("Wrote default config to: {}", Config::config_path()?.display());
        return Ok(());
    }

    let mut changed = false;
    if let Some(rate) = set_exchange_rate {
        if rate <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "exchange rate must be positive, got {rate}"
            )));
        }
        config.exchange_rate = rate;
        changed = true;
    }
    if let Some(surcharge) = set_surcharge {
        if surcharge < -100.0 {
            return Err(Error::InvalidInput(format!(
                "surcharge below -100% is not a tariff, got {surcharge}"
            )));
        }
        config.default_surcharge_pct = surcharge;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !changed {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    Ok(())
}
