//! CLI definition using clap

use clap::{Parser, Subcommand};
use margen_types::{Dimension, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "margen-calc")]
#[command(author = "nperalta")]
#[command(version)]
#[command(about = "Agricultural margin calculator: crop margins, freight tariffs, sensitivity")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the margin waterfall for one crop
    Margin {
        /// Path to a scenario TOML file
        #[arg(long, short = 's')]
        scenario: Option<PathBuf>,

        /// Built-in preset name (e.g. "Soja 1ra", "Maíz")
        #[arg(long, short = 'p')]
        preset: Option<String>,
    },

    /// Look up the freight tariff for a haul distance
    Freight {
        /// Haul distance in km
        distance_km: f64,

        /// Crop-type surcharge (%)
        #[arg(long)]
        surcharge: Option<f64>,

        /// Unpaved-road surcharge (%), added to the crop surcharge
        #[arg(long)]
        road_surcharge: Option<f64>,

        /// Tariff table CSV; embedded reference table if not given
        #[arg(long)]
        table: Option<PathBuf>,

        /// Convert to USD at the configured exchange rate
        #[arg(long)]
        usd: bool,
    },

    /// Compare margins across crops side by side
    Compare {
        /// Crop CSV file, one row per crop
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Use the built-in presets
        #[arg(long)]
        presets: bool,

        /// Also export the comparison to an Excel file
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// Sensitivity table and elasticity for yield or freight
    Sensitivity {
        /// Path to a scenario TOML file
        #[arg(long, short = 's')]
        scenario: Option<PathBuf>,

        /// Built-in preset name
        #[arg(long, short = 'p')]
        preset: Option<String>,

        /// Variable to perturb
        #[arg(long, short = 'd', value_enum)]
        dimension: Dimension,

        /// Perturbation used for the elasticity (%)
        #[arg(long, default_value_t = 10.0)]
        delta: f64,

        /// Half-width of the variation range (%)
        #[arg(long, default_value_t = 20.0)]
        range: f64,

        /// Step between variations (%)
        #[arg(long, default_value_t = 10.0)]
        step: f64,
    },

    /// Rotation summary: planted vs physical area, cropping intensity
    Rotation {
        /// Crop CSV file, one row per crop
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Use the built-in presets
        #[arg(long)]
        presets: bool,
    },

    /// Monthly cash-flow projection over the campaign
    Cashflow {
        /// Path to a scenario TOML file
        #[arg(long, short = 's')]
        scenario: Option<PathBuf>,

        /// Built-in preset name
        #[arg(long, short = 'p')]
        preset: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Write a default config file
        #[arg(long)]
        init: bool,

        /// Set the exchange rate (local currency per USD)
        #[arg(long)]
        set_exchange_rate: Option<f64>,

        /// Set the default table-lookup surcharge (%)
        #[arg(long)]
        set_surcharge: Option<f64>,
    },
}
