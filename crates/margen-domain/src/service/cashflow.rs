//! Seasonal cash-flow projection
//!
//! Spreads a crop's totals over the campaign months (July through June)
//! using per-month percentage profiles. Income follows the sales
//! pattern after harvest; outlays follow planting and input purchases.

use chrono::Month;
use margen_types::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::model::MarginResult;

/// Argentine campaign runs July to June
pub const CAMPAIGN_MONTHS: [Month; 12] = [
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Percentage of annual income and outlays falling in each campaign
/// month. Both arrays are indexed by campaign month (July first) and
/// must each sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowProfile {
    pub income_pct: [f64; 12],
    pub outlay_pct: [f64; 12],
}

impl CashflowProfile {
    pub fn validate(&self) -> Result<()> {
        for (label, pcts) in [("income", &self.income_pct), ("outlay", &self.outlay_pct)] {
            if pcts.iter().any(|&p| p < 0.0) {
                return Err(Error::InvalidInput(format!(
                    "{label} profile has a negative percentage"
                )));
            }
            let sum: f64 = pcts.iter().sum();
            if (sum - 100.0).abs() > 0.01 {
                return Err(Error::InvalidInput(format!(
                    "{label} profile sums to {sum}, expected 100"
                )));
            }
        }
        Ok(())
    }
}

/// Cash movement in one campaign month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFlow {
    pub month: String,
    pub income: f64,
    pub outlay: f64,
    pub net: f64,
    pub cumulative: f64,
}

/// Project a computed margin into monthly cash movements.
///
/// Income distributes the total gross income; outlays distribute the
/// total cost base plus the gross receipts tax, so the net flows sum
/// to the campaign's direct margin.
pub fn project(result: &MarginResult, profile: &CashflowProfile) -> Result<Vec<MonthlyFlow>> {
    profile.validate()?;

    let income_total = result.totals.gross_income;
    let outlay_total = result.totals.total_cost_base + result.totals.tax;

    let mut flows = Vec::with_capacity(12);
    let mut cumulative = 0.0;
    for (i, month) in CAMPAIGN_MONTHS.iter().enumerate() {
        let income = income_total * profile.income_pct[i] / 100.0;
        let outlay = outlay_total * profile.outlay_pct[i] / 100.0;
        let net = income - outlay;
        cumulative += net;
        flows.push(MonthlyFlow {
            month: month.name().to_string(),
            income,
            outlay,
            net,
            cumulative,
        });
    }
    Ok(flows)
}
