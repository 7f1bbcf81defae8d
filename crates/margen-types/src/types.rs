//! Shared value types

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Driver variable a sensitivity run perturbs
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Yield,
    Freight,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Yield => write!(f, "yield"),
            Dimension::Freight => write!(f, "freight"),
        }
    }
}

/// Profitability grade derived from return on cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarginGrade {
    /// Negative return (< 0%)
    Loss,
    /// Thin return (0-10%)
    Tight,
    /// Solid return (10-30%)
    Profitable,
    /// Strong return (> 30%)
    HighlyProfitable,
}

impl MarginGrade {
    pub fn from_return_on_cost(pct: f64) -> Self {
        match pct {
            p if p < 0.0 => MarginGrade::Loss,
            p if p < 10.0 => MarginGrade::Tight,
            p if p <= 30.0 => MarginGrade::Profitable,
            _ => MarginGrade::HighlyProfitable,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarginGrade::Loss => "Quebranto",
            MarginGrade::Tight => "Ajustado",
            MarginGrade::Profitable => "Rentable",
            MarginGrade::HighlyProfitable => "Muy rentable",
        }
    }

    pub fn label_en(&self) -> &'static str {
        match self {
            MarginGrade::Loss => "Loss",
            MarginGrade::Tight => "Tight",
            MarginGrade::Profitable => "Profitable",
            MarginGrade::HighlyProfitable => "Highly profitable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(MarginGrade::from_return_on_cost(-5.0), MarginGrade::Loss);
        assert_eq!(MarginGrade::from_return_on_cost(0.0), MarginGrade::Tight);
        assert_eq!(MarginGrade::from_return_on_cost(9.9), MarginGrade::Tight);
        assert_eq!(MarginGrade::from_return_on_cost(15.0), MarginGrade::Profitable);
        assert_eq!(MarginGrade::from_return_on_cost(30.0), MarginGrade::Profitable);
        assert_eq!(
            MarginGrade::from_return_on_cost(45.0),
            MarginGrade::HighlyProfitable
        );
    }
}
