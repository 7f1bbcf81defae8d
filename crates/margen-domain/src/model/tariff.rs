//! Freight tariff table with linear interpolation

use margen_types::{Error, Result};
use serde::{Deserialize, Serialize};

/// One row of a freight rate table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TariffPoint {
    /// Haul distance (km)
    pub distance_km: f64,
    /// Published tariff (local currency per ton)
    pub tariff_per_ton: f64,
}

/// Reference freight rate table, sorted ascending by distance.
///
/// Built once from the embedded reference dataset or a CSV file and
/// read-only afterwards. Distances outside the tabulated range are
/// clamped to the first/last row rather than extrapolated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreightTable {
    points: Vec<TariffPoint>,
}

impl FreightTable {
    /// Build a table from tariff points. The points are sorted by
    /// distance; an empty set or duplicate distances are rejected.
    pub fn new(mut points: Vec<TariffPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptyTariffTable);
        }
        points.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for pair in points.windows(2) {
            if pair[0].distance_km == pair[1].distance_km {
                return Err(Error::InvalidInput(format!(
                    "duplicate distance in tariff table: {} km",
                    pair[0].distance_km
                )));
            }
        }
        for p in &points {
            if p.distance_km < 0.0 || p.tariff_per_ton < 0.0 {
                return Err(Error::InvalidInput(format!(
                    "negative value in tariff table at {} km",
                    p.distance_km
                )));
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[TariffPoint] {
        &self.points
    }

    pub fn min_distance_km(&self) -> f64 {
        self.points[0].distance_km
    }

    pub fn max_distance_km(&self) -> f64 {
        self.points[self.points.len() - 1].distance_km
    }

    /// Look up the tariff for a haul distance.
    ///
    /// Distances below the first tabulated row or above the last are
    /// clamped to that row's tariff. Interior distances interpolate
    /// linearly between the two bracketing rows; tabulated distances
    /// return their tariff exactly.
    ///
    /// `surcharge_pct` is applied once, multiplicatively, after the
    /// lookup: `tariff * (1 + surcharge_pct / 100)`. When several
    /// surcharges apply (crop type, unpaved road) the caller sums them
    /// before this call. A negative surcharge is an explicit discount;
    /// below -100% the tariff would go negative, so that is rejected.
    pub fn lookup(&self, distance_km: f64, surcharge_pct: f64) -> Result<f64> {
        if distance_km < 0.0 {
            return Err(Error::InvalidInput(format!(
                "distance must be non-negative, got {distance_km}"
            )));
        }
        if surcharge_pct < -100.0 {
            return Err(Error::InvalidInput(format!(
                "surcharge below -100% is not a tariff, got {surcharge_pct}"
            )));
        }

        let base = self.base_tariff(distance_km);
        Ok(base * (1.0 + surcharge_pct / 100.0))
    }

    fn base_tariff(&self, distance_km: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if distance_km <= first.distance_km {
            return first.tariff_per_ton;
        }
        if distance_km >= last.distance_km {
            return last.tariff_per_ton;
        }

        // partition_point: index of the first row with distance >= target
        let hi_idx = self
            .points
            .partition_point(|p| p.distance_km < distance_km);
        let hi = self.points[hi_idx];
        if hi.distance_km == distance_km {
            return hi.tariff_per_ton;
        }
        let lo = self.points[hi_idx - 1];
        let slope =
            (hi.tariff_per_ton - lo.tariff_per_ton) / (hi.distance_km - lo.distance_km);
        lo.tariff_per_ton + (distance_km - lo.distance_km) * slope
    }
}

/// How the freight charge for a crop is specified.
///
/// All three variants resolve to a single USD-per-ton figure before the
/// margin engine runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FreightTerms {
    /// Look the tariff up in the reference table (local currency) and
    /// convert at the configured exchange rate
    Table {
        distance_km: f64,
        #[serde(default)]
        surcharge_pct: f64,
    },
    /// Tariff entered by hand in local currency per ton
    ManualLocal { tariff_per_ton: f64 },
    /// Tariff entered by hand already in USD per ton
    ManualUsd { usd_per_ton: f64 },
}

impl FreightTerms {
    /// Resolve to USD per ton. `ars_per_usd` is only consulted for the
    /// local-currency variants.
    pub fn resolve(&self, table: &FreightTable, ars_per_usd: f64) -> Result<f64> {
        match *self {
            FreightTerms::Table {
                distance_km,
                surcharge_pct,
            } => {
                let local = table.lookup(distance_km, surcharge_pct)?;
                Ok(local / positive_rate(ars_per_usd)?)
            }
            FreightTerms::ManualLocal { tariff_per_ton } => {
                if tariff_per_ton < 0.0 {
                    return Err(Error::InvalidInput(format!(
                        "freight tariff must be non-negative, got {tariff_per_ton}"
                    )));
                }
                Ok(tariff_per_ton / positive_rate(ars_per_usd)?)
            }
            FreightTerms::ManualUsd { usd_per_ton } => {
                if usd_per_ton < 0.0 {
                    return Err(Error::InvalidInput(format!(
                        "freight tariff must be non-negative, got {usd_per_ton}"
                    )));
                }
                Ok(usd_per_ton)
            }
        }
    }
}

fn positive_rate(ars_per_usd: f64) -> Result<f64> {
    if ars_per_usd > 0.0 {
        Ok(ars_per_usd)
    } else {
        Err(Error::InvalidInput(format!(
            "exchange rate must be positive, got {ars_per_usd}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> FreightTable {
        FreightTable::new(vec![
            TariffPoint {
                distance_km: 5.0,
                tariff_per_ton: 7154.0,
            },
            TariffPoint {
                distance_km: 95.0,
                tariff_per_ton: 20141.0,
            },
            TariffPoint {
                distance_km: 100.0,
                tariff_per_ton: 20962.0,
            },
            TariffPoint {
                distance_km: 200.0,
                tariff_per_ton: 31346.0,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_table_rejected() {
        let result = FreightTable::new(vec![]);
        assert!(matches!(result, Err(Error::EmptyTariffTable)));
    }

    #[test]
    fn test_duplicate_distance_rejected() {
        let result = FreightTable::new(vec![
            TariffPoint {
                distance_km: 50.0,
                tariff_per_ton: 100.0,
            },
            TariffPoint {
                distance_km: 50.0,
                tariff_per_ton: 200.0,
            },
        ]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_points_sorted_on_construction() {
        let table = FreightTable::new(vec![
            TariffPoint {
                distance_km: 100.0,
                tariff_per_ton: 20962.0,
            },
            TariffPoint {
                distance_km: 5.0,
                tariff_per_ton: 7154.0,
            },
        ])
        .unwrap();
        assert_eq!(table.min_distance_km(), 5.0);
        assert_eq!(table.max_distance_km(), 100.0);
    }

    #[test]
    fn test_exact_match() {
        let table = sample_table();
        let tariff = table.lookup(100.0, 0.0).unwrap();
        assert!((tariff - 20962.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_interpolation_between_rows() {
        // 20141 + 2 * 821 / 5 = 20469.4
        let table = sample_table();
        let tariff = table.lookup(97.0, 0.0).unwrap();
        assert!((tariff - 20469.4).abs() < 0.01);
    }

    #[test]
    fn test_clamped_below_minimum() {
        let table = sample_table();
        let at_zero = table.lookup(0.0, 0.0).unwrap();
        let at_min = table.lookup(5.0, 0.0).unwrap();
        assert!((at_zero - at_min).abs() < f64::EPSILON);
        assert!((at_zero - 7154.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamped_above_maximum() {
        let table = sample_table();
        let far = table.lookup(1500.0, 0.0).unwrap();
        assert!((far - 31346.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_surcharge_applied_multiplicatively() {
        // 20962 * 1.20 = 25154.4
        let table = sample_table();
        let tariff = table.lookup(100.0, 20.0).unwrap();
        assert!((tariff - 25154.4).abs() < 0.01);
    }

    #[test]
    fn test_surcharge_linearity() {
        let table = sample_table();
        for s in [-15.0, 0.0, 12.5, 40.0] {
            let plain = table.lookup(97.0, 0.0).unwrap();
            let loaded = table.lookup(97.0, s).unwrap();
            assert!((loaded - plain * (1.0 + s / 100.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_lookup_monotonic_over_domain() {
        let table = sample_table();
        let mut prev = f64::MIN;
        let mut d = 0.0;
        while d <= 250.0 {
            let tariff = table.lookup(d, 0.0).unwrap();
            assert!(tariff >= prev, "tariff decreased at {} km", d);
            prev = tariff;
            d += 2.5;
        }
    }

    #[test]
    fn test_negative_distance_rejected() {
        let table = sample_table();
        assert!(table.lookup(-1.0, 0.0).is_err());
    }

    #[test]
    fn test_surcharge_below_minus_100_rejected() {
        let table = sample_table();
        assert!(table.lookup(100.0, -120.0).is_err());
    }

    #[test]
    fn test_freight_terms_table_converts_currency() {
        let table = sample_table();
        let terms = FreightTerms::Table {
            distance_km: 100.0,
            surcharge_pct: 0.0,
        };
        let usd = terms.resolve(&table, 1000.0).unwrap();
        assert!((usd - 20.962).abs() < 1e-9);
    }

    #[test]
    fn test_freight_terms_manual_usd_ignores_rate() {
        let table = sample_table();
        let terms = FreightTerms::ManualUsd { usd_per_ton: 18.5 };
        let usd = terms.resolve(&table, 1000.0).unwrap();
        assert!((usd - 18.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_freight_terms_rejects_bad_exchange_rate() {
        let table = sample_table();
        let terms = FreightTerms::ManualLocal {
            tariff_per_ton: 20000.0,
        };
        assert!(terms.resolve(&table, 0.0).is_err());
        assert!(terms.resolve(&table, -350.0).is_err());
    }
}
