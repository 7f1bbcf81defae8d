//! Embedded grain freight reference table
//!
//! Published CATAC-style rate table for grain hauling, ARS per ton by
//! haul distance. Rates below 5 km and above 500 km are clamped by the
//! lookup, matching how the published table is used in practice.

use std::sync::LazyLock;

use margen_domain::model::{FreightTable, TariffPoint};

/// (distance_km, tariff ARS/ton)
const REFERENCE_TARIFF_ARS: &[(f64, f64)] = &[
    (5.0, 7154.0),
    (10.0, 8021.0),
    (15.0, 8876.0),
    (20.0, 9707.0),
    (25.0, 10516.0),
    (30.0, 11303.0),
    (35.0, 12070.0),
    (40.0, 12816.0),
    (45.0, 13544.0),
    (50.0, 14254.0),
    (55.0, 14947.0),
    (60.0, 15624.0),
    (65.0, 16286.0),
    (70.0, 16934.0),
    (75.0, 17569.0),
    (80.0, 18192.0),
    (85.0, 18804.0),
    (90.0, 19477.0),
    (95.0, 20141.0),
    (100.0, 20962.0),
    (110.0, 22150.0),
    (120.0, 23290.0),
    (130.0, 24390.0),
    (140.0, 25455.0),
    (150.0, 26490.0),
    (160.0, 27500.0),
    (170.0, 28488.0),
    (180.0, 29457.0),
    (190.0, 30409.0),
    (200.0, 31346.0),
    (220.0, 33180.0),
    (240.0, 34970.0),
    (260.0, 36722.0),
    (280.0, 38440.0),
    (300.0, 40128.0),
    (350.0, 44230.0),
    (400.0, 48190.0),
    (450.0, 52030.0),
    (500.0, 55770.0),
];

static REFERENCE_TABLE: LazyLock<FreightTable> = LazyLock::new(|| {
    let points = REFERENCE_TARIFF_ARS
        .iter()
        .map(|&(distance_km, tariff_per_ton)| TariffPoint {
            distance_km,
            tariff_per_ton,
        })
        .collect();
    FreightTable::new(points).expect("embedded tariff table is valid")
});

/// The embedded reference table
pub fn reference_tariff_table() -> &'static FreightTable {
    &REFERENCE_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_table_range() {
        let table = reference_tariff_table();
        assert_eq!(table.min_distance_km(), 5.0);
        assert_eq!(table.max_distance_km(), 500.0);
    }

    #[test]
    fn test_reference_anchor_rows() {
        let table = reference_tariff_table();
        assert!((table.lookup(95.0, 0.0).unwrap() - 20141.0).abs() < f64::EPSILON);
        assert!((table.lookup(100.0, 0.0).unwrap() - 20962.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reference_table_strictly_increasing() {
        let points = reference_tariff_table().points();
        for pair in points.windows(2) {
            assert!(pair[0].tariff_per_ton < pair[1].tariff_per_ton);
        }
    }
}
