//! Default seasonal cash-flow profiles
//!
//! Campaign-month percentages (July first). Summer crops sell after
//! the March-May harvest; wheat sells over December-February.

use margen_domain::service::cashflow::CashflowProfile;

/// Summer crop (soybean, maize, sunflower): spring planting, autumn sales
pub fn summer_crop_profile() -> CashflowProfile {
    CashflowProfile {
        income_pct: [
            0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 40.0, 40.0, 20.0, 0.0,
        ],
        outlay_pct: [
            5.0, 5.0, 10.0, 25.0, 20.0, 10.0, 5.0, 5.0, 10.0, 5.0, 0.0, 0.0,
        ],
    }
}

/// Winter crop (wheat): winter planting, sales from December
pub fn winter_crop_profile() -> CashflowProfile {
    CashflowProfile {
        income_pct: [
            0.0, 0.0, 0.0, 0.0, 0.0, 50.0, 30.0, 20.0, 0.0, 0.0, 0.0, 0.0,
        ],
        outlay_pct: [
            30.0, 15.0, 10.0, 5.0, 10.0, 20.0, 10.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        ],
    }
}

/// Pick the default profile for a crop by name
pub fn profile_for_crop(name: &str) -> CashflowProfile {
    if name.to_lowercase().contains("trigo") {
        winter_crop_profile()
    } else {
        summer_crop_profile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_are_valid() {
        assert!(summer_crop_profile().validate().is_ok());
        assert!(winter_crop_profile().validate().is_ok());
    }

    #[test]
    fn test_wheat_gets_winter_profile() {
        assert_eq!(profile_for_crop("Trigo"), winter_crop_profile());
        assert_eq!(profile_for_crop("Soja 1ra"), summer_crop_profile());
    }
}
