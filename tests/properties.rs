use approx::assert_relative_eq;
use mfc_flow::correction::actual_specific_heat;
use mfc_flow::psychrometrics::*;
use mfc_flow::{actual_flow, corrected_flow};
use proptest::prelude::*;

// ═══════════════════════════════════════════════════════════════════
//  Psychrometric bounds over the fitted range
// ═══════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn vapor_pressures_are_bounded(t in 0.0f64..=30.0, rh in 0.0f64..=100.0) {
        let saturated = saturated_vapor_pressure(t);
        let actual = actual_vapor_pressure(saturated, rh);
        prop_assert!(saturated >= 0.0);
        prop_assert!(actual >= 0.0);
        prop_assert!(actual <= saturated);
    }

    #[test]
    fn dry_air_plus_vapor_is_total(ap in 0.0f64..50.0, tp in 500.0f64..1100.0) {
        // one rounding per operation, at most one ulp of the total
        let dry = dry_air_pressure(ap, tp);
        prop_assert!((dry + ap - tp).abs() <= tp * f64::EPSILON);
    }

    #[test]
    fn reflection_sums_to_twice_desired(gcf in 0.01f64..20.0, desired in 0.0f64..=1200.0) {
        let sum = corrected_flow(gcf, desired) + actual_flow(gcf);
        prop_assert!((sum - 2.0 * desired).abs() <= 1e-9 * (1.0 + desired + actual_flow(gcf)));
    }

    #[test]
    fn specific_heat_drift_is_small(cp in 0.01f64..4.0, t in 0.0f64..=30.0) {
        let adjusted = actual_specific_heat(cp, t);
        prop_assert!(adjusted >= cp);
        prop_assert!(adjusted - cp <= 2.0e-4);
    }
}

#[test]
fn specific_heat_is_unchanged_at_zero_celsius() {
    for cp in [0.0378, 0.1144, 0.240, 1.241, 3.419] {
        assert_eq!(actual_specific_heat(cp, 0.0), cp);
    }
}

#[test]
fn dry_air_round_trip_at_sea_level() {
    let total = 760.0 * 1.333;
    let vapor = actual_vapor_pressure(saturated_vapor_pressure(15.0), 50.0);
    assert_relative_eq!(dry_air_pressure(vapor, total) + vapor, total);
}
