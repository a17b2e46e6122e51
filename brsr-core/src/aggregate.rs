//! The emissions aggregator: a pure, synchronous recomputation of all scope
//! totals from the current activity records. Called in full after every input
//! change; cost is O(number of sources).

use crate::factors::{scope1_factor, scope2_factor, scope3_factor};
use brsr_schemas::activity::{
    sanitize_quantity, Scope1Activity, Scope1Source, Scope2Activity, Scope2Source,
    Scope3Activity, Scope3Source,
};

/// Derived emission totals. Never stored independently of its inputs;
/// recompute instead of caching.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EmissionsSummary {
    pub scope1_kg_co2e: f64,
    pub scope2_kg_co2e: f64,
    pub scope3_kg_co2e: f64,
    pub total_kg_co2e: f64,
    /// kg CO2e per crore INR revenue. `None` when revenue is absent or
    /// non-positive; exported artifacts flatten this to 0 for compatibility.
    pub intensity: Option<f64>,
}

impl EmissionsSummary {
    /// The intensity value as it appears in the exported artifact.
    pub fn exported_intensity(&self) -> f64 {
        self.intensity.unwrap_or(0.0)
    }
}

pub fn scope1_total(activity: &Scope1Activity) -> f64 {
    Scope1Source::ALL
        .iter()
        .map(|&s| sanitize_quantity(activity.quantity(s)) * scope1_factor(s))
        .sum()
}

pub fn scope2_total(activity: &Scope2Activity) -> f64 {
    Scope2Source::ALL
        .iter()
        .map(|&s| sanitize_quantity(activity.quantity(s)) * scope2_factor(s))
        .sum()
}

pub fn scope3_total(activity: &Scope3Activity) -> f64 {
    Scope3Source::ALL
        .iter()
        .map(|&s| sanitize_quantity(activity.quantity(s)) * scope3_factor(s))
        .sum()
}

/// Computes the full emissions summary from the three activity records and
/// the company revenue. Pure and deterministic; identical inputs always yield
/// identical output.
pub fn compute(
    scope1: &Scope1Activity,
    scope2: &Scope2Activity,
    scope3: &Scope3Activity,
    revenue: Option<f64>,
) -> EmissionsSummary {
    let scope1_kg_co2e = scope1_total(scope1);
    let scope2_kg_co2e = scope2_total(scope2);
    let scope3_kg_co2e = scope3_total(scope3);
    let total_kg_co2e = scope1_kg_co2e + scope2_kg_co2e + scope3_kg_co2e;

    let intensity = revenue
        .filter(|r| r.is_finite() && *r > 0.0)
        .map(|r| total_kg_co2e / r);

    EmissionsSummary {
        scope1_kg_co2e,
        scope2_kg_co2e,
        scope3_kg_co2e,
        total_kg_co2e,
        intensity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn empty_inventory_yields_all_zeros() {
        let summary = compute(
            &Scope1Activity::default(),
            &Scope2Activity::default(),
            &Scope3Activity::default(),
            Some(0.0),
        );
        assert_eq!(summary.scope1_kg_co2e, 0.0);
        assert_eq!(summary.scope2_kg_co2e, 0.0);
        assert_eq!(summary.scope3_kg_co2e, 0.0);
        assert_eq!(summary.total_kg_co2e, 0.0);
        assert_eq!(summary.intensity, None);
        assert_eq!(summary.exported_intensity(), 0.0);
    }

    #[test]
    fn diesel_only_inventory() {
        let scope1 = Scope1Activity {
            diesel: 100.0,
            ..Default::default()
        };
        let summary = compute(
            &scope1,
            &Scope2Activity::default(),
            &Scope3Activity::default(),
            Some(10.0),
        );
        assert_close(summary.scope1_kg_co2e, 268.0);
        assert_close(summary.total_kg_co2e, 268.0);
        assert_close(summary.intensity.unwrap(), 26.8);
    }

    #[test]
    fn electricity_uses_grid_average() {
        let scope2 = Scope2Activity { electricity: 1000.0 };
        let summary = compute(
            &Scope1Activity::default(),
            &scope2,
            &Scope3Activity::default(),
            None,
        );
        assert_close(summary.scope2_kg_co2e, 820.0);
    }

    #[test]
    fn scope3_sums_over_all_sources() {
        let scope3 = Scope3Activity {
            air_travel: 1000.0,
            road_travel: 500.0,
            ..Default::default()
        };
        assert_close(scope3_total(&scope3), 340.0);
    }

    #[test]
    fn scope1_identity_over_all_fuels() {
        let scope1 = Scope1Activity {
            diesel: 10.0,
            petrol: 20.0,
            natural_gas: 30.0,
            lpg: 40.0,
            coal: 2.0,
        };
        let expected = 10.0 * 2.68 + 20.0 * 2.31 + 30.0 * 2.03 + 40.0 * 2.98 + 2.0 * 2419.0;
        assert_close(scope1_total(&scope1), expected);
    }

    #[test]
    fn total_is_sum_of_scopes() {
        let scope1 = Scope1Activity {
            petrol: 55.5,
            ..Default::default()
        };
        let scope2 = Scope2Activity { electricity: 321.0 };
        let scope3 = Scope3Activity {
            hotels: 12.0,
            ..Default::default()
        };
        let summary = compute(&scope1, &scope2, &scope3, Some(100.0));
        assert_close(
            summary.total_kg_co2e,
            summary.scope1_kg_co2e + summary.scope2_kg_co2e + summary.scope3_kg_co2e,
        );
    }

    #[test]
    fn negative_quantities_contribute_nothing() {
        let scope1 = Scope1Activity {
            diesel: -100.0,
            petrol: 10.0,
            ..Default::default()
        };
        assert_close(scope1_total(&scope1), 23.1);
    }

    #[test]
    fn compute_is_idempotent() {
        let scope1 = Scope1Activity {
            diesel: 42.0,
            ..Default::default()
        };
        let scope2 = Scope2Activity { electricity: 7.0 };
        let scope3 = Scope3Activity::default();
        let a = compute(&scope1, &scope2, &scope3, Some(5.0));
        let b = compute(&scope1, &scope2, &scope3, Some(5.0));
        assert_eq!(a, b);
    }

    #[test]
    fn intensity_unavailable_without_positive_revenue() {
        let scope2 = Scope2Activity { electricity: 100.0 };
        let s1 = Scope1Activity::default();
        let s3 = Scope3Activity::default();
        assert_eq!(compute(&s1, &scope2, &s3, None).intensity, None);
        assert_eq!(compute(&s1, &scope2, &s3, Some(0.0)).intensity, None);
        assert_eq!(compute(&s1, &scope2, &s3, Some(-4.0)).intensity, None);
    }
}
