//! Emission factors (kg CO2e per activity unit), Indian context.
//!
//! The factor table is total over the closed set of sources and fixed for the
//! lifetime of the process; there is no lookup error path.

use brsr_schemas::activity::{Scope1Source, Scope2Source, Scope3Source};

/// kg CO2e per unit of Scope 1 activity.
pub fn scope1_factor(source: Scope1Source) -> f64 {
    match source {
        Scope1Source::Diesel => 2.68,     // per liter
        Scope1Source::Petrol => 2.31,     // per liter
        Scope1Source::NaturalGas => 2.03, // per m3
        Scope1Source::Lpg => 2.98,        // per kg
        Scope1Source::Coal => 2419.0,     // per tonne
    }
}

/// kg CO2e per unit of Scope 2 activity (India grid average).
pub fn scope2_factor(source: Scope2Source) -> f64 {
    match source {
        Scope2Source::Electricity => 0.82, // per kWh
    }
}

/// kg CO2e per unit of Scope 3 activity.
pub fn scope3_factor(source: Scope3Source) -> f64 {
    match source {
        Scope3Source::AirTravel => 0.255, // per passenger-km
        Scope3Source::RoadTravel => 0.17, // per km
        Scope3Source::RailTravel => 0.041, // per passenger-km
        Scope3Source::Hotels => 29.4,     // per room-night
        Scope3Source::Waste => 500.0,     // per tonne
        Scope3Source::Water => 0.344,     // per kL
        Scope3Source::Paper => 0.91,      // per kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_factors_are_positive() {
        for source in Scope1Source::ALL {
            assert!(scope1_factor(source) > 0.0);
        }
        for source in Scope2Source::ALL {
            assert!(scope2_factor(source) > 0.0);
        }
        for source in Scope3Source::ALL {
            assert!(scope3_factor(source) > 0.0);
        }
    }

    #[test]
    fn published_factor_values() {
        assert_eq!(scope1_factor(Scope1Source::Diesel), 2.68);
        assert_eq!(scope1_factor(Scope1Source::Coal), 2419.0);
        assert_eq!(scope2_factor(Scope2Source::Electricity), 0.82);
        assert_eq!(scope3_factor(Scope3Source::RailTravel), 0.041);
        assert_eq!(scope3_factor(Scope3Source::Waste), 500.0);
    }
}
