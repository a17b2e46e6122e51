use serde::{Deserialize, Deserializer, Serialize};

/// Scope 1 emission sources: fuels combusted directly by the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scope1Source {
    Diesel,
    Petrol,
    NaturalGas,
    Lpg,
    Coal,
}

impl Scope1Source {
    pub const ALL: [Scope1Source; 5] = [
        Scope1Source::Diesel,
        Scope1Source::Petrol,
        Scope1Source::NaturalGas,
        Scope1Source::Lpg,
        Scope1Source::Coal,
    ];

    /// The key used in the exported report, matching the BRSR artifact schema.
    pub fn key(&self) -> &'static str {
        match self {
            Scope1Source::Diesel => "diesel",
            Scope1Source::Petrol => "petrol",
            Scope1Source::NaturalGas => "naturalGas",
            Scope1Source::Lpg => "lpg",
            Scope1Source::Coal => "coal",
        }
    }

    /// Unit the activity quantity is recorded in.
    pub fn unit(&self) -> &'static str {
        match self {
            Scope1Source::Diesel => "L",
            Scope1Source::Petrol => "L",
            Scope1Source::NaturalGas => "m3",
            Scope1Source::Lpg => "kg",
            Scope1Source::Coal => "tonne",
        }
    }
}

/// Scope 2 emission sources: purchased energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scope2Source {
    Electricity,
}

impl Scope2Source {
    pub const ALL: [Scope2Source; 1] = [Scope2Source::Electricity];

    pub fn key(&self) -> &'static str {
        match self {
            Scope2Source::Electricity => "electricity",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Scope2Source::Electricity => "kWh",
        }
    }
}

/// Scope 3 emission sources: other indirect activities (travel, waste, utilities).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scope3Source {
    AirTravel,
    RoadTravel,
    RailTravel,
    Hotels,
    Waste,
    Water,
    Paper,
}

impl Scope3Source {
    pub const ALL: [Scope3Source; 7] = [
        Scope3Source::AirTravel,
        Scope3Source::RoadTravel,
        Scope3Source::RailTravel,
        Scope3Source::Hotels,
        Scope3Source::Waste,
        Scope3Source::Water,
        Scope3Source::Paper,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Scope3Source::AirTravel => "airTravel",
            Scope3Source::RoadTravel => "roadTravel",
            Scope3Source::RailTravel => "railTravel",
            Scope3Source::Hotels => "hotels",
            Scope3Source::Waste => "waste",
            Scope3Source::Water => "water",
            Scope3Source::Paper => "paper",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Scope3Source::AirTravel => "passenger-km",
            Scope3Source::RoadTravel => "km",
            Scope3Source::RailTravel => "passenger-km",
            Scope3Source::Hotels => "room-night",
            Scope3Source::Waste => "tonne",
            Scope3Source::Water => "kL",
            Scope3Source::Paper => "kg",
        }
    }
}

/// Scope 1 activity quantities for a reporting period.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scope1Activity {
    #[serde(deserialize_with = "lenient_quantity")]
    pub diesel: f64,
    #[serde(deserialize_with = "lenient_quantity")]
    pub petrol: f64,
    #[serde(deserialize_with = "lenient_quantity")]
    pub natural_gas: f64,
    #[serde(deserialize_with = "lenient_quantity")]
    pub lpg: f64,
    #[serde(deserialize_with = "lenient_quantity")]
    pub coal: f64,
}

impl Scope1Activity {
    pub fn quantity(&self, source: Scope1Source) -> f64 {
        match source {
            Scope1Source::Diesel => self.diesel,
            Scope1Source::Petrol => self.petrol,
            Scope1Source::NaturalGas => self.natural_gas,
            Scope1Source::Lpg => self.lpg,
            Scope1Source::Coal => self.coal,
        }
    }
}

/// Scope 2 activity quantities for a reporting period.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scope2Activity {
    #[serde(deserialize_with = "lenient_quantity")]
    pub electricity: f64,
}

impl Scope2Activity {
    pub fn quantity(&self, source: Scope2Source) -> f64 {
        match source {
            Scope2Source::Electricity => self.electricity,
        }
    }
}

/// Scope 3 activity quantities for a reporting period.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scope3Activity {
    #[serde(deserialize_with = "lenient_quantity")]
    pub air_travel: f64,
    #[serde(deserialize_with = "lenient_quantity")]
    pub road_travel: f64,
    #[serde(deserialize_with = "lenient_quantity")]
    pub rail_travel: f64,
    #[serde(deserialize_with = "lenient_quantity")]
    pub hotels: f64,
    #[serde(deserialize_with = "lenient_quantity")]
    pub waste: f64,
    #[serde(deserialize_with = "lenient_quantity")]
    pub water: f64,
    #[serde(deserialize_with = "lenient_quantity")]
    pub paper: f64,
}

impl Scope3Activity {
    pub fn quantity(&self, source: Scope3Source) -> f64 {
        match source {
            Scope3Source::AirTravel => self.air_travel,
            Scope3Source::RoadTravel => self.road_travel,
            Scope3Source::RailTravel => self.rail_travel,
            Scope3Source::Hotels => self.hotels,
            Scope3Source::Waste => self.waste,
            Scope3Source::Water => self.water,
            Scope3Source::Paper => self.paper,
        }
    }
}

/// Clamps a raw quantity to the valid domain: negative, NaN, and infinite
/// values all count as 0 so that no entry can corrupt a total.
pub fn sanitize_quantity(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw
    } else {
        0.0
    }
}

/// Deserializes a quantity that may arrive as a number or as free text.
/// Empty, non-numeric, and negative input all coerce to 0 rather than error,
/// matching the fail-soft contract of the form this data originates from.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawQuantity {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let raw = match RawQuantity::deserialize(deserializer)? {
        RawQuantity::Number(n) => n,
        RawQuantity::Text(s) => s.trim().parse().unwrap_or(0.0),
        RawQuantity::Other(_) => 0.0,
    };
    Ok(sanitize_quantity(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_rejects_negative_and_non_finite() {
        assert_eq!(sanitize_quantity(-5.0), 0.0);
        assert_eq!(sanitize_quantity(f64::NAN), 0.0);
        assert_eq!(sanitize_quantity(f64::INFINITY), 0.0);
        assert_eq!(sanitize_quantity(0.0), 0.0);
        assert_eq!(sanitize_quantity(12.5), 12.5);
    }

    #[test]
    fn quantities_coerce_from_free_text() {
        let parsed: Scope1Activity = serde_json::from_str(
            r#"{"diesel": "100", "petrol": "not a number", "naturalGas": -3, "coal": "12.5"}"#,
        )
        .unwrap();
        assert_eq!(parsed.diesel, 100.0);
        assert_eq!(parsed.petrol, 0.0);
        assert_eq!(parsed.natural_gas, 0.0);
        assert_eq!(parsed.lpg, 0.0);
        assert_eq!(parsed.coal, 12.5);
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let parsed: Scope3Activity = serde_json::from_str(r#"{"airTravel": 1000}"#).unwrap();
        assert_eq!(parsed.air_travel, 1000.0);
        assert_eq!(parsed.paper, 0.0);
    }

    #[test]
    fn source_keys_match_report_schema() {
        assert_eq!(Scope1Source::NaturalGas.key(), "naturalGas");
        assert_eq!(Scope3Source::AirTravel.key(), "airTravel");
        assert_eq!(Scope1Source::ALL.len(), 5);
        assert_eq!(Scope2Source::ALL.len(), 1);
        assert_eq!(Scope3Source::ALL.len(), 7);
    }
}
