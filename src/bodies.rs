//! Celestial body records
//!
//! Flat, serializable fact records for the Sun and the planets. Every text
//! attribute is a human-readable string; `moons` is the only numeric field.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Fact record for one planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Planet {
    pub name: &'static str,
    pub diameter: &'static str,
    pub distance_from_sun: &'static str,
    pub orbital_period: &'static str,
    pub day_length: &'static str,
    pub temperature: &'static str,
    pub moons: u32,
    pub description: &'static str,
}

/// Fact record for the Sun.
///
/// Carries stellar attributes (`type`, `mass`, temperatures, `age`,
/// `composition`) instead of the orbital ones a [`Planet`] has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sun {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub diameter: &'static str,
    pub mass: &'static str,
    pub surface_temperature: &'static str,
    pub core_temperature: &'static str,
    pub age: &'static str,
    pub composition: &'static str,
    pub description: &'static str,
}

/// Result of a planet lookup.
///
/// An unmatched identifier is not an error: it yields [`PlanetInfo::Empty`],
/// which serializes as `{}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetInfo {
    Known(&'static Planet),
    Empty,
}

impl PlanetInfo {
    pub fn is_empty(&self) -> bool {
        matches!(self, PlanetInfo::Empty)
    }

    pub fn record(&self) -> Option<&'static Planet> {
        match *self {
            PlanetInfo::Known(planet) => Some(planet),
            PlanetInfo::Empty => None,
        }
    }
}

impl From<Option<&'static Planet>> for PlanetInfo {
    fn from(found: Option<&'static Planet>) -> Self {
        found.map_or(PlanetInfo::Empty, PlanetInfo::Known)
    }
}

impl Serialize for PlanetInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PlanetInfo::Known(planet) => planet.serialize(serializer),
            PlanetInfo::Empty => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static TEST_BODY: Planet = Planet {
        name: "Testbody",
        diameter: "1 km",
        distance_from_sun: "2 km",
        orbital_period: "3 days",
        day_length: "4 hours",
        temperature: "5°C",
        moons: 6,
        description: "Test body.",
    };

    #[test]
    fn test_empty_serializes_as_empty_object() {
        let value = serde_json::to_value(PlanetInfo::Empty).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_known_serializes_flat() {
        let value = serde_json::to_value(PlanetInfo::Known(&TEST_BODY)).unwrap();
        assert_eq!(value["name"], "Testbody");
        assert_eq!(value["moons"], 6);
        assert_eq!(value.as_object().unwrap().len(), 8);
    }

    #[test]
    fn test_from_option() {
        assert!(PlanetInfo::from(None).is_empty());
        let info = PlanetInfo::from(Some(&TEST_BODY));
        assert_eq!(info.record().map(|p| p.name), Some("Testbody"));
    }

    #[test]
    fn test_sun_kind_renamed_to_type() {
        let sun = Sun {
            name: "Star",
            kind: "K-type",
            diameter: "",
            mass: "",
            surface_temperature: "",
            core_temperature: "",
            age: "",
            composition: "",
            description: "",
        };
        let value = serde_json::to_value(sun).unwrap();
        assert_eq!(value["type"], "K-type");
        assert!(value.get("kind").is_none());
    }
}
