//! Fixed catalog of Sun and planet facts
//!
//! The fact table is compiled in. The identifier index over it is built once,
//! on first access, and shared read-only by every request for the lifetime of
//! the process.
//!
//! ```text
//! "MARS" ──► to_lowercase ──► "mars" ──► index ──► PlanetInfo::Known(&MARS)
//! "pluto" ─► to_lowercase ──► "pluto" ─► index ──► PlanetInfo::Empty  ({})
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::bodies::{Planet, PlanetInfo, Sun};

// =============================================================================
// FACT TABLE
// =============================================================================

/// Planets in order from the Sun, keyed by lowercase identifier.
static PLANETS: [(&str, Planet); 8] = [
    (
        "mercury",
        Planet {
            name: "Mercury",
            diameter: "4,879 km",
            distance_from_sun: "57.9 million km",
            orbital_period: "88 Earth days",
            day_length: "59 Earth days",
            temperature: "-180°C to 430°C",
            moons: 0,
            description:
                "Mercury is the smallest planet in our solar system and closest to the Sun.",
        },
    ),
    (
        "venus",
        Planet {
            name: "Venus",
            diameter: "12,104 km",
            distance_from_sun: "108.2 million km",
            orbital_period: "225 Earth days",
            day_length: "243 Earth days",
            temperature: "465°C (average)",
            moons: 0,
            description:
                "Venus is the hottest planet in our solar system due to its thick atmosphere.",
        },
    ),
    (
        "earth",
        Planet {
            name: "Earth",
            diameter: "12,742 km",
            distance_from_sun: "149.6 million km",
            orbital_period: "365.25 days",
            day_length: "24 hours",
            temperature: "15°C (average)",
            moons: 1,
            description: "Earth is the only planet known to support life.",
        },
    ),
    (
        "mars",
        Planet {
            name: "Mars",
            diameter: "6,779 km",
            distance_from_sun: "227.9 million km",
            orbital_period: "687 Earth days",
            day_length: "24.6 hours",
            temperature: "-65°C (average)",
            moons: 2,
            description: "Mars is known as the Red Planet due to iron oxide on its surface.",
        },
    ),
    (
        "jupiter",
        Planet {
            name: "Jupiter",
            diameter: "139,820 km",
            distance_from_sun: "778.5 million km",
            orbital_period: "11.86 Earth years",
            day_length: "9.93 hours",
            temperature: "-110°C (cloud top)",
            moons: 95,
            description:
                "Jupiter is the largest planet in our solar system with the famous Great Red Spot.",
        },
    ),
    (
        "saturn",
        Planet {
            name: "Saturn",
            diameter: "116,460 km",
            distance_from_sun: "1.4 billion km",
            orbital_period: "29.46 Earth years",
            day_length: "10.7 hours",
            temperature: "-140°C (cloud top)",
            moons: 146,
            description: "Saturn is famous for its stunning ring system made of ice and rock.",
        },
    ),
    (
        "uranus",
        Planet {
            name: "Uranus",
            diameter: "50,724 km",
            distance_from_sun: "2.9 billion km",
            orbital_period: "84 Earth years",
            day_length: "17.2 hours",
            temperature: "-195°C (cloud top)",
            moons: 28,
            description:
                "Uranus rotates on its side, possibly due to a collision with an Earth-sized object.",
        },
    ),
    (
        "neptune",
        Planet {
            name: "Neptune",
            diameter: "49,244 km",
            distance_from_sun: "4.5 billion km",
            orbital_period: "164.8 Earth years",
            day_length: "16.1 hours",
            temperature: "-200°C (cloud top)",
            moons: 16,
            description:
                "Neptune has the strongest winds in the solar system, reaching 2,100 km/h.",
        },
    ),
];

static SUN: Sun = Sun {
    name: "Sun",
    kind: "G-type main-sequence star",
    diameter: "1,392,700 km",
    mass: "1.989 × 10³⁰ kg",
    surface_temperature: "5,500°C",
    core_temperature: "15 million°C",
    age: "4.6 billion years",
    composition: "73% Hydrogen, 25% Helium",
    description: "The Sun is the star at the center of our Solar System. \
                  It provides the energy that sustains life on Earth.",
};

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

// =============================================================================
// CATALOG
// =============================================================================

/// Immutable lookup table over the fact records.
#[derive(Debug)]
pub struct Catalog {
    planets: HashMap<&'static str, &'static Planet>,
    sun: &'static Sun,
}

impl Catalog {
    fn build() -> Self {
        let planets = PLANETS.iter().map(|(id, planet)| (*id, planet)).collect();
        tracing::debug!("Planet catalog initialized");
        Self {
            planets,
            sun: &SUN,
        }
    }

    /// The process-wide catalog.
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    /// Look up a planet by identifier, ignoring case.
    ///
    /// Only exact identifiers match; anything else returns
    /// [`PlanetInfo::Empty`].
    pub fn planet(&self, identifier: &str) -> PlanetInfo {
        let key = identifier.to_lowercase();
        let info = PlanetInfo::from(self.planets.get(key.as_str()).copied());
        if info.is_empty() {
            tracing::debug!("No planet matches identifier {:?}", identifier);
        } else {
            tracing::debug!("Resolved planet {}", key);
        }
        info
    }

    pub fn sun(&self) -> &'static Sun {
        self.sun
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Known identifiers, innermost planet first.
    pub fn planet_ids(&self) -> impl Iterator<Item = &'static str> {
        PLANETS.iter().map(|(id, _)| *id)
    }
}

/// Look up a planet in the global catalog.
pub fn get_planet(identifier: &str) -> PlanetInfo {
    Catalog::global().planet(identifier)
}

/// The Sun record from the global catalog.
pub fn get_sun() -> &'static Sun {
    Catalog::global().sun()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CANONICAL: [&str; 8] = [
        "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
    ];

    #[test]
    fn test_catalog_has_exactly_eight_planets() {
        let catalog = Catalog::global();
        assert_eq!(catalog.len(), 8);
        assert!(!catalog.is_empty());
        assert_eq!(
            catalog.planet_ids().collect::<Vec<_>>(),
            vec!["mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune"]
        );
    }

    #[test]
    fn test_every_planet_resolves_case_insensitively() {
        for (id, name) in Catalog::global().planet_ids().zip(CANONICAL) {
            for variant in [id.to_string(), id.to_uppercase(), name.to_string()] {
                let planet = get_planet(&variant)
                    .record()
                    .unwrap_or_else(|| panic!("{variant} should resolve"));
                assert_eq!(planet.name, name);
            }
        }
    }

    #[test]
    fn test_mixed_case() {
        assert_eq!(get_planet("eArTh").record().map(|p| p.name), Some("Earth"));
    }

    #[test]
    fn test_unknown_identifiers_are_empty() {
        for id in ["pluto", "", "xyz123", "terra", "mar", "mars ", " earth", "sun"] {
            assert_eq!(get_planet(id), PlanetInfo::Empty, "{id:?} should be empty");
        }
    }

    #[test]
    fn test_mars_record() {
        let value = serde_json::to_value(get_planet("Mars")).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Mars",
                "diameter": "6,779 km",
                "distance_from_sun": "227.9 million km",
                "orbital_period": "687 Earth days",
                "day_length": "24.6 hours",
                "temperature": "-65°C (average)",
                "moons": 2,
                "description": "Mars is known as the Red Planet due to iron oxide on its surface."
            })
        );
    }

    #[test]
    fn test_pluto_is_empty_object() {
        assert_eq!(serde_json::to_value(get_planet("pluto")).unwrap(), json!({}));
    }

    #[test]
    fn test_sun_record() {
        let value = serde_json::to_value(get_sun()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Sun",
                "type": "G-type main-sequence star",
                "diameter": "1,392,700 km",
                "mass": "1.989 × 10³⁰ kg",
                "surface_temperature": "5,500°C",
                "core_temperature": "15 million°C",
                "age": "4.6 billion years",
                "composition": "73% Hydrogen, 25% Helium",
                "description": "The Sun is the star at the center of our Solar System. It provides the energy that sustains life on Earth."
            })
        );
    }

    #[test]
    fn test_sun_is_stable_across_calls() {
        let first = get_sun();
        let second = get_sun();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_lookups_return_the_same_record() {
        let a = get_planet("jupiter").record().unwrap();
        let b = get_planet("JUPITER").record().unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.moons, 95);
    }
}
