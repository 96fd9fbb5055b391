use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Composition {
    Stony,
    Iron,
    Carbonaceous,
    #[serde(rename = "Stony-Iron")]
    StonyIron,
}

impl Composition {
    pub const ALL: [Composition; 4] = [
        Composition::Stony,
        Composition::Iron,
        Composition::Carbonaceous,
        Composition::StonyIron,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Composition::Stony => "Stony",
            Composition::Iron => "Iron",
            Composition::Carbonaceous => "Carbonaceous",
            Composition::StonyIron => "Stony-Iron",
        }
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
#[error("unknown composition '{0}'")]
pub struct ParseCompositionError(String);

impl FromStr for Composition {
    type Err = ParseCompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stony" => Ok(Composition::Stony),
            "iron" => Ok(Composition::Iron),
            "carbonaceous" => Ok(Composition::Carbonaceous),
            "stony-iron" | "stony iron" => Ok(Composition::StonyIron),
            other => Err(ParseCompositionError(other.to_string())),
        }
    }
}

/// Impactor parameters. `mass_kg` is the source of truth for the energy
/// calculation; diameter and density are provenance metadata and only feed
/// mass through [`Asteroid::from_diameter`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub diameter_km: f64,
    pub velocity_kmh: f64,
    pub mass_kg: f64,
    pub density_g_cm3: f64,
    pub composition: Composition,
}

impl Asteroid {
    pub fn from_diameter(
        diameter_km: f64,
        velocity_kmh: f64,
        density_g_cm3: f64,
        composition: Composition,
    ) -> Self {
        Self {
            diameter_km,
            velocity_kmh,
            mass_kg: mass_from_diameter(diameter_km, density_g_cm3),
            density_g_cm3,
            composition,
        }
    }
}

/// Sphere volume at the given density; radius in cm, grams converted to kg.
pub fn mass_from_diameter(diameter_km: f64, density_g_cm3: f64) -> f64 {
    let radius_cm = diameter_km * 1000.0 * 100.0 / 2.0;
    let volume_cm3 = 4.0 / 3.0 * PI * radius_cm.powi(3);
    volume_cm3 * density_g_cm3 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_follows_sphere_volume() {
        // 50 m stony impactor: r = 2500 cm, V = 4/3*pi*r^3, 3 g/cm^3
        let mass = mass_from_diameter(0.05, 3.0);
        let expected = 4.0 / 3.0 * PI * 2500.0_f64.powi(3) * 3.0 / 1000.0;
        assert!((mass - expected).abs() < 1e-3);
    }

    #[test]
    fn zero_diameter_gives_zero_mass() {
        assert_eq!(mass_from_diameter(0.0, 3.0), 0.0);
    }

    #[test]
    fn composition_round_trips_through_labels() {
        for composition in Composition::ALL {
            let parsed: Composition = composition.label().parse().unwrap();
            assert_eq!(parsed, composition);
        }
        assert!("basalt".parse::<Composition>().is_err());
    }
}
