use serde::{Deserialize, Serialize};

use crate::asteroid::Asteroid;
use crate::constants::{
    CRATER_COEFFICIENT, CRATER_EXPONENT, JOULES_PER_MEGATON, MAGNITUDE_OFFSET,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsSummary {
    pub energy_joules: f64,
    pub energy_megatons: f64,
    pub magnitude: f64,
    pub crater_diameter_m: f64,
}

impl PhysicsSummary {
    pub const ZERO: PhysicsSummary = PhysicsSummary {
        energy_joules: 0.0,
        energy_megatons: 0.0,
        magnitude: 0.0,
        crater_diameter_m: 0.0,
    };
}

/// Kinetic energy, TNT equivalent, magnitude analog, and crater estimate.
///
/// Non-positive mass or velocity zeroes the whole summary. The magnitude is
/// floored at zero: the log formula goes negative for small energies.
pub fn summarize(asteroid: &Asteroid) -> PhysicsSummary {
    if asteroid.mass_kg <= 0.0 || asteroid.velocity_kmh <= 0.0 {
        return PhysicsSummary::ZERO;
    }

    let velocity_ms = asteroid.velocity_kmh * 1000.0 / 3600.0;
    let energy_joules = 0.5 * asteroid.mass_kg * velocity_ms * velocity_ms;
    let energy_megatons = energy_joules / JOULES_PER_MEGATON;
    let magnitude = (2.0 / 3.0 * energy_joules.log10() - MAGNITUDE_OFFSET).max(0.0);
    let crater_diameter_m =
        CRATER_COEFFICIENT * (energy_megatons * 1000.0).powf(CRATER_EXPONENT) * 1000.0;

    PhysicsSummary {
        energy_joules,
        energy_megatons,
        magnitude,
        crater_diameter_m,
    }
}
