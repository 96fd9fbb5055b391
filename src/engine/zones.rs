use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::constants::{KM_TO_MILES, ZONE_EXPONENT, ZONE_RADIUS_COEFFICIENTS};

/// The four concentric damage zones, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Total,
    Severe,
    Moderate,
    Mild,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Total, Zone::Severe, Zone::Moderate, Zone::Mild];

    pub fn index(self) -> usize {
        match self {
            Zone::Total => 0,
            Zone::Severe => 1,
            Zone::Moderate => 2,
            Zone::Mild => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Zone::Total => "total destruction",
            Zone::Severe => "severe destruction",
            Zone::Moderate => "moderate damage",
            Zone::Mild => "mild damage",
        }
    }
}

/// One zone's outer radius and its annular footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneRing {
    pub zone: Zone,
    pub radius_km: f64,
    pub area_km2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageZones {
    pub rings: [ZoneRing; 4],
}

impl DamageZones {
    pub fn ring(&self, zone: Zone) -> &ZoneRing {
        &self.rings[zone.index()]
    }

    pub fn radius_km(&self, zone: Zone) -> f64 {
        self.rings[zone.index()].radius_km
    }

    pub fn area_km2(&self, zone: Zone) -> f64 {
        self.rings[zone.index()].area_km2
    }

    /// Footprint of all four zones together, i.e. the full mild-damage disc.
    pub fn total_area_km2(&self) -> f64 {
        self.rings.iter().map(|ring| ring.area_km2).sum()
    }
}

/// Radii scale with `energy^0.33`; areas are annuli between successive radii.
/// Energy is clamped at zero first: a fractional power of a negative base is
/// undefined.
pub fn from_energy(energy_megatons: f64) -> DamageZones {
    let base = energy_megatons.max(0.0).powf(ZONE_EXPONENT);

    let mut rings = [ZoneRing {
        zone: Zone::Total,
        radius_km: 0.0,
        area_km2: 0.0,
    }; 4];
    let mut inner_radius = 0.0;
    for zone in Zone::ALL {
        let radius_km = base * ZONE_RADIUS_COEFFICIENTS[zone.index()];
        let area_km2 = PI * (radius_km * radius_km - inner_radius * inner_radius);
        rings[zone.index()] = ZoneRing {
            zone,
            radius_km,
            area_km2,
        };
        inner_radius = radius_km;
    }

    DamageZones { rings }
}

pub fn km_to_miles(km: f64) -> f64 {
    km * KM_TO_MILES
}
