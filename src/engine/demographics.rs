use serde::{Deserialize, Serialize};

use crate::constants::{URBAN_AREA_KM2, ZONE_FATALITY_RATES, ZONE_INJURY_MULTIPLIERS};

use super::zones::{DamageZones, Zone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCasualties {
    pub zone: Zone,
    pub deaths: u64,
    pub injuries: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanImpact {
    pub zones: [ZoneCasualties; 4],
    pub total_casualties: u64,
    pub total_injuries: u64,
    /// Every resident inside the mild-damage disc, harmed or not. Not capped
    /// at the city's population; large energies can push it past that.
    pub affected_population: u64,
}

/// Zone-scoped deaths and injuries from annular area times population
/// density. Injuries apply the per-zone multiplier to survivors only.
pub fn project(zones: &DamageZones, population: u64) -> HumanImpact {
    let density = population as f64 / URBAN_AREA_KM2;

    let mut per_zone = [ZoneCasualties {
        zone: Zone::Total,
        deaths: 0,
        injuries: 0,
    }; 4];
    let mut total_casualties = 0u64;
    let mut total_injuries = 0u64;

    for zone in Zone::ALL {
        let exposed = zones.area_km2(zone) * density;
        let fatality_rate = ZONE_FATALITY_RATES[zone.index()];
        let survival_rate = 1.0 - fatality_rate;

        let deaths = (exposed * fatality_rate).floor() as u64;
        let injuries =
            (exposed * survival_rate * ZONE_INJURY_MULTIPLIERS[zone.index()]).floor() as u64;

        per_zone[zone.index()] = ZoneCasualties {
            zone,
            deaths,
            injuries,
        };
        total_casualties += deaths;
        total_injuries += injuries;
    }

    let affected_population = (zones.total_area_km2() * density).floor() as u64;

    HumanImpact {
        zones: per_zone,
        total_casualties,
        total_injuries,
        affected_population,
    }
}
