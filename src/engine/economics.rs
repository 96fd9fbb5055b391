use serde::{Deserialize, Serialize};

use crate::constants::{GDP_LOSS_FRACTION, ZONE_COST_MILLIONS_PER_KM2};

use super::zones::{DamageZones, Zone};

/// All amounts in billions of dollars. The billions/trillions display
/// threshold lives in the formatting layer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicImpact {
    pub infrastructure_damage_billions: f64,
    pub gdp_loss_billions: f64,
    pub total_damage_billions: f64,
}

pub fn project(zones: &DamageZones, gdp_billions: f64) -> EconomicImpact {
    let infra_millions: f64 = Zone::ALL
        .iter()
        .map(|zone| zones.area_km2(*zone) * ZONE_COST_MILLIONS_PER_KM2[zone.index()])
        .sum();
    let infrastructure_damage_billions = infra_millions / 1000.0;
    let gdp_loss_billions = gdp_billions.max(0.0) * GDP_LOSS_FRACTION;

    EconomicImpact {
        infrastructure_damage_billions,
        gdp_loss_billions,
        total_damage_billions: infrastructure_damage_billions + gdp_loss_billions,
    }
}
