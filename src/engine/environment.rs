use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BIRDS_PER_SEVERE_MILE, BURN_RADIUS_FACTOR, CHEMICAL_TONS_PER_SEVERE_MILE,
    CO2_MEGATONS_PER_MEGATON, CONTAMINATION_EXPOSURE_FACTOR, FOOD_CHAIN_RANGE_FACTOR,
    HAZARDOUS_AIR_RANGE_FACTOR, MAMMALS_PER_SEVERE_MILE, RESPIRATORY_AFFECTED_FACTOR,
    RESPIRATORY_DEATH_FRACTION, VEGETATION_LOSS_FRACTION,
};

use super::demographics::HumanImpact;
use super::physics::PhysicsSummary;
use super::zones::{km_to_miles, DamageZones, Zone};

/// Secondary ecological, atmospheric, and contamination estimates. Ranges are
/// in miles because they scale off the displayed zone radii; everything here
/// is narrative-facing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalEffects {
    pub hazardous_air_range_miles: f64,
    pub respiratory_affected: u64,
    pub respiratory_deaths: u64,
    pub burn_radius_miles: f64,
    pub burn_area_sq_miles: f64,
    pub vegetation_loss_sq_miles: f64,
    pub birds_killed: u64,
    pub mammals_killed: u64,
    pub food_chain_range_miles: f64,
    pub co2_released_megatons: f64,
    pub hazardous_chemicals_tons: u64,
    pub contamination_exposed: u64,
}

pub fn project(
    physics: &PhysicsSummary,
    zones: &DamageZones,
    human: &HumanImpact,
) -> EnvironmentalEffects {
    let severe_miles = km_to_miles(zones.radius_km(Zone::Severe));
    let mild_miles = km_to_miles(zones.radius_km(Zone::Mild));

    let burn_radius_miles = mild_miles * BURN_RADIUS_FACTOR;
    let burn_area_sq_miles = PI * burn_radius_miles * burn_radius_miles;
    let affected = human.affected_population as f64;

    EnvironmentalEffects {
        hazardous_air_range_miles: mild_miles * HAZARDOUS_AIR_RANGE_FACTOR,
        respiratory_affected: (affected * RESPIRATORY_AFFECTED_FACTOR).floor() as u64,
        respiratory_deaths: (human.total_casualties as f64 * RESPIRATORY_DEATH_FRACTION).floor()
            as u64,
        burn_radius_miles,
        burn_area_sq_miles,
        vegetation_loss_sq_miles: burn_area_sq_miles * VEGETATION_LOSS_FRACTION,
        birds_killed: (severe_miles * BIRDS_PER_SEVERE_MILE).floor() as u64,
        mammals_killed: (severe_miles * MAMMALS_PER_SEVERE_MILE).floor() as u64,
        food_chain_range_miles: mild_miles * FOOD_CHAIN_RANGE_FACTOR,
        co2_released_megatons: physics.energy_megatons * CO2_MEGATONS_PER_MEGATON,
        hazardous_chemicals_tons: (severe_miles * CHEMICAL_TONS_PER_SEVERE_MILE).floor() as u64,
        contamination_exposed: (affected * CONTAMINATION_EXPOSURE_FACTOR).floor() as u64,
    }
}
